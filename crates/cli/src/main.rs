use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use careorbit_client::{CareOrbitClient, ClientConfig, API_URL_ENV};
use careorbit_core::constants::{
    PREFERS_HIGH_CONTRAST_ENV, PREFERS_REDUCED_MOTION_ENV, SETTINGS_PATH_ENV,
};
use careorbit_core::{CoreConfig, CoreResult, Preference, TermCategory};

mod api;
mod local;

#[derive(Parser)]
#[command(name = "careorbit")]
#[command(about = "CareOrbit patient companion CLI")]
struct Cli {
    /// API origin (overrides CAREORBIT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Accessibility settings file (overrides CAREORBIT_SETTINGS_PATH)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the CareOrbit service
    Health,
    /// Patient records
    #[command(subcommand)]
    Patients(PatientCommands),
    /// Medications
    #[command(subcommand)]
    Medications(MedicationCommands),
    /// Appointments
    #[command(subcommand)]
    Appointments(AppointmentCommands),
    /// Care gaps
    #[command(subcommand)]
    CareGaps(CareGapCommands),
    /// Chat with the care team assistant
    #[command(subcommand)]
    Chat(ChatCommands),
    /// Plain-language medical dictionary
    #[command(subcommand)]
    Terms(TermCommands),
    /// Accessibility settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
enum PatientCommands {
    /// List all patients
    List,
    /// Show one patient
    Show { patient_id: String },
    /// Show a patient's health summary
    Summary { patient_id: String },
    /// Create a patient
    Create(CreatePatientArgs),
}

#[derive(Args)]
struct CreatePatientArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    date_of_birth: NaiveDate,
    #[arg(long)]
    gender: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Repeat for each condition
    #[arg(long = "condition")]
    conditions: Vec<String>,
    /// Repeat for each allergy
    #[arg(long = "allergy")]
    allergies: Vec<String>,
}

#[derive(Subcommand)]
enum MedicationCommands {
    /// List a patient's medications
    List {
        patient_id: String,
        #[arg(long)]
        active_only: bool,
    },
    /// Record a medication
    Create(CreateMedicationArgs),
}

#[derive(Args)]
struct CreateMedicationArgs {
    #[arg(long)]
    patient_id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    dosage: String,
    #[arg(long)]
    frequency: String,
    #[arg(long)]
    prescriber: String,
    #[arg(long)]
    specialty: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: NaiveDate,
    #[arg(long)]
    instructions: Option<String>,
}

#[derive(Subcommand)]
enum AppointmentCommands {
    /// List a patient's appointments
    List {
        patient_id: String,
        #[arg(long)]
        upcoming_only: bool,
    },
    /// Book an appointment
    Create(CreateAppointmentArgs),
}

#[derive(Args)]
struct CreateAppointmentArgs {
    #[arg(long)]
    patient_id: String,
    #[arg(long)]
    provider_name: String,
    #[arg(long)]
    specialty: String,
    #[arg(long)]
    facility: String,
    /// Date and time (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    date: NaiveDateTime,
    #[arg(long, default_value_t = 30)]
    duration_minutes: u32,
    #[arg(long)]
    reason: String,
    #[arg(long)]
    telehealth: bool,
}

#[derive(Subcommand)]
enum CareGapCommands {
    /// List a patient's care gaps
    List {
        patient_id: String,
        #[arg(long)]
        include_resolved: bool,
    },
    /// Mark a care gap resolved
    Resolve { gap_id: String },
}

#[derive(Subcommand)]
enum ChatCommands {
    /// Send a message
    Send { patient_id: String, message: String },
    /// Show recent messages
    History {
        patient_id: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum TermCommands {
    /// Plain-language form of a term
    Lookup { term: String },
    /// Rewrite text in plain language
    Simplify { text: String },
    /// List the dictionary terms found in text
    Detect { text: String },
    /// List dictionary entries
    List {
        #[arg(long)]
        category: Option<TermCategory>,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current settings
    Show,
    /// Set a preference on or off
    Set { preference: Preference, value: String },
    /// Flip a preference
    Toggle { preference: Preference },
    /// Set the font scale
    FontSize { value: f32 },
    /// Restore defaults
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careorbit=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'careorbit --help' for commands");
        return Ok(());
    };

    match command {
        Commands::Terms(cmd) => local::run_terms(cmd),
        Commands::Settings(cmd) => local::run_settings(&core_config(cli.settings)?, cmd),
        Commands::Health => api::health(&connect(cli.api_url)?).await,
        Commands::Patients(cmd) => api::patients(&connect(cli.api_url)?, cmd).await,
        Commands::Medications(cmd) => api::medications(&connect(cli.api_url)?, cmd).await,
        Commands::Appointments(cmd) => api::appointments(&connect(cli.api_url)?, cmd).await,
        Commands::CareGaps(cmd) => {
            let simple = local::prefers_simple_language(core_config(cli.settings));
            api::care_gaps(&connect(cli.api_url)?, simple, cmd).await
        }
        Commands::Chat(cmd) => {
            let simple = local::prefers_simple_language(core_config(cli.settings));
            api::chat(&connect(cli.api_url)?, simple, cmd).await
        }
    }
}

/// Resolve settings config from the `--settings` flag and the environment.
fn core_config(settings: Option<String>) -> CoreResult<CoreConfig> {
    CoreConfig::from_env_values(
        settings.or_else(|| std::env::var(SETTINGS_PATH_ENV).ok()),
        std::env::var(PREFERS_REDUCED_MOTION_ENV).ok(),
        std::env::var(PREFERS_HIGH_CONTRAST_ENV).ok(),
    )
}

/// Build a client from the `--api-url` flag, then `CAREORBIT_API_URL`, then the default.
fn connect(api_url: Option<String>) -> anyhow::Result<CareOrbitClient> {
    let config = ClientConfig::from_env_value(api_url.or_else(|| std::env::var(API_URL_ENV).ok()))?;
    tracing::debug!("using CareOrbit API at {}", config.base_url());
    Ok(CareOrbitClient::new(config)?)
}
