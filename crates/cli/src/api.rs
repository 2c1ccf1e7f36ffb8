//! Commands backed by the CareOrbit service.

use careorbit_client::CareOrbitClient;
use careorbit_core::plain_language;
use careorbit_types::{AppointmentCreate, ChatRequest, MedicationCreate, PatientCreate};

use crate::local::print_json;
use crate::{
    AppointmentCommands, CareGapCommands, ChatCommands, MedicationCommands, PatientCommands,
};

pub async fn health(client: &CareOrbitClient) -> anyhow::Result<()> {
    let status = client.health().await?;
    if !status.is_healthy() {
        tracing::warn!("CareOrbit service reports status '{}'", status.status);
    }
    print_json(&status)
}

pub async fn patients(client: &CareOrbitClient, cmd: PatientCommands) -> anyhow::Result<()> {
    match cmd {
        PatientCommands::List => {
            let patients = client.list_patients().await?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {}, Born: {}",
                        patient.id,
                        patient.display_name(),
                        patient.date_of_birth
                    );
                }
            }
            Ok(())
        }
        PatientCommands::Show { patient_id } => print_json(&client.get_patient(&patient_id).await?),
        PatientCommands::Summary { patient_id } => {
            print_json(&client.patient_summary(&patient_id).await?)
        }
        PatientCommands::Create(args) => {
            let request = PatientCreate {
                first_name: args.first_name,
                last_name: args.last_name,
                date_of_birth: args.date_of_birth,
                gender: args.gender,
                email: args.email,
                phone: args.phone,
                conditions: args.conditions,
                allergies: args.allergies,
            };
            let patient = client.create_patient(&request).await?;
            tracing::info!("created patient {}", patient.id);
            print_json(&patient)
        }
    }
}

pub async fn medications(
    client: &CareOrbitClient,
    cmd: MedicationCommands,
) -> anyhow::Result<()> {
    match cmd {
        MedicationCommands::List {
            patient_id,
            active_only,
        } => print_json(&client.medications(&patient_id, active_only).await?),
        MedicationCommands::Create(args) => {
            let request = MedicationCreate {
                patient_id: args.patient_id,
                name: args.name,
                dosage: args.dosage,
                frequency: args.frequency,
                prescriber: args.prescriber,
                specialty: args.specialty,
                start_date: args.start_date,
                instructions: args.instructions,
            };
            print_json(&client.create_medication(&request).await?)
        }
    }
}

pub async fn appointments(
    client: &CareOrbitClient,
    cmd: AppointmentCommands,
) -> anyhow::Result<()> {
    match cmd {
        AppointmentCommands::List {
            patient_id,
            upcoming_only,
        } => print_json(&client.appointments(&patient_id, upcoming_only).await?),
        AppointmentCommands::Create(args) => {
            let request = AppointmentCreate {
                patient_id: args.patient_id,
                provider_name: args.provider_name,
                specialty: args.specialty,
                facility: args.facility,
                appointment_date: args.date,
                duration_minutes: args.duration_minutes,
                reason: args.reason,
                telehealth: args.telehealth,
            };
            print_json(&client.create_appointment(&request).await?)
        }
    }
}

pub async fn care_gaps(
    client: &CareOrbitClient,
    simple_language: bool,
    cmd: CareGapCommands,
) -> anyhow::Result<()> {
    match cmd {
        CareGapCommands::List {
            patient_id,
            include_resolved,
        } => {
            let mut gaps = client.care_gaps(&patient_id, include_resolved).await?;
            if simple_language {
                for gap in &mut gaps {
                    gap.description = plain_language::simplify(&gap.description).into_owned();
                    gap.recommended_action =
                        plain_language::simplify(&gap.recommended_action).into_owned();
                }
            }
            print_json(&gaps)
        }
        CareGapCommands::Resolve { gap_id } => {
            print_json(&client.resolve_care_gap(&gap_id).await?)
        }
    }
}

pub async fn chat(
    client: &CareOrbitClient,
    simple_language: bool,
    cmd: ChatCommands,
) -> anyhow::Result<()> {
    match cmd {
        ChatCommands::Send {
            patient_id,
            message,
        } => {
            let result = client.chat(&ChatRequest::new(patient_id, message)).await?;
            let answer = if simple_language {
                plain_language::simplify(&result.primary_response)
            } else {
                result.primary_response.as_str().into()
            };
            println!("{answer}");

            for contribution in &result.agent_contributions {
                tracing::info!(
                    "{} (confidence {:.2})",
                    contribution.agent_name,
                    contribution.confidence
                );
            }
            for alert in &result.medication_alerts {
                println!("! {alert}");
            }
            for gap in &result.care_gaps_detected {
                println!("- {} [{:?}]", gap.title, gap.severity);
            }
            Ok(())
        }
        ChatCommands::History { patient_id, limit } => {
            let history = client.chat_history(&patient_id, limit).await?;
            for message in history {
                println!("[{}] {}: {}", message.timestamp, message.role, message.content);
            }
            Ok(())
        }
    }
}
