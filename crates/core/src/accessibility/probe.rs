/// One-time environment probes, the equivalent of the `prefers-reduced-motion` and
/// `prefers-contrast` media queries.
///
/// Probes are consulted only when settings are first loaded and only for preferences the
/// stored record leaves unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
}
