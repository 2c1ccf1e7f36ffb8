//! Tooltip support for medical terms.
//!
//! [`annotate`] splits text into plain runs and dictionary terms so a renderer can wrap each
//! term in a tooltip trigger. [`TooltipState`] tracks whether a single tooltip is showing.

use crate::plain_language::{MedicalTerm, PlainLanguageDictionary};

/// A run of annotated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'t, 'd> {
    Text(&'t str),
    Term {
        /// The term as written in the source text.
        text: &'t str,
        entry: &'d MedicalTerm,
    },
}

impl<'t> Segment<'t, '_> {
    /// The source text covered by this segment.
    pub fn as_str(&self) -> &'t str {
        match *self {
            Segment::Text(text) | Segment::Term { text, .. } => text,
        }
    }

    /// Tooltip body for a term segment: simplified form, then description.
    pub fn tooltip(&self) -> Option<String> {
        match self {
            Segment::Text(_) => None,
            Segment::Term { entry, .. } if entry.description.is_empty() => {
                Some(entry.simplified_form.clone())
            }
            Segment::Term { entry, .. } => Some(format!(
                "{}: {}",
                entry.simplified_form, entry.description
            )),
        }
    }
}

/// Split `text` into plain and term segments.
///
/// Concatenating every segment's [`Segment::as_str`] yields the input exactly. Empty plain
/// runs are omitted.
pub fn annotate<'t, 'd>(
    dictionary: &'d PlainLanguageDictionary,
    text: &'t str,
) -> Vec<Segment<'t, 'd>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in dictionary.find_matches(text) {
        if m.start > cursor {
            segments.push(Segment::Text(&text[cursor..m.start]));
        }
        segments.push(Segment::Term {
            text: m.text,
            entry: m.entry,
        });
        cursor = m.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }

    segments
}

/// Visibility of one tooltip. Hidden until shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    visible: bool,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer enter or focus.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Pointer leave or blur.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Tap or click.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Escape dismisses an open tooltip. Returns whether the key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.visible {
            self.visible = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plain_language::TermCategory;

    #[test]
    fn annotate_covers_the_whole_input() {
        let dict = PlainLanguageDictionary::builtin();
        let text = "Your A1C is up; keep taking Metformin.";
        let segments = annotate(dict, text);

        let rebuilt: String = segments.iter().map(Segment::as_str).collect();
        assert_eq!(rebuilt, text);

        let terms: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Term { text, .. } => Some(*text),
                Segment::Text(_) => None,
            })
            .collect();
        assert_eq!(terms, vec!["A1C", "Metformin"]);
    }

    #[test]
    fn annotate_without_terms_is_one_text_segment() {
        let dict = PlainLanguageDictionary::builtin();
        assert_eq!(annotate(dict, "hello"), vec![Segment::Text("hello")]);
        assert!(annotate(dict, "").is_empty());
    }

    #[test]
    fn term_at_start_and_end_has_no_empty_runs() {
        let dict = PlainLanguageDictionary::new(vec![MedicalTerm::new(
            "edema",
            "Swelling",
            "",
            TermCategory::Condition,
        )]);
        let segments = annotate(&dict, "Edema");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tooltip().as_deref(), Some("Swelling"));
    }

    #[test]
    fn tooltip_text_includes_description() {
        let dict = PlainLanguageDictionary::builtin();
        let segments = annotate(dict, "dyspnea");
        assert_eq!(
            segments[0].tooltip().as_deref(),
            Some("Shortness of breath: Feeling like you cannot get enough air.")
        );
        assert_eq!(Segment::Text("x").tooltip(), None);
    }

    #[test]
    fn tooltip_visibility_transitions() {
        let mut state = TooltipState::new();
        assert!(!state.is_visible());

        state.show();
        assert!(state.is_visible());
        assert!(state.handle_key("Escape"));
        assert!(!state.is_visible());
        assert!(!state.handle_key("Escape"));

        state.toggle();
        assert!(state.is_visible());
        assert!(!state.handle_key("Enter"));
        state.hide();
        assert!(!state.is_visible());
    }
}
