//! Single-slot message dialog
//!
//! At most one dialog is visible. Opening a new one replaces whatever
//! was shown; there is no queue and no stacking (unlike `ModalStack`).

/// Title plus ordered message lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl DialogContent {
    pub fn new<T, I, L>(title: T, lines: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Shown whenever the search box is submitted, whatever it contains
    pub fn search_interrupted() -> Self {
        Self::new(
            "Search Interrupted",
            ["There seems to be something keeping you here..."],
        )
    }

    pub fn contact_agent() -> Self {
        Self::new(
            "Contact E. Wharton",
            [
                "Email: ewharton@starkfieldrealty.edu",
                "\"I have chosen my path, and I shall walk it until the end.\"",
            ],
        )
    }

    pub fn schedule_viewing() -> Self {
        Self::new(
            "Schedule a Viewing",
            [
                "Available times:",
                "• Mondays at dawn (before hope fades)",
                "• Wednesdays at dusk (when shadows lengthen)",
                "• Fridays in the perpetual gloom",
                "Please bring your own source of warmth.",
            ],
        )
    }

    pub fn payment_breakdown() -> Self {
        Self::new(
            "Payment Breakdown",
            [
                "Principal: Your dreams ($0)",
                "Interest: Compounding despair (infinite)",
                "Insurance: Against hope (futile)",
                "Taxes: On your soul (annual)",
                "Monthly Total: Your dignity + all accumulated regrets",
                "*Rates subject to change based on winter severity.",
            ],
        )
    }
}

#[derive(Debug, Default)]
pub struct DialogSlot {
    current: Option<DialogContent>,
}

impl DialogSlot {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show `content`, replacing any dialog already visible
    pub fn open(&mut self, content: DialogContent) {
        self.current = Some(content);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&DialogContent> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_empty() {
        let slot = DialogSlot::new();
        assert!(!slot.is_visible());
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_open_replaces_previous_content() {
        let mut slot = DialogSlot::new();
        slot.open(DialogContent::contact_agent());
        slot.open(DialogContent::payment_breakdown());

        let shown = slot.current().unwrap();
        assert_eq!(shown, &DialogContent::payment_breakdown());
        assert_eq!(shown.lines.len(), 6);
        assert!(!shown.lines.iter().any(|l| l.starts_with("Email:")));
    }

    #[test]
    fn test_close_clears_slot() {
        let mut slot = DialogSlot::new();
        slot.open(DialogContent::schedule_viewing());
        slot.close();
        assert!(!slot.is_visible());
    }

    #[test]
    fn test_canned_titles() {
        assert_eq!(DialogContent::search_interrupted().title, "Search Interrupted");
        assert_eq!(DialogContent::contact_agent().title, "Contact E. Wharton");
        assert_eq!(DialogContent::schedule_viewing().lines[0], "Available times:");
    }
}
