use serde::Serialize;

/// Classification attached to a log entry when it is parsed.
///
/// The category of the interval *ending* at an entry is taken from that
/// entry's kind: a Slack entry closes a slack interval, a DayStart entry
/// closes no interval at all.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Slack,
    DayStart,
}

impl EntryKind {
    /// Derive the kind from the raw message text.
    ///
    /// Day start: the message equals "arrived" once spaces, newlines and
    /// periods are removed, case-insensitively.
    /// Slack: the message ends with "**" once spaces and newlines are removed.
    pub fn classify(message: &str) -> Self {
        let squeezed: String = message
            .chars()
            .filter(|c| !matches!(c, ' ' | '\n' | '.'))
            .collect();
        if squeezed.eq_ignore_ascii_case("arrived") {
            return EntryKind::DayStart;
        }

        let trimmed: String = message
            .chars()
            .filter(|c| !matches!(c, ' ' | '\n'))
            .collect();
        if trimmed.ends_with("**") {
            return EntryKind::Slack;
        }

        EntryKind::Work
    }

    pub fn is_day_start(&self) -> bool {
        matches!(self, EntryKind::DayStart)
    }

    pub fn is_slack(&self) -> bool {
        matches!(self, EntryKind::Slack)
    }
}
