//! Time and identity collaborators.
//!
//! Every entity id and every date label in the workspace is drawn from these
//! two traits so that tests can replay a session deterministically.

use chrono::{DateTime, Utc};

use crate::constants::{DEFAULT_ID_START, FOLDER_DATE_FORMAT, SHORT_DATE_FORMAT};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant. Used by tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of fresh entity ids. Ids must be strictly increasing for the
/// lifetime of the source.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Monotonic counter.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(DEFAULT_ID_START)
    }
}

impl IdSource for IdSequence {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Short folder label, e.g. `"Oct 24"`.
pub fn folder_date_label(at: DateTime<Utc>) -> String {
    at.format(FOLDER_DATE_FORMAT).to_string()
}

/// Numeric date label used for comments and archive entries.
pub fn short_date_label(at: DateTime<Utc>) -> String {
    at.format(SHORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut ids = IdSequence::starting_at(5);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.next_id(), 6);
        assert_eq!(ids.next_id(), 7);
    }

    #[test]
    fn test_default_sequence_starts_above_seed_ids() {
        let mut ids = IdSequence::default();
        assert_eq!(ids.next_id(), DEFAULT_ID_START);
    }

    #[test]
    fn test_labels() {
        let at = Utc.with_ymd_and_hms(2024, 10, 24, 9, 30, 0).unwrap();
        assert_eq!(folder_date_label(at), "Oct 24");
        assert_eq!(short_date_label(at), "10/24/2024");
        assert_eq!(FixedClock(at).now(), at);
    }
}
