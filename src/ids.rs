use std::time::{SystemTime, UNIX_EPOCH};

/// Owned unique-id counter.
///
/// Produces `<prefix>-<stamp>-<n>` where `n` starts at 1 and only grows.
/// Each generating component owns its own sequence, so there is no
/// process-wide counter.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: String,
    stamp: u128,
    counter: u64,
}

impl IdSequence {
    /// Stamp is the current Unix time in milliseconds.
    pub fn new(prefix: impl Into<String>) -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self::with_stamp(prefix, stamp)
    }

    pub fn with_stamp(prefix: impl Into<String>, stamp: u128) -> Self {
        Self {
            prefix: prefix.into(),
            stamp,
            counter: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}-{}", self.prefix, self.stamp, self.counter)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_and_increment() {
        let mut ids = IdSequence::with_stamp("badge", 42);
        assert_eq!(ids.next_id(), "badge-42-1");
        assert_eq!(ids.next_id(), "badge-42-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = IdSequence::new("brief");
        let seen: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 100);
        assert!(seen.iter().all(|id| id.starts_with("brief-")));
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = IdSequence::with_stamp("a", 1);
        let mut b = IdSequence::with_stamp("b", 1);
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), "b-1-1");
        assert_eq!(a.issued(), 2);
    }
}
