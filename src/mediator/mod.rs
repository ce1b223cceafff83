//! Mediator pattern: disciplines publish updates through one coordinator
//! instead of talking to each other directly.

pub mod channels;

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

pub use channels::{ChannelBrief, Discipline, UpdateTemplate, CHANNEL_BRIEFS};

use crate::config::MediatorConfig;
use crate::error::Result;
use crate::ids::IdSequence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediatorLogEntry {
    pub id: String,
    pub from: Discipline,
    pub summary: &'static str,
    pub routed_to: Vec<Discipline>,
    pub nudge: &'static str,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

#[derive(Debug)]
pub struct LaunchMediator {
    last_message: BTreeMap<Discipline, &'static str>,
    history: VecDeque<MediatorLogEntry>,
    history_limit: usize,
    ids: IdSequence,
}

impl Default for LaunchMediator {
    fn default() -> Self {
        Self::from_parts(MediatorConfig::default(), IdSequence::new("mediator-log"))
    }
}

impl LaunchMediator {
    pub fn new(config: MediatorConfig) -> Result<Self> {
        Self::with_ids(config, IdSequence::new("mediator-log"))
    }

    pub fn with_ids(config: MediatorConfig, ids: IdSequence) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, ids))
    }

    fn from_parts(config: MediatorConfig, ids: IdSequence) -> Self {
        let last_message = CHANNEL_BRIEFS
            .iter()
            .map(|brief| (brief.id, brief.summary))
            .collect();

        Self {
            last_message,
            history: VecDeque::new(),
            history_limit: config.history_limit,
            ids,
        }
    }

    pub fn dispatch<R: Rng + ?Sized>(&mut self, from: Discipline, rng: &mut R) -> MediatorLogEntry {
        self.dispatch_at(from, rng, Utc::now())
    }

    pub fn dispatch_at<R: Rng + ?Sized>(
        &mut self,
        from: Discipline,
        rng: &mut R,
        at: DateTime<Utc>,
    ) -> MediatorLogEntry {
        let options = from.templates();
        let template = &options[rng.gen_range(0..options.len())];
        self.last_message.insert(from, template.summary);

        let entry = MediatorLogEntry {
            id: self.ids.next_id(),
            from,
            summary: template.summary,
            routed_to: template.routed_to.to_vec(),
            nudge: template.nudge,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        debug!(from = %from, routed_to = ?entry.routed_to, "update dispatched");

        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(entry.clone());
        entry
    }

    /// Copy of the latest message per channel.
    pub fn channel_snapshot(&self) -> BTreeMap<Discipline, String> {
        self.last_message
            .iter()
            .map(|(discipline, message)| (*discipline, message.to_string()))
            .collect()
    }

    pub fn history(&self) -> impl Iterator<Item = &MediatorLogEntry> {
        self.history.iter()
    }

    /// Entries whose recipients include `discipline`.
    pub fn inbox(&self, discipline: Discipline) -> Vec<&MediatorLogEntry> {
        self.history
            .iter()
            .filter(|entry| entry.routed_to.contains(&discipline))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mediator(limit: usize) -> LaunchMediator {
        LaunchMediator::with_ids(
            MediatorConfig { history_limit: limit },
            IdSequence::with_stamp("mediator-log", 7),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_snapshot_matches_briefs() {
        let snapshot = LaunchMediator::default().channel_snapshot();
        assert_eq!(snapshot.len(), 5);
        for brief in &CHANNEL_BRIEFS {
            assert_eq!(snapshot[&brief.id], brief.summary);
        }
    }

    #[test]
    fn test_dispatch_updates_only_sender() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut m = mediator(10);
        let before = m.channel_snapshot();

        let entry = m.dispatch(Discipline::Design, &mut rng);
        let after = m.channel_snapshot();

        assert_eq!(after[&Discipline::Design], entry.summary);
        assert!(Discipline::Design
            .templates()
            .iter()
            .any(|t| t.summary == entry.summary));
        for discipline in Discipline::ALL.into_iter().filter(|d| *d != Discipline::Design) {
            assert_eq!(after[&discipline], before[&discipline]);
        }
    }

    #[test]
    fn test_entry_fields() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut m = mediator(10);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let entry = m.dispatch_at(Discipline::Qa, &mut rng, at);
        assert_eq!(entry.id, "mediator-log-7-1");
        assert_eq!(entry.from, Discipline::Qa);
        assert_eq!(entry.timestamp, "2024-05-01T09:30:00.000Z");
        assert!(!entry.routed_to.contains(&Discipline::Qa));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let m = mediator(10);
        let mut snapshot = m.channel_snapshot();
        snapshot.insert(Discipline::Research, "changed".to_string());
        assert_ne!(m.channel_snapshot()[&Discipline::Research], "changed");
    }

    #[test]
    fn test_history_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut m = mediator(3);
        for _ in 0..5 {
            m.dispatch(Discipline::Engineering, &mut rng);
        }
        let ids: Vec<&str> = m.history().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["mediator-log-7-3", "mediator-log-7-4", "mediator-log-7-5"]);
    }

    #[test]
    fn test_inbox() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut m = mediator(20);
        // Both QA templates route to Engineering.
        m.dispatch(Discipline::Qa, &mut rng);
        m.dispatch(Discipline::Marketing, &mut rng);

        let qa_inbox = m.inbox(Discipline::Qa);
        assert!(qa_inbox.iter().all(|e| e.from != Discipline::Qa));
        let engineering = m.inbox(Discipline::Engineering);
        assert!(engineering.iter().any(|e| e.from == Discipline::Qa));
    }

    #[test]
    fn test_zero_history_rejected() {
        assert!(LaunchMediator::new(MediatorConfig { history_limit: 0 }).is_err());
    }

    #[test]
    fn test_oversized_history_rejected() {
        let config = MediatorConfig {
            history_limit: usize::MAX / 2,
        };
        assert!(LaunchMediator::new(config).is_err());
    }

    #[test]
    fn test_largest_history_allocates_lazily() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut m = mediator(crate::config::MAX_HISTORY_LIMIT);
        m.dispatch(Discipline::Design, &mut rng);
        assert_eq!(m.history().count(), 1);
    }

    #[test]
    fn test_entry_json() {
        let mut rng = StdRng::seed_from_u64(5);
        let entry = mediator(1).dispatch(Discipline::Research, &mut rng);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["from"], "Research");
        assert!(json["routedTo"].is_array());
    }
}
