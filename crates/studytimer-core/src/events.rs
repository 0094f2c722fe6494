use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::{SessionKind, TimerState};

/// Every state change of the countdown produces an Event.
/// The front end renders them or prints them as JSON lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        run_id: Uuid,
        sessions: usize,
        total_secs: u64,
        step_type: SessionKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        step_index: usize,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        step_index: usize,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A session ran out and the next one started.
    StepAdvanced {
        completed_index: usize,
        completed_type: SessionKind,
        step_index: usize,
        step_type: SessionKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The last session ran out.
    ScheduleFinished {
        run_id: Uuid,
        sessions: usize,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        step_index: usize,
        step_type: Option<SessionKind>,
        step_label: String,
        remaining_secs: u64,
        remaining_display: String,
        total_secs: u64,
        step_progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Session boundaries are the events that come with an audible cue.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            Event::StepAdvanced { .. } | Event::ScheduleFinished { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_variant_name() {
        let event = Event::TimerReset { at: Utc::now() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimerReset");
    }

    #[test]
    fn session_kind_serializes_lowercase() {
        let event = Event::TimerPaused {
            step_index: 2,
            remaining_secs: 42,
            at: Utc::now(),
        };
        assert!(!event.is_boundary());
        let advanced = Event::StepAdvanced {
            completed_index: 0,
            completed_type: SessionKind::Work,
            step_index: 1,
            step_type: SessionKind::Break,
            duration_secs: 300,
            at: Utc::now(),
        };
        assert!(advanced.is_boundary());
        let json = serde_json::to_value(&advanced).unwrap();
        assert_eq!(json["step_type"], "break");
        assert_eq!(json["completed_type"], "work");
    }
}
