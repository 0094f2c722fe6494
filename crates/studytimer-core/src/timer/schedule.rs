//! Schedule builder.
//!
//! Turns the three form inputs (total minutes, number of breaks, minutes per
//! break) into an ordered list of alternating work/break sessions. Breaks are
//! placed strictly between work sessions, never first or last.
//!
//! Work slots share the non-break time evenly. Integer division leftovers are
//! dropped, so the schedule can be up to `work_slots - 1` seconds shorter than
//! requested.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MSG_TOTAL: &str = "total duration must be a positive number";
const MSG_BREAK_COUNT: &str = "break count must be a non-negative number";
const MSG_BREAK_MINUTES: &str = "break duration must be a positive number";
const MSG_BREAKS_TOO_LONG: &str = "break time exceeds or equals total time";
const MSG_WORK_TOO_SHORT: &str = "work sessions would be shorter than one second";
const MSG_TOO_LARGE: &str = "total duration is too large";
const MSG_TOO_MANY_BREAKS: &str = "too many breaks";

/// Upper bound on `break_count`; keeps the session list small enough to
/// allocate and to display.
pub const MAX_BREAKS: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Work,
    Break,
}

/// One timed interval of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub kind: SessionKind,
    planned_secs: u64,
}

impl Session {
    fn new(kind: SessionKind, planned_secs: u64) -> Self {
        Self { kind, planned_secs }
    }

    pub fn planned_secs(&self) -> u64 {
        self.planned_secs
    }

    pub fn is_work(&self) -> bool {
        self.kind == SessionKind::Work
    }
}

/// Alternating Work/Break plan. Only [`Schedule::build`] creates one; it is
/// serialize-only.
///
/// ```compile_fail
/// let _: studytimer_core::Schedule = serde_json::from_str(r#"{"sessions":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    sessions: Vec<Session>,
}

impl Schedule {
    /// Build a schedule from already-parsed inputs.
    ///
    /// `break_minutes` is only checked when `break_count > 0`.
    pub fn build(
        total_minutes: i64,
        break_count: i64,
        break_minutes: i64,
    ) -> Result<Self, ValidationError> {
        if total_minutes <= 0 {
            return Err(ValidationError::invalid(MSG_TOTAL));
        }
        if break_count < 0 {
            return Err(ValidationError::invalid(MSG_BREAK_COUNT));
        }
        if break_count > MAX_BREAKS {
            return Err(ValidationError::invalid(MSG_TOO_MANY_BREAKS));
        }
        if break_count > 0 && break_minutes <= 0 {
            return Err(ValidationError::invalid(MSG_BREAK_MINUTES));
        }

        let too_large = || ValidationError::invalid(MSG_TOO_LARGE);
        let total_secs = (total_minutes as u64).checked_mul(60).ok_or_else(too_large)?;
        let break_count = break_count as u64;
        let break_secs = if break_count > 0 {
            (break_minutes as u64).checked_mul(60).ok_or_else(too_large)?
        } else {
            0
        };
        let total_break_secs = break_count.checked_mul(break_secs).ok_or_else(too_large)?;

        if total_break_secs >= total_secs {
            return Err(ValidationError::invalid(MSG_BREAKS_TOO_LONG));
        }

        let work_slots = break_count + 1;
        let work_slot_secs = (total_secs - total_break_secs) / work_slots;
        if work_slot_secs == 0 {
            return Err(ValidationError::invalid(MSG_WORK_TOO_SHORT));
        }

        let mut sessions = Vec::with_capacity((2 * break_count + 1) as usize);
        sessions.push(Session::new(SessionKind::Work, work_slot_secs));
        for _ in 0..break_count {
            sessions.push(Session::new(SessionKind::Break, break_secs));
            sessions.push(Session::new(SessionKind::Work, work_slot_secs));
        }

        Ok(Self { sessions })
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn get(&self, index: usize) -> Option<&Session> {
        self.sessions.get(index)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.sessions.len().saturating_sub(1)
    }

    pub fn total_secs(&self) -> u64 {
        self.sessions.iter().map(|s| s.planned_secs).sum()
    }

    pub fn work_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_work()).count()
    }

    /// 1-based position of the work session at `index` among all work
    /// sessions. `None` for breaks and out-of-range indices.
    pub fn work_ordinal(&self, index: usize) -> Option<usize> {
        let session = self.sessions.get(index)?;
        if !session.is_work() {
            return None;
        }
        Some(
            self.sessions
                .iter()
                .take(index + 1)
                .filter(|s| s.is_work())
                .count(),
        )
    }
}

/// Raw form inputs, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub total_minutes: i64,
    pub break_count: i64,
    pub break_minutes: i64,
}

impl ScheduleInput {
    /// Parse the three text fields. Whitespace is trimmed; anything that is
    /// not an integer is rejected with that field's range message.
    pub fn parse(total: &str, breaks: &str, break_minutes: &str) -> Result<Self, ValidationError> {
        let total_minutes = parse_field(total, MSG_TOTAL)?;
        let break_count = parse_field(breaks, MSG_BREAK_COUNT)?;
        // Without breaks the duration field is irrelevant and may be blank.
        let break_minutes = if break_count <= 0 {
            break_minutes.trim().parse().unwrap_or(0)
        } else {
            parse_field(break_minutes, MSG_BREAK_MINUTES)?
        };

        Ok(Self {
            total_minutes,
            break_count,
            break_minutes,
        })
    }

    pub fn build(&self) -> Result<Schedule, ValidationError> {
        Schedule::build(self.total_minutes, self.break_count, self.break_minutes)
    }
}

fn parse_field(raw: &str, message: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(s: &Schedule) -> Vec<SessionKind> {
        s.sessions().iter().map(|s| s.kind).collect()
    }

    #[test]
    fn forty_five_minutes_one_break() {
        let s = Schedule::build(45, 1, 5).unwrap();
        let planned: Vec<_> = s.sessions().iter().map(|s| (s.kind, s.planned_secs())).collect();
        assert_eq!(
            planned,
            vec![
                (SessionKind::Work, 1200),
                (SessionKind::Break, 300),
                (SessionKind::Work, 1200),
            ]
        );
    }

    #[test]
    fn no_breaks_is_a_single_work_session() {
        let s = Schedule::build(25, 0, 0).unwrap();
        assert_eq!(kinds(&s), vec![SessionKind::Work]);
        assert_eq!(s.total_secs(), 25 * 60);
    }

    #[test]
    fn breaks_longer_than_total_are_rejected() {
        let err = Schedule::build(10, 2, 6).unwrap_err();
        assert_eq!(err.message(), "break time exceeds or equals total time");
    }

    #[test]
    fn breaks_equal_to_total_are_rejected() {
        let err = Schedule::build(10, 2, 5).unwrap_err();
        assert_eq!(err, ValidationError::invalid(MSG_BREAKS_TOO_LONG));
    }

    #[test]
    fn non_positive_total_is_rejected() {
        assert_eq!(
            Schedule::build(0, 0, 5).unwrap_err().message(),
            "total duration must be a positive number"
        );
        assert!(Schedule::build(-3, 0, 5).is_err());
    }

    #[test]
    fn negative_break_count_is_rejected() {
        assert_eq!(
            Schedule::build(30, -1, 5).unwrap_err().message(),
            MSG_BREAK_COUNT
        );
    }

    #[test]
    fn zero_break_minutes_only_matters_with_breaks() {
        assert!(Schedule::build(30, 0, 0).is_ok());
        assert_eq!(
            Schedule::build(30, 2, 0).unwrap_err().message(),
            MSG_BREAK_MINUTES
        );
    }

    #[test]
    fn rounding_remainder_is_dropped() {
        // 10 min total, 2 breaks of 1 min -> 480s of work over 3 slots = 160s each.
        let s = Schedule::build(10, 2, 1).unwrap();
        assert_eq!(s.get(0).unwrap().planned_secs(), 160);
        // 240s of work over 7 slots -> 34s each, 2s dropped.
        let s = Schedule::build(10, 6, 1).unwrap();
        assert_eq!(s.get(0).unwrap().planned_secs(), 34);
        assert_eq!(s.total_secs(), 600 - 2);
    }

    #[test]
    fn zero_length_work_slots_are_rejected() {
        // 60s of work split across 101 slots.
        let err = Schedule::build(101, 100, 1).unwrap_err();
        assert_eq!(err.message(), MSG_WORK_TOO_SHORT);
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        assert_eq!(
            Schedule::build(i64::MAX, 0, 0).unwrap_err().message(),
            MSG_TOO_LARGE
        );
    }

    #[test]
    fn huge_break_counts_are_rejected_without_allocating() {
        let err = Schedule::build(307_445_734_561_825_860, 290_000_000_000_000_000, 1).unwrap_err();
        assert_eq!(err.message(), MSG_TOO_MANY_BREAKS);
        assert_eq!(
            Schedule::build(200_000_000, 100_000_000, 1).unwrap_err().message(),
            MSG_TOO_MANY_BREAKS
        );
    }

    #[test]
    fn break_count_limit_is_inclusive() {
        let s = Schedule::build(MAX_BREAKS * 2, MAX_BREAKS, 1).unwrap();
        assert_eq!(s.len() as i64, 2 * MAX_BREAKS + 1);
        assert!(Schedule::build(MAX_BREAKS * 2, MAX_BREAKS + 1, 1).is_err());
    }

    #[test]
    fn serialized_schedule_lists_sessions() {
        let json = serde_json::to_value(Schedule::build(45, 1, 5).unwrap()).unwrap();
        assert_eq!(json["sessions"].as_array().unwrap().len(), 3);
        assert_eq!(json["sessions"][1]["kind"], "break");
        assert_eq!(json["sessions"][1]["planned_secs"], 300);
    }

    #[test]
    fn work_ordinal_counts_only_work_sessions() {
        let s = Schedule::build(60, 2, 5).unwrap();
        assert_eq!(s.work_count(), 3);
        assert_eq!(s.work_ordinal(0), Some(1));
        assert_eq!(s.work_ordinal(1), None);
        assert_eq!(s.work_ordinal(2), Some(2));
        assert_eq!(s.work_ordinal(4), Some(3));
        assert_eq!(s.work_ordinal(5), None);
    }

    #[test]
    fn parse_accepts_padded_integers() {
        let input = ScheduleInput::parse(" 45 ", "1", "5\n").unwrap();
        assert_eq!(
            input,
            ScheduleInput {
                total_minutes: 45,
                break_count: 1,
                break_minutes: 5
            }
        );
        assert_eq!(input.build().unwrap().len(), 3);
    }

    #[test]
    fn parse_rejects_non_numbers_with_field_message() {
        assert_eq!(
            ScheduleInput::parse("abc", "1", "5").unwrap_err().message(),
            MSG_TOTAL
        );
        assert_eq!(
            ScheduleInput::parse("45", "one", "5").unwrap_err().message(),
            MSG_BREAK_COUNT
        );
        assert_eq!(
            ScheduleInput::parse("45", "1", "").unwrap_err().message(),
            MSG_BREAK_MINUTES
        );
        assert_eq!(
            ScheduleInput::parse("4.5", "1", "5").unwrap_err().message(),
            MSG_TOTAL
        );
    }

    #[test]
    fn parse_ignores_break_minutes_without_breaks() {
        let input = ScheduleInput::parse("30", "0", "").unwrap();
        assert_eq!(input.build().unwrap().len(), 1);
        let input = ScheduleInput::parse("30", "0", "whatever").unwrap();
        assert_eq!(input.build().unwrap().len(), 1);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(Schedule::build(90, 3, 7), Schedule::build(90, 3, 7));
    }

    proptest! {
        #[test]
        fn valid_inputs_alternate_and_keep_total(
            total in 1i64..600,
            breaks in 0i64..20,
            break_minutes in 1i64..30,
        ) {
            match Schedule::build(total, breaks, break_minutes) {
                Ok(s) => {
                    prop_assert_eq!(s.len() as i64, 2 * breaks + 1);
                    for (i, session) in s.sessions().iter().enumerate() {
                        let expected = if i % 2 == 0 { SessionKind::Work } else { SessionKind::Break };
                        prop_assert_eq!(session.kind, expected);
                        prop_assert!(session.planned_secs() > 0);
                    }
                    let requested = (total * 60) as u64;
                    let work_slots = (breaks + 1) as u64;
                    prop_assert!(s.total_secs() <= requested);
                    prop_assert!(requested - s.total_secs() <= work_slots - 1);
                }
                Err(_) => {
                    let work_secs = total * 60 - breaks * break_minutes * 60;
                    prop_assert!(work_secs <= 0 || work_secs / (breaks + 1) == 0);
                }
            }
        }
    }
}
