//! Countdown engine.
//!
//! A tick-driven state machine over one [`Schedule`]. It owns no clock and
//! no threads: the caller invokes `tick()` once per second while
//! [`TimerEngine::is_ticking`] is true.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running(Work <-> Break) -> Finished
//!   ^            |                      |
//!   +--- reset --+------- reset --------+
//! ```
//!
//! Paused is a flag on top of Running, not a step in the sequence.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Box::new(SilentCue));
//! engine.start(Schedule::build(45, 1, 5)?);
//! // Once per second:
//! engine.tick(); // Some(Event) on a session boundary
//! ```

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cue::BoundaryCue;
use super::schedule::{Schedule, Session};
use crate::display;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// No schedule loaded.
    Idle,
    Running,
    Paused,
    /// Every session ran out. Terminal until `reset()` or a new `start()`.
    Finished,
}

/// Position of the countdown inside the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub run_id: Uuid,
    pub current_index: usize,
    pub remaining_secs: u64,
    pub is_running: bool,
    pub is_paused: bool,
}

pub struct TimerEngine {
    schedule: Option<Schedule>,
    run: Option<RunState>,
    cue: Box<dyn BoundaryCue>,
}

impl fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerEngine")
            .field("schedule", &self.schedule)
            .field("run", &self.run)
            .finish_non_exhaustive()
    }
}

impl TimerEngine {
    /// Create an idle engine that signals boundaries through `cue`.
    pub fn new(cue: Box<dyn BoundaryCue>) -> Self {
        Self {
            schedule: None,
            run: None,
            cue,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        match self.run {
            None => TimerState::Idle,
            Some(run) if !run.is_running => TimerState::Finished,
            Some(run) if run.is_paused => TimerState::Paused,
            Some(_) => TimerState::Running,
        }
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn run_state(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    pub fn step_index(&self) -> usize {
        self.run.map(|r| r.current_index).unwrap_or(0)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.run.map(|r| r.remaining_secs).unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.run.map(|r| r.is_running).unwrap_or(false)
    }

    pub fn is_paused(&self) -> bool {
        self.run.map(|r| r.is_paused).unwrap_or(false)
    }

    /// Whether the surrounding clock should be delivering ticks.
    pub fn is_ticking(&self) -> bool {
        self.run
            .map(|r| r.is_running && !r.is_paused)
            .unwrap_or(false)
    }

    pub fn current_session(&self) -> Option<&Session> {
        let run = self.run?;
        self.schedule.as_ref()?.get(run.current_index)
    }

    /// 0.0 .. 1.0 progress within the active session.
    pub fn step_progress(&self) -> f64 {
        match self.current_session() {
            Some(session) => display::progress_ratio(session.planned_secs(), self.remaining_secs()),
            None => 0.0,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let session = self.current_session();
        let step_label = match (session, self.schedule.as_ref()) {
            (Some(session), Some(schedule)) => display::session_label(
                session.kind,
                schedule.work_ordinal(self.step_index()),
                schedule.work_count(),
            ),
            _ => String::new(),
        };
        Event::StateSnapshot {
            state: self.state(),
            step_index: self.step_index(),
            step_type: session.map(|s| s.kind),
            step_label,
            remaining_secs: self.remaining_secs(),
            remaining_display: display::format_mmss(self.remaining_secs()),
            total_secs: session.map(|s| s.planned_secs()).unwrap_or(0),
            step_progress: self.step_progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down `schedule` from its first session. Any previous
    /// run and schedule are discarded.
    pub fn start(&mut self, schedule: Schedule) -> Event {
        let first = schedule.get(0).copied();
        let run = RunState {
            run_id: Uuid::new_v4(),
            current_index: 0,
            remaining_secs: first.map(|s| s.planned_secs()).unwrap_or(0),
            is_running: first.is_some(),
            is_paused: false,
        };
        tracing::debug!(
            run_id = %run.run_id,
            sessions = schedule.len(),
            total_secs = schedule.total_secs(),
            "timer started"
        );

        let event = Event::TimerStarted {
            run_id: run.run_id,
            sessions: schedule.len(),
            total_secs: schedule.total_secs(),
            step_type: first.map(|s| s.kind).unwrap_or(super::SessionKind::Work),
            duration_secs: run.remaining_secs,
            at: Utc::now(),
        };
        self.schedule = Some(schedule);
        self.run = Some(run);
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let run = self.run.as_mut()?;
        if !run.is_running || run.is_paused {
            return None;
        }
        run.is_paused = true;
        Some(Event::TimerPaused {
            step_index: run.current_index,
            remaining_secs: run.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        let run = self.run.as_mut()?;
        if !run.is_running || !run.is_paused {
            return None;
        }
        run.is_paused = false;
        Some(Event::TimerResumed {
            step_index: run.current_index,
            remaining_secs: run.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn toggle_pause(&mut self) -> Option<Event> {
        if self.is_paused() {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Back to Idle: no schedule, nothing remaining. Valid from any state.
    pub fn reset(&mut self) -> Event {
        self.schedule = None;
        self.run = None;
        Event::TimerReset { at: Utc::now() }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::StepAdvanced)` or `Some(Event::ScheduleFinished)`
    /// when the active session runs out, `None` otherwise.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_ticking() {
            return None;
        }
        let run = self.run.as_mut()?;
        run.remaining_secs = run.remaining_secs.saturating_sub(1);
        if run.remaining_secs > 0 {
            return None;
        }

        // Cue first, then move on to the next session.
        self.signal_boundary();

        let schedule = self.schedule.as_ref()?;
        let run = self.run.as_mut()?;
        let completed_index = run.current_index;
        let completed_type = schedule.get(completed_index)?.kind;

        let event = if completed_index >= schedule.last_index() {
            run.is_running = false;
            run.is_paused = false;
            tracing::debug!(run_id = %run.run_id, "schedule finished");
            Event::ScheduleFinished {
                run_id: run.run_id,
                sessions: schedule.len(),
                total_secs: schedule.total_secs(),
                at: Utc::now(),
            }
        } else {
            let next_index = completed_index + 1;
            let next = schedule.get(next_index)?;
            run.current_index = next_index;
            run.remaining_secs = next.planned_secs();
            tracing::debug!(
                run_id = %run.run_id,
                step_index = next_index,
                step_type = ?next.kind,
                "session boundary"
            );
            Event::StepAdvanced {
                completed_index,
                completed_type,
                step_index: next_index,
                step_type: next.kind,
                duration_secs: next.planned_secs(),
                at: Utc::now(),
            }
        };

        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn signal_boundary(&mut self) {
        if let Err(e) = self.cue.emit() {
            tracing::warn!("boundary cue failed: {e}");
        }
    }
}
