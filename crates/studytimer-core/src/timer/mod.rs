mod cue;
mod engine;
mod schedule;
mod ticker;

#[cfg(feature = "sound")]
pub use cue::ToneCue;
pub use cue::{BellCue, BoundaryCue, SilentCue, ToneSettings};
pub use engine::{RunState, TimerEngine, TimerState};
pub use schedule::{Schedule, ScheduleInput, Session, SessionKind};
pub use ticker::{Ticker, DEFAULT_TICK_PERIOD};
