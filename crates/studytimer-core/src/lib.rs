//! # Study Timer Core Library
//!
//! Business logic for the study timer. The CLI is a thin layer over this
//! crate; every operation it offers is available here.
//!
//! ## Architecture
//!
//! - **Schedule Builder**: turns total minutes, break count and break length
//!   into alternating work/break sessions
//! - **Timer Engine**: a tick-driven state machine over one schedule; the
//!   caller invokes `tick()` once per second
//! - **Ticker**: the one-second tokio clock that feeds the engine, started and
//!   stopped as the engine enters and leaves the running-unpaused condition
//! - **Cues**: pluggable boundary signal backends (bell, silent, tone)
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core countdown state machine
//! - [`Schedule`]: Immutable session plan
//! - [`Config`]: Application configuration management

pub mod display;
pub mod error;
pub mod events;
pub mod inspiration;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, CueError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    BellCue, BoundaryCue, Schedule, ScheduleInput, Session, SessionKind, SilentCue, Ticker,
    TimerEngine, TimerState,
};
