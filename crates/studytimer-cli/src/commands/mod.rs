pub mod config;
pub mod plan;
pub mod quote;
pub mod run;
pub mod snack;

use clap::Args;
use studytimer_core::storage::TimerDefaults;
use studytimer_core::{ScheduleInput, ValidationError};

/// The three timer form fields. Missing fields fall back to the config.
///
/// Values are taken as raw text so that bad input gets the same message
/// whichever front end collected it.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Total length in minutes
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub total: Option<String>,
    /// Number of breaks
    #[arg(long, short = 'b', allow_hyphen_values = true)]
    pub breaks: Option<String>,
    /// Length of each break in minutes
    #[arg(long, short = 'm', allow_hyphen_values = true)]
    pub break_minutes: Option<String>,
}

impl FormArgs {
    pub fn resolve(&self, defaults: &TimerDefaults) -> Result<ScheduleInput, ValidationError> {
        let total = field_or(&self.total, defaults.total_minutes);
        let breaks = field_or(&self.breaks, defaults.break_count);
        let break_minutes = field_or(&self.break_minutes, defaults.break_minutes);
        ScheduleInput::parse(&total, &breaks, &break_minutes)
    }
}

fn field_or(value: &Option<String>, default: i64) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}
