//! Presentation helpers shared by every front end.

use crate::timer::SessionKind;

/// `MM:SS`, zero padded. Minutes are not wrapped into hours.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Elapsed fraction of the active session, 0.0 ..= 1.0.
pub fn progress_ratio(planned_secs: u64, remaining_secs: u64) -> f64 {
    if planned_secs == 0 {
        return 0.0;
    }
    let elapsed = planned_secs.saturating_sub(remaining_secs);
    elapsed as f64 / planned_secs as f64
}

pub fn kind_name(kind: SessionKind) -> &'static str {
    match kind {
        SessionKind::Work => "Study session",
        SessionKind::Break => "Break",
    }
}

/// Heading for the active session, e.g. `Study session (1/2)` or `Break`.
pub fn session_label(kind: SessionKind, work_ordinal: Option<usize>, work_total: usize) -> String {
    match (kind, work_ordinal) {
        (SessionKind::Work, Some(n)) => format!("{} ({n}/{work_total})", kind_name(kind)),
        _ => kind_name(kind).to_string(),
    }
}

/// Fixed-width text progress bar.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat('#').take(filled));
    bar.extend(std::iter::repeat('-').take(width - filled));
    bar.push(']');
    bar
}
