use clap::Args;
use studytimer_core::display;
use studytimer_core::{Config, Schedule};

use super::FormArgs;

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub form: FormArgs,
    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let schedule = args.form.resolve(&config.timer)?.build()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", render_table(&schedule));
    }
    Ok(())
}

fn render_table(schedule: &Schedule) -> String {
    let mut out = String::new();
    for (i, session) in schedule.sessions().iter().enumerate() {
        let label = display::session_label(
            session.kind,
            schedule.work_ordinal(i),
            schedule.work_count(),
        );
        out.push_str(&format!(
            "{:>3}  {:<22}{}\n",
            i + 1,
            label,
            display::format_mmss(session.planned_secs())
        ));
    }
    out.push_str(&format!(
        "     {:<22}{}\n",
        "Total",
        display::format_mmss(schedule.total_secs())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_session_and_total() {
        let table = render_table(&Schedule::build(45, 1, 5).unwrap());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Study session (1/2)"));
        assert!(lines[0].ends_with("20:00"));
        assert!(lines[1].contains("Break"));
        assert!(lines[1].ends_with("05:00"));
        assert!(lines[3].contains("Total"));
        assert!(lines[3].ends_with("45:00"));
    }
}
