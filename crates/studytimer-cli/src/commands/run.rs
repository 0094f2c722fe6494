use std::io::Write;
use std::time::Duration;

use clap::Args;
use studytimer_core::display;
use studytimer_core::timer::DEFAULT_TICK_PERIOD;
use studytimer_core::{
    BoundaryCue, Config, Event, Schedule, SilentCue, Ticker, TimerEngine, TimerState,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::FormArgs;

const BAR_WIDTH: usize = 24;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub form: FormArgs,
    /// Do not play a cue at session boundaries
    #[arg(long)]
    pub no_sound: bool,
    /// Print events as JSON lines instead of a live status line
    #[arg(long)]
    pub json: bool,
    /// Tick period in milliseconds
    #[arg(long, hide = true)]
    pub tick_ms: Option<u64>,
}

/// Keyboard commands read line by line from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    TogglePause,
    Reset,
    Quit,
    Status,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "pause" | "resume" => Input::TogglePause,
            "r" | "reset" => Input::Reset,
            "q" | "quit" | "exit" => Input::Quit,
            "s" | "status" => Input::Status,
            _ => Input::Unknown,
        }
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let schedule = args.form.resolve(&config.timer)?.build()?;
    let cue = make_cue(&config, args.no_sound);
    let period = args
        .tick_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK_PERIOD);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let input = BufReader::new(tokio::io::stdin());
    let result = runtime.block_on(drive(schedule, cue, period, args.json, input));
    // A pending stdin read would otherwise keep the runtime alive.
    runtime.shutdown_background();
    result
}

fn make_cue(config: &Config, no_sound: bool) -> Box<dyn BoundaryCue> {
    if no_sound || !config.sound.enabled {
        return Box::new(SilentCue);
    }
    #[cfg(feature = "sound")]
    let cue: Box<dyn BoundaryCue> = Box::new(studytimer_core::timer::ToneCue::new(config.sound.tone()));
    #[cfg(not(feature = "sound"))]
    let cue: Box<dyn BoundaryCue> = Box::new(studytimer_core::BellCue);
    cue
}

async fn drive<R: AsyncBufRead + Unpin>(
    schedule: Schedule,
    cue: Box<dyn BoundaryCue>,
    period: Duration,
    json: bool,
    input: R,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = TimerEngine::new(cue);
    let mut ticker = Ticker::new(period);
    let mut out = Renderer::new(json);

    out.event(&engine.start(schedule))?;
    ticker.sync(engine.is_ticking());
    out.status(&engine)?;

    let mut lines = input.lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = engine.tick() {
                    out.event(&event)?;
                }
                out.status(&engine)?;
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    None => stdin_open = false,
                    Some(line) => match Input::parse(&line) {
                        Input::TogglePause => {
                            if let Some(event) = engine.toggle_pause() {
                                out.event(&event)?;
                            }
                            out.status(&engine)?;
                        }
                        Input::Reset => {
                            out.event(&engine.reset())?;
                            break;
                        }
                        Input::Quit => break,
                        Input::Status => out.snapshot(&engine)?,
                        Input::Unknown => out.hint()?,
                    },
                }
            }
        }

        ticker.sync(engine.is_ticking());
        if engine.state() == TimerState::Finished {
            break;
        }
        if !stdin_open && engine.is_paused() {
            // Nothing left that could resume the countdown.
            tracing::warn!("input closed while paused, stopping");
            break;
        }
    }

    ticker.stop();
    out.finish()?;
    Ok(())
}

/// Writes either a live status line or JSON event lines to stdout.
struct Renderer {
    json: bool,
    line_open: bool,
}

impl Renderer {
    fn new(json: bool) -> Self {
        Self {
            json,
            line_open: false,
        }
    }

    fn event(&mut self, event: &Event) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.json {
            let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
            return writeln!(stdout, "{line}");
        }

        let message = match event {
            Event::TimerStarted {
                sessions,
                total_secs,
                ..
            } => format!(
                "Started {sessions} session(s), {} in total. Type p to pause/resume, r to reset, q to quit.",
                display::format_mmss(*total_secs)
            ),
            Event::TimerPaused { .. } => "Paused.".to_string(),
            Event::TimerResumed { .. } => "Resumed.".to_string(),
            Event::StepAdvanced { completed_type, .. } => {
                format!("{} over.", display::kind_name(*completed_type))
            }
            Event::ScheduleFinished { .. } => {
                "Session complete! Great work, every session is done.".to_string()
            }
            Event::TimerReset { .. } => "Timer reset.".to_string(),
            Event::StateSnapshot { .. } => return Ok(()),
        };
        if self.line_open {
            writeln!(stdout)?;
            self.line_open = false;
        }
        writeln!(stdout, "{message}")
    }

    fn status(&mut self, engine: &TimerEngine) -> std::io::Result<()> {
        if self.json {
            return Ok(());
        }
        let Some(line) = status_line(engine) else {
            return Ok(());
        };
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "\r{line}  ")?;
        stdout.flush()?;
        self.line_open = true;
        Ok(())
    }

    fn snapshot(&mut self, engine: &TimerEngine) -> std::io::Result<()> {
        if self.json {
            return self.event(&engine.snapshot());
        }
        self.status(engine)
    }

    fn hint(&mut self) -> std::io::Result<()> {
        if self.json {
            return Ok(());
        }
        eprintln!("commands: p (pause/resume), r (reset), s (status), q (quit)");
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        if self.line_open {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout)?;
            self.line_open = false;
        }
        Ok(())
    }
}

fn status_line(engine: &TimerEngine) -> Option<String> {
    let schedule = engine.schedule()?;
    let session = engine.current_session()?;
    let label = display::session_label(
        session.kind,
        schedule.work_ordinal(engine.step_index()),
        schedule.work_count(),
    );
    let paused = if engine.is_paused() { "  (paused)" } else { "" };
    Some(format!(
        "{label}  {}  {}{paused}",
        display::format_mmss(engine.remaining_secs()),
        display::progress_bar(engine.step_progress(), BAR_WIDTH),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_commands() {
        assert_eq!(Input::parse("p\n"), Input::TogglePause);
        assert_eq!(Input::parse(" Resume "), Input::TogglePause);
        assert_eq!(Input::parse("r"), Input::Reset);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("s"), Input::Status);
        assert_eq!(Input::parse("hello"), Input::Unknown);
    }

    #[test]
    fn status_line_shows_label_time_and_bar() {
        let mut engine = TimerEngine::new(Box::new(SilentCue));
        assert!(status_line(&engine).is_none());

        engine.start(Schedule::build(45, 1, 5).unwrap());
        let line = status_line(&engine).unwrap();
        assert!(line.starts_with("Study session (1/2)  20:00  ["));

        engine.pause();
        assert!(status_line(&engine).unwrap().ends_with("(paused)"));
    }

    #[test]
    fn cue_is_silent_when_disabled() {
        let mut config = Config::default();
        config.sound.enabled = false;
        let mut cue = make_cue(&config, false);
        assert!(cue.emit().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn drive_runs_a_short_schedule_to_the_end() {
        // 30s work, 60s break, 30s work
        let schedule = Schedule::build(2, 1, 1).unwrap();
        let started = tokio::time::Instant::now();
        drive(schedule, Box::new(SilentCue), Duration::from_secs(1), true, &b""[..])
            .await
            .unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(120));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_command_stops_the_run() {
        let schedule = Schedule::build(45, 1, 5).unwrap();
        let started = tokio::time::Instant::now();
        drive(schedule, Box::new(SilentCue), Duration::from_secs(1), true, &b"r\n"[..])
            .await
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn input_closing_while_paused_ends_the_run() {
        let schedule = Schedule::build(45, 1, 5).unwrap();
        drive(schedule, Box::new(SilentCue), Duration::from_secs(1), true, &b"p\n"[..])
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn paused_time_is_not_counted() {
        use tokio::io::AsyncWriteExt;

        // 30s work, 60s break, 30s work
        let schedule = Schedule::build(2, 1, 1).unwrap();
        let (mut keys, input) = tokio::io::duplex(64);
        tokio::spawn(async move {
            keys.write_all(b"p\n").await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            keys.write_all(b"p\n").await.unwrap();
        });

        let started = tokio::time::Instant::now();
        drive(schedule, Box::new(SilentCue), Duration::from_secs(1), true, BufReader::new(input))
            .await
            .unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(150));
    }
}
