use clap::{Args, ValueEnum};
use studytimer_core::inspiration::{self, SnackSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Source {
    /// Something to bring from home
    Lunchbox,
    /// Something to order at the school bar
    Bar,
}

impl From<Source> for SnackSource {
    fn from(value: Source) -> Self {
        match value {
            Source::Lunchbox => SnackSource::Lunchbox,
            Source::Bar => SnackSource::Bar,
        }
    }
}

#[derive(Args, Debug)]
pub struct SnackArgs {
    #[arg(value_enum, default_value_t = Source::Lunchbox)]
    pub source: Source,
}

pub fn run(args: SnackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snack = inspiration::random_snack(args.source.into(), &mut rand::thread_rng());
    println!("{snack}");
    Ok(())
}
