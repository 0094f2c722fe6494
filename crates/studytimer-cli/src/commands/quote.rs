use clap::{Args, ValueEnum};
use studytimer_core::inspiration::{self, QuoteAudience};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Audience {
    Student,
    Teacher,
}

impl From<Audience> for QuoteAudience {
    fn from(value: Audience) -> Self {
        match value {
            Audience::Student => QuoteAudience::Student,
            Audience::Teacher => QuoteAudience::Teacher,
        }
    }
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Who the quote is for
    #[arg(value_enum, default_value_t = Audience::Student)]
    pub audience: Audience,
}

pub fn run(args: QuoteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let quote = inspiration::random_quote(args.audience.into(), &mut rand::thread_rng());
    println!("{quote}");
    Ok(())
}
