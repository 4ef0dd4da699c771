use clap::{Parser, ValueEnum};
use common::{
    model::game::Move,
    selector::{FixedSelector, OpponentSelector, RandomSelector},
};
use tracing::Level;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Rock, paper, scissors against the computer. Reads one move per line from stdin.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rps", version)]
pub struct GameConfig {
    /// How rounds are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop after this many rounds
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Seed the opponent for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Make the opponent always play this move
    #[arg(long)]
    pub opponent: Option<Move>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl GameConfig {
    pub fn selector(&self) -> Box<dyn OpponentSelector + Send> {
        match (self.opponent, self.seed) {
            (Some(fixed), _) => Box::new(FixedSelector(fixed)),
            (None, Some(seed)) => Box::new(RandomSelector::seeded(seed)),
            (None, None) => Box::new(RandomSelector::from_entropy()),
        }
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}
