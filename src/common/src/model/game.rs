use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{referee, selector::OpponentSelector};

/// Result of a round, always from the player's side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}
impl Outcome {
    /// The same round seen from the opponent's side.
    pub fn inverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}
impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn iter() -> impl Iterator<Item = Move> {
        Self::ALL.into_iter()
    }

    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(pub String);

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a move: {:?}", self.0)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMoveError(s.to_owned()))
    }
}

/// One play cycle: both moves and what they add up to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}
impl Round {
    pub fn new(player: Move, opponent: Move) -> Self {
        Round {
            player,
            opponent,
            outcome: referee::decide(player, opponent),
        }
    }

    /// Draws the opponent's move once and referees it against `player`.
    pub fn play<S>(player: Move, selector: &mut S) -> Self
    where
        S: OpponentSelector + ?Sized,
    {
        let round = Self::new(player, selector.select());
        debug!(
            "Round: {} vs {} -> {:?}",
            round.player, round.opponent, round.outcome
        );
        round
    }
}
