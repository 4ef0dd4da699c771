use crate::model::game::{Move, Outcome};

/// Decides a round from the player's side. Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock.
pub fn decide(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats(&opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
