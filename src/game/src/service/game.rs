use common::{
    model::game::{Move, Round},
    selector::OpponentSelector,
};
use tracing::debug;

use crate::model::tally::Tally;

pub struct Game {
    opponent: Box<dyn OpponentSelector + Send>,
    // What is on screen right now; None until the first round
    current: Option<Round>,
    tally: Tally,
}

impl Game {
    pub fn new(opponent: Box<dyn OpponentSelector + Send>) -> Self {
        Game {
            opponent,
            current: None,
            tally: Tally::default(),
        }
    }

    pub fn play(&mut self, player: Move) -> Round {
        let round = Round::play(player, &mut *self.opponent);
        self.tally.record(round.outcome);
        self.current = Some(round);
        debug!("Tally after {} rounds: {:?}", self.tally.total(), self.tally);
        round
    }

    pub fn current(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}
