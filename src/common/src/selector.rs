use rand::{
    distr::{Distribution, StandardUniform},
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};

use crate::model::game::Move;

/// Source of the opponent's move. Each call is independent of the previous ones.
pub trait OpponentSelector {
    fn select(&mut self) -> Move;
}

impl<F> OpponentSelector for F
where
    F: FnMut() -> Move,
{
    fn select(&mut self) -> Move {
        self()
    }
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

/// Uniform draw over every move.
pub struct RandomSelector<R: Rng> {
    rng: R,
}
impl<R: Rng> RandomSelector<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomSelector { rng }
    }
}
impl RandomSelector<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::rng())
    }
}
impl Default for RandomSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}
impl RandomSelector<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the thread-local generator. Unlike `new`, the result is `Send`.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }
}
impl<R: Rng> OpponentSelector for RandomSelector<R> {
    fn select(&mut self) -> Move {
        self.rng.random()
    }
}

/// Always plays the same move.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub Move);
impl OpponentSelector for FixedSelector {
    fn select(&mut self) -> Move {
        self.0
    }
}

/// Cycles through a fixed list of moves.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    moves: Vec<Move>,
    next: usize,
}
impl ScriptedSelector {
    /// Returns `None` for an empty script.
    pub fn new(moves: Vec<Move>) -> Option<Self> {
        if moves.is_empty() {
            return None;
        }
        Some(ScriptedSelector { moves, next: 0 })
    }
}
impl OpponentSelector for ScriptedSelector {
    fn select(&mut self) -> Move {
        let m = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        m
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use itertools::Itertools;

    use super::*;

    const DRAWS: usize = 30_000;
    // ~6 standard deviations of a binomial(30000, 1/3)
    const TOLERANCE: usize = 500;

    fn assert_uniform(counts: HashMap<Move, usize>) {
        let expected = DRAWS / Move::ALL.len();
        for m in Move::iter() {
            let seen = counts.get(&m).copied().unwrap_or(0);
            assert!(
                seen.abs_diff(expected) <= TOLERANCE,
                "{} drawn {} times, expected about {}",
                m,
                seen,
                expected
            );
        }
    }

    #[test]
    fn seeded_draws_are_uniform() {
        let mut selector = RandomSelector::seeded(7);
        assert_uniform((0..DRAWS).map(|_| selector.select()).counts());
    }

    #[test]
    fn thread_rng_draws_are_uniform() {
        let mut selector = RandomSelector::new();
        assert_uniform((0..DRAWS).map(|_| selector.select()).counts());
    }

    #[test]
    fn entropy_seeded_draws_are_uniform() {
        let mut selector = RandomSelector::from_entropy();
        assert_uniform((0..DRAWS).map(|_| selector.select()).counts());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSelector::seeded(42);
        let mut b = RandomSelector::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.select(), b.select());
        }
    }

    #[test]
    fn every_move_keeps_coming_back() {
        let mut selector = RandomSelector::seeded(1);
        let late = (0..DRAWS)
            .map(|_| selector.select())
            .skip(DRAWS - 300)
            .unique()
            .count();
        assert_eq!(late, Move::ALL.len());
    }

    #[test]
    fn scripted_selector_cycles() {
        let mut selector = ScriptedSelector::new(vec![Move::Rock, Move::Scissors]).unwrap();
        let drawn: Vec<Move> = (0..5).map(|_| selector.select()).collect();
        assert_eq!(
            drawn,
            vec![Move::Rock, Move::Scissors, Move::Rock, Move::Scissors, Move::Rock]
        );
        assert!(ScriptedSelector::new(vec![]).is_none());
    }

    #[test]
    fn closures_are_selectors() {
        let mut selector = || Move::Paper;
        assert_eq!(selector.select(), Move::Paper);
        assert_eq!(FixedSelector(Move::Rock).select(), Move::Rock);
    }
}
