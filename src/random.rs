use crate::board::Board;
use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of random numbers used to pick moves for random opponents and playouts.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Returns a random element of `items`, or `None` if it is empty.
    fn get_random_from_slice<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }

    /// Picks a random legal move, or `None` if the game is over.
    fn choose_action<T: Board>(&mut self, board: &T) -> Option<T::Move> {
        if board.terminal() {
            return None;
        }
        let actions: Vec<T::Move> = board.actions().into_iter().collect();
        self.get_random_from_slice(&actions).copied()
    }
}

/// Thread-local randomness from the `rand` crate.
pub struct StandardRandomGenerator;

impl Default for StandardRandomGenerator {
    fn default() -> Self {
        StandardRandomGenerator
    }
}

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. Produces the same sequence for the same seed.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}
