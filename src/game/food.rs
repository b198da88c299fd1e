//! Food placement over the open cells of a board

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::{Board, Position};

/// Source of randomness for food placement.
///
/// Production code uses [`SessionRng`]; tests can substitute a scripted
/// source to pin placements to known cells.
pub trait RandomSource {
    /// Pick an index in `0..upper`. `upper` is never zero.
    fn pick_index(&mut self, upper: usize) -> usize;
}

/// Seedable RNG owned by a session
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Choose a cell uniformly among those not covered by the snake.
///
/// Returns `None` when the snake covers the whole board.
pub fn place_food<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let open = board.open_cells();
    if open.is_empty() {
        return None;
    }

    let index = rng.pick_index(open.len()) % open.len();
    Some(open[index])
}
