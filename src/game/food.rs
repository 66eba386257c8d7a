use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::GridBounds;
use super::state::Position;

/// Food placement with an injected, seedable random source.
///
/// Placement is uniform over the whole grid and does not avoid cells
/// occupied by the snake: a spawn may land on the body and sits there
/// un-eaten until the head enters that cell.
#[derive(Debug)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    /// Spawner seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Spawner with a fixed seed; the placement sequence is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a food cell uniformly from the grid
    pub fn spawn(&mut self, bounds: GridBounds) -> Position {
        let x = self.rng.gen_range(0..bounds.width()) as i32;
        let y = self.rng.gen_range(0..bounds.height()) as i32;
        Position::new(x, y)
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
