use crate::grid::{Position, TILE_COUNT};
use crate::rand::{self, RandomSource};

/// Places food uniformly over the whole board. Cells under the snake are
/// not excluded.
pub struct FoodSpawner {
  rng: Box<dyn RandomSource>,
}

impl FoodSpawner {
  pub fn new(rng:Box<dyn RandomSource>) -> Self {
    FoodSpawner {rng}
  }

  pub fn respawn(&mut self) -> Position {
    let x = rand::int(self.rng.as_mut(), 0, TILE_COUNT);
    let y = rand::int(self.rng.as_mut(), 0, TILE_COUNT);
    Position::new(x, y)
  }
}
