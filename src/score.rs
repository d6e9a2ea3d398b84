use log::info;

use crate::platform::Store;

/// Score, tail length target and the persisted high score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreKeeper {
  score: u32,
  high_score: u32,
  tail_length: usize,
  key: String,
}

impl ScoreKeeper {
  /// Reads the high score once. Absent or malformed values count as 0.
  pub fn load(store:&dyn Store, key:&str, tail_length:usize) -> Self {
    let high_score = store.get(key)
      .and_then(|v| v.trim().parse::<u32>().ok())
      .unwrap_or(0);
    ScoreKeeper {score: 0, high_score, tail_length, key: key.to_string()}
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn high_score(&self) -> u32 {
    self.high_score
  }

  pub fn tail_length(&self) -> usize {
    self.tail_length
  }

  pub fn reset(&mut self, tail_length:usize) {
    self.score = 0;
    self.tail_length = tail_length;
  }

  pub fn on_food_eaten(&mut self) {
    self.score += 1;
    self.tail_length += 1;
  }

  /// Records the run's score if it beats the high score. Returns whether it did.
  pub fn on_game_over(&mut self, store:&mut dyn Store) -> bool {
    if self.score <= self.high_score {
      return false;
    }
    self.high_score = self.score;
    store.set(&self.key, &self.high_score.to_string());
    info!("new high score {}", self.high_score);
    true
  }
}
