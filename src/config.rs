use crate::grid::Position;

/// Tunables for a game. The board itself is always `TILE_COUNT` square.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
  pub canvas_size: f64,
  pub start_head: Position,
  pub initial_tail_length: usize,
  pub start_food: Position,

  pub base_speed: u32,
  pub medium_speed: u32,
  pub fast_speed: u32,
  // thresholds are exclusive: a score must pass them
  pub medium_threshold: u32,
  pub fast_threshold: u32,

  pub high_score_key: String,
  pub gulp_sound_src: String,
}

impl Default for GameConfig {
  fn default() -> Self {
    Self {
      canvas_size: 400.0,
      start_head: Position::new(10, 10),
      initial_tail_length: 2,
      start_food: Position::new(5, 5),
      base_speed: 7,
      medium_speed: 9,
      fast_speed: 11,
      medium_threshold: 5,
      fast_threshold: 10,
      high_score_key: "snakeHighScore".to_string(),
      gulp_sound_src: "game-sound.mp3".to_string(),
    }
  }
}

impl GameConfig {
  pub fn with_canvas_size(canvas_size:f64) -> Self {
    Self {
      canvas_size,
      ..Default::default()
    }
  }

  /// Ticks per second for a given score.
  pub fn speed_for_score(&self, score:u32) -> u32 {
    if score > self.fast_threshold {
      self.fast_speed
    } else if score > self.medium_threshold {
      self.medium_speed
    } else {
      self.base_speed
    }
  }
}
