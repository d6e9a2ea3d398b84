use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::grid::Position;
use crate::input::InputController;
use crate::score::ScoreKeeper;
use crate::snake::{Snake, Velocity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
  Wall,
  SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
  /// No direction chosen yet; the head sits on its start cell.
  Idle,
  GeneralMovement,
  FoodEaten,
  GameOver(Collision),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
  pub event: GameEvent,
  /// Cells that left the tail during this tick's trim.
  pub shed: Vec<Position>,
}

/// Everything a run mutates, in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
  pub snake: Snake,
  pub food: Position,
  pub active: Velocity,
  pub input: InputController,
  pub score: ScoreKeeper,
  pub speed: u32,
}

impl GameState {
  pub fn new(config:&GameConfig, mut score:ScoreKeeper) -> Self {
    score.reset(config.initial_tail_length);
    GameState {
      snake: Snake::new(config.start_head),
      food: config.start_food,
      active: Velocity::ZERO,
      input: InputController::new(),
      score,
      speed: config.base_speed,
    }
  }

  /// Fresh run. The high score survives.
  pub fn reset(&mut self, config:&GameConfig) {
    self.snake = Snake::new(config.start_head);
    self.food = config.start_food;
    self.active = Velocity::ZERO;
    self.input.reset();
    self.score.reset(config.initial_tail_length);
    self.speed = config.base_speed;
  }

  /// Checked against the trail as it was before this tick's head joins it.
  pub fn collision_at(&self, head:Position) -> Option<Collision> {
    if !head.in_bounds() {
      return Some(Collision::Wall);
    }
    if self.snake.occupies(head) {
      return Some(Collision::SelfCollision);
    }
    None
  }

  pub fn do_game_tick(&mut self, config:&GameConfig, spawner:&mut FoodSpawner) -> TickReport {
    self.active = self.input.pending();
    let head = self.snake.advance(self.active);

    // A snake that has not started moving sits on its own trail.
    if !self.active.is_zero() {
      if let Some(collision) = self.collision_at(head) {
        return TickReport {event: GameEvent::GameOver(collision), shed: Vec::new()};
      }
    }

    let ate = head == self.food;
    if ate {
      self.food = spawner.respawn();
      self.score.on_food_eaten();
    }
    let shed = self.snake.grow_or_shift(self.score.tail_length());
    self.speed = self.speed.max(config.speed_for_score(self.score.score()));

    let event = if ate {
      GameEvent::FoodEaten
    } else if self.active.is_zero() {
      GameEvent::Idle
    } else {
      GameEvent::GeneralMovement
    };
    TickReport {event, shed}
  }
}
