use crate::snake::{Direction, Velocity};

/// Arrow keys and WASD, by `KeyboardEvent.key`.
pub fn direction_for_key(key:&str) -> Option<Direction> {
  match key {
    "ArrowUp"    | "w" | "W" => Some(Direction::Up),
    "ArrowDown"  | "s" | "S" => Some(Direction::Dn),
    "ArrowLeft"  | "a" | "A" => Some(Direction::Lf),
    "ArrowRight" | "d" | "D" => Some(Direction::Rt),
    _ => None,
  }
}

/// Direction of a drag, given `start - current` on each axis. The dominant
/// axis wins; ties go vertical.
pub fn swipe_direction(dx:f64, dy:f64) -> Direction {
  if dx.abs() > dy.abs() {
    if dx > 0.0 {Direction::Lf} else {Direction::Rt}
  } else if dy > 0.0 {
    Direction::Up
  } else {
    Direction::Dn
  }
}

/// Turns key presses and swipes into the pending velocity. Requests are
/// checked against the active velocity; the last accepted one wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputController {
  pending: Velocity,
  touch_anchor: Option<(f64,f64)>,
}

impl InputController {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn pending(&self) -> Velocity {
    self.pending
  }

  pub fn reset(&mut self) {
    self.pending = Velocity::ZERO;
    self.touch_anchor = None;
  }

  /// Returns false when the request would reverse `active`.
  pub fn request(&mut self, direction:Direction, active:Velocity) -> bool {
    let velocity = direction.velocity();
    if velocity.reverses(active) {
      return false;
    }
    self.pending = velocity;
    true
  }

  pub fn on_key(&mut self, key:&str, active:Velocity) -> bool {
    match direction_for_key(key) {
      Some(direction) => self.request(direction, active),
      None => false,
    }
  }

  pub fn on_touch_start(&mut self, x:f64, y:f64) {
    self.touch_anchor = Some((x, y));
  }

  /// One accepted turn per gesture; a rejected turn leaves the anchor so
  /// the same drag can still produce a valid one.
  pub fn on_touch_move(&mut self, x:f64, y:f64, active:Velocity) -> bool {
    let (start_x, start_y) = match self.touch_anchor {
      Some(anchor) => anchor,
      None => return false,
    };
    let direction = swipe_direction(start_x - x, start_y - y);
    if !self.request(direction, active) {
      return false;
    }
    self.touch_anchor = None;
    true
  }
}
