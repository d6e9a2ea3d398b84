use std::collections::VecDeque;

use crate::grid::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {Up,Dn,Lf,Rt}

impl Direction {
  pub fn velocity(self) -> Velocity {
    match self {
      Direction::Up => Velocity::new( 0,-1),
      Direction::Dn => Velocity::new( 0, 1),
      Direction::Lf => Velocity::new(-1, 0),
      Direction::Rt => Velocity::new( 1, 0),
    }
  }
}

/// Per-tick displacement of the head. Always a unit step on one axis, or
/// zero before the first move of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
  pub dx: i32,
  pub dy: i32,
}

impl Velocity {
  pub const ZERO:Velocity = Velocity {dx: 0, dy: 0};

  pub const fn new(dx:i32, dy:i32) -> Self {
    Velocity {dx, dy}
  }

  pub fn is_zero(self) -> bool {
    self == Velocity::ZERO
  }

  /// True when `self` points exactly against `other` on a shared axis.
  pub fn reverses(self, other:Velocity) -> bool {
    !other.is_zero() && self.dx == -other.dx && self.dy == -other.dy
  }
}

impl From<Direction> for Velocity {
  fn from(direction:Direction) -> Self {
    direction.velocity()
  }
}

/// The head plus the trail of cells it occupied on previous ticks.
///
/// `parts` is ordered oldest first. The current head joins the trail only
/// when `grow_or_shift` runs, so a freshly advanced head can be tested
/// against the trail before it becomes part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
  head: Position,
  parts: VecDeque<Position>,
}

impl Snake {
  pub fn new(head:Position) -> Self {
    Snake {head, parts: VecDeque::new()}
  }

  pub fn head(&self) -> Position {
    self.head
  }

  pub fn parts(&self) -> impl Iterator<Item = &Position> + '_ {
    self.parts.iter()
  }

  pub fn len(&self) -> usize {
    self.parts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.parts.is_empty()
  }

  pub fn advance(&mut self, velocity:Velocity) -> Position {
    self.head = self.head.moved_by(velocity.dx, velocity.dy);
    self.head
  }

  pub fn occupies(&self, pos:Position) -> bool {
    self.parts.contains(&pos)
  }

  /// Appends the head to the trail and drops the oldest cells beyond
  /// `target_length`, returning them.
  pub fn grow_or_shift(&mut self, target_length:usize) -> Vec<Position> {
    self.parts.push_back(self.head);
    let mut shed = Vec::new();
    while self.parts.len() > target_length {
      shed.extend(self.parts.pop_front());
    }
    shed
  }
}
