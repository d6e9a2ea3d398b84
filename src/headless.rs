//! In-memory host for running the game without a browser: bots, replays,
//! native front ends and tests all drive `GameLoop` through these.
//!
//! Each type is a cheap handle: clones share state, so the caller can keep
//! one copy and hand the other to `GameLoop`. Nothing here panics.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use log::warn;

use crate::grid::PixelRect;
use crate::platform::{Fill, Renderer, Scheduler, Sound, SoundPlayer, Store};
use crate::rand::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
  Rect {rect: PixelRect, fill: Fill},
  Text {text: String, x: f64, y: f64, font: String, fill: Fill},
}

#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
  commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl RecordingRenderer {
  pub fn commands(&self) -> Vec<DrawCommand> {
    self.commands.borrow().clone()
  }

  pub fn texts(&self) -> Vec<String> {
    self.commands.borrow().iter().filter_map(|c| match c {
      DrawCommand::Text {text, ..} => Some(text.clone()),
      _ => None,
    }).collect()
  }

  pub fn rects_with(&self, fill:&Fill) -> Vec<PixelRect> {
    self.commands.borrow().iter().filter_map(|c| match c {
      DrawCommand::Rect {rect, fill: f} if f == fill => Some(*rect),
      _ => None,
    }).collect()
  }

  pub fn clear(&self) {
    self.commands.borrow_mut().clear();
  }
}

impl Renderer for RecordingRenderer {
  fn fill_rect(&mut self, rect:PixelRect, fill:&Fill) {
    self.commands.borrow_mut().push(DrawCommand::Rect {rect, fill: fill.clone()});
  }

  fn fill_text(&mut self, text:&str, x:f64, y:f64, font:&str, fill:&Fill) {
    self.commands.borrow_mut().push(DrawCommand::Text {
      text: text.to_string(),
      x,
      y,
      font: font.to_string(),
      fill: fill.clone(),
    });
  }
}

/// Holds the pending tick instead of waiting for it. A second request
/// replaces the first, like a host that keeps one timer.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
  pending: Rc<RefCell<Option<Duration>>>,
  history: Rc<RefCell<Vec<Duration>>>,
}

impl ManualScheduler {
  pub fn take(&self) -> Option<Duration> {
    self.pending.borrow_mut().take()
  }

  pub fn is_pending(&self) -> bool {
    self.pending.borrow().is_some()
  }

  pub fn history(&self) -> Vec<Duration> {
    self.history.borrow().clone()
  }
}

impl Scheduler for ManualScheduler {
  fn schedule_after(&mut self, delay:Duration) {
    if let Some(dropped) = self.pending.borrow_mut().replace(delay) {
      warn!("tick after {:?} replaced by one after {:?}", dropped, delay);
    }
    self.history.borrow_mut().push(delay);
  }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSoundPlayer {
  played: Rc<RefCell<Vec<Sound>>>,
}

impl RecordingSoundPlayer {
  pub fn played(&self) -> Vec<Sound> {
    self.played.borrow().clone()
  }
}

impl SoundPlayer for RecordingSoundPlayer {
  fn play(&mut self, sound:Sound) {
    self.played.borrow_mut().push(sound);
  }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  entries: Rc<RefCell<HashMap<String,String>>>,
  writes: Rc<RefCell<usize>>,
}

impl MemoryStore {
  pub fn with_entry(key:&str, value:&str) -> Self {
    let store = MemoryStore::default();
    store.entries.borrow_mut().insert(key.to_string(), value.to_string());
    store
  }

  pub fn writes(&self) -> usize {
    *self.writes.borrow()
  }
}

impl Store for MemoryStore {
  fn get(&self, key:&str) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }

  fn set(&mut self, key:&str, value:&str) {
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    *self.writes.borrow_mut() += 1;
  }
}

/// Replays a fixed list of samples, wrapping around at the end. An empty
/// list always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
  values: Vec<f64>,
  next: usize,
}

impl SequenceRandom {
  pub fn new(values:Vec<f64>) -> Self {
    SequenceRandom {values, next: 0}
  }
}

impl RandomSource for SequenceRandom {
  fn next_f64(&mut self) -> f64 {
    let value = match self.values.get(self.next) {
      Some(v) => *v,
      None => return 0.0,
    };
    self.next = (self.next + 1) % self.values.len();
    value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_handles_share_state() {
    let store = MemoryStore::default();
    let mut writer = store.clone();
    writer.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.writes(), 1);

    let scheduler = ManualScheduler::default();
    let mut handle = scheduler.clone();
    handle.schedule_after(Duration::from_millis(5));
    assert!(scheduler.is_pending());
    assert_eq!(scheduler.take(), Some(Duration::from_millis(5)));
    assert!(!scheduler.is_pending());
    assert_eq!(scheduler.history().len(), 1);
  }

  #[test]
  fn test_sequence_wraps() {
    let mut rng = SequenceRandom::new(vec![0.1, 0.2]);
    assert_eq!(rng.next_f64(), 0.1);
    assert_eq!(rng.next_f64(), 0.2);
    assert_eq!(rng.next_f64(), 0.1);
  }

  #[test]
  fn test_second_schedule_replaces_pending() {
    let scheduler = ManualScheduler::default();
    let mut handle = scheduler.clone();
    handle.schedule_after(Duration::from_millis(5));
    handle.schedule_after(Duration::from_millis(9));
    assert_eq!(scheduler.take(), Some(Duration::from_millis(9)));
    assert_eq!(scheduler.take(), None);
    assert_eq!(scheduler.history(), vec![Duration::from_millis(5), Duration::from_millis(9)]);
  }

  #[test]
  fn test_empty_sequence_yields_zero() {
    let mut rng = SequenceRandom::new(Vec::new());
    assert_eq!(rng.next_f64(), 0.0);
    assert_eq!(crate::rand::int(&mut rng, 0, 19), 0);
  }
}
