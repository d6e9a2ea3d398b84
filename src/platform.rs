//! The narrow seams between the game and whatever hosts it.
//!
//! `GameLoop` only ever talks to these traits. The browser implementations
//! live in `web`, in-memory ones in `headless`.

use std::time::Duration;

use crate::grid::PixelRect;

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
  Color(&'static str),
  /// Left-to-right linear gradient across the given width, as `(offset, colour)` stops.
  HorizontalGradient {width: f64, stops: &'static [(f32, &'static str)]},
}

pub trait Renderer {
  fn fill_rect(&mut self, rect:PixelRect, fill:&Fill);
  fn fill_text(&mut self, text:&str, x:f64, y:f64, font:&str, fill:&Fill);
}

/// Arranges for the host to call `GameLoop::tick` once after `delay`.
///
/// At most one tick is ever pending: the loop only asks for the next one
/// after the current tick has finished.
pub trait Scheduler {
  fn schedule_after(&mut self, delay:Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
  Gulp,
}

/// Fire-and-forget audio.
pub trait SoundPlayer {
  fn play(&mut self, sound:Sound);
}

/// String key/value persistence.
pub trait Store {
  fn get(&self, key:&str) -> Option<String>;
  fn set(&mut self, key:&str, value:&str);
}
