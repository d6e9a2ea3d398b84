pub const TILE_COUNT:i32 = 20;
const TILE_GAP:f64 = 2.0;

/// A cell on the board. Coordinates outside `0..TILE_COUNT` are legal
/// values; they only ever appear as the head of a snake that has just
/// left the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

impl Position {
  pub const fn new(x:i32, y:i32) -> Self {
    Position {x, y}
  }

  pub fn moved_by(self, dx:i32, dy:i32) -> Self {
    Position {x: self.x + dx, y: self.y + dy}
  }

  pub fn in_bounds(self) -> bool {
    (0..TILE_COUNT).contains(&self.x) && (0..TILE_COUNT).contains(&self.y)
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
  canvas_size: f64,
}

impl Grid {
  pub fn new(canvas_size:f64) -> Self {
    Grid {canvas_size}
  }

  pub fn tile_count(&self) -> i32 {
    TILE_COUNT
  }

  pub fn canvas_size(&self) -> f64 {
    self.canvas_size
  }

  pub fn full_rect(&self) -> PixelRect {
    PixelRect {x: 0.0, y: 0.0, w: self.canvas_size, h: self.canvas_size}
  }

  /// Painted square for a cell, leaving a gap to the next tile.
  pub fn cell_pixel_rect(&self, pos:Position) -> PixelRect {
    let pitch = self.canvas_size / TILE_COUNT as f64;
    let size = pitch - TILE_GAP;
    PixelRect {
      x: pos.x as f64 * pitch,
      y: pos.y as f64 * pitch,
      w: size,
      h: size,
    }
  }
}
