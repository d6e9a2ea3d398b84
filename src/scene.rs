use crate::game_logic::GameState;
use crate::grid::{Grid, Position};
use crate::platform::{Fill, Renderer};

pub const BACKGROUND:Fill = Fill::Color("black");
pub const TEXT:Fill = Fill::Color("white");
pub const FOOD:Fill = Fill::Color("red");
pub const BODY:Fill = Fill::Color("green");
pub const HEAD:Fill = Fill::Color("orange");

const TITLE_FONT:&str = "30px Verdana";
const SCORE_FONT:&str = "10px Verdana";
const BANNER_FONT:&str = "50px Verdana";
const SUMMARY_FONT:&str = "20px Verdana";
const BANNER_STOPS:&[(f32,&str)] = &[(0.0, "magenta"), (0.5, "blue"), (1.0, "red")];

pub fn draw_title(renderer:&mut dyn Renderer, grid:&Grid) {
  let size = grid.canvas_size();
  renderer.fill_rect(grid.full_rect(), &BACKGROUND);
  renderer.fill_text("Click to Start", size/2.0 - 70.0, size/2.0, TITLE_FONT, &TEXT);
}

/// One running frame. `shed` holds the cells trimmed from the tail this
/// tick; they are still painted so the body shows where it was when the
/// head moved.
pub fn draw_board(renderer:&mut dyn Renderer, grid:&Grid, state:&GameState, shed:&[Position]) {
  renderer.fill_rect(grid.full_rect(), &BACKGROUND);
  renderer.fill_rect(grid.cell_pixel_rect(state.food), &FOOD);

  let trail = state.snake.len().saturating_sub(1);
  for part in shed.iter().chain(state.snake.parts().take(trail)) {
    renderer.fill_rect(grid.cell_pixel_rect(*part), &BODY);
  }
  renderer.fill_rect(grid.cell_pixel_rect(state.snake.head()), &HEAD);

  let x = grid.canvas_size() - 60.0;
  renderer.fill_text(&format!("Score: {}", state.score.score()), x, 20.0, SCORE_FONT, &TEXT);
  renderer.fill_text(&format!("High Score: {}", state.score.high_score()), x, 40.0, SCORE_FONT, &TEXT);
}

pub fn draw_game_over(renderer:&mut dyn Renderer, grid:&Grid, score:u32, high_score:u32) {
  let size = grid.canvas_size();
  let (mid_x, mid_y) = (size/2.0, size/2.0);
  renderer.fill_rect(grid.full_rect(), &BACKGROUND);

  let banner = Fill::HorizontalGradient {width: size, stops: BANNER_STOPS};
  renderer.fill_text("Game Over!", size/6.5, mid_y, BANNER_FONT, &banner);

  renderer.fill_text(&format!("Score: {score}"), mid_x - 40.0, mid_y + 40.0, SUMMARY_FONT, &TEXT);
  renderer.fill_text(&format!("High Score: {high_score}"), mid_x - 60.0, mid_y + 70.0, SUMMARY_FONT, &TEXT);
  renderer.fill_text("Click to Restart", mid_x - 70.0, mid_y + 100.0, SUMMARY_FONT, &TEXT);
}
