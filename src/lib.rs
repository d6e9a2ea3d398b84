pub mod config;
pub mod error;
pub mod food;
pub mod game_logic;
pub mod game_loop;
pub mod grid;
pub mod headless;
pub mod input;
pub mod platform;
pub mod rand;
pub mod scene;
pub mod score;
pub mod snake;
pub mod web;

use wasm_bindgen::prelude::*;

pub use config::GameConfig;
pub use game_loop::{GameLoop, Phase, Platform};

#[wasm_bindgen(start)]
pub fn main() -> Result<(),JsValue> {
  let _ = console_log::init_with_level(log::Level::Debug);
  web::mount()?;
  Ok(())
}
