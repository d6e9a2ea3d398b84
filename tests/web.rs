//! Browser smoke tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use snake_canvas::platform::Store;
use snake_canvas::rand::{MathRandom, RandomSource};
use snake_canvas::web::LocalStorageStore;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn math_random_is_unit_interval() {
  let mut rng = MathRandom;
  for _ in 0..100 {
    let v = rng.next_f64();
    assert!((0.0..1.0).contains(&v));
  }
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
  let window = web_sys::window().unwrap();
  let mut store = LocalStorageStore::new(&window);
  store.set("snakeHighScoreTest", "5");
  assert_eq!(store.get("snakeHighScoreTest").as_deref(), Some("5"));
}
