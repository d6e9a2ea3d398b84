use wasm_bindgen::prelude::*;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
  fn next_f64(&mut self) -> f64;
}

/// Uniform integer in `[min, max)`.
pub fn int(rng:&mut dyn RandomSource, min:i32, max:i32) -> i32 {
  (rng.next_f64()*(max as f64 - min as f64) + min as f64).floor() as i32
}

/// The browser's `Math.random`. Only usable when running inside JavaScript.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
  fn next_f64(&mut self) -> f64 {
    random()
  }
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = Math, js_name = random)]
  fn random() -> f64;
}
