use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into the page.
#[derive(Debug, Error)]
pub enum SetupError {
  #[error("no global window")]
  NoWindow,
  #[error("window has no document")]
  NoDocument,
  #[error("element #{0} not found")]
  MissingElement(String),
  #[error("element #{0} is not a canvas")]
  NotACanvas(String),
  #[error("canvas has no 2d context")]
  NoContext,
  #[error("javascript error: {0}")]
  Js(String),
}

impl SetupError {
  pub fn js(value:JsValue) -> Self {
    SetupError::Js(format!("{:?}", value))
  }
}

impl From<SetupError> for JsValue {
  fn from(error:SetupError) -> Self {
    JsValue::from_str(&error.to_string())
  }
}
