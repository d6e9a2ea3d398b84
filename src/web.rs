//! Browser implementations of the platform traits, and the page wiring.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::warn;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
  CanvasRenderingContext2d, Document, Event, EventTarget, HtmlAudioElement,
  HtmlCanvasElement, KeyboardEvent, Storage, TouchEvent, Window,
};

use crate::config::GameConfig;
use crate::error::SetupError;
use crate::game_loop::{GameLoop, Platform};
use crate::grid::PixelRect;
use crate::platform::{Fill, Renderer, Scheduler, Sound, SoundPlayer, Store};
use crate::rand::MathRandom;

const CANVAS_ID:&str = "game";

pub struct CanvasRenderer {
  context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
  pub fn new(context:CanvasRenderingContext2d) -> Self {
    CanvasRenderer {context}
  }

  fn apply_fill(&self, fill:&Fill) {
    match fill {
      Fill::Color(colour) => self.context.set_fill_style(&JsValue::from_str(colour)),
      Fill::HorizontalGradient {width, stops} => {
        let gradient = self.context.create_linear_gradient(0.0, 0.0, *width, 0.0);
        for (offset, colour) in stops.iter() {
          if let Err(e) = gradient.add_color_stop(*offset, colour) {
            warn!("bad gradient stop {colour}: {e:?}");
          }
        }
        self.context.set_fill_style(&JsValue::from(gradient));
      }
    }
  }
}

impl Renderer for CanvasRenderer {
  fn fill_rect(&mut self, rect:PixelRect, fill:&Fill) {
    self.apply_fill(fill);
    self.context.fill_rect(rect.x, rect.y, rect.w, rect.h);
  }

  fn fill_text(&mut self, text:&str, x:f64, y:f64, font:&str, fill:&Fill) {
    self.apply_fill(fill);
    self.context.set_font(font);
    if let Err(e) = self.context.fill_text(text, x, y) {
      warn!("fill_text failed: {e:?}");
    }
  }
}

/// `localStorage`, when the page is allowed to use it.
pub struct LocalStorageStore {
  storage: Option<Storage>,
}

impl LocalStorageStore {
  pub fn new(window:&Window) -> Self {
    let storage = window.local_storage().ok().flatten();
    if storage.is_none() {
      warn!("localStorage unavailable, high score will not persist");
    }
    LocalStorageStore {storage}
  }
}

impl Store for LocalStorageStore {
  fn get(&self, key:&str) -> Option<String> {
    self.storage.as_ref()?.get_item(key).ok().flatten()
  }

  fn set(&mut self, key:&str, value:&str) {
    if let Some(storage) = &self.storage {
      if let Err(e) = storage.set_item(key, value) {
        warn!("could not store {key}: {e:?}");
      }
    }
  }
}

pub struct AudioPlayer {
  gulp: HtmlAudioElement,
}

impl AudioPlayer {
  pub fn new(gulp_src:&str) -> Result<Self,SetupError> {
    let gulp = HtmlAudioElement::new_with_src(gulp_src).map_err(SetupError::js)?;
    gulp.set_preload("auto");
    Ok(AudioPlayer {gulp})
  }
}

impl SoundPlayer for AudioPlayer {
  fn play(&mut self, sound:Sound) {
    let element = match sound {
      Sound::Gulp => &self.gulp,
    };
    if let Err(e) = element.play() {
      warn!("could not play {sound:?}: {e:?}");
    }
  }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `setTimeout` with a callback installed once the game exists.
pub struct TimeoutScheduler {
  window: Window,
  tick: TickSlot,
}

impl TimeoutScheduler {
  fn new(window:Window, tick:TickSlot) -> Self {
    TimeoutScheduler {window, tick}
  }
}

impl Scheduler for TimeoutScheduler {
  fn schedule_after(&mut self, delay:Duration) {
    let tick = self.tick.borrow();
    let callback = match tick.as_ref() {
      Some(callback) => callback,
      None => {
        warn!("tick scheduled before the callback was installed");
        return;
      }
    };
    let millis = delay.as_millis().min(i32::MAX as u128) as i32;
    if let Err(e) = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
      callback.as_ref().unchecked_ref(),
      millis,
    ) {
      warn!("setTimeout failed: {e:?}");
    }
  }
}

fn listen(target:&EventTarget, event:&str, handler:impl FnMut(Event) + 'static)
  -> Result<(),SetupError>
{
  let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
  target
    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    .map_err(SetupError::js)?;
  closure.forget();
  Ok(())
}

fn first_touch(event:&Event) -> Option<(f64,f64)> {
  let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
  Some((touch.client_x() as f64, touch.client_y() as f64))
}

fn find_canvas(document:&Document) -> Result<HtmlCanvasElement,SetupError> {
  document
    .get_element_by_id(CANVAS_ID)
    .ok_or_else(|| SetupError::MissingElement(CANVAS_ID.to_string()))?
    .dyn_into::<HtmlCanvasElement>()
    .map_err(|_| SetupError::NotACanvas(CANVAS_ID.to_string()))
}

/// Builds the game on the page's `#game` canvas and hooks up input.
pub fn mount() -> Result<Rc<RefCell<GameLoop>>,SetupError> {
  let window = web_sys::window().ok_or(SetupError::NoWindow)?;
  let document = window.document().ok_or(SetupError::NoDocument)?;
  let canvas = find_canvas(&document)?;
  let context = canvas
    .get_context("2d").map_err(SetupError::js)?
    .ok_or(SetupError::NoContext)?
    .dyn_into::<CanvasRenderingContext2d>()
    .map_err(|_| SetupError::NoContext)?;

  let config = GameConfig::with_canvas_size(canvas.width() as f64);
  let tick:TickSlot = Rc::new(RefCell::new(None));
  let platform = Platform {
    renderer: Box::new(CanvasRenderer::new(context)),
    scheduler: Box::new(TimeoutScheduler::new(window.clone(), tick.clone())),
    sound: Box::new(AudioPlayer::new(&config.gulp_sound_src)?),
    store: Box::new(LocalStorageStore::new(&window)),
    rng: Box::new(MathRandom),
  };
  let game = Rc::new(RefCell::new(GameLoop::new(config, platform)));

  {
    let game = game.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
      game.borrow_mut().tick();
    }) as Box<dyn FnMut()>));
  }

  {
    let game = game.clone();
    listen(&document, "keydown", move |event| {
      if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
        game.borrow_mut().on_key(&event.key());
      }
    })?;
  }
  {
    let game = game.clone();
    listen(&canvas, "click", move |_| {
      game.borrow_mut().start();
    })?;
  }
  {
    let game = game.clone();
    listen(&canvas, "touchstart", move |event| {
      event.prevent_default();
      let mut game = game.borrow_mut();
      match first_touch(&event) {
        Some((x, y)) => game.on_touch_start(x, y),
        None => {game.start();}
      }
    })?;
  }
  {
    let game = game.clone();
    listen(&canvas, "touchmove", move |event| {
      event.prevent_default();
      if let Some((x, y)) = first_touch(&event) {
        game.borrow_mut().on_touch_move(x, y);
      }
    })?;
  }

  game.borrow_mut().show_title();
  Ok(game)
}
