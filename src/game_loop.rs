use std::time::Duration;

use log::{debug, info};

use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::game_logic::{GameEvent, GameState};
use crate::grid::Grid;
use crate::platform::{Renderer, Scheduler, Sound, SoundPlayer, Store};
use crate::rand::RandomSource;
use crate::scene;
use crate::score::ScoreKeeper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  NotStarted,
  Running,
  GameOver,
}

pub struct Platform {
  pub renderer: Box<dyn Renderer>,
  pub scheduler: Box<dyn Scheduler>,
  pub sound: Box<dyn SoundPlayer>,
  pub store: Box<dyn Store>,
  pub rng: Box<dyn RandomSource>,
}

/// Drives a game: owns the phase, the state and every collaborator.
///
/// The host calls `tick` whenever a delay handed to the scheduler runs
/// out, and forwards input through the `on_*` methods between ticks.
pub struct GameLoop {
  config: GameConfig,
  grid: Grid,
  phase: Phase,
  state: GameState,
  spawner: FoodSpawner,
  renderer: Box<dyn Renderer>,
  scheduler: Box<dyn Scheduler>,
  sound: Box<dyn SoundPlayer>,
  store: Box<dyn Store>,
}

impl GameLoop {
  pub fn new(config:GameConfig, platform:Platform) -> Self {
    let score = ScoreKeeper::load(
      platform.store.as_ref(),
      &config.high_score_key,
      config.initial_tail_length,
    );
    let state = GameState::new(&config, score);
    GameLoop {
      grid: Grid::new(config.canvas_size),
      config,
      phase: Phase::NotStarted,
      state,
      spawner: FoodSpawner::new(platform.rng),
      renderer: platform.renderer,
      scheduler: platform.scheduler,
      sound: platform.sound,
      store: platform.store,
    }
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn state(&self) -> &GameState {
    &self.state
  }

  pub fn config(&self) -> &GameConfig {
    &self.config
  }

  pub fn tick_interval(&self) -> Duration {
    Duration::from_secs_f64(1.0 / self.state.speed.max(1) as f64)
  }

  pub fn show_title(&mut self) {
    scene::draw_title(self.renderer.as_mut(), &self.grid);
  }

  /// Click or tap. Starts a fresh run unless one is already going, and
  /// plays its first tick immediately. Returns whether a run started.
  pub fn start(&mut self) -> bool {
    if self.phase == Phase::Running {
      return false;
    }
    self.state.reset(&self.config);
    self.phase = Phase::Running;
    info!("run started, high score {}", self.state.score.high_score());
    self.tick();
    true
  }

  pub fn tick(&mut self) {
    if self.phase != Phase::Running {
      return;
    }

    let report = self.state.do_game_tick(&self.config, &mut self.spawner);
    match report.event {
      GameEvent::GameOver(collision) => {
        self.state.score.on_game_over(self.store.as_mut());
        self.phase = Phase::GameOver;
        info!(
          "game over ({:?}) score {} high score {}",
          collision,
          self.state.score.score(),
          self.state.score.high_score()
        );
        scene::draw_game_over(
          self.renderer.as_mut(),
          &self.grid,
          self.state.score.score(),
          self.state.score.high_score(),
        );
        return;
      }
      GameEvent::FoodEaten => {
        debug!("food eaten, score {} next food at {:?}", self.state.score.score(), self.state.food);
        self.sound.play(Sound::Gulp);
      }
      GameEvent::Idle | GameEvent::GeneralMovement => {}
    }

    scene::draw_board(self.renderer.as_mut(), &self.grid, &self.state, &report.shed);
    self.scheduler.schedule_after(self.tick_interval());
  }

  pub fn on_key(&mut self, key:&str) -> bool {
    let active = self.state.active;
    self.state.input.on_key(key, active)
  }

  /// Acts as a click, then anchors a swipe on the run that is now going.
  pub fn on_touch_start(&mut self, x:f64, y:f64) {
    self.start();
    self.state.input.on_touch_start(x, y);
  }

  pub fn on_touch_move(&mut self, x:f64, y:f64) -> bool {
    let active = self.state.active;
    self.state.input.on_touch_move(x, y, active)
  }
}
