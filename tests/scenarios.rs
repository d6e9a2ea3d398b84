use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};

use snake_canvas::grid::{Grid, Position};
use snake_canvas::headless::{
  ManualScheduler, MemoryStore, RecordingRenderer, RecordingSoundPlayer, SequenceRandom,
};
use snake_canvas::platform::{Sound, Store};
use snake_canvas::rand::RandomSource;
use snake_canvas::scene;
use snake_canvas::{GameConfig, GameLoop, Phase, Platform};

struct Seeded(StdRng);

impl RandomSource for Seeded {
  fn next_f64(&mut self) -> f64 {
    self.0.gen::<f64>()
  }
}

struct Session {
  game: GameLoop,
  renderer: RecordingRenderer,
  scheduler: ManualScheduler,
  sound: RecordingSoundPlayer,
  store: MemoryStore,
}

impl Session {
  fn new(config:GameConfig, store:MemoryStore, rng:Box<dyn RandomSource>) -> Self {
    let renderer = RecordingRenderer::default();
    let scheduler = ManualScheduler::default();
    let sound = RecordingSoundPlayer::default();
    let game = GameLoop::new(config, Platform {
      renderer: Box::new(renderer.clone()),
      scheduler: Box::new(scheduler.clone()),
      sound: Box::new(sound.clone()),
      store: Box::new(store.clone()),
      rng,
    });
    Session {game, renderer, scheduler, sound, store}
  }

  fn default_with(store:MemoryStore) -> Self {
    Session::new(GameConfig::default(), store, Box::new(SequenceRandom::new(vec![0.31, 0.71])))
  }

  /// Fires the pending tick. Returns false when nothing was scheduled.
  fn step(&mut self) -> bool {
    if self.scheduler.take().is_none() {
      return false;
    }
    self.game.tick();
    true
  }

  fn steps(&mut self, n:usize) {
    for _ in 0..n {
      assert!(self.step(), "loop stopped early");
    }
  }
}

#[test]
fn test_five_ticks_right() {
  let mut s = Session::default_with(MemoryStore::default());
  s.game.start();
  s.game.on_key("ArrowRight");
  s.steps(5);

  let state = s.game.state();
  assert_eq!(state.snake.head(), Position::new(15, 10));
  assert_eq!(state.score.score(), 0);
  assert_eq!(state.snake.len(), 2);
  assert_eq!(s.game.phase(), Phase::Running);
}

#[test]
fn test_eating_moves_food_and_grows_target() {
  let mut s = Session::default_with(MemoryStore::default());
  s.game.start();
  s.game.on_key("ArrowUp");
  s.steps(5);
  s.game.on_key("ArrowLeft");
  s.steps(4);
  s.renderer.clear();
  s.steps(1);

  let state = s.game.state();
  assert_eq!(state.snake.head(), Position::new(5, 5));
  assert_eq!(state.score.score(), 1);
  assert_eq!(state.score.tail_length(), 3);
  assert_eq!(state.snake.len(), 3);
  assert_eq!(s.sound.played(), vec![Sound::Gulp]);

  let grid = Grid::new(400.0);
  assert_eq!(state.food, Position::new(6, 14));
  assert_eq!(s.renderer.rects_with(&scene::FOOD), vec![grid.cell_pixel_rect(Position::new(6, 14))]);
  assert!(s.renderer.texts().contains(&"Score: 1".to_string()));
}

#[test]
fn test_wall_updates_high_score_once() {
  let config = GameConfig {start_food: Position::new(12, 10), ..GameConfig::default()};
  let store = MemoryStore::with_entry("snakeHighScore", "0");
  let mut s = Session::new(config, store, Box::new(SequenceRandom::new(vec![0.0, 0.0])));
  s.game.start();
  s.game.on_key("d");
  while s.step() {}

  assert_eq!(s.game.phase(), Phase::GameOver);
  assert_eq!(s.game.state().snake.head(), Position::new(20, 10));
  assert_eq!(s.game.state().score.high_score(), 1);
  assert_eq!(s.store.writes(), 1);
  assert_eq!(s.store.get("snakeHighScore").as_deref(), Some("1"));

  let texts = s.renderer.texts();
  assert_eq!(&texts[texts.len() - 4..], &["Game Over!", "Score: 1", "High Score: 1", "Click to Restart"]);

  // nothing left to tick, and stray ticks do nothing
  s.game.tick();
  assert!(!s.scheduler.is_pending());
  assert_eq!(s.store.writes(), 1);
}

#[test]
fn test_high_score_survives_restart_of_process() {
  let store = MemoryStore::with_entry("snakeHighScore", "7");
  let first = Session::default_with(store.clone());
  assert_eq!(first.game.state().score.high_score(), 7);
  drop(first);

  let second = Session::default_with(store);
  assert_eq!(second.game.state().score.high_score(), 7);
}

#[test]
fn test_reverse_key_ignored_mid_run() {
  let mut s = Session::default_with(MemoryStore::default());
  s.game.start();
  s.game.on_key("w");
  s.steps(1);
  assert!(!s.game.on_key("s"));
  s.steps(1);
  assert_eq!(s.game.state().snake.head(), Position::new(10, 8));
  assert_eq!(s.game.phase(), Phase::Running);
}

#[test]
fn test_interval_speeds_up_with_score() {
  let config = GameConfig {
    start_food: Position::new(11, 10),
    medium_threshold: 0,
    fast_threshold: 1,
    ..GameConfig::default()
  };
  let rng = SequenceRandom::new(vec![0.66, 0.51, 0.76, 0.51]);
  let mut s = Session::new(config, MemoryStore::default(), Box::new(rng));
  s.game.start();
  s.game.on_key("ArrowRight");
  s.steps(3);
  assert_eq!(s.game.state().score.score(), 2);

  let secs = |speed:f64| Duration::from_secs_f64(1.0 / speed);
  assert_eq!(s.scheduler.history(), vec![secs(7.0), secs(9.0), secs(9.0), secs(11.0)]);
}

#[test]
fn test_random_play_keeps_invariants() {
  let mut driver = StdRng::seed_from_u64(0x5eed);
  let keys = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "w", "a", "s", "d"];

  for run in 0..50u64 {
    let rng = Seeded(StdRng::seed_from_u64(run));
    let mut s = Session::new(GameConfig::default(), MemoryStore::default(), Box::new(rng));
    s.game.start();

    let mut last_score = 0;
    let mut last_interval = s.game.tick_interval();
    let mut ticks = 0;
    while s.scheduler.is_pending() && ticks < 2_000 {
      if driver.gen_bool(0.3) {
        s.game.on_key(keys[driver.gen_range(0..keys.len())]);
      }
      s.step();
      ticks += 1;

      let state = s.game.state();
      assert!(state.score.score() >= last_score);
      assert!(state.food.in_bounds());
      if s.game.phase() == Phase::Running {
        assert!(state.snake.len() <= state.score.tail_length());
        assert!(s.game.tick_interval() <= last_interval);
        last_interval = s.game.tick_interval();
      } else {
        assert_eq!(s.game.phase(), Phase::GameOver);
        assert!(!s.scheduler.is_pending());
      }
      last_score = state.score.score();
    }
  }
}
