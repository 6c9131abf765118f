pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use bubble_engine::{clamp_points, BubbleId, GameConfig, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

/// Mix the wall clock and `Math.random` into a placement seed.
fn browser_seed() -> u64 {
    let clock = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    clock ^ (noise << 32) ^ noise
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = GameRunner::new(GameConfig::default(), browser_seed());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("bubble-game: initialized");
}

#[wasm_bindgen]
pub fn game_configure(json: &str) {
    with_runner(|r| r.configure(json));
}

#[wasm_bindgen]
pub fn game_set_viewport(width: f32) {
    with_runner(|r| r.set_viewport(width));
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Commands ----

/// `points` is the raw number from the input field; board size is the
/// container's client size at press time.
#[wasm_bindgen]
pub fn game_play(points: f64, width: f32, height: f32) {
    let points = clamp_points(points);
    with_runner(|r| r.push_input(InputEvent::Play { points, width, height }));
}

#[wasm_bindgen]
pub fn game_restart(points: f64, width: f32, height: f32) {
    let points = clamp_points(points);
    with_runner(|r| r.push_input(InputEvent::Restart { points, width, height }));
}

#[wasm_bindgen]
pub fn game_toggle_auto_play() {
    with_runner(|r| r.push_input(InputEvent::ToggleAutoPlay));
}

#[wasm_bindgen]
pub fn game_click(id: u32) {
    with_runner(|r| r.push_input(InputEvent::Click { id: BubbleId(id) }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json().to_owned())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}
