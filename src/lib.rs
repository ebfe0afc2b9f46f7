//! Skyhop core crate.
//!
//! A small canvas platformer: a square that runs, double-jumps with a particle
//! burst on the second jump, and can catch a falling powerup that tints it for a
//! few seconds. The simulation is plain Rust (`game::World`) so it runs and
//! tests natively; `start_game()` wires it to the browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Bounds, InputSnapshot, InputTracker, Rect, World};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (hot reload) leaves the existing logger in place.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start the game with the built-in tuning.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_game_mode(GameConfig::default()).map_err(JsValue::from)
}

/// Start the game with a JSON tuning override; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    game::start_game_mode(config).map_err(JsValue::from)
}
