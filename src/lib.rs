//! Whimsy Engine - physics-driven page decorations in WASM
//!
//! Two independent mini-engines run per animation frame:
//! - a draggable spring toggle (vertical stretch + rotational swing) that
//!   flips the page theme when pulled far enough, and
//! - a falling-body field that drops circular sprites onto collision
//!   geometry projected from the page's layout.
//!
//! Architecture:
//! - core/    - math, seeded RNG, frame scheduler
//! - domain/  - serde-backed tuning config
//! - systems/ - rigid-body world, spring toggle
//! - engine/  - orchestration + wasm facade

pub mod core;
pub mod domain;
pub mod engine;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine module (panic hook + one startup log line).
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Whimsy WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{EngineConfig, FieldConfig, SpringConfig};
pub use engine::{Engine, EngineCore, ObstacleProvider};
