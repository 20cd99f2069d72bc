//! Runtime tuning knobs, loadable from JSON.
//!
//! Defaults reproduce the shipped feel of the page; a host can override any
//! subset at runtime (`Engine::load_config`) without rebuilding the wasm blob.

use serde::{Deserialize, Serialize};

/// Spring toggle tuning. Displacements are in CSS pixels, rotation in degrees,
/// velocities per frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Rest height of the toggle element.
    pub base_height: f32,
    /// Scale applied to the log-compressed drag distance.
    pub max_drag: f32,
    pub tension: f32,
    pub friction: f32,
    pub swing_tension: f32,
    pub swing_friction: f32,
    /// Vertical displacement a release must exceed to flip the theme.
    pub toggle_threshold: f32,
    pub max_rotation: f32,
    /// Fraction of the release rotation carried over as spin.
    pub release_spin: f32,
    /// Impulse injected by a hover wiggle.
    pub hover_kick: f32,
    /// Hover-wiggle spin is sampled in +/- this (degrees per frame).
    pub hover_spin: f32,
    /// Below this, position and velocity snap to exact rest.
    pub rest_epsilon: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            base_height: 150.0,
            max_drag: 200.0,
            tension: 0.15,
            friction: 0.8,
            swing_tension: 0.05,
            swing_friction: 0.92,
            toggle_threshold: 50.0,
            max_rotation: 60.0,
            release_spin: 0.05,
            hover_kick: 15.0,
            hover_spin: 5.0,
            rest_epsilon: 0.01,
        }
    }
}

/// Falling-body field tuning. Lengths in CSS pixels, velocities per frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Hard spawn cap; `spawn` refuses above this.
    pub max_bodies: usize,
    /// Bodies dropped at startup.
    pub initial_bodies: u32,
    /// One spawn attempt per this many frames (300 ~ 5s at 60fps). 0 disables.
    pub spawn_interval_frames: u64,
    /// Horizontal margin kept clear when sampling a spawn position.
    pub spawn_margin: f32,
    /// Spawn (and respawn) height above the visible top edge.
    pub spawn_height: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Initial horizontal velocity is sampled in +/- this.
    pub max_launch_speed: f32,
    /// Initial angular velocity is sampled in +/- this (radians per frame).
    pub max_spin: f32,
    /// How far below the viewport a body may fall before it is recycled.
    pub recycle_overshoot: f32,
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
    /// Downward gravity, pixels per frame squared.
    pub gravity: f32,
    /// Source sprite size; visual scale is diameter divided by this.
    pub texture_size: f32,
    /// Radius of the static circle that follows the host pointer.
    pub probe_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_bodies: 15,
            initial_bodies: 5,
            spawn_interval_frames: 300,
            spawn_margin: 50.0,
            spawn_height: -100.0,
            min_radius: 20.0,
            max_radius: 35.0,
            max_launch_speed: 5.0,
            max_spin: 0.1,
            recycle_overshoot: 100.0,
            restitution: 0.6,
            friction: 0.05,
            density: 0.005,
            gravity: 1.0,
            texture_size: 512.0,
            probe_radius: 30.0,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub spring: SpringConfig,
    pub field: FieldConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
