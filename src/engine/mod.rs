//! Engine orchestration.
//!
//! `EngineCore` owns all mutable state (rigid world, spring toggle, scheduler,
//! RNG, viewport) and only orchestrates; the actual mechanics live in
//! `systems/`. The wasm host drives one `tick` per animation frame and feeds
//! discrete events (pointer, scroll, resize) through the entry points below.

use crate::core::math::{Rect, Viewport};
use crate::core::scheduler::{Scheduler, Slot};
use crate::domain::config::EngineConfig;
use crate::systems::rigid_world::RigidWorld;
use crate::systems::spring::SpringToggle;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "spawn/spawn.rs"]
mod spawn;
#[path = "env/environment.rs"]
mod environment;
#[path = "input/pointer.rs"]
mod pointer;
#[path = "render/render.rs"]
mod render;
#[path = "perf/frame_clock.rs"]
mod frame_clock;
mod facade;

pub use facade::Engine;
pub use render::RENDER_STRIDE;

use frame_clock::FrameClock;

/// Yields the obstacle rectangles the falling bodies should collide with.
/// On the web host these come from DOM bounding boxes; tests and other hosts
/// can supply anything.
pub trait ObstacleProvider {
    fn obstacles(&self) -> Vec<Rect>;
}

pub struct EngineCore {
    config: EngineConfig,
    world: RigidWorld,
    spring: SpringToggle,
    scheduler: Scheduler,
    viewport: Viewport,
    /// Obstacles from the last rebuild, replayed on resize and kept in sync
    /// with scroll translation.
    obstacles: Vec<Rect>,
    scroll_y: f32,
    frame: u64,
    rng_state: u32,
    light_theme: bool,
    /// Theme flips not yet collected by the host.
    pending_toggles: u32,
    render_buffer: Vec<f32>,
    /// Wall-clock sampling is skipped entirely unless this is set.
    perf_enabled: bool,
    clock: FrameClock,
}

impl EngineCore {
    /// Create an engine for the given viewport and drop the initial bodies.
    pub fn new(width: f32, height: f32) -> Self {
        init::create_engine_core(EngineConfig::default(), width, height)
    }

    pub fn with_config(config: EngineConfig, width: f32, height: f32) -> Self {
        init::create_engine_core(config, width, height)
    }

    /// Replace the tuning at runtime; live bodies and spring state carry over.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = EngineConfig::from_json(json)?;
        settings::apply_config(self, config);
        Ok(())
    }

    /// Reseed the RNG (deterministic replays, tests).
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Drop one body from above the viewport. Refuses (returns false) when
    /// the live count is at the cap.
    pub fn spawn(&mut self) -> bool {
        spawn::spawn_body(self)
    }

    /// Recreate all static geometry: boundary walls plus one barrier per
    /// non-empty obstacle rect. Idempotent; old barriers are fully discarded.
    pub fn rebuild_environment(&mut self, obstacles: &[Rect]) {
        environment::rebuild(self, obstacles);
    }

    pub fn rebuild_environment_from(&mut self, provider: &dyn ObstacleProvider) {
        let obstacles = provider.obstacles();
        environment::rebuild(self, &obstacles);
    }

    /// Page scrolled to `scroll_y`: translate the static geometry by the
    /// negated delta so barriers stay pinned to their on-page counterparts.
    pub fn notify_scroll(&mut self, scroll_y: f32) {
        environment::notify_scroll(self, scroll_y);
    }

    /// Viewport changed: rebuild the environment unconditionally.
    pub fn resize(&mut self, width: f32, height: f32) {
        environment::resize(self, width, height);
    }

    // === Pointer input ===

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        pointer::pointer_down(self, x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        pointer::pointer_move(self, x, y);
    }

    /// Release the toggle. Returns whether this drag flipped the theme.
    pub fn pointer_up(&mut self) -> bool {
        pointer::pointer_up(self)
    }

    /// Idle wiggle on hover; never toggles.
    pub fn hover_nudge(&mut self) {
        pointer::hover_nudge(self);
    }

    /// Static circle following the real pointer so bodies can be shoved.
    pub fn set_pointer_probe(&mut self, x: f32, y: f32) {
        pointer::set_pointer_probe(self, x, y);
    }

    pub fn clear_pointer_probe(&mut self) {
        pointer::clear_pointer_probe(self);
    }

    // === State queries ===

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    pub fn barrier_count(&self) -> usize {
        self.world.barrier_count()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn toggle_height(&self) -> f32 {
        self.spring.height()
    }

    pub fn toggle_rotation(&self) -> f32 {
        self.spring.rotation_deg()
    }

    /// Whether the spring still needs per-frame style writes.
    pub fn spring_active(&self) -> bool {
        self.scheduler.is_active(Slot::Spring)
    }

    pub fn is_light_theme(&self) -> bool {
        self.light_theme
    }

    pub fn set_light_theme(&mut self, light: bool) {
        settings::set_light_theme(self, light);
    }

    /// Drain one pending theme-flip event, if any.
    pub fn take_theme_toggled(&mut self) -> bool {
        settings::take_theme_toggled(self)
    }

    /// Flat per-body render data, repacked each tick.
    pub fn render_data(&self) -> &[f32] {
        &self.render_buffer
    }

    /// Opt in to per-tick wall-clock sampling (off by default).
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.clock.last_ms()
    }

    pub fn avg_tick_ms(&self) -> f64 {
        self.clock.avg_ms()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
