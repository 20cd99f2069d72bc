use wasm_bindgen::prelude::*;

use crate::core::math::Rect;

use super::{render, EngineCore};

/// JS-facing engine handle. Construct it once the page layout has settled,
/// then drive `tick` from `requestAnimationFrame` and forward pointer,
/// scroll and resize events. Everything delegates to the pure core.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine for the given viewport and drop the initial bodies.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    /// Override tuning from a JSON document (any subset of knobs).
    #[cfg(target_arch = "wasm32")]
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Override tuning from a JSON document (any subset of knobs).
    ///
    /// Native variant: `JsValue` cannot be constructed off-wasm, so the
    /// core's error string is returned as-is.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(&mut self, json: String) -> Result<(), String> {
        self.core.load_config_json(&json)
    }

    /// Reseed the RNG (deterministic replays).
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Drop one body. Returns false when the spawn cap refused it.
    pub fn spawn(&mut self) -> bool {
        self.core.spawn()
    }

    /// Recreate static geometry from flat `[x, y, w, h]` quads, typically
    /// `getBoundingClientRect` results of the page's significant elements.
    pub fn rebuild_environment(&mut self, rects: &[f32]) {
        let obstacles: Vec<Rect> = rects
            .chunks_exact(4)
            .map(|q| Rect::new(q[0], q[1], q[2], q[3]))
            .collect();
        self.core.rebuild_environment(&obstacles);
    }

    /// Page scrolled to `scroll_y`; barriers shift by the negated delta.
    pub fn notify_scroll(&mut self, scroll_y: f32) {
        self.core.notify_scroll(scroll_y);
    }

    /// Viewport changed; rebuilds the environment unconditionally.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    // === Pointer input (host registers move/up globally) ===

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.core.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    /// Release the toggle. Returns whether this drag flipped the theme.
    pub fn pointer_up(&mut self) -> bool {
        self.core.pointer_up()
    }

    /// Idle wiggle when the pointer hovers the toggle without dragging.
    pub fn hover_nudge(&mut self) {
        self.core.hover_nudge();
    }

    /// Move the static pointer probe that shoves falling bodies around.
    pub fn set_pointer_probe(&mut self, x: f32, y: f32) {
        self.core.set_pointer_probe(x, y);
    }

    pub fn clear_pointer_probe(&mut self) {
        self.core.clear_pointer_probe();
    }

    // === Spring toggle state ===

    /// Element height the host should render this frame.
    pub fn toggle_height(&self) -> f32 {
        self.core.toggle_height()
    }

    /// Swing angle in degrees.
    pub fn toggle_rotation(&self) -> f32 {
        self.core.toggle_rotation()
    }

    /// Whether the spring still needs per-frame style writes; false once it
    /// has settled (and until the next interaction wakes it).
    pub fn spring_active(&self) -> bool {
        self.core.spring_active()
    }

    /// Drain one pending theme-flip event, if any.
    pub fn take_theme_toggled(&mut self) -> bool {
        self.core.take_theme_toggled()
    }

    #[wasm_bindgen(getter)]
    pub fn is_light_theme(&self) -> bool {
        self.core.is_light_theme()
    }

    /// Restore a persisted theme preference at startup.
    pub fn set_light_theme(&mut self, light: bool) {
        self.core.set_light_theme(light);
    }

    // === Falling-body state ===

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn barrier_count(&self) -> usize {
        self.core.barrier_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    // === Render ABI (for JS sprite drawing straight out of wasm memory) ===

    /// Pointer to the flat render buffer: `render_stride` f32 per body.
    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_data().as_ptr()
    }

    /// Total f32 count in the render buffer.
    pub fn render_len(&self) -> usize {
        self.core.render_data().len()
    }

    pub fn render_stride(&self) -> usize {
        render::RENDER_STRIDE
    }

    // === Perf ===

    /// Opt in to per-tick wall-clock sampling (off by default).
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.core.last_tick_ms()
    }

    pub fn avg_tick_ms(&self) -> f64 {
        self.core.avg_tick_ms()
    }
}
