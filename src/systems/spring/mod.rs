//! Draggable spring toggle.
//!
//! Pointer drags stretch the toggle vertically (with logarithmic resistance)
//! and swing it sideways; release hands the state to a damped harmonic
//! oscillator that settles back to rest and parks its scheduler slot.
//!
//! State machine: Idle -> Dragging -> Released-Settling -> Idle. A release
//! whose vertical displacement exceeds the threshold reports a toggle event
//! exactly once for that drag.

use std::f32::consts::PI;

use crate::core::random;
use crate::core::scheduler::{Tick, Updater};
use crate::domain::config::SpringConfig;

#[derive(Clone, Copy)]
struct DragOrigin {
    x: f32,
    y: f32,
}

pub struct SpringToggle {
    cfg: SpringConfig,
    /// Vertical spring displacement above the base height.
    offset: f32,
    velocity: f32,
    /// Swing angle, degrees.
    rotation: f32,
    spin: f32,
    drag: Option<DragOrigin>,
}

impl SpringToggle {
    pub fn new(cfg: SpringConfig) -> Self {
        Self {
            cfg,
            offset: 0.0,
            velocity: 0.0,
            rotation: 0.0,
            spin: 0.0,
            drag: None,
        }
    }

    /// Swap tuning in place; motion state carries over.
    pub fn set_config(&mut self, cfg: SpringConfig) {
        self.cfg = cfg;
    }

    /// Enter Dragging. The caller wakes the spring's scheduler slot.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag = Some(DragOrigin { x, y });
        self.velocity = 0.0;
        self.spin = 0.0;
    }

    /// Latest pointer position while dragging; ignored otherwise
    /// (last-write-wins, stale positions are never queued).
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(origin) = self.drag else {
            return;
        };

        // Downward drag only, compressed logarithmically so the toggle
        // resists the further it is pulled.
        let drag_y = (y - origin.y).max(0.0);
        self.offset = (drag_y / 100.0 + 1.0).log10() * self.cfg.max_drag;

        // Sideways drag swings the toggle around its anchor; the longer it is
        // stretched, the smaller the angle for the same horizontal pull.
        let length = self.cfg.base_height + self.offset;
        let swing = -((x - origin.x) / length) * (180.0 / PI) * 0.5;
        self.rotation = swing.clamp(-self.cfg.max_rotation, self.cfg.max_rotation);
    }

    /// Exit Dragging. Returns `None` when no drag was active, otherwise
    /// `Some(fired)` where `fired` means the displacement qualified a toggle.
    pub fn pointer_up(&mut self) -> Option<bool> {
        self.drag.take()?;
        let fired = self.offset > self.cfg.toggle_threshold;
        self.spin = self.rotation * self.cfg.release_spin;
        Some(fired)
    }

    /// Idle wiggle on hover: inject an impulse without committing to a
    /// toggle. Returns whether the loop needs waking.
    pub fn hover_nudge(&mut self, rng: &mut u32) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.velocity = self.cfg.hover_kick;
        self.spin = random::range(rng, -self.cfg.hover_spin, self.cfg.hover_spin);
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Element height the host should render.
    pub fn height(&self) -> f32 {
        self.cfg.base_height + self.offset
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation
    }

    pub fn at_rest(&self) -> bool {
        self.drag.is_none()
            && self.offset == 0.0
            && self.velocity == 0.0
            && self.rotation == 0.0
            && self.spin == 0.0
    }
}

impl Updater for SpringToggle {
    fn tick(&mut self) -> Tick {
        if self.drag.is_some() {
            // Pointer owns the position; hold until release.
            return Tick::Running;
        }

        self.velocity += (0.0 - self.offset) * self.cfg.tension;
        self.velocity *= self.cfg.friction;
        self.offset += self.velocity;

        self.spin += (0.0 - self.rotation) * self.cfg.swing_tension;
        self.spin *= self.cfg.swing_friction;
        self.rotation += self.spin;

        let eps = self.cfg.rest_epsilon;
        if self.offset.abs() < eps
            && self.velocity.abs() < eps
            && self.rotation.abs() < eps
            && self.spin.abs() < eps
        {
            // Snap to exact rest so floating-point drift cannot keep the
            // loop alive.
            self.offset = 0.0;
            self.velocity = 0.0;
            self.rotation = 0.0;
            self.spin = 0.0;
            return Tick::Settled;
        }
        Tick::Running
    }
}
