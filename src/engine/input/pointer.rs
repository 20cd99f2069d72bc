//! Pointer event routing. The host listens for move/up globally (a drag may
//! leave the toggle element) and forwards unified mouse/touch coordinates.

use crate::core::math::Vec2;
use crate::core::scheduler::Slot;

use super::EngineCore;

pub(super) fn pointer_down(core: &mut EngineCore, x: f32, y: f32) {
    core.spring.pointer_down(x, y);
    core.scheduler.wake(Slot::Spring);
}

pub(super) fn pointer_move(core: &mut EngineCore, x: f32, y: f32) {
    core.spring.pointer_move(x, y);
}

pub(super) fn pointer_up(core: &mut EngineCore) -> bool {
    match core.spring.pointer_up() {
        Some(fired) => {
            if fired {
                core.light_theme = !core.light_theme;
                core.pending_toggles += 1;
            }
            // Keep the slot awake so the release settles.
            core.scheduler.wake(Slot::Spring);
            fired
        }
        None => false,
    }
}

pub(super) fn hover_nudge(core: &mut EngineCore) {
    if core.spring.hover_nudge(&mut core.rng_state) {
        core.scheduler.wake(Slot::Spring);
    }
}

pub(super) fn set_pointer_probe(core: &mut EngineCore, x: f32, y: f32) {
    core.world
        .set_probe(Vec2::new(x, y), core.config.field.probe_radius);
}

pub(super) fn clear_pointer_probe(core: &mut EngineCore) {
    core.world.clear_probe();
}
