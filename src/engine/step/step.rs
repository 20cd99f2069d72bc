use crate::core::math::{Vec2, Viewport};
use crate::core::random;
use crate::core::scheduler::{Slot, Tick, Updater};
use crate::domain::config::FieldConfig;
use crate::systems::rigid_world::RigidWorld;

use super::frame_clock::FrameClock;
use super::{render, spawn, EngineCore};

pub(super) fn tick(core: &mut EngineCore) {
    let stamp = core.perf_enabled.then(FrameClock::begin);

    {
        let mut field = FieldFrame {
            world: &mut core.world,
            rng: &mut core.rng_state,
            viewport: core.viewport,
            frame: core.frame,
            cfg: &core.config.field,
        };
        core.scheduler.drive(Slot::Field, &mut field);
    }

    core.scheduler.drive(Slot::Spring, &mut core.spring);

    core.frame += 1;
    render::pack(core);
    if let Some(stamp) = stamp {
        core.clock.record(stamp);
    }
}

/// One frame of the falling-body field: recycle, maybe spawn, step physics.
struct FieldFrame<'a> {
    world: &'a mut RigidWorld,
    rng: &'a mut u32,
    viewport: Viewport,
    frame: u64,
    cfg: &'a FieldConfig,
}

impl Updater for FieldFrame<'_> {
    fn tick(&mut self) -> Tick {
        // Recycle BEFORE the physics step so a teleported body never renders
        // a frame at its old position.
        recycle_fallen(self.world, self.rng, self.viewport, self.cfg);

        if self.cfg.spawn_interval_frames > 0
            && self.frame > 0
            && self.frame % self.cfg.spawn_interval_frames == 0
        {
            spawn::spawn_into(self.world, self.rng, self.viewport, self.cfg);
        }

        self.world.step();
        Tick::Running
    }
}

/// Bodies that fell out of view are teleported back above the top edge with
/// their velocity reset: an infinite-reuse pool, never allocate/free churn.
pub(super) fn recycle_fallen(
    world: &mut RigidWorld,
    rng: &mut u32,
    viewport: Viewport,
    cfg: &FieldConfig,
) {
    let fell_past = viewport.height + cfg.recycle_overshoot;
    for body in world.bodies_mut() {
        if body.pos.y > fell_past {
            body.pos = Vec2::new(random::range(rng, 0.0, viewport.width), cfg.spawn_height);
            body.vel = Vec2::ZERO;
        }
    }
}
