use crate::core::math::{Vec2, Viewport};
use crate::core::scheduler::{Scheduler, Slot};
use crate::domain::config::EngineConfig;
use crate::systems::rigid_world::RigidWorld;
use crate::systems::spring::SpringToggle;

use super::frame_clock::FrameClock;
use super::EngineCore;

const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_engine_core(config: EngineConfig, width: f32, height: f32) -> EngineCore {
    let mut core = EngineCore {
        world: RigidWorld::new(Vec2::new(0.0, config.field.gravity)),
        spring: SpringToggle::new(config.spring.clone()),
        scheduler: Scheduler::new(),
        viewport: Viewport { width, height },
        obstacles: Vec::new(),
        scroll_y: 0.0,
        frame: 0,
        rng_state: DEFAULT_SEED,
        light_theme: false,
        pending_toggles: 0,
        render_buffer: Vec::new(),
        perf_enabled: false,
        clock: FrameClock::new(),
        config,
    };

    // The falling field runs for the process lifetime; the spring sleeps
    // until the first interaction.
    core.scheduler.wake(Slot::Field);

    core.rebuild_environment(&[]);
    for _ in 0..core.config.field.initial_bodies {
        core.spawn();
    }
    core
}
