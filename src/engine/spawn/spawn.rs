use crate::core::math::Viewport;
use crate::core::random;
use crate::domain::config::FieldConfig;
use crate::systems::rigid_world::{Body, RigidWorld};

use super::EngineCore;

pub(super) fn spawn_body(core: &mut EngineCore) -> bool {
    spawn_into(
        &mut core.world,
        &mut core.rng_state,
        core.viewport,
        &core.config.field,
    )
}

/// Drop one body from above the viewport; backpressure against unbounded
/// growth is the hard cap, the only failure mode this layer has.
pub(super) fn spawn_into(
    world: &mut RigidWorld,
    rng: &mut u32,
    viewport: Viewport,
    cfg: &FieldConfig,
) -> bool {
    if world.body_count() >= cfg.max_bodies {
        return false;
    }

    let hi = (viewport.width - cfg.spawn_margin).max(cfg.spawn_margin);
    let x = random::range(rng, cfg.spawn_margin, hi);
    let radius = random::range(rng, cfg.min_radius, cfg.max_radius);

    let mut body = Body::circle(x, cfg.spawn_height, radius, cfg.density);
    body.restitution = cfg.restitution;
    body.friction = cfg.friction;
    body.vel.x = random::range(rng, -cfg.max_launch_speed, cfg.max_launch_speed);
    body.angular_vel = random::range(rng, -cfg.max_spin, cfg.max_spin);
    body.visual_scale = (radius * 2.0) / cfg.texture_size;

    world.add_body(body);
    true
}
