use crate::core::math::Vec2;
use crate::domain::config::EngineConfig;

use super::EngineCore;

pub(super) fn apply_config(core: &mut EngineCore, config: EngineConfig) {
    core.spring.set_config(config.spring.clone());
    core.world.set_gravity(Vec2::new(0.0, config.field.gravity));
    core.config = config;
}

pub(super) fn set_seed(core: &mut EngineCore, seed: u32) {
    // xorshift32 has a fixed point at zero.
    core.rng_state = if seed == 0 { 1 } else { seed };
}

pub(super) fn enable_perf_metrics(core: &mut EngineCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn set_light_theme(core: &mut EngineCore, light: bool) {
    core.light_theme = light;
}

pub(super) fn take_theme_toggled(core: &mut EngineCore) -> bool {
    if core.pending_toggles == 0 {
        return false;
    }
    core.pending_toggles -= 1;
    true
}
