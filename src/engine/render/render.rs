use super::EngineCore;

/// f32 values per body in the render buffer: x, y, angle, visual scale.
pub const RENDER_STRIDE: usize = 4;

/// Repack the flat render buffer the JS host draws sprites from.
pub(super) fn pack(core: &mut EngineCore) {
    core.render_buffer.clear();
    for body in core.world.bodies() {
        core.render_buffer.extend_from_slice(&[
            body.pos.x,
            body.pos.y,
            body.angle,
            body.visual_scale,
        ]);
    }
}
