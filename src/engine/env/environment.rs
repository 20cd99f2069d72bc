//! Environment geometry: fixed boundary walls plus one barrier per
//! significant page element, all in viewport-fixed coordinates.

use crate::core::math::{Rect, Vec2, Viewport};

use super::EngineCore;

const WALL_THICKNESS: f32 = 100.0;
/// Boundary walls sit half their thickness outside the viewport.
const WALL_OFFSET: f32 = 50.0;
/// Side walls span several viewport heights so scroll translation cannot
/// expose a gap.
const SIDE_WALL_REACH: f32 = 5.0;

pub(super) fn rebuild(core: &mut EngineCore, obstacles: &[Rect]) {
    core.obstacles.clear();
    core.obstacles.extend(
        obstacles
            .iter()
            .filter(|r| r.width() > 0.0 && r.height() > 0.0),
    );
    rebuild_barriers(core);
}

pub(super) fn notify_scroll(core: &mut EngineCore, scroll_y: f32) {
    let delta = scroll_y - core.scroll_y;
    core.scroll_y = scroll_y;

    // Bulk-translate instead of rebuilding: the physics world is
    // viewport-fixed while the page content scrolls underneath it.
    let shift = Vec2::new(0.0, -delta);
    core.world.translate_barriers(shift);
    for rect in &mut core.obstacles {
        rect.translate(shift);
    }
}

pub(super) fn resize(core: &mut EngineCore, width: f32, height: f32) {
    core.viewport = Viewport { width, height };
    rebuild_barriers(core);
}

/// Recreate every barrier from scratch. Never patches incrementally, so
/// repeated calls cannot accumulate geometry.
fn rebuild_barriers(core: &mut EngineCore) {
    let Viewport { width, height } = core.viewport;
    core.world.clear_barriers();

    // Floor below the visible area, walls just outside the left/right edges.
    core.world.add_barrier(Rect::from_center(
        width / 2.0,
        height + WALL_OFFSET,
        width,
        WALL_THICKNESS,
    ));
    core.world.add_barrier(Rect::from_center(
        -WALL_OFFSET,
        height / 2.0,
        WALL_THICKNESS,
        height * SIDE_WALL_REACH,
    ));
    core.world.add_barrier(Rect::from_center(
        width + WALL_OFFSET,
        height / 2.0,
        WALL_THICKNESS,
        height * SIDE_WALL_REACH,
    ));

    for rect in &core.obstacles {
        core.world.add_barrier(*rect);
    }
}
