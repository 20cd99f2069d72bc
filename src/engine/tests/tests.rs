use super::*;
use crate::core::math::Vec2;
use crate::core::scheduler::Slot;

fn engine() -> EngineCore {
    EngineCore::new(800.0, 600.0)
}

fn page_obstacles() -> Vec<Rect> {
    vec![
        Rect::new(100.0, 100.0, 200.0, 50.0), // header
        Rect::new(50.0, 300.0, 300.0, 180.0), // card
    ]
}

#[test]
fn construction_drops_initial_bodies_and_walls() {
    let core = engine();
    assert_eq!(core.body_count(), 5);
    // Floor + left wall + right wall, no obstacles yet.
    assert_eq!(core.barrier_count(), 3);
    assert_eq!(core.frame(), 0);
}

#[test]
fn spawn_cap_refuses_above_limit() {
    let mut core = engine();
    for _ in 0..16 {
        core.spawn();
    }
    assert_eq!(core.body_count(), 15);

    // At the cap, spawn is a refused no-op.
    assert!(!core.spawn());
    assert_eq!(core.body_count(), 15);
}

#[test]
fn auto_spawn_follows_the_frame_cadence() {
    let mut core = engine();
    for _ in 0..300 {
        core.tick();
    }
    assert_eq!(core.body_count(), 5);

    core.tick(); // frame 300 inside this tick
    assert_eq!(core.body_count(), 6);
}

#[test]
fn fallen_bodies_are_recycled_not_removed() {
    let mut core = engine();
    let cfg = core.config.field.clone();
    let viewport = core.viewport;

    core.world.bodies_mut()[0].pos = Vec2::new(123.0, 701.0); // 600 + 100 + 1
    core.world.bodies_mut()[0].vel = Vec2::new(3.0, 9.0);

    step::recycle_fallen(&mut core.world, &mut core.rng_state, viewport, &cfg);

    let body = &core.world.bodies()[0];
    assert_eq!(body.pos.y, cfg.spawn_height);
    assert!((0.0..=viewport.width).contains(&body.pos.x));
    assert_eq!(body.vel, Vec2::ZERO);
    assert_eq!(core.body_count(), 5);
}

#[test]
fn bodies_exactly_at_the_recycle_line_are_left_alone() {
    let mut core = engine();
    let cfg = core.config.field.clone();
    let viewport = core.viewport;

    core.world.bodies_mut()[0].pos = Vec2::new(123.0, 700.0);
    step::recycle_fallen(&mut core.world, &mut core.rng_state, viewport, &cfg);
    assert_eq!(core.world.bodies()[0].pos.y, 700.0);
}

#[test]
fn rebuild_environment_is_idempotent() {
    let mut core = engine();
    let obstacles = page_obstacles();

    core.rebuild_environment(&obstacles);
    assert_eq!(core.barrier_count(), 5);

    core.rebuild_environment(&obstacles);
    assert_eq!(core.barrier_count(), 5);
}

#[test]
fn zero_sized_obstacles_are_skipped() {
    let mut core = engine();
    let mut obstacles = page_obstacles();
    obstacles.push(Rect::new(10.0, 10.0, 0.0, 40.0));
    obstacles.push(Rect::new(10.0, 10.0, 40.0, 0.0));

    core.rebuild_environment(&obstacles);
    assert_eq!(core.barrier_count(), 5);
}

#[test]
fn scroll_shifts_every_barrier_by_the_negated_delta() {
    let mut core = engine();
    core.rebuild_environment(&page_obstacles());
    let before: Vec<f32> = core.world.barriers().iter().map(|b| b.rect.min.y).collect();

    core.notify_scroll(100.0);

    for (barrier, y0) in core.world.barriers().iter().zip(&before) {
        assert_eq!(barrier.rect.min.y, y0 - 100.0);
    }

    // Deltas are relative to the last recorded offset, not absolute.
    core.notify_scroll(60.0);
    for (barrier, y0) in core.world.barriers().iter().zip(&before) {
        assert_eq!(barrier.rect.min.y, y0 - 60.0);
    }
}

#[test]
fn resize_rebuilds_for_the_new_viewport() {
    let mut core = engine();
    core.rebuild_environment(&page_obstacles());

    core.resize(1000.0, 700.0);

    assert_eq!(core.barrier_count(), 5);
    let floor = core.world.barriers()[0].rect;
    assert_eq!(floor.center(), Vec2::new(500.0, 750.0));
    assert_eq!(floor.width(), 1000.0);
}

#[test]
fn obstacle_provider_feeds_the_rebuild() {
    struct FixedRects;
    impl ObstacleProvider for FixedRects {
        fn obstacles(&self) -> Vec<Rect> {
            vec![Rect::new(0.0, 0.0, 10.0, 10.0)]
        }
    }

    let mut core = engine();
    core.rebuild_environment_from(&FixedRects);
    assert_eq!(core.barrier_count(), 4);
}

#[test]
fn deep_drag_flips_the_theme_exactly_once() {
    let mut core = engine();
    assert!(!core.is_light_theme());

    core.pointer_down(400.0, 50.0);
    core.pointer_move(400.0, 130.0); // 80px down: offset ~51 > 50
    assert!(core.pointer_up());

    assert!(core.is_light_theme());
    assert!(core.take_theme_toggled());
    assert!(!core.take_theme_toggled());

    // Release without a drag never re-fires.
    assert!(!core.pointer_up());
}

#[test]
fn shallow_drag_never_toggles() {
    let mut core = engine();
    core.pointer_down(400.0, 50.0);
    core.pointer_move(400.0, 110.0); // 60px down: offset ~41 <= 50
    assert!(!core.pointer_up());
    assert!(!core.take_theme_toggled());
    assert!(!core.is_light_theme());
}

#[test]
fn released_spring_settles_back_to_baseline_and_parks() {
    let mut core = engine();
    core.pointer_down(400.0, 50.0);
    core.pointer_move(420.0, 130.0);
    core.pointer_up();
    assert!(core.spring_active());

    let mut frames = 0;
    while core.spring_active() {
        core.tick();
        frames += 1;
        assert!(frames < 1000, "spring failed to settle");
    }
    assert_eq!(core.toggle_height(), 150.0);
    assert_eq!(core.toggle_rotation(), 0.0);
    assert!(!core.scheduler.is_active(Slot::Spring));
    assert!(core.scheduler.is_active(Slot::Field));
}

#[test]
fn hover_nudge_wiggles_then_settles() {
    let mut core = engine();
    assert!(!core.spring_active());

    core.hover_nudge();
    assert!(core.spring_active());

    for _ in 0..1000 {
        core.tick();
        if !core.spring_active() {
            break;
        }
    }
    assert!(!core.spring_active());
    assert!(!core.take_theme_toggled());
}

#[test]
fn config_overrides_apply_to_live_state() {
    let mut core = engine();
    core.load_config_json(r#"{"spring":{"toggle_threshold":10.0}}"#)
        .expect("partial config should load");

    core.pointer_down(400.0, 50.0);
    core.pointer_move(400.0, 110.0); // ~41 > 10 now
    assert!(core.pointer_up());

    assert!(core.load_config_json("{broken").is_err());
}

#[test]
fn render_buffer_tracks_live_bodies() {
    let mut core = engine();
    core.tick();
    assert_eq!(core.render_data().len(), core.body_count() * render::RENDER_STRIDE);

    // Scales come from sampled diameters in [40, 70] over a 512px texture.
    for chunk in core.render_data().chunks_exact(render::RENDER_STRIDE) {
        let scale = chunk[3];
        assert!((40.0 / 512.0..=70.0 / 512.0).contains(&scale), "scale = {scale}");
    }
}

#[test]
fn perf_sampling_is_opt_in() {
    let mut core = engine();
    for _ in 0..10 {
        core.tick();
    }
    // Nothing is recorded until the host opts in.
    assert_eq!(core.last_tick_ms(), 0.0);
    assert_eq!(core.avg_tick_ms(), 0.0);

    core.enable_perf_metrics(true);
    for _ in 0..10 {
        core.tick();
    }
    assert!(core.last_tick_ms() > 0.0);
    assert!(core.avg_tick_ms() > 0.0);
}

#[test]
fn same_seed_produces_the_same_field() {
    let mut a = engine();
    let mut b = engine();
    a.set_seed(99);
    b.set_seed(99);
    a.spawn();
    b.spawn();

    let (la, lb) = (a.world.bodies().last().unwrap(), b.world.bodies().last().unwrap());
    assert_eq!(la.pos, lb.pos);
    assert_eq!(la.radius, lb.radius);
    assert_eq!(la.vel, lb.vel);
}

#[test]
fn bodies_pile_up_on_page_obstacles() {
    let mut core = engine();
    core.rebuild_environment(&page_obstacles());

    for _ in 0..900 {
        core.tick();
    }

    // Nothing escaped through the floor or the side walls.
    for body in core.world.bodies() {
        assert!(body.pos.y <= 700.0, "body fell out: y = {}", body.pos.y);
        assert!(body.pos.x >= -100.0 && body.pos.x <= 900.0);
        assert!(body.pos.y.is_finite() && body.pos.x.is_finite());
    }
}
