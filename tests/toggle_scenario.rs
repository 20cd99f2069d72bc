use whimsy_engine::Engine;

#[test]
fn deep_drag_flips_theme_then_spring_settles() {
    let mut engine = Engine::new(800.0, 600.0);
    assert!(!engine.is_light_theme());

    engine.pointer_down(400.0, 50.0);
    engine.pointer_move(405.0, 130.0);
    assert!(engine.pointer_up());

    assert!(engine.is_light_theme());
    assert!(engine.take_theme_toggled());
    assert!(!engine.take_theme_toggled());

    let mut frames = 0;
    while engine.spring_active() {
        engine.tick();
        frames += 1;
        assert!(frames < 1000, "spring failed to settle");
    }
    assert_eq!(engine.toggle_height(), 150.0);
    assert_eq!(engine.toggle_rotation(), 0.0);
}

#[test]
fn runtime_config_lowers_the_toggle_threshold() {
    let mut engine = Engine::new(800.0, 600.0);
    engine
        .load_config(r#"{"spring":{"toggle_threshold":10.0}}"#.to_string())
        .expect("partial config should load");

    engine.pointer_down(400.0, 50.0);
    engine.pointer_move(400.0, 110.0);
    assert!(engine.pointer_up());

    assert!(engine.load_config("{broken".to_string()).is_err());
}

#[test]
fn restored_theme_preference_survives_interaction() {
    let mut engine = Engine::new(800.0, 600.0);
    engine.set_light_theme(true);
    assert!(engine.is_light_theme());

    // Restoring a preference is not a toggle event.
    assert!(!engine.take_theme_toggled());

    engine.pointer_down(400.0, 50.0);
    engine.pointer_move(400.0, 140.0);
    engine.pointer_up();
    assert!(!engine.is_light_theme());
}
