use approx::assert_relative_eq;
use bezier_lattice_animator::{
    AnimatorOptions, AppCommand, AppController, AppIntent, AppState, CapacityPolicy, GesturePhase,
    NodeId,
};
use glam::Vec2;

fn animating_demo_state(controller: &mut AppController, ticks: usize) -> AppState {
    let mut state = AppState::new();
    for position in state.options.initial_anchor_points() {
        controller
            .handle_intent(&mut state, AppIntent::AnchorPlaced { position })
            .expect("AnchorPlaced sollte ohne Fehler durchlaufen");
    }
    controller
        .handle_intent(&mut state, AppIntent::AnimationStartRequested)
        .expect("Start sollte ohne Fehler durchlaufen");
    for _ in 0..ticks {
        controller
            .handle_intent(&mut state, AppIntent::FrameTick)
            .expect("FrameTick sollte ohne Fehler durchlaufen");
    }
    state
}

#[test]
fn test_anchor_added_during_animation_rebuilds_lattice() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 30);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorPlaced {
                position: Vec2::new(100.0, 180.0),
            },
        )
        .expect("AnchorPlaced sollte ohne Fehler durchlaufen");

    assert_eq!(state.gesture, GesturePhase::Idle);
    assert_eq!(state.frame, 0);
    assert_eq!(state.lattice.order(), 5);
    assert_eq!(state.lattice.len(), 15);
    assert_eq!(state.trace.len(), 1);
}

#[test]
fn test_tick_after_edit_does_not_step_stale_lattice() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 10);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorDragged {
                index: 1,
                position: Vec2::new(60.0, 20.0),
            },
        )
        .expect("AnchorDragged sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::FrameTick)
        .expect("FrameTick sollte ohne Fehler durchlaufen");

    assert_eq!(state.frame, 0);
    assert_eq!(state.anchors.as_slice()[1], Vec2::new(60.0, 20.0));
    assert_eq!(state.lattice.position(NodeId(1)), Some(Vec2::new(60.0, 20.0)));
}

#[test]
fn test_remove_requested_uses_pick_radius() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorRemoveRequested {
                position: Vec2::new(100.0, 100.0),
            },
        )
        .expect("Fehlklick ist kein Fehler");
    assert_eq!(state.anchor_count(), 4);
    assert!(state.is_animating());

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorRemoveRequested {
                position: Vec2::new(72.0, 52.0),
            },
        )
        .expect("AnchorRemoveRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.anchor_count(), 3);
    assert_eq!(state.lattice.len(), 6);
    match state.command_log.entries().last() {
        Some(AppCommand::RemoveNearestAnchor { max_distance, .. }) => {
            assert_eq!(*max_distance, state.options.pick_radius)
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_removing_down_to_one_anchor_clears_lattice() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 5);

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::LastAnchorRemoveRequested)
            .expect("LastAnchorRemoveRequested sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.anchor_count(), 1);
    assert!(state.lattice.is_empty());
    assert!(state.trace.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::AnchorsCleared)
        .expect("AnchorsCleared sollte ohne Fehler durchlaufen");
    assert!(state.anchors.is_empty());
}

#[test]
fn test_invalid_options_are_rejected_and_state_kept() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 0);
    let options = AnimatorOptions {
        lock_epsilon: -1.0,
        ..AnimatorOptions::default()
    };

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.options, AnimatorOptions::default());
    assert!(state.is_animating());
}

#[test]
fn test_capacity_policy_change_rebuilds_session() {
    let mut controller = AppController::new();
    let mut state = animating_demo_state(&mut controller, 3);
    let options = AnimatorOptions {
        capacity: CapacityPolicy {
            high_water: 4,
            low_water: 16,
            min_capacity: 8,
        },
        lock_epsilon: 2.0,
        ..AnimatorOptions::default()
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_relative_eq!(state.engine.lock_epsilon(), 2.0);
    assert_eq!(state.anchor_count(), 4);
    assert_eq!(state.lattice.len(), 10);
    assert_eq!(state.gesture, GesturePhase::Idle);
    // Politik (x4, min 8): 8 → 32 beim zweiten Anker
    assert_eq!(state.anchors.capacity(), 32);
}
