// Sanity checks on the default tuning constants.

use isostack_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_defaults_are_critically_damped() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!((SPRING_DAMPING - 2.0 * SPRING_STIFFNESS.sqrt()).abs() < 1e-3);
    assert!(SPRING_MAX_STEP_SEC > 0.0 && SPRING_MAX_STEP_SEC < FRAME_DT_MAX_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn explosion_pushes_bottom_back_and_top_forward() {
    assert!(EXPLODED_DEPTHS[0] < COLLAPSED_DEPTHS[0]);
    assert_eq!(EXPLODED_DEPTHS[1], COLLAPSED_DEPTHS[1]);
    assert!(EXPLODED_DEPTHS[2] > COLLAPSED_DEPTHS[2]);
    // stacking order holds in both states
    assert!(COLLAPSED_DEPTHS.windows(2).all(|w| w[0] <= w[1]));
    assert!(EXPLODED_DEPTHS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn focus_constants_dim_but_never_hide() {
    for d in DIM_OPACITIES {
        assert!(d > 0.0 && d < 1.0);
    }
    assert!(FOCUS_SCALE > 1.0 && FOCUS_SCALE < 1.2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_ranges_bias_the_resting_pose() {
    assert!(ROTATE_X_FROM > ROTATE_X_TO);
    assert!(ROTATE_Y_FROM < ROTATE_Y_TO);
    assert!(ROTATE_X_TO > 0.0);
    assert!(ROTATE_Y_TO < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn connectors_span_the_exploded_gap() {
    assert_eq!(CONNECTOR_COUNT, 4);
    assert!(CONNECTOR_LENGTH > 0.0);
    assert!(CONNECTOR_OPACITY > 0.0 && CONNECTOR_OPACITY <= 1.0);
    assert!(CONNECTOR_FADE_MS > 0);
    assert!(STACK_WIDTH > STACK_HEIGHT);
    assert!(CONTAINER_HEIGHT > STACK_HEIGHT);
}
