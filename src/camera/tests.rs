//! Camera domain: unit tests for the occlusion placement decision.

use super::{CameraMode, ThirdPersonPlacement, resolve_third_person};

#[test]
fn test_unobstructed_sweep_sits_at_anchor() {
    assert_eq!(
        resolve_third_person(None, 0.2),
        ThirdPersonPlacement::Anchor
    );
}

#[test]
fn test_obstructed_sweep_sits_at_hit_distance() {
    assert_eq!(
        resolve_third_person(Some(2.5), 0.2),
        ThirdPersonPlacement::AlongSweep(2.5)
    );
    // Exactly at the minimum still keeps the sweep placement
    assert_eq!(
        resolve_third_person(Some(0.2), 0.2),
        ThirdPersonPlacement::AlongSweep(0.2)
    );
}

#[test]
fn test_too_close_obstruction_falls_back_to_first_person() {
    assert_eq!(
        resolve_third_person(Some(0.1), 0.2),
        ThirdPersonPlacement::FirstPersonFallback
    );
    assert_eq!(
        resolve_third_person(Some(0.0), 0.2),
        ThirdPersonPlacement::FirstPersonFallback
    );
}

#[test]
fn test_mode_cycles_between_both_placements() {
    let mode = CameraMode::FirstPerson;
    assert_eq!(mode.cycled(), CameraMode::ThirdPerson);
    assert_eq!(mode.cycled().cycled(), CameraMode::FirstPerson);
}
