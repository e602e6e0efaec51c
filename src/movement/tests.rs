//! Movement domain: unit tests for the state machine and velocity model.

use bevy::prelude::*;

use crate::config::{JumpTuning, MovementTuning};

use super::components::{CrouchLatch, GroundEdge, KinematicVelocity, PendingMove, SupportState};
use super::systems::ground::capture_planar_momentum;
use super::systems::velocity::{
    air_controlled_velocity, fall_multiplier_for, jump_velocity_for_height, smoothing_rate,
    try_jump,
};
use super::{Locomotion, LocomotionState};

#[test]
fn test_state_machine_precedence() {
    use LocomotionState::*;

    // Walking baseline
    assert_eq!(LocomotionState::evaluate(false, false, true, true), Walking);
    assert_eq!(
        LocomotionState::evaluate(false, false, true, false),
        AirWalking
    );

    // Crouch latch wins over walking
    assert_eq!(LocomotionState::evaluate(false, true, true, true), Crouching);
    assert_eq!(
        LocomotionState::evaluate(false, true, true, false),
        AirCrouching
    );

    // Sprint wins outright when not crouched
    assert_eq!(LocomotionState::evaluate(true, false, false, true), Sprinting);
    assert_eq!(
        LocomotionState::evaluate(true, false, false, false),
        AirSprinting
    );
}

#[test]
fn test_sprint_overrides_crouch_only_with_clearance() {
    use LocomotionState::*;

    // Room to stand: sprint input beats the active crouch
    assert_eq!(LocomotionState::evaluate(true, true, true, true), Sprinting);
    assert_eq!(
        LocomotionState::evaluate(true, true, true, false),
        AirSprinting
    );

    // Blocked overhead: the crouch holds even under sprint input
    assert_eq!(LocomotionState::evaluate(true, true, false, true), Crouching);
    assert_eq!(
        LocomotionState::evaluate(true, true, false, false),
        AirCrouching
    );
}

#[test]
fn test_state_machine_is_deterministic() {
    for sprint in [false, true] {
        for crouched in [false, true] {
            for can_stand in [false, true] {
                for grounded in [false, true] {
                    let first = LocomotionState::evaluate(sprint, crouched, can_stand, grounded);
                    let second = LocomotionState::evaluate(sprint, crouched, can_stand, grounded);
                    assert_eq!(first, second);
                }
            }
        }
    }
}

#[test]
fn test_speed_mapping_per_state() {
    let tuning = MovementTuning::default();

    assert_eq!(
        LocomotionState::Crouching.max_speed(&tuning),
        tuning.crouch_speed
    );
    assert_eq!(
        LocomotionState::Walking.max_speed(&tuning),
        tuning.walk_speed
    );
    assert_eq!(
        LocomotionState::Sprinting.max_speed(&tuning),
        tuning.sprint_speed
    );
    assert_eq!(
        LocomotionState::AirSprinting.max_speed(&tuning),
        tuning.sprint_speed
    );
    // Airborne crouching and walking both move at walk speed
    assert_eq!(
        LocomotionState::AirCrouching.max_speed(&tuning),
        tuning.walk_speed
    );
    assert_eq!(
        LocomotionState::AirWalking.max_speed(&tuning),
        tuning.walk_speed
    );

    let locomotion = Locomotion {
        state: LocomotionState::AirSprinting,
        max_speed: tuning.sprint_speed,
    };
    assert!(locomotion.is_sprinting());
}

#[test]
fn test_jump_velocity_closed_form() {
    // h = 3, g = 9.81 => v = sqrt(2 * 3 * 9.81) ~= 7.67
    let v = jump_velocity_for_height(3.0, -9.81);
    assert!((v - (2.0f32 * 3.0 * 9.81).sqrt()).abs() < 1e-6);
    assert!((v - 7.672).abs() < 1e-3);
}

#[test]
fn test_jump_reaches_height_under_current_gravity() {
    let tuning = JumpTuning {
        gravity_multiplier: 1.0,
        fall_multiplier: 1.0,
        ..default()
    };
    let support = SupportState {
        grounded: true,
        grounded_for_jump: true,
    };
    let mut body = KinematicVelocity::default();

    assert!(try_jump(&support, &mut body, true, &tuning));
    assert!((body.velocity.y - 7.672).abs() < 1e-3);
    // The jump itself counts as rising
    assert_eq!(body.fall_multiplier, 1.0);
}

#[test]
fn test_jump_is_noop_without_probe_support() {
    let tuning = JumpTuning::default();
    // Mover contact alone does not legalize a jump
    let support = SupportState {
        grounded: true,
        grounded_for_jump: false,
    };
    let mut body = KinematicVelocity::default();
    body.velocity = Vec3::new(1.0, -2.0, 0.0);

    assert!(!try_jump(&support, &mut body, true, &tuning));
    assert_eq!(body.velocity, Vec3::new(1.0, -2.0, 0.0));
}

#[test]
fn test_fall_multiplier_rule() {
    let tuning = JumpTuning::default();

    // Rising under held input: no multiplier
    assert_eq!(fall_multiplier_for(true, 5.0, &tuning), 1.0);
    assert_eq!(fall_multiplier_for(true, 0.0, &tuning), 1.0);
    // Past the apex or input released: fast fall
    assert_eq!(fall_multiplier_for(true, -0.1, &tuning), tuning.fall_multiplier);
    assert_eq!(fall_multiplier_for(false, 5.0, &tuning), tuning.fall_multiplier);
}

#[test]
fn test_smoothing_rate_blend() {
    let accel = 20.0;
    let decel = 60.0;

    // Fully aligned input uses the acceleration constant
    let rate = smoothing_rate(Vec3::X, Vec3::X * 3.0, accel, decel);
    assert!((rate - accel).abs() < 1e-4);

    // A full reversal shifts all weight onto deceleration
    let rate = smoothing_rate(Vec3::NEG_X, Vec3::X * 3.0, accel, decel);
    assert!((rate - decel).abs() < 1e-4);

    // Perpendicular input: alignment 0, full deceleration weight
    let rate = smoothing_rate(Vec3::Z, Vec3::X, accel, decel);
    assert!((rate - decel).abs() < 1e-4);

    // Partial reversal blends both constants
    let diagonal = Vec3::new(-1.0, 0.0, 1.0).normalize();
    let rate = smoothing_rate(diagonal, Vec3::NEG_Z, accel, decel);
    let alignment = diagonal.dot(Vec3::NEG_Z);
    let expected = (1.0 + alignment) * accel + (-alignment) * decel;
    assert!((rate - expected).abs() < 1e-4);
}

#[test]
fn test_smoothing_rate_degenerate_vectors() {
    // Zero vectors yield alignment 0, never a NaN
    let rate = smoothing_rate(Vec3::ZERO, Vec3::ZERO, 20.0, 60.0);
    assert_eq!(rate, 60.0);
    let rate = smoothing_rate(Vec3::X, Vec3::ZERO, 20.0, 60.0);
    assert_eq!(rate, 60.0);
}

#[test]
fn test_air_control_clamps_planar_speed() {
    let velocity = Vec3::new(6.0, -3.0, 0.0);
    let controlled = air_controlled_velocity(velocity, Vec3::X, 20.0, 7.0, 0.5);

    let planar = Vec3::new(controlled.x, 0.0, controlled.z);
    assert!(planar.length() <= 7.0 + 1e-4);
    // Vertical component passes through untouched
    assert_eq!(controlled.y, -3.0);
    // Direction of the nudge is preserved by the clamp
    assert!(controlled.x > 0.0);
    assert_eq!(controlled.z, 0.0);
}

#[test]
fn test_air_control_below_cap_is_unclamped() {
    let velocity = Vec3::new(1.0, 2.0, 0.0);
    let controlled = air_controlled_velocity(velocity, Vec3::Z, 10.0, 7.0, 0.1);
    assert!((controlled.x - 1.0).abs() < 1e-6);
    assert!((controlled.z - 1.0).abs() < 1e-6);
    assert_eq!(controlled.y, 2.0);
}

#[test]
fn test_support_refresh_edges_and_hysteresis() {
    let mut support = SupportState::default();

    // Landing fires exactly one edge
    assert_eq!(support.refresh(true, true), Some(GroundEdge::Landed));
    assert_eq!(support.refresh(true, true), None);

    // Probe lingering after the mover lets go keeps the state grounded
    assert_eq!(support.refresh(false, true), None);
    assert!(support.grounded);
    assert!(support.grounded_for_jump);

    // Both gone: one airborne edge, then quiet
    assert_eq!(support.refresh(false, false), Some(GroundEdge::LeftGround));
    assert!(!support.grounded_for_jump);
    assert_eq!(support.refresh(false, false), None);
}

#[test]
fn test_leaving_ground_captures_smoothed_vector_once() {
    let mut support = SupportState::default();
    support.refresh(true, true);

    let mut body = KinematicVelocity::default();
    body.smooth_move = Vec3::new(5.0, 0.0, 2.0);
    body.velocity = Vec3::ZERO;

    if support.refresh(false, false) == Some(GroundEdge::LeftGround) {
        capture_planar_momentum(&mut body);
    }
    // The discontinuity equals the pre-transition smoothed vector
    assert_eq!(body.velocity, Vec3::new(5.0, 0.0, 2.0));

    // No edge, no further capture
    if support.refresh(false, false) == Some(GroundEdge::LeftGround) {
        capture_planar_momentum(&mut body);
    }
    assert_eq!(body.velocity, Vec3::new(5.0, 0.0, 2.0));
}

#[test]
fn test_crouch_latch_contract() {
    let mut latch = CrouchLatch::default();

    // Press latches with no legality check
    latch.resolve(true, true, false);
    assert!(latch.crouching);

    // Released under a blocked ceiling: still crouched
    latch.resolve(false, false, false);
    assert!(latch.crouching);

    // Released with clearance: stands
    latch.resolve(false, false, true);
    assert!(!latch.crouching);

    // Clearance alone never forces a latched crouch to end while held
    latch.resolve(true, true, true);
    assert!(latch.crouching);
}

#[test]
fn test_pending_move_accumulates_and_drains() {
    let mut pending = PendingMove::default();
    pending.queue(Vec3::new(1.0, 0.0, 0.0));
    pending.queue(Vec3::new(0.0, -0.5, 2.0));
    assert_eq!(pending.get(), Vec3::new(1.0, -0.5, 2.0));

    assert_eq!(pending.take(), Vec3::new(1.0, -0.5, 2.0));
    assert_eq!(pending.take(), Vec3::ZERO);
}
