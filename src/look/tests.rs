//! Look domain: unit tests for angle accumulation and free-look.

use bevy::prelude::*;

use super::LookAngles;

#[test]
fn test_pitch_stays_clamped() {
    let mut angles = LookAngles::default();

    for _ in 0..100 {
        angles.apply_delta(Vec2::new(0.0, 50.0), -90.0, 90.0);
    }
    assert_eq!(angles.pitch, -90.0);

    for _ in 0..100 {
        angles.apply_delta(Vec2::new(0.0, -50.0), -90.0, 90.0);
    }
    assert_eq!(angles.pitch, 90.0);
}

#[test]
fn test_yaw_accumulates_without_bound() {
    let mut angles = LookAngles::default();
    for _ in 0..10 {
        angles.apply_delta(Vec2::new(90.0, 0.0), -90.0, 90.0);
    }
    assert_eq!(angles.yaw, 900.0);
}

#[test]
fn test_free_look_release_resyncs_yaw() {
    let mut angles = LookAngles::default();
    // Movement basis settled at 30 degrees before free-look engaged
    angles.yaw = 30.0;
    angles.orientation_yaw = 30.0;

    // Looking around while free-look holds the movement basis
    angles.apply_delta(Vec2::new(120.0, 0.0), -90.0, 90.0);
    assert_eq!(angles.yaw, 150.0);
    assert_eq!(angles.orientation_yaw, 30.0);

    angles.release_free_look();
    assert_eq!(angles.yaw, 30.0);
}

#[test]
fn test_movement_direction_follows_orientation() {
    let angles = LookAngles::default();
    let forward = angles.movement_direction(Vec2::new(0.0, 1.0));
    assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    let right = angles.movement_direction(Vec2::new(1.0, 0.0));
    assert!(right.abs_diff_eq(Vec3::X, 1e-6));

    let mut turned = LookAngles::default();
    turned.orientation_yaw = 90.0;
    // A right turn of 90 degrees sends forward input along +X
    let forward = turned.movement_direction(Vec2::new(0.0, 1.0));
    assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
}

#[test]
fn test_movement_direction_zero_for_zero_input() {
    let angles = LookAngles::default();
    assert_eq!(angles.movement_direction(Vec2::ZERO), Vec3::ZERO);
}
