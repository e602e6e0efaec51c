//! Movement domain: jump impulse, gravity, movement smoothing, air control.

use bevy::prelude::*;

use crate::config::{ControllerConfig, JumpTuning};
use crate::input::PlayerActions;
use crate::look::LookAngles;
use crate::movement::{
    CharacterMover, KinematicVelocity, Locomotion, PendingMove, Player, SupportState,
};

/// Closed-form launch velocity whose arc peaks at `height` under `gravity_y`.
pub(crate) fn jump_velocity_for_height(height: f32, gravity_y: f32) -> f32 {
    (height * -2.0 * gravity_y).sqrt()
}

/// 1 while rising under held jump input, the configured multiplier otherwise.
pub(crate) fn fall_multiplier_for(
    jump_held: bool,
    vertical_velocity: f32,
    tuning: &JumpTuning,
) -> f32 {
    if jump_held && vertical_velocity >= 0.0 {
        1.0
    } else {
        tuning.fall_multiplier
    }
}

/// Alignment-blended approach rate for the smoothed-move vector: aligned
/// input weights the acceleration constant, opposed input shifts weight to
/// deceleration so reversals slow down before speeding back up.
pub(crate) fn smoothing_rate(
    desired: Vec3,
    current: Vec3,
    acceleration: f32,
    deceleration: f32,
) -> f32 {
    let alignment = desired.normalize_or_zero().dot(current.normalize_or_zero());
    let accel_weight = if alignment >= 0.0 {
        alignment
    } else {
        1.0 + alignment
    };
    let decel_weight = 1.0 - accel_weight;
    accel_weight * acceleration + decel_weight * deceleration
}

/// Air control: nudges planar velocity toward the desired direction, capped
/// at the current speed limit. The vertical component is untouched.
pub(crate) fn air_controlled_velocity(
    velocity: Vec3,
    desired: Vec3,
    control_speed: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    let mut planar = velocity + desired * control_speed * dt;
    planar.y = 0.0;
    if planar.length() > max_speed {
        planar = planar.normalize() * max_speed;
    }
    Vec3::new(planar.x, velocity.y, planar.z)
}

/// Applies the jump impulse when the probe legalizes it. Airborne attempts
/// are a silent no-op; there is no double jump. Returns whether it fired.
pub(crate) fn try_jump(
    support: &SupportState,
    body: &mut KinematicVelocity,
    jump_held: bool,
    tuning: &JumpTuning,
) -> bool {
    if !support.grounded_for_jump {
        return false;
    }

    body.fall_multiplier = fall_multiplier_for(jump_held, body.velocity.y, tuning);
    let gravity_y = tuning.total_gravity(body.fall_multiplier).y;
    body.velocity.y = jump_velocity_for_height(tuning.jump_height, gravity_y);
    true
}

pub(crate) fn apply_jump(
    actions: Res<PlayerActions>,
    config: Res<ControllerConfig>,
    mut query: Query<(&SupportState, &mut KinematicVelocity), With<Player>>,
) {
    if !actions.jump_pressed {
        return;
    }

    for (support, mut body) in &mut query {
        if try_jump(support, &mut body, actions.jump_held, &config.jump) {
            debug!("Jump: vertical velocity {:.2}", body.velocity.y);
        }
    }
}

pub(crate) fn integrate_velocity(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    actions: Res<PlayerActions>,
    mut query: Query<
        (
            &LookAngles,
            &SupportState,
            &Locomotion,
            &CharacterMover,
            &mut KinematicVelocity,
            &mut PendingMove,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (angles, support, locomotion, mover, mut body, mut pending) in &mut query {
        body.fall_multiplier = fall_multiplier_for(actions.jump_held, body.velocity.y, &config.jump);

        if support.grounded {
            if body.velocity.y < 0.0 {
                // Fully grounded: residual velocity is discarded
                body.velocity = Vec3::ZERO;
            }
        } else {
            let gravity = config.jump.total_gravity(body.fall_multiplier);
            body.velocity += gravity * dt;
        }

        let desired = angles.movement_direction(actions.move_axis);

        if support.grounded {
            let target = desired * locomotion.max_speed;
            let rate = smoothing_rate(
                desired,
                body.smooth_move,
                config.movement.acceleration,
                config.movement.deceleration,
            );
            body.smooth_move = body.smooth_move.move_towards(target, rate * dt);
            pending.queue(body.smooth_move * dt);
        } else {
            // Airborne the smoothed vector just mirrors what the mover did,
            // so the animation feed tracks reality instead of fighting the
            // air-control math
            body.smooth_move.x = mover.last_velocity.x;
            body.smooth_move.z = mover.last_velocity.z;

            body.velocity = air_controlled_velocity(
                body.velocity,
                desired,
                config.movement.air_control_speed,
                locomotion.max_speed,
                dt,
            );
        }

        // Glued to uneven ground instead of micro-bouncing off it
        if support.grounded && body.velocity.y <= 0.0 {
            pending.queue(Vec3::NEG_Y * config.movement.snap_to_ground_distance);
        }

        pending.queue(body.velocity * dt);
    }
}
