//! Look domain: orientation from accumulated look input, with free-look
//! decoupling between where the player looks and where they move.

#[cfg(test)]
mod tests;

use bevy::app::RunFixedMainLoopSystems;
use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::input::{PlayerActions, SampleActions};

/// Marker for the transform that carries full look rotation (yaw and pitch).
#[derive(Component, Debug)]
pub struct LookPivot;

/// Marker for the yaw-only transform that defines the movement basis.
#[derive(Component, Debug)]
pub struct OrientationYaw;

/// Accumulated look angles in degrees. Pitch grows looking down and is
/// clamped; yaw grows turning right and accumulates without bound.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
    /// Yaw of the movement basis; tracks `yaw` except while free-look holds it.
    pub orientation_yaw: f32,
}

impl LookAngles {
    /// Accumulates a look delta. The vertical component is inverted so that
    /// upward input pitches the view up.
    pub fn apply_delta(&mut self, delta: Vec2, pitch_min: f32, pitch_max: f32) {
        self.pitch = (self.pitch - delta.y).clamp(pitch_min, pitch_max);
        self.yaw += delta.x;
    }

    /// Re-syncs look yaw to the frozen movement yaw when free-look releases,
    /// so the movement basis does not jump on the next engaged frame.
    pub fn release_free_look(&mut self) {
        self.yaw = self.orientation_yaw;
    }

    pub fn look_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (-self.yaw).to_radians(),
            (-self.pitch).to_radians(),
            0.0,
        )
    }

    pub fn orientation_rotation(&self) -> Quat {
        Quat::from_rotation_y((-self.orientation_yaw).to_radians())
    }

    /// World-space movement direction for a 2D input axis in the yaw basis.
    pub fn movement_direction(&self, axis: Vec2) -> Vec3 {
        let basis = self.orientation_rotation();
        let forward = basis * Vec3::NEG_Z;
        let right = basis * Vec3::X;
        forward * axis.y + right * axis.x
    }
}

pub(crate) fn update_look(
    time: Res<Time<Virtual>>,
    config: Res<ControllerConfig>,
    mut actions: ResMut<PlayerActions>,
    mut angles_query: Query<&mut LookAngles>,
    mut pivot_query: Query<&mut Transform, With<LookPivot>>,
    mut orientation_query: Query<&mut Transform, (With<OrientationYaw>, Without<LookPivot>)>,
) {
    let Ok(mut angles) = angles_query.single_mut() else {
        return;
    };

    let look = &config.look;

    // Joystick deflection is a rate, converted here with the unscaled frame
    // time so slow motion does not slow the player's view.
    let time_scale = time.relative_speed().max(f32::EPSILON);
    let joystick_delta =
        actions.look_gamepad * (time.delta_secs() / time_scale) * look.joystick_look_rate;

    let mut delta = (actions.look_mouse + joystick_delta) * look.generic_sensitivity;
    delta.x *= look.horizontal_sensitivity;
    delta.y *= look.vertical_sensitivity;

    if actions.take_free_look_released() {
        angles.release_free_look();
    }

    angles.apply_delta(delta, look.pitch_min, look.pitch_max);

    if !actions.free_look_held {
        angles.orientation_yaw = angles.yaw;
    }

    for mut transform in &mut pivot_query {
        transform.rotation = angles.look_rotation();
    }
    for mut transform in &mut orientation_query {
        transform.rotation = angles.orientation_rotation();
    }
}

pub struct LookPlugin;

impl Plugin for LookPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            RunFixedMainLoop,
            update_look
                .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop)
                .after(SampleActions),
        );
    }
}
