//! Controller tuning: data-driven configuration loaded from RON at startup.

mod loader;

use bevy::prelude::*;
use serde::Deserialize;

pub use loader::ConfigLoadError;

/// All tuning for the controller, grouped by concern. Every field has a
/// compiled-in default so a missing or malformed file degrades gracefully.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub look: LookTuning,
    pub body: BodyTuning,
    pub movement: MovementTuning,
    pub jump: JumpTuning,
    pub probes: ProbeTuning,
    pub camera: CameraTuning,
    pub animation: AnimationTuning,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookTuning {
    pub generic_sensitivity: f32,
    pub horizontal_sensitivity: f32,
    pub vertical_sensitivity: f32,
    /// Vertical look clamp, degrees. Negative pitch looks up.
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Degrees per second contributed by a fully deflected look stick.
    pub joystick_look_rate: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            generic_sensitivity: 1.0,
            horizontal_sensitivity: 1.0,
            vertical_sensitivity: 1.0,
            pitch_min: -90.0,
            pitch_max: 90.0,
            joystick_look_rate: 150.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    pub capsule_radius: f32,
    /// Length of the capsule's cylindrical section.
    pub capsule_length: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            capsule_radius: 0.3,
            capsule_length: 1.2,
        }
    }
}

impl BodyTuning {
    /// Half the capsule's total height, from center to the lowest point.
    pub fn half_height(&self) -> f32 {
        self.capsule_length / 2.0 + self.capsule_radius
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub acceleration: f32,
    pub deceleration: f32,
    pub crouch_speed: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub air_control_speed: f32,
    pub snap_to_ground_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: 20.0,
            deceleration: 60.0,
            crouch_speed: 3.0,
            walk_speed: 7.0,
            sprint_speed: 12.0,
            air_control_speed: 20.0,
            snap_to_ground_distance: 0.15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Apex height a jump reaches under the gravity in effect when it fires.
    pub jump_height: f32,
    /// Gravity scale while descending or once jump input is released.
    pub fall_multiplier: f32,
    pub gravity_multiplier: f32,
    pub gravity_y: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_height: 3.0,
            fall_multiplier: 2.0,
            gravity_multiplier: 2.0,
            gravity_y: -9.81,
        }
    }
}

impl JumpTuning {
    /// Base gravity with all multipliers applied.
    pub fn total_gravity(&self, fall_multiplier: f32) -> Vec3 {
        Vec3::new(
            0.0,
            self.gravity_y * self.gravity_multiplier * fall_multiplier,
            0.0,
        )
    }
}

/// Probe volumes, as offsets from the body origin (capsule center).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeTuning {
    pub ground_offset: [f32; 3],
    pub ground_half_extents: [f32; 3],
    pub stand_offset: [f32; 3],
    pub stand_half_extents: [f32; 3],
}

impl Default for ProbeTuning {
    fn default() -> Self {
        Self {
            ground_offset: [0.0, -0.96, 0.0],
            ground_half_extents: [0.2, 0.06, 0.2],
            stand_offset: [0.0, 0.6, 0.0],
            stand_half_extents: [0.3, 0.5, 0.3],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Look pivot position in first person, relative to the body origin.
    pub first_person_point: [f32; 3],
    /// Look pivot position in third person, relative to the body origin.
    pub third_person_point: [f32; 3],
    /// Third-person camera anchor, local to the rotated look pivot.
    pub third_person_offset: [f32; 3],
    pub sphere_cast_radius: f32,
    /// Sweep hits closer than this collapse the camera back to first person.
    pub min_distance_before_first_person: f32,
    pub near_clip_third_person: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            first_person_point: [0.0, 0.7, 0.0],
            third_person_point: [0.0, 0.9, 0.0],
            third_person_offset: [0.0, 0.0, 4.0],
            sphere_cast_radius: 0.15,
            min_distance_before_first_person: 0.2,
            near_clip_third_person: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// Planar speed that maps to the animation velocity float's 1.0.
    pub velocity_for_max: f32,
    pub velocity_slide_speed: f32,
    pub head_look_speed: f32,
    pub head_look_min_distance_multiplier: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            velocity_for_max: 10.0,
            velocity_slide_speed: 10.0,
            head_look_speed: 5.0,
            head_look_min_distance_multiplier: 0.2,
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, loader::load_config_at_startup);
    }
}
