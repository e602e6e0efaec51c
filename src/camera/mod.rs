//! Camera domain: first/third person rig with occlusion-resolved placement.

mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    FirstPerson,
    ThirdPerson,
}

impl CameraMode {
    pub fn cycled(self) -> Self {
        match self {
            CameraMode::FirstPerson => CameraMode::ThirdPerson,
            CameraMode::ThirdPerson => CameraMode::FirstPerson,
        }
    }
}

/// Marker for the player's view camera.
#[derive(Component, Debug)]
pub struct PlayerCamera;

/// Per-camera rig state. The first-person near clip is whatever the camera
/// spawned with, captured once so mode switches can restore it.
#[derive(Component, Debug)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub first_person_near_clip: f32,
}

impl CameraRig {
    pub fn new(first_person_near_clip: f32) -> Self {
        Self {
            mode: CameraMode::default(),
            first_person_near_clip,
        }
    }
}

/// Placement decision for the third-person sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThirdPersonPlacement {
    /// Nothing between the anchors; sit at the third-person anchor.
    Anchor,
    /// Obstructed at this distance along the sweep; sit just inside it.
    AlongSweep(f32),
    /// Obstructed too close to the body; give up on third person this frame.
    FirstPersonFallback,
}

/// Resolves a sweep result into a placement. Hits at or beyond the minimum
/// keep the camera on the sweep line; closer hits abandon third person so
/// the camera cannot clip into the player.
pub fn resolve_third_person(hit_distance: Option<f32>, min_distance: f32) -> ThirdPersonPlacement {
    match hit_distance {
        None => ThirdPersonPlacement::Anchor,
        Some(distance) if distance < min_distance => ThirdPersonPlacement::FirstPersonFallback,
        Some(distance) => ThirdPersonPlacement::AlongSweep(distance),
    }
}

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (systems::switch_camera_mode, systems::track_camera).chain(),
        );
    }
}
