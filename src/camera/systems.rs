//! Camera domain: mode switching and per-frame placement.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::{CameraTuning, ControllerConfig};
use crate::input::PlayerActions;
use crate::look::{LookAngles, LookPivot};
use crate::movement::Player;
use crate::spatial::{self, GameLayer};

use super::{CameraMode, CameraRig, PlayerCamera, ThirdPersonPlacement, resolve_third_person};

/// Acts on the switch press edge only; holding the input does nothing.
pub(crate) fn switch_camera_mode(
    mut actions: ResMut<PlayerActions>,
    mut query: Query<&mut CameraRig, With<PlayerCamera>>,
) {
    if !actions.take_camera_switch() {
        return;
    }

    for mut rig in &mut query {
        rig.mode = rig.mode.cycled();
        info!("Camera mode: {:?}", rig.mode);
    }
}

pub(crate) fn track_camera(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    player: Query<(&Transform, &LookAngles), (With<Player>, Without<PlayerCamera>)>,
    mut pivot: Query<
        &mut Transform,
        (With<LookPivot>, Without<Player>, Without<PlayerCamera>),
    >,
    mut camera: Query<(&mut Transform, &mut Projection, &CameraRig), With<PlayerCamera>>,
) {
    let Ok((body_transform, angles)) = player.single() else {
        return;
    };
    let body_position = body_transform.translation;
    let look_rotation = angles.look_rotation();
    let tuning = &config.camera;

    for (mut camera_transform, mut projection, rig) in &mut camera {
        let camera_transform = camera_transform.as_mut();
        camera_transform.rotation = look_rotation;

        match rig.mode {
            CameraMode::FirstPerson => {
                place_first_person(
                    tuning,
                    rig,
                    body_position,
                    &mut pivot,
                    camera_transform,
                    projection.as_mut(),
                );
            }
            CameraMode::ThirdPerson => {
                let first_anchor = body_position + Vec3::from(tuning.first_person_point);
                let pivot_point = body_position + Vec3::from(tuning.third_person_point);
                let third_anchor = pivot_point + look_rotation * Vec3::from(tuning.third_person_offset);

                let placement = match Dir3::new(third_anchor - first_anchor) {
                    Ok(direction) => {
                        let separation = first_anchor.distance(third_anchor);
                        let filter = SpatialQueryFilter::from_mask(GameLayer::CameraBlocker);
                        let hit = spatial::sweep_sphere(
                            &spatial_query,
                            first_anchor,
                            tuning.sphere_cast_radius,
                            direction,
                            separation,
                            &filter,
                        );
                        resolve_third_person(
                            hit.map(|h| h.distance),
                            tuning.min_distance_before_first_person,
                        )
                        .into_position(first_anchor, direction, third_anchor)
                    }
                    // Degenerate rig: the anchors coincide
                    Err(_) => None,
                };

                match placement {
                    Some(position) => {
                        set_pivot_local(&mut pivot, Vec3::from(tuning.third_person_point));
                        set_near_clip(projection.as_mut(), tuning.near_clip_third_person);
                        camera_transform.translation = position;
                    }
                    None => {
                        place_first_person(
                            tuning,
                            rig,
                            body_position,
                            &mut pivot,
                            camera_transform,
                            projection.as_mut(),
                        );
                    }
                }
            }
        }
    }
}

impl ThirdPersonPlacement {
    /// The resolved world position, or `None` when falling back entirely.
    fn into_position(self, first_anchor: Vec3, direction: Dir3, third_anchor: Vec3) -> Option<Vec3> {
        match self {
            ThirdPersonPlacement::Anchor => Some(third_anchor),
            ThirdPersonPlacement::AlongSweep(distance) => {
                Some(first_anchor + direction * distance)
            }
            ThirdPersonPlacement::FirstPersonFallback => None,
        }
    }
}

fn place_first_person(
    tuning: &CameraTuning,
    rig: &CameraRig,
    body_position: Vec3,
    pivot: &mut Query<&mut Transform, (With<LookPivot>, Without<Player>, Without<PlayerCamera>)>,
    camera_transform: &mut Transform,
    projection: &mut Projection,
) {
    set_pivot_local(pivot, Vec3::from(tuning.first_person_point));
    set_near_clip(projection, rig.first_person_near_clip);
    camera_transform.translation = body_position + Vec3::from(tuning.first_person_point);
}

fn set_pivot_local(
    pivot: &mut Query<&mut Transform, (With<LookPivot>, Without<Player>, Without<PlayerCamera>)>,
    local_position: Vec3,
) {
    for mut transform in pivot.iter_mut() {
        transform.translation = local_position;
    }
}

fn set_near_clip(projection: &mut Projection, near: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.near = near;
    }
}
