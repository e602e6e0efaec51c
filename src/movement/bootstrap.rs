//! Movement domain: controller rig activation.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationFeed, AnimatorChannels, AnimatorRegistry, HeadLook};
use crate::camera::{CameraRig, PlayerCamera};
use crate::config::ControllerConfig;
use crate::look::{LookAngles, LookPivot, OrientationYaw};
use crate::movement::{
    CharacterMover, CrouchLatch, KinematicVelocity, Locomotion, LocomotionState, PendingMove,
    Player, SupportState,
};
use crate::spatial::GameLayer;

const CAMERA_NEAR_CLIP: f32 = 0.1;

/// Spawns the whole controller rig: kinematic body, orientation and look
/// transforms, default head-look point, and the view camera. All controller
/// state lives from here until the entities are despawned.
pub(crate) fn spawn_player_rig(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    mut registry: ResMut<AnimatorRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body = &config.body;
    let capsule = Collider::capsule(body.capsule_radius, body.capsule_length);

    let body_entity = commands
        .spawn((
            (
                Player,
                SupportState::default(),
                CrouchLatch::default(),
                Locomotion {
                    state: LocomotionState::Walking,
                    max_speed: config.movement.walk_speed,
                },
                KinematicVelocity::default(),
                PendingMove::default(),
                CharacterMover::new(capsule.clone(), body.half_height()),
                LookAngles::default(),
            ),
            (AnimationFeed::default(), AnimatorChannels::default()),
            (
                Mesh3d(meshes.add(Capsule3d::new(body.capsule_radius, body.capsule_length))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.85, 0.85, 0.9),
                    ..default()
                })),
                Transform::from_xyz(0.0, body.half_height() + 0.5, 0.0),
            ),
            (
                RigidBody::Kinematic,
                capsule,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id();

    commands.spawn((OrientationYaw, Transform::default(), ChildOf(body_entity)));

    let look_pivot = commands
        .spawn((
            LookPivot,
            Transform::from_translation(Vec3::from(config.camera.first_person_point)),
            ChildOf(body_entity),
        ))
        .id();

    // Default head-look point ahead of the eyes, snapped at activation
    let look_point = commands
        .spawn((Transform::from_xyz(0.0, 0.0, -3.0), ChildOf(look_pivot)))
        .id();
    commands
        .entity(body_entity)
        .insert(HeadLook::new(look_point, true));

    commands.spawn((
        PlayerCamera,
        CameraRig::new(CAMERA_NEAR_CLIP),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR_CLIP,
            ..default()
        }),
        Transform::from_translation(Vec3::from(config.camera.first_person_point)),
    ));

    registry.add(body_entity);

    info!(
        "Spawned player rig: capsule r={} l={}, walk speed {}",
        body.capsule_radius, body.capsule_length, config.movement.walk_speed
    );
}
