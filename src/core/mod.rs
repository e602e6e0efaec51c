//! Core domain: startup scaffolding for the controller sandbox.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::spatial::GameLayer;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

/// Static test geometry: a floor, pillars for camera occlusion, and a low
/// slab that forces a crouch to pass under.
fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let world_layers =
        CollisionLayers::new([GameLayer::Ground, GameLayer::CameraBlocker], [GameLayer::Player]);

    let floor_color = Color::srgb(0.4, 0.5, 0.4);
    let pillar_color = Color::srgb(0.3, 0.3, 0.4);
    let slab_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(60.0, 1.0, 60.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: floor_color,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(60.0, 1.0, 60.0),
        world_layers,
    ));

    // Pillars around the spawn point to block the third-person sweep
    for (x, z) in [(-6.0, -4.0), (5.0, -7.0), (8.0, 6.0), (-4.0, 8.0)] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(1.5, 6.0, 1.5))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: pillar_color,
                ..default()
            })),
            Transform::from_xyz(x, 3.0, z),
            RigidBody::Static,
            Collider::cuboid(1.5, 6.0, 1.5),
            world_layers,
        ));
    }

    // Low slab: its underside sits at 1.2, standing headroom needs 2.0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.4, 4.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: slab_color,
            ..default()
        })),
        Transform::from_xyz(0.0, 1.4, -8.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 0.4, 4.0),
        world_layers,
    ));

    // A raised platform for walking off ledges
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 1.0, 6.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: slab_color,
            ..default()
        })),
        Transform::from_xyz(10.0, 0.5, -10.0),
        RigidBody::Static,
        Collider::cuboid(6.0, 1.0, 6.0),
        world_layers,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}
