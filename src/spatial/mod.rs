//! Collision query facade over the physics backend's spatial queries.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision and query filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Standable and movement-blocking world geometry
    Ground,
    /// Geometry that occludes the third-person camera
    CameraBlocker,
    /// Player character body
    Player,
    /// Trigger volumes - never returned by movement or camera queries
    Sensor,
}

/// A sweep or ray intersection: distance along the cast and surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub distance: f32,
    pub normal: Vec3,
}

/// True when any collider in the filter's mask intersects the box volume.
pub fn overlap_box(
    spatial: &SpatialQuery,
    center: Vec3,
    half_extents: Vec3,
    filter: &SpatialQueryFilter,
) -> bool {
    let shape = Collider::cuboid(
        half_extents.x * 2.0,
        half_extents.y * 2.0,
        half_extents.z * 2.0,
    );
    !spatial
        .shape_intersections(&shape, center, Quat::IDENTITY, filter)
        .is_empty()
}

/// Sweeps a sphere and reports the first blocking hit, if any.
pub fn sweep_sphere(
    spatial: &SpatialQuery,
    origin: Vec3,
    radius: f32,
    direction: Dir3,
    max_distance: f32,
    filter: &SpatialQueryFilter,
) -> Option<SweepHit> {
    spatial
        .cast_shape(
            &Collider::sphere(radius),
            origin,
            Quat::IDENTITY,
            direction,
            &ShapeCastConfig::from_max_distance(max_distance),
            filter,
        )
        .map(|hit| SweepHit {
            distance: hit.distance,
            normal: hit.normal1,
        })
}

/// Casts a ray and reports the first blocking hit, if any.
pub fn ray_hit(
    spatial: &SpatialQuery,
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
    filter: &SpatialQueryFilter,
) -> Option<SweepHit> {
    spatial
        .cast_ray(origin, direction, max_distance, true, filter)
        .map(|hit| SweepHit {
            distance: hit.distance,
            normal: hit.normal,
        })
}
