//! Movement domain: the kinematic mover and per-tick move application.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationFeed;
use crate::look::LookAngles;
use crate::movement::{CharacterMover, PendingMove, Player};
use crate::spatial::{self, GameLayer};

const MAX_SLIDE_PASSES: u32 = 3;
const MIN_DISPLACEMENT: f32 = 1.0e-5;
const SKIN: f32 = 0.01;
/// Hit normals below this cosine of up do not count as ground contact.
const GROUND_NORMAL_MIN_Y: f32 = 0.7;
const FOOT_RAY_MARGIN: f32 = 0.1;

/// Collide-and-slide: casts the mover's shape along the displacement and
/// projects the remainder onto hit planes, up to a few passes.
fn slide_move(
    spatial_query: &SpatialQuery,
    collider: &Collider,
    start: Vec3,
    displacement: Vec3,
    filter: &SpatialQueryFilter,
) -> (Vec3, bool) {
    let mut position = start;
    let mut remaining = displacement;
    let mut ground_contact = false;

    for _ in 0..MAX_SLIDE_PASSES {
        if remaining.length_squared() < MIN_DISPLACEMENT * MIN_DISPLACEMENT {
            break;
        }
        let Ok((direction, length)) = Dir3::new_and_length(remaining) else {
            break;
        };

        match spatial_query.cast_shape(
            collider,
            position,
            Quat::IDENTITY,
            direction,
            &ShapeCastConfig::from_max_distance(length),
            filter,
        ) {
            Some(hit) => {
                let safe = (hit.distance - SKIN).max(0.0);
                position += direction * safe;
                remaining -= direction * safe;

                if hit.normal1.y >= GROUND_NORMAL_MIN_Y {
                    ground_contact = true;
                }
                remaining = remaining.reject_from(hit.normal1);
            }
            None => {
                position += remaining;
                remaining = Vec3::ZERO;
            }
        }
    }

    (position, ground_contact)
}

/// The single mover call of the tick: drains the accumulator, moves the
/// body, and reports contact and realized velocity for the next tick's
/// support detection and for the animation feed.
pub(crate) fn apply_move(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &LookAngles,
            &mut CharacterMover,
            &mut PendingMove,
            &mut AnimationFeed,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, angles, mut mover, mut pending, mut feed) in &mut query {
        let displacement = pending.take();
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);

        let start = transform.translation;
        let (end, slide_contact) =
            slide_move(&spatial_query, &mover.collider, start, displacement, &filter);
        transform.translation = end;

        // A short foot ray keeps the contact hint alive while skimming flat
        // ground between slide hits
        let foot_contact = spatial::ray_hit(
            &spatial_query,
            end,
            Dir3::NEG_Y,
            mover.half_height + FOOT_RAY_MARGIN,
            &filter,
        )
        .is_some();

        mover.grounded_hint = slide_contact || foot_contact;
        mover.last_velocity = if dt > 0.0 {
            (end - start) / dt
        } else {
            Vec3::ZERO
        };

        // Animation reads planar velocity in the movement basis, forward
        // positive
        let local = angles.orientation_rotation().inverse() * mover.last_velocity;
        feed.move_x = local.x;
        feed.move_z = -local.z;
        feed.velocity = Vec3::new(mover.last_velocity.x, 0.0, mover.last_velocity.z).length();
    }
}
