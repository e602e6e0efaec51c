//! Movement domain: ground support detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::movement::{CharacterMover, GroundEdge, KinematicVelocity, Player, SupportState};
use crate::spatial::{self, GameLayer};

/// Captures the grounded smoothed-move vector into world velocity; called on
/// the tick the controller leaves the ground so momentum survives the switch
/// to the airborne velocity model.
pub(crate) fn capture_planar_momentum(body: &mut KinematicVelocity) -> Vec3 {
    let carry = Vec3::new(body.smooth_move.x, 0.0, body.smooth_move.z);
    body.velocity += carry;
    carry
}

pub(crate) fn update_support(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    mut query: Query<
        (
            &Transform,
            &CharacterMover,
            &mut SupportState,
            &mut KinematicVelocity,
        ),
        With<Player>,
    >,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mover, mut support, mut body) in &mut query {
        let probe_center = transform.translation + Vec3::from(config.probes.ground_offset);
        let overlap = spatial::overlap_box(
            &spatial_query,
            probe_center,
            Vec3::from(config.probes.ground_half_extents),
            &ground_filter,
        );

        match support.refresh(mover.grounded_hint, overlap) {
            Some(GroundEdge::LeftGround) => {
                let carry = capture_planar_momentum(&mut body);
                debug!("Left ground: captured planar momentum {:?}", carry);
            }
            Some(GroundEdge::Landed) => {
                debug!("Landed: grounded_for_jump={}", support.grounded_for_jump);
            }
            None => {}
        }
    }
}
