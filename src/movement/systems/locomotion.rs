//! Movement domain: crouch latch and locomotion state evaluation.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationFeed;
use crate::config::ControllerConfig;
use crate::input::PlayerActions;
use crate::movement::{CrouchLatch, Locomotion, LocomotionState, Player, SupportState};
use crate::spatial::{self, GameLayer};

/// Stand clearance: no collider inside the head-height probe volume.
pub(crate) fn can_stand_up(
    spatial_query: &SpatialQuery,
    config: &ControllerConfig,
    position: Vec3,
) -> bool {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    !spatial::overlap_box(
        spatial_query,
        position + Vec3::from(config.probes.stand_offset),
        Vec3::from(config.probes.stand_half_extents),
        &filter,
    )
}

pub(crate) fn update_crouch_latch(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    actions: Res<PlayerActions>,
    mut query: Query<(&Transform, &mut CrouchLatch), With<Player>>,
) {
    for (transform, mut latch) in &mut query {
        // Crouching starts unconditionally; only standing needs clearance,
        // and the probe is consulted only while a release is pending
        let wants_stand = latch.crouching && !actions.crouch_held;
        let can_stand =
            wants_stand && can_stand_up(&spatial_query, &config, transform.translation);

        let was_crouching = latch.crouching;
        latch.resolve(actions.crouch_pressed, actions.crouch_held, can_stand);
        if was_crouching && !latch.crouching {
            debug!("Stood up from crouch");
        }
    }
}

pub(crate) fn evaluate_state(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    actions: Res<PlayerActions>,
    mut query: Query<
        (
            &Transform,
            &SupportState,
            &CrouchLatch,
            &mut Locomotion,
            &mut AnimationFeed,
        ),
        With<Player>,
    >,
) {
    for (transform, support, latch, mut locomotion, mut feed) in &mut query {
        let can_stand = can_stand_up(&spatial_query, &config, transform.translation);
        let new_state = LocomotionState::evaluate(
            actions.sprint_held,
            latch.crouching,
            can_stand,
            support.grounded,
        );

        if new_state == locomotion.state {
            continue;
        }
        locomotion.state = new_state;
        locomotion.max_speed = new_state.max_speed(&config.movement);

        feed.grounded = support.grounded;
        feed.crouching = new_state == LocomotionState::Crouching;
        feed.sprinting = new_state.is_sprinting();

        debug!(
            "Locomotion -> {:?}, max speed {}",
            new_state, locomotion.max_speed
        );
    }
}
