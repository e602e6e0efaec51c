//! Movement domain: ground support, locomotion states, the velocity model,
//! and the kinematic mover adapter.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    CharacterMover, CrouchLatch, GroundEdge, KinematicVelocity, Locomotion, LocomotionState,
    PendingMove, Player, SupportState,
};

use bevy::prelude::*;

use crate::input::PlayerActions;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bootstrap::spawn_player_rig).add_systems(
            FixedUpdate,
            (
                systems::update_support,
                systems::update_crouch_latch,
                systems::evaluate_state,
                systems::apply_jump,
                systems::integrate_velocity,
                systems::apply_move,
                clear_consumed_edges,
            )
                .chain(),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_probe_gizmos);
    }
}

fn clear_consumed_edges(mut actions: ResMut<PlayerActions>) {
    actions.clear_fixed_edges();
}
