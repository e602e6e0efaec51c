//! Movement domain: system modules for the fixed-rate simulation chain.

pub(crate) mod ground;
pub(crate) mod locomotion;
pub(crate) mod mover;
pub(crate) mod velocity;

pub(crate) use ground::update_support;
pub(crate) use locomotion::{evaluate_state, update_crouch_latch};
pub(crate) use mover::apply_move;
pub(crate) use velocity::{apply_jump, integrate_velocity};
