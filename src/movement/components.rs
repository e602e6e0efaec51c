//! Movement domain: controller state components.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementTuning;

#[derive(Component, Debug)]
pub struct Player;

/// Which side of the blended grounded flag just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundEdge {
    Landed,
    LeftGround,
}

/// Ground support flags.
///
/// `grounded` blends the mover's contact report with the discrete probe, so
/// a probe that lingers a frame longer than the contact suppresses
/// single-frame flicker on ledges. `grounded_for_jump` is the probe alone
/// and is the only flag that legalizes a jump.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SupportState {
    pub grounded: bool,
    pub grounded_for_jump: bool,
}

impl SupportState {
    /// Folds a fresh probe result and mover contact into the flags.
    /// Returns the edge when the blended flag actually changed.
    pub fn refresh(&mut self, mover_contact: bool, probe_overlap: bool) -> Option<GroundEdge> {
        self.grounded_for_jump = probe_overlap;

        let new_grounded = mover_contact || probe_overlap;
        if new_grounded == self.grounded {
            return None;
        }
        self.grounded = new_grounded;

        Some(if new_grounded {
            GroundEdge::Landed
        } else {
            GroundEdge::LeftGround
        })
    }
}

/// Crouch persistence: set on press with no legality check, cleared only once
/// the input is released and the stand-up probe reports clearance.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct CrouchLatch {
    pub crouching: bool,
}

impl CrouchLatch {
    /// A press latches immediately; a release only unlatches with clearance.
    pub fn resolve(&mut self, pressed: bool, held: bool, can_stand: bool) {
        if pressed {
            self.crouching = true;
        }
        if self.crouching && !held && can_stand {
            self.crouching = false;
        }
    }
}

/// Locomotion variants over stance and support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    Crouching,
    #[default]
    Walking,
    Sprinting,
    AirCrouching,
    AirWalking,
    AirSprinting,
}

impl LocomotionState {
    /// Pure transition function, first match wins: sprint whenever the
    /// player either is not crouched or has room to stand, then the crouch
    /// latch, then walking.
    pub fn evaluate(sprint_held: bool, crouched: bool, can_stand: bool, grounded: bool) -> Self {
        if sprint_held && (!crouched || can_stand) {
            return if grounded {
                Self::Sprinting
            } else {
                Self::AirSprinting
            };
        }

        if crouched {
            return if grounded {
                Self::Crouching
            } else {
                Self::AirCrouching
            };
        }

        if grounded { Self::Walking } else { Self::AirWalking }
    }

    /// Speed cap selected by the variant. Airborne crouching moves at walk
    /// speed; only the grounded crouch is slowed.
    pub fn max_speed(self, tuning: &MovementTuning) -> f32 {
        match self {
            Self::Crouching => tuning.crouch_speed,
            Self::Sprinting | Self::AirSprinting => tuning.sprint_speed,
            Self::Walking | Self::AirWalking | Self::AirCrouching => tuning.walk_speed,
        }
    }

    pub fn is_sprinting(self) -> bool {
        matches!(self, Self::Sprinting | Self::AirSprinting)
    }
}

/// Current locomotion variant and the speed cap it selects.
#[derive(Component, Debug, Clone, Copy)]
pub struct Locomotion {
    pub state: LocomotionState,
    pub max_speed: f32,
}

impl Locomotion {
    pub fn is_sprinting(&self) -> bool {
        self.state.is_sprinting()
    }
}

/// World-space velocity integration state.
#[derive(Component, Debug, Clone, Copy)]
pub struct KinematicVelocity {
    pub velocity: Vec3,
    /// Time-relaxed approximation of the desired horizontal velocity; the
    /// authoritative displacement source while grounded.
    pub smooth_move: Vec3,
    pub fall_multiplier: f32,
}

impl Default for KinematicVelocity {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            smooth_move: Vec3::ZERO,
            fall_multiplier: 1.0,
        }
    }
}

/// Per-tick displacement accumulator, drained by the single mover call.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PendingMove(Vec3);

impl PendingMove {
    pub fn queue(&mut self, displacement: Vec3) {
        self.0 += displacement;
    }

    pub fn take(&mut self) -> Vec3 {
        let displacement = self.0;
        self.0 = Vec3::ZERO;
        displacement
    }

    pub fn get(&self) -> Vec3 {
        self.0
    }
}

/// Kinematic mover surface: consumes queued displacement and reports contact
/// and realized velocity after each move.
#[derive(Component, Debug)]
pub struct CharacterMover {
    pub collider: Collider,
    /// Distance from the body origin to the lowest point of the capsule.
    pub half_height: f32,
    pub grounded_hint: bool,
    pub last_velocity: Vec3,
}

impl CharacterMover {
    pub fn new(collider: Collider, half_height: f32) -> Self {
        Self {
            collider,
            half_height,
            grounded_hint: false,
            last_velocity: Vec3::ZERO,
        }
    }
}
