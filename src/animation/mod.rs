//! Animation domain: the parameter sink boundary between the controller and
//! whatever plays the character's animations.

mod systems;
#[cfg(test)]
mod tests;

use std::collections::HashMap;

use bevy::prelude::*;

/// Closed set of animation parameters the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    Velocity,
    Grounded,
    Crouched,
    Sprinting,
    FreeLook,
    MoveX,
    MoveZ,
}

impl AnimParam {
    pub const ALL: [AnimParam; 7] = [
        AnimParam::Velocity,
        AnimParam::Grounded,
        AnimParam::Crouched,
        AnimParam::Sprinting,
        AnimParam::FreeLook,
        AnimParam::MoveX,
        AnimParam::MoveZ,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimParam::Velocity => "velocity",
            AnimParam::Grounded => "grounded",
            AnimParam::Crouched => "crouched",
            AnimParam::Sprinting => "sprinting",
            AnimParam::FreeLook => "free_look",
            AnimParam::MoveX => "move_x",
            AnimParam::MoveZ => "move_z",
        }
    }
}

/// FNV-1a over the parameter name.
fn param_key(name: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Stable parameter keys, built once when the plugin initializes.
#[derive(Resource, Debug)]
pub struct AnimParamKeys {
    keys: HashMap<AnimParam, u32>,
}

impl Default for AnimParamKeys {
    fn default() -> Self {
        Self {
            keys: AnimParam::ALL
                .iter()
                .map(|&param| (param, param_key(param.name())))
                .collect(),
        }
    }
}

impl AnimParamKeys {
    pub fn key(&self, param: AnimParam) -> u32 {
        self.keys[&param]
    }
}

/// Ordered set of animator target entities.
///
/// `add` is additive and deduped; `set` replaces every registration.
#[derive(Resource, Debug, Default)]
pub struct AnimatorRegistry {
    entities: Vec<Entity>,
}

impl AnimatorRegistry {
    /// Registers a target; a no-op when it is already present.
    pub fn add(&mut self, entity: Entity) {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
    }

    pub fn remove(&mut self, entity: Entity) {
        self.entities.retain(|&e| e != entity);
    }

    /// Clears all registrations, then adds the given targets in order.
    pub fn set(&mut self, entities: impl IntoIterator<Item = Entity>) {
        self.entities.clear();
        for entity in entities {
            self.add(entity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Parameter targets produced by the controller. Boolean and move values are
/// written by the movement systems; the velocity float is eased before it is
/// pushed.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimationFeed {
    pub grounded: bool,
    pub crouching: bool,
    pub sprinting: bool,
    pub move_x: f32,
    pub move_z: f32,
    pub velocity: f32,
}

/// Pushed parameter values on a registered animator target. This is the
/// surface an actual animation player reads.
#[derive(Component, Debug, Default)]
pub struct AnimatorChannels {
    pub floats: HashMap<u32, f32>,
    pub bools: HashMap<u32, bool>,
    pub look_at: Option<Vec3>,
}

/// Head-look target state. While free-look is on, the pushed position eases
/// toward the target instead of tracking it exactly.
#[derive(Component, Debug, Default)]
pub struct HeadLook {
    target: Option<Entity>,
    target_position: Vec3,
    smooth_position: Vec3,
    snap_requested: bool,
    free_look_active: bool,
}

impl HeadLook {
    pub fn new(target: Entity, instant_snap: bool) -> Self {
        Self {
            target: Some(target),
            snap_requested: instant_snap,
            ..default()
        }
    }

    /// Points the head at a new target, optionally snapping the eased
    /// position to it immediately.
    pub fn set_target(&mut self, target: Option<Entity>, instant_snap: bool) {
        self.target = target;
        if instant_snap {
            self.snap_requested = true;
        }
    }

    /// The position pushed to animator targets, or `None` without a target.
    pub fn look_position(&self) -> Option<Vec3> {
        self.target?;
        if self.free_look_active {
            Some(self.smooth_position)
        } else {
            Some(self.target_position)
        }
    }
}

/// Constant-rate approach of a float toward a target.
pub(crate) fn move_towards_f32(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Maps a planar speed into the animator's [0, 1] velocity range.
pub(crate) fn normalized_velocity(speed: f32, speed_for_max: f32) -> f32 {
    (speed / speed_for_max).clamp(0.0, 1.0)
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimParamKeys>()
            .init_resource::<AnimatorRegistry>()
            .add_systems(
                Update,
                (systems::update_head_look, systems::push_parameters).chain(),
            );
    }
}
