//! Animation domain: head-look easing and parameter pushes.

use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::input::PlayerActions;
use crate::movement::Player;

use super::{
    AnimParam, AnimParamKeys, AnimationFeed, AnimatorChannels, AnimatorRegistry, HeadLook,
    move_towards_f32, normalized_velocity,
};

pub(crate) fn update_head_look(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    actions: Res<PlayerActions>,
    targets: Query<&GlobalTransform>,
    mut query: Query<&mut HeadLook>,
) {
    for mut head in &mut query {
        let Some(target_position) = head
            .target
            .and_then(|entity| targets.get(entity).ok())
            .map(|t| t.translation())
        else {
            continue;
        };
        head.target_position = target_position;

        // Entering free-look snaps the eased position so it starts from the
        // current target instead of wherever it last settled.
        let entering_free_look = actions.free_look_held && !head.free_look_active;
        if head.snap_requested || entering_free_look {
            head.smooth_position = target_position;
            head.snap_requested = false;
        }
        head.free_look_active = actions.free_look_held;

        if head.free_look_active {
            let anim = &config.animation;
            let distance = head.smooth_position.distance(target_position);
            let max_delta = anim.head_look_speed
                * time.delta_secs()
                * distance.max(anim.head_look_min_distance_multiplier);
            head.smooth_position = head.smooth_position.move_towards(target_position, max_delta);
        }
    }
}

pub(crate) fn push_parameters(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    keys: Res<AnimParamKeys>,
    registry: Res<AnimatorRegistry>,
    actions: Res<PlayerActions>,
    player: Query<(&AnimationFeed, &HeadLook), With<Player>>,
    mut channels: Query<&mut AnimatorChannels>,
    mut eased_velocity: Local<f32>,
) {
    let Ok((feed, head)) = player.single() else {
        return;
    };
    if registry.is_empty() {
        return;
    }

    *eased_velocity = move_towards_f32(
        *eased_velocity,
        feed.velocity,
        config.animation.velocity_slide_speed * time.delta_secs(),
    );
    let velocity_value = normalized_velocity(*eased_velocity, config.animation.velocity_for_max);

    for entity in registry.iter() {
        let Ok(mut target) = channels.get_mut(entity) else {
            continue;
        };
        target
            .floats
            .insert(keys.key(AnimParam::Velocity), velocity_value);
        target.floats.insert(keys.key(AnimParam::MoveX), feed.move_x);
        target.floats.insert(keys.key(AnimParam::MoveZ), feed.move_z);
        target
            .bools
            .insert(keys.key(AnimParam::Grounded), feed.grounded);
        target
            .bools
            .insert(keys.key(AnimParam::Crouched), feed.crouching);
        target
            .bools
            .insert(keys.key(AnimParam::Sprinting), feed.sprinting);
        target
            .bools
            .insert(keys.key(AnimParam::FreeLook), actions.free_look_held);
        target.look_at = head.look_position();
    }
}
