mod animation;
mod camera;
mod config;
mod core;
mod input;
mod look;
mod movement;
mod spatial;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vantage".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            config::ConfigPlugin,
            core::CorePlugin,
            input::InputPlugin,
            look::LookPlugin,
            movement::MovementPlugin,
            camera::CameraRigPlugin,
            animation::AnimationPlugin,
        ))
        .run();
}
