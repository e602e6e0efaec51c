//! Input domain: action sampling for the controller.

use bevy::app::RunFixedMainLoopSystems;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

/// Label for the sampling systems so the look update can order after them.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleActions;

/// Sampled action state for the player controller.
///
/// Held flags are refreshed every render frame. Edge flags accumulate across
/// render frames until their consumer clears them, so a press landing between
/// two fixed ticks is neither lost nor double-consumed.
#[derive(Resource, Debug, Default)]
pub struct PlayerActions {
    pub move_axis: Vec2,
    pub look_mouse: Vec2,
    pub look_gamepad: Vec2,
    pub sprint_held: bool,
    pub crouch_held: bool,
    pub jump_held: bool,
    pub free_look_held: bool,
    pub jump_pressed: bool,
    pub crouch_pressed: bool,
    pub free_look_released: bool,
    pub camera_switch_pressed: bool,
}

impl PlayerActions {
    /// Clear the simulation-phase edges once a fixed tick has consumed them.
    pub fn clear_fixed_edges(&mut self) {
        self.jump_pressed = false;
        self.crouch_pressed = false;
    }

    pub fn take_camera_switch(&mut self) -> bool {
        std::mem::take(&mut self.camera_switch_pressed)
    }

    pub fn take_free_look_released(&mut self) -> bool {
        std::mem::take(&mut self.free_look_released)
    }
}

/// Clamps an input vector into the unit disc, leaving shorter vectors as-is.
pub fn clamp_to_unit(v: Vec2) -> Vec2 {
    if v.length_squared() > 1.0 { v.normalize() } else { v }
}

pub(crate) fn sample_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    gamepads: Query<&Gamepad>,
    mut actions: ResMut<PlayerActions>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }

    // Mouse delta is a physical per-frame quantity and is used raw; the y
    // axis flips from screen-space down-positive to look-up-positive.
    actions.look_mouse = Vec2::new(mouse_motion.delta.x, -mouse_motion.delta.y);
    actions.look_gamepad = Vec2::ZERO;

    let mut sprint = keyboard.pressed(KeyCode::ShiftLeft);
    let mut crouch = keyboard.pressed(KeyCode::ControlLeft);
    let mut jump = keyboard.pressed(KeyCode::Space);
    let mut free_look = keyboard.pressed(KeyCode::AltLeft);
    let mut jump_edge = keyboard.just_pressed(KeyCode::Space);
    let mut crouch_edge = keyboard.just_pressed(KeyCode::ControlLeft);
    let mut camera_edge = keyboard.just_pressed(KeyCode::KeyV);

    for gamepad in &gamepads {
        axis += gamepad.left_stick();
        actions.look_gamepad = clamp_to_unit(gamepad.right_stick());

        sprint |= gamepad.pressed(GamepadButton::LeftThumb);
        crouch |= gamepad.pressed(GamepadButton::East);
        jump |= gamepad.pressed(GamepadButton::South);
        free_look |= gamepad.pressed(GamepadButton::RightThumb);
        jump_edge |= gamepad.just_pressed(GamepadButton::South);
        crouch_edge |= gamepad.just_pressed(GamepadButton::East);
        camera_edge |= gamepad.just_pressed(GamepadButton::DPadUp);
    }

    actions.move_axis = clamp_to_unit(axis);

    if actions.free_look_held && !free_look {
        actions.free_look_released = true;
    }

    actions.sprint_held = sprint;
    actions.crouch_held = crouch;
    actions.jump_held = jump;
    actions.free_look_held = free_look;
    actions.jump_pressed |= jump_edge;
    actions.crouch_pressed |= crouch_edge;
    actions.camera_switch_pressed |= camera_edge;
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerActions>().add_systems(
            RunFixedMainLoop,
            sample_actions
                .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop)
                .in_set(SampleActions),
        );
    }
}
