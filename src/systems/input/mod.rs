use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*, window::PrimaryWindow};

pub struct InputSamplerPlugin;
impl Plugin for InputSamplerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<CurrentInput>()
            .init_resource::<PreviousInput>()
            .add_systems(Update, sample_input.in_set(super::FrameStage::Sample))
            .add_systems(Update, retain_input.in_set(super::FrameStage::Retain));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub left_stick: Vec2,
    pub back: bool,
}

/// Everything the editor reads from the devices in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
    pub mouse_left: bool,
    pub mouse_x: f32,
    pub gamepad: Option<GamepadSnapshot>,
}

impl InputSnapshot {
    /// Left stick position, zeroed when no gamepad is connected.
    pub fn left_stick(&self) -> Vec2 {
        self.gamepad.map_or(Vec2::ZERO, |pad| pad.left_stick)
    }
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CurrentInput(pub InputSnapshot);

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PreviousInput(pub InputSnapshot);

pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Option<Res<AccumulatedMouseMotion>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    gamepads: Query<&Gamepad>,
    previous: Res<PreviousInput>,
    mut current: ResMut<CurrentInput>,
) {
    let mouse_left = mouse.pressed(MouseButton::Left);
    let window = windows.single().ok();
    let mouse_x = match window.and_then(Window::cursor_position) {
        Some(position) => position.x,
        // Outside the window a held drag keeps following the raw motion.
        None if mouse_left => {
            let scale = window.map_or(1.0, Window::scale_factor);
            let delta = motion.map_or(0.0, |motion| motion.delta.x);
            previous.0.mouse_x + delta / scale
        }
        None => previous.0.mouse_x,
    };

    let gamepad = gamepads.iter().next().map(|gamepad| GamepadSnapshot {
        left_stick: gamepad.left_stick(),
        back: gamepad.pressed(GamepadButton::Select),
    });

    current.0 = InputSnapshot {
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        quit: keyboard.pressed(KeyCode::Escape) || gamepad.is_some_and(|pad| pad.back),
        mouse_left,
        mouse_x,
        gamepad,
    };
}

pub fn retain_input(current: Res<CurrentInput>, mut previous: ResMut<PreviousInput>) {
    previous.0 = current.0;
}
