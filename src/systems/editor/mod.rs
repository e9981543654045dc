use bevy::{prelude::*, window::PrimaryWindow};
use enum_map::Enum;

use crate::data::lighting::{GlobalLightingState, LightParameter, LightRig, LIGHT_COUNT};

use super::{
    input::{CurrentInput, InputSnapshot, PreviousInput},
    FrameStage,
};

pub mod rows;

use rows::{EditTarget, MenuRow, MENU_ROW_COUNT};


pub const DRAG_SCALE: f32 = 0.005;
pub const DRAG_THRESHOLD_PX: f32 = 5.0;
pub const STICK_THRESHOLD: f32 = 0.5;

pub struct EditorPlugin;
impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorCursor>()
            .add_systems(Update, edit_lighting.in_set(FrameStage::Edit));
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorCursor {
    pub selected_menu_row: usize,
    pub selected_light_index: usize,
}

impl EditorCursor {
    pub fn row(&self) -> MenuRow {
        MenuRow::from_usize(self.selected_menu_row)
    }

    fn step_row(&mut self, step: isize) {
        self.selected_menu_row = wrap(self.selected_menu_row, step, MENU_ROW_COUNT);
    }

    fn step_light(&mut self, step: isize) {
        self.selected_light_index = wrap(self.selected_light_index, step, LIGHT_COUNT);
    }
}

fn wrap(value: usize, step: isize, len: usize) -> usize {
    (value as isize + step).rem_euclid(len as isize) as usize
}

/// Inputs for one editor step: the two snapshots compared for edges, the
/// frame time and the width the mouse position is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub previous: InputSnapshot,
    pub current: InputSnapshot,
    pub delta_secs: f32,
    pub viewport_width: f32,
}

impl FrameInput {
    fn pressed_edge(&self, key: impl Fn(&InputSnapshot) -> bool) -> bool {
        key(&self.current) && !key(&self.previous)
    }

    fn mouse_released(&self) -> bool {
        self.previous.mouse_left && !self.current.mouse_left
    }

    fn drag_delta(&self) -> f32 {
        self.current.mouse_x - self.previous.mouse_x
    }

    fn stick_crossed_up(&self, axis: impl Fn(Vec2) -> f32) -> bool {
        axis(self.current.left_stick()) >= STICK_THRESHOLD
            && axis(self.previous.left_stick()) < STICK_THRESHOLD
    }

    fn stick_crossed_down(&self, axis: impl Fn(Vec2) -> f32) -> bool {
        axis(self.current.left_stick()) <= -STICK_THRESHOLD
            && axis(self.previous.left_stick()) > -STICK_THRESHOLD
    }

    /// Signed amount the selected field moves this frame. Every source adds.
    pub fn move_value(&self) -> f32 {
        let mut move_value = 0.0;
        if self.current.left {
            move_value -= self.delta_secs;
        }
        if self.current.right {
            move_value += self.delta_secs;
        }
        if self.current.mouse_left {
            move_value += self.drag_delta() * DRAG_SCALE;
        }
        if let Some(pad) = self.current.gamepad {
            move_value += pad.left_stick.x * self.delta_secs;
        }
        move_value
    }
}

/// Moves the cursors and edits at most one field of the rig.
///
/// Returns whether a light or global field was written.
pub fn apply_frame(
    frame: &FrameInput,
    cursor: &mut EditorCursor,
    lights: &mut [LightParameter; LIGHT_COUNT],
    global: &mut GlobalLightingState,
) -> bool {
    if frame.pressed_edge(|input| input.up) || frame.stick_crossed_up(|stick| stick.y) {
        cursor.step_row(-1);
    }
    if frame.pressed_edge(|input| input.down)
        || frame.stick_crossed_down(|stick| stick.y)
        || frame.mouse_released()
    {
        cursor.step_row(1);
    }

    let move_value = frame.move_value();
    if move_value == 0.0 {
        return false;
    }

    let light = &mut lights[cursor.selected_light_index];
    match cursor.row().target() {
        EditTarget::LightIndex => {
            select_light(frame, cursor);
            return false;
        }
        EditTarget::LightEnabled => light.enabled = move_value > 0.0,
        EditTarget::Channel { field, axis } => {
            use rows::ChannelField;

            let channels = match field {
                ChannelField::Diffuse => &mut light.diffuse_color,
                ChannelField::Specular => &mut light.specular_color,
                ChannelField::Direction => &mut light.direction,
                ChannelField::Ambient => &mut global.ambient_color,
            };
            let value = &mut channels[axis.index()];
            *value = field.clamp_policy().apply(*value + move_value);
        }
        EditTarget::PreferPerPixelLighting => {
            global.prefer_per_pixel_lighting = move_value > 0.0;
        }
    }
    true
}

fn select_light(frame: &FrameInput, cursor: &mut EditorCursor) {
    let dragging = frame.current.mouse_left;
    let drag = frame.drag_delta();

    // Drags and stick pushes step against the arrow keys' direction.
    if frame.pressed_edge(|input| input.left)
        || (dragging && drag >= DRAG_THRESHOLD_PX)
        || frame.stick_crossed_up(|stick| stick.x)
    {
        cursor.step_light(-1);
    }
    if frame.pressed_edge(|input| input.right)
        || (dragging && drag <= -DRAG_THRESHOLD_PX)
        || frame.stick_crossed_down(|stick| stick.x)
    {
        cursor.step_light(1);
    }

    // A held button pins the selection to the pointer's third of the viewport.
    if dragging && frame.viewport_width > 0.0 {
        let bucket = frame.current.mouse_x / frame.viewport_width * LIGHT_COUNT as f32;
        cursor.selected_light_index = bucket.clamp(0.0, (LIGHT_COUNT - 1) as f32) as usize;
    }
}

pub fn edit_lighting(
    time: Res<Time>,
    current: Res<CurrentInput>,
    previous: Res<PreviousInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor: ResMut<EditorCursor>,
    mut rig: ResMut<LightRig>,
) {
    let frame = FrameInput {
        previous: previous.0,
        current: current.0,
        delta_secs: time.delta_secs(),
        viewport_width: windows.single().map_or(0.0, |window| window.width()),
    };

    let mut next_cursor = *cursor;
    let LightRig { lights, global } = rig.bypass_change_detection();
    let edited = apply_frame(&frame, &mut next_cursor, lights, global);

    if edited {
        rig.set_changed();
    }

    if next_cursor != *cursor {
        if next_cursor.selected_menu_row != cursor.selected_menu_row {
            debug!("menu row -> {}", next_cursor.row().label());
        }
        if next_cursor.selected_light_index != cursor.selected_light_index {
            debug!("selected light -> {}", next_cursor.selected_light_index);
        }
        *cursor = next_cursor;
    }
}
