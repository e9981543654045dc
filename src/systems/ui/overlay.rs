use bevy::prelude::*;
use enum_map::EnumMap;

use crate::{
    data::lighting::LightRig,
    systems::{
        editor::{rows::MenuRow, EditorCursor},
        FrameStage,
    },
};

pub struct OverlayPlugin;
impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay).add_systems(
            Update,
            refresh_overlay
                .in_set(FrameStage::Apply)
                .run_if(resource_changed::<LightRig>.or(resource_changed::<EditorCursor>)),
        );
    }
}

const INSTRUCTIONS: [(&str, f32); 4] = [
    ("Up, Down : Select Menu", 20.0),
    ("Left, right : Change Value", 45.0),
    ("MouseClick & Drag :", 70.0),
    ("    Select Menu & Change Value", 95.0),
];

const INSTRUCTION_LEFT: f32 = 20.0;
const LABEL_LEFT: f32 = 40.0;
const VALUE_LEFT: f32 = 300.0;
const MARKER_LEFT: f32 = 20.0;
const ROWS_TOP: f32 = 120.0;
const ROW_SPACING: f32 = 20.0;
const MARKER_OFFSET: f32 = 4.0;
const FONT_SIZE: f32 = 16.0;

#[derive(Component)]
pub struct ParameterValue(pub MenuRow);

#[derive(Component)]
pub struct SelectionMarker;

fn row_top(row: usize) -> f32 {
    ROWS_TOP + row as f32 * ROW_SPACING
}

pub fn marker_top(cursor: &EditorCursor) -> f32 {
    row_top(cursor.selected_menu_row) + MARKER_OFFSET
}

fn overlay_text(text: impl Into<String>, left: f32, top: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            top: Val::Px(top),
            ..default()
        },
    )
}

fn bool_text(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

/// Display strings for every row, read from the selected light where the row
/// is per-light.
pub fn parameter_texts(rig: &LightRig, cursor: &EditorCursor) -> EnumMap<MenuRow, String> {
    let light = &rig.lights[cursor.selected_light_index];
    let ambient = rig.global.ambient_color;

    EnumMap::from_fn(|row| match row {
        MenuRow::LightIndex => cursor.selected_light_index.to_string(),
        MenuRow::LightEnable => bool_text(light.enabled),
        MenuRow::DiffuseRed => light.diffuse_color.x.to_string(),
        MenuRow::DiffuseGreen => light.diffuse_color.y.to_string(),
        MenuRow::DiffuseBlue => light.diffuse_color.z.to_string(),
        MenuRow::SpecularRed => light.specular_color.x.to_string(),
        MenuRow::SpecularGreen => light.specular_color.y.to_string(),
        MenuRow::SpecularBlue => light.specular_color.z.to_string(),
        MenuRow::DirectionX => light.direction.x.to_string(),
        MenuRow::DirectionY => light.direction.y.to_string(),
        MenuRow::DirectionZ => light.direction.z.to_string(),
        MenuRow::AmbientRed => ambient.x.to_string(),
        MenuRow::AmbientGreen => ambient.y.to_string(),
        MenuRow::AmbientBlue => ambient.z.to_string(),
        MenuRow::PreferPerPixelLighting => bool_text(rig.global.prefer_per_pixel_lighting),
    })
}

fn spawn_overlay(mut commands: Commands, rig: Res<LightRig>, cursor: Res<EditorCursor>) {
    for (line, top) in INSTRUCTIONS {
        commands.spawn(overlay_text(line, INSTRUCTION_LEFT, top));
    }

    let texts = parameter_texts(&rig, &cursor);
    for row in MenuRow::all() {
        let top = row_top(row.index());
        commands.spawn(overlay_text(row.label(), LABEL_LEFT, top));
        commands.spawn((
            ParameterValue(row),
            overlay_text(texts[row].clone(), VALUE_LEFT, top),
        ));
    }

    commands.spawn((
        SelectionMarker,
        overlay_text("*", MARKER_LEFT, marker_top(&cursor)),
    ));
}

pub fn refresh_overlay(
    rig: Res<LightRig>,
    cursor: Res<EditorCursor>,
    mut values: Query<(&ParameterValue, &mut Text)>,
    mut markers: Query<&mut Node, With<SelectionMarker>>,
) {
    let texts = parameter_texts(&rig, &cursor);
    for (ParameterValue(row), mut text) in values.iter_mut() {
        if text.0 != texts[*row] {
            text.0 = texts[*row].clone();
        }
    }

    for mut node in markers.iter_mut() {
        node.top = Val::Px(marker_top(&cursor));
    }
}
