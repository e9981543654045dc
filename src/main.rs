use bevy::prelude::*;

mod data;
mod startup;
mod systems;

use data::lighting::LightingDataPlugin;
use startup::StartupPlugin;
use systems::LabSystemsPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lighting Lab".into(),
                resolution: (800.0, 600.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
}

struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((LightingDataPlugin, LabSystemsPlugin, StartupPlugin));
    }
}
