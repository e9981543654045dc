use bevy::prelude::*;

#[cfg(debug_assertions)]
use bevy::diagnostic::{
    LogDiagnosticsPlugin,
    FrameTimeDiagnosticsPlugin
};

use crate::systems::FrameStage;

pub mod shortcuts;
pub mod render;

use render::RenderPlugin;

pub struct StartupPlugin;
impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(RenderPlugin)
            .add_systems(
                Update,
                shortcuts::close_on_quit.in_set(FrameStage::Edit),
            );

            #[cfg(debug_assertions)]
            app
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_plugins(LogDiagnosticsPlugin::default());
    }
}
