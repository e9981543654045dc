use bevy::prelude::*;

pub mod editor;
pub mod effect;
pub mod input;
pub mod ui;

use editor::EditorPlugin;
use effect::EffectPlugin;
use input::InputSamplerPlugin;
use ui::OverlayPlugin;

/// Per-frame ordering: devices are sampled, the editor mutates the rig, the
/// sampled input is retained for next frame's edge checks, then the rig is
/// pushed to the scene and overlay.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameStage {
    Sample,
    Edit,
    Retain,
    Apply,
}

pub fn configure_frame_stages(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameStage::Sample,
            FrameStage::Edit,
            FrameStage::Retain,
            FrameStage::Apply,
        )
            .chain(),
    );
}

pub struct LabSystemsPlugin;
impl Plugin for LabSystemsPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_stages(app);
        app.add_plugins((InputSamplerPlugin, EditorPlugin, EffectPlugin, OverlayPlugin));
    }
}
