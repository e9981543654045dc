use bevy::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub const LIGHT_COUNT: usize = 3;

const DEFAULT_RIG_JSON: &str = include_str!("./content/default_rig.json");

static DEFAULT_RIG: Lazy<Result<LightRig, RigConfigError>> =
    Lazy::new(|| LightRig::from_json(DEFAULT_RIG_JSON));

pub struct LightingDataPlugin;
impl Plugin for LightingDataPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LightRig::load_default())
            .add_systems(Startup, log_loaded_rig);
    }
}

fn log_loaded_rig(rig: Res<LightRig>) {
    for (index, light) in rig.lights.iter().enumerate() {
        info!(
            "light {index}: enabled={} diffuse={} specular={} direction={}",
            light.enabled, light.diffuse_color, light.specular_color, light.direction
        );
    }
    info!(
        "ambient={} prefer_per_pixel_lighting={}",
        rig.global.ambient_color, rig.global.prefer_per_pixel_lighting
    );
}

/// One directional light as the editor sees it.
///
/// Color channels stay in `[0, 1]`. `direction` is the direction the light
/// travels and is never normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParameter {
    pub enabled: bool,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalLightingState {
    pub ambient_color: Vec3,
    pub prefer_per_pixel_lighting: bool,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightRig {
    pub lights: [LightParameter; LIGHT_COUNT],
    pub global: GlobalLightingState,
}

impl Default for LightRig {
    fn default() -> Self {
        Self::fallback()
    }
}

impl LightRig {
    /// Three-light key/fill/back rig used when the bundled document is unusable.
    pub fn fallback() -> Self {
        let key = Vec3::new(1.0, 0.960_784_4, 0.807_843_2);
        let fill = Vec3::new(0.964_705_9, 0.760_784_4, 0.407_843_2);
        let back = Vec3::new(0.323_137_3, 0.360_784_4, 0.393_725_5);

        Self {
            lights: [
                LightParameter {
                    enabled: true,
                    diffuse_color: key,
                    specular_color: key,
                    direction: Vec3::new(-0.526_540_8, -0.573_576_5, -0.627_506_9),
                },
                LightParameter {
                    enabled: true,
                    diffuse_color: fill,
                    specular_color: Vec3::ZERO,
                    direction: Vec3::new(0.719_846_4, 0.342_020_1, 0.604_022_7),
                },
                LightParameter {
                    enabled: true,
                    diffuse_color: back,
                    specular_color: back,
                    direction: Vec3::new(0.454_519_5, -0.766_044_4, 0.454_519_5),
                },
            ],
            global: GlobalLightingState {
                ambient_color: Vec3::new(0.053_333_32, 0.098_823_54, 0.181_960_8),
                prefer_per_pixel_lighting: false,
            },
        }
    }

    pub fn load_default() -> Self {
        match DEFAULT_RIG.as_ref() {
            Ok(rig) => rig.clone(),
            Err(error) => {
                warn!("failed to load default light rig: {error}; using built-in rig");
                Self::fallback()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RigConfigError> {
        let document: RigDocument = serde_json::from_str(json)
            .map_err(|error| RigConfigError::Parse(format!("failed to parse light rig: {error}")))?;

        let lights: [LightDocument; LIGHT_COUNT] = document
            .lights
            .try_into()
            .map_err(|lights: Vec<LightDocument>| RigConfigError::LightCount(lights.len()))?;

        Ok(Self {
            lights: lights.map(|light| LightParameter {
                enabled: light.enabled,
                diffuse_color: clamp_color("diffuse_color", light.diffuse_color),
                specular_color: clamp_color("specular_color", light.specular_color),
                direction: Vec3::from_array(light.direction),
            }),
            global: GlobalLightingState {
                ambient_color: clamp_color("ambient_color", document.ambient_color),
                prefer_per_pixel_lighting: document.prefer_per_pixel_lighting,
            },
        })
    }
}

pub fn clamp_unit(color: Vec3) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

fn clamp_color(field: &str, channels: [f32; 3]) -> Vec3 {
    let raw = Vec3::from_array(channels);
    let clamped = clamp_unit(raw);
    if clamped != raw {
        warn!("{field} {raw} is outside [0, 1]; clamped to {clamped}");
    }
    clamped
}

#[derive(Deserialize)]
struct RigDocument {
    lights: Vec<LightDocument>,
    ambient_color: [f32; 3],
    #[serde(default)]
    prefer_per_pixel_lighting: bool,
}

#[derive(Deserialize)]
struct LightDocument {
    #[serde(default = "enabled_by_default")]
    enabled: bool,
    diffuse_color: [f32; 3],
    specular_color: [f32; 3],
    direction: [f32; 3],
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
pub enum RigConfigError {
    Parse(String),
    LightCount(usize),
}

impl std::fmt::Display for RigConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "{message}"),
            Self::LightCount(count) => {
                write!(f, "light rig must define {LIGHT_COUNT} lights, found {count}")
            }
        }
    }
}

impl std::error::Error for RigConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_rig_parses_and_matches_fallback() {
        let rig = LightRig::from_json(DEFAULT_RIG_JSON).expect("bundled rig json should parse");
        let fallback = LightRig::fallback();

        for (loaded, expected) in rig.lights.iter().zip(fallback.lights.iter()) {
            assert_eq!(loaded.enabled, expected.enabled);
            assert!(loaded.diffuse_color.abs_diff_eq(expected.diffuse_color, 1e-6));
            assert!(loaded.specular_color.abs_diff_eq(expected.specular_color, 1e-6));
            assert!(loaded.direction.abs_diff_eq(expected.direction, 1e-6));
        }
        assert!(rig
            .global
            .ambient_color
            .abs_diff_eq(fallback.global.ambient_color, 1e-6));
        assert!(!rig.global.prefer_per_pixel_lighting);
    }

    #[test]
    fn out_of_range_colors_are_clamped_on_load() {
        let json = r#"{
            "lights": [
                { "diffuse_color": [1.5, -0.2, 0.5], "specular_color": [0, 0, 0], "direction": [0, -4, 0] },
                { "enabled": false, "diffuse_color": [0, 0, 0], "specular_color": [2, 2, 2], "direction": [1, 0, 0] },
                { "diffuse_color": [0, 0, 0], "specular_color": [0, 0, 0], "direction": [0, 0, 1] }
            ],
            "ambient_color": [0.1, 0.2, 9.0]
        }"#;
        let rig = LightRig::from_json(json).expect("rig should parse");

        assert_eq!(rig.lights[0].diffuse_color, Vec3::new(1.0, 0.0, 0.5));
        assert!(rig.lights[0].enabled);
        assert_eq!(rig.lights[0].direction, Vec3::new(0.0, -4.0, 0.0));
        assert!(!rig.lights[1].enabled);
        assert_eq!(rig.lights[1].specular_color, Vec3::ONE);
        assert_eq!(rig.global.ambient_color, Vec3::new(0.1, 0.2, 1.0));
        assert!(!rig.global.prefer_per_pixel_lighting);
    }

    #[test]
    fn wrong_light_count_is_rejected() {
        let json = r#"{
            "lights": [
                { "diffuse_color": [0, 0, 0], "specular_color": [0, 0, 0], "direction": [0, 0, 1] }
            ],
            "ambient_color": [0, 0, 0]
        }"#;
        assert_eq!(LightRig::from_json(json), Err(RigConfigError::LightCount(1)));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let error = LightRig::from_json("{ not json").expect_err("parse should fail");
        assert!(matches!(error, RigConfigError::Parse(_)));
    }
}
