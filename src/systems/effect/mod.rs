use bevy::{pbr::light_consts, prelude::*};

use crate::data::lighting::{LightParameter, LightRig, LIGHT_COUNT};

use super::FrameStage;

pub struct EffectPlugin;
impl Plugin for EffectPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectConfig>()
            .add_systems(Startup, spawn_rig_lights)
            .add_systems(
                Update,
                apply_lighting
                    .in_set(FrameStage::Apply)
                    .run_if(resource_changed::<LightRig>),
            );
    }
}

/// How editor values are scaled into Bevy's physically based units.
#[derive(Resource, Debug, Clone)]
pub struct EffectConfig {
    /// Lux of a fully enabled light; its color carries the diffuse value.
    pub directional_illuminance: f32,
    pub ambient_brightness: f32,
    pub per_pixel_roughness: f32,
    pub per_vertex_roughness: f32,
    pub max_reflectance: f32,
    pub base_color: Color,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            directional_illuminance: light_consts::lux::AMBIENT_DAYLIGHT,
            ambient_brightness: 1_500.0,
            per_pixel_roughness: 0.3,
            per_vertex_roughness: 0.75,
            max_reflectance: 1.0,
            base_color: Color::WHITE,
        }
    }
}

/// One of the three editable directional lights.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigLight(pub usize);

/// Mesh whose material follows the rig's specular and per-pixel settings.
#[derive(Component)]
pub struct LitMesh;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLight {
    pub color: Color,
    pub illuminance: f32,
    /// `None` when the edited direction has no usable length.
    pub direction: Option<Dir3>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLighting {
    pub lights: [ResolvedLight; LIGHT_COUNT],
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    pub reflectance: f32,
    pub perceptual_roughness: f32,
}

fn color_from(channels: Vec3) -> Color {
    Color::srgb(channels.x, channels.y, channels.z)
}

fn resolve_light(light: &LightParameter, config: &EffectConfig) -> ResolvedLight {
    ResolvedLight {
        color: color_from(light.diffuse_color),
        illuminance: if light.enabled {
            config.directional_illuminance
        } else {
            0.0
        },
        direction: Dir3::new(light.direction).ok(),
    }
}

pub fn resolve_lighting(rig: &LightRig, config: &EffectConfig) -> ResolvedLighting {
    // Bevy lights have a single color, so specular strength lives on the material.
    let specular = rig
        .lights
        .iter()
        .filter(|light| light.enabled)
        .map(|light| light.specular_color.max_element())
        .fold(0.0_f32, f32::max);

    ResolvedLighting {
        lights: rig.lights.each_ref().map(|light| resolve_light(light, config)),
        ambient_color: color_from(rig.global.ambient_color),
        ambient_brightness: config.ambient_brightness,
        reflectance: specular * config.max_reflectance,
        perceptual_roughness: if rig.global.prefer_per_pixel_lighting {
            config.per_pixel_roughness
        } else {
            config.per_vertex_roughness
        },
    }
}

pub fn lit_material(rig: &LightRig, config: &EffectConfig) -> StandardMaterial {
    let resolved = resolve_lighting(rig, config);
    StandardMaterial {
        base_color: config.base_color,
        reflectance: resolved.reflectance,
        perceptual_roughness: resolved.perceptual_roughness,
        ..default()
    }
}

fn spawn_rig_lights(mut commands: Commands, rig: Res<LightRig>, config: Res<EffectConfig>) {
    let resolved = resolve_lighting(&rig, &config);
    for (index, light) in resolved.lights.iter().enumerate() {
        let direction = light.direction.unwrap_or(Dir3::NEG_Z);
        commands.spawn((
            RigLight(index),
            DirectionalLight {
                color: light.color,
                illuminance: light.illuminance,
                shadows_enabled: false,
                ..default()
            },
            Transform::default().looking_to(direction, Vec3::Y),
        ));
    }
}

pub fn apply_lighting(
    rig: Res<LightRig>,
    config: Res<EffectConfig>,
    mut ambient: ResMut<AmbientLight>,
    mut lights: Query<(&RigLight, &mut DirectionalLight, &mut Transform)>,
    lit_meshes: Query<&MeshMaterial3d<StandardMaterial>, With<LitMesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let resolved = resolve_lighting(&rig, &config);

    for (RigLight(index), mut light, mut transform) in lights.iter_mut() {
        let Some(target) = resolved.lights.get(*index) else {
            warn!("rig light index {index} is out of range");
            continue;
        };
        light.color = target.color;
        light.illuminance = target.illuminance;
        if let Some(direction) = target.direction {
            transform.look_to(direction, Vec3::Y);
        }
    }

    ambient.color = resolved.ambient_color;
    ambient.brightness = resolved.ambient_brightness;

    for material in lit_meshes.iter() {
        if let Some(material) = materials.get_mut(&material.0) {
            material.reflectance = resolved.reflectance;
            material.perceptual_roughness = resolved.perceptual_roughness;
        }
    }
}
