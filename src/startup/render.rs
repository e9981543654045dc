use std::f32::consts::FRAC_PI_3;

use bevy::{color::palettes::css::CORNFLOWER_BLUE, prelude::*};

use crate::{
    data::lighting::LightRig,
    systems::effect::{lit_material, EffectConfig, LitMesh},
};

pub struct RenderPlugin;
impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(CORNFLOWER_BLUE.into()))
            .add_systems(Startup, (setup_camera, spawn_model));
    }
}

#[derive(Component)]
pub struct MainCamera;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 8.0);
const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 1.0;
const FAR_PLANE: f32 = 100.0;

pub fn camera_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: FIELD_OF_VIEW_DEGREES.to_radians(),
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    })
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        MainCamera,
        camera_projection(),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Static model at the origin; every part shares the one lit material.
fn spawn_model(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rig: Res<LightRig>,
    config: Res<EffectConfig>,
) {
    let material = materials.add(lit_material(&rig, &config));

    commands.spawn((
        LitMesh,
        Mesh3d(meshes.add(Sphere::new(1.2).mesh().uv(64, 32))),
        MeshMaterial3d(material.clone()),
        Transform::default(),
    ));
    commands.spawn((
        LitMesh,
        Mesh3d(meshes.add(Torus::new(1.6, 2.1))),
        MeshMaterial3d(material),
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_3)),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_matches_the_fixed_view() {
        let Projection::Perspective(perspective) = camera_projection() else {
            panic!("camera should use a perspective projection");
        };
        assert!((perspective.fov - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(perspective.near, 1.0);
        assert_eq!(perspective.far, 100.0);

        let view = Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y);
        assert!(view.forward().as_vec3().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}
