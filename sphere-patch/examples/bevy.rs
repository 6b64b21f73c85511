//! Cube-sphere demo.
//!
//! Spawns the six faces of a cube-sphere, regenerates every face's mesh each
//! frame while the resolution sweeps up and down, and lets an orbit camera
//! circle the result. The regeneration system is the per-frame host loop the
//! library is designed for: new descriptors, fresh exactly-sized buffers and
//! a mesh upload every frame.

use bevy::prelude::*;
use smooth_bevy_cameras::{
    controllers::orbit::{OrbitCameraBundle, OrbitCameraController, OrbitCameraPlugin},
    LookTransformPlugin,
};
use sphere_patch::{bevy_mesh, cube_faces, generate, SphereTarget};
use ultraviolet as uv;

static RADIUS: f32 = 2.0;

/// Mesh handles for the six faces, regenerated in place every frame.
#[derive(Resource)]
struct FaceMeshes(Vec<Handle<Mesh>>);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((LookTransformPlugin, OrbitCameraPlugin::default()))
        .add_systems(Startup, setup)
        .add_systems(Update, regenerate)
        .run();
}

/// Set up the six face entities, a light and the orbit camera.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere = SphereTarget::new(uv::Vec3::zero(), RADIUS);
    let face_colors = [
        Color::srgb(0.8, 0.4, 0.4),
        Color::srgb(0.4, 0.8, 0.4),
        Color::srgb(0.4, 0.4, 0.8),
        Color::srgb(0.8, 0.8, 0.4),
        Color::srgb(0.8, 0.4, 0.8),
        Color::srgb(0.4, 0.8, 0.8),
    ];

    let mut handles = Vec::new();
    for (face, color) in cube_faces(uv::Vec3::zero(), RADIUS, 16)
        .iter()
        .zip(face_colors)
    {
        let (vertices, triangles) = generate(face, &sphere);
        let handle = meshes.add(bevy_mesh::to_bevy_mesh(&vertices, &triangles));
        handles.push(handle.clone());

        commands.spawn((Mesh3d(handle), MeshMaterial3d(materials.add(color))));
    }
    commands.insert_resource(FaceMeshes(handles));

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands
        .spawn(Camera3d::default())
        .insert(OrbitCameraBundle::new(
            OrbitCameraController::default(),
            Vec3::new(-2.0, 2.5, 8.0),
            Vec3::ZERO,
            Vec3::Y,
        ));
}

/// Regenerate all six faces with a resolution that sweeps between 2 and 32.
fn regenerate(time: Res<Time>, face_meshes: Res<FaceMeshes>, mut meshes: ResMut<Assets<Mesh>>) {
    let sweep = 0.5 + 0.5 * (time.elapsed_secs() * 0.4).sin();
    let resolution = 2 + (30.0 * sweep) as u32;
    let sphere = SphereTarget::new(uv::Vec3::zero(), RADIUS);

    for (face, handle) in cube_faces(uv::Vec3::zero(), RADIUS, resolution)
        .iter()
        .zip(&face_meshes.0)
    {
        let (vertices, triangles) = generate(face, &sphere);
        if let Some(mesh) = meshes.get_mut(handle) {
            *mesh = bevy_mesh::to_bevy_mesh(&vertices, &triangles);
        }
    }
}
