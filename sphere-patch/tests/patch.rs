//! Tests for patch and sphere descriptors.

use sphere_patch::{cube_faces, PatchDescriptor, SphereTarget};
use ultraviolet::{Vec2, Vec3};

fn unit_patch(resolution: u32) -> PatchDescriptor {
    PatchDescriptor::new(Vec3::zero(), Vec3::zero(), Vec2::new(1.0, 1.0), resolution)
}

#[test]
fn test_derived_counts() {
    let patch = unit_patch(8);

    assert_eq!(patch.vertex_count(), 64);
    assert_eq!(patch.cell_count(), 49);
    assert_eq!(patch.triangle_count(), 98);
    assert_eq!(patch.index_count(), 294);
}

#[test]
fn test_resolution_clamped_to_minimum() {
    for resolution in [0, 1] {
        let patch = unit_patch(resolution);

        assert_eq!(patch.resolution(), 2);
        assert_eq!(patch.vertex_count(), 4);
        assert_eq!(patch.cell_count(), 1);
        assert_eq!(patch.index_count(), 6);
    }
}

#[test]
fn test_minimum_resolution_passes_through() {
    let patch = unit_patch(2);

    assert_eq!(patch.resolution(), 2);
    assert_eq!(patch.triangle_count(), 2);
}

#[test]
fn test_rotor_single_axis() {
    // 90° about Y maps the +Z plane normal onto +X.
    let patch = PatchDescriptor::new(
        Vec3::zero(),
        Vec3::new(0.0, 90.0, 0.0),
        Vec2::one(),
        2,
    );

    let normal = patch.rotor() * Vec3::unit_z();
    assert!((normal - Vec3::unit_x()).mag() < 1e-6);
}

#[test]
fn test_cube_faces_point_outward() {
    let radius = 3.0;
    let faces = cube_faces(Vec3::zero(), radius, 4);

    for face in faces {
        assert!((face.position().mag() - radius).abs() < 1e-6);
        assert_eq!(face.size(), Vec2::new(2.0 * radius, 2.0 * radius));

        // The rotated plane normal is the face's outward axis.
        let outward = face.position() / radius;
        let normal = face.rotor() * Vec3::unit_z();
        assert!((normal - outward).mag() < 1e-5);
    }
}

#[test]
fn test_cube_faces_cover_all_axes() {
    let faces = cube_faces(Vec3::zero(), 1.0, 2);
    let mut axes: Vec<[i32; 3]> = faces
        .iter()
        .map(|face| {
            let p = face.position();
            [p.x.round() as i32, p.y.round() as i32, p.z.round() as i32]
        })
        .collect();
    axes.sort();

    let mut expected = vec![
        [0, 0, 1],
        [0, 0, -1],
        [1, 0, 0],
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
    ];
    expected.sort();

    assert_eq!(axes, expected);
}

#[test]
#[should_panic(expected = "sphere radius must be positive")]
fn test_sphere_target_rejects_zero_radius() {
    SphereTarget::new(Vec3::zero(), 0.0);
}
