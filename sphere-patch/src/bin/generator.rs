//! Cube-sphere generator binary.
//!
//! Generates the six faces of a cube-sphere and writes the merged mesh to a
//! Wavefront OBJ file.

use sphere_patch::{cube_faces, generate, obj_export, SphereTarget, Triangle};
use std::fs::File;
use std::io::BufWriter;
use ultraviolet::Vec3;

static RESOLUTION: u32 = 16;
static RADIUS: f32 = 1.0;

fn main() {
    let sphere = SphereTarget::new(Vec3::zero(), RADIUS);

    let mut vertices = Vec::new();
    let mut triangles = Vec::new();
    for face in cube_faces(Vec3::zero(), RADIUS, RESOLUTION) {
        let (face_vertices, face_triangles) = generate(&face, &sphere);

        // Re-base the face's indices onto the merged vertex buffer.
        let base = vertices.len() as u32;
        vertices.extend(face_vertices);
        triangles.extend(
            face_triangles
                .into_iter()
                .map(|t| Triangle::new(t.a + base, t.b + base, t.c + base)),
        );
    }

    println!("Generated cube-sphere with:");
    println!("  {} vertices", vertices.len());
    println!("  {} triangles", triangles.len());

    if let Err(e) = write_obj_file("cube_sphere.obj", &vertices, &triangles) {
        eprintln!("Error writing OBJ file: {e}");
    } else {
        println!("Wrote mesh to cube_sphere.obj");
    }
}

fn write_obj_file(
    filename: &str,
    vertices: &[sphere_patch::Vertex],
    triangles: &[Triangle],
) -> sphere_patch::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    obj_export::write_obj(&mut file, vertices, triangles)
}
