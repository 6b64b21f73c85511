//! Conversion of generated buffers into a Bevy [`Mesh`].

use bevy::asset::RenderAssetUsages;
use bevy::render::mesh::{Indices, Mesh, PrimitiveTopology};

use crate::mesh::{Triangle, Vertex};

/// Builds a Bevy triangle-list mesh from generated patch buffers.
///
/// Positions, normals and UVs are copied into the mesh attributes; the
/// triangle buffer flattens into a `u32` index buffer.
pub fn to_bevy_mesh(vertices: &[Vertex], triangles: &[Triangle]) -> Mesh {
    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| v.position).collect();
    let normals: Vec<[f32; 3]> = vertices.iter().map(|v| v.normal).collect();
    let uvs: Vec<[f32; 2]> = vertices.iter().map(|v| v.uv).collect();
    let indices: Vec<u32> = triangles.iter().flat_map(|t| t.indices()).collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);

    mesh
}
