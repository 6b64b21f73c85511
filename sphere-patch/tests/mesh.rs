//! Tests for the output buffer element types.

use sphere_patch::{Triangle, Vertex};

#[test]
fn test_vertex_defaults() {
    let vertex = Vertex::default();

    assert_eq!(vertex.position, [0.0; 3]);
    assert_eq!(vertex.normal, [0.0; 3]);
    assert_eq!(vertex.uv, [0.0; 2]);
    assert_eq!(vertex.color, [0.0; 4]);
}

#[test]
fn test_vertex_pod_round_trip() {
    let vertex = Vertex {
        position: [1.0, 2.0, 3.0],
        normal: [0.0, 0.0, 1.0],
        uv: [0.5, 0.25],
        color: [0.1, 0.2, 0.3, 1.0],
    };

    let bytes = bytemuck::bytes_of(&vertex);
    assert_eq!(bytes.len(), std::mem::size_of::<Vertex>());
    assert_eq!(bytemuck::from_bytes::<Vertex>(bytes), &vertex);
}

#[test]
fn test_vertex_buffer_casts_to_bytes() {
    // A renderer upload is a single slice cast, no per-element copies.
    let vertices = vec![Vertex::default(); 4];

    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), 4 * std::mem::size_of::<Vertex>());
}

#[test]
fn test_triangle_pod_round_trip() {
    let triangle = Triangle::new(3, 7, 11);

    let bytes = bytemuck::bytes_of(&triangle);
    assert_eq!(bytes.len(), 12);
    assert_eq!(bytemuck::from_bytes::<Triangle>(bytes), &triangle);
}

#[test]
fn test_triangle_indices_in_winding_order() {
    let triangle = Triangle::new(3, 7, 11);

    assert_eq!(triangle.indices(), [3, 7, 11]);
}
