//! Output buffer elements.
//!
//! Both element types are `#[repr(C)]` and [`bytemuck::Pod`], so a filled
//! buffer can be handed to a renderer byte-for-byte without a copy per
//! element.

use bytemuck::{Pod, Zeroable};

/// A single generated vertex.
///
/// Written exactly once, at the buffer slot equal to its linear grid index,
/// and never mutated afterwards. `color` defaults to transparent black.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// World-space position on the target sphere.
    pub position: [f32; 3],
    /// Unit normal, pointing outward from the sphere center.
    pub normal: [f32; 3],
    /// Texture coordinate, each axis in `[0, 1]`.
    pub uv: [f32; 2],
    /// Vertex color, transparent black unless the caller fills it in.
    pub color: [f32; 4],
}

/// A triangle as three indices into the vertex buffer, in fixed winding
/// order.
///
/// With the generator's grid layout the winding is counter-clockwise seen
/// from outside the sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    #[inline]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// The three vertex indices in winding order.
    #[inline]
    pub const fn indices(self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}
