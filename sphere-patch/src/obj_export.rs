//! Wavefront OBJ export for generated patches.

use std::io::Write;

use crate::error::Result;
use crate::mesh::{Triangle, Vertex};

/// Writes a generated patch to `sink` as Wavefront OBJ.
///
/// Emits `v`, `vt` and `vn` records per vertex and one `f v/vt/vn` record
/// per triangle, with 1-based indices as OBJ requires. The three per-vertex
/// record streams share the same numbering, so every face index triple is
/// `i/i/i`.
pub fn write_obj<W: Write>(
    sink: &mut W,
    vertices: &[Vertex],
    triangles: &[Triangle],
) -> Result<()> {
    writeln!(
        sink,
        "# {} vertices, {} triangles",
        vertices.len(),
        triangles.len()
    )?;
    writeln!(sink)?;

    for vertex in vertices {
        let [x, y, z] = vertex.position;
        writeln!(sink, "v {x} {y} {z}")?;
    }
    writeln!(sink)?;

    for vertex in vertices {
        let [u, v] = vertex.uv;
        writeln!(sink, "vt {u} {v}")?;
    }
    writeln!(sink)?;

    for vertex in vertices {
        let [x, y, z] = vertex.normal;
        writeln!(sink, "vn {x} {y} {z}")?;
    }
    writeln!(sink)?;

    for triangle in triangles {
        let [a, b, c] = triangle.indices();
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(sink, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}
