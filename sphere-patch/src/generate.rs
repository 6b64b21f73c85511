//! Patch generation: vertex synthesis, triangle emission and the
//! sequential/parallel drivers.
//!
//! All per-index work is independent: every vertex is written at the buffer
//! slot equal to its linear grid index, and every cell's two triangles are
//! written at slots `2 * cell` and `2 * cell + 1`. Both mappings are
//! bijections, so no two units of work ever target the same slot and the
//! parallel driver needs no synchronization beyond joining the batch.

use crate::error::{Error, Result};
use crate::grid::{to_1d, to_2d, GridCoord};
use crate::mesh::{Triangle, Vertex};
use crate::patch::{PatchDescriptor, SphereTarget};
use ultraviolet::{Rotor3, Vec2, Vec3};

/// Computes one vertex of a patch from its linear grid index.
///
/// Construction hoists the Euler conversion, per-axis step and grid centering
/// out of the per-index work; [`vertex`](Self::vertex) is then pure
/// arithmetic over the index and touches no shared state.
#[derive(Debug, Clone, Copy)]
pub struct VertexSynthesizer {
    position: Vec3,
    rotation: Rotor3,
    resolution: u32,
    step: Vec2,
    half: f32,
    center: Vec3,
    radius: f32,
    fallback_normal: Vec3,
}

impl VertexSynthesizer {
    /// Precomputes the per-patch state shared by every vertex computation.
    pub fn new(patch: &PatchDescriptor, sphere: &SphereTarget) -> Self {
        let rotation = patch.rotor();
        let last = (patch.resolution() - 1) as f32;

        Self {
            position: patch.position(),
            rotation,
            resolution: patch.resolution(),
            step: patch.size() / last,
            half: last / 2.0,
            center: sphere.center,
            radius: sphere.radius,
            fallback_normal: rotation * Vec3::unit_z(),
        }
    }

    /// Synthesizes the vertex at linear index `index`.
    ///
    /// The grid is laid out symmetrically around the patch position: the
    /// coordinate is centered, scaled by the per-axis step, lifted into the
    /// patch's local XY plane (rows along X, columns along Y), rotated and
    /// translated into world space, then projected onto the target sphere.
    /// The normal is the projection direction itself. A vertex that lands
    /// exactly on the sphere center has no defined projection direction and
    /// falls back to the patch's rotated plane normal.
    pub fn vertex(&self, index: u32) -> Vertex {
        let coord = to_2d(index, self.resolution);
        self.vertex_at(coord)
    }

    /// Synthesizes the vertex at grid coordinate `coord`.
    pub fn vertex_at(&self, coord: GridCoord) -> Vertex {
        let local = Vec2::new(coord.row as f32 - self.half, coord.col as f32 - self.half) * self.step;
        let world = self.rotation * Vec3::new(local.x, local.y, 0.0) + self.position;

        let offset = world - self.center;
        let dir = if offset.mag_sq() > 0.0 {
            offset.normalized()
        } else {
            self.fallback_normal
        };
        let position = self.center + dir * self.radius;

        let last = 2.0 * self.half;
        Vertex {
            position: [position.x, position.y, position.z],
            normal: [dir.x, dir.y, dir.z],
            uv: [coord.row as f32 / last, coord.col as f32 / last],
            color: [0.0; 4],
        }
    }
}

/// Emits the two triangles covering cell `cell_index` of the cell grid.
///
/// The anchor is the cell's own coordinate read as a vertex index; moving by
/// `+1` advances one column and `+resolution` one row. The fixed winding is
/// counter-clockwise seen from outside the sphere.
#[inline]
pub fn cell_triangles(cell_index: u32, resolution: u32) -> [Triangle; 2] {
    let coord = to_2d(cell_index, resolution - 1);
    let anchor = to_1d(coord, resolution);

    [
        Triangle::new(anchor, anchor + resolution, anchor + resolution + 1),
        Triangle::new(anchor, anchor + resolution + 1, anchor + 1),
    ]
}

/// Emits the two triangles for the cell anchored at vertex coordinate
/// `coord`, or `None` if the coordinate lies on the trailing row or column
/// and anchors no cell.
#[inline]
pub fn emit_triangles(coord: GridCoord, resolution: u32) -> Option<[Triangle; 2]> {
    if !coord.anchors_cell(resolution) {
        return None;
    }

    Some(cell_triangles(to_1d(coord, resolution - 1), resolution))
}

/// Generates one patch into freshly allocated, exactly-sized buffers.
///
/// Iterates the vertex and cell index ranges sequentially. See the
/// [module docs](self) for the slot-per-index layout.
pub fn generate(patch: &PatchDescriptor, sphere: &SphereTarget) -> (Vec<Vertex>, Vec<Triangle>) {
    let mut vertices = vec![Vertex::default(); patch.vertex_count()];
    let mut triangles = vec![Triangle::default(); patch.triangle_count()];

    fill(patch, sphere, &mut vertices, &mut triangles);

    (vertices, triangles)
}

/// Generates one patch into caller-supplied buffers.
///
/// Buffer sizes must match the descriptor's derived counts exactly; a
/// mismatch fails with [`Error::VertexBufferSize`] or
/// [`Error::TriangleBufferSize`] before any write begins.
pub fn generate_into(
    patch: &PatchDescriptor,
    sphere: &SphereTarget,
    vertices: &mut [Vertex],
    triangles: &mut [Triangle],
) -> Result<()> {
    check_sizes(patch, vertices.len(), triangles.len())?;
    fill(patch, sphere, vertices, triangles);
    Ok(())
}

/// Parallel variant of [`generate`].
///
/// Fans the per-index work out over the rayon thread pool and joins before
/// returning. Produces buffers identical to the sequential variant.
#[cfg(feature = "rayon")]
pub fn generate_par(patch: &PatchDescriptor, sphere: &SphereTarget) -> (Vec<Vertex>, Vec<Triangle>) {
    let mut vertices = vec![Vertex::default(); patch.vertex_count()];
    let mut triangles = vec![Triangle::default(); patch.triangle_count()];

    fill_par(patch, sphere, &mut vertices, &mut triangles);

    (vertices, triangles)
}

/// Parallel variant of [`generate_into`].
#[cfg(feature = "rayon")]
pub fn generate_par_into(
    patch: &PatchDescriptor,
    sphere: &SphereTarget,
    vertices: &mut [Vertex],
    triangles: &mut [Triangle],
) -> Result<()> {
    check_sizes(patch, vertices.len(), triangles.len())?;
    fill_par(patch, sphere, vertices, triangles);
    Ok(())
}

fn check_sizes(patch: &PatchDescriptor, vertices: usize, triangles: usize) -> Result<()> {
    if vertices != patch.vertex_count() {
        return Err(Error::VertexBufferSize {
            expected: patch.vertex_count(),
            actual: vertices,
        });
    }

    if triangles != patch.triangle_count() {
        return Err(Error::TriangleBufferSize {
            expected: patch.triangle_count(),
            actual: triangles,
        });
    }

    Ok(())
}

fn fill(
    patch: &PatchDescriptor,
    sphere: &SphereTarget,
    vertices: &mut [Vertex],
    triangles: &mut [Triangle],
) {
    let synth = VertexSynthesizer::new(patch, sphere);
    for (index, vertex) in vertices.iter_mut().enumerate() {
        *vertex = synth.vertex(index as u32);
    }

    let resolution = patch.resolution();
    for (cell, pair) in triangles.chunks_exact_mut(2).enumerate() {
        let [t0, t1] = cell_triangles(cell as u32, resolution);
        pair[0] = t0;
        pair[1] = t1;
    }
}

#[cfg(feature = "rayon")]
fn fill_par(
    patch: &PatchDescriptor,
    sphere: &SphereTarget,
    vertices: &mut [Vertex],
    triangles: &mut [Triangle],
) {
    use rayon::prelude::*;

    let synth = VertexSynthesizer::new(patch, sphere);
    vertices
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, vertex)| {
            *vertex = synth.vertex(index as u32);
        });

    let resolution = patch.resolution();
    triangles
        .par_chunks_exact_mut(2)
        .enumerate()
        .for_each(|(cell, pair)| {
            let [t0, t1] = cell_triangles(cell as u32, resolution);
            pair[0] = t0;
            pair[1] = t1;
        });
}
