//! # Sphere Patch
//!
//! Generates a rectangular grid mesh ("plane patch") and projects it onto the
//! surface of a sphere, producing vertex positions, normals, UV coordinates
//! and triangle index data.
//!
//! This is the geometry kernel behind cube-sphere style planet generation:
//! six plane patches, each transformed by position/rotation, are projected
//! onto a common sphere to approximate its surface without pole
//! singularities. The crate generates exactly one patch per call; assembling
//! patches into a full sphere is caller territory (though
//! [`cube_faces`](patch::cube_faces) hands you the six canonical
//! descriptors).
//!
//! ## Example
//!
//! ```
//! use sphere_patch::{generate, PatchDescriptor, SphereTarget};
//! use ultraviolet::{Vec2, Vec3};
//!
//! let patch = PatchDescriptor::new(
//!     Vec3::zero(),
//!     Vec3::zero(),
//!     Vec2::new(2.0, 2.0),
//!     3,
//! );
//! let sphere = SphereTarget::new(Vec3::zero(), 5.0);
//!
//! let (vertices, triangles) = generate(&patch, &sphere);
//!
//! assert_eq!(vertices.len(), 9);
//! assert_eq!(triangles.len(), 8);
//! ```
//!
//! ## Output contract
//!
//! Buffers are sized exactly to the descriptor's derived counts and fully
//! written before they are handed back; every vertex lies on the target
//! sphere and carries the outward unit normal. Caller-supplied buffers of the
//! wrong size are rejected before any write begins.
//!
//! ## Parallelism
//!
//! With the `rayon` feature, [`generate_par`] fans the per-index work out
//! over a thread pool. Every unit of work writes a disjoint output slot
//! (vertices are owned per index, triangles per cell), so the parallel and
//! sequential paths produce identical buffers.
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod error;
pub mod generate;
pub mod grid;
pub mod mesh;
pub mod obj_export;
pub mod patch;

#[cfg(feature = "bevy")]
pub mod bevy_mesh;

pub use error::{Error, Result};
#[cfg(feature = "rayon")]
pub use generate::{generate_par, generate_par_into};
pub use generate::{generate, generate_into, VertexSynthesizer};
pub use grid::GridCoord;
pub use mesh::{Triangle, Vertex};
pub use patch::{cube_faces, PatchDescriptor, SphereTarget};
