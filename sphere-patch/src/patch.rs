//! Patch and sphere descriptors.
//!
//! A [`PatchDescriptor`] is an immutable value describing one plane patch
//! before projection; the [`SphereTarget`] it is projected onto is supplied
//! per generation call and never stored. All derived counts are recomputed
//! from `resolution`, which is clamped to [`PatchDescriptor::MIN_RESOLUTION`]
//! at construction so a descriptor can never describe a zero-cell patch.

use tracing::warn;
use ultraviolet::{Rotor3, Vec2, Vec3};

/// An immutable description of one plane patch.
///
/// `resolution` is the number of vertices per side. Grid rows walk the
/// patch-local X axis and columns the local Y axis; the local plane normal
/// is +Z, rotated by `rotation` into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchDescriptor {
    position: Vec3,
    rotation: Vec3,
    size: Vec2,
    resolution: u32,
}

impl PatchDescriptor {
    /// Minimum number of vertices per side. Descriptors constructed below
    /// this are silently raised to it.
    pub const MIN_RESOLUTION: u32 = 2;

    /// Creates a descriptor for a patch centered at `position`, rotated by
    /// `rotation` (Euler angles in degrees), spanning `size` world units
    /// before projection, with `resolution` vertices per side.
    pub fn new(position: Vec3, rotation: Vec3, size: Vec2, resolution: u32) -> Self {
        let resolution = if resolution < Self::MIN_RESOLUTION {
            warn!("patch resolution {resolution} below minimum, clamping to 2");
            Self::MIN_RESOLUTION
        } else {
            resolution
        };

        Self {
            position,
            rotation,
            size,
            resolution,
        }
    }

    /// Patch center in world space.
    #[inline]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Patch orientation as Euler angles in degrees.
    #[inline]
    pub const fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Physical width/height of the patch before projection.
    #[inline]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Vertices per side, at least [`Self::MIN_RESOLUTION`].
    #[inline]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of vertices in the patch grid.
    #[inline]
    pub const fn vertex_count(&self) -> usize {
        (self.resolution as usize) * (self.resolution as usize)
    }

    /// Number of cells in the patch grid.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        ((self.resolution - 1) as usize) * ((self.resolution - 1) as usize)
    }

    /// Number of triangles covering the patch, two per cell.
    #[inline]
    pub const fn triangle_count(&self) -> usize {
        self.cell_count() * 2
    }

    /// Number of triangle indices, three per triangle.
    #[inline]
    pub const fn index_count(&self) -> usize {
        self.cell_count() * 6
    }

    /// The patch orientation as a rotor.
    ///
    /// Euler angles apply right-handed about each world axis, composed in
    /// Z-X-Y order.
    pub fn rotor(&self) -> Rotor3 {
        let about_x = Rotor3::from_rotation_yz(self.rotation.x.to_radians());
        let about_y = Rotor3::from_rotation_xz(-self.rotation.y.to_radians());
        let about_z = Rotor3::from_rotation_xy(self.rotation.z.to_radians());
        about_y * about_x * about_z
    }
}

/// The sphere every patch vertex is projected onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereTarget {
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius, must be positive.
    pub radius: f32,
}

impl SphereTarget {
    /// A sphere of `radius` around `center`.
    #[inline]
    pub fn new(center: Vec3, radius: f32) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }
}

/// Returns the six patch descriptors whose projections tile a full
/// cube-sphere of the given radius.
///
/// Each face is a square plane of side `2 * radius`, centered at `radius`
/// from `center` along one axis and rotated so its local +Z normal points
/// outward. Generating all six against the same [`SphereTarget`] yields a
/// seamless sphere approximation; boundary vertices of adjacent faces
/// project onto the same sphere points.
pub fn cube_faces(center: Vec3, radius: f32, resolution: u32) -> [PatchDescriptor; 6] {
    let size = Vec2::new(2.0 * radius, 2.0 * radius);
    let face = |offset: Vec3, rotation: Vec3| {
        PatchDescriptor::new(center + offset, rotation, size, resolution)
    };

    [
        // +Z
        face(Vec3::new(0.0, 0.0, radius), Vec3::zero()),
        // -Z
        face(Vec3::new(0.0, 0.0, -radius), Vec3::new(0.0, 180.0, 0.0)),
        // +X
        face(Vec3::new(radius, 0.0, 0.0), Vec3::new(0.0, 90.0, 0.0)),
        // -X
        face(Vec3::new(-radius, 0.0, 0.0), Vec3::new(0.0, -90.0, 0.0)),
        // +Y
        face(Vec3::new(0.0, radius, 0.0), Vec3::new(-90.0, 0.0, 0.0)),
        // -Y
        face(Vec3::new(0.0, -radius, 0.0), Vec3::new(90.0, 0.0, 0.0)),
    ]
}
