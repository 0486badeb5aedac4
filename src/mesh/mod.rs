//! glTF mesh ingestion.
//!
//! [`decode`] loads the first primitive of the first mesh of a `.glb` or
//! `.gltf` asset into a [`Mesh`]: positions, optional normals and optional
//! 32-bit triangle-list indices. Validation is strict: anything the
//! renderer cannot consume directly is reported as a [`MeshError`] rather
//! than converted.

mod accessor;
mod container;
mod decoder;
mod error;
#[cfg(test)]
mod fixtures;
mod format;

use glam::Vec3;

pub use container::ContainerKind;
pub use decoder::{decode, decode_slice};
pub use error::MeshError;
pub use format::{AccessorFormat, Topology};

/// A decoded triangle mesh, owned by the caller.
///
/// `normals` is either empty (not provided) or exactly as long as
/// `positions`. `indices` is either empty (draw `positions` in order as a
/// triangle list) or a multiple of three, every value `< positions.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals, empty when the asset has none.
    pub normals: Vec<[f32; 3]>,
    /// Triangle-list indices, empty when the asset is non-indexed.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the asset provided normals.
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether the mesh is drawn through an index list.
    #[must_use]
    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of whole triangles the mesh draws.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        if self.has_indices() {
            self.indices.len() / 3
        } else {
            self.positions.len() / 3
        }
    }

    /// Axis-aligned bounds of the positions as `(min, max)`, `None` for an
    /// empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.iter().copied().map(Vec3::from_array);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (min.min(p), max.max(p))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_positions() {
        let mesh = Mesh {
            positions: vec![[0.0, -1.0, 2.0], [3.0, 1.0, -2.0], [1.0, 0.0, 0.0]],
            ..Mesh::default()
        };
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(max, Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(Mesh::default().bounds(), None);
    }

    #[test]
    fn non_indexed_triangle_count_uses_positions() {
        let mesh = Mesh {
            positions: vec![[0.0; 3]; 7],
            ..Mesh::default()
        };
        assert!(!mesh.has_indices());
        assert_eq!(mesh.triangle_count(), 2);
    }
}
