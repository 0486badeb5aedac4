use std::fmt;

use super::format::{AccessorFormat, Topology};

/// Errors produced while decoding a glTF asset into a [`Mesh`](super::Mesh).
///
/// None of these are fatal to the process; the caller decides whether to
/// abort the load or fall back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Unreadable file, malformed container or JSON, or a buffer that
    /// cannot be loaded. Carries the underlying `gltf` error message.
    AssetParse(String),
    /// The document defines no meshes.
    NoMesh,
    /// The first mesh has no primitives.
    NoPrimitive {
        /// Index of the offending mesh.
        mesh: usize,
    },
    /// The first primitive is not a triangle list.
    UnsupportedTopology {
        /// Topology the primitive declares.
        topology: Topology,
    },
    /// The first primitive has no `POSITION` attribute.
    MissingPosition,
    /// A vertex attribute accessor is not the required format.
    UnsupportedFormat {
        /// Attribute semantic (`POSITION`, `NORMAL`).
        attribute: &'static str,
        /// Accessor index.
        accessor: usize,
        /// Format the decoder requires.
        expected: AccessorFormat,
        /// Format the accessor declares.
        found: AccessorFormat,
    },
    /// The index accessor is not an unsigned 8/16/32-bit scalar.
    UnsupportedIndexFormat {
        /// Accessor index.
        accessor: usize,
        /// Format the accessor declares.
        found: AccessorFormat,
    },
    /// The accessor uses a storage feature the decoder does not read
    /// (sparse storage, or no buffer view).
    UnsupportedAccessor {
        /// Attribute semantic or `indices`.
        attribute: &'static str,
        /// Accessor index.
        accessor: usize,
        /// Which feature is unsupported.
        reason: &'static str,
    },
    /// The accessor reads past the end of its buffer view, or the view
    /// extends past the end of its buffer.
    BufferRange {
        /// Attribute semantic or `indices`.
        attribute: &'static str,
        /// Accessor index.
        accessor: usize,
        /// End of the read, in bytes from the buffer start.
        required: usize,
        /// End of the readable range (view end or buffer length), in bytes
        /// from the buffer start.
        available: usize,
    },
    /// The document references an accessor, buffer view or buffer that does
    /// not exist.
    InvalidReference {
        /// Kind of object referenced.
        kind: &'static str,
        /// The dangling index.
        index: usize,
    },
    /// The `POSITION` accessor holds no vertices.
    EmptyPositions {
        /// Accessor index.
        accessor: usize,
    },
    /// A vertex attribute's count differs from the vertex count.
    AttributeCountMismatch {
        /// Attribute semantic.
        attribute: &'static str,
        /// Number of positions.
        expected: usize,
        /// Number of elements in the attribute.
        found: usize,
    },
    /// An index refers past the last vertex.
    IndexOutOfRange {
        /// Position of the index within the index list.
        position: usize,
        /// The offending index value.
        value: u32,
        /// Number of vertices.
        vertex_count: usize,
    },
    /// The index count is not a multiple of three.
    IncompleteTriangle {
        /// Number of indices read.
        index_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetParse(msg) => write!(f, "failed to parse glTF asset: {msg}"),
            Self::NoMesh => f.write_str("glTF has no meshes"),
            Self::NoPrimitive { mesh } => {
                write!(f, "mesh {mesh} has no primitives")
            }
            Self::UnsupportedTopology { topology } => write!(
                f,
                "primitive topology is {topology}, only TRIANGLES is supported"
            ),
            Self::MissingPosition => {
                f.write_str("primitive has no POSITION attribute")
            }
            Self::UnsupportedFormat {
                attribute,
                accessor,
                expected,
                found,
            } => write!(
                f,
                "{attribute} accessor {accessor} is {found}, expected {expected}"
            ),
            Self::UnsupportedIndexFormat { accessor, found } => write!(
                f,
                "index accessor {accessor} is {found}, expected SCALAR of \
                 UNSIGNED_BYTE, UNSIGNED_SHORT or UNSIGNED_INT"
            ),
            Self::UnsupportedAccessor {
                attribute,
                accessor,
                reason,
            } => write!(f, "{attribute} accessor {accessor}: {reason}"),
            Self::BufferRange {
                attribute,
                accessor,
                required,
                available,
            } => write!(
                f,
                "{attribute} accessor {accessor} reads up to byte {required} but \
                 only {available} bytes are in range"
            ),
            Self::InvalidReference { kind, index } => {
                write!(f, "{kind} {index} does not exist")
            }
            Self::EmptyPositions { accessor } => {
                write!(f, "POSITION accessor {accessor} has no elements")
            }
            Self::AttributeCountMismatch {
                attribute,
                expected,
                found,
            } => write!(
                f,
                "{attribute} has {found} elements but there are {expected} \
                 positions"
            ),
            Self::IndexOutOfRange {
                position,
                value,
                vertex_count,
            } => write!(
                f,
                "index {value} at position {position} is out of range for \
                 {vertex_count} vertices"
            ),
            Self::IncompleteTriangle { index_count } => write!(
                f,
                "{index_count} indices do not form a whole number of triangles"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
