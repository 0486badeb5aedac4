//! Display names and element sizes for the glTF enums the decoder checks.
//!
//! The enums themselves come from `gltf`; a value the document declares
//! but glTF does not define is carried as `None`.

use std::fmt;

use gltf::accessor::{DataType, Dimensions};
use gltf::json::validation::Checked;
use gltf::mesh::Mode;

/// Primitive mode as declared, `None` for a value glTF does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology(pub Option<Mode>);

impl Topology {
    /// The only topology the decoder accepts.
    pub const TRIANGLES: Self = Self(Some(Mode::Triangles));

    pub(crate) fn from_checked(mode: Checked<Mode>) -> Self {
        match mode {
            Checked::Valid(mode) => Self(Some(mode)),
            Checked::Invalid => Self(None),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.0 {
            Some(Mode::Points) => "POINTS",
            Some(Mode::Lines) => "LINES",
            Some(Mode::LineLoop) => "LINE_LOOP",
            Some(Mode::LineStrip) => "LINE_STRIP",
            Some(Mode::Triangles) => "TRIANGLES",
            Some(Mode::TriangleStrip) => "TRIANGLE_STRIP",
            Some(Mode::TriangleFan) => "TRIANGLE_FAN",
            None => "an unknown mode",
        })
    }
}

/// Component type plus element dimensions of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorFormat {
    /// Per-component storage type.
    pub component: Option<DataType>,
    /// Number and arrangement of components per element.
    pub dimensions: Option<Dimensions>,
}

impl AccessorFormat {
    /// Three 32-bit floats, the format required for positions and normals.
    pub const VEC3_F32: Self = Self {
        component: Some(DataType::F32),
        dimensions: Some(Dimensions::Vec3),
    };

    pub(crate) fn of(accessor: &gltf::json::Accessor) -> Self {
        let component = match accessor.component_type {
            Checked::Valid(generic) => Some(generic.0),
            Checked::Invalid => None,
        };
        let dimensions = match accessor.type_ {
            Checked::Valid(dimensions) => Some(dimensions),
            Checked::Invalid => None,
        };
        Self {
            component,
            dimensions,
        }
    }

    /// Size of one tightly packed element in bytes.
    #[must_use]
    pub fn element_size(self) -> Option<usize> {
        Some(self.component?.size() * self.dimensions?.multiplicity())
    }
}

impl fmt::Display for AccessorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimensions = match self.dimensions {
            Some(Dimensions::Scalar) => "SCALAR",
            Some(Dimensions::Vec2) => "VEC2",
            Some(Dimensions::Vec3) => "VEC3",
            Some(Dimensions::Vec4) => "VEC4",
            Some(Dimensions::Mat2) => "MAT2",
            Some(Dimensions::Mat3) => "MAT3",
            Some(Dimensions::Mat4) => "MAT4",
            None => "unknown element type",
        };
        let component = match self.component {
            Some(DataType::I8) => "BYTE",
            Some(DataType::U8) => "UNSIGNED_BYTE",
            Some(DataType::I16) => "SHORT",
            Some(DataType::U16) => "UNSIGNED_SHORT",
            Some(DataType::U32) => "UNSIGNED_INT",
            Some(DataType::F32) => "FLOAT",
            None => "unknown component type",
        };
        write!(f, "{dimensions} of {component}")
    }
}
