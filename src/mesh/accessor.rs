//! Typed accessor reader shared by every extraction path.
//!
//! Offsets are additive (`view.byteOffset + accessor.byteOffset`), the
//! stride is the view's `byteStride` or, when absent, the tightly packed
//! element size. Every read is bounds-checked against its buffer view, and
//! the view against its buffer, before any bytes are touched.

use gltf::accessor::{DataType, Dimensions};
use gltf::json::validation::USize64;

use super::container::Asset;
use super::error::MeshError;
use super::format::AccessorFormat;

/// Which role an accessor plays in the primitive. Selects the error
/// reported when the accessor's format is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attribute {
    Position,
    Normal,
    Indices,
}

impl Attribute {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Position => "POSITION",
            Self::Normal => "NORMAL",
            Self::Indices => "indices",
        }
    }

    fn unsupported(self, accessor: usize, found: AccessorFormat) -> MeshError {
        match self {
            Self::Position | Self::Normal => MeshError::UnsupportedFormat {
                attribute: self.name(),
                accessor,
                expected: AccessorFormat::VEC3_F32,
                found,
            },
            Self::Indices => {
                MeshError::UnsupportedIndexFormat { accessor, found }
            }
        }
    }
}

/// An element type the reader can decode out of raw little-endian bytes.
pub(crate) trait Element: Sized {
    /// Dimensions the accessor must declare.
    const DIMENSIONS: Dimensions;

    /// Whether elements of this type can be decoded from `component`.
    fn supports(component: DataType) -> bool;

    /// Decode one element. `bytes` is exactly one tightly packed element.
    fn decode(component: DataType, bytes: &[u8]) -> Self;
}

impl Element for [f32; 3] {
    const DIMENSIONS: Dimensions = Dimensions::Vec3;

    fn supports(component: DataType) -> bool {
        component == DataType::F32
    }

    fn decode(_component: DataType, bytes: &[u8]) -> Self {
        let bits: [u32; 3] = bytemuck::pod_read_unaligned(bytes);
        bits.map(|b| f32::from_bits(u32::from_le(b)))
    }
}

/// Indices of any supported width widen to `u32`.
impl Element for u32 {
    const DIMENSIONS: Dimensions = Dimensions::Scalar;

    fn supports(component: DataType) -> bool {
        matches!(component, DataType::U8 | DataType::U16 | DataType::U32)
    }

    fn decode(component: DataType, bytes: &[u8]) -> Self {
        match component {
            DataType::U8 => Self::from(bytes[0]),
            DataType::U16 => {
                Self::from(u16::from_le(bytemuck::pod_read_unaligned(bytes)))
            }
            _ => Self::from_le(bytemuck::pod_read_unaligned(bytes)),
        }
    }
}

/// An absent offset is zero; `None` if the value does not fit in memory.
fn byte_offset(value: Option<USize64>) -> Option<usize> {
    value.map_or(Some(0), |v| usize::try_from(v.0).ok())
}

pub(crate) struct AccessorReader<'a> {
    asset: &'a Asset,
}

impl<'a> AccessorReader<'a> {
    pub(crate) fn new(asset: &'a Asset) -> Self {
        Self { asset }
    }

    /// Validate accessor `index` against `E` and decode all of its elements.
    pub(crate) fn read<E: Element>(
        &self,
        attribute: Attribute,
        index: usize,
    ) -> Result<Vec<E>, MeshError> {
        let accessor = self.asset.accessor(index)?;
        let format = AccessorFormat::of(accessor);

        let (component, element_size) =
            match (format.component, format.element_size()) {
                (Some(component), Some(size))
                    if format.dimensions == Some(E::DIMENSIONS)
                        && E::supports(component) =>
                {
                    (component, size)
                }
                _ => return Err(attribute.unsupported(index, format)),
            };

        if accessor.sparse.is_some() {
            return Err(MeshError::UnsupportedAccessor {
                attribute: attribute.name(),
                accessor: index,
                reason: "sparse accessors are not supported",
            });
        }
        let view_index = accessor
            .buffer_view
            .ok_or(MeshError::UnsupportedAccessor {
                attribute: attribute.name(),
                accessor: index,
                reason: "accessor has no buffer view",
            })?
            .value();
        let view = self.asset.buffer_view(view_index)?;
        let buffer = self.asset.buffer(view.buffer.value())?;

        let range_error = |required: usize, available: usize| {
            MeshError::BufferRange {
                attribute: attribute.name(),
                accessor: index,
                required,
                available,
            }
        };

        let view_start = byte_offset(view.byte_offset)
            .ok_or_else(|| range_error(usize::MAX, buffer.len()))?;
        let view_end = usize::try_from(view.byte_length.0)
            .ok()
            .and_then(|length| view_start.checked_add(length))
            .ok_or_else(|| range_error(usize::MAX, buffer.len()))?;
        if view_end > buffer.len() {
            return Err(range_error(view_end, buffer.len()));
        }

        // A declared stride of 0 means tightly packed, same as absent.
        let stride = view
            .byte_stride
            .map(|stride| stride.0)
            .filter(|&stride| stride != 0)
            .unwrap_or(element_size);
        let count = usize::try_from(accessor.count.0)
            .map_err(|_| range_error(usize::MAX, view_end))?;

        let start = byte_offset(accessor.byte_offset)
            .and_then(|offset| view_start.checked_add(offset))
            .ok_or_else(|| range_error(usize::MAX, view_end))?;
        let end = match count.checked_sub(1) {
            None => start,
            Some(last) => last
                .checked_mul(stride)
                .and_then(|offset| offset.checked_add(start))
                .and_then(|offset| offset.checked_add(element_size))
                .ok_or_else(|| range_error(usize::MAX, view_end))?,
        };
        if end > view_end {
            return Err(range_error(end, view_end));
        }

        Ok((0..count)
            .map(|i| {
                let at = start + i * stride;
                E::decode(component, &buffer[at..at + element_size])
            })
            .collect())
    }
}
