//! Container detection and buffer resolution.
//!
//! A `.glb` path is read as a binary container (JSON chunk plus an optional
//! BIN chunk); anything else is read as a JSON document whose buffers are
//! embedded `data:` URIs or files next to it. Parsing and buffer loading go
//! through `gltf` without its validation pass, so structural problems are
//! reported by the decoder as specific [`MeshError`]s.

use std::fs;
use std::path::Path;

use gltf::json;

use super::error::MeshError;

const BINARY_SUFFIX: &str = ".glb";
const BINARY_MAGIC: &[u8] = b"glTF";

/// How an asset's bytes are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Binary glTF (`.glb`): JSON and buffer data in one file.
    Binary,
    /// Text glTF: a JSON document with embedded or external buffers.
    Text,
}

impl ContainerKind {
    /// Pick the container kind from the path suffix (case-sensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(BINARY_SUFFIX) {
            Self::Binary
        } else {
            Self::Text
        }
    }
}

/// A parsed document with every buffer loaded into memory.
#[derive(Debug)]
pub(crate) struct Asset {
    pub(crate) document: gltf::Document,
    /// Buffer contents, each truncated to its declared `byteLength`.
    pub(crate) buffers: Vec<Vec<u8>>,
}

impl Asset {
    pub(crate) fn json(&self) -> &json::Root {
        self.document.as_json()
    }

    pub(crate) fn accessor(&self, index: usize) -> Result<&json::Accessor, MeshError> {
        self.json()
            .accessors
            .get(index)
            .ok_or(MeshError::InvalidReference {
                kind: "accessor",
                index,
            })
    }

    pub(crate) fn buffer_view(
        &self,
        index: usize,
    ) -> Result<&json::buffer::View, MeshError> {
        self.json()
            .buffer_views
            .get(index)
            .ok_or(MeshError::InvalidReference {
                kind: "buffer view",
                index,
            })
    }

    pub(crate) fn buffer(&self, index: usize) -> Result<&[u8], MeshError> {
        self.buffers
            .get(index)
            .map(Vec::as_slice)
            .ok_or(MeshError::InvalidReference {
                kind: "buffer",
                index,
            })
    }
}

/// Read and parse the asset at `path`, resolving external buffers relative
/// to its directory.
pub(crate) fn load(path: &Path) -> Result<Asset, MeshError> {
    let bytes = fs::read(path).map_err(|e| {
        MeshError::AssetParse(format!("failed to read {}: {e}", path.display()))
    })?;
    parse(&bytes, ContainerKind::from_path(path), path.parent())
}

/// Parse asset bytes already in memory.
pub(crate) fn parse(
    bytes: &[u8],
    kind: ContainerKind,
    base_dir: Option<&Path>,
) -> Result<Asset, MeshError> {
    match (kind, bytes.starts_with(BINARY_MAGIC)) {
        (ContainerKind::Binary, false) => {
            return Err(MeshError::AssetParse(
                "missing binary glTF header".to_owned(),
            ));
        }
        (ContainerKind::Text, true) => {
            return Err(MeshError::AssetParse(
                "binary glTF container where a JSON document was expected"
                    .to_owned(),
            ));
        }
        _ => {}
    }

    let gltf::Gltf { document, blob } =
        gltf::Gltf::from_slice_without_validation(bytes)
            .map_err(|e| MeshError::AssetParse(e.to_string()))?;
    let data = gltf::import_buffers(&document, base_dir, blob)
        .map_err(|e| MeshError::AssetParse(e.to_string()))?;

    // Loaded buffers are padded to four bytes and the BIN chunk may carry
    // more; only the declared length is addressable.
    let buffers = data
        .into_iter()
        .zip(&document.as_json().buffers)
        .map(|(gltf::buffer::Data(mut bytes), def)| {
            bytes.truncate(usize::try_from(def.byte_length.0).unwrap_or(usize::MAX));
            bytes
        })
        .collect();

    Ok(Asset { document, buffers })
}
