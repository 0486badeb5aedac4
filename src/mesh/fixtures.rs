//! Builds small glTF assets for tests, either as in-memory `.glb` bytes or
//! as a `.gltf` + `.bin` pair on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

const GLB_MAGIC: u32 = 0x4654_6C67;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

pub(crate) const FLOAT: u32 = 5126;
pub(crate) const UNSIGNED_BYTE: u32 = 5121;
pub(crate) const UNSIGNED_SHORT: u32 = 5123;
pub(crate) const UNSIGNED_INT: u32 = 5125;

#[derive(Debug, Default)]
pub(crate) struct AssetBuilder {
    bin: Vec<u8>,
    views: Vec<Value>,
    accessors: Vec<Value>,
    attributes: serde_json::Map<String, Value>,
    indices: Option<usize>,
    mode: Option<u32>,
}

impl AssetBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `bytes` as a new buffer view, 4-byte aligned.
    pub(crate) fn push_view(&mut self, bytes: &[u8], stride: Option<usize>) -> usize {
        while self.bin.len() % 4 != 0 {
            self.bin.push(0);
        }
        let mut view = json!({
            "buffer": 0,
            "byteOffset": self.bin.len(),
            "byteLength": bytes.len(),
        });
        if let Some(stride) = stride {
            view["byteStride"] = json!(stride);
        }
        self.bin.extend_from_slice(bytes);
        self.views.push(view);
        self.views.len() - 1
    }

    /// Add a view over an arbitrary range without appending any bytes.
    pub(crate) fn push_view_range(&mut self, byte_offset: usize, byte_length: usize) -> usize {
        self.views.push(json!({
            "buffer": 0,
            "byteOffset": byte_offset,
            "byteLength": byte_length,
        }));
        self.views.len() - 1
    }

    pub(crate) fn push_accessor(
        &mut self,
        view: usize,
        byte_offset: usize,
        component_type: u32,
        element_type: &str,
        count: usize,
    ) -> usize {
        self.accessors.push(json!({
            "bufferView": view,
            "byteOffset": byte_offset,
            "componentType": component_type,
            "type": element_type,
            "count": count,
        }));
        self.accessors.len() - 1
    }

    pub(crate) fn push_vec3(&mut self, data: &[[f32; 3]]) -> usize {
        let bytes: Vec<u8> = data
            .iter()
            .flatten()
            .flat_map(|c| c.to_le_bytes())
            .collect();
        let view = self.push_view(&bytes, None);
        self.push_accessor(view, 0, FLOAT, "VEC3", data.len())
    }

    /// Append `indices` narrowed to `component_type`.
    pub(crate) fn push_indices(&mut self, indices: &[u32], component_type: u32) -> usize {
        let bytes: Vec<u8> = match component_type {
            UNSIGNED_BYTE => indices.iter().map(|&i| i as u8).collect(),
            UNSIGNED_SHORT => indices
                .iter()
                .flat_map(|&i| (i as u16).to_le_bytes())
                .collect(),
            _ => indices.iter().flat_map(|i| i.to_le_bytes()).collect(),
        };
        let view = self.push_view(&bytes, None);
        self.push_accessor(view, 0, component_type, "SCALAR", indices.len())
    }

    pub(crate) fn attribute(mut self, name: &str, accessor: usize) -> Self {
        let _ = self.attributes.insert(name.into(), json!(accessor));
        self
    }

    pub(crate) fn indices(mut self, accessor: usize) -> Self {
        self.indices = Some(accessor);
        self
    }

    pub(crate) fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The document for this asset. With `buffer_uri` the buffer points at
    /// an external file, otherwise at the GLB binary chunk.
    pub(crate) fn json(&self, buffer_uri: Option<&str>) -> Value {
        let mut primitive = json!({ "attributes": self.attributes });
        if let Some(indices) = self.indices {
            primitive["indices"] = json!(indices);
        }
        if let Some(mode) = self.mode {
            primitive["mode"] = json!(mode);
        }
        let buffers = if self.bin.is_empty() {
            json!([])
        } else {
            let mut buffer = json!({ "byteLength": self.bin.len() });
            if let Some(uri) = buffer_uri {
                buffer["uri"] = json!(uri);
            }
            json!([buffer])
        };
        json!({
            "asset": { "version": "2.0" },
            "meshes": [{ "primitives": [primitive] }],
            "accessors": self.accessors,
            "bufferViews": self.views,
            "buffers": buffers,
        })
    }

    pub(crate) fn to_glb(&self) -> Vec<u8> {
        glb_bytes(&self.json(None), &self.bin)
    }

    /// Write `<stem>.gltf` and `<stem>.bin` into `dir`, returning the
    /// document path.
    pub(crate) fn write_gltf(&self, dir: &Path, stem: &str) -> PathBuf {
        let bin_name = format!("{stem}.bin");
        let doc = self.json(Some(&bin_name));
        fs::write(dir.join(&bin_name), &self.bin).unwrap();
        let path = dir.join(format!("{stem}.gltf"));
        fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
        path
    }
}

/// Assemble a binary container from a document and BIN chunk payload.
pub(crate) fn glb_bytes(doc: &Value, bin: &[u8]) -> Vec<u8> {
    let mut json = serde_json::to_vec(doc).unwrap();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.to_vec();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let mut total = 12 + 8 + json.len();
    if !bin.is_empty() {
        total += 8 + bin.len();
    }

    let mut out = Vec::with_capacity(total);
    for word in [GLB_MAGIC, 2, total as u32, json.len() as u32, CHUNK_JSON] {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out.extend_from_slice(&json);
    if !bin.is_empty() {
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        out.extend_from_slice(&bin);
    }
    out
}

/// A fresh per-test scratch directory under the system temp dir.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("refraction-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}
