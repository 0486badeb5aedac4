use std::path::Path;

use gltf::json::validation::Checked;
use gltf::mesh::Semantic;

use super::accessor::{AccessorReader, Attribute};
use super::container::{self, Asset, ContainerKind};
use super::error::MeshError;
use super::format::Topology;
use super::Mesh;

/// Decode the first mesh's first primitive of the glTF asset at `path`.
///
/// A path ending in `.glb` is read as a binary container; anything else is
/// read as a text document whose buffers are embedded `data:` URIs or
/// files resolved relative to the document's directory. Only triangle lists with a `FLOAT`/`VEC3`
/// `POSITION` attribute are accepted; `NORMAL` and indices are optional.
/// Further meshes and primitives are ignored.
///
/// # Errors
///
/// Returns a [`MeshError`] describing the first problem found. Structural
/// checks run in order: no mesh, no primitive, topology, missing position.
pub fn decode(path: impl AsRef<Path>) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let asset = container::load(path)?;
    let mesh = extract_first_primitive(&asset)?;
    log::debug!(
        "decoded {}: {} vertices, {} indices, normals: {}",
        path.display(),
        mesh.vertex_count(),
        mesh.indices.len(),
        mesh.has_normals()
    );
    Ok(mesh)
}

/// Decode an asset already in memory.
///
/// `base_dir` resolves external buffer files of text documents; pass `None`
/// for self-contained assets (binary containers, embedded `data:` URIs).
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_slice(
    bytes: &[u8],
    kind: ContainerKind,
    base_dir: Option<&Path>,
) -> Result<Mesh, MeshError> {
    let asset = container::parse(bytes, kind, base_dir)?;
    extract_first_primitive(&asset)
}

fn extract_first_primitive(asset: &Asset) -> Result<Mesh, MeshError> {
    let document = asset.json();

    let mesh = document.meshes.first().ok_or(MeshError::NoMesh)?;
    if document.meshes.len() > 1 {
        log::warn!(
            "glTF has {} meshes, only the first is loaded",
            document.meshes.len()
        );
    }

    let primitive = mesh
        .primitives
        .first()
        .ok_or(MeshError::NoPrimitive { mesh: 0 })?;
    if mesh.primitives.len() > 1 {
        log::warn!(
            "mesh 0 has {} primitives, only the first is loaded",
            mesh.primitives.len()
        );
    }

    let topology = Topology::from_checked(primitive.mode);
    if topology != Topology::TRIANGLES {
        return Err(MeshError::UnsupportedTopology { topology });
    }

    let position_accessor = primitive
        .attributes
        .get(&Checked::Valid(Semantic::Positions))
        .ok_or(MeshError::MissingPosition)?
        .value();

    let reader = AccessorReader::new(asset);

    let positions: Vec<[f32; 3]> =
        reader.read(Attribute::Position, position_accessor)?;
    if positions.is_empty() {
        return Err(MeshError::EmptyPositions {
            accessor: position_accessor,
        });
    }

    let normals: Vec<[f32; 3]> =
        match primitive.attributes.get(&Checked::Valid(Semantic::Normals)) {
            Some(accessor) => reader.read(Attribute::Normal, accessor.value())?,
            None => Vec::new(),
        };
    if !normals.is_empty() && normals.len() != positions.len() {
        return Err(MeshError::AttributeCountMismatch {
            attribute: Attribute::Normal.name(),
            expected: positions.len(),
            found: normals.len(),
        });
    }

    let indices: Vec<u32> = match primitive.indices {
        Some(accessor) => reader.read(Attribute::Indices, accessor.value())?,
        None => Vec::new(),
    };
    validate_indices(&indices, positions.len())?;

    Ok(Mesh {
        positions,
        normals,
        indices,
    })
}

fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IncompleteTriangle {
            index_count: indices.len(),
        });
    }
    match indices
        .iter()
        .position(|&value| value as usize >= vertex_count)
    {
        Some(position) => Err(MeshError::IndexOutOfRange {
            position,
            value: indices[position],
            vertex_count,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gltf::mesh::Mode;

    use super::*;
    use crate::mesh::fixtures::{
        glb_bytes, scratch_dir, AssetBuilder, FLOAT, UNSIGNED_BYTE,
        UNSIGNED_INT, UNSIGNED_SHORT,
    };

    const QUAD: [[f32; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];
    const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

    fn quad(index_type: u32) -> AssetBuilder {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD);
        let indices = builder.push_indices(&QUAD_INDICES, index_type);
        builder.attribute("POSITION", positions).indices(indices)
    }

    fn decode_glb(builder: &AssetBuilder) -> Result<Mesh, MeshError> {
        decode_slice(&builder.to_glb(), ContainerKind::Binary, None)
    }

    #[test]
    fn quad_with_u16_indices() {
        let mesh = decode_glb(&quad(UNSIGNED_SHORT)).unwrap();
        assert_eq!(mesh.positions, QUAD.to_vec());
        assert!(mesh.normals.is_empty());
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn index_widths_decode_to_identical_values() {
        let decoded: Vec<Vec<u32>> = [UNSIGNED_BYTE, UNSIGNED_SHORT, UNSIGNED_INT]
            .into_iter()
            .map(|ty| decode_glb(&quad(ty)).unwrap().indices)
            .collect();
        assert_eq!(decoded[0], QUAD_INDICES.to_vec());
        assert_eq!(decoded[0], decoded[1]);
        assert_eq!(decoded[1], decoded[2]);
    }

    #[test]
    fn text_document_with_external_buffer() {
        let dir = scratch_dir("decode-text");
        let path = quad(UNSIGNED_SHORT).write_gltf(&dir, "quad");

        let mesh = decode(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, QUAD_INDICES.to_vec());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn binary_file_on_disk() {
        let dir = scratch_dir("decode-glb");
        let path = dir.join("quad.glb");
        fs::write(&path, quad(UNSIGNED_INT).to_glb()).unwrap();

        let mesh = decode(&path).unwrap();
        assert_eq!(mesh.positions.len(), 4);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_external_buffer_is_a_parse_error() {
        let dir = scratch_dir("decode-missing-bin");
        let path = quad(UNSIGNED_SHORT).write_gltf(&dir, "quad");
        fs::remove_file(dir.join("quad.bin")).unwrap();

        let err = decode(&path).unwrap_err();
        assert!(matches!(err, MeshError::AssetParse(_)), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn normals_are_decoded_when_present() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD[..3]);
        let normals = builder.push_vec3(&[[0.0, 0.0, 1.0]; 3]);
        let builder = builder
            .attribute("POSITION", positions)
            .attribute("NORMAL", normals);

        let mesh = decode_glb(&builder).unwrap();
        assert_eq!(mesh.normals, vec![[0.0, 0.0, 1.0]; 3]);
        assert!(mesh.indices.is_empty());
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn no_mesh() {
        let doc = serde_json::json!({ "asset": { "version": "2.0" } });
        let err = decode_slice(&glb_bytes(&doc, &[]), ContainerKind::Binary, None)
            .unwrap_err();
        assert_eq!(err, MeshError::NoMesh);
    }

    #[test]
    fn no_primitive() {
        let doc = serde_json::json!({
            "asset": { "version": "2.0" },
            "meshes": [{ "primitives": [] }],
        });
        let err = decode_slice(&glb_bytes(&doc, &[]), ContainerKind::Binary, None)
            .unwrap_err();
        assert_eq!(err, MeshError::NoPrimitive { mesh: 0 });
    }

    #[test]
    fn non_triangle_list_modes_are_rejected() {
        for (mode, topology) in
            [(5, Mode::TriangleStrip), (6, Mode::TriangleFan), (1, Mode::Lines)]
        {
            let topology = Topology(Some(topology));
            let err = decode_glb(&quad(UNSIGNED_SHORT).mode(mode)).unwrap_err();
            assert_eq!(err, MeshError::UnsupportedTopology { topology });
        }
    }

    #[test]
    fn topology_is_checked_before_position() {
        let err = decode_glb(&AssetBuilder::new().mode(1)).unwrap_err();
        assert_eq!(
            err,
            MeshError::UnsupportedTopology {
                topology: Topology(Some(Mode::Lines))
            }
        );
    }

    #[test]
    fn undefined_mode_is_an_unsupported_topology() {
        let err = decode_glb(&quad(UNSIGNED_SHORT).mode(42)).unwrap_err();
        assert_eq!(err, MeshError::UnsupportedTopology { topology: Topology(None) });
    }

    #[test]
    fn text_document_with_embedded_buffer() {
        // (0,0,0), (1,0,0), (0,1,0) as little-endian f32
        let doc = serde_json::json!({
            "asset": { "version": "2.0" },
            "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
            "accessors": [{
                "bufferView": 0,
                "componentType": FLOAT,
                "type": "VEC3",
                "count": 3,
            }],
            "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
            "buffers": [{
                "byteLength": 36,
                "uri": "data:application/octet-stream;base64,\
                        AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA",
            }],
        });
        let bytes = serde_json::to_vec(&doc).unwrap();

        let mesh = decode_slice(&bytes, ContainerKind::Text, None).unwrap();
        assert_eq!(
            mesh.positions,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert!(!mesh.has_normals());
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn missing_position() {
        let mut builder = AssetBuilder::new();
        let normals = builder.push_vec3(&[[0.0, 1.0, 0.0]; 3]);
        let err = decode_glb(&builder.attribute("NORMAL", normals)).unwrap_err();
        assert_eq!(err, MeshError::MissingPosition);
    }

    #[test]
    fn integer_positions_are_unsupported() {
        let mut builder = AssetBuilder::new();
        let view = builder.push_view(&[0u8; 24], None);
        let accessor = builder.push_accessor(view, 0, UNSIGNED_SHORT, "VEC3", 4);
        let err =
            decode_glb(&builder.attribute("POSITION", accessor)).unwrap_err();
        assert!(
            matches!(
                err,
                MeshError::UnsupportedFormat {
                    attribute: "POSITION",
                    ..
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn vec2_normals_are_unsupported() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD);
        let view = builder.push_view(&[0u8; 32], None);
        let normals = builder.push_accessor(view, 0, FLOAT, "VEC2", 4);
        let builder = builder
            .attribute("POSITION", positions)
            .attribute("NORMAL", normals);

        let err = decode_glb(&builder).unwrap_err();
        assert!(
            matches!(
                err,
                MeshError::UnsupportedFormat {
                    attribute: "NORMAL",
                    ..
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn index_beyond_vertex_count_is_rejected() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD);
        let indices = builder.push_indices(&[0, 1, 4], UNSIGNED_SHORT);
        let builder = builder.attribute("POSITION", positions).indices(indices);

        let err = decode_glb(&builder).unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                position: 2,
                value: 4,
                vertex_count: 4
            }
        );
    }

    #[test]
    fn partial_triangle_is_rejected() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD);
        let indices = builder.push_indices(&[0, 1, 2, 3], UNSIGNED_SHORT);
        let builder = builder.attribute("POSITION", positions).indices(indices);

        let err = decode_glb(&builder).unwrap_err();
        assert_eq!(err, MeshError::IncompleteTriangle { index_count: 4 });
    }

    #[test]
    fn normal_count_must_match_positions() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&QUAD);
        let normals = builder.push_vec3(&[[0.0, 0.0, 1.0]; 3]);
        let builder = builder
            .attribute("POSITION", positions)
            .attribute("NORMAL", normals);

        let err = decode_glb(&builder).unwrap_err();
        assert_eq!(
            err,
            MeshError::AttributeCountMismatch {
                attribute: "NORMAL",
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn empty_positions_are_rejected() {
        let mut builder = AssetBuilder::new();
        let positions = builder.push_vec3(&[]);
        let _normals = builder.push_vec3(&[[0.0, 0.0, 1.0]]);
        let err =
            decode_glb(&builder.attribute("POSITION", positions)).unwrap_err();
        assert_eq!(err, MeshError::EmptyPositions { accessor: positions });
    }

    #[test]
    fn successful_decodes_satisfy_mesh_invariants() {
        for ty in [UNSIGNED_BYTE, UNSIGNED_SHORT, UNSIGNED_INT] {
            let mesh = decode_glb(&quad(ty)).unwrap();
            assert!(!mesh.positions.is_empty());
            assert_eq!(mesh.indices.len() % 3, 0);
            assert!(mesh
                .indices
                .iter()
                .all(|&i| (i as usize) < mesh.positions.len()));
        }
    }
}
