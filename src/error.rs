//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

use crate::mesh::MeshError;

/// Errors produced by the refraction crate.
#[derive(Debug)]
pub enum RefractionError {
    /// Failed to decode a glTF asset.
    Mesh(MeshError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Shader include expansion failure.
    ShaderInclude {
        /// File being expanded when the failure occurred.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
    /// The sphere scene already holds its maximum number of spheres.
    SceneFull {
        /// Maximum sphere count the scene can hold.
        capacity: usize,
    },
}

impl fmt::Display for RefractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ShaderInclude { path, reason } => {
                write!(f, "shader include error in {}: {reason}", path.display())
            }
            Self::SceneFull { capacity } => {
                write!(f, "sphere scene is full ({capacity} spheres)")
            }
        }
    }
}

impl std::error::Error for RefractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mesh(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MeshError> for RefractionError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}

impl From<std::io::Error> for RefractionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
