//! Shader source preprocessing.
//!
//! The tracer's WGSL is split across files joined with `#include`
//! directives; [`expand_includes`] flattens them into one source string
//! before it is handed to the GPU driver.

use std::path::{Path, PathBuf};

use crate::error::RefractionError;

/// Includes nested deeper than this are rejected.
pub const MAX_INCLUDE_DEPTH: usize = 8;

/// Read the shader at `path` and splice in every `#include` recursively.
///
/// Lines are trimmed. An `#include "file"` or `#include <file>` line is
/// replaced by the expanded contents of `file`, resolved relative to the
/// directory of the file containing the directive.
///
/// # Errors
///
/// [`RefractionError::ShaderInclude`] if a file cannot be read, a directive
/// is malformed, or includes nest deeper than [`MAX_INCLUDE_DEPTH`].
pub fn expand_includes(path: impl AsRef<Path>) -> Result<String, RefractionError> {
    let mut out = String::new();
    expand_into(path.as_ref(), 0, &mut out)?;
    Ok(out)
}

fn expand_into(
    path: &Path,
    depth: usize,
    out: &mut String,
) -> Result<(), RefractionError> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(include_error(
            path,
            format!("includes nested deeper than {MAX_INCLUDE_DEPTH}"),
        ));
    }

    let source = std::fs::read_to_string(path)
        .map_err(|e| include_error(path, e.to_string()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    for line in source.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("#include") {
            let target = include_target(rest.trim()).ok_or_else(|| {
                include_error(path, format!("malformed directive `{line}`"))
            })?;
            log::trace!("{} includes {target}", path.display());
            expand_into(&dir.join(target), depth + 1, out)?;
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    Ok(())
}

/// File name between `"..."` or `<...>`.
fn include_target(spec: &str) -> Option<&str> {
    let inner = spec
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| spec.strip_prefix('<').and_then(|s| s.strip_suffix('>')))?;
    (!inner.is_empty()).then_some(inner)
}

fn include_error(path: &Path, reason: String) -> RefractionError {
    RefractionError::ShaderInclude {
        path: PathBuf::from(path),
        reason,
    }
}
