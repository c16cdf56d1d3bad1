//! Mesh writer seam and the STL implementation.

use std::io::Write;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{WriteError, WriteResult};
use crate::stl::{check_indices, encode_ascii, encode_binary, StlFormat, HEADER_SIZE, TRIANGLE_SIZE};

/// Serializes an indexed triangle list to a file.
///
/// Implementations must reject out-of-range indices and must not leave a
/// partially written file at `path` when they fail.
pub trait MeshWriter {
    /// Writes `triangles` over `vertices` to `path`.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range index or when `path` cannot be written.
    fn write(&self, path: &Path, vertices: &[DVec3], triangles: &[[u32; 3]]) -> WriteResult<()>;
}

/// Writes STL files in the configured format.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use glam::DVec3;
/// use stl_writer::{MeshWriter, StlWriter};
///
/// let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// StlWriter::ascii()
///     .write(Path::new("triangle.stl"), &vertices, &[[0, 1, 2]])
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StlWriter {
    pub format: StlFormat,
}

impl StlWriter {
    /// Creates a writer for the given format.
    pub fn new(format: StlFormat) -> Self {
        Self { format }
    }

    /// Creates a binary STL writer.
    pub fn binary() -> Self {
        Self::new(StlFormat::Binary)
    }

    /// Creates an ASCII STL writer.
    pub fn ascii() -> Self {
        Self::new(StlFormat::Ascii)
    }

    /// Encodes the mesh into memory. `name` is the ASCII solid name and is
    /// ignored for binary output.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::IndexOutOfRange`] before producing any bytes
    /// if a face refers to a missing vertex.
    pub fn encode(
        &self,
        name: &str,
        vertices: &[DVec3],
        triangles: &[[u32; 3]],
    ) -> WriteResult<Vec<u8>> {
        check_indices(vertices.len(), triangles)?;

        match self.format {
            StlFormat::Binary => {
                let mut bytes =
                    Vec::with_capacity(HEADER_SIZE + 4 + TRIANGLE_SIZE * triangles.len());
                encode_binary(&mut bytes, vertices, triangles)?;
                Ok(bytes)
            }
            StlFormat::Ascii => {
                let mut bytes = Vec::new();
                encode_ascii(&mut bytes, name, vertices, triangles)?;
                Ok(bytes)
            }
        }
    }
}

impl MeshWriter for StlWriter {
    fn write(&self, path: &Path, vertices: &[DVec3], triangles: &[[u32; 3]]) -> WriteResult<()> {
        let bytes = self.encode(&solid_name(path), vertices, triangles)?;
        write_atomic(path, &bytes)?;

        debug!(
            path = %path.display(),
            format = %self.format,
            triangles = triangles.len(),
            bytes = bytes.len(),
            "wrote STL"
        );
        Ok(())
    }
}

/// ASCII solid name: the file stem, or `mesh` when there is none.
fn solid_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "mesh".to_string())
}

/// Writes to a temporary file beside `path`, then renames it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> WriteResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| WriteError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
