//! STL (Stereolithography) encoding.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (never starts with "solid")
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Normals are recomputed from winding: `normalize((v1 - v0) x (v2 - v0))`,
//! or zero for a degenerate face.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{WriteError, WriteResult};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

const HEADER_TEXT: &[u8] = b"Binary STL written by stl-writer";

/// Output flavour of an STL file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    /// Compact little-endian binary (f32 coordinates).
    #[default]
    Binary,
    /// Human-readable text with full f64 precision.
    Ascii,
}

impl fmt::Display for StlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StlFormat::Binary => write!(f, "binary"),
            StlFormat::Ascii => write!(f, "ascii"),
        }
    }
}

impl FromStr for StlFormat {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(StlFormat::Binary),
            "ascii" => Ok(StlFormat::Ascii),
            _ => Err(WriteError::UnknownFormat { name: s.to_string() }),
        }
    }
}

/// Checks every face index against the vertex count.
pub fn check_indices(vertex_count: usize, triangles: &[[u32; 3]]) -> WriteResult<()> {
    for (face, tri) in triangles.iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(WriteError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Unit normal of a triangle by the right-hand rule, zero if degenerate.
pub fn facet_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

#[inline]
fn corners(vertices: &[DVec3], tri: &[u32; 3]) -> [DVec3; 3] {
    tri.map(|i| vertices[i as usize])
}

/// Encodes a mesh as binary STL.
///
/// Indices must already be checked with [`check_indices`].
pub(crate) fn encode_binary<W: Write>(
    mut writer: W,
    vertices: &[DVec3],
    triangles: &[[u32; 3]],
) -> WriteResult<()> {
    let face_count = u32::try_from(triangles.len()).map_err(|_| WriteError::TooManyFaces {
        count: triangles.len(),
    })?;

    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;
    writer.write_all(&face_count.to_le_bytes())?;

    for tri in triangles {
        let [v0, v1, v2] = corners(vertices, tri);
        for point in [facet_normal(v0, v1, v2), v0, v1, v2] {
            write_vec3_f32(&mut writer, point)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a vector as 3 f32s in little-endian.
fn write_vec3_f32<W: Write>(writer: &mut W, v: DVec3) -> WriteResult<()> {
    // STL binary stores f32
    let v = v.as_vec3();
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())?;
    Ok(())
}

/// Encodes a mesh as ASCII STL under the given solid name.
///
/// Indices must already be checked with [`check_indices`].
pub(crate) fn encode_ascii<W: Write>(
    mut writer: W,
    name: &str,
    vertices: &[DVec3],
    triangles: &[[u32; 3]],
) -> WriteResult<()> {
    writeln!(writer, "solid {name}")?;

    for tri in triangles {
        let [v0, v1, v2] = corners(vertices, tri);
        let n = facet_normal(v0, v1, v2);

        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}
