//! # STL Writer
//!
//! Serializes indexed triangle meshes to binary or ASCII STL.
//!
//! The writer only consumes a vertex list and a triangle list, so it has no
//! dependency on how meshes are generated. Every face index is checked
//! before any byte is produced. The file is then written through a
//! temporary file in the same directory and renamed into place, so a
//! failure never leaves a partial file behind.
//!
//! ```no_run
//! use std::path::Path;
//! use glam::DVec3;
//! use stl_writer::{MeshWriter, StlFormat, StlWriter};
//!
//! let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y];
//! let writer = StlWriter::new(StlFormat::Binary);
//! writer.write(Path::new("triangle.stl"), &vertices, &[[0, 1, 2]])?;
//! # Ok::<(), stl_writer::WriteError>(())
//! ```

pub mod error;
pub mod stl;
pub mod writer;

pub use error::{WriteError, WriteResult};
pub use stl::{facet_normal, StlFormat};
pub use writer::{MeshWriter, StlWriter};
