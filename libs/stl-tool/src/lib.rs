//! # STL Tool
//!
//! Generates cylinder, sphere, cone, and frustum meshes with
//! [`primitive_mesh`] and writes them through a [`stl_writer::MeshWriter`].
//!
//! ```text
//! Shape ──build──► Mesh ──diagnostics──► MeshWriter ──► file.stl
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use primitive_mesh::primitives::CylinderParams;
//! use stl_tool::create_cylinder_stl;
//! use stl_writer::StlWriter;
//!
//! let params = CylinderParams { radius: 0.053, height: 0.02, segments: 20 };
//! let mesh = create_cylinder_stl("cylinder.stl", &params, &StlWriter::binary())?;
//! assert_eq!(mesh.triangle_count(), 80);
//! # Ok::<(), stl_tool::ToolError>(())
//! ```
//!
//! Whole batches run from JSON with [`run_batch`]; the `stl-tool` binary
//! wraps that with a command line.

pub mod batch;
pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod generate;

pub use batch::{run_batch, BatchConfig, Job, JobReport};
pub use cli::Cli;
pub use error::{ToolError, ToolResult};
pub use generate::{
    create_cone_stl, create_cylinder_stl, create_frustum_stl, create_sphere_stl, create_stl,
};
