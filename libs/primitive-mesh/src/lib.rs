//! # Primitive Mesh
//!
//! Watertight, outward-wound triangle meshes for basic solids.
//!
//! ## Architecture
//!
//! ```text
//! params → primitives::create_* (ring sampler + fans/bands) → Mesh
//! ```
//!
//! Generators are pure: they never touch the file system. Serialization is
//! left to a mesh writer that consumes [`Mesh::vertices`] and
//! [`Mesh::triangles`].
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::primitives::{create_cylinder, CylinderParams};
//!
//! let mesh = create_cylinder(&CylinderParams::default()).unwrap();
//! mesh.check_closed().unwrap();
//! mesh.check_outward().unwrap();
//! ```

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod shape;
mod topology;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, Triangle};
pub use shape::Shape;
