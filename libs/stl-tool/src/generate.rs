//! # Generate and Write
//!
//! One call per shape that builds the mesh, logs diagnostics, writes the
//! file, and hands the mesh back so callers can inspect the geometry
//! without reading the file again.

use std::path::Path;

use primitive_mesh::primitives::{ConeParams, CylinderParams, FrustumParams, SphereParams};
use primitive_mesh::{Mesh, Shape};
use stl_writer::MeshWriter;
use tracing::info;

use crate::diagnostics;
use crate::error::ToolResult;

/// Builds `shape`, writes it to `path` with `writer`, and returns the mesh.
///
/// Nothing is written when generation fails.
///
/// # Errors
///
/// Returns [`ToolError::Mesh`](crate::ToolError::Mesh) for rejected
/// parameters and [`ToolError::Write`](crate::ToolError::Write) when the
/// file cannot be written.
///
/// # Example
///
/// ```no_run
/// use primitive_mesh::Shape;
/// use primitive_mesh::primitives::ConeParams;
/// use stl_tool::create_stl;
/// use stl_writer::StlWriter;
///
/// let shape = Shape::from(ConeParams::default());
/// let mesh = create_stl("cone.stl", &shape, &StlWriter::binary())?;
/// assert_eq!(mesh.triangle_count(), 32);
/// # Ok::<(), stl_tool::ToolError>(())
/// ```
pub fn create_stl<W>(path: impl AsRef<Path>, shape: &Shape, writer: &W) -> ToolResult<Mesh>
where
    W: MeshWriter + ?Sized,
{
    let path = path.as_ref();
    let mesh = shape.build()?;
    diagnostics::report(shape, &mesh);

    writer.write(path, mesh.vertices(), mesh.triangles())?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.triangle_count(),
        "saved {} STL",
        shape.name()
    );
    Ok(mesh)
}

/// Writes a capped cylinder.
///
/// # Errors
///
/// See [`create_stl`].
pub fn create_cylinder_stl<W>(
    path: impl AsRef<Path>,
    params: &CylinderParams,
    writer: &W,
) -> ToolResult<Mesh>
where
    W: MeshWriter + ?Sized,
{
    create_stl(path, &Shape::Cylinder(params.clone()), writer)
}

/// Writes a UV-sphere.
///
/// # Errors
///
/// See [`create_stl`].
pub fn create_sphere_stl<W>(
    path: impl AsRef<Path>,
    params: &SphereParams,
    writer: &W,
) -> ToolResult<Mesh>
where
    W: MeshWriter + ?Sized,
{
    create_stl(path, &Shape::Sphere(params.clone()), writer)
}

/// Writes a capped cone.
///
/// # Errors
///
/// See [`create_stl`].
pub fn create_cone_stl<W>(
    path: impl AsRef<Path>,
    params: &ConeParams,
    writer: &W,
) -> ToolResult<Mesh>
where
    W: MeshWriter + ?Sized,
{
    create_stl(path, &Shape::Cone(params.clone()), writer)
}

/// Writes a capped frustum.
///
/// # Errors
///
/// See [`create_stl`].
pub fn create_frustum_stl<W>(
    path: impl AsRef<Path>,
    params: &FrustumParams,
    writer: &W,
) -> ToolResult<Mesh>
where
    W: MeshWriter + ?Sized,
{
    create_stl(path, &Shape::Frustum(params.clone()), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use glam::DVec3;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use stl_writer::{StlWriter, WriteResult};

    /// Records what it was asked to write instead of touching the disk.
    #[derive(Default)]
    struct RecordingWriter {
        calls: RefCell<Vec<(PathBuf, usize, usize)>>,
    }

    impl MeshWriter for RecordingWriter {
        fn write(
            &self,
            path: &Path,
            vertices: &[DVec3],
            triangles: &[[u32; 3]],
        ) -> WriteResult<()> {
            self.calls
                .borrow_mut()
                .push((path.to_path_buf(), vertices.len(), triangles.len()));
            Ok(())
        }
    }

    #[test]
    fn test_writer_receives_mesh() {
        let writer = RecordingWriter::default();
        let mesh = create_cone_stl(
            "cone.stl",
            &ConeParams {
                radius: 1.0,
                height: 1.0,
                segments: 3,
            },
            &writer,
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(
            writer.calls.borrow().as_slice(),
            &[(PathBuf::from("cone.stl"), 5, 6)]
        );
    }

    #[test]
    fn test_invalid_params_skip_writer() {
        let writer = RecordingWriter::default();
        let result = create_sphere_stl(
            "sphere.stl",
            &SphereParams {
                radius: 0.0,
                ..Default::default()
            },
            &writer,
        );

        assert!(matches!(result, Err(ToolError::Mesh(_))));
        assert!(writer.calls.borrow().is_empty());
    }

    #[test]
    fn test_cylinder_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cylinder.stl");
        let params = CylinderParams {
            radius: 0.053,
            height: 0.02,
            segments: 20,
        };

        let mesh = create_cylinder_stl(&path, &params, &StlWriter::binary()).unwrap();

        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.triangle_count(), 80);
        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, 84 + 50 * 80);
    }

    #[test]
    fn test_frustum_ascii_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frustum_example.stl");
        let params = FrustumParams {
            bottom_radius: 0.5,
            top_radius: 0.2,
            height: 1.0,
            segments: 12,
        };

        let mesh = create_frustum_stl(&path, &params, &StlWriter::ascii()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("solid frustum_example"));
        assert_eq!(text.matches("endfacet").count(), mesh.triangle_count());
    }

    #[test]
    fn test_unwritable_path_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cone.stl");

        let result = create_cone_stl(&path, &ConeParams::default(), &StlWriter::binary());
        assert!(matches!(result, Err(ToolError::Write(_))));
    }
}
