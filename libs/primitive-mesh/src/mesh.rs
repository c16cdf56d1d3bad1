//! # Mesh Data Structure
//!
//! Indexed triangle mesh: an ordered vertex list plus triangles that refer
//! to vertices by position. Winding order carries the outward direction.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// A triangle as three vertex indices, wound counter-clockwise when seen
/// from outside the solid.
pub type Triangle = [u32; 3];

/// A triangle mesh with vertices and indices.
///
/// Vertex indices are assigned in insertion order starting at 0. All
/// geometry is f64; narrowing to f32 only happens in the STL encoder.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.face_normal(0), Some(DVec3::Z));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<Triangle>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from existing vertex and triangle lists.
    ///
    /// No checks are made; call [`Mesh::validate`] before trusting the
    /// indices.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> Triangle {
        self.triangles[index]
    }

    /// Consumes the mesh, returning the `(vertices, triangles)` pair.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<Triangle>) {
        (self.vertices, self.triangles)
    }

    /// Computes the unit normal of a face by the right-hand rule:
    /// `normalize((v1 - v0) x (v2 - v0))`.
    ///
    /// Returns `None` for a zero-area face or an out-of-range face index.
    pub fn face_normal(&self, index: usize) -> Option<DVec3> {
        let [i0, i1, i2] = *self.triangles.get(index)?;
        let v0 = *self.vertices.get(i0 as usize)?;
        let v1 = *self.vertices.get(i1 as usize)?;
        let v2 = *self.vertices.get(i2 as usize)?;

        let normal = (v1 - v0).cross(v2 - v0);
        let len = normal.length();
        if len < DEGENERATE_AREA_EPSILON {
            return None;
        }
        Some(normal / len)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the triangles (divergence theorem).
    ///
    /// Positive when the faces of a closed mesh wind outward. Faces with an
    /// out-of-range index contribute nothing; run [`Mesh::validate`] first
    /// when the triangles come from outside.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .filter_map(|&[i0, i1, i2]| {
                let v0 = self.vertices.get(i0 as usize)?;
                let v1 = self.vertices.get(i1 as usize)?;
                let v2 = self.vertices.get(i2 as usize)?;
                Some(v0.dot(v1.cross(*v2)))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Validates the triangle indices.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTopology`] naming the first bad face.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();

        for (face, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} references vertex {index}, but the mesh has {vertex_count} vertices"
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "face {face} repeats a vertex: {tri:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    /// Tetrahedron with outward winding.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_face_normal_follows_winding() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 2, 1);
        assert_eq!(mesh.face_normal(0), Some(DVec3::Z));
        assert_eq!(mesh.face_normal(1), Some(DVec3::NEG_Z));
    }

    #[test]
    fn test_face_normal_degenerate() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.face_normal(0), None);
        assert_eq!(mesh.face_normal(7), None);
    }

    #[test]
    fn test_signed_volume_tetrahedron() {
        let mesh = tetrahedron();
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_volume_skips_missing_vertex() {
        let (vertices, mut triangles) = tetrahedron().into_parts();
        triangles.push([0, 1, 99]);
        let mesh = Mesh::from_parts(vertices, triangles);
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate().is_ok());
        assert!(tetrahedron().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("vertex 1"));
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 0, 1);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_into_parts_roundtrip() {
        let mesh = tetrahedron();
        let (vertices, triangles) = mesh.clone().into_parts();
        assert_eq!(vertices.len(), 4);
        assert_eq!(triangles.len(), 4);
        assert_eq!(Mesh::from_parts(vertices, triangles), mesh);
    }
}
