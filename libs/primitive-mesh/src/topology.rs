//! # Topology Checks
//!
//! Closure (watertightness) and orientation checks for indexed meshes.
//!
//! A mesh is closed when every directed edge `a -> b` of one triangle is
//! matched by exactly one `b -> a` in another, and no directed edge occurs
//! twice. That implies every undirected edge borders exactly two faces with
//! opposite winding.

use std::collections::HashMap;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

impl Mesh {
    /// Counts how often each directed edge occurs across all triangles.
    fn directed_edges(&self) -> HashMap<(u32, u32), u32> {
        let mut edges = HashMap::with_capacity(self.triangle_count() * 3);
        for &[a, b, c] in self.triangles() {
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }
        edges
    }

    /// Checks that the mesh is watertight with consistent winding.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NotClosed`] for the first offending edge, in
    /// face order.
    pub fn check_closed(&self) -> MeshResult<()> {
        let edges = self.directed_edges();

        for (face, &[a, b, c]) in self.triangles().iter().enumerate() {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                let forward = edges.get(&(from, to)).copied().unwrap_or(0);
                if forward != 1 {
                    return Err(MeshError::not_closed(format!(
                        "edge ({from}, {to}) of face {face} is wound the same way {forward} times"
                    )));
                }
                if !edges.contains_key(&(to, from)) {
                    return Err(MeshError::not_closed(format!(
                        "edge ({from}, {to}) of face {face} has no opposite face"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Checks that a closed mesh's faces point outward.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTopology`] if a face references a missing
    /// vertex, and [`MeshError::InwardFacing`] if the signed volume is not
    /// positive.
    pub fn check_outward(&self) -> MeshResult<()> {
        self.validate()?;
        let volume = self.signed_volume();
        if volume > 0.0 {
            Ok(())
        } else {
            Err(MeshError::InwardFacing { volume })
        }
    }
}
