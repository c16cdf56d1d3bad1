//! # Shape Descriptor
//!
//! A serializable tagged union over the primitive parameter structs, so a
//! shape can be named in configuration and built through one entry point.

use serde::{Deserialize, Serialize};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::primitives::{
    create_cone, create_cylinder, create_frustum, create_sphere, ConeParams, CylinderParams,
    FrustumParams, SphereParams,
};

/// One of the supported primitives together with its parameters.
///
/// Serialized with an internal `"shape"` tag:
///
/// ```rust
/// use primitive_mesh::Shape;
///
/// let shape: Shape = serde_json::from_str(r#"{"shape": "cone", "height": 2.0}"#).unwrap();
/// assert_eq!(shape.name(), "cone");
/// let mesh = shape.build().unwrap();
/// assert_eq!(mesh.bounding_box().1.z, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Cylinder(CylinderParams),
    Sphere(SphereParams),
    Cone(ConeParams),
    Frustum(FrustumParams),
}

impl Shape {
    /// Lowercase shape name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cylinder(_) => "cylinder",
            Shape::Sphere(_) => "sphere",
            Shape::Cone(_) => "cone",
            Shape::Frustum(_) => "frustum",
        }
    }

    /// Generates the mesh for this shape.
    ///
    /// # Errors
    ///
    /// Propagates the generator's parameter validation errors.
    pub fn build(&self) -> MeshResult<Mesh> {
        match self {
            Shape::Cylinder(params) => create_cylinder(params),
            Shape::Sphere(params) => create_sphere(params),
            Shape::Cone(params) => create_cone(params),
            Shape::Frustum(params) => create_frustum(params),
        }
    }
}

impl From<CylinderParams> for Shape {
    fn from(params: CylinderParams) -> Self {
        Shape::Cylinder(params)
    }
}

impl From<SphereParams> for Shape {
    fn from(params: SphereParams) -> Self {
        Shape::Sphere(params)
    }
}

impl From<ConeParams> for Shape {
    fn from(params: ConeParams) -> Self {
        Shape::Cone(params)
    }
}

impl From<FrustumParams> for Shape {
    fn from(params: FrustumParams) -> Self {
        Shape::Frustum(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_build_dispatches() {
        let shape = Shape::from(SphereParams {
            radius: 1.0,
            vertical_segments: 3,
            horizontal_segments: 4,
        });
        assert_eq!(shape.build().unwrap().vertex_count(), 10);
    }

    #[test]
    fn test_shape_json_defaults() {
        let shape: Shape = serde_json::from_str(r#"{"shape": "frustum"}"#).unwrap();
        assert_eq!(shape, Shape::Frustum(FrustumParams::default()));
    }

    #[test]
    fn test_shape_json_fields() {
        let shape: Shape = serde_json::from_str(
            r#"{"shape": "sphere", "radius": 1, "vertical_segments": 8, "horizontal_segments": 6}"#,
        )
        .unwrap();
        assert_eq!(
            shape,
            Shape::Sphere(SphereParams {
                radius: 1.0,
                vertical_segments: 8,
                horizontal_segments: 6,
            })
        );
    }

    #[test]
    fn test_shape_json_tag_round_trip() {
        let shape = Shape::from(CylinderParams::default());
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["shape"], "cylinder");
        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let result: Result<Shape, _> = serde_json::from_str(r#"{"shape": "torus"}"#);
        assert!(result.is_err());
    }
}
