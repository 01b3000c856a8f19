//! Surfaces: a primitive shape bound to a shader

use crate::Result;
use crate::palette::{ShaderPalette, ShaderRef};
use crate::value::Value;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive kinds supported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
    Cylinder,
    Cone,
}

impl ShapeKind {
    /// Value of the surface `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Box => "Box",
            Self::Cylinder => "Cylinder",
            Self::Cone => "Cone",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive geometry
///
/// Cylinders and cones are aligned with the renderer's z axis; `tip_z` is
/// the z coordinate of the cone's apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Sphere {
        center: DVec3,
        radius: f64,
    },
    Box {
        min_pt: DVec3,
        max_pt: DVec3,
    },
    Cylinder {
        center: DVec3,
        radius: f64,
        height: f64,
    },
    Cone {
        center: DVec3,
        radius: f64,
        height: f64,
        tip_z: f64,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Box { .. } => ShapeKind::Box,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Cone { .. } => ShapeKind::Cone,
        }
    }

    /// Shape-specific leaf fields
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        match *self {
            Self::Sphere { center, radius } => {
                vec![("center", center.into()), ("radius", radius.into())]
            }
            Self::Box { min_pt, max_pt } => {
                vec![("minPt", min_pt.into()), ("maxPt", max_pt.into())]
            }
            Self::Cylinder {
                center,
                radius,
                height,
            } => vec![
                ("center", center.into()),
                ("radius", radius.into()),
                ("height", height.into()),
            ],
            Self::Cone {
                center,
                radius,
                height,
                tip_z,
            } => vec![
                ("center", center.into()),
                ("radius", radius.into()),
                ("height", height.into()),
                ("tipz", tip_z.into()),
            ],
        }
    }
}

/// A shape bound to a declared shader
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub shader: ShaderRef,
    pub shape: Shape,
}

impl Surface {
    pub fn new(shader: ShaderRef, shape: Shape) -> Self {
        Self { shader, shape }
    }
}

/// A surface whose shader is still a name, as stored in scene descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub shader: String,
    pub shape: Shape,
}

impl SurfaceSpec {
    pub fn new(shader: impl Into<String>, shape: Shape) -> Self {
        Self {
            shader: shader.into(),
            shape,
        }
    }

    /// Bind the shader name against the palette
    pub fn resolve(&self, palette: &ShaderPalette) -> Result<Surface> {
        Ok(Surface::new(palette.resolve(&self.shader)?, self.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::scene::Shader;

    fn rendered(shape: &Shape) -> Vec<String> {
        shape
            .fields()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect()
    }

    #[test]
    fn test_shape_fields() {
        let sphere = Shape::Sphere {
            center: DVec3::new(0.0, 0.0, 2.5),
            radius: 2.5,
        };
        assert_eq!(sphere.kind(), ShapeKind::Sphere);
        assert_eq!(rendered(&sphere), ["center=0 0 2.5", "radius=2.5"]);

        let cube = Shape::Box {
            min_pt: DVec3::ZERO,
            max_pt: DVec3::splat(0.5),
        };
        assert_eq!(rendered(&cube), ["minPt=0 0 0", "maxPt=0.5 0.5 0.5"]);

        let cone = Shape::Cone {
            center: DVec3::new(1.0, 2.0, 0.6),
            radius: 0.4,
            height: 1.2,
            tip_z: 0.0,
        };
        assert_eq!(
            rendered(&cone),
            ["center=1 2 0.6", "radius=0.4", "height=1.2", "tipz=0"]
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ShapeKind::Box.to_string(), "Box");
        assert_eq!(ShapeKind::Cylinder.as_str(), "Cylinder");
        assert_eq!(ShapeKind::Cone.as_str(), "Cone");
    }

    #[test]
    fn test_spec_resolution() {
        let mut palette = ShaderPalette::new();
        palette
            .add(Shader::lambertian("blueL", DVec3::new(0.2, 0.3, 0.8)))
            .unwrap();

        let spec = SurfaceSpec::new(
            "blueL",
            Shape::Sphere {
                center: DVec3::ZERO,
                radius: 1.0,
            },
        );
        let surface = spec.resolve(&palette).unwrap();
        assert_eq!(surface.shader.name(), "blueL");

        let missing = SurfaceSpec::new("red", spec.shape);
        assert!(matches!(
            missing.resolve(&palette),
            Err(Error::UnknownShader(name)) if name == "red"
        ));
    }
}
