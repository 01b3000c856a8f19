//! Shader (material) declarations

use crate::value::Value;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A named shader declared in the palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shader {
    pub name: String,
    pub kind: ShaderKind,
}

/// Shading model understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShaderKind {
    Phong {
        diffuse_color: DVec3,
        specular_color: DVec3,
        exponent: f64,
    },
    Lambertian {
        diffuse_color: DVec3,
    },
}

impl Shader {
    pub fn new(name: impl Into<String>, kind: ShaderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Phong shader
    pub fn phong(
        name: impl Into<String>,
        diffuse_color: DVec3,
        specular_color: DVec3,
        exponent: f64,
    ) -> Self {
        Self::new(
            name,
            ShaderKind::Phong {
                diffuse_color,
                specular_color,
                exponent,
            },
        )
    }

    /// Lambertian (diffuse only) shader
    pub fn lambertian(name: impl Into<String>, diffuse_color: DVec3) -> Self {
        Self::new(name, ShaderKind::Lambertian { diffuse_color })
    }

    /// Leaf fields for this shader's model
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        self.kind.fields()
    }
}

impl ShaderKind {
    /// Value of the `type` attribute
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Phong { .. } => "Phong",
            Self::Lambertian { .. } => "Lambertian",
        }
    }

    pub fn diffuse_color(&self) -> DVec3 {
        match self {
            Self::Phong { diffuse_color, .. } | Self::Lambertian { diffuse_color } => {
                *diffuse_color
            }
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        match *self {
            Self::Phong {
                diffuse_color,
                specular_color,
                exponent,
            } => vec![
                ("diffuseColor", diffuse_color.into()),
                ("specularColor", specular_color.into()),
                ("exponent", exponent.into()),
            ],
            Self::Lambertian { diffuse_color } => vec![("diffuseColor", diffuse_color.into())],
        }
    }
}
