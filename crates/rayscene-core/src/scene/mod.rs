//! Scene data model
//!
//! Plain data for everything a scene file contains. Each type knows its
//! leaf fields (`fields()`) in the order the renderer's parser expects them;
//! [`SceneBuilder`](crate::builder::SceneBuilder) decides where they go.

mod shader;
mod surface;

pub use shader::{Shader, ShaderKind};
pub use surface::{Shape, ShapeKind, Surface, SurfaceSpec};

use crate::value::Value;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Output resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The single `image` leaf, e.g. `800 600`
    pub fn fields(&self) -> [(&'static str, Value); 1] {
        [(
            "image",
            Value::tuple([f64::from(self.width), f64::from(self.height)]),
        )]
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Pinhole camera with an explicit projection plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub view_point: DVec3,
    pub view_dir: DVec3,
    pub proj_normal: DVec3,
    pub view_up: DVec3,
    pub proj_distance: f64,
    pub view_width: f64,
    pub view_height: f64,
}

impl Camera {
    /// The seven camera leaves
    pub fn fields(&self) -> [(&'static str, Value); 7] {
        [
            ("viewPoint", self.view_point.into()),
            ("viewDir", self.view_dir.into()),
            ("projNormal", self.proj_normal.into()),
            ("viewUp", self.view_up.into()),
            ("projDistance", self.proj_distance.into()),
            ("viewWidth", self.view_width.into()),
            ("viewHeight", self.view_height.into()),
        ]
    }
}

/// Point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: DVec3,
    /// RGB intensity
    pub intensity: DVec3,
}

impl Light {
    pub fn new(position: DVec3, intensity: DVec3) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn fields(&self) -> [(&'static str, Value); 2] {
        [
            ("position", self.position.into()),
            ("intensity", self.intensity.into()),
        ]
    }
}

/// A batch of lights placed by an affine recurrence
///
/// Light `k` sits at `origin + step * k`; all share one intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRow {
    pub count: u32,
    pub origin: DVec3,
    pub step: DVec3,
    pub intensity: DVec3,
}

impl LightRow {
    /// Position of light `k`
    pub fn position(&self, k: u32) -> DVec3 {
        self.origin + self.step * f64::from(k)
    }

    /// All lights of the row, in order
    pub fn lights(&self) -> impl Iterator<Item = Light> + '_ {
        (0..self.count).map(|k| Light::new(self.position(k), self.intensity))
    }
}
