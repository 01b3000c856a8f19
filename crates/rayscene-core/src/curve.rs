//! Parametric spiral
//!
//! Step `count` maps to the curve parameter `i = count / scale`. The point
//! winds around the up axis with radius `i` and angle `frequency * i`, and
//! its height is `base - sqrt(i)`, so the spiral widens as it sinks.

use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis the spiral descends along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// Height on y, winding in the xz plane
    Y,
    /// Height on z, winding in the xy plane
    #[default]
    Z,
}

impl UpAxis {
    /// Unit vector along the axis
    pub fn unit(self) -> DVec3 {
        match self {
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }

    /// Ones on the two winding axes, zero on the up axis
    pub fn plane(self) -> DVec3 {
        DVec3::ONE - self.unit()
    }

    /// Component of `v` along the axis
    pub fn height_of(self, v: DVec3) -> f64 {
        v.dot(self.unit())
    }

    /// Place radial coordinates `(a, b)` and a height in world space
    fn compose(self, a: f64, b: f64, height: f64) -> DVec3 {
        match self {
            Self::Y => DVec3::new(a, height, b),
            Self::Z => DVec3::new(a, b, height),
        }
    }
}

/// A sample of the curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Loop step that produced the point
    pub count: u32,
    /// Curve parameter
    pub i: f64,
    pub position: DVec3,
}

/// Spiral parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spiral {
    /// Steps per unit of `i`
    pub scale: f64,
    /// Angular frequency, radians per unit of `i`
    pub frequency: f64,
    /// Height at `i = 0`
    #[serde(default = "default_base")]
    pub base: f64,
    #[serde(default)]
    pub up: UpAxis,
}

fn default_base() -> f64 {
    1.0
}

impl Spiral {
    pub fn new(scale: f64, frequency: f64, up: UpAxis) -> Self {
        Self {
            scale,
            frequency,
            base: default_base(),
            up,
        }
    }

    /// Curve parameter for a step
    pub fn parameter(&self, count: u32) -> Result<f64> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Error::NumericDomain {
                op: "division",
                value: self.scale,
            });
        }
        Ok(f64::from(count) / self.scale)
    }

    /// Evaluate the spiral at a step
    pub fn point(&self, count: u32) -> Result<CurvePoint> {
        let i = self.parameter(count)?;
        if i < 0.0 {
            return Err(Error::NumericDomain {
                op: "sqrt",
                value: i,
            });
        }

        let angle = self.frequency * i;
        let position = self
            .up
            .compose(i * angle.cos(), i * angle.sin(), self.base - i.sqrt());
        if !position.is_finite() {
            return Err(Error::NumericDomain {
                op: "spiral",
                value: i,
            });
        }

        Ok(CurvePoint { count, i, position })
    }
}
