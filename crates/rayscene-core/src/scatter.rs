//! Scattered decorative layer
//!
//! Spheres dropped uniformly at random inside a box, all sharing one shader
//! (the "stars" above the spiral). Sampling is driven by a seeded
//! [`Sampler`], so a layer is reproducible for a given seed.

use crate::palette::{ShaderPalette, ShaderRef};
use crate::scene::{Shape, Surface};
use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Seeded uniform sampler (SplitMix64)
#[derive(Debug, Clone)]
pub struct Sampler {
    state: u64,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64 increment and mixing constants
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Randomly placed spheres sharing one shader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterLayer {
    pub count: u32,
    /// Lower corner of the sampling box
    pub min: DVec3,
    /// Upper corner of the sampling box
    pub max: DVec3,
    /// Radius range `[lo, hi)`
    pub radius: [f64; 2],
    pub shader: String,
}

impl ScatterLayer {
    /// Check the ranges and resolve the shader
    pub fn bind(&self, palette: &ShaderPalette) -> Result<BoundScatter<'_>> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min.cmpgt(self.max).any() {
            return Err(Error::InvalidParameter(format!(
                "scatter box {} .. {} is empty or not finite",
                self.min, self.max
            )));
        }
        let [lo, hi] = self.radius;
        if !(lo.is_finite() && hi.is_finite()) || lo > hi || lo < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scatter radius range {} .. {} is invalid",
                lo, hi
            )));
        }

        Ok(BoundScatter {
            layer: self,
            shader: palette.resolve(&self.shader)?,
        })
    }
}

/// A [`ScatterLayer`] with its shader resolved
#[derive(Debug, Clone)]
pub struct BoundScatter<'a> {
    layer: &'a ScatterLayer,
    shader: ShaderRef,
}

impl BoundScatter<'_> {
    pub fn count(&self) -> u32 {
        self.layer.count
    }

    /// Draw one sphere
    pub fn sample(&self, sampler: &mut Sampler) -> Surface {
        let ScatterLayer {
            min, max, radius, ..
        } = *self.layer;
        let center = DVec3::new(
            sampler.range(min.x, max.x),
            sampler.range(min.y, max.y),
            sampler.range(min.z, max.z),
        );
        let radius = sampler.range(radius[0], radius[1]);
        Surface::new(self.shader.clone(), Shape::Sphere { center, radius })
    }
}
