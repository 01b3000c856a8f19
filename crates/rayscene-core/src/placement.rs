//! Primitive placement along a spiral
//!
//! A [`SpiralLayer`] walks its curve for a fixed number of steps. The steps
//! are split into consecutive [`Band`]s; at each step the band containing
//! the step emits one surface per [`Placement`], sized and offset from the
//! curve point.
//!
//! Layers are compiled against the palette before anything is written, so
//! a misspelled shader fails before the first surface rather than leaving a
//! dangling reference in the output.

use crate::curve::{CurvePoint, Spiral, UpAxis};
use crate::palette::{Ramp, ShaderPalette, ShaderRef};
use crate::scene::{Shape, Surface};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Where a placement gets its shader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShaderSource {
    /// One shader for every step
    Named(String),
    /// The ramp with this prefix, indexed by the step's offset in its band
    Ramp(String),
}

/// How one primitive is derived from a curve point `p` with parameter `i`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Placement {
    /// Cube with its min corner on the curve and edge `i * edge_scale`
    Box {
        shader: ShaderSource,
        edge_scale: f64,
    },
    /// Cylinder of radius `i * radius_scale` standing `i * lift_scale` above
    /// the curve, shifted by its radius on both winding axes
    Cylinder {
        shader: ShaderSource,
        radius_scale: f64,
        height: f64,
        lift_scale: f64,
    },
    /// Cone with its tip on the curve, opening upward
    Cone {
        shader: ShaderSource,
        radius: f64,
        height: f64,
    },
    /// Sphere centered `lift` above the curve
    Sphere {
        shader: ShaderSource,
        radius: f64,
        lift: f64,
    },
}

impl Placement {
    pub fn shader(&self) -> &ShaderSource {
        match self {
            Self::Box { shader, .. }
            | Self::Cylinder { shader, .. }
            | Self::Cone { shader, .. }
            | Self::Sphere { shader, .. } => shader,
        }
    }

    /// Geometry for a curve point
    pub fn shape(&self, point: &CurvePoint, up: UpAxis) -> Shape {
        let p = point.position;
        let i = point.i;
        match *self {
            Self::Box { edge_scale, .. } => Shape::Box {
                min_pt: p,
                max_pt: p + i * edge_scale,
            },
            Self::Cylinder {
                radius_scale,
                height,
                lift_scale,
                ..
            } => {
                let radius = i * radius_scale;
                Shape::Cylinder {
                    center: p + up.plane() * radius + up.unit() * (i * lift_scale + height / 2.0),
                    radius,
                    height,
                }
            }
            Self::Cone { radius, height, .. } => Shape::Cone {
                center: p + up.unit() * (height / 2.0),
                radius,
                height,
                tip_z: up.height_of(p),
            },
            Self::Sphere { radius, lift, .. } => Shape::Sphere {
                center: p + up.unit() * lift,
                radius,
            },
        }
    }
}

/// A run of consecutive steps sharing the same placements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// First step after the band; `None` runs to the end of the layer
    #[serde(default)]
    pub until: Option<u32>,
    pub placements: Vec<Placement>,
}

impl Band {
    pub fn new(until: Option<u32>, placements: Vec<Placement>) -> Self {
        Self { until, placements }
    }
}

/// Surfaces laid along a spiral
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralLayer {
    pub steps: u32,
    pub curve: Spiral,
    pub bands: Vec<Band>,
}

impl SpiralLayer {
    /// Resolve every shader against the palette and check the band split
    pub fn compile<'p>(&self, palette: &'p ShaderPalette) -> Result<CompiledLayer<'p>> {
        let mut bands = Vec::with_capacity(self.bands.len());
        let mut start = 0;
        for (n, band) in self.bands.iter().enumerate() {
            let end = match band.until {
                Some(until) if until < start => {
                    return Err(Error::InvalidParameter(format!(
                        "band {} ends at step {} before it starts at {}",
                        n, until, start
                    )));
                }
                Some(until) => until,
                None if n + 1 < self.bands.len() => {
                    return Err(Error::InvalidParameter(format!(
                        "open-ended band {} must be the last band",
                        n
                    )));
                }
                None => u32::MAX,
            };

            let placements = band
                .placements
                .iter()
                .map(|placement| {
                    let source = match placement.shader() {
                        ShaderSource::Named(name) => Bound::Fixed(palette.resolve(name)?),
                        ShaderSource::Ramp(name) => Bound::Ramp(palette.ramp(name)?),
                    };
                    Ok((placement.clone(), source))
                })
                .collect::<Result<Vec<_>>>()?;

            bands.push(CompiledBand {
                start,
                end,
                placements,
            });
            start = end;
        }

        Ok(CompiledLayer {
            steps: self.steps,
            curve: self.curve,
            bands,
        })
    }
}

#[derive(Debug, Clone)]
enum Bound<'p> {
    Fixed(ShaderRef),
    Ramp(&'p Ramp),
}

#[derive(Debug, Clone)]
struct CompiledBand<'p> {
    start: u32,
    end: u32,
    placements: Vec<(Placement, Bound<'p>)>,
}

/// A [`SpiralLayer`] with its shaders bound to a palette
#[derive(Debug, Clone)]
pub struct CompiledLayer<'p> {
    steps: u32,
    curve: Spiral,
    bands: Vec<CompiledBand<'p>>,
}

impl CompiledLayer<'_> {
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Surfaces emitted at one step, in placement order
    ///
    /// Steps not covered by any band emit nothing.
    pub fn surfaces_at(&self, count: u32) -> Result<Vec<Surface>> {
        let Some(band) = self
            .bands
            .iter()
            .find(|b| count >= b.start && count < b.end)
        else {
            return Ok(Vec::new());
        };

        let point = self.curve.point(count)?;
        band.placements
            .iter()
            .map(|(placement, bound)| {
                let shader = match bound {
                    Bound::Fixed(shader) => shader.clone(),
                    Bound::Ramp(ramp) => ramp.at((count - band.start) as usize)?,
                };
                Ok(Surface::new(shader, placement.shape(&point, self.curve.up)))
            })
            .collect()
    }
}
