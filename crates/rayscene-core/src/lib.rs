//! # Rayscene Core
//!
//! Procedural scene descriptions for tag-based ray tracers.
//!
//! Rayscene writes the XML-like scene files read by a simple ray tracer:
//! an image size, a camera, lights, a palette of named shaders and a set of
//! surfaces. Two pieces do the work:
//!
//! - [`writer::TagWriter`] streams well-formed nested tags into any
//!   [`std::io::Write`] sink and knows nothing about scenes.
//! - [`builder::SceneBuilder`] and [`generate()`] lay primitives out along a
//!   parametric spiral and bind them to shaders from a
//!   [`palette::ShaderPalette`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rayscene_core::prelude::*;
//!
//! let config = Preset::IceCream.config();
//! let file = std::io::BufWriter::new(std::fs::File::create("generated.xml")?);
//! let stats = generate(&config, file, 42)?;
//! println!("{} surfaces", stats.surfaces);
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: scene units of the target renderer
//! - **Angles**: the spiral frequency is in radians per unit of `i`
//! - **Precision**: all geometry uses `f64`
//! - **Coordinate system**: the up axis is chosen per spiral (`Y` or `Z`)

pub mod builder;
pub mod curve;
pub mod generate;
pub mod palette;
pub mod placement;
pub mod scatter;
pub mod scene;
pub mod value;
pub mod writer;

mod error;

pub use error::{Error, Result};
pub use generate::{Preset, SceneConfig, SceneStats, generate};

/// Prelude module for convenient imports
pub mod prelude {
    // Document writing
    pub use crate::value::Value;
    pub use crate::writer::{Tag, TagWriter};

    // Scene model
    pub use crate::scene::{
        Camera, Image, Light, LightRow, Shader, ShaderKind, Shape, ShapeKind, Surface, SurfaceSpec,
    };

    // Palette and procedural layers
    pub use crate::curve::{CurvePoint, Spiral, UpAxis};
    pub use crate::palette::{Channel, Ramp, RampSpec, ShaderPalette, ShaderRef};
    pub use crate::placement::{Band, Placement, ShaderSource, SpiralLayer};
    pub use crate::scatter::{Sampler, ScatterLayer};

    // Orchestration
    pub use crate::builder::{SceneBuilder, Section};
    pub use crate::generate::{Preset, SceneConfig, SceneStats, generate};

    // Math (re-export glam)
    pub use glam::DVec3;

    // Error handling
    pub use crate::{Error, Result};
}
