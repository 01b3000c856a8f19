//! Single-pass scene generation
//!
//! [`generate`] turns a [`SceneConfig`] into a complete document:
//!
//! 1. build the [`ShaderPalette`] (fixed shaders, then ramps)
//! 2. bind every landmark, spiral layer and scatter layer to the palette
//! 3. write image, camera, lights, palette, landmarks, spiral surfaces and
//!    scattered spheres, then close the scene
//!
//! Binding happens before the first byte is written, so unknown shader
//! names and bad ranges fail without leaving a half-written file. Errors
//! that can only show up while walking a curve (a numeric domain error, a
//! ramp that is too short) abort the pass with partial output on the sink.

mod presets;

pub use crate::builder::SceneStats;
pub use presets::Preset;

use crate::Result;
use crate::builder::SceneBuilder;
use crate::palette::{RampSpec, ShaderPalette};
use crate::placement::SpiralLayer;
use crate::scatter::{Sampler, ScatterLayer};
use crate::scene::{Camera, Image, Light, LightRow, Shader, SurfaceSpec};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Everything needed to generate one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub image: Image,
    pub camera: Camera,
    /// Fixed lights, written first
    #[serde(default)]
    pub lights: Vec<Light>,
    /// Procedural light batches, written after the fixed lights
    #[serde(default)]
    pub light_rows: Vec<LightRow>,
    #[serde(default)]
    pub shaders: Vec<Shader>,
    /// Gradient ramps, declared after the fixed shaders
    #[serde(default)]
    pub ramps: Vec<RampSpec>,
    /// Fixed surfaces written before the spirals
    #[serde(default)]
    pub landmarks: Vec<SurfaceSpec>,
    #[serde(default)]
    pub spirals: Vec<SpiralLayer>,
    #[serde(default)]
    pub scatter: Vec<ScatterLayer>,
}

impl SceneConfig {
    /// A scene with only an image and a camera
    pub fn new(image: Image, camera: Camera) -> Self {
        Self {
            image,
            camera,
            lights: Vec::new(),
            light_rows: Vec::new(),
            shaders: Vec::new(),
            ramps: Vec::new(),
            landmarks: Vec::new(),
            spirals: Vec::new(),
            scatter: Vec::new(),
        }
    }

    /// Build the shader table: fixed shaders first, then every ramp
    pub fn palette(&self) -> Result<ShaderPalette> {
        let mut palette = ShaderPalette::new();
        for shader in &self.shaders {
            palette.add(shader.clone())?;
        }
        for ramp in &self.ramps {
            palette.add_ramp(ramp)?;
        }
        Ok(palette)
    }
}

/// Generate the scene described by `config` into `sink`
///
/// `seed` drives the scatter layers only; everything else is fully
/// determined by the config.
pub fn generate<W: Write>(config: &SceneConfig, sink: W, seed: u64) -> Result<SceneStats> {
    let palette = config.palette()?;
    let landmarks = config
        .landmarks
        .iter()
        .map(|spec| spec.resolve(&palette))
        .collect::<Result<Vec<_>>>()?;
    let spirals = config
        .spirals
        .iter()
        .map(|layer| layer.compile(&palette))
        .collect::<Result<Vec<_>>>()?;
    let scatter = config
        .scatter
        .iter()
        .map(|layer| layer.bind(&palette))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = SceneBuilder::begin(sink)?;
    builder.image(&config.image)?;
    builder.camera(&config.camera)?;

    for light in &config.lights {
        builder.light(light)?;
    }
    for row in &config.light_rows {
        for light in row.lights() {
            builder.light(&light)?;
        }
    }

    builder.palette(&palette)?;

    for surface in &landmarks {
        builder.surface(surface)?;
    }

    for (n, layer) in spirals.iter().enumerate() {
        tracing::debug!("Spiral layer {}: {} steps", n, layer.steps());
        for count in 0..layer.steps() {
            for surface in layer.surfaces_at(count)? {
                builder.surface(&surface)?;
            }
        }
    }

    let mut sampler = Sampler::new(seed);
    for (n, layer) in scatter.iter().enumerate() {
        tracing::debug!(
            "Scatter layer {}: {} spheres (seed {})",
            n,
            layer.count(),
            seed
        );
        for _ in 0..layer.count() {
            builder.surface(&layer.sample(&mut sampler))?;
        }
    }

    let stats = builder.stats();
    builder.finish()?;
    tracing::info!(
        "Scene written: {} lights, {} shaders, {} surfaces",
        stats.lights,
        stats.shaders,
        stats.surfaces
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::curve::{Spiral, UpAxis};
    use crate::palette::Channel;
    use crate::placement::{Band, Placement, ShaderSource};
    use crate::scene::Shape;
    use glam::DVec3;

    fn small_config(steps: u32) -> SceneConfig {
        let mut config = Preset::Helix.config();
        config.spirals[0].steps = steps;
        config
    }

    fn render(config: &SceneConfig, seed: u64) -> Result<String> {
        let mut out = Vec::new();
        generate(config, &mut out, seed)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_zero_steps_closes_scene() {
        let out = render(&small_config(0), 0).unwrap();
        assert!(out.contains("<camera>"));
        assert!(out.contains("<shader name=\"blue\" type=\"Phong\">"));
        assert!(!out.contains("<surface"));
        assert!(out.ends_with("  </shader>\n</scene>\n"));
    }

    #[test]
    fn test_stats() {
        let mut out = Vec::new();
        let stats = generate(&small_config(7), &mut out, 0).unwrap();
        assert_eq!(
            stats,
            SceneStats {
                lights: 2,
                shaders: 1,
                surfaces: 7
            }
        );
    }

    #[test]
    fn test_matching_ramp_has_no_dangling_refs() {
        let mut config = SceneConfig::new(Image::default(), Preset::Helix.config().camera);
        config.ramps.push(RampSpec::new("shade", 30, Channel::Blue));
        config.spirals.push(SpiralLayer {
            steps: 30,
            curve: Spiral::new(10.0, 5.0, UpAxis::Z),
            bands: vec![Band::new(
                None,
                vec![Placement::Sphere {
                    shader: ShaderSource::Ramp("shade".into()),
                    radius: 0.1,
                    lift: 0.0,
                }],
            )],
        });

        let out = render(&config, 0).unwrap();
        for k in 0..30 {
            let declared = format!("<shader name=\"shade{k}\" type=\"Lambertian\">");
            let referenced = format!("<shader ref=\"shade{k}\" />");
            let decl_at = out.find(&declared).unwrap();
            let ref_at = out.find(&referenced).unwrap();
            assert!(decl_at < ref_at);
        }
    }

    #[test]
    fn test_unknown_landmark_shader_writes_nothing() {
        let mut config = small_config(3);
        config.landmarks.push(SurfaceSpec::new(
            "missing",
            Shape::Sphere {
                center: DVec3::ZERO,
                radius: 1.0,
            },
        ));
        let mut out = Vec::new();
        let err = generate(&config, &mut out, 0).unwrap_err();
        assert!(matches!(err, Error::UnknownShader(name) if name == "missing"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_short_ramp_aborts_generation() {
        let mut config = Preset::IceCream.config();
        config.ramps[0].steps = 5;
        let mut out = Vec::new();
        let err = generate(&config, &mut out, 0).unwrap_err();
        let Error::RampIndex { index, len, .. } = err else {
            panic!("expected a ramp index error");
        };
        assert_eq!((index, len), (5, 5));
        // Partial output is left on the sink
        assert!(!out.is_empty());
    }

    #[test]
    fn test_numeric_domain_error_aborts_generation() {
        let mut config = small_config(5);
        config.spirals[0].curve.scale = -25.0;
        assert!(matches!(
            render(&config, 0),
            Err(Error::NumericDomain { op: "sqrt", .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Preset::IceCream.config();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shaders, config.shaders);
        assert_eq!(back.ramps, config.ramps);
        assert_eq!(back.spirals.len(), config.spirals.len());

        let mut a = Vec::new();
        let mut b = Vec::new();
        let stats_a = generate(&config, &mut a, 9).unwrap();
        let stats_b = generate(&back, &mut b, 9).unwrap();
        assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn test_minimal_json_description() {
        let json = r#"{
            "camera": {
                "view_point": [10, 4.8, 6],
                "view_dir": [-5, -2.4, -3],
                "proj_normal": [5, 2.4, 3],
                "view_up": [0, 1, 0],
                "proj_distance": 6,
                "view_width": 4,
                "view_height": 2.25
            },
            "shaders": [
                { "name": "blue", "kind": { "type": "Lambertian", "diffuse_color": [0.2, 0.3, 0.8] } }
            ],
            "landmarks": [
                { "shader": "blue", "shape": { "type": "Sphere", "center": [0, 0, 2.5], "radius": 2.5 } }
            ]
        }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.image, Image::new(800, 600));
        let out = render(&config, 0).unwrap();
        assert!(out.contains("<surface type=\"Sphere\">\n    <shader ref=\"blue\" />"));
    }
}
