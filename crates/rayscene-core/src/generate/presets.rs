//! Built-in scenes

use super::SceneConfig;
use crate::curve::{Spiral, UpAxis};
use crate::palette::{Channel, RampSpec};
use crate::placement::{Band, Placement, ShaderSource, SpiralLayer};
use crate::scatter::ScatterLayer;
use crate::scene::{Camera, Image, Light, LightRow, Shader, Shape, SurfaceSpec};
use crate::{Error, Result};
use glam::DVec3;
use std::fmt;
use std::str::FromStr;

/// Scenes that ship with rayscene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Fifty blue boxes winding down a y-up spiral
    Helix,
    /// Capped boxes spiralling out under a crown of cones and ramp-colored
    /// scoops, with a light row and scattered stars
    IceCream,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Helix, Preset::IceCream];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Helix => "helix",
            Self::IceCream => "ice-cream",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Helix => "50 Phong boxes along a y-up spiral",
            Self::IceCream => {
                "220-step spiral of capped boxes, cones and a 21-shader ramp, 22 lights, 40 stars"
            }
        }
    }

    pub fn config(&self) -> SceneConfig {
        match self {
            Self::Helix => helix(),
            Self::IceCream => ice_cream(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown preset '{}'", s)))
    }
}

fn named(name: &str) -> ShaderSource {
    ShaderSource::Named(name.to_string())
}

fn blue_phong(exponent: f64) -> Shader {
    Shader::phong(
        "blue",
        DVec3::new(0.2, 0.3, 0.8),
        DVec3::new(1.0, 1.0, 0.0),
        exponent,
    )
}

fn helix() -> SceneConfig {
    let camera = Camera {
        view_point: DVec3::new(10.0, 4.8, 6.0),
        view_dir: DVec3::new(-5.0, -2.4, -3.0),
        proj_normal: DVec3::new(5.0, 2.4, 3.0),
        view_up: DVec3::Y,
        proj_distance: 6.0,
        view_width: 4.0,
        view_height: 2.25,
    };

    let mut config = SceneConfig::new(Image::new(800, 600), camera);
    config.lights = vec![
        Light::new(DVec3::new(4.0, 5.0, -3.0), DVec3::ONE),
        Light::new(DVec3::new(-5.0, -5.0, 6.0), DVec3::ONE),
    ];
    config.shaders = vec![blue_phong(20.0)];
    config.spirals = vec![SpiralLayer {
        steps: 50,
        curve: Spiral::new(25.0, 25.0, UpAxis::Y),
        bands: vec![Band::new(
            None,
            vec![Placement::Box {
                shader: named("blue"),
                edge_scale: 0.1,
            }],
        )],
    }];
    config
}

fn ice_cream() -> SceneConfig {
    let camera = Camera {
        view_point: DVec3::new(10.0, 4.8, 4.0),
        view_dir: DVec3::new(-5.0, -2.4, -2.0),
        proj_normal: DVec3::new(5.0, 2.4, 2.0),
        view_up: DVec3::Z,
        proj_distance: 4.5,
        view_width: 8.0,
        view_height: 6.0,
    };

    let mut config = SceneConfig::new(Image::new(800, 600), camera);
    config.lights = vec![
        Light::new(DVec3::new(4.0, 5.0, -3.0), DVec3::ONE),
        Light::new(DVec3::new(-5.0, -5.0, 6.0), DVec3::new(0.7, 0.7, 0.3)),
    ];
    config.light_rows = vec![LightRow {
        count: 20,
        origin: DVec3::new(-5.0, -5.0, 6.0),
        step: DVec3::new(1.0, 1.0, 0.5),
        intensity: DVec3::new(0.1, 0.1, 0.05),
    }];
    config.shaders = vec![
        blue_phong(10.0),
        Shader::lambertian("blueL", DVec3::new(0.2, 0.3, 0.8)),
        Shader::lambertian("cone", DVec3::new(1.0, 1.0, 0.8)),
        Shader::phong(
            "star",
            DVec3::new(0.9, 1.0, 0.9),
            DVec3::new(1.0, 1.0, 0.5),
            20.0,
        ),
    ];
    config.ramps = vec![RampSpec::new("icecream", 21, Channel::Red)];
    config.landmarks = vec![SurfaceSpec::new(
        "blue",
        Shape::Sphere {
            center: DVec3::new(0.0, 0.0, 2.5),
            radius: 2.5,
        },
    )];
    config.spirals = vec![SpiralLayer {
        steps: 220,
        curve: Spiral::new(25.0, 75.0, UpAxis::Z),
        bands: vec![
            Band::new(
                Some(200),
                vec![
                    Placement::Box {
                        shader: named("blueL"),
                        edge_scale: 0.1,
                    },
                    Placement::Cylinder {
                        shader: named("blue"),
                        radius_scale: 0.05,
                        height: 0.1,
                        lift_scale: 0.1,
                    },
                ],
            ),
            Band::new(
                None,
                vec![
                    Placement::Cone {
                        shader: named("cone"),
                        radius: 0.4,
                        height: 1.2,
                    },
                    Placement::Sphere {
                        shader: ShaderSource::Ramp("icecream".to_string()),
                        radius: 0.99,
                        lift: 1.8,
                    },
                ],
            ),
        ],
    }];
    config.scatter = vec![ScatterLayer {
        count: 40,
        min: DVec3::new(-10.0, -10.0, 5.0),
        max: DVec3::new(10.0, 10.0, 6.0),
        radius: [0.025, 0.125],
        shader: "star".to_string(),
    }];
    config
}
