//! Shader palette
//!
//! The palette is an addressable table of every shader a scene declares.
//! Surfaces never spell shader names themselves: they hold a [`ShaderRef`],
//! and the only way to get one is to look it up here. Gradient ramps are
//! stored as ordered lists of refs, so a surface picks "the k-th ramp
//! shader" through [`Ramp::at`] instead of rebuilding the name.

use crate::scene::Shader;
use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handle to a shader declared in a [`ShaderPalette`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderRef {
    name: Arc<str>,
}

impl ShaderRef {
    fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// Name written into the `ref` attribute
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ShaderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Color channel of an RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Procedural gradient of Lambertian shaders
///
/// Step `k` of `steps` holds the `hold` channel at 1 and fades the other two
/// from 1 down to 0. Shaders are named `prefix` followed by `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampSpec {
    pub prefix: String,
    pub steps: u32,
    pub hold: Channel,
}

impl RampSpec {
    pub fn new(prefix: impl Into<String>, steps: u32, hold: Channel) -> Self {
        Self {
            prefix: prefix.into(),
            steps,
            hold,
        }
    }

    /// Diffuse color of step `k`
    pub fn color(&self, k: u32) -> DVec3 {
        let t = if self.steps > 1 {
            f64::from(k) / f64::from(self.steps - 1)
        } else {
            0.0
        };
        let mut color = DVec3::splat(1.0 - t);
        color[self.hold.index()] = 1.0;
        color
    }

    /// Name of step `k`
    pub fn shader_name(&self, k: u32) -> String {
        format!("{}{}", self.prefix, k)
    }

    /// The ramp's shaders in order
    pub fn shaders(&self) -> impl Iterator<Item = Shader> + '_ {
        (0..self.steps).map(|k| Shader::lambertian(self.shader_name(k), self.color(k)))
    }
}

/// An ordered run of palette shaders
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    name: String,
    refs: Vec<ShaderRef>,
}

impl Ramp {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShaderRef> {
        self.refs.get(index)
    }

    /// The shader at `index`, or [`Error::RampIndex`] past the end
    pub fn at(&self, index: usize) -> Result<ShaderRef> {
        self.refs
            .get(index)
            .cloned()
            .ok_or_else(|| Error::RampIndex {
                ramp: self.name.clone(),
                index,
                len: self.refs.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShaderRef> {
        self.refs.iter()
    }
}

/// Every shader of a scene, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ShaderPalette {
    shaders: Vec<Shader>,
    index: HashMap<String, usize>,
    ramps: Vec<Ramp>,
}

impl ShaderPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a shader
    pub fn add(&mut self, shader: Shader) -> Result<ShaderRef> {
        if self.index.contains_key(&shader.name) {
            return Err(Error::DuplicateShader(shader.name));
        }
        let shader_ref = ShaderRef::new(&shader.name);
        self.index.insert(shader.name.clone(), self.shaders.len());
        self.shaders.push(shader);
        Ok(shader_ref)
    }

    /// Declare every shader of a gradient ramp
    ///
    /// Nothing is added when any generated name is already taken.
    pub fn add_ramp(&mut self, spec: &RampSpec) -> Result<&Ramp> {
        if self.ramps.iter().any(|r| r.name == spec.prefix) {
            return Err(Error::DuplicateShader(spec.prefix.clone()));
        }
        let shaders: Vec<Shader> = spec.shaders().collect();
        if let Some(taken) = shaders.iter().find(|s| self.index.contains_key(&s.name)) {
            return Err(Error::DuplicateShader(taken.name.clone()));
        }

        let mut refs = Vec::with_capacity(shaders.len());
        for shader in shaders {
            refs.push(self.add(shader)?);
        }
        self.ramps.push(Ramp {
            name: spec.prefix.clone(),
            refs,
        });
        let last = self.ramps.len() - 1;
        Ok(&self.ramps[last])
    }

    /// Look up a declared shader by name
    pub fn resolve(&self, name: &str) -> Result<ShaderRef> {
        self.index
            .get(name)
            .map(|&i| ShaderRef::new(&self.shaders[i].name))
            .ok_or_else(|| Error::UnknownShader(name.to_string()))
    }

    /// Look up a ramp by its prefix
    pub fn ramp(&self, name: &str) -> Result<&Ramp> {
        self.ramps
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| Error::UnknownShader(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shader> {
        self.shaders.iter()
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}
