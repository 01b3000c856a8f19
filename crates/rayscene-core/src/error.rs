//! Error types for Rayscene

use crate::builder::Section;
use thiserror::Error;

/// Result type alias using Rayscene's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a scene document
#[derive(Error, Debug)]
pub enum Error {
    /// The output sink failed; the document is abandoned
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A curve or placement computation left the domain of its math function
    #[error("Numeric domain error: {op} of {value}")]
    NumericDomain { op: &'static str, value: f64 },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A surface names a shader the palette never declared
    #[error("Unknown shader: '{0}'")]
    UnknownShader(String),

    /// Two palette entries share a name
    #[error("Duplicate shader: '{0}'")]
    DuplicateShader(String),

    /// A ramp lookup past the end of the ramp
    #[error("Ramp index {index} out of range for '{ramp}' ({len} shaders)")]
    RampIndex {
        ramp: String,
        index: usize,
        len: usize,
    },

    /// A document section was written after a later one
    #[error("Cannot write {next:?} section after {current:?}")]
    SectionOrder { current: Section, next: Section },
}
