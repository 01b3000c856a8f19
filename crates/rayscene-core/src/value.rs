//! Attribute and leaf values
//!
//! Every number, tuple and string that ends up in a document goes through
//! [`Value`]'s `Display` implementation, so formatting lives in one place.
//!
//! Tuples are rendered space separated and floats use Rust's shortest
//! round-trip form (`1.0` prints as `1`, `0.25` as `0.25`). Nothing is
//! escaped: callers only pass text that is safe for the target format.

use glam::DVec3;
use std::fmt;

/// A scalar, tuple or text value written into a tag
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    /// Free-form numeric tuple, e.g. a point, a color or an image size
    Tuple(Vec<f64>),
    Text(String),
}

impl Value {
    /// Build a tuple value from any list of components
    pub fn tuple(components: impl IntoIterator<Item = f64>) -> Self {
        Self::Tuple(components.into_iter().collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Tuple(components) => {
                for (n, c) in components.iter().enumerate() {
                    if n > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<DVec3> for Value {
    fn from(v: DVec3) -> Self {
        Self::Tuple(v.to_array().to_vec())
    }
}

impl From<[f64; 2]> for Value {
    fn from(v: [f64; 2]) -> Self {
        Self::Tuple(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_formatting() {
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(20.0).to_string(), "20");
        assert_eq!(Value::from(-0.05).to_string(), "-0.05");
    }

    #[test]
    fn test_tuple_formatting() {
        assert_eq!(
            Value::from(DVec3::new(0.2, 0.3, 0.8)).to_string(),
            "0.2 0.3 0.8"
        );
        assert_eq!(Value::tuple([800.0, 600.0]).to_string(), "800 600");
        assert_eq!(Value::Tuple(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_short_tuple_is_not_rejected() {
        // Arity is the caller's business
        assert_eq!(Value::from([1.0, 2.0]).to_string(), "1 2");
    }

    #[test]
    fn test_text_is_written_verbatim() {
        assert_eq!(Value::from("a<b&\"c\"").to_string(), "a<b&\"c\"");
        assert_eq!(Value::from(String::from("blue")).to_string(), "blue");
    }
}
