#![warn(missing_docs)]

//! Math types for the tunnel-lining schema tools.
//!
//! Thin wrappers around nalgebra providing the domain types needed by the
//! lining data model: 3D points and vectors, a local coordinate [`Frame`],
//! and parsing/formatting of the `"x,y,z"` component strings used by the
//! plane wire format.

use nalgebra::Vector3;
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Errors from parsing a `"x,y,z"` component string.
///
/// The upstream data format historically tolerated malformed component
/// strings by substituting a zero point or vector. That behaviour hides
/// data corruption, so parsing here fails loudly instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// The string did not split into exactly three components.
    #[error("expected 3 comma-separated components, found {found} in `{text}`")]
    ComponentCount {
        /// Number of components found.
        found: usize,
        /// The offending input text.
        text: String,
    },

    /// A component was not a valid floating-point number.
    #[error("invalid numeric component `{component}` in `{text}`")]
    BadNumber {
        /// The component that failed to parse.
        component: String,
        /// The offending input text.
        text: String,
    },
}

/// Parse a `"x,y,z"` string into its three numeric components.
///
/// Whitespace around individual components is tolerated; any other
/// deviation (wrong component count, non-numeric text) is an error.
pub fn parse_components(text: &str) -> Result<[f64; 3], ComponentError> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(ComponentError::ComponentCount {
            found: parts.len(),
            text: text.to_string(),
        });
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let trimmed = part.trim();
        *slot = trimmed
            .parse::<f64>()
            .map_err(|_| ComponentError::BadNumber {
                component: trimmed.to_string(),
                text: text.to_string(),
            })?;
    }
    Ok(out)
}

/// Format three components as the wire form `"x,y,z"`.
///
/// Uses the default `f64` display: locale-invariant, shortest
/// representation that round-trips, no enclosing brackets.
pub fn format_components(x: f64, y: f64, z: f64) -> String {
    format!("{},{},{}", x, y, z)
}

/// A local 3D coordinate frame: an origin point plus two axis vectors.
///
/// The axes are direction vectors, not points — they are translation
/// invariant even though the wire format stores all three records as the
/// same `"x,y,z"` shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Origin point of the frame.
    pub origin: Point3,
    /// X-axis direction vector.
    pub x_axis: Vec3,
    /// Y-axis direction vector.
    pub y_axis: Vec3,
}

impl Frame {
    /// Create a frame from an origin and two axis vectors.
    pub fn new(origin: Point3, x_axis: Vec3, y_axis: Vec3) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
        }
    }

    /// The world frame: origin at zero, unit X and Y axes.
    pub fn identity() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vec3::new(1.0, 0.0, 0.0),
            y_axis: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}
