//! Scalar arguments
//!
//! Scene-command arguments keep the caller's integer-vs-float distinction
//! so the serialized script reproduces it: a camera placed at `0` is
//! written as `0`, a light intensity of `1.0` as `1.0`.

use serde::{Serialize, Deserialize};
use std::fmt;

/// A numeric command argument, integral or floating point
///
/// Built via `From`/`Into` conversions so call sites can pass plain
/// literals. The variant records how the value will be written out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An integral value, written without a decimal point
    Int(i64),
    /// A floating point value, written with a decimal point
    Float(f64),
}

impl Scalar {
    /// The numeric value as f64, for range checks
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    /// True unless the value is NaN or infinite
    pub fn is_finite(self) -> bool {
        match self {
            Scalar::Int(_) => true,
            Scalar::Float(v) => v.is_finite(),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

/// Canonical text form used in the emitted script.
///
/// Integers are written as plain decimals. Floats use the shortest
/// round-trippable decimal, except that finite integral floats keep one
/// trailing decimal (`1.0`, `-2.0`) so the integer/float distinction
/// survives serialization.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}
