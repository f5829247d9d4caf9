//! NACA 4-digit shape code.

use crate::error::{GeometryError, GeometryResult};
use af_core::Real;
use std::fmt;
use std::str::FromStr;

/// The three shape parameters encoded by a 4-digit code.
///
/// - `m`: maximum camber as a fraction of chord (first digit / 100)
/// - `p`: chordwise location of maximum camber (second digit / 10)
/// - `t`: maximum thickness as a fraction of chord (last two digits / 100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeCode {
    digits: [u8; 4],
    m: Real,
    p: Real,
    t: Real,
}

impl ShapeCode {
    /// Number of characters in a valid code.
    pub const LEN: usize = 4;

    /// Parse a code such as `"2412"`. No whitespace trimming is performed.
    pub fn parse(code: &str) -> GeometryResult<Self> {
        if code.chars().count() != Self::LEN {
            return Err(GeometryError::InvalidShapeCode {
                code: code.to_string(),
                reason: "must be exactly 4 characters",
            });
        }

        let mut digits = [0_u8; 4];
        for (slot, ch) in digits.iter_mut().zip(code.chars()) {
            if !ch.is_ascii_digit() {
                return Err(GeometryError::InvalidShapeCode {
                    code: code.to_string(),
                    reason: "all characters must be ASCII digits",
                });
            }
            *slot = ch as u8 - b'0';
        }

        Ok(Self::from_digits(digits))
    }

    fn from_digits(digits: [u8; 4]) -> Self {
        let thickness_pct = digits[2] as u32 * 10 + digits[3] as u32;
        Self {
            digits,
            m: digits[0] as Real / 100.0,
            p: digits[1] as Real / 10.0,
            t: thickness_pct as Real / 100.0,
        }
    }

    /// Maximum camber (fraction of chord).
    pub fn m(&self) -> Real {
        self.m
    }

    /// Location of maximum camber (fraction of chord).
    pub fn p(&self) -> Real {
        self.p
    }

    /// Maximum thickness (fraction of chord).
    pub fn t(&self) -> Real {
        self.t
    }

    /// The four digits as originally given, e.g. `"0012"`.
    pub fn code(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Zero camber: the section is symmetric about the chord line.
    pub fn is_symmetric(&self) -> bool {
        self.digits[0] == 0
    }
}

/// Parse a 4-digit code into its shape parameters.
pub fn parse_shape_code(code: &str) -> GeometryResult<ShapeCode> {
    ShapeCode::parse(code)
}

impl FromStr for ShapeCode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ShapeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NACA {}", self.code())
    }
}
