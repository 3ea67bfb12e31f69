//! # Operand Model
//!
//! A number typed by the user, validated before it reaches the
//! [`crate::domain::accumulator::Accumulator`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperandError {
    #[error("operand is empty")]
    Empty,
    #[error("'{input}' is not a number")]
    Invalid { input: String },
    #[error("'{input}' is not a finite number")]
    NonFinite { input: String },
}

/// A finite `f64`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Operand(f64);

impl Operand {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Operand {
    type Err = OperandError;

    /// Parses decimal or scientific notation, ignoring surrounding whitespace.
    ///
    /// `NaN` and the infinities parse as `f64` but are rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(OperandError::Empty);
        }

        let value: f64 = trimmed.parse().map_err(|_| OperandError::Invalid {
            input: trimmed.to_string(),
        })?;

        if !value.is_finite() {
            return Err(OperandError::NonFinite {
                input: trimmed.to_string(),
            });
        }

        Ok(Self(value))
    }
}

impl From<Operand> for f64 {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
