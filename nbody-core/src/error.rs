//! Error types for system construction and energy accounting

use thiserror::Error;

/// Rejected construction input
///
/// Raised before any step runs; a validated system never produces one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("system has no bodies")]
    NoBodies,

    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: {field} must be finite, got {value}")]
    NonFiniteState {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("{name} is out of range: {value} ({expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Which energy sum produced a non-finite value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyKind {
    Kinetic,
    Potential,
}

impl std::fmt::Display for EnergyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyKind::Kinetic => write!(f, "kinetic"),
            EnergyKind::Potential => write!(f, "potential"),
        }
    }
}

/// Numeric-domain failure while accounting energy
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnergyError {
    /// Potential energy has no distance floor, so a zero separation is undefined
    #[error("bodies {first} and {second} coincide; potential energy is undefined")]
    CoincidentBodies { first: usize, second: usize },

    #[error("{kind} energy is not finite ({value})")]
    NonFinite { kind: EnergyKind, value: f64 },
}
