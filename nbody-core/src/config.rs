//! Simulation parameters and per-body initial conditions
//!
//! These are the serde-facing shapes a scenario is described with:
//!
//! - [`SimulationConfig`] – physical constants, safeguards and stepping
//! - [`BodyConfig`]       – initial state for one body
//!
//! Every parameter the engine reads lives in [`SimulationConfig`]; nothing is
//! taken from process-wide state.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::ConfigError;

/// Global numerical and physical parameters for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravitational constant G
    pub gravitational_constant: f64,
    /// K_max: a pairwise candidate is dropped if it would push a body's kinetic energy above this
    pub kinetic_energy_limit: f64,
    /// ε: pairs at or below this separation contribute nothing to the force pass
    pub min_distance: f64,
    /// Time step dt
    pub dt: f64,
    /// Number of steps the driver runs
    pub steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.01,
            kinetic_energy_limit: 1e6,
            min_distance: 1e-3,
            dt: 2e-4,
            steps: 1000,
        }
    }
}

impl SimulationConfig {
    /// Check every parameter is usable
    ///
    /// `steps == 0` is accepted: a zero-step run is a valid no-op that reports
    /// empty energy series and the initial positions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if !(self.gravitational_constant.is_finite() && self.gravitational_constant > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "gravitational_constant",
                value: self.gravitational_constant,
                expected: "positive and finite",
            });
        }
        // An infinite ceiling is allowed and disables the safeguard
        if self.kinetic_energy_limit.is_nan() || self.kinetic_energy_limit <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "kinetic_energy_limit",
                value: self.kinetic_energy_limit,
                expected: "positive",
            });
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "min_distance",
                value: self.min_distance,
                expected: "non-negative and finite",
            });
        }
        Ok(())
    }
}

/// Initial conditions for a single body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: DVec3,
    #[serde(default)]
    pub velocity: DVec3,
    pub mass: f64,
}

impl BodyConfig {
    pub fn new(position: DVec3, velocity: DVec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// Validate against the body's index and build the runtime [`Body`]
    pub fn to_body(&self, index: usize) -> Result<Body, ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass {
                index,
                mass: self.mass,
            });
        }
        if !self.position.is_finite() {
            return Err(ConfigError::NonFiniteState {
                index,
                field: "position",
                value: format!("{}", self.position),
            });
        }
        if !self.velocity.is_finite() {
            return Err(ConfigError::NonFiniteState {
                index,
                field: "velocity",
                value: format!("{}", self.velocity),
            });
        }
        Ok(Body::new(self.position, self.velocity, self.mass))
    }
}

impl From<&Body> for BodyConfig {
    fn from(body: &Body) -> Self {
        Self::new(body.position, body.velocity, body.mass())
    }
}
