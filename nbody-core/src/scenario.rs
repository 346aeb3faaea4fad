//! Complete run descriptions: parameters plus initial bodies
//!
//! A [`Scenario`] is the document the CLI loads from YAML:
//!
//! ```yaml
//! parameters:
//!   gravitational_constant: 1.0
//!   kinetic_energy_limit: 1.0e6
//!   min_distance: 1.0e-3
//!   dt: 0.01
//!   steps: 100
//!
//! bodies:
//!   - position: [ -0.5, 0.0, 0.0 ]
//!     velocity: [ 0.0, -0.7071, 0.0 ]
//!     mass: 1.0
//!   - position: [ 0.5, 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.7071, 0.0 ]
//!     mass: 1.0
//! ```
//!
//! Omitted parameters take their [`SimulationConfig::default`] values and an
//! omitted velocity is zero.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::{BodyConfig, SimulationConfig};
use crate::error::ConfigError;
use crate::simulation::System;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub parameters: SimulationConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Scenario {
    pub fn new(parameters: SimulationConfig, bodies: Vec<BodyConfig>) -> Self {
        Self { parameters, bodies }
    }

    /// Validate and produce a system ready to run
    pub fn build(&self) -> Result<System, ConfigError> {
        System::new(&self.bodies, self.parameters)
    }

    /// Three unequal masses close together, integrated with a small step
    pub fn three_body() -> Self {
        Self::new(
            SimulationConfig::default(),
            vec![
                BodyConfig::new(DVec3::ZERO, DVec3::ZERO, 2e3),
                BodyConfig::new(DVec3::new(0.5, 0.0, 0.0), DVec3::new(0.0, 3.0, 0.0), 1.5e3),
                BodyConfig::new(DVec3::new(0.0, 0.5, 0.0), DVec3::new(3.0, 3.0, 0.0), 1e3),
            ],
        )
    }

    /// Two bodies on an approximately circular mutual orbit
    ///
    /// Equal masses `mass`, separated by `separation` along x, moving in opposite
    /// directions along y with speed sqrt(G * (m1 + m2) / (4 * d)).
    pub fn circular_binary(
        mass: f64,
        separation: f64,
        gravitational_constant: f64,
        dt: f64,
        steps: usize,
    ) -> Self {
        let speed = (gravitational_constant * (mass + mass) / (4.0 * separation)).sqrt();
        let half = 0.5 * separation;
        let parameters = SimulationConfig {
            gravitational_constant,
            dt,
            steps,
            ..SimulationConfig::default()
        };

        Self::new(
            parameters,
            vec![
                BodyConfig::new(DVec3::new(-half, 0.0, 0.0), DVec3::new(0.0, -speed, 0.0), mass),
                BodyConfig::new(DVec3::new(half, 0.0, 0.0), DVec3::new(0.0, speed, 0.0), mass),
            ],
        )
    }
}

/// Built-in scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    ThreeBody,
    Binary,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::ThreeBody, Preset::Binary];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::ThreeBody => "three-body",
            Preset::Binary => "binary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            Preset::ThreeBody => Scenario::three_body(),
            Preset::Binary => Scenario::circular_binary(1.0, 1.0, 1.0, 0.01, 100),
        }
    }
}
