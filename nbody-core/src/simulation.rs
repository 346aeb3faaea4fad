//! The simulation driver
//!
//! A [`System`] owns the bodies, one position history per body and the two energy
//! series for a single run. Each step is: force pass, integration, then one
//! kinetic and one potential energy sample taken from the post-step state.

use glam::DVec3;
use log::{debug, info, trace};

use crate::body::Body;
use crate::config::{BodyConfig, SimulationConfig};
use crate::energy::{kinetic_energy, potential_energy, EnergySample};
use crate::error::{ConfigError, EnergyError};
use crate::forces::{compute_accelerations, ForcePass};
use crate::integrator;

/// Bodies plus everything recorded about them during one run
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
    config: SimulationConfig,
    trajectories: Vec<Vec<DVec3>>,
    kinetic_energy: Vec<f64>,
    potential_energy: Vec<f64>,
}

impl System {
    /// Validate the initial conditions and parameters and build a system at step 0
    pub fn new(bodies: &[BodyConfig], config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let bodies = bodies
            .iter()
            .enumerate()
            .map(|(index, cfg)| cfg.to_body(index))
            .collect::<Result<Vec<_>, _>>()?;

        let trajectories = bodies.iter().map(|b| vec![b.position]).collect();

        debug!(
            "built system with {} bodies (G = {}, K_max = {}, eps = {}, dt = {}, steps = {})",
            bodies.len(),
            config.gravitational_constant,
            config.kinetic_energy_limit,
            config.min_distance,
            config.dt,
            config.steps
        );

        Ok(Self {
            bodies,
            config,
            trajectories,
            kinetic_energy: Vec::with_capacity(config.steps),
            potential_energy: Vec::with_capacity(config.steps),
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Position history per body, including the initial position
    pub fn trajectories(&self) -> &[Vec<DVec3>] {
        &self.trajectories
    }

    pub fn kinetic_energies(&self) -> &[f64] {
        &self.kinetic_energy
    }

    pub fn potential_energies(&self) -> &[f64] {
        &self.potential_energy
    }

    /// Number of steps completed so far
    pub fn completed_steps(&self) -> usize {
        self.kinetic_energy.len()
    }

    /// Run only the force pass on the current state
    pub fn compute_accelerations(&mut self) -> ForcePass {
        compute_accelerations(&mut self.bodies, &self.config)
    }

    pub fn kinetic_energy(&self) -> Result<f64, EnergyError> {
        kinetic_energy(&self.bodies)
    }

    pub fn potential_energy(&self) -> Result<f64, EnergyError> {
        potential_energy(&self.bodies, self.config.gravitational_constant)
    }

    /// Energy of the current configuration
    pub fn energy(&self) -> Result<EnergySample, EnergyError> {
        EnergySample::measure(&self.bodies, self.config.gravitational_constant)
    }

    /// Perform one step and record its energy sample
    ///
    /// A step whose energy measurement fails is rolled back: bodies return to
    /// their pre-step state and no trajectory entry or sample is kept, so every
    /// trajectory always holds `completed_steps() + 1` positions.
    pub fn step(&mut self) -> Result<EnergySample, EnergyError> {
        let previous = self.bodies.clone();
        let pass = compute_accelerations(&mut self.bodies, &self.config);
        integrator::step(&mut self.bodies, &mut self.trajectories, self.config.dt);

        let sample = match self.energy() {
            Ok(sample) => sample,
            Err(e) => {
                self.bodies = previous;
                for trajectory in self.trajectories.iter_mut() {
                    trajectory.pop();
                }
                return Err(e);
            }
        };
        self.kinetic_energy.push(sample.kinetic);
        self.potential_energy.push(sample.potential);

        trace!(
            "step {}: accepted {}, rejected {}, too close {}, kinetic {}, potential {}",
            self.completed_steps(),
            pass.accepted,
            pass.rejected,
            pass.too_close,
            sample.kinetic,
            sample.potential
        );

        Ok(sample)
    }

    /// Run exactly `config.steps` steps and hand back the recorded series
    pub fn run(mut self) -> Result<SimulationResult, EnergyError> {
        for _ in 0..self.config.steps {
            self.step()?;
        }

        if let (Some(kinetic), Some(potential)) =
            (self.kinetic_energy.last(), self.potential_energy.last())
        {
            info!(
                "completed {} steps: kinetic {}, potential {}, total {}",
                self.completed_steps(),
                kinetic,
                potential,
                kinetic + potential
            );
        } else {
            info!("completed 0 steps");
        }

        Ok(self.into_result())
    }

    /// Take the recorded series as they stand
    pub fn into_result(self) -> SimulationResult {
        SimulationResult {
            kinetic_energy: self.kinetic_energy,
            potential_energy: self.potential_energy,
            trajectories: self.trajectories,
        }
    }
}

/// Output of a completed run
///
/// `kinetic_energy[k]` and `potential_energy[k]` are measured after step k + 1.
/// `trajectories[i][0]` is body i's initial position.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub kinetic_energy: Vec<f64>,
    pub potential_energy: Vec<f64>,
    pub trajectories: Vec<Vec<DVec3>>,
}

impl SimulationResult {
    pub fn steps(&self) -> usize {
        self.kinetic_energy.len()
    }

    /// Kinetic plus potential energy, per step
    pub fn total_energy(&self) -> Vec<f64> {
        self.kinetic_energy
            .iter()
            .zip(&self.potential_energy)
            .map(|(k, p)| k + p)
            .collect()
    }

    /// |E_k - E_0| / |E_0| per step, relative to a reference total energy
    pub fn relative_energy_drift(&self, initial_total: f64) -> Vec<f64> {
        let scale = initial_total.abs();
        self.total_energy()
            .into_iter()
            .map(|e| {
                if scale > 0.0 {
                    (e - initial_total).abs() / scale
                } else {
                    (e - initial_total).abs()
                }
            })
            .collect()
    }
}
