//! Pairwise gravitational accelerations with a kinetic-energy ceiling
//!
//! Every ordered pair (i, j), i != j, is evaluated on its own. A pair closer than
//! the distance floor contributes nothing. Otherwise the candidate acceleration on
//! body i is checked against the ceiling using body i's pre-step velocity plus that
//! candidate alone; it is accumulated only if the predicted kinetic energy stays at
//! or under `kinetic_energy_limit`.
//!
//! The check does not see what other pairs already contributed in the same pass, so
//! it bounds each candidate rather than the body's final kinetic energy, and it is
//! asymmetric between (i, j) and (j, i).

use glam::DVec3;
use log::{trace, warn};

use crate::body::Body;
use crate::config::SimulationConfig;

/// Outcome of evaluating one ordered pair for body i
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairContribution {
    /// Separation at or below the distance floor, skipped
    TooClose,
    /// Candidate would exceed the kinetic-energy ceiling, discarded
    Rejected { predicted_kinetic_energy: f64 },
    /// Candidate acceleration accumulated into body i
    Accepted(DVec3),
}

/// Bookkeeping for one force pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForcePass {
    pub accepted: usize,
    pub rejected: usize,
    pub too_close: usize,
}

impl ForcePass {
    pub fn evaluated(&self) -> usize {
        self.accepted + self.rejected + self.too_close
    }
}

/// Evaluate the candidate acceleration that `other` would exert on `body`
pub fn pair_contribution(body: &Body, other: &Body, config: &SimulationConfig) -> PairContribution {
    let r = other.position - body.position;
    let distance = r.length();
    if distance <= config.min_distance {
        return PairContribution::TooClose;
    }

    // F = G * m_i * m_j / d^2 along r / d, divided by m_i
    let force_mag = config.gravitational_constant * body.mass() * other.mass() / (distance * distance);
    let candidate = r * (force_mag / (distance * body.mass()));

    let predicted_velocity = body.velocity + candidate * config.dt;
    let predicted_kinetic_energy = 0.5 * body.mass() * predicted_velocity.length_squared();

    if predicted_kinetic_energy <= config.kinetic_energy_limit {
        PairContribution::Accepted(candidate)
    } else {
        PairContribution::Rejected {
            predicted_kinetic_energy,
        }
    }
}

/// Reset every acceleration to zero, then accumulate accepted pairwise contributions
pub fn compute_accelerations(bodies: &mut [Body], config: &SimulationConfig) -> ForcePass {
    for body in bodies.iter_mut() {
        body.acceleration = DVec3::ZERO;
    }

    let n = bodies.len();
    let mut pass = ForcePass::default();

    for i in 0..n {
        let mut rejected_for_body = 0;

        for j in 0..n {
            if i == j {
                continue;
            }
            match pair_contribution(&bodies[i], &bodies[j], config) {
                PairContribution::Accepted(accel) => {
                    bodies[i].acceleration += accel;
                    pass.accepted += 1;
                }
                PairContribution::Rejected {
                    predicted_kinetic_energy,
                } => {
                    trace!(
                        "rejected pair ({}, {}): predicted kinetic energy {} exceeds {}",
                        i,
                        j,
                        predicted_kinetic_energy,
                        config.kinetic_energy_limit
                    );
                    rejected_for_body += 1;
                    pass.rejected += 1;
                }
                PairContribution::TooClose => {
                    pass.too_close += 1;
                }
            }
        }

        if n > 1 && rejected_for_body == n - 1 {
            warn!("every candidate for body {} was rejected by the kinetic-energy ceiling", i);
        }
    }

    pass
}
