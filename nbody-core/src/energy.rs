//! Kinetic and gravitational potential energy of a configuration

use crate::body::Body;
use crate::error::{EnergyError, EnergyKind};

/// Sum of 0.5 * m * |v|^2 over all bodies
pub fn kinetic_energy(bodies: &[Body]) -> Result<f64, EnergyError> {
    let total: f64 = bodies.iter().map(Body::kinetic_energy).sum();
    if !total.is_finite() {
        return Err(EnergyError::NonFinite {
            kind: EnergyKind::Kinetic,
            value: total,
        });
    }
    Ok(total)
}

/// Sum of -G * m_i * m_j / d over unordered pairs i < j
///
/// No distance floor is applied here. A pair at zero separation makes the sum
/// undefined and is reported as [`EnergyError::CoincidentBodies`].
pub fn potential_energy(bodies: &[Body], gravitational_constant: f64) -> Result<f64, EnergyError> {
    let mut total = 0.0;

    for (i, bi) in bodies.iter().enumerate() {
        for (j, bj) in bodies.iter().enumerate().skip(i + 1) {
            let distance = bi.position.distance(bj.position);
            if distance == 0.0 {
                return Err(EnergyError::CoincidentBodies {
                    first: i,
                    second: j,
                });
            }
            total -= gravitational_constant * bi.mass() * bj.mass() / distance;
        }
    }

    if !total.is_finite() {
        return Err(EnergyError::NonFinite {
            kind: EnergyKind::Potential,
            value: total,
        });
    }
    Ok(total)
}

/// Kinetic and potential energy sampled at the same instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergySample {
    pub fn measure(bodies: &[Body], gravitational_constant: f64) -> Result<Self, EnergyError> {
        Ok(Self {
            kinetic: kinetic_energy(bodies)?,
            potential: potential_energy(bodies, gravitational_constant)?,
        })
    }

    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}
