use glam::DVec3;

/// A point mass in the simulation
///
/// Position and velocity are mutated in place by the integrator. Acceleration is
/// rebuilt from scratch on every force pass. Mass is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: DVec3,
    pub velocity: DVec3,
    pub acceleration: DVec3,
    mass: f64,
}

impl Body {
    pub fn new(position: DVec3, velocity: DVec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration: DVec3::ZERO,
            mass,
        }
    }

    /// A body with zero initial velocity
    pub fn at_rest(position: DVec3, mass: f64) -> Self {
        Self::new(position, DVec3::ZERO, mass)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// 0.5 * m * |v|^2 for this body alone
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
