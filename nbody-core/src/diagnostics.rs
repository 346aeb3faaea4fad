//! Energy diagnostics
//!
//! Summarizes how well a run conserved energy.

use std::fmt;

use crate::energy::EnergySample;
use crate::simulation::SimulationResult;

/// Summary of total-energy behaviour over a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub steps: usize,
    pub initial_total: f64,
    pub final_total: f64,
    pub min_total: f64,
    pub max_total: f64,
    /// Largest |E_k - E_0| / |E_0| seen at any step
    pub max_relative_drift: f64,
}

impl EnergyReport {
    pub fn new(initial: EnergySample, result: &SimulationResult) -> Self {
        let initial_total = initial.total();
        let totals = result.total_energy();

        let final_total = totals.last().copied().unwrap_or(initial_total);
        let min_total = totals.iter().copied().fold(initial_total, f64::min);
        let max_total = totals.iter().copied().fold(initial_total, f64::max);
        let max_relative_drift = result
            .relative_energy_drift(initial_total)
            .into_iter()
            .fold(0.0, f64::max);

        Self {
            steps: totals.len(),
            initial_total,
            final_total,
            min_total,
            max_total,
            max_relative_drift,
        }
    }

    /// Relative drift of the last sample
    pub fn final_relative_drift(&self) -> f64 {
        let scale = self.initial_total.abs();
        let diff = (self.final_total - self.initial_total).abs();
        if scale > 0.0 {
            diff / scale
        } else {
            diff
        }
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "steps           = {}", self.steps)?;
        writeln!(f, "initial total   = {:.12e}", self.initial_total)?;
        writeln!(f, "final total     = {:.12e}", self.final_total)?;
        writeln!(f, "total range     = [{:.12e}, {:.12e}]", self.min_total, self.max_total)?;
        writeln!(f, "final drift     = {:.6}%", 100.0 * self.final_relative_drift())?;
        write!(f, "max drift       = {:.6}%", 100.0 * self.max_relative_drift)
    }
}
