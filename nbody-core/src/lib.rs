pub mod body;
pub mod config;
pub mod diagnostics;
pub mod energy;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod simulation;

pub use body::Body;
pub use config::{BodyConfig, SimulationConfig};
pub use diagnostics::EnergyReport;
pub use energy::{kinetic_energy, potential_energy, EnergySample};
pub use error::{ConfigError, EnergyError, EnergyKind};
pub use forces::{compute_accelerations, pair_contribution, ForcePass, PairContribution};
pub use scenario::{Preset, Scenario};
pub use simulation::{SimulationResult, System};
