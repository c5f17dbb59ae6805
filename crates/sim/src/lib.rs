//! Turn-based lunar descent engine.
//!
//! A [`SimulationEngine`] owns the lander configuration and state. The driving loop calls
//! [`SimulationEngine::step`] once per tick with the operator's [`BurnRequest`] until
//! [`SimulationEngine::is_landed`] holds, then asks for the [`LandingReport`].

pub mod burn;
pub mod engine;
pub mod report;

pub use burn::{BurnRequest, ClampReason};
pub use engine::{LanderState, SetupError, SimulationEngine, SimulationError, classify_landing};
pub use lander_config::LanderConfig;
pub use report::{ImpactCorrection, LandingReport, Outcome, StepReport};
