//! Per-tick and end-of-run reports handed to the presentation layer.

use std::fmt;

use crate::burn::ClampReason;

/// What happened when the lander crossed the surface during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactCorrection {
    /// Altitude stayed non-negative; nothing to correct.
    NotNeeded,
    /// Surface crossing found `dt_impact_s` into the tick; velocity is the exact impact velocity.
    Applied { dt_impact_s: f64 },
    /// The impact quadratic had no real root. Altitude was floored without correcting velocity.
    Degenerate,
}

/// Everything needed to render one tick of telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub burn_applied_kg: f64,
    pub clamp: Option<ClampReason>,
    pub delta_v_m_s: f64,
    /// Energy delivered to the expelled propellant; `None` when nothing was burned.
    pub interaction_energy_j: Option<f64>,
    pub remaining_fuel_interaction_energy_j: f64,
    pub impact: ImpactCorrection,
    pub altitude_m: f64,
    pub velocity_m_s: f64,
    pub fuel_mass_kg: f64,
}

/// Landing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Safe,
    Crash,
}

impl Outcome {
    pub fn is_safe(self) -> bool {
        matches!(self, Outcome::Safe)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Safe => write!(f, "SAFE landing."),
            Outcome::Crash => write!(f, "CRASH landing."),
        }
    }
}

/// Summary computed once the lander is on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingReport {
    pub final_velocity_m_s: f64,
    pub final_lander_mass_kg: f64,
    pub outcome: Outcome,
    pub theoretical_free_fall_velocity_m_s: f64,
    /// Collision energy with the Moon as a finite second body.
    pub exact_impact_energy_j: f64,
    /// Collision energy in the infinite-Moon-mass limit.
    pub approx_impact_energy_j: f64,
    pub total_interaction_energy_j: f64,
    pub steps: u64,
}
