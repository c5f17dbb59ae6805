//! The stepping engine: burn, propagate, correct for surface impact.

use lander_config::LanderConfig;
use lander_core::constants::{MOON_MASS_KG, SAFE_LANDING_VELOCITY_M_S};
use lander_core::energy::{kinetic_energy, two_body_energy};
use lander_core::kinematics::{free_fall_impact_velocity, propagate, time_to_surface};
use lander_propulsion::{Vehicle, exhaust_interaction_energy, impulsive_burn};
use log::{debug, info, warn};
use thiserror::Error;

use crate::burn::{BurnRequest, clamp_burn};
use crate::report::{ImpactCorrection, LandingReport, Outcome, StepReport};

/// Configuration rejected before a run can start.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("Initial velocity must be downward or zero for valid simulation.")]
    PositiveInitialVelocity(f64),
    #[error("configuration value `{0}` is not a finite number")]
    NonFinite(&'static str),
    #[error("initial altitude must be positive (got {0} m)")]
    NonPositiveAltitude(f64),
    #[error("dry mass must be positive (got {0} kg)")]
    NonPositiveDryMass(f64),
    #[error("lander mass {lander_mass_kg} kg must exceed dry mass {dry_mass_kg} kg")]
    NoPropellant {
        lander_mass_kg: f64,
        dry_mass_kg: f64,
    },
    #[error("exhaust velocity must be positive (got {0} m/s)")]
    NonPositiveExhaustVelocity(f64),
    #[error("gravity must point downward (got {0} m/s²)")]
    NonDownwardGravity(f64),
    #[error("time step must be positive (got {0} s)")]
    NonPositiveTimeStep(f64),
}

/// Protocol misuse: stepping after touchdown or reporting before it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error("the lander has already landed")]
    AlreadyLanded,
    #[error("the lander has not landed yet")]
    NotLanded,
}

/// Mutable state of a run. Altitude is never negative between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanderState {
    pub altitude_m: f64,
    pub velocity_m_s: f64,
    pub fuel_mass_kg: f64,
    pub total_interaction_energy_j: f64,
    pub steps: u64,
}

impl LanderState {
    fn initial(config: &LanderConfig) -> Self {
        Self {
            altitude_m: config.initial_altitude_m,
            velocity_m_s: config.initial_velocity_m_s,
            fuel_mass_kg: config.propellant_mass_kg(),
            total_interaction_energy_j: 0.0,
            steps: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: LanderConfig,
    state: LanderState,
    theoretical_free_fall_velocity_m_s: f64,
}

impl SimulationEngine {
    /// Validate `config` and set up the initial state.
    pub fn new(config: LanderConfig) -> Result<Self, SetupError> {
        validate(&config)?;

        let theoretical_free_fall_velocity_m_s = free_fall_impact_velocity(
            config.initial_altitude_m,
            config.initial_velocity_m_s,
            config.gravity_m_s2,
        );
        info!(
            "engine ready: altitude {} m, velocity {} m/s, propellant {} kg",
            config.initial_altitude_m,
            config.initial_velocity_m_s,
            config.propellant_mass_kg()
        );

        Ok(Self {
            state: LanderState::initial(&config),
            config,
            theoretical_free_fall_velocity_m_s,
        })
    }

    pub fn config(&self) -> &LanderConfig {
        &self.config
    }

    pub fn state(&self) -> &LanderState {
        &self.state
    }

    /// Vehicle description at the start of the run.
    pub fn vehicle(&self) -> Vehicle {
        Vehicle {
            dry_mass_kg: self.config.dry_mass_kg,
            propellant_mass_kg: self.config.propellant_mass_kg(),
            exhaust_velocity_m_s: self.config.exhaust_velocity_m_s,
        }
    }

    /// Impact speed with no propulsion at all, fixed at construction.
    pub fn theoretical_free_fall_velocity(&self) -> f64 {
        self.theoretical_free_fall_velocity_m_s
    }

    pub fn is_landed(&self) -> bool {
        self.state.altitude_m == 0.0
    }

    /// Advance the simulation by one tick.
    ///
    /// The burn is applied as an instantaneous delta-v at the start of the tick, then the lander
    /// coasts under gravity for `time_step_s`. If it reaches the surface mid-tick, velocity is
    /// replaced by the exact impact velocity and altitude pinned to zero.
    pub fn step(&mut self, request: impl Into<BurnRequest>) -> Result<StepReport, SimulationError> {
        if self.is_landed() {
            return Err(SimulationError::AlreadyLanded);
        }

        let cfg = &self.config;
        let state = &mut self.state;

        let (burn_kg, clamp) = clamp_burn(request.into(), state.fuel_mass_kg);

        let mut delta_v = 0.0;
        let mut interaction_energy = None;
        if burn_kg > 0.0 {
            let burn = impulsive_burn(
                cfg.dry_mass_kg,
                state.fuel_mass_kg,
                burn_kg,
                cfg.exhaust_velocity_m_s,
            );
            state.fuel_mass_kg -= burn_kg;
            state.total_interaction_energy_j += burn.interaction_energy_j;
            delta_v = burn.delta_v_m_s;
            interaction_energy = Some(burn.interaction_energy_j);
        }

        let current_mass = cfg.dry_mass_kg + state.fuel_mass_kg;
        let remaining_fuel_energy =
            exhaust_interaction_energy(cfg.exhaust_velocity_m_s, current_mass, state.fuel_mass_kg);

        state.velocity_m_s += delta_v;

        let prev_altitude = state.altitude_m;
        let prev_velocity = state.velocity_m_s;
        (state.altitude_m, state.velocity_m_s) = propagate(
            prev_altitude,
            prev_velocity,
            cfg.gravity_m_s2,
            cfg.time_step_s,
        );

        let mut impact = ImpactCorrection::NotNeeded;
        if state.altitude_m < 0.0 {
            match time_to_surface(prev_altitude, prev_velocity, cfg.gravity_m_s2) {
                Some(dt_impact_s) => {
                    state.velocity_m_s = prev_velocity + cfg.gravity_m_s2 * dt_impact_s;
                    state.altitude_m = 0.0;
                    impact = ImpactCorrection::Applied { dt_impact_s };
                }
                None => {
                    warn!(
                        "no real surface crossing from altitude {prev_altitude} m at {prev_velocity} m/s; \
                         skipping impact correction"
                    );
                    impact = ImpactCorrection::Degenerate;
                }
            }
        }
        if state.altitude_m < 0.0 {
            state.altitude_m = 0.0;
        }
        state.steps = state.steps.saturating_add(1);

        debug!(
            "tick {}: burn {burn_kg} kg, dv {delta_v:.3} m/s, altitude {:.3} m, velocity {:.3} m/s, fuel {:.3} kg",
            state.steps, state.altitude_m, state.velocity_m_s, state.fuel_mass_kg
        );
        if state.altitude_m == 0.0 {
            info!(
                "touchdown after {} ticks at {:.3} m/s",
                state.steps, state.velocity_m_s
            );
        }

        Ok(StepReport {
            burn_applied_kg: burn_kg,
            clamp,
            delta_v_m_s: delta_v,
            interaction_energy_j: interaction_energy,
            remaining_fuel_interaction_energy_j: remaining_fuel_energy,
            impact,
            altitude_m: state.altitude_m,
            velocity_m_s: state.velocity_m_s,
            fuel_mass_kg: state.fuel_mass_kg,
        })
    }

    /// Final figures for a completed descent.
    pub fn landing_report(&self) -> Result<LandingReport, SimulationError> {
        if !self.is_landed() {
            return Err(SimulationError::NotLanded);
        }

        let velocity = self.state.velocity_m_s;
        let final_mass = self.config.dry_mass_kg + self.state.fuel_mass_kg;

        Ok(LandingReport {
            final_velocity_m_s: velocity,
            final_lander_mass_kg: final_mass,
            outcome: classify_landing(velocity),
            theoretical_free_fall_velocity_m_s: self.theoretical_free_fall_velocity_m_s,
            exact_impact_energy_j: two_body_energy(MOON_MASS_KG, final_mass, velocity),
            approx_impact_energy_j: kinetic_energy(final_mass, velocity),
            total_interaction_energy_j: self.state.total_interaction_energy_j,
            steps: self.state.steps,
        })
    }
}

/// Touchdowns at or above the safe threshold survive.
pub fn classify_landing(velocity_m_s: f64) -> Outcome {
    if velocity_m_s >= SAFE_LANDING_VELOCITY_M_S {
        Outcome::Safe
    } else {
        Outcome::Crash
    }
}

fn validate(cfg: &LanderConfig) -> Result<(), SetupError> {
    let fields = [
        ("initial_altitude_m", cfg.initial_altitude_m),
        ("initial_velocity_m_s", cfg.initial_velocity_m_s),
        ("lander_mass_kg", cfg.lander_mass_kg),
        ("dry_mass_kg", cfg.dry_mass_kg),
        ("exhaust_velocity_m_s", cfg.exhaust_velocity_m_s),
        ("gravity_m_s2", cfg.gravity_m_s2),
        ("time_step_s", cfg.time_step_s),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(SetupError::NonFinite(name));
    }

    if cfg.initial_velocity_m_s > 0.0 {
        return Err(SetupError::PositiveInitialVelocity(cfg.initial_velocity_m_s));
    }
    if cfg.initial_altitude_m <= 0.0 {
        return Err(SetupError::NonPositiveAltitude(cfg.initial_altitude_m));
    }
    if cfg.dry_mass_kg <= 0.0 {
        return Err(SetupError::NonPositiveDryMass(cfg.dry_mass_kg));
    }
    if cfg.lander_mass_kg <= cfg.dry_mass_kg {
        return Err(SetupError::NoPropellant {
            lander_mass_kg: cfg.lander_mass_kg,
            dry_mass_kg: cfg.dry_mass_kg,
        });
    }
    if cfg.exhaust_velocity_m_s <= 0.0 {
        return Err(SetupError::NonPositiveExhaustVelocity(
            cfg.exhaust_velocity_m_s,
        ));
    }
    if cfg.gravity_m_s2 >= 0.0 {
        return Err(SetupError::NonDownwardGravity(cfg.gravity_m_s2));
    }
    if cfg.time_step_s <= 0.0 {
        return Err(SetupError::NonPositiveTimeStep(cfg.time_step_s));
    }
    Ok(())
}
