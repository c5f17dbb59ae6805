//! The driving loop: show telemetry, ask for a burn, step, repeat until touchdown.

use std::io;

use lander_sim::{
    BurnRequest, ClampReason, LandingReport, LanderState, SimulationEngine, SimulationError,
    StepReport,
};
use log::debug;
use thiserror::Error;

use crate::format::format_e10;
use crate::input::BurnSource;
use crate::output::{Console, LineKind};

const BURN_PROMPT: &str = "Enter fuel to burn this step (kg): ";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// One interactive descent.
pub struct Session<C: Console, B: BurnSource> {
    engine: SimulationEngine,
    console: C,
    burns: B,
}

impl<C: Console, B: BurnSource> Session<C, B> {
    pub fn new(engine: SimulationEngine, console: C, burns: B) -> Self {
        Self {
            engine,
            console,
            burns,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run until the lander is on the surface and render the landing report.
    pub fn run(&mut self) -> Result<LandingReport, SessionError> {
        self.console
            .line(LineKind::Header, "=== Vis Viva Moon Lander ===")?;
        self.console.line(
            LineKind::Info,
            "Try to land softly by applying thrust as fuel mass (kg).",
        )?;
        let vehicle = self.engine.vehicle();
        self.console.line(
            LineKind::Info,
            &format!(
                "Lander: dry {:.2} kg, propellant {:.2} kg, Isp {:.1} s, delta-v budget {:.2} m/s",
                vehicle.dry_mass_kg,
                vehicle.propellant_mass_kg,
                vehicle.isp_seconds(),
                vehicle.total_delta_v_m_s()
            ),
        )?;

        while !self.engine.is_landed() {
            render_state(&mut self.console, self.engine.state())?;

            self.console.prompt(BURN_PROMPT)?;
            let entry = self.burns.next_burn()?;
            if self.burns.echoes() {
                self.console
                    .line(LineKind::Telemetry, entry.as_deref().unwrap_or(""))?;
            }
            let request = entry
                .as_deref()
                .map(BurnRequest::parse)
                .unwrap_or(BurnRequest::Skip);
            debug!("operator entry {entry:?} -> {request:?}");

            let report = self.engine.step(request)?;
            render_step(&mut self.console, &report)?;
        }

        let report = self.engine.landing_report()?;
        render_landing(&mut self.console, &report)?;
        Ok(report)
    }
}

/// Altitude, velocity and fuel at the top of a tick.
pub fn render_state<C: Console>(console: &mut C, state: &LanderState) -> io::Result<()> {
    console.line(LineKind::Telemetry, "")?;
    console.line(
        LineKind::Telemetry,
        &format!("Altitude: {:.2} m", state.altitude_m),
    )?;
    console.line(
        LineKind::Telemetry,
        &format!("Velocity: {:.2} m/s", state.velocity_m_s),
    )?;
    console.line(
        LineKind::Telemetry,
        &format!("Fuel: {:.2} kg", state.fuel_mass_kg),
    )
}

/// Burn outcome and energy figures for a completed tick.
pub fn render_step<C: Console>(console: &mut C, report: &StepReport) -> io::Result<()> {
    match report.clamp {
        Some(ClampReason::Skipped) => console.line(LineKind::Warn, "Burn skipped.")?,
        Some(ClampReason::InvalidInput) => {
            console.line(LineKind::Error, "Invalid input. Burn skipped.")?
        }
        Some(ClampReason::InsufficientFuel) => {
            console.line(LineKind::Warn, "Not enough fuel. Burn skipped.")?
        }
        None => {}
    }

    let burned = match report.clamp {
        Some(reason) => format!(
            "Burned: {:.2} kg ({})",
            report.burn_applied_kg,
            reason.label()
        ),
        None => format!("Burned: {:.2} kg", report.burn_applied_kg),
    };
    console.line(LineKind::Telemetry, &burned)?;

    if let Some(energy) = report.interaction_energy_j {
        console.line(
            LineKind::Info,
            &format!(
                "Interaction Energy this burn (Vis Viva): {} J",
                format_e10(energy)
            ),
        )?;
    }
    console.line(
        LineKind::Info,
        &format!(
            "Remaining Fuel Interaction Energy: {} J",
            format_e10(report.remaining_fuel_interaction_energy_j)
        ),
    )
}

/// Touchdown summary.
pub fn render_landing<C: Console>(console: &mut C, report: &LandingReport) -> io::Result<()> {
    console.line(LineKind::Telemetry, "")?;
    console.line(LineKind::Header, "--- LANDING ---")?;
    console.line(
        LineKind::Telemetry,
        &format!("Final velocity: {:.2} m/s", report.final_velocity_m_s),
    )?;
    let outcome_kind = if report.outcome.is_safe() {
        LineKind::Success
    } else {
        LineKind::Error
    };
    console.line(outcome_kind, &report.outcome.to_string())?;
    console.line(
        LineKind::Info,
        &format!(
            "Theoretical Free-Fall Velocity: {:.2} m/s",
            report.theoretical_free_fall_velocity_m_s
        ),
    )?;
    console.line(
        LineKind::Info,
        &format!(
            "Exact Collision Energy (Vis Viva): {} J",
            format_e10(report.exact_impact_energy_j)
        ),
    )?;
    console.line(
        LineKind::Info,
        &format!(
            "Approximate Collision Energy (M ≫ m): {} J",
            format_e10(report.approx_impact_energy_j)
        ),
    )?;
    console.line(
        LineKind::Info,
        &format!(
            "Total Interaction Energy Delivered: {} J",
            format_e10(report.total_interaction_energy_j)
        ),
    )
}
