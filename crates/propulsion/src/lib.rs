//! Vehicle mass properties and the ideal rocket equation.

use lander_core::constants::G0;
use lander_core::energy::two_body_energy;

/// Basic vehicle definition: structure, propellant load and engine performance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub dry_mass_kg: f64,
    pub propellant_mass_kg: f64,
    pub exhaust_velocity_m_s: f64,
}

impl Vehicle {
    /// Convenience accessor for total initial mass.
    pub fn initial_mass_kg(&self) -> f64 {
        self.dry_mass_kg + self.propellant_mass_kg
    }

    /// Specific impulse equivalent of the exhaust velocity.
    pub fn isp_seconds(&self) -> f64 {
        self.exhaust_velocity_m_s / G0
    }

    /// Delta-v available if the whole propellant load is burned.
    pub fn total_delta_v_m_s(&self) -> f64 {
        rocket_delta_v(
            self.exhaust_velocity_m_s,
            self.initial_mass_kg(),
            self.dry_mass_kg,
        )
    }
}

/// Ideal rocket equation: `Δv = vₑ · ln(m₀ / m_f)`.
#[inline]
pub fn rocket_delta_v(exhaust_velocity_m_s: f64, initial_mass_kg: f64, final_mass_kg: f64) -> f64 {
    exhaust_velocity_m_s * (initial_mass_kg / final_mass_kg).ln()
}

/// Energy imparted to `expelled_mass_kg` of propellant pushed off a `vehicle_mass_kg` body,
/// treating the two as an isolated pair separating at the exhaust velocity.
#[inline]
pub fn exhaust_interaction_energy(
    exhaust_velocity_m_s: f64,
    vehicle_mass_kg: f64,
    expelled_mass_kg: f64,
) -> f64 {
    two_body_energy(vehicle_mass_kg, expelled_mass_kg, exhaust_velocity_m_s)
}

/// Result of expelling propellant in a single impulsive burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulsiveBurn {
    pub initial_mass_kg: f64,
    pub final_mass_kg: f64,
    pub delta_v_m_s: f64,
    pub interaction_energy_j: f64,
}

/// Burn `burn_kg` of propellant from a vehicle currently carrying `fuel_kg`.
///
/// The caller is responsible for keeping `0 < burn_kg <= fuel_kg`.
pub fn impulsive_burn(
    dry_mass_kg: f64,
    fuel_kg: f64,
    burn_kg: f64,
    exhaust_velocity_m_s: f64,
) -> ImpulsiveBurn {
    let initial_mass = dry_mass_kg + fuel_kg;
    let final_mass = dry_mass_kg + (fuel_kg - burn_kg);
    ImpulsiveBurn {
        initial_mass_kg: initial_mass,
        final_mass_kg: final_mass,
        delta_v_m_s: rocket_delta_v(exhaust_velocity_m_s, initial_mass, final_mass),
        interaction_energy_j: exhaust_interaction_energy(
            exhaust_velocity_m_s,
            final_mass,
            burn_kg,
        ),
    }
}
