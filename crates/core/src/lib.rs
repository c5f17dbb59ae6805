//! Core constants and shared primitives for the lunar lander workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²), used for specific impulse conversions.
    pub const G0: f64 = 9.80665;
    /// Mass of the Moon (kg), the reference body for impact energies.
    pub const MOON_MASS_KG: f64 = 7.35e22;
    /// Slowest vertical velocity (m/s, negative = downward) still counted as a safe touchdown.
    pub const SAFE_LANDING_VELOCITY_M_S: f64 = -5.0;
}

/// Two-body energy relations.
pub mod energy {
    /// Reduced mass of an isolated two-body pair.
    #[inline]
    pub fn reduced_mass(m1: f64, m2: f64) -> f64 {
        (m1 * m2) / (m1 + m2)
    }

    /// Kinetic energy of the relative motion of two bodies (vis viva, reduced-mass form).
    #[inline]
    pub fn two_body_energy(m1: f64, m2: f64, relative_velocity: f64) -> f64 {
        0.5 * reduced_mass(m1, m2) * relative_velocity * relative_velocity
    }

    /// Kinetic energy of a single mass, the `m2 → ∞` limit of [`two_body_energy`].
    #[inline]
    pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
        0.5 * mass * velocity * velocity
    }
}

/// One-dimensional constant-acceleration kinematics.
///
/// Positions are altitudes above the surface and velocities are signed with
/// negative meaning downward, so a descending body has `acceleration < 0`.
pub mod kinematics {
    /// Advance altitude and velocity by `dt` under constant `acceleration`.
    #[inline]
    pub fn propagate(altitude: f64, velocity: f64, acceleration: f64, dt: f64) -> (f64, f64) {
        (
            altitude + velocity * dt + 0.5 * acceleration * dt * dt,
            velocity + acceleration * dt,
        )
    }

    /// Time after which a body at `altitude` moving at `velocity` reaches the surface.
    ///
    /// Solves `0.5·a·t² + v·t + h = 0` using the root `(-v - √D) / (2·0.5·a)`, which is the
    /// forward crossing for `a < 0`. Returns `None` when the discriminant is negative.
    pub fn time_to_surface(altitude: f64, velocity: f64, acceleration: f64) -> Option<f64> {
        let a = 0.5 * acceleration;
        let b = velocity;
        let c = altitude;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }

    /// Signed impact velocity after unpowered fall from `altitude` starting at `velocity`.
    ///
    /// Carries the sign of `acceleration`, so a body falling under negative gravity reports a
    /// negative speed.
    pub fn free_fall_impact_velocity(altitude: f64, velocity: f64, acceleration: f64) -> f64 {
        acceleration.signum() * (velocity * velocity + 2.0 * acceleration.abs() * altitude).sqrt()
    }
}
