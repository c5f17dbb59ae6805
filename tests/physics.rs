use lunar_lander::physics::constants::{G0, MOON_MASS_KG};
use lunar_lander::physics::energy::{kinetic_energy, reduced_mass, two_body_energy};
use lunar_lander::physics::kinematics::{free_fall_impact_velocity, propagate, time_to_surface};
use lunar_lander::propulsion::{Vehicle, impulsive_burn, rocket_delta_v};

#[test]
fn reduced_mass_approaches_lighter_body() {
    assert!((reduced_mass(2.0, 2.0) - 1.0).abs() < 1e-12);
    let mu = reduced_mass(MOON_MASS_KG, 1000.0);
    assert!((mu - 1000.0).abs() < 1e-9);
    let exact = two_body_energy(MOON_MASS_KG, 1000.0, -10.0);
    let approx = kinetic_energy(1000.0, -10.0);
    assert!((approx - 50_000.0).abs() < 1e-9);
    assert!((exact - approx).abs() < 1e-6);
}

#[test]
fn propagation_matches_constant_acceleration() {
    let (altitude, velocity) = propagate(100.0, -10.0, -1.62, 2.0);
    assert!((altitude - (100.0 - 20.0 - 3.24)).abs() < 1e-12);
    assert!((velocity - (-13.24)).abs() < 1e-12);
}

#[test]
fn time_to_surface_finds_forward_crossing() {
    let t = time_to_surface(1.0, -5.0, -1.62).expect("real root");
    assert!(t > 0.0 && t < 1.0);
    let residual = 0.5 * -1.62 * t * t - 5.0 * t + 1.0;
    assert!(residual.abs() < 1e-12);

    // Already on the surface: zero time.
    let t = time_to_surface(0.0, -3.0, -1.62).expect("real root");
    assert!(t.abs() < 1e-12);
}

#[test]
fn time_to_surface_reports_missing_root() {
    // Upward gravity with a body rising away from the surface never comes back.
    assert_eq!(time_to_surface(10.0, 0.0, 1.0), None);
}

#[test]
fn free_fall_velocity_is_signed_by_gravity() {
    let v = free_fall_impact_velocity(500.0, -50.0, -1.62);
    assert!((v + 4120.0_f64.sqrt()).abs() < 1e-12);
    assert!((v + 64.19).abs() < 0.01);
}

#[test]
fn rocket_equation_reference_case() {
    let dv = rocket_delta_v(2500.0, 1000.0, 950.0);
    assert!((dv - 128.2).abs() < 0.1, "dv = {dv}");

    let burn = impulsive_burn(800.0, 200.0, 50.0, 2500.0);
    assert_eq!(burn.initial_mass_kg, 1000.0);
    assert_eq!(burn.final_mass_kg, 950.0);
    assert_eq!(burn.delta_v_m_s, dv);
    assert!((burn.interaction_energy_j - 0.5 * 47.5 * 2500.0 * 2500.0).abs() < 1e-3);
}

#[test]
fn vehicle_budget() {
    let vehicle = Vehicle {
        dry_mass_kg: 800.0,
        propellant_mass_kg: 200.0,
        exhaust_velocity_m_s: 2500.0,
    };
    assert_eq!(vehicle.initial_mass_kg(), 1000.0);
    assert!((vehicle.isp_seconds() - 2500.0 / G0).abs() < 1e-12);
    let expected = 2500.0 * (1000.0_f64 / 800.0).ln();
    assert!((vehicle.total_delta_v_m_s() - expected).abs() < 1e-9);
}
