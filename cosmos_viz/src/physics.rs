//! Celestial physics calculations
//!
//! Pure functions computing escape velocity, surface gravity, Schwarzschild
//! radii, gravitational time dilation, and travel times from body mass and
//! radius. Masses in kg, radii and distances in km unless noted. Everything
//! here is stateless and safe to call from any thread.
//!
//! Degenerate input (zero or negative mass/radius) clamps to a safe sentinel
//! instead of panicking: a single bad body record must never stop the render
//! loop.

use common::constants::{C, G, KM_PER_LIGHT_YEAR, SCHWARZSCHILD_COEFF, SECONDS_PER_YEAR, SOLAR_MASS_KG};

use crate::catalog::CelestialBody;

/// Escape velocity at the surface in km/s: v = √(2GM/r)
pub fn escape_velocity(mass_kg: f64, radius_km: f64) -> f64 {
    if radius_km <= 0.0 {
        return 0.0;
    }
    (2.0 * G * mass_kg / (radius_km * 1000.0)).sqrt() / 1000.0
}

/// Surface gravity in m/s²: g = GM/r²
pub fn surface_gravity(mass_kg: f64, radius_km: f64) -> f64 {
    if radius_km <= 0.0 {
        return 0.0;
    }
    let r = radius_km * 1000.0;
    G * mass_kg / (r * r)
}

/// Schwarzschild radius in km: rs = 2GM/c²
pub fn schwarzschild_radius_km(mass_kg: f64) -> f64 {
    SCHWARZSCHILD_COEFF * mass_kg.max(0.0) / 1000.0
}

/// Gravitational time dilation factor at `extra_distance_km` above the
/// surface: √(1 − 2GM/rc²), in [0, 1].
///
/// Returns exactly 0.0 at or inside the event horizon, where the radicand
/// would go non-positive. The clamp keeps the per-frame path free of domain
/// errors.
pub fn time_dilation_factor(mass_kg: f64, radius_km: f64, extra_distance_km: f64) -> f64 {
    let r = (radius_km + extra_distance_km) * 1000.0;
    if r <= 0.0 {
        return 0.0;
    }

    let schwarzschild_term = 2.0 * G * mass_kg / (r * C * C);
    if schwarzschild_term >= 1.0 {
        return 0.0;
    }

    (1.0 - schwarzschild_term).sqrt().clamp(0.0, 1.0)
}

/// Percentage by which proper time runs slower than coordinate time
pub fn time_slowdown_percent(mass_kg: f64, radius_km: f64, extra_distance_km: f64) -> f64 {
    (1.0 - time_dilation_factor(mass_kg, radius_km, extra_distance_km)) * 100.0
}

/// Circular orbital velocity at `altitude_km` above the surface in km/s:
/// v = √(GM/(r+h))
pub fn orbital_velocity(mass_kg: f64, radius_km: f64, altitude_km: f64) -> f64 {
    let orbital_radius = (radius_km + altitude_km) * 1000.0;
    if orbital_radius <= 0.0 {
        return 0.0;
    }
    (G * mass_kg / orbital_radius).sqrt() / 1000.0
}

/// Travel duration broken out into display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTime {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

/// Travel time over `distance_km` at a constant fraction of light speed.
///
/// Zero speed yields infinite components; callers treat a stationary craft
/// as "no travel" before asking.
pub fn travel_time(distance_km: f64, speed_fraction_of_c: f64) -> TravelTime {
    let speed_km_s = C * speed_fraction_of_c / 1000.0;
    let seconds = distance_km / speed_km_s;

    TravelTime {
        seconds,
        minutes: seconds / 60.0,
        hours: seconds / 3600.0,
        days: seconds / 86_400.0,
        years: seconds / SECONDS_PER_YEAR,
    }
}

/// Per-body physics quantities computed once per tick for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsSummary {
    pub escape_velocity_km_s: f64,
    pub surface_gravity_m_s2: f64,
    pub schwarzschild_radius_km: f64,
    pub time_dilation_factor: f64,
    pub time_slowdown_percent: f64,
}

/// Evaluate the full physics summary for a body, with the observer at
/// `extra_distance_km` above the surface for the dilation terms.
pub fn compute_physics(body: &CelestialBody, extra_distance_km: f64) -> PhysicsSummary {
    PhysicsSummary {
        escape_velocity_km_s: escape_velocity(body.mass_kg, body.radius_km),
        surface_gravity_m_s2: surface_gravity(body.mass_kg, body.radius_km),
        schwarzschild_radius_km: schwarzschild_radius_km(body.mass_kg),
        time_dilation_factor: time_dilation_factor(body.mass_kg, body.radius_km, extra_distance_km),
        time_slowdown_percent: time_slowdown_percent(body.mass_kg, body.radius_km, extra_distance_km),
    }
}

/// Format a large quantity with a K/M/B/T suffix for HUD display
pub fn format_quantity(value: f64, precision: usize) -> String {
    let (scaled, suffix) = if value >= 1e12 {
        (value / 1e12, "T")
    } else if value >= 1e9 {
        (value / 1e9, "B")
    } else if value >= 1e6 {
        (value / 1e6, "M")
    } else if value >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    format!("{:.*}{}", precision, scaled, suffix)
}

/// Kilometers to light-years
pub fn km_to_light_years(km: f64) -> f64 {
    km / KM_PER_LIGHT_YEAR
}

/// Light-years to kilometers
pub fn light_years_to_km(ly: f64) -> f64 {
    ly * KM_PER_LIGHT_YEAR
}

/// Kilograms to solar masses
pub fn kg_to_solar_masses(kg: f64) -> f64 {
    kg / SOLAR_MASS_KG
}

/// Solar masses to kilograms
pub fn solar_masses_to_kg(solar_masses: f64) -> f64 {
    solar_masses * SOLAR_MASS_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUN_MASS: f64 = 1.989e30;
    const SUN_RADIUS: f64 = 696_000.0;
    const EARTH_MASS: f64 = 5.972e24;
    const EARTH_RADIUS: f64 = 6371.0;

    #[test]
    fn escape_velocity_matches_surface_gravity_identity() {
        // v_esc = √(2 g r) must hold between the two formulas
        for &(m, r) in &[(SUN_MASS, SUN_RADIUS), (EARTH_MASS, EARTH_RADIUS), (7.342e22, 1737.4)] {
            let v = escape_velocity(m, r);
            let g = surface_gravity(m, r);
            let v_from_g = (2.0 * g * r * 1000.0).sqrt() / 1000.0;
            assert!(
                (v - v_from_g).abs() < 1e-9 * v,
                "identity broken for m={m}, r={r}: {v} vs {v_from_g}"
            );
        }
    }

    #[test]
    fn sun_reference_values() {
        assert!((escape_velocity(SUN_MASS, SUN_RADIUS) - 617.5).abs() < 1.0);
        assert!((surface_gravity(SUN_MASS, SUN_RADIUS) - 274.0).abs() < 1.0);
        assert!((schwarzschild_radius_km(SUN_MASS) - 2.95).abs() < 0.01);
    }

    #[test]
    fn earth_dilation_is_negligible() {
        let factor = time_dilation_factor(EARTH_MASS, EARTH_RADIUS, 0.0);
        assert!(factor > 0.999_999_998 && factor < 1.0, "got {factor}");
        assert!(time_slowdown_percent(EARTH_MASS, EARTH_RADIUS, 0.0) < 1e-4);
    }

    #[test]
    fn dilation_monotonic_in_distance() {
        let mass = 4.27e31; // stellar black hole
        let radius = schwarzschild_radius_km(mass);
        let mut last = time_dilation_factor(mass, radius, 0.0);
        for extra in [1.0, 10.0, 100.0, 1e4, 1e6, 1e9] {
            let f = time_dilation_factor(mass, radius, extra);
            assert!(f >= last, "dilation decreased at extra={extra}");
            last = f;
        }
    }

    #[test]
    fn dilation_clamps_to_zero_inside_horizon() {
        let mass = 4.27e31;
        let rs = schwarzschild_radius_km(mass);
        // At the horizon the radicand collapses; unit round-trips may leave
        // it a few ulps positive, so allow a vanishing residue there
        assert!(time_dilation_factor(mass, rs, 0.0) < 1e-6);
        assert_eq!(time_dilation_factor(mass, rs * 0.5, 0.0), 0.0);
        assert_eq!(time_dilation_factor(mass, rs * 0.99, 0.0), 0.0);
        assert!(time_dilation_factor(mass, rs * 1.01, 0.0) > 0.0);
    }

    #[test]
    fn degenerate_input_clamps_instead_of_panicking() {
        assert_eq!(escape_velocity(EARTH_MASS, 0.0), 0.0);
        assert_eq!(escape_velocity(EARTH_MASS, -10.0), 0.0);
        assert_eq!(surface_gravity(EARTH_MASS, 0.0), 0.0);
        assert_eq!(schwarzschild_radius_km(-1.0), 0.0);
        assert_eq!(time_dilation_factor(EARTH_MASS, -10.0, 5.0), 0.0);
        assert_eq!(orbital_velocity(EARTH_MASS, 0.0, 0.0), 0.0);
    }

    #[test]
    fn travel_time_one_light_year_at_c() {
        let t = travel_time(light_years_to_km(1.0), 1.0);
        assert!((t.years - 1.0).abs() < 0.01, "got {} years", t.years);
        assert!((t.seconds / 60.0 - t.minutes).abs() < 1e-6);
        assert!((t.hours * 3600.0 - t.seconds).abs() < 1.0);
    }

    #[test]
    fn orbital_velocity_low_earth_orbit() {
        // ISS altitude, roughly 7.7 km/s
        let v = orbital_velocity(EARTH_MASS, EARTH_RADIUS, 400.0);
        assert!((v - 7.67).abs() < 0.05, "got {v}");
    }

    #[test]
    fn quantity_formatting() {
        assert_eq!(format_quantity(1.989e12, 2), "1.99T");
        assert_eq!(format_quantity(5.5e6, 1), "5.5M");
        assert_eq!(format_quantity(1234.0, 2), "1.23K");
        assert_eq!(format_quantity(42.0, 0), "42");
    }
}
