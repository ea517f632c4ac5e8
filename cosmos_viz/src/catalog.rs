//! Celestial body catalog with real astronomical data
//!
//! Masses in kg, radii in km. Records are built once at startup and are
//! read-only to the engine; selecting a different body swaps the whole
//! record.

/// Physical classification of a celestial body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    RockyPlanet,
    Moon,
    Star,
    CompactRemnant,
    BlackHole,
    WhiteDwarf,
}

/// A celestial body available for visualization
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub key: String,
    pub name: String,
    pub body_type: BodyType,
    pub mass_kg: f64,
    pub radius_km: f64,
    pub color: [f32; 4],
    pub distance_from_earth_km: f64,
    pub missions: Vec<String>,
}

impl CelestialBody {
    pub fn new(
        key: &str,
        name: &str,
        body_type: BodyType,
        mass_kg: f64,
        radius_km: f64,
        color: [f32; 4],
    ) -> Self {
        debug_assert!(mass_kg > 0.0, "body {key} has non-positive mass");
        debug_assert!(radius_km > 0.0, "body {key} has non-positive radius");

        Self {
            key: key.to_string(),
            name: name.to_string(),
            body_type,
            mass_kg,
            radius_km,
            color,
            distance_from_earth_km: 0.0,
            missions: Vec::new(),
        }
    }

    pub fn at_distance(mut self, distance_from_earth_km: f64) -> Self {
        self.distance_from_earth_km = distance_from_earth_km;
        self
    }

    pub fn with_missions(mut self, missions: &[&str]) -> Self {
        self.missions = missions.iter().map(|m| m.to_string()).collect();
        self
    }
}

/// The body catalog, keyed lookup over the built-in data set
pub struct Catalog {
    pub bodies: Vec<CelestialBody>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Build the default catalog
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.bodies.push(
            CelestialBody::new(
                "sun",
                "Sun",
                BodyType::Star,
                1.989e30,
                696_000.0,
                [1.0, 0.95, 0.8, 1.0],
            )
            .at_distance(1.496e8)
            .with_missions(&["Parker Solar Probe", "Solar Orbiter", "SOHO"]),
        );

        catalog.bodies.push(CelestialBody::new(
            "earth",
            "Earth",
            BodyType::RockyPlanet,
            5.972e24,
            6371.0,
            [0.2, 0.4, 0.8, 1.0],
        ));

        catalog.bodies.push(
            CelestialBody::new(
                "moon",
                "Moon",
                BodyType::Moon,
                7.342e22,
                1737.4,
                [0.8, 0.8, 0.8, 1.0],
            )
            .at_distance(384_400.0)
            .with_missions(&["Apollo 11", "Chang'e 4", "Artemis I"]),
        );

        catalog.bodies.push(
            CelestialBody::new(
                "mars",
                "Mars",
                BodyType::RockyPlanet,
                6.417e23,
                3389.5,
                [0.8, 0.4, 0.2, 1.0],
            )
            .at_distance(2.25e8)
            .with_missions(&["Viking 1", "Curiosity", "Perseverance"]),
        );

        catalog.bodies.push(
            CelestialBody::new(
                "sirius_b",
                "Sirius B",
                BodyType::WhiteDwarf,
                2.063e30,
                5850.0,
                [0.85, 0.9, 1.0, 1.0],
            )
            .at_distance(8.15e13),
        );

        catalog.bodies.push(
            CelestialBody::new(
                "crab_pulsar",
                "Crab Pulsar",
                BodyType::CompactRemnant,
                2.8e30,
                10.0,
                [0.6, 0.8, 1.0, 1.0],
            )
            .at_distance(6.15e16),
        );

        catalog.bodies.push(
            CelestialBody::new(
                "cygnus_x1",
                "Cygnus X-1",
                BodyType::BlackHole,
                4.27e31,
                63.0,
                [0.05, 0.05, 0.1, 1.0],
            )
            .at_distance(6.9e16),
        );

        catalog.bodies.push(
            CelestialBody::new(
                "sagittarius_a",
                "Sagittarius A*",
                BodyType::BlackHole,
                8.26e36,
                1.227e7,
                [0.02, 0.02, 0.08, 1.0],
            )
            .at_distance(2.52e17),
        );

        catalog
    }

    /// Find a body by key
    pub fn get(&self, key: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.key == key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
