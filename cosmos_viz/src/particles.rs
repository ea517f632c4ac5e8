//! Particle effects attached to celestial bodies
//!
//! Each effect kind owns a fixed-capacity particle buffer for one body.
//! Expired particles are re-emitted in place, so the buffer never grows or
//! shrinks and the per-frame advance path allocates nothing. Positions are
//! in normalized scene units with the body at the origin and Y as the polar
//! axis.

use bytemuck::Zeroable;
use glam::Vec3;
use rand::Rng;

use common::ParticleInstance;

use crate::catalog::{BodyType, CelestialBody};

/// Inward pull applied to accretion-disk particles. Visualization tuning,
/// not derived physics.
pub const DISK_GRAVITY: f32 = 0.5;

/// Inside this planar radius the disk force is skipped
pub const DISK_CORE_RADIUS: f32 = 0.1;

/// Visual effect kinds a body can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    StellarWind,
    AccretionDisk,
    MagneticField,
    Atmospheric,
    CosmicRay,
}

/// All kinds in orchestrator sweep order
pub const ALL_KINDS: [ParticleKind; 5] = [
    ParticleKind::StellarWind,
    ParticleKind::AccretionDisk,
    ParticleKind::MagneticField,
    ParticleKind::Atmospheric,
    ParticleKind::CosmicRay,
];

/// Particle count for a (kind, body type) pair; 0 disables the effect
pub fn capacity_for(kind: ParticleKind, body_type: BodyType) -> usize {
    match kind {
        ParticleKind::StellarWind => match body_type {
            BodyType::Star => 200,
            _ => 0,
        },
        ParticleKind::AccretionDisk => match body_type {
            BodyType::BlackHole => 300,
            _ => 0,
        },
        ParticleKind::MagneticField => match body_type {
            BodyType::CompactRemnant => 150,
            _ => 0,
        },
        ParticleKind::Atmospheric => match body_type {
            BodyType::RockyPlanet => 100,
            _ => 0,
        },
        ParticleKind::CosmicRay => 80,
    }
}

/// Maximum particle lifetime per kind, in seconds
pub fn max_lifetime(kind: ParticleKind) -> f32 {
    match kind {
        ParticleKind::StellarWind => 5.0,
        ParticleKind::AccretionDisk => 8.0,
        ParticleKind::MagneticField => 6.0,
        ParticleKind::Atmospheric => 4.0,
        ParticleKind::CosmicRay => 10.0,
    }
}

fn base_color(kind: ParticleKind) -> [f32; 3] {
    match kind {
        ParticleKind::StellarWind => [1.0, 0.8, 0.3],
        ParticleKind::AccretionDisk => [1.0, 0.4, 0.0],
        ParticleKind::MagneticField => [0.0, 1.0, 1.0],
        ParticleKind::Atmospheric => [0.5, 0.8, 1.0],
        ParticleKind::CosmicRay => [0.8, 0.3, 1.0],
    }
}

/// A single simulated particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub lifetime: f32,
    pub color: [f32; 3],
    pub base_size: f32,
}

/// Emit one particle with the kind-specific initial conditions
fn emit(kind: ParticleKind, rng: &mut impl Rng) -> Particle {
    use std::f32::consts::{PI, TAU};

    let (position, velocity) = match kind {
        ParticleKind::StellarWind => {
            // Radial outflow from a shell around the star
            let angle = rng.gen::<f32>() * TAU;
            let elevation = (rng.gen::<f32>() - 0.5) * PI;
            let start_radius = 1.2;

            let position = Vec3::new(
                angle.cos() * elevation.cos(),
                elevation.sin(),
                angle.sin() * elevation.cos(),
            ) * start_radius;

            (position, position * 0.5)
        }
        ParticleKind::AccretionDisk => {
            // Annulus in the equatorial plane, tangential Keplerian velocity
            let angle = rng.gen::<f32>() * TAU;
            let radius = 1.5 + rng.gen::<f32>() * 2.0;

            let position = Vec3::new(
                angle.cos() * radius,
                (rng.gen::<f32>() - 0.5) * 0.2,
                angle.sin() * radius,
            );

            let orbital_speed = 0.8 / radius.sqrt();
            let velocity = Vec3::new(-angle.sin(), 0.0, angle.cos()) * orbital_speed;

            (position, velocity)
        }
        ParticleKind::MagneticField => {
            // Cylindrical shell, bipolar jets along the polar axis
            let angle = rng.gen::<f32>() * TAU;
            let radius = 2.0 + rng.gen::<f32>() * 3.0;
            let axial = (rng.gen::<f32>() - 0.5) * 4.0;

            let position = Vec3::new(angle.cos() * radius, axial, angle.sin() * radius);
            let velocity = Vec3::new(0.0, axial.signum() * 0.3, 0.0);

            (position, velocity)
        }
        ParticleKind::Atmospheric => {
            // Thin shell just above the surface, tangential drift with jitter
            let angle = rng.gen::<f32>() * TAU;
            let radius = 1.1 + rng.gen::<f32>() * 0.3;

            let position = Vec3::new(
                angle.cos() * radius,
                (rng.gen::<f32>() - 0.5) * 0.5,
                angle.sin() * radius,
            );

            let velocity = Vec3::new(
                -angle.sin() * 0.1,
                (rng.gen::<f32>() - 0.5) * 0.05,
                angle.cos() * 0.1,
            );

            (position, velocity)
        }
        ParticleKind::CosmicRay => {
            // Isotropic background in a large cube
            let position = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 10.0,
                (rng.gen::<f32>() - 0.5) * 10.0,
                (rng.gen::<f32>() - 0.5) * 10.0,
            );
            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            );

            (position, velocity)
        }
    };

    Particle {
        position,
        velocity,
        // Random initial lifetime desynchronizes respawns at steady state
        lifetime: rng.gen::<f32>() * max_lifetime(kind),
        color: base_color(kind),
        base_size: 0.02 + rng.gen::<f32>() * 0.08,
    }
}

/// Triangular fade envelope over the lifetime fraction: in over the first
/// half of life, out over the second.
fn fade_envelope(lifetime_fraction: f32) -> f32 {
    let t = lifetime_fraction.clamp(0.0, 1.0);
    (t * 2.0).min(1.0) * ((1.0 - t) * 2.0).min(1.0)
}

/// A fixed-capacity particle buffer for one (body, kind) pair
pub struct ParticleSystem {
    pub kind: ParticleKind,
    pub body_key: String,
    pub max_lifetime: f32,
    pub particles: Vec<Particle>,
    instances: Vec<ParticleInstance>,
}

impl ParticleSystem {
    /// Allocate and seed the buffer. A (kind, body type) pair with no
    /// capacity yields an inert zero-length system.
    pub fn new(kind: ParticleKind, body: &CelestialBody, rng: &mut impl Rng) -> Self {
        let capacity = capacity_for(kind, body.body_type);
        let particles: Vec<Particle> = (0..capacity).map(|_| emit(kind, rng)).collect();

        let mut system = Self {
            kind,
            body_key: body.key.clone(),
            max_lifetime: max_lifetime(kind),
            particles,
            instances: vec![ParticleInstance::zeroed(); capacity],
        };
        system.write_instances();
        system
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// The render-ready buffer as of the last `advance`
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// Expired slots are re-emitted in place and skip integration this
    /// frame. Accretion-disk particles feel a persistent inward pull applied
    /// to velocity before the position step; every other kind is ballistic
    /// after emission.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.lifetime -= dt;

            if particle.lifetime <= 0.0 {
                *particle = emit(self.kind, rng);
                continue;
            }

            if self.kind == ParticleKind::AccretionDisk {
                let planar = Vec3::new(particle.position.x, 0.0, particle.position.z);
                let distance = planar.length();
                if distance > DISK_CORE_RADIUS {
                    let pull = DISK_GRAVITY / (distance * distance);
                    particle.velocity -= planar / distance * pull * dt;
                }
            }

            particle.position += particle.velocity * dt;
        }

        self.write_instances();
    }

    fn write_instances(&mut self) {
        for (instance, particle) in self.instances.iter_mut().zip(&self.particles) {
            let fraction = particle.lifetime / self.max_lifetime;
            instance.position = particle.position.to_array();
            instance.size = particle.base_size * fade_envelope(fraction);
            instance.color = [particle.color[0], particle.color[1], particle.color[2], 1.0];
        }
    }
}

/// Generate a decorative star field backdrop: random points on a sphere with
/// per-star brightness.
pub fn generate_star_field(count: usize, radius: f32, rng: &mut impl Rng) -> Vec<(Vec3, f32)> {
    use std::f32::consts::PI;

    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        let theta = rng.gen::<f32>() * 2.0 * PI;
        let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();

        let position = Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        );

        let brightness = 0.3 + rng.gen::<f32>() * 0.7;
        stars.push((position, brightness));
    }

    stars
}
