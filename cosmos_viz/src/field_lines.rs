//! Gravity field geometry
//!
//! Procedurally generated polylines depicting the gravitational field around
//! a body: pole-to-pole arcs that bulge at the equator and taper to points at
//! both poles. The curves are closed-form parametric functions of the body's
//! static properties, so they are regenerated only when the body or the
//! visibility toggle changes, never per-frame.

use glam::Vec3;
use rand::Rng;

use common::constants::{EARTH_GRAVITY, EARTH_RADIUS_KM};
use common::{LineVertex, ParticleInstance};

use crate::catalog::{BodyType, CelestialBody};
use crate::physics;

/// Samples per field line
pub const SAMPLES_PER_LINE: usize = 30;

/// A single field-line polyline with its display color
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLine {
    pub points: Vec<Vec3>,
    pub color: [f32; 4],
}

impl FieldLine {
    /// Expand the polyline into line-segment vertices for upload
    pub fn to_vertices(&self) -> Vec<LineVertex> {
        let mut vertices = Vec::with_capacity(self.points.len().saturating_sub(1) * 2);
        for pair in self.points.windows(2) {
            vertices.push(LineVertex {
                position: pair[0].to_array(),
                color: self.color,
            });
            vertices.push(LineVertex {
                position: pair[1].to_array(),
                color: self.color,
            });
        }
        vertices
    }
}

fn num_lines(body_type: BodyType) -> usize {
    match body_type {
        BodyType::BlackHole => 20,
        BodyType::Star => 18,
        BodyType::RockyPlanet => 16,
        _ => 12,
    }
}

fn field_extension(body_type: BodyType) -> f32 {
    match body_type {
        BodyType::BlackHole => 8.0,
        BodyType::Star => 6.0,
        BodyType::RockyPlanet => 5.0,
        _ => 4.0,
    }
}

fn field_color(body_type: BodyType) -> [f32; 4] {
    match body_type {
        BodyType::BlackHole => [1.0, 0.267, 0.267, 0.8],
        BodyType::Star => [1.0, 0.667, 0.0, 0.7],
        BodyType::RockyPlanet => [0.29, 0.871, 0.502, 0.5],
        BodyType::Moon => [0.533, 0.6, 1.0, 0.4],
        _ => [0.29, 0.871, 0.502, 0.5],
    }
}

/// Body radius normalized into scene units, clamped to keep every body
/// visually legible
pub fn scene_radius(body: &CelestialBody) -> f32 {
    ((body.radius_km / EARTH_RADIUS_KM) as f32).clamp(0.8, 2.5)
}

/// Generate the full field-line set for a body.
///
/// Line i sits at angle θ = 2πi/n; sample t runs pole to pole with a sin(πt)
/// envelope, so every line starts and ends on the polar axis. Stronger
/// surface gravity (log-compressed) pushes the equatorial bulge outward.
pub fn generate(body: &CelestialBody) -> Vec<FieldLine> {
    use std::f32::consts::{PI, TAU};

    let radius_norm = scene_radius(body);
    let gravity = physics::surface_gravity(body.mass_kg, body.radius_km);
    let gravity_strength = ((gravity / EARTH_GRAVITY + 1.0).log10() * 0.5 + 1.0) as f32;

    let count = num_lines(body.body_type);
    let extension = field_extension(body.body_type);
    let color = field_color(body.body_type);
    let pole_height = radius_norm * 1.5;

    let mut lines = Vec::with_capacity(count);

    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let mut points = Vec::with_capacity(SAMPLES_PER_LINE);

        for j in 0..SAMPLES_PER_LINE {
            let t = j as f32 / (SAMPLES_PER_LINE - 1) as f32;
            let envelope = (t * PI).sin();
            let field_radius = radius_norm + envelope * extension * gravity_strength;

            points.push(Vec3::new(
                angle.cos() * field_radius * envelope * 0.8,
                pole_height * (1.0 - 2.0 * t),
                angle.sin() * field_radius * envelope * 0.8,
            ));
        }

        lines.push(FieldLine { points, color });
    }

    lines
}

/// Number of free-falling tracer particles
pub const PROBE_COUNT: usize = 8;

/// Tracers respawn when they fall inside this planar radius
pub const PROBE_RESET_NEAR: f32 = 1.2;

/// Tracers respawn when they drift beyond this radius
pub const PROBE_RESET_FAR: f32 = 8.0;

/// Simplified inward pull on the tracers. Visualization tuning.
pub const PROBE_PULL: f32 = 2.0;

const PROBE_COLOR: [f32; 4] = [0.984, 0.749, 0.141, 0.8];

/// Free-falling tracer particles that make the field's pull visible
pub struct ProbeParticles {
    positions: Vec<Vec3>,
    instances: Vec<ParticleInstance>,
}

impl ProbeParticles {
    pub fn new(rng: &mut impl Rng) -> Self {
        let positions: Vec<Vec3> = (0..PROBE_COUNT).map(|_| emit_probe(rng)).collect();
        let instances = positions
            .iter()
            .map(|p| ParticleInstance {
                position: p.to_array(),
                size: 0.1,
                color: PROBE_COLOR,
            })
            .collect();

        Self { positions, instances }
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// Pull each tracer inward; respawn it once it falls in or drifts out
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) {
        for position in &mut self.positions {
            let distance = position.length();

            if !(PROBE_RESET_NEAR..=PROBE_RESET_FAR).contains(&distance) {
                *position = emit_probe(rng);
                continue;
            }

            let step = PROBE_PULL / (distance * distance) * dt;
            let direction = *position / distance;
            position.x -= direction.x * step;
            position.z -= direction.z * step;
            // Vertical pull at half strength keeps tracers near the plane
            position.y -= direction.y * step * 0.5;
        }

        for (instance, position) in self.instances.iter_mut().zip(&self.positions) {
            instance.position = position.to_array();
        }
    }
}

fn emit_probe(rng: &mut impl Rng) -> Vec3 {
    use std::f32::consts::TAU;

    let angle = rng.gen::<f32>() * TAU;
    let distance = 3.0 + rng.gen::<f32>() * 4.0;

    Vec3::new(
        angle.cos() * distance,
        (rng.gen::<f32>() - 0.5) * 2.0,
        angle.sin() * distance,
    )
}

/// Dashed parabolic arcs illustrating escape against the body's pull,
/// alternating escape (green) and fall-back (red) colors.
pub fn escape_trajectories() -> Vec<FieldLine> {
    use std::f32::consts::TAU;

    const TRAJECTORIES: usize = 8;

    let mut lines = Vec::with_capacity(TRAJECTORIES);

    for i in 0..TRAJECTORIES {
        let angle = i as f32 / TRAJECTORIES as f32 * TAU;
        let mut points = Vec::with_capacity(SAMPLES_PER_LINE);

        for j in 0..SAMPLES_PER_LINE {
            let t = j as f32 / (SAMPLES_PER_LINE - 1) as f32;
            points.push(Vec3::new(
                angle.cos() * t * 5.0,
                t * 3.0 - t * t * 2.0,
                angle.sin() * t * 5.0,
            ));
        }

        let color = if i % 2 == 0 {
            [0.0, 1.0, 0.0, 0.7]
        } else {
            [1.0, 0.0, 0.0, 0.7]
        };

        lines.push(FieldLine { points, color });
    }

    lines
}

/// Event-horizon marker for a black hole: an equatorial ring just outside
/// the body's scene radius plus the true Schwarzschild radius for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonShell {
    pub radius_km: f64,
    pub ring: Vec<Vec3>,
}

/// Build the horizon marker; bodies that are not black holes have none.
pub fn horizon_shell(body: &CelestialBody) -> Option<HorizonShell> {
    use std::f32::consts::TAU;

    if body.body_type != BodyType::BlackHole {
        return None;
    }

    const SEGMENTS: usize = 64;

    let ring_radius = scene_radius(body) * 1.05;
    let ring = (0..=SEGMENTS)
        .map(|i| {
            let angle = i as f32 / SEGMENTS as f32 * TAU;
            Vec3::new(angle.cos() * ring_radius, 0.0, angle.sin() * ring_radius)
        })
        .collect();

    Some(HorizonShell {
        radius_km: physics::schwarzschild_radius_km(body.mass_kg),
        ring,
    })
}
