//! Per-frame visualization orchestrator
//!
//! Owns every piece of mutable effect state in one explicit struct and
//! drives it from a single synchronous `tick` per render frame. The engine
//! performs no I/O and never blocks; side effects such as audio cues are the
//! consumer's business, signalled through plain event values in the frame
//! output.

use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::ParticleInstance;

use crate::catalog::CelestialBody;
use crate::field_lines::{self, FieldLine, HorizonShell, ProbeParticles};
use crate::lod::{LodLevel, LodState};
use crate::particles::{ParticleSystem, ALL_KINDS, ParticleKind};
use crate::physics::{self, PhysicsSummary};

/// Travel animation progress per second
pub const TRAVEL_RATE: f32 = 0.2;

/// Scene-space endpoint of the travel animation
pub const TRAVEL_TARGET: Vec3 = Vec3::new(8.0, 0.0, 0.0);

const DEFAULT_DISTANCE_FROM_SURFACE_KM: f64 = 100.0;
const DEFAULT_SPACECRAFT_SPEED: f64 = 0.1;

/// Visibility switches supplied by the surrounding application each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub gravity_field: bool,
    pub time_dilation: bool,
    pub event_horizon: bool,
    pub particle_effects: bool,
    pub travel_animation: bool,
    pub lod: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            gravity_field: false,
            time_dilation: false,
            event_horizon: true,
            particle_effects: false,
            travel_animation: false,
            lod: true,
        }
    }
}

/// Notification values emitted by the engine for external subscribers
/// (renderer, audio). The engine never acts on them itself.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    BodySelected { key: String },
    LodChanged { previous: LodLevel, current: LodLevel },
    TravelStarted,
    TravelCompleted,
}

/// State of the travel animation from Earth to the selected body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelState {
    /// Animation progress in [0, 1]
    pub progress: f32,
    /// Current craft position in scene units
    pub position: Vec3,
    /// Real travel duration at the configured speed, in years
    pub travel_years: f64,
    pub active: bool,
}

/// Everything the rendering layer needs for one frame
pub struct FrameOutput<'a> {
    pub particle_buffers: Vec<(ParticleKind, &'a [ParticleInstance])>,
    pub probe_particles: Option<&'a [ParticleInstance]>,
    pub field_lines: &'a [FieldLine],
    pub escape_paths: &'a [FieldLine],
    pub horizon: Option<&'a HorizonShell>,
    pub lod_level: LodLevel,
    pub physics: Option<PhysicsSummary>,
    pub travel: Option<TravelState>,
    pub events: Vec<EngineEvent>,
}

/// The real-time visualization engine
pub struct VisualizationEngine {
    rng: StdRng,
    selected_key: Option<String>,
    prev_toggles: Toggles,

    systems: Vec<ParticleSystem>,
    field_lines: Vec<FieldLine>,
    escape_paths: Vec<FieldLine>,
    probes: Option<ProbeParticles>,
    horizon: Option<HorizonShell>,
    lod: Option<LodState>,
    travel: Option<TravelState>,
    physics: Option<PhysicsSummary>,
    events: Vec<EngineEvent>,

    distance_from_surface_km: f64,
    spacecraft_speed: f64,
}

impl VisualizationEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible captures
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            selected_key: None,
            prev_toggles: Toggles {
                gravity_field: false,
                time_dilation: false,
                event_horizon: false,
                particle_effects: false,
                travel_animation: false,
                lod: false,
            },
            systems: Vec::new(),
            field_lines: Vec::new(),
            escape_paths: Vec::new(),
            probes: None,
            horizon: None,
            lod: None,
            travel: None,
            physics: None,
            events: Vec::new(),
            distance_from_surface_km: DEFAULT_DISTANCE_FROM_SURFACE_KM,
            spacecraft_speed: DEFAULT_SPACECRAFT_SPEED,
        }
    }

    /// Observer altitude above the surface used for time-dilation readouts
    pub fn set_distance_from_surface(&mut self, km: f64) {
        self.distance_from_surface_km = km.max(0.0);
    }

    /// Spacecraft speed as a fraction of c for travel-time readouts.
    /// Callers treat zero speed as "no travel" before enabling the
    /// animation.
    pub fn set_spacecraft_speed(&mut self, fraction_of_c: f64) {
        self.spacecraft_speed = fraction_of_c;
    }

    /// Live particle systems, one per applicable effect kind
    pub fn systems(&self) -> &[ParticleSystem] {
        &self.systems
    }

    /// Advance the engine by one frame.
    ///
    /// Physics quantities are computed before particle advancement, and LOD
    /// selection runs after geometry has settled, so the caller always sees
    /// a consistent snapshot for the frame.
    pub fn tick(
        &mut self,
        body: &CelestialBody,
        toggles: &Toggles,
        viewer_position: Vec3,
        delta_seconds: f32,
    ) -> FrameOutput<'_> {
        let body_changed = self.selected_key.as_deref() != Some(body.key.as_str());
        if body_changed {
            // Hard reset: in-flight particle state is decorative and is
            // discarded, not drained
            info!("selected body: {} ({})", body.name, body.key);
            self.selected_key = Some(body.key.clone());
            self.events.push(EngineEvent::BodySelected {
                key: body.key.clone(),
            });
        }

        self.sync_effects(body, toggles, body_changed);

        self.physics = toggles
            .time_dilation
            .then(|| physics::compute_physics(body, self.distance_from_surface_km));

        for system in &mut self.systems {
            system.advance(delta_seconds, &mut self.rng);
        }
        if let Some(probes) = &mut self.probes {
            probes.advance(delta_seconds, &mut self.rng);
        }

        self.advance_travel(delta_seconds);

        if let Some(lod) = &mut self.lod {
            let previous = lod.level;
            if let Some(current) = lod.update(viewer_position.length()) {
                debug!("lod change: {previous:?} -> {current:?}");
                self.events.push(EngineEvent::LodChanged { previous, current });
            }
        }

        self.prev_toggles = *toggles;

        FrameOutput {
            particle_buffers: self
                .systems
                .iter()
                .map(|s| (s.kind, s.instances()))
                .collect(),
            probe_particles: self.probes.as_ref().map(|p| p.instances()),
            field_lines: &self.field_lines,
            escape_paths: &self.escape_paths,
            horizon: self.horizon.as_ref(),
            lod_level: self.lod.map(|l| l.level).unwrap_or(LodLevel::High),
            physics: self.physics,
            travel: self.travel,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Build effect state on enable edges (or wholesale after a body
    /// change) and release it on disable edges.
    fn sync_effects(&mut self, body: &CelestialBody, toggles: &Toggles, force: bool) {
        let prev = self.prev_toggles;

        if toggles.particle_effects && (force || !prev.particle_effects) {
            let mut systems = Vec::new();
            for kind in ALL_KINDS {
                let system = ParticleSystem::new(kind, body, &mut self.rng);
                if system.capacity() > 0 {
                    systems.push(system);
                }
            }
            debug!("particle effects on: {} systems for {}", systems.len(), body.key);
            self.systems = systems;
        } else if !toggles.particle_effects && !self.systems.is_empty() {
            debug!("particle effects off");
            self.systems.clear();
        }

        if toggles.gravity_field && (force || !prev.gravity_field) {
            self.field_lines = field_lines::generate(body);
            self.escape_paths = field_lines::escape_trajectories();
            self.probes = Some(ProbeParticles::new(&mut self.rng));
        } else if !toggles.gravity_field && !self.field_lines.is_empty() {
            self.field_lines = Vec::new();
            self.escape_paths = Vec::new();
            self.probes = None;
        }

        if toggles.event_horizon && (force || !prev.event_horizon) {
            self.horizon = field_lines::horizon_shell(body);
        } else if !toggles.event_horizon {
            self.horizon = None;
        }

        if toggles.travel_animation && (force || !prev.travel_animation) {
            let travel_years = if body.distance_from_earth_km > 0.0 {
                physics::km_to_light_years(body.distance_from_earth_km) / self.spacecraft_speed
            } else {
                0.0
            };
            self.travel = Some(TravelState {
                progress: 0.0,
                position: Vec3::ZERO,
                travel_years,
                active: true,
            });
            self.events.push(EngineEvent::TravelStarted);
        } else if !toggles.travel_animation {
            self.travel = None;
        }

        if toggles.lod && (force || !prev.lod) {
            self.lod = Some(LodState::new(body.body_type));
        } else if !toggles.lod {
            self.lod = None;
        }
    }

    fn advance_travel(&mut self, dt: f32) {
        let Some(travel) = &mut self.travel else {
            return;
        };

        if travel.active {
            travel.progress = (travel.progress + dt * TRAVEL_RATE).min(1.0);
            if travel.progress >= 1.0 {
                travel.active = false;
                self.events.push(EngineEvent::TravelCompleted);
            }
        }

        travel.position = TRAVEL_TARGET * travel.progress;
    }
}

impl Default for VisualizationEngine {
    fn default() -> Self {
        Self::new()
    }
}
