//! Cosmos Viz - real-time celestial visualization engine
//!
//! This crate drives the physics-based visual effects for an educational
//! astronomy viewer:
//!
//! - **Physics**: escape velocity, surface gravity, Schwarzschild radii, and
//!   gravitational time dilation from real body data
//! - **Particle effects**: stellar wind, accretion disks, bipolar jets,
//!   atmospheres, and cosmic rays with fixed-capacity recycled buffers
//! - **Gravity field geometry**: procedural pole-to-pole field lines scaled
//!   by surface gravity
//! - **Level of detail**: distance-based detail tiers with hysteresis
//! - **Orchestration**: a single per-frame `tick` producing render-ready
//!   buffers, geometry, and notification events
//!
//! Rendering, camera input, and audio are external collaborators: they feed
//! the engine a selected body, toggle set, viewer position, and frame delta,
//! and consume the buffers it hands back.

pub mod catalog;
pub mod engine;
pub mod field_lines;
pub mod lod;
pub mod particles;
pub mod physics;

pub use catalog::{BodyType, Catalog, CelestialBody};
pub use engine::{EngineEvent, FrameOutput, Toggles, TravelState, VisualizationEngine};
pub use field_lines::{FieldLine, HorizonShell, ProbeParticles};
pub use lod::{LodLevel, LodState, LodThresholds};
pub use particles::{ParticleKind, ParticleSystem};
pub use physics::{PhysicsSummary, TravelTime};
