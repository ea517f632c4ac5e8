//! Cosmos Tour - headless demo driver
//!
//! Walks the body catalog with every effect enabled, running fixed-step
//! ticks while the viewer pulls away from the body, and logs the physics
//! readouts and engine events each body produces. Useful for eyeballing
//! engine behavior without a renderer attached.

use glam::Vec3;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cosmos_viz::{particles, physics, Catalog, EngineEvent, Toggles, VisualizationEngine};

const DT: f32 = 1.0 / 60.0;
const TICKS_PER_BODY: usize = 360;

fn main() {
    env_logger::init();

    let catalog = Catalog::builtin();
    let mut engine = VisualizationEngine::new();

    // Static backdrop, generated once like any other startup asset
    let mut rng = StdRng::seed_from_u64(2024);
    let stars = particles::generate_star_field(800, 120.0, &mut rng);
    info!("backdrop: {} stars", stars.len());

    let toggles = Toggles {
        gravity_field: true,
        time_dilation: true,
        event_horizon: true,
        particle_effects: true,
        travel_animation: true,
        lod: true,
    };

    for body in &catalog.bodies {
        info!(
            "=== {} ({} solar masses) ===",
            body.name,
            physics::format_quantity(physics::kg_to_solar_masses(body.mass_kg), 2),
        );

        let summary = physics::compute_physics(body, 100.0);
        info!(
            "escape velocity {:.1} km/s, surface gravity {:.2} m/s^2, rs {:.3} km, time {:.4}% slower",
            summary.escape_velocity_km_s,
            summary.surface_gravity_m_s2,
            summary.schwarzschild_radius_km,
            summary.time_slowdown_percent,
        );

        for tick in 0..TICKS_PER_BODY {
            // Pull the viewer out through every LOD band over the run
            let viewer_distance = 2.0 + tick as f32 * 0.5;
            let viewer = Vec3::new(0.0, 0.0, viewer_distance);

            let frame = engine.tick(body, &toggles, viewer, DT);

            for event in &frame.events {
                match event {
                    EngineEvent::BodySelected { key } => info!("selected: {key}"),
                    EngineEvent::LodChanged { previous, current } => {
                        info!("lod {previous:?} -> {current:?} at distance {viewer_distance:.0}")
                    }
                    EngineEvent::TravelStarted => info!("travel animation started"),
                    EngineEvent::TravelCompleted => info!("travel animation complete"),
                }
            }

            if tick == TICKS_PER_BODY - 1 {
                let particle_total: usize =
                    frame.particle_buffers.iter().map(|(_, b)| b.len()).sum();
                info!(
                    "final frame: {} particles across {} systems, {} field lines, lod {:?}",
                    particle_total,
                    frame.particle_buffers.len(),
                    frame.field_lines.len(),
                    frame.lod_level,
                );
            }
        }
    }
}
