//! Distance-based level-of-detail selection
//!
//! A small state machine per visible body. Levels switch on viewer distance
//! against per-type thresholds, gated by a minimum distance delta so a viewer
//! hovering on a boundary cannot make the renderer thrash between detail
//! sets.

use crate::catalog::BodyType;

/// Detail tiers, nearest to farthest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodLevel {
    High,
    Medium,
    Low,
    Impostor,
}

/// Base switching distances in scene units, before importance scaling
pub const BASE_THRESHOLDS: [f32; 4] = [5.0, 15.0, 40.0, 100.0];

/// Minimum distance change before a new measurement is accepted
pub const HYSTERESIS_GATE: f32 = 1.0;

/// Importance multiplier: more important objects keep high detail at greater
/// distance. Visualization tuning, not derived physics.
pub fn importance(body_type: BodyType) -> f32 {
    match body_type {
        BodyType::BlackHole => 1.5,
        BodyType::CompactRemnant => 1.3,
        BodyType::Star => 1.2,
        BodyType::RockyPlanet => 1.0,
        BodyType::WhiteDwarf => 0.8,
        _ => 1.0,
    }
}

/// Switching distances for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodThresholds {
    pub high: f32,
    pub medium: f32,
    pub low: f32,
    pub impostor: f32,
}

impl LodThresholds {
    pub fn for_type(body_type: BodyType) -> Self {
        let scale = importance(body_type);
        Self {
            high: BASE_THRESHOLDS[0] * scale,
            medium: BASE_THRESHOLDS[1] * scale,
            low: BASE_THRESHOLDS[2] * scale,
            impostor: BASE_THRESHOLDS[3] * scale,
        }
    }
}

/// Pick the level for a distance against a threshold set
pub fn select(distance: f32, thresholds: &LodThresholds) -> LodLevel {
    if distance < thresholds.high {
        LodLevel::High
    } else if distance < thresholds.medium {
        LodLevel::Medium
    } else if distance < thresholds.low {
        LodLevel::Low
    } else {
        LodLevel::Impostor
    }
}

/// Per-body LOD state machine
#[derive(Debug, Clone, Copy)]
pub struct LodState {
    pub level: LodLevel,
    pub thresholds: LodThresholds,
    last_distance: f32,
}

impl LodState {
    /// Starts at High, the optimistic default before the first measurement
    pub fn new(body_type: BodyType) -> Self {
        Self {
            level: LodLevel::High,
            thresholds: LodThresholds::for_type(body_type),
            last_distance: f32::INFINITY,
        }
    }

    /// Feed one distance measurement.
    ///
    /// Samples within the hysteresis gate of the last accepted measurement
    /// are ignored. Returns the new level only when it actually changed.
    /// Broken camera input (negative or non-finite distance) lands in the
    /// Impostor bucket rather than corrupting the state.
    pub fn update(&mut self, distance: f32) -> Option<LodLevel> {
        let distance = if distance.is_finite() && distance >= 0.0 {
            distance
        } else {
            f32::MAX
        };

        if (distance - self.last_distance).abs() <= HYSTERESIS_GATE {
            return None;
        }

        self.last_distance = distance;
        let level = select(distance, &self.thresholds);

        if level != self.level {
            self.level = level;
            Some(level)
        } else {
            None
        }
    }
}
