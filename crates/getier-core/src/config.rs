use serde::{Deserialize, Serialize};

use crate::geometry::Vector;

/// Configuration for a creature simulation.
///
/// Every behavioral constant lives here so tests can vary them without
/// touching engine logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seconds each animation frame stays on screen.
    pub frame_time: f64,
    /// Constants governing falling and landing.
    pub gravity: GravityConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_time: 0.1,
            gravity: GravityConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the seconds-per-frame used by animators.
    pub fn with_frame_time(mut self, frame_time: f64) -> Self {
        self.frame_time = frame_time;
        self
    }

    /// Set the gravity constants.
    pub fn with_gravity(mut self, gravity: GravityConfig) -> Self {
        self.gravity = gravity;
        self
    }
}

/// Constants governing the gravity capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityConfig {
    /// Speed assigned to an entity when it starts free-falling.
    pub fall_speed: f64,
    /// Direction assigned to an entity when it starts free-falling.
    pub fall_direction: Vector,
    /// Fraction of the entity's width that must rest on a surface before the
    /// surface counts as ground. Contact must strictly exceed
    /// `width * min_ground_contact_ratio`.
    pub min_ground_contact_ratio: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            fall_speed: 14.0,
            fall_direction: Vector::new(0.0, 8.0),
            min_ground_contact_ratio: 0.5,
        }
    }
}

impl GravityConfig {
    /// Set the free-fall speed.
    pub fn with_fall_speed(mut self, speed: f64) -> Self {
        self.fall_speed = speed;
        self
    }

    /// Set the free-fall direction.
    pub fn with_fall_direction(mut self, direction: Vector) -> Self {
        self.fall_direction = direction;
        self
    }

    /// Set the minimum ground contact ratio.
    pub fn with_min_ground_contact_ratio(mut self, ratio: f64) -> Self {
        self.min_ground_contact_ratio = ratio;
        self
    }
}
