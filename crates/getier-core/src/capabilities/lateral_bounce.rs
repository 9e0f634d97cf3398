use crate::capability::Capability;
use crate::collision::Collision;
use crate::entity::{Entity, EntityState};
use crate::geometry::Point;

const DEAD_ZONE: f64 = 0.0001;

/// Reverses a walker's horizontal direction when it reaches a lateral world
/// bound, keeping it on screen.
///
/// Only acts while the subject is in the `Move` state; falling and dragged
/// entities pass through untouched.
#[derive(Debug)]
pub struct LateralBounce {
    enabled: bool,
}

impl LateralBounce {
    /// Create an enabled bounce capability.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for LateralBounce {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for LateralBounce {
    fn name(&self) -> &str {
        "lateral-bounce"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self, subject: &mut Entity, _collisions: &[Collision], _time: f64) {
        if !self.enabled || *subject.state() != EntityState::Move {
            return;
        }

        let bounds = subject.world_bounds;
        if subject.direction.dx > DEAD_ZONE && subject.frame.max_x() >= bounds.max_x() {
            subject.direction.dx = -subject.direction.dx;
            subject.frame.origin = Point::new(
                bounds.max_x() - subject.frame.width(),
                subject.frame.origin.y,
            );
        } else if subject.direction.dx < -DEAD_ZONE && subject.frame.min_x() <= bounds.min_x() {
            subject.direction.dx = -subject.direction.dx;
            subject.frame.origin = Point::new(bounds.min_x(), subject.frame.origin.y);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
