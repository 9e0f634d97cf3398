use crate::capability::Capability;
use crate::collision::Collision;
use crate::entity::{Entity, EntityState};

/// Integrates the subject's position from its direction and speed.
///
/// Active only while the subject is walking or falling; gravity toggles the
/// enable flag when it takes over a creature's motion.
#[derive(Debug)]
pub struct LinearMovement {
    enabled: bool,
}

impl LinearMovement {
    /// Create an enabled movement capability.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for LinearMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for LinearMovement {
    fn name(&self) -> &str {
        "movement"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self, subject: &mut Entity, _collisions: &[Collision], time: f64) {
        if !self.enabled {
            return;
        }
        if !matches!(subject.state(), EntityState::Move | EntityState::FreeFall) {
            return;
        }
        let delta = subject.direction * (subject.speed * time);
        subject.frame = subject.frame.offset(delta.dx, delta.dy);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
