use crate::capabilities::movement::LinearMovement;
use crate::capability::Capability;
use crate::collision::Collision;
use crate::config::GravityConfig;
use crate::entity::{AnimationPosition, Entity, EntityAnimation, EntityState};
use crate::geometry::{Point, Vector};

/// Keeps a grounded entity resting on the highest non-ephemeral surface
/// beneath it; transitions it into free fall when no surface qualifies.
#[derive(Debug)]
pub struct Gravity {
    enabled: bool,
    config: GravityConfig,
}

impl Gravity {
    /// Create an enabled gravity capability with the given constants.
    pub fn new(config: GravityConfig) -> Self {
        Self {
            enabled: true,
            config,
        }
    }

    /// The y coordinate of the confirmed supporting surface, if any.
    ///
    /// Only non-ephemeral overlaps lying below the subject's top edge are
    /// candidates. The ground level is the largest overlap `min_y` (the
    /// lowest surface edge); the widths of all overlaps sharing exactly that
    /// level must together strictly exceed the configured fraction of the
    /// subject's width, so tip-toeing on a corner does not count as landing.
    fn ground_level(&self, body: &Entity, collisions: &[Collision]) -> Option<f64> {
        let required_contact = body.frame.width() * self.config.min_ground_contact_ratio;

        let ground: Vec<&Collision> = collisions
            .iter()
            .filter(|c| !c.is_ephemeral)
            .filter(|c| body.frame.min_y() < c.intersection.min_y())
            .collect();

        let level = ground
            .iter()
            .map(|c| c.intersection.min_y())
            .reduce(f64::max)?;

        let contact: f64 = ground
            .iter()
            .filter(|c| c.intersection.min_y() == level)
            .map(|c| c.intersection.width())
            .sum();

        (contact > required_contact).then_some(level)
    }

    fn on_ground_reached(&self, body: &mut Entity, level: f64) {
        let target_y = level - body.frame.height();
        let is_landing = matches!(body.state(), EntityState::FreeFall);
        let is_raising = !is_landing && body.frame.min_y() != target_y;

        if is_landing || is_raising {
            body.frame.origin = Point::new(body.frame.origin.x, target_y);
        }
        if is_landing {
            log::debug!("{}: landed at y={level}", body.id);
            if let Some(movement) = body.capability_mut::<LinearMovement>() {
                movement.set_enabled(true);
            }
            body.set_state(EntityState::Move);
            body.direction = Vector::new(1.0, 0.0);
        }
    }

    fn start_falling_if_needed(&self, body: &mut Entity) {
        if matches!(body.state(), EntityState::FreeFall) {
            return;
        }
        if let Some(movement) = body.capability_mut::<LinearMovement>() {
            movement.set_enabled(true);
        }
        body.set_state(EntityState::FreeFall);
        body.direction = self.config.fall_direction;
        body.speed = self.config.fall_speed;
    }

    /// Action animations that are not anchored at the entity's bottom-left
    /// corner, or that override the rendered size, have no ground-relative
    /// hitbox and must not be displaced.
    fn masks_gravity(animation: &EntityAnimation) -> bool {
        animation.position != AnimationPosition::FromEntityBottomLeft || animation.size.is_some()
    }
}

impl Capability for Gravity {
    fn name(&self) -> &str {
        "gravity"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self, subject: &mut Entity, collisions: &[Collision], _time: f64) {
        if !self.enabled {
            return;
        }
        match subject.state() {
            EntityState::Drag => return,
            EntityState::Action(animation) if Self::masks_gravity(animation) => return,
            _ => {}
        }

        match self.ground_level(subject, collisions) {
            Some(level) => self.on_ground_reached(subject, level),
            None => self.start_falling_if_needed(subject),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;
    use crate::geometry::{Rect, Size};

    fn falling_entity() -> Entity {
        let mut entity = Entity::new(EntityId::new("subject"), Rect::new(0.0, 100.0, 10.0, 10.0));
        entity.world_bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        entity.install(LinearMovement::new());
        entity.set_state(EntityState::FreeFall);
        entity.direction = Vector::new(0.0, 8.0);
        entity.speed = 14.0;
        entity
    }

    fn surface(min_y: f64, width: f64) -> Collision {
        Collision {
            body: EntityId::new("surface"),
            intersection: Rect::new(0.0, min_y, width, 5.0),
            is_ephemeral: false,
        }
    }

    #[test]
    fn landing_snaps_to_ground_and_resumes_walking() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(110.0, 10.0)], 0.1);

        assert_eq!(entity.frame.origin.y, 100.0);
        assert_eq!(*entity.state(), EntityState::Move);
        assert_eq!(entity.direction, Vector::new(1.0, 0.0));
        assert!(entity.capability::<LinearMovement>().unwrap().is_enabled());
    }

    #[test]
    fn narrow_contact_does_not_confirm_ground() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(110.0, 4.0)], 0.1);

        assert_eq!(*entity.state(), EntityState::FreeFall);
        assert_eq!(entity.frame.origin.y, 100.0);
    }

    #[test]
    fn contact_exactly_half_the_width_is_not_ground() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        // 5.0 == width / 2; confirmation requires strictly more.
        gravity.update(&mut entity, &[surface(110.0, 5.0)], 0.1);

        assert_eq!(*entity.state(), EntityState::FreeFall);
    }

    #[test]
    fn contact_width_sums_across_collisions_at_the_same_level() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        let left = Collision {
            body: EntityId::new("left"),
            intersection: Rect::new(0.0, 110.0, 3.0, 5.0),
            is_ephemeral: false,
        };
        let right = Collision {
            body: EntityId::new("right"),
            intersection: Rect::new(6.0, 110.0, 3.0, 5.0),
            is_ephemeral: false,
        };
        gravity.update(&mut entity, &[left, right], 0.1);

        assert_eq!(*entity.state(), EntityState::Move);
        assert_eq!(entity.frame.origin.y, 100.0);
    }

    #[test]
    fn the_lowest_overlapping_surface_wins() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(104.0, 10.0), surface(108.0, 10.0)], 0.1);

        // Largest min_y is 108; the entity rests there.
        assert_eq!(entity.frame.origin.y, 98.0);
    }

    #[test]
    fn ephemeral_overlaps_are_ignored() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        let mut zone = surface(110.0, 10.0);
        zone.is_ephemeral = true;
        gravity.update(&mut entity, &[zone], 0.1);

        assert_eq!(*entity.state(), EntityState::FreeFall);
    }

    #[test]
    fn surfaces_above_the_top_edge_are_ignored() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());

        // min_y == entity top edge: not strictly below, so not ground.
        gravity.update(&mut entity, &[surface(100.0, 10.0)], 0.1);

        assert_eq!(*entity.state(), EntityState::FreeFall);
    }

    #[test]
    fn grounded_entity_off_target_is_snapped_without_state_change() {
        let mut entity = falling_entity();
        entity.set_state(EntityState::Move);
        entity.direction = Vector::new(-1.0, 0.0);
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(108.0, 10.0)], 0.1);

        assert_eq!(entity.frame.origin.y, 98.0);
        assert_eq!(*entity.state(), EntityState::Move);
        assert_eq!(entity.direction, Vector::new(-1.0, 0.0));
    }

    #[test]
    fn no_ground_starts_a_single_fall() {
        let mut entity = falling_entity();
        entity.set_state(EntityState::Idle);
        entity.speed = 0.0;
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[], 0.1);
        assert_eq!(*entity.state(), EntityState::FreeFall);
        assert_eq!(entity.direction, Vector::new(0.0, 8.0));
        assert!((entity.speed - 14.0).abs() < f64::EPSILON);

        // Already falling: parameters are not reassigned every tick.
        entity.direction = Vector::new(0.3, 8.0);
        gravity.update(&mut entity, &[], 0.1);
        assert_eq!(entity.direction, Vector::new(0.3, 8.0));
    }

    #[test]
    fn dragged_entities_are_never_touched() {
        let mut entity = falling_entity();
        entity.set_state(EntityState::Drag);
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(110.0, 10.0)], 0.1);
        assert_eq!(*entity.state(), EntityState::Drag);
        assert_eq!(entity.frame.origin.y, 100.0);

        gravity.update(&mut entity, &[], 0.1);
        assert_eq!(*entity.state(), EntityState::Drag);
    }

    #[test]
    fn masked_action_animations_are_never_displaced() {
        let mut gravity = Gravity::new(GravityConfig::default());

        let mut resized = falling_entity();
        resized.set_state(EntityState::Action(
            EntityAnimation::new("grow").with_size(Size::new(40.0, 40.0)),
        ));
        gravity.update(&mut resized, &[], 0.1);
        assert!(matches!(resized.state(), EntityState::Action(_)));

        let mut anchored = falling_entity();
        anchored.set_state(EntityState::Action(
            EntityAnimation::new("float")
                .with_position(AnimationPosition::Absolute(Point::new(50.0, 50.0))),
        ));
        gravity.update(&mut anchored, &[], 0.1);
        assert!(matches!(anchored.state(), EntityState::Action(_)));
    }

    #[test]
    fn bottom_anchored_action_still_rests_on_ground() {
        let mut entity = falling_entity();
        entity.set_state(EntityState::Action(EntityAnimation::new("eat")));
        let mut gravity = Gravity::new(GravityConfig::default());

        gravity.update(&mut entity, &[surface(108.0, 10.0)], 0.1);
        // Raising snap applies; the action itself keeps playing.
        assert_eq!(entity.frame.origin.y, 98.0);
        assert!(matches!(entity.state(), EntityState::Action(_)));
    }

    #[test]
    fn disabled_gravity_is_a_no_op() {
        let mut entity = falling_entity();
        let mut gravity = Gravity::new(GravityConfig::default());
        gravity.set_enabled(false);

        gravity.update(&mut entity, &[surface(110.0, 10.0)], 0.1);
        assert_eq!(*entity.state(), EntityState::FreeFall);
        assert_eq!(entity.frame.origin.y, 100.0);
    }
}
