use std::f64::consts::PI;

use crate::capability::Capability;
use crate::collision::Collision;
use crate::entity::Entity;
use crate::geometry::{Point, Vector};

/// Ignore direction components smaller than this when classifying intent,
/// so float noise cannot trigger an edge transition.
const DEAD_ZONE: f64 = 0.0001;

/// Redirects an entity that runs into a screen edge to crawl along that
/// edge, reorienting its visual angles and flip flag to match the surface.
///
/// At most one transition fires per tick, evaluated top, right, bottom,
/// left; the resulting cycle traverses the screen perimeter.
#[derive(Debug)]
pub struct WallCrawler {
    enabled: bool,
}

impl WallCrawler {
    /// Create an enabled wall crawler.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    fn touches_top(body: &Entity) -> bool {
        body.frame.min_y() <= body.world_bounds.min_y()
    }

    fn touches_right(body: &Entity) -> bool {
        body.frame.max_x() >= body.world_bounds.max_x()
    }

    fn touches_bottom(body: &Entity) -> bool {
        body.frame.max_y() >= body.world_bounds.max_y()
    }

    fn touches_left(body: &Entity) -> bool {
        body.frame.min_x() <= body.world_bounds.min_x()
    }

    fn crawl_along_top(body: &mut Entity) {
        body.direction = Vector::new(-1.0, 0.0);
        body.is_upside_down = true;
        body.frame.origin = Point::new(body.frame.origin.x, body.world_bounds.min_y());
        body.x_angle = PI;
        body.z_angle = 0.0;
        body.y_angle = PI;
    }

    fn crawl_up_right(body: &mut Entity) {
        body.direction = Vector::new(0.0, -1.0);
        body.frame.origin = Point::new(
            body.world_bounds.max_x() - body.frame.width(),
            body.frame.origin.y,
        );
        body.x_angle = 0.0;
        body.z_angle = PI * 1.5;
        body.y_angle = 0.0;
    }

    fn crawl_along_bottom(body: &mut Entity) {
        body.direction = Vector::new(1.0, 0.0);
        body.frame.origin = Point::new(
            body.frame.origin.x,
            body.world_bounds.max_y() - body.frame.height(),
        );
        body.x_angle = 0.0;
        body.z_angle = 0.0;
        body.y_angle = 0.0;
    }

    fn crawl_down_left(body: &mut Entity) {
        body.direction = Vector::new(0.0, 1.0);
        body.frame.origin = Point::new(body.world_bounds.min_x(), body.frame.origin.y);
        body.is_upside_down = false;
        body.x_angle = 0.0;
        body.z_angle = PI * 0.5;
        body.y_angle = 0.0;
    }
}

impl Default for WallCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl Capability for WallCrawler {
    fn name(&self) -> &str {
        "wall-crawler"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self, subject: &mut Entity, _collisions: &[Collision], _time: f64) {
        if !self.enabled {
            return;
        }

        let going_up = subject.direction.dy < -DEAD_ZONE;
        let going_right = subject.direction.dx > DEAD_ZONE;
        let going_down = subject.direction.dy > DEAD_ZONE;
        let going_left = subject.direction.dx < -DEAD_ZONE;

        if going_up && Self::touches_top(subject) {
            Self::crawl_along_top(subject);
            return;
        }
        if going_right && Self::touches_right(subject) {
            Self::crawl_up_right(subject);
            return;
        }
        if going_down && Self::touches_bottom(subject) {
            Self::crawl_along_bottom(subject);
            return;
        }
        if going_left && Self::touches_left(subject) {
            Self::crawl_down_left(subject);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
