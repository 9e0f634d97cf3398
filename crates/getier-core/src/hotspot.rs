use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::geometry::Rect;

/// Thickness of the boundary strips, in world units.
const BOUND_THICKNESS: f64 = 10.0;

/// The fixed set of boundary sentinels a world maintains along its edges.
///
/// Sentinel entities are recognized purely by id membership in this
/// enumeration, never by type, and are rebuilt wholesale whenever the world
/// bounds change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hotspot {
    /// The strip just above the top edge.
    TopBound,
    /// The strip just right of the right edge.
    RightBound,
    /// The strip just below the bottom edge.
    BottomBound,
    /// The strip just left of the left edge.
    LeftBound,
}

impl Hotspot {
    /// Every boundary sentinel, in a fixed order.
    pub fn all() -> [Self; 4] {
        [
            Self::TopBound,
            Self::RightBound,
            Self::BottomBound,
            Self::LeftBound,
        ]
    }

    /// The sentinel's fixed entity id.
    pub fn id(&self) -> EntityId {
        EntityId::new(match self {
            Self::TopBound => "bound.top",
            Self::RightBound => "bound.right",
            Self::BottomBound => "bound.bottom",
            Self::LeftBound => "bound.left",
        })
    }

    /// Return `true` if the id belongs to any boundary sentinel.
    pub fn is_bound(id: &EntityId) -> bool {
        Self::all().iter().any(|hotspot| hotspot.id() == *id)
    }

    /// The strip this sentinel occupies for the given world bounds. Strips
    /// sit flush against the outside of each edge, so a body inside the
    /// world that reaches an edge makes resting contact with the strip.
    pub fn frame(&self, bounds: &Rect) -> Rect {
        match self {
            Self::TopBound => Rect::new(
                bounds.min_x(),
                bounds.min_y() - BOUND_THICKNESS,
                bounds.width(),
                BOUND_THICKNESS,
            ),
            Self::RightBound => Rect::new(
                bounds.max_x(),
                bounds.min_y(),
                BOUND_THICKNESS,
                bounds.height(),
            ),
            Self::BottomBound => Rect::new(
                bounds.min_x(),
                bounds.max_y(),
                bounds.width(),
                BOUND_THICKNESS,
            ),
            Self::LeftBound => Rect::new(
                bounds.min_x() - BOUND_THICKNESS,
                bounds.min_y(),
                BOUND_THICKNESS,
                bounds.height(),
            ),
        }
    }

    /// Build the static sentinel entity for the given world bounds.
    pub fn entity(&self, bounds: &Rect) -> Entity {
        let mut entity = Entity::new(self.id(), self.frame(bounds));
        entity.is_static = true;
        entity.world_bounds = *bounds;
        entity
    }
}

impl fmt::Display for Hotspot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fixed_and_distinct() {
        let ids: Vec<_> = Hotspot::all().iter().map(Hotspot::id).collect();
        assert_eq!(ids.len(), 4);
        for (i, id) in ids.iter().enumerate() {
            assert!(Hotspot::is_bound(id));
            assert!(!ids[i + 1..].contains(id));
        }
        assert!(!Hotspot::is_bound(&EntityId::new("sloth")));
    }

    #[test]
    fn strips_sit_flush_against_the_edges() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);

        let bottom = Hotspot::BottomBound.frame(&bounds);
        assert_eq!(bottom.min_y(), 600.0);
        assert_eq!(bottom.width(), 800.0);

        let top = Hotspot::TopBound.frame(&bounds);
        assert_eq!(top.max_y(), 0.0);

        let right = Hotspot::RightBound.frame(&bounds);
        assert_eq!(right.min_x(), 800.0);
        assert_eq!(right.height(), 600.0);

        let left = Hotspot::LeftBound.frame(&bounds);
        assert_eq!(left.max_x(), 0.0);
    }

    #[test]
    fn body_on_the_floor_touches_the_bottom_strip() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let floor = Hotspot::BottomBound.entity(&bounds);
        let body = Rect::new(100.0, 590.0, 10.0, 10.0);
        let contact = body.intersection(&floor.frame).unwrap();
        assert_eq!(contact.min_y(), 600.0);
        assert_eq!(contact.width(), 10.0);
    }

    #[test]
    fn sentinel_entities_are_static() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        for hotspot in Hotspot::all() {
            let entity = hotspot.entity(&bounds);
            assert!(entity.is_static);
            assert_eq!(entity.world_bounds, bounds);
        }
    }
}
