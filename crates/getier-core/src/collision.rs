use crate::entity::{Entity, EntityId};
use crate::geometry::Rect;

/// One overlap between an entity and another body, produced fresh each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// The other body involved in the overlap.
    pub body: EntityId,
    /// The overlap rectangle. May have zero width or height when the two
    /// frames only share an edge (resting contact).
    pub intersection: Rect,
    /// Ephemeral overlaps must not be treated as standable ground.
    pub is_ephemeral: bool,
}

/// Compute the collision set of `entity` against `others`.
///
/// The entity itself is excluded by id; geometric correctness of the overlap
/// rectangles is this query's responsibility.
pub fn collisions(entity: &Entity, others: &[Entity]) -> Vec<Collision> {
    others
        .iter()
        .filter(|other| other.id != entity.id)
        .filter_map(|other| collision_with(entity, other))
        .collect()
}

fn collision_with(entity: &Entity, other: &Entity) -> Option<Collision> {
    let intersection = entity.frame.intersection(&other.frame)?;
    Some(Collision {
        body: other.id.clone(),
        intersection,
        is_ephemeral: other.is_ephemeral,
    })
}
