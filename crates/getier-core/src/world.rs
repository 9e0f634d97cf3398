use crate::collision;
use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::geometry::Rect;
use crate::hotspot::Hotspot;

/// The world owns the entity collection and the bounds rectangle and drives
/// the per-tick update.
///
/// Entities are kept in insertion order; boundary sentinels are appended by
/// [`set_bounds`](Self::set_bounds) and rebuilt wholesale whenever the
/// bounds change.
#[derive(Debug)]
pub struct World {
    bounds: Rect,
    entities: Vec<Entity>,
}

impl World {
    /// Create a world with the given bounds and its boundary sentinels.
    pub fn new(bounds: Rect) -> Self {
        let mut world = Self {
            bounds: Rect::ZERO,
            entities: Vec::new(),
        };
        world.set_bounds(bounds);
        world
    }

    /// The current world bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the world bounds.
    ///
    /// Propagates the new bounds to every entity, destroys the current
    /// boundary sentinels (matched by id) and appends freshly built ones
    /// sized to the new bounds. Sentinels are never resized in place.
    pub fn set_bounds(&mut self, bounds: Rect) {
        log::debug!("world bounds set to {bounds}");
        self.bounds = bounds;
        for entity in &mut self.entities {
            entity.world_bounds = bounds;
        }
        for entity in &mut self.entities {
            if Hotspot::is_bound(&entity.id) {
                entity.kill();
            }
        }
        self.entities.retain(|entity| !Hotspot::is_bound(&entity.id));
        self.entities
            .extend(Hotspot::all().iter().map(|hotspot| hotspot.entity(&bounds)));
    }

    // -----------------------------------------------------------------------
    // Entity CRUD
    // -----------------------------------------------------------------------

    /// Add an entity, stamping it with the current world bounds.
    pub fn insert(&mut self, mut entity: Entity) -> CoreResult<EntityId> {
        if self.entities.iter().any(|e| e.id == entity.id) {
            return Err(CoreError::DuplicateEntity(entity.id));
        }
        entity.world_bounds = self.bounds;
        let id = entity.id.clone();
        self.entities.push(entity);
        Ok(id)
    }

    /// Remove and return an entity by id.
    pub fn remove(&mut self, id: &EntityId) -> CoreResult<Entity> {
        let index = self
            .entities
            .iter()
            .position(|e| e.id == *id)
            .ok_or_else(|| CoreError::EntityNotFound(id.clone()))?;
        Ok(self.entities.remove(index))
    }

    /// Get a reference to an entity by id.
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == *id)
    }

    /// Get a mutable reference to an entity by id.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == *id)
    }

    /// All entities, boundary sentinels included, in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities, boundary sentinels included.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Advance the simulation by `time` seconds.
    ///
    /// Every non-static entity is updated exactly once, in insertion order.
    /// Each entity's collision set is computed against the collection at the
    /// moment of that entity's turn, so an entity updated later in the tick
    /// sees the moves of entities updated earlier.
    pub fn update(&mut self, time: f64) {
        for index in 0..self.entities.len() {
            if self.entities[index].is_static {
                continue;
            }
            let hits = collision::collisions(&self.entities[index], &self.entities);
            self.entities[index].update(&hits, time);
        }
    }
}
