use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capability::{Capability, CapabilitySet};
use crate::capabilities::gravity::Gravity;
use crate::collision::Collision;
use crate::config::GravityConfig;
use crate::geometry::{Point, Rect, Size, Vector};

/// Unique identifier for every entity in the world.
///
/// Ids are strings so the fixed boundary-sentinel ids and generated creature
/// ids share one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Create an id from a known name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id with the given prefix and a short random suffix.
    pub fn unique(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", &Uuid::new_v4().to_string()[..8]))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an action animation is anchored relative to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPosition {
    /// The animation frame is pinned to the entity's bottom-left corner, so
    /// its hitbox still corresponds to the ground the entity stands on.
    FromEntityBottomLeft,
    /// The animation plays at a fixed world position.
    Absolute(Point),
}

/// A named sprite animation an entity can perform while in the `Action` state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAnimation {
    /// Name of the sprite sequence to play.
    pub id: String,
    /// Rendered size override, if the animation is drawn larger or smaller
    /// than the entity's frame.
    pub size: Option<Size>,
    /// Anchoring of the animation relative to the entity.
    pub position: AnimationPosition,
}

impl EntityAnimation {
    /// Create an animation anchored at the entity's bottom-left corner with
    /// no size override.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: None,
            position: AnimationPosition::FromEntityBottomLeft,
        }
    }

    /// Set a rendered size override.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the anchoring of the animation.
    pub fn with_position(mut self, position: AnimationPosition) -> Self {
        self.position = position;
        self
    }
}

/// What an entity is currently doing. Exactly one state is active at a time;
/// transitions are how capabilities communicate intent to the rest of the
/// system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityState {
    /// Standing still.
    Idle,
    /// Walking along its direction.
    Move,
    /// Falling until a surface confirms as ground.
    FreeFall,
    /// Being dragged by the user; behaviors must not fight the drag.
    Drag,
    /// Playing a one-off animation.
    Action(EntityAnimation),
}

/// A creature or boundary sentinel living in a [`World`](crate::world::World).
///
/// The frame is the single source of truth for placement; direction and
/// speed describe intended motion; the orientation angles and upside-down
/// flag are purely visual and are set by the wall crawler.
#[derive(Debug, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identity, also used to recognize boundary sentinels.
    pub id: EntityId,
    /// Position and size in world coordinates.
    pub frame: Rect,
    /// Direction of travel. Not necessarily normalized.
    pub direction: Vector,
    /// Scalar speed multiplier applied to the direction when integrating.
    pub speed: f64,
    /// Rotation around the x axis, in radians.
    pub x_angle: f64,
    /// Rotation around the y axis, in radians.
    pub y_angle: f64,
    /// Rotation around the z axis, in radians.
    pub z_angle: f64,
    /// Render the sprite flipped upside down.
    pub is_upside_down: bool,
    /// Bounds of the containing world, refreshed whenever they change.
    pub world_bounds: Rect,
    /// Static entities are excluded from the per-tick update.
    pub is_static: bool,
    /// Ephemeral entities overlap others without counting as solid ground.
    pub is_ephemeral: bool,
    state: EntityState,
    #[serde(skip)]
    capabilities: CapabilitySet,
}

impl Entity {
    /// Create an idle, non-static entity with no capabilities.
    pub fn new(id: EntityId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            direction: Vector::ZERO,
            speed: 0.0,
            x_angle: 0.0,
            y_angle: 0.0,
            z_angle: 0.0,
            is_upside_down: false,
            world_bounds: Rect::ZERO,
            is_static: false,
            is_ephemeral: false,
            state: EntityState::Idle,
            capabilities: CapabilitySet::new(),
        }
    }

    /// The entity's current state.
    pub fn state(&self) -> &EntityState {
        &self.state
    }

    /// Transition to a new state.
    pub fn set_state(&mut self, state: EntityState) {
        if self.state != state {
            log::debug!("{}: {:?} -> {:?}", self.id, self.state, state);
        }
        self.state = state;
    }

    /// Install a capability, replacing any existing instance of its type.
    pub fn install<C: Capability + 'static>(&mut self, capability: C) {
        self.capabilities.install(Box::new(capability));
    }

    /// Look up an installed capability by type.
    pub fn capability<C: Capability + 'static>(&self) -> Option<&C> {
        self.capabilities.get::<C>()
    }

    /// Look up an installed capability by type, mutably.
    pub fn capability_mut<C: Capability + 'static>(&mut self) -> Option<&mut C> {
        self.capabilities.get_mut::<C>()
    }

    /// Remove a capability by type, detaching it from this entity.
    pub fn remove_capability<C: Capability + 'static>(&mut self) -> bool {
        self.capabilities.remove::<C>().is_some()
    }

    /// The installed capabilities.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Dispatch one tick to every installed capability, in installation
    /// order. Each capability is swapped out of its slot for the duration of
    /// its call so it can mutate the entity, including sibling capabilities.
    pub fn update(&mut self, collisions: &[Collision], time: f64) {
        for index in 0..self.capabilities.len() {
            let mut capability = self.capabilities.swap_out(index);
            capability.update(self, collisions, time);
            self.capabilities.swap_in(index, capability);
        }
    }

    /// Attach or detach gravity with default constants.
    ///
    /// Detaching also clears a lingering downward direction and forces the
    /// entity back into the `Move` state, so a formerly falling creature
    /// resumes walking instead of keeping its fall vector.
    pub fn set_gravity(&mut self, enabled: bool) {
        if enabled {
            if !self.capabilities.has::<Gravity>() {
                self.install(Gravity::new(GravityConfig::default()));
            }
        } else {
            self.capabilities.remove::<Gravity>();
            if self.direction.dy > 0.0 {
                self.direction = Vector::new(1.0, 0.0);
            }
            self.set_state(EntityState::Move);
        }
    }

    /// Detach every capability, leaving the entity inert.
    pub fn kill(&mut self) {
        log::trace!("{}: killed", self.id);
        self.capabilities.clear();
    }
}
