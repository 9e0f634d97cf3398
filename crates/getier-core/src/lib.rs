//! Core engine for Getier: entities, capabilities, and the world tick.
//!
//! A [`World`] owns a collection of [`Entity`] values and a bounds
//! rectangle. Each tick, every non-static entity receives its collision set
//! against the rest of the collection and dispatches it to its installed
//! capabilities — gravity, wall crawling, movement — which mutate the
//! entity's placement, direction, and state. Rendering is not this crate's
//! concern: a frontend reads entity frames and states and draws them however
//! it likes.

/// The capabilities that ship with the engine.
pub mod capabilities;
/// The capability trait and the per-entity capability set.
pub mod capability;
/// Collision records and the collision query.
pub mod collision;
/// Configuration for simulation constants.
pub mod config;
/// Entity types, identifiers, and states.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Plain 2D geometry in screen coordinates.
pub mod geometry;
/// Boundary sentinel entities along the world edges.
pub mod hotspot;
/// The world model that owns entities and drives the tick.
pub mod world;

/// Re-export built-in capabilities.
pub use capabilities::{Gravity, LateralBounce, LinearMovement, WallCrawler};
/// Re-export the capability trait and set.
pub use capability::{Capability, CapabilitySet};
/// Re-export collision types.
pub use collision::{Collision, collisions};
/// Re-export configuration types.
pub use config::{GravityConfig, SimConfig};
/// Re-export core entity types.
pub use entity::{AnimationPosition, Entity, EntityAnimation, EntityId, EntityState};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export geometry types.
pub use geometry::{Point, Rect, Size, Vector};
/// Re-export the boundary sentinel enumeration.
pub use hotspot::Hotspot;
/// Re-export the world model.
pub use world::World;
