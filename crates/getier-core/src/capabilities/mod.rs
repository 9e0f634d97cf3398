//! Built-in capabilities: the behaviors that can be attached to an entity.
//!
//! Each capability reads the subject's collision set and elapsed time once
//! per tick and mutates only its own subject. Composition determines a
//! creature's character: a walker carries gravity + bounce + movement, a
//! crawler carries wall crawling + movement.
//!
//! The collision set is computed once per tick before dispatch, so install
//! the deciders (gravity, wall crawler, bounce) ahead of the movement
//! integrator: they must act on the positions the collisions describe.

/// Gravity: keeps grounded entities resting on surfaces, drops the rest.
pub mod gravity;
/// Bounce walkers off the lateral world bounds.
pub mod lateral_bounce;
/// Linear position integration from direction and speed.
pub mod movement;
/// Redirect entities to crawl along the screen edges.
pub mod wall_crawler;

pub use gravity::Gravity;
pub use lateral_bounce::LateralBounce;
pub use movement::LinearMovement;
pub use wall_crawler::WallCrawler;
