//! Frame-time sprite animation for Getier.
//!
//! This crate is deliberately tiny and self-contained: a [`FrameAnimator`]
//! turns irregular elapsed-time samples into discrete, loop-aware frame
//! advances. It knows nothing about entities, worlds, or rendering — the
//! frontend owns one animator per visible sprite and asks it for the next
//! frame whenever it redraws.

/// The frame-time accumulator state machine.
pub mod animator;

/// Re-export of [`animator::FrameAnimator`].
pub use animator::FrameAnimator;
