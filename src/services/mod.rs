//! Service layer for business logic and orchestration.
//!
//! Services sit between the pure algorithms in [`crate::engine`] and the
//! storage boundary in [`crate::db`]: the generation service orchestrates a
//! whole regeneration request, and the materializer owns the transition from
//! transient combinations to persisted schedules.

pub mod generation;
pub mod materializer;

pub use generation::{GenerationError, GenerationService};
pub use materializer::materialize;
