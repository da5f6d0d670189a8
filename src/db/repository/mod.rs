//! Repository trait definitions for storage operations.
//!
//! The storage boundary is split into focused traits so implementations stay
//! small and testable:
//!
//! - [`error`]: Error types for repository operations
//! - [`cart`]: Read-only access to the user's cart
//! - [`schedule`]: Persisted schedule aggregates (full-replace semantics)
//!
//! # Trait Composition
//!
//! A complete backend implements both traits; functions that need the whole
//! surface take the [`FullRepository`] bound:
//!
//! ```ignore
//! async fn regenerate<R: FullRepository>(repo: &R, user: UserId) -> RepositoryResult<()> {
//!     let cart = repo.fetch_cart(user).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod cart;
pub mod error;
pub mod schedule;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use cart::CartRepository;
pub use schedule::ScheduleRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both repository
/// traits; use it as a convenient bound when a caller needs the full storage
/// surface.
pub trait FullRepository: CartRepository + ScheduleRepository {}

// Blanket implementation: implementing both traits implies FullRepository.
impl<T> FullRepository for T where T: CartRepository + ScheduleRepository {}
