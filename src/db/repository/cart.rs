//! Cart repository trait: the read-only boundary to the cart collaborator.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Cart, UserId};

/// Repository trait for reading a user's cart.
///
/// The cart itself (adding courses, selecting sections) is managed elsewhere;
/// the generation engine only ever reads it. Implementations must be
/// `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Fetch the cart snapshot for a user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user ID
    ///
    /// # Returns
    /// * `Ok(Cart)` - The user's cart; empty carts are valid and not an error
    /// * `Err(RepositoryError::NotFound)` - If the user does not exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_cart(&self, user_id: UserId) -> RepositoryResult<Cart>;
}
