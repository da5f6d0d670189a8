//! Schedule repository trait for persisted schedule aggregates.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Combination, Schedule, Section, UserId};

/// Repository trait for the schedule storage operations the engine needs.
///
/// Schedules are always owned by a user and always replaced wholesale: a
/// generation run deletes the owner's previous schedules and inserts the new
/// set. [`replace_schedules`](ScheduleRepository::replace_schedules) performs
/// that transition atomically per user, so a concurrent reader never observes
/// the cleared-but-not-repopulated window or a mixture of old and new rows.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Delete every schedule owned by a user, including any storage-level
    /// associations the schedules own.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of schedules deleted (0 is not an error)
    async fn delete_all_schedules(&self, user_id: UserId) -> RepositoryResult<usize>;

    /// Create one schedule for a user from an ordered section list.
    ///
    /// # Returns
    /// * `Ok(Schedule)` - The created aggregate including its assigned ID
    async fn create_schedule(
        &self,
        user_id: UserId,
        sections: &[Section],
    ) -> RepositoryResult<Schedule>;

    /// Retrieve every schedule owned by a user, in creation order.
    async fn get_schedules(&self, user_id: UserId) -> RepositoryResult<Vec<Schedule>>;

    /// Atomically replace a user's schedules with one schedule per
    /// combination, preserving both the combination order and each
    /// combination's section order.
    ///
    /// # Returns
    /// * `Ok(Vec<Schedule>)` - The created aggregates with assigned IDs
    async fn replace_schedules(
        &self,
        user_id: UserId,
        combinations: &[Combination],
    ) -> RepositoryResult<Vec<Schedule>>;
}
