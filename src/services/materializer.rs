//! Schedule materialization.
//!
//! Turns the transient combinations produced by the enumerator into persisted
//! schedule aggregates. This is the only place in the engine that mutates
//! durable state: every run replaces the user's previous schedule set in
//! full, there is no incremental diffing.

use log::info;

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{Combination, Schedule, UserId};

/// Replace a user's persisted schedules with one schedule per combination.
///
/// Deletes every schedule the user owns, then creates one schedule per
/// combination, preserving the combination list's order and each
/// combination's section order. The delete and the inserts are a single
/// atomic step at the repository level.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `user_id` - Owner of the schedules
/// * `combinations` - Valid combinations, in enumeration order
///
/// # Returns
/// * `Ok(Vec<Schedule>)` - The created aggregates, including assigned IDs
/// * `Err(RepositoryError)` - If the replace fails; the failure is never
///   swallowed
pub async fn materialize<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    combinations: &[Combination],
) -> RepositoryResult<Vec<Schedule>> {
    let schedules = repo.replace_schedules(user_id, combinations).await?;
    info!(
        "Materialized {} schedules for user {}",
        schedules.len(),
        user_id
    );
    Ok(schedules)
}
