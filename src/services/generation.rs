//! Schedule generation orchestration.
//!
//! Ties the pieces together for one "regenerate my schedules" request: fetch
//! the user's cart, keep the courses that have candidate sections, enumerate
//! every conflict-free combination, and materialize the result. Enumeration
//! runs synchronously on the calling task; only the storage calls await.

use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::db::repository::{CartRepository, FullRepository, RepositoryError};
use crate::engine::{enumerate, SearchLimitExceeded, SearchLimits};
use crate::models::{CourseSelection, Schedule, UserId};
use crate::services::materializer;

/// Errors surfaced by schedule generation.
///
/// An empty cart is not among them: a cart with no selected sections is valid
/// input and yields a successful (single empty schedule) result.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The requesting user could not be resolved. Nothing was mutated.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// The search guard aborted the enumeration. Nothing was mutated.
    #[error(transparent)]
    LimitExceeded(#[from] SearchLimitExceeded),

    /// The storage backend failed while replacing the user's schedules.
    #[error(transparent)]
    Persistence(RepositoryError),
}

/// Schedule generation service.
///
/// Holds the injected repository and the configured search limits. Requests
/// for the same user are serialized through a per-user mutex so two
/// concurrent regenerations cannot interleave their delete/insert phases;
/// requests for different users proceed independently.
pub struct GenerationService {
    repo: Arc<dyn FullRepository>,
    limits: SearchLimits,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl GenerationService {
    /// Create a service with no search limits.
    pub fn new(repo: Arc<dyn FullRepository>) -> Self {
        Self::with_limits(repo, SearchLimits::UNLIMITED)
    }

    /// Create a service with the given search limits.
    pub fn with_limits(repo: Arc<dyn FullRepository>, limits: SearchLimits) -> Self {
        Self {
            repo,
            limits,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The search limits this service applies.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    async fn user_lock(&self, user_id: UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Generate and persist all conflict-free schedules for a user's cart.
    ///
    /// Fetches the cart, filters to course selections with at least one
    /// candidate section (preserving cart order), enumerates every valid
    /// combination, and replaces the user's stored schedules with the result.
    /// With no eligible courses the single empty combination still replaces
    /// whatever schedules the user had before.
    ///
    /// # Arguments
    /// * `user_id` - Unique user ID
    ///
    /// # Returns
    /// * `Ok(Vec<Schedule>)` - The newly created schedules, in enumeration order
    /// * `Err(GenerationError)` - See the error type for the failure taxonomy
    pub async fn generate_schedules(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Schedule>, GenerationError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        debug!("Generating schedules for user with ID '{}'", user_id);

        let cart = self.repo.fetch_cart(user_id).await.map_err(|e| {
            if e.is_not_found() {
                GenerationError::UserNotFound(user_id)
            } else {
                GenerationError::Persistence(e)
            }
        })?;

        // Courses without any section selected do not participate.
        let eligible: Vec<CourseSelection> = cart
            .selections
            .into_iter()
            .filter(CourseSelection::has_candidates)
            .collect();

        let combinations = enumerate(&eligible, self.limits)?;
        debug!(
            "Found {} schedule combinations for user '{}'",
            combinations.len(),
            user_id
        );

        let schedules = materializer::materialize(self.repo.as_ref(), user_id, &combinations)
            .await
            .map_err(GenerationError::Persistence)?;

        info!(
            "Generated {} schedules for user '{}' from {} eligible courses",
            schedules.len(),
            user_id,
            eligible.len()
        );
        Ok(schedules)
    }
}
