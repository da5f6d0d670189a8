//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    CartRepository, ErrorContext, RepositoryError, RepositoryResult, ScheduleRepository,
};
use crate::models::{Cart, Combination, CourseSelection, Schedule, ScheduleId, Section, UserId};

/// In-memory local repository.
///
/// Stores users, carts, and schedules in memory behind one `RwLock`, which
/// also gives `replace_schedules` its atomicity: the delete and the inserts
/// happen under a single write lock, so no reader can observe the
/// intermediate state.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
/// repo.add_user(UserId(1));
/// repo.set_cart(UserId(1), selections);
///
/// let schedules = repo.get_schedules(UserId(1)).await.unwrap();
/// assert!(schedules.is_empty());
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    users: HashSet<UserId>,
    carts: HashMap<UserId, Cart>,
    schedules: HashMap<ScheduleId, Schedule>,
    // Creation-ordered schedule IDs per owner.
    schedules_by_user: HashMap<UserId, Vec<ScheduleId>>,

    // ID counter
    next_schedule_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            users: HashSet::new(),
            carts: HashMap::new(),
            schedules: HashMap::new(),
            schedules_by_user: HashMap::new(),
            next_schedule_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Register a user. Users must exist before their cart can be fetched.
    pub fn add_user(&self, user_id: UserId) {
        let mut data = self.data.write().unwrap();
        data.users.insert(user_id);
    }

    /// Seed a user's cart with course selections. Registers the user if the
    /// caller has not done so already.
    pub fn set_cart(&self, user_id: UserId, selections: Vec<CourseSelection>) {
        let mut data = self.data.write().unwrap();
        data.users.insert(user_id);
        data.carts.insert(
            user_id,
            Cart {
                selections,
                checksum: String::new(),
            },
        );
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of schedules stored across all users.
    pub fn schedule_count(&self) -> usize {
        self.data.read().unwrap().schedules.len()
    }

    /// Check if a user is registered.
    pub fn has_user(&self, user_id: UserId) -> bool {
        self.data.read().unwrap().users.contains(&user_id)
    }

    /// Helper to check health and return an error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }

    fn delete_all_locked(data: &mut LocalData, user_id: UserId) -> usize {
        let ids = data.schedules_by_user.remove(&user_id).unwrap_or_default();
        for id in &ids {
            data.schedules.remove(id);
        }
        ids.len()
    }

    fn create_locked(data: &mut LocalData, user_id: UserId, sections: &[Section]) -> Schedule {
        let id = ScheduleId::new(data.next_schedule_id);
        data.next_schedule_id += 1;

        let schedule = Schedule {
            id,
            user_id,
            selected: false,
            sections: sections.to_vec(),
        };

        data.schedules.insert(id, schedule.clone());
        data.schedules_by_user.entry(user_id).or_default().push(id);
        schedule
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for LocalRepository {
    async fn fetch_cart(&self, user_id: UserId) -> RepositoryResult<Cart> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        if !data.users.contains(&user_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("User {} not found", user_id),
                ErrorContext::new("fetch_cart")
                    .with_entity("user")
                    .with_entity_id(user_id),
            ));
        }

        // A registered user without a stored cart has an empty cart.
        Ok(data.carts.get(&user_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn delete_all_schedules(&self, user_id: UserId) -> RepositoryResult<usize> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        Ok(Self::delete_all_locked(&mut data, user_id))
    }

    async fn create_schedule(
        &self,
        user_id: UserId,
        sections: &[Section],
    ) -> RepositoryResult<Schedule> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        Ok(Self::create_locked(&mut data, user_id, sections))
    }

    async fn get_schedules(&self, user_id: UserId) -> RepositoryResult<Vec<Schedule>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let ids = data.schedules_by_user.get(&user_id);
        Ok(ids
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| data.schedules.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace_schedules(
        &self,
        user_id: UserId,
        combinations: &[Combination],
    ) -> RepositoryResult<Vec<Schedule>> {
        self.check_health()?;

        // Delete and insert under one write lock so readers never see the
        // cleared-but-not-repopulated window.
        let mut data = self.data.write().unwrap();
        Self::delete_all_locked(&mut data, user_id);

        let created = combinations
            .iter()
            .map(|combination| Self::create_locked(&mut data, user_id, combination.sections()))
            .collect();
        Ok(created)
    }
}
