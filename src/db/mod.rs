//! Storage boundary for the schedule generation engine.
//!
//! This module abstracts the storage operations via the Repository pattern,
//! allowing different backends to be swapped without touching the engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Caller (resource layer, out of scope here)             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Generation orchestration                             │
//! │  - Schedule materialization (full replace)              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  - CartRepository (read-only cart boundary)             │
//! │  - ScheduleRepository (schedule aggregates)             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! Repositories are plain values injected into the services that use them;
//! there is no process-wide repository singleton. Use
//! [`factory::RepositoryFactory`] to build one from code, the environment,
//! or a `registrar.toml` file.

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    CartRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    ScheduleRepository,
};
