//! # Registrar Rust Backend
//!
//! Schedule generation engine for a course-registration system.
//!
//! Given a user's shopping cart of courses, each with a user-selected subset
//! of candidate meeting sections, the engine produces every combination of
//! sections (exactly one per course) in which no two sections meet at an
//! overlapping time, and persists each valid combination as a distinct
//! schedule. Every run fully replaces the user's previous schedule set.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain value types — sections, day sets, cart selections,
//!   combinations, and the persisted schedule aggregate
//! - [`engine`]: Pure algorithms — the conflict detector and the
//!   backtracking enumerator
//! - [`db`]: Storage boundary — repository traits, the in-memory
//!   implementation, factory, and configuration
//! - [`services`]: Orchestration — the generation service and the schedule
//!   materializer
//!
//! ## Example
//!
//! ```ignore
//! use registrar_rust::db::RepositoryFactory;
//! use registrar_rust::services::GenerationService;
//!
//! let repo = RepositoryFactory::create_local();
//! let service = GenerationService::new(repo);
//! let schedules = service.generate_schedules(user_id).await?;
//! ```
//!
//! Enumeration and conflict checking never perform I/O; only the storage
//! calls suspend. Requests for the same user are serialized so concurrent
//! regenerations cannot interleave their delete/insert phases.

pub mod db;
pub mod engine;
pub mod models;
pub mod services;
