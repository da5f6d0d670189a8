//! Depth-first backtracking enumeration of conflict-free section combinations.
//!
//! The search tree has one level per course; the branching factor at each
//! level is that course's candidate count. Candidates that conflict with the
//! partial assignment are pruned without descending, which keeps the search
//! tractable in the common case. Without conflicts the search degenerates to
//! the full Cartesian product of the candidate lists, so an optional
//! [`SearchLimits`] guard can bound the work.

use crate::engine::conflict;
use crate::models::{Combination, CourseSelection, Section};

/// Resource-exhaustion guard for the enumeration phase.
///
/// Both limits default to unlimited. Under the limits the search semantics
/// are unchanged; exceeding either aborts the whole search with
/// [`SearchLimitExceeded`] rather than returning a truncated result, since a
/// partial listing would silently break the exhaustive-enumeration contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of combinations collected.
    pub max_combinations: Option<usize>,
    /// Maximum number of candidate placements examined.
    pub max_visited_nodes: Option<usize>,
}

impl SearchLimits {
    /// No limits: the search always runs to completion.
    pub const UNLIMITED: SearchLimits = SearchLimits {
        max_combinations: None,
        max_visited_nodes: None,
    };
}

/// The enumeration was aborted by a [`SearchLimits`] guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchLimitExceeded {
    #[error("schedule search exceeded the combination limit of {0}")]
    Combinations(usize),

    #[error("schedule search exceeded the visited-node limit of {0}")]
    VisitedNodes(usize),
}

/// Enumerate every conflict-free combination of one candidate section per
/// course.
///
/// Courses are processed in input order and candidates are tried in their
/// given order, so two runs on identical input produce combinations in
/// identical order. Zero courses yield exactly one combination: the empty
/// one. A course whose candidates all conflict with the partial assignment
/// (or whose candidate list is empty) contributes zero combinations for that
/// branch, not an error.
pub fn enumerate(
    courses: &[CourseSelection],
    limits: SearchLimits,
) -> Result<Vec<Combination>, SearchLimitExceeded> {
    let mut current: Vec<Section> = Vec::with_capacity(courses.len());
    let mut combinations = Vec::new();
    let mut visited: usize = 0;
    build(courses, 0, &mut current, &mut combinations, &mut visited, limits)?;
    Ok(combinations)
}

fn build(
    courses: &[CourseSelection],
    course_index: usize,
    current: &mut Vec<Section>,
    combinations: &mut Vec<Combination>,
    visited: &mut usize,
    limits: SearchLimits,
) -> Result<(), SearchLimitExceeded> {
    // A full assignment has been built: record a copy. The copy matters,
    // `current` keeps mutating while the search backtracks.
    if course_index == courses.len() {
        if let Some(max) = limits.max_combinations {
            if combinations.len() >= max {
                return Err(SearchLimitExceeded::Combinations(max));
            }
        }
        combinations.push(Combination::new(current.clone()));
        return Ok(());
    }

    for candidate in &courses[course_index].sections {
        if let Some(max) = limits.max_visited_nodes {
            *visited += 1;
            if *visited > max {
                return Err(SearchLimitExceeded::VisitedNodes(max));
            }
        }

        // Skip candidates that clash with the sections chosen so far; the
        // whole subtree below them is dead.
        if conflict::conflicts_with_any(current, candidate) {
            continue;
        }

        current.push(candidate.clone());
        build(courses, course_index + 1, current, combinations, visited, limits)?;
        current.pop();
    }

    Ok(())
}
