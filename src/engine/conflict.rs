//! Conflict detection between course sections.
//!
//! Two sections conflict when they share at least one meeting day and their
//! time ranges overlap. This is the predicate the enumerator prunes with; it
//! is a pure function over two immutable values and has no failure modes.

use crate::models::Section;

/// Boundary semantics of the overlap test: sections that are exactly
/// back-to-back (one ends at the instant the other starts) count as
/// conflicting. Flipping this to `false` makes the range comparisons strict.
pub const TOUCHING_SECTIONS_CONFLICT: bool = true;

/// Check whether there is a conflict between two sections' meeting times.
///
/// Returns true iff the sections share at least one meeting day and the time
/// range of `b` starts within `a`'s range, ends within `a`'s range, or
/// strictly contains `a`'s range. The predicate is symmetric, and reflexive
/// for any section that meets on at least one day.
pub fn conflicts(a: &Section, b: &Section) -> bool {
    a.days_of_week().intersects(b.days_of_week()) && time_ranges_overlap(a, b)
}

/// Check whether a candidate section conflicts with any section already in a
/// partial schedule.
pub fn conflicts_with_any(schedule: &[Section], candidate: &Section) -> bool {
    schedule.iter().any(|existing| conflicts(existing, candidate))
}

fn within_range(start: chrono::NaiveTime, end: chrono::NaiveTime, t: chrono::NaiveTime) -> bool {
    if TOUCHING_SECTIONS_CONFLICT {
        start <= t && t <= end
    } else {
        start < t && t < end
    }
}

fn time_ranges_overlap(a: &Section, b: &Section) -> bool {
    // b starts inside a, b ends inside a, or b contains a entirely.
    within_range(a.start_time(), a.end_time(), b.start_time())
        || within_range(a.start_time(), a.end_time(), b.end_time())
        || (b.start_time() < a.start_time() && b.end_time() > a.end_time())
}
