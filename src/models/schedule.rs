//! Generated section combinations and the persisted schedule aggregate.

use serde::Serialize;

use super::ids::{ScheduleId, SectionId, UserId};
use super::section::Section;

/// One choice of exactly one section per course, in the same course order as
/// the generation input.
///
/// Combinations are produced by the enumerator, which guarantees that no two
/// member sections conflict. They are transient: the materializer turns each
/// one into a persisted [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination(Vec<Section>);

impl Combination {
    pub fn new(sections: Vec<Section>) -> Self {
        Combination(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.0
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A persisted schedule owned by a user.
///
/// Holds the sections of one valid combination; section order is preserved
/// for display and carries no semantic weight. Every generation run deletes
/// the user's previous schedules and creates a fresh set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Unique ID assigned by the storage backend.
    pub id: ScheduleId,
    /// Owner of the schedule.
    pub user_id: UserId,
    /// Preferred-schedule flag. Generation always creates unselected
    /// schedules; selection happens elsewhere.
    pub selected: bool,
    /// Sections of the underlying combination, in course order.
    pub sections: Vec<Section>,
}

impl Schedule {
    /// IDs of the member sections, in stored order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::{Day, DaySet};
    use chrono::NaiveTime;

    fn section(id: i64) -> Section {
        Section::new(
            SectionId::new(id),
            DaySet::of(&[Day::Monday]),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_combination_preserves_order() {
        let combo = Combination::new(vec![section(3), section(1), section(2)]);
        let ids: Vec<i64> = combo.sections().iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_combination() {
        let combo = Combination::new(vec![]);
        assert!(combo.is_empty());
        assert_eq!(combo.len(), 0);
    }

    #[test]
    fn test_schedule_section_ids() {
        let schedule = Schedule {
            id: ScheduleId(1),
            user_id: UserId(7),
            selected: false,
            sections: vec![section(10), section(20)],
        };
        assert_eq!(
            schedule.section_ids(),
            vec![SectionId(10), SectionId(20)]
        );
    }
}
