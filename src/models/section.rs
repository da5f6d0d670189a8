//! Course section value types: weekday sets and meeting times.
//!
//! A [`Section`] is one meeting pattern for a course — the weekdays it meets
//! plus a wall-clock start and end time within a single day. The engine only
//! reads sections; they are immutable once constructed and construction
//! enforces the invariants the rest of the engine relies on.

use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

use super::ids::SectionId;

/// Day of the week a section may meet. Each day occupies a separate bit so a
/// set of meeting days packs into a single byte, matching the storage
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All weekdays in calendar order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Bit value of this day within a [`DaySet`] mask.
    pub const fn bit(self) -> u8 {
        match self {
            Day::Monday => 1,
            Day::Tuesday => 2,
            Day::Wednesday => 4,
            Day::Thursday => 8,
            Day::Friday => 16,
        }
    }

    /// Abbreviated week day name ("M", "Tu", "W", "Th", "F").
    pub const fn abbrev(self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "Tu",
            Day::Wednesday => "W",
            Day::Thursday => "Th",
            Day::Friday => "F",
        }
    }
}

/// Set of weekdays encoded as a five-bit mask (Mon=1 .. Fri=16).
///
/// Weekend bits do not exist; any mask above [`DaySet::MAX_MASK`] is rejected
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub struct DaySet(u8);

impl DaySet {
    /// Highest valid mask: all five weekdays set.
    pub const MAX_MASK: u8 = 0b1_1111;

    /// Empty day set.
    pub const EMPTY: DaySet = DaySet(0);

    /// Build a day set from a raw bitmask.
    pub fn from_bits(bits: u8) -> Result<Self, SectionError> {
        if bits > Self::MAX_MASK {
            return Err(SectionError::InvalidDayMask(bits));
        }
        Ok(DaySet(bits))
    }

    /// Build a day set from explicit days.
    pub fn of(days: &[Day]) -> Self {
        DaySet(days.iter().fold(0, |mask, day| mask | day.bit()))
    }

    /// Raw bitmask value.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, day: Day) -> bool {
        self.0 & day.bit() != 0
    }

    /// True if the two sets share at least one meeting day.
    pub fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Member days in calendar order.
    pub fn days(self) -> Vec<Day> {
        Day::ALL.iter().copied().filter(|d| self.contains(*d)).collect()
    }
}

impl TryFrom<u8> for DaySet {
    type Error = SectionError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        DaySet::from_bits(bits)
    }
}

impl From<DaySet> for u8 {
    fn from(set: DaySet) -> u8 {
        set.0
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.days().iter().map(|d| d.abbrev()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Construction errors for [`Section`] and [`DaySet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// The days-of-week mask has bits outside the five weekdays.
    #[error("invalid days-of-week mask: {0}")]
    InvalidDayMask(u8),

    /// The start time does not precede the end time.
    #[error("section start time {start} must be before end time {end}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },
}

/// One scheduled meeting pattern for a course.
///
/// Invariants, enforced by [`Section::new`]:
/// - `start_time < end_time`
/// - the day mask contains only weekday bits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    id: SectionId,
    days_of_week: DaySet,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl Section {
    /// Create a new section, validating the time range.
    pub fn new(
        id: SectionId,
        days_of_week: DaySet,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, SectionError> {
        if start_time >= end_time {
            return Err(SectionError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Section {
            id,
            days_of_week,
            start_time,
            end_time,
        })
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn days_of_week(&self) -> DaySet {
        self.days_of_week
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Convenient "M, W, F" representation of the meeting days.
    pub fn meeting_days_string(&self) -> String {
        self.days_of_week.to_string()
    }

    /// Convenient "09:00 AM to 12:00 PM" representation of the meeting period.
    pub fn meeting_times_string(&self) -> String {
        format!(
            "{} to {}",
            self.start_time.format("%I:%M %p"),
            self.end_time.format("%I:%M %p")
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section{{id={}, days={{{}}}, times={{{}}}}}",
            self.id,
            self.meeting_days_string(),
            self.meeting_times_string()
        )
    }
}
