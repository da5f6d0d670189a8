//! Cart boundary types and the cart snapshot adapter.
//!
//! The cart collaborator hands the engine a list of courses, each with the
//! candidate sections the user selected. The engine depends only on these
//! minimal value shapes, not on the full persistence graph behind the cart.
//! [`parse_cart_json_str`] converts the snapshot JSON exchanged at that
//! boundary into validated domain values.

use anyhow::{Context, Result};
use serde::Serialize;

use super::ids::{CourseId, SectionId};
use super::section::{DaySet, Section};

/// A course in the cart together with its candidate sections, in the order
/// the user selected them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSelection {
    pub course_id: CourseId,
    pub sections: Vec<Section>,
}

impl CourseSelection {
    pub fn new(course_id: CourseId, sections: Vec<Section>) -> Self {
        Self {
            course_id,
            sections,
        }
    }

    /// True if at least one candidate section is selected. Only such
    /// selections participate in schedule generation.
    pub fn has_candidates(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// Snapshot of a user's cart as consumed by the generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    /// Course selections in cart order.
    pub selections: Vec<CourseSelection>,
    /// Content checksum of the snapshot this cart was built from.
    pub checksum: String,
}

#[derive(serde::Deserialize)]
struct CartInput {
    #[serde(default)]
    checksum: String,
    courses: Vec<CourseSelectionInput>,
}

#[derive(serde::Deserialize)]
struct CourseSelectionInput {
    course_id: i64,
    #[serde(default)]
    sections: Vec<SectionInput>,
}

#[derive(serde::Deserialize)]
struct SectionInput {
    id: i64,
    days_of_week: u8,
    start_time: chrono::NaiveTime,
    end_time: chrono::NaiveTime,
}

fn validate_input_cart(cart_json: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(cart_json).context("Invalid cart JSON")?;
    let has_courses = value
        .as_object()
        .and_then(|obj| obj.get("courses"))
        .is_some();
    if !has_courses {
        anyhow::bail!("Missing required 'courses' field");
    }
    Ok(())
}

/// Parse a cart snapshot from a JSON string.
///
/// This function deserializes the snapshot using Serde, rebuilds each
/// candidate [`Section`] through its validating constructor, and computes a
/// content checksum when the snapshot does not carry one.
///
/// # Arguments
///
/// * `cart_json` - Cart snapshot JSON (snake_case format matching the schema)
///
/// # Returns
///
/// A fully populated [`Cart`] with validated sections and a checksum.
pub fn parse_cart_json_str(cart_json: &str) -> Result<Cart> {
    validate_input_cart(cart_json)?;

    let input: CartInput =
        serde_json::from_str(cart_json).context("Failed to deserialize cart JSON using Serde")?;

    let mut selections = Vec::with_capacity(input.courses.len());
    for course in input.courses {
        let course_id = CourseId::new(course.course_id);
        let mut sections = Vec::with_capacity(course.sections.len());
        for raw in course.sections {
            let days = DaySet::from_bits(raw.days_of_week).with_context(|| {
                format!("Invalid day mask for section {} in course {}", raw.id, course_id)
            })?;
            let section = Section::new(SectionId::new(raw.id), days, raw.start_time, raw.end_time)
                .with_context(|| {
                    format!("Invalid section {} in course {}", raw.id, course_id)
                })?;
            sections.push(section);
        }
        selections.push(CourseSelection::new(course_id, sections));
    }

    let checksum = if input.checksum.is_empty() {
        compute_cart_checksum(cart_json)
    } else {
        input.checksum
    };

    Ok(Cart {
        selections,
        checksum,
    })
}

/// Compute a checksum for the cart snapshot JSON.
fn compute_cart_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CART: &str = r#"{
        "courses": [
            {
                "course_id": 101,
                "sections": [
                    {
                        "id": 1,
                        "days_of_week": 5,
                        "start_time": "09:00:00",
                        "end_time": "10:30:00"
                    }
                ]
            },
            {
                "course_id": 102,
                "sections": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_cart() {
        let cart = parse_cart_json_str(MINIMAL_CART).expect("Should parse minimal cart");

        assert_eq!(cart.selections.len(), 2);

        let first = &cart.selections[0];
        assert_eq!(first.course_id.value(), 101);
        assert_eq!(first.sections.len(), 1);
        assert!(first.has_candidates());

        let section = &first.sections[0];
        assert_eq!(section.id().value(), 1);
        assert_eq!(section.meeting_days_string(), "M, W");

        let second = &cart.selections[1];
        assert!(!second.has_candidates());
    }

    #[test]
    fn test_checksum_computed_when_missing() {
        let cart = parse_cart_json_str(MINIMAL_CART).unwrap();
        assert!(!cart.checksum.is_empty());

        // Same snapshot, same checksum.
        let again = parse_cart_json_str(MINIMAL_CART).unwrap();
        assert_eq!(cart.checksum, again.checksum);
    }

    #[test]
    fn test_checksum_preserved_when_present() {
        let json = r#"{"checksum": "abc123", "courses": []}"#;
        let cart = parse_cart_json_str(json).unwrap();
        assert_eq!(cart.checksum, "abc123");
    }

    #[test]
    fn test_missing_courses_key() {
        let result = parse_cart_json_str(r#"{"SomeOtherKey": []}"#);
        assert!(result.is_err(), "Should fail without courses key");
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_cart_json_str("not valid json {");
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_rejects_invalid_time_range() {
        let json = r#"{
            "courses": [
                {
                    "course_id": 101,
                    "sections": [
                        {
                            "id": 1,
                            "days_of_week": 1,
                            "start_time": "11:00:00",
                            "end_time": "10:00:00"
                        }
                    ]
                }
            ]
        }"#;

        let result = parse_cart_json_str(json);
        assert!(result.is_err(), "Should reject start >= end");
    }

    #[test]
    fn test_rejects_weekend_day_mask() {
        let json = r#"{
            "courses": [
                {
                    "course_id": 101,
                    "sections": [
                        {
                            "id": 1,
                            "days_of_week": 64,
                            "start_time": "09:00:00",
                            "end_time": "10:00:00"
                        }
                    ]
                }
            ]
        }"#;

        let result = parse_cart_json_str(json);
        assert!(result.is_err(), "Should reject mask above 31");
    }
}
