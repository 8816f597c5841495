//! Course records and the course form DTO.
//!
//! Courses carry display-oriented pricing and enrollment strings rather than
//! numbers ("₹4000", "500+"); they are marketing copy, not billing data.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::types::{new_record_id, RecordId};
use crate::validation::{validate_required, validate_title};

/// A course offering shown on the courses page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Display string such as `"4 Months"`.
    pub duration: String,
    pub price: String,
    pub original_price: String,
    /// Display-only enrollment string such as `"500+"`.
    pub students: String,
    pub instructor: String,
    pub category: String,
    pub is_active: bool,
}

/// Payload of the course form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    /// Optional strike-through price; defaults to the price itself.
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default = "default_instructor")]
    pub instructor: String,
    #[serde(default = "default_course_category")]
    pub category: String,
}

fn default_instructor() -> String {
    "Ankit Sir".to_string()
}

fn default_course_category() -> String {
    "Complete Course".to_string()
}

impl CreateCourse {
    /// Validate the course form: title, description, duration, and price are
    /// all required.
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_required(&self.description, "a course description")?;
        validate_required(&self.duration, "the course duration")?;
        validate_required(&self.price, "the course price")
    }
}

impl Course {
    /// Build a persistable course from a validated form submission.
    ///
    /// New courses start active with zero enrolled students.
    pub fn from_form(input: CreateCourse) -> Self {
        let price = input.price.trim().to_string();
        let original_price = input
            .original_price
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| price.clone());

        Course {
            id: new_record_id(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            duration: input.duration.trim().to_string(),
            price,
            original_price,
            students: "0".to_string(),
            instructor: input.instructor.trim().to_string(),
            category: input.category,
            is_active: true,
        }
    }
}

impl CatalogRecord for Course {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}
