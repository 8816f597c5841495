//! Video lecture records and the video upload DTO.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::category::validate_category;
use crate::types::{current_upload_date, new_record_id, RecordId};
use crate::validation::{validate_required, validate_title, validate_url};

/// Thumbnail applied when the upload form leaves the field empty.
pub const DEFAULT_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=200&fit=crop";

/// Instructors offered by the video upload form.
pub const INSTRUCTORS: &[&str] = &["Ankit Sir", "Priya Ma'am", "Rahul Sir", "Neha Ma'am"];

/// Validate that the instructor is one of the fixed form choices.
pub fn validate_instructor(instructor: &str) -> Result<(), String> {
    if INSTRUCTORS.contains(&instructor) {
        Ok(())
    } else {
        Err(format!(
            "Invalid instructor '{instructor}'. Must be one of: {}",
            INSTRUCTORS.join(", ")
        ))
    }
}

/// A video lecture in the videos catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Display string such as `"15:30"`.
    pub duration: String,
    pub instructor: String,
    pub url: String,
    pub thumbnail: String,
    pub upload_date: String,
    /// Display-only view counter; never incremented by any operation.
    #[serde(default)]
    pub views: u64,
}

/// Payload of the video upload form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub instructor: String,
    pub duration: String,
    pub url: String,
    /// Optional; falls back to [`DEFAULT_THUMBNAIL`].
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl CreateVideo {
    /// Validate the upload form fields, mirroring the form's own checks.
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_category(&self.category)?;
        validate_instructor(&self.instructor)?;
        validate_url(&self.url)?;
        validate_required(&self.duration, "video duration")
    }
}

impl Video {
    /// Build a persistable video from a validated upload.
    pub fn from_upload(input: CreateVideo) -> Self {
        let thumbnail = input
            .thumbnail
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string());

        Video {
            id: new_record_id(),
            title: input.title,
            description: input.description,
            category: input.category,
            duration: input.duration,
            instructor: input.instructor,
            url: input.url,
            thumbnail,
            upload_date: current_upload_date(),
            views: 0,
        }
    }
}

impl CatalogRecord for Video {
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
