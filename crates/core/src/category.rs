//! Study-material categories and the category filter sentinel.
//!
//! Categories are plain strings on the wire (matching the persisted data
//! format); the fixed list below is what the upload forms offer, so create
//! endpoints validate against it.

/// Category names offered by the notes and videos upload forms.
pub const CATEGORY_FOUNDATION: &str = "Foundation";
pub const CATEGORY_PROFESSIONAL: &str = "Professional";
pub const CATEGORY_CAREER: &str = "Career";
pub const CATEGORY_EXAM_PREP: &str = "Exam Prep";
pub const CATEGORY_SOCIAL: &str = "Social";

/// All valid study-material categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_FOUNDATION,
    CATEGORY_PROFESSIONAL,
    CATEGORY_CAREER,
    CATEGORY_EXAM_PREP,
    CATEGORY_SOCIAL,
];

/// Sentinel meaning "no category constraint" in list filters.
pub const CATEGORY_ALL: &str = "All";

/// Validate that a category is one of the fixed upload-form choices.
pub fn validate_category(category: &str) -> Result<(), String> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ))
    }
}
