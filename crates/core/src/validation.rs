//! Field validation shared by the upload endpoints.
//!
//! Mirrors what the upload forms enforce: required title, PDF-only file
//! attachments, and http(s) URLs. Each function returns a human-readable
//! message suitable for surfacing directly to the admin.

/// Validate a record title: required, non-blank.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Please enter a title.".to_string());
    }
    Ok(())
}

/// Validate a generic required text field.
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Please enter {label}."));
    }
    Ok(())
}

/// Validate an external URL: must start with `http://` or `https://` and
/// have something after the scheme.
pub fn validate_url(url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err("Please enter a valid URL starting with http:// or https://".to_string()),
    }
}

/// Validate an attached document file name: required, `.pdf` only.
pub fn validate_pdf_file_name(file_name: &str) -> Result<(), String> {
    if file_name.trim().is_empty() {
        return Err("Please select a PDF file to upload.".to_string());
    }
    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err("Please select a PDF file only.".to_string());
    }
    Ok(())
}
