//! Study note records and the note upload DTO.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::category::validate_category;
use crate::types::{current_upload_date, new_record_id, RecordId};
use crate::validation::{validate_pdf_file_name, validate_title, validate_url};

/// A study note in the notes catalog.
///
/// Field names are camelCase on the wire to preserve the persisted document
/// format (`fileName`, `uploadDate`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(flatten)]
    pub source: NoteSource,
    pub upload_date: String,
    /// Display-only download counter; never incremented by any operation.
    #[serde(default)]
    pub downloads: u64,
}

/// How a note's content is delivered: an attached PDF or an external link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum NoteSource {
    File {
        file_name: String,
        /// Display string such as `"2.5 MB"`; the file itself is not stored.
        file_size: String,
    },
    Url {
        url: String,
    },
}

/// Payload of the note upload form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(flatten)]
    pub source: NoteSource,
}

impl CreateNote {
    /// Validate the upload form fields, mirroring the form's own checks.
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_category(&self.category)?;
        match &self.source {
            NoteSource::File { file_name, .. } => validate_pdf_file_name(file_name),
            NoteSource::Url { url } => validate_url(url),
        }
    }
}

impl Note {
    /// Build a persistable note from a validated upload.
    ///
    /// The id and upload date are assigned here, server-side; the download
    /// counter starts at zero.
    pub fn from_upload(input: CreateNote) -> Self {
        Note {
            id: new_record_id(),
            title: input.title,
            description: input.description,
            category: input.category,
            source: input.source,
            upload_date: current_upload_date(),
            downloads: 0,
        }
    }
}

impl CatalogRecord for Note {
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
