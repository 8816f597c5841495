/// Catalog record ids are opaque strings.
///
/// Seed records use small integers-as-strings (`"1"`..`"4"`); uploaded
/// records use a millisecond-timestamp string. Uniqueness within a catalog is
/// the only invariant -- no ordering is implied.
pub type RecordId = String;

/// Generate an id for a newly uploaded record.
///
/// Millisecond timestamps cannot collide with the small-integer seed ids, and
/// a single admin cannot realistically submit two uploads in the same
/// millisecond.
pub fn new_record_id() -> RecordId {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// The upload date stamped on a record at creation, as `YYYY-MM-DD`.
///
/// Stored as a plain string on the wire and never updated afterwards.
pub fn current_upload_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
