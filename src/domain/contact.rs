use chrono::{DateTime, Utc};

use serde::Deserialize;

/// One contact-form submission, as written to the `contacts` collection.
///
/// Records are read-only to this system. All text fields may be missing or
/// empty on malformed writes; missing fields deserialize to empty strings and
/// the notification formatter substitutes a placeholder for them. The text is
/// display data, not parsed addresses, so it stays raw.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Creation timestamp set by the originating write; absent on malformed
    /// records.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}
