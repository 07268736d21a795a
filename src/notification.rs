use chrono::{DateTime, Utc};

use crate::domain::ContactSubmission;

/// Literal substituted for any submission field that is missing or empty
const PLACEHOLDER: &str = "Not provided";

/// Display format for the "Submitted" line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render one submission into the plain-text block embedded in the
/// notification email.
///
/// The timestamp is the only field defaulted to a computed value (the current
/// time) rather than the placeholder, since the line always needs some
/// timestamp to display.
pub fn format_submission(submission: &ContactSubmission, doc_id: &str) -> String {
    format_submission_at(submission, doc_id, Utc::now())
}

/// Subject line for the notification email.
///
/// Uses the raw submitted name, even when empty.
pub fn subject_for(submission: &ContactSubmission) -> String {
    format!("New Contact Form Submission from {}", submission.name)
}

fn format_submission_at(
    submission: &ContactSubmission,
    doc_id: &str,
    now: DateTime<Utc>,
) -> String {
    let submitted = submission.created_at.unwrap_or(now);

    format!(
        "Contact ID: {}\nName: {}\nEmail: {}\nMessage: {}\nSubmitted: {}\n",
        doc_id,
        or_placeholder(&submission.name),
        or_placeholder(&submission.email),
        or_placeholder(&submission.message),
        submitted.format(TIMESTAMP_FORMAT),
    )
}

fn or_placeholder(field: &str) -> &str {
    if field.is_empty() {
        PLACEHOLDER
    } else {
        field
    }
}
