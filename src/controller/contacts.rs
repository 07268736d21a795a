use std::sync::Arc;

use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Responder, ResponseError};

use serde::Deserialize;

use thiserror::Error;

use crate::client::{Email, EmailClient};
use crate::domain::ContactSubmission;
use crate::notification;
use crate::params::{EmailParams, ParamError, ParamSource};
use crate::settings::SenderLabel;

/// Document-creation event as delivered by the document store trigger for
/// `contacts/{doc_id}`
#[derive(Debug, Deserialize)]
pub struct DocumentCreatedEvent {
    /// Identifier the storage layer assigned to the created document
    pub doc_id: String,
    /// Snapshot of the created document; absent on malformed deliveries
    pub data: Option<ContactSubmission>,
}

/// Handle one document-creation event.
///
/// The sequence is strictly linear: payload check, parameter check, compose,
/// dispatch. A delivery without a snapshot is a no-op, not a failure. Every
/// error past that point is fatal for the invocation and surfaces to the
/// delivering platform as a 500.
#[tracing::instrument(
    name = "Handle a new contact submission",
    skip(params, sender_label, email_client)
)]
#[post("")]
async fn document_created(
    params: web::Data<Arc<dyn ParamSource>>,
    sender_label: web::Data<SenderLabel>,
    email_client: web::Data<EmailClient>,
    event: web::Json<DocumentCreatedEvent>,
) -> Result<impl Responder, NotifyError> {
    let event = event.into_inner();

    let Some(submission) = event.data else {
        tracing::info!("No data associated with the event");
        return Ok(HttpResponse::NoContent());
    };

    // Resolved fresh on every invocation; fails fast before any dispatch
    let params = EmailParams::resolve(params.get_ref().as_ref())?;

    let email = build_notification_email(
        &submission,
        &event.doc_id,
        &params,
        sender_label.get_ref(),
    );

    match email_client.send(&params.credentials, &email).await {
        Ok(()) => {
            tracing::info!("Email sent successfully");
            Ok(HttpResponse::Ok())
        }
        Err(cause) => {
            tracing::error!("Error sending email: {:#}", cause);
            Err(NotifyError::SendEmail(cause))
        }
    }
}

/// Build the notification email for one submission
fn build_notification_email(
    submission: &ContactSubmission,
    doc_id: &str,
    params: &EmailParams,
    sender_label: &SenderLabel,
) -> Email {
    let text = format!(
        "You've received a new contact form submission!\n{}",
        notification::format_submission(submission, doc_id)
    );

    Email {
        from: format!("{} <{}>", sender_label, params.credentials.user),
        to: params.recipient.clone(),
        subject: notification::subject_for(submission),
        text,
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Config(#[from] ParamError),

    #[error("Failed to send email notification")]
    SendEmail(#[source] anyhow::Error),
}

impl ResponseError for NotifyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::SendEmail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Contact trigger endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/triggers/contacts").service(document_created)
}
