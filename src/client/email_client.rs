use std::time::Duration;

use anyhow::Context;

use reqwest::Client;

use secrecy::Secret;

use serde::Serialize;

use url::Url;

use crate::domain::EmailAddress;

/// Client for the outbound mail-relay service.
///
/// One call to [`EmailClient::send`] opens one authenticated submission and
/// reports the relay's immediate accept or reject. There is no retry, no
/// idempotency key, and no delivery confirmation beyond that.
///
/// Credentials are supplied per call rather than at construction so they can
/// be resolved fresh for every invocation.
#[derive(Debug)]
pub struct EmailClient {
    client: Client,

    api_submit_url: Url,
}

impl EmailClient {
    pub fn new(api_timeout: Duration, api_base_url: Url) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(api_timeout)
            .build()
            .context("Failed to build http client")?;

        let api_submit_url = api_base_url
            .join("messages")
            .context("Failed to create submit endpoint URL")?;

        Ok(Self {
            client,
            api_submit_url,
        })
    }

    pub async fn send(
        &self,
        credentials: &RelayCredentials,
        email: &Email,
    ) -> anyhow::Result<()> {
        use secrecy::ExposeSecret;

        let body = SubmitMessageRequest {
            from: &email.from,
            to: email.to.as_ref(),
            subject: &email.subject,
            text: &email.text,
        };

        self.client
            .post(self.api_submit_url.clone())
            .basic_auth(
                credentials.user.as_ref(),
                Some(credentials.password.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Account identity and credential presented to the relay
#[derive(Debug)]
pub struct RelayCredentials {
    pub user: EmailAddress,
    pub password: Secret<String>,
}

/// One outbound message envelope, plain text only
#[derive(Debug)]
pub struct Email {
    /// Display label plus sender address, e.g. `Contact Form <a@b.com>`
    pub from: String,
    pub to: EmailAddress,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct SubmitMessageRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}
