use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use contact_notify::app;
use contact_notify::client::EmailClient;
use contact_notify::params::{EnvSource, ParamSource};
use contact_notify::settings::Settings;
use contact_notify::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("info")?;

    let settings = Settings::load().expect("Failed to load settings");

    let email_client = EmailClient::new(
        settings.email.api_timeout(),
        settings.email.api_base_url(),
    )?;

    let params: Arc<dyn ParamSource> = Arc::new(EnvSource);

    let listener = TcpListener::bind(settings.app.addr())?;

    app::run(
        listener,
        params,
        settings.email.sender_label(),
        email_client,
    )?
    .await
    .context("Failed to run app")
}
