use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::client::EmailClient;
use crate::controller::contacts;
use crate::params::ParamSource;
use crate::settings::SenderLabel;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("I am alive")
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    params: Arc<dyn ParamSource>,
    sender_label: SenderLabel,
    email_client: EmailClient,
) -> anyhow::Result<Server> {
    // Wrap application data
    let params = web::Data::new(params);
    let sender_label = web::Data::new(sender_label);
    let email_client = web::Data::new(email_client);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(params.clone())
            .app_data(sender_label.clone())
            .app_data(email_client.clone())
            .service(health_check)
            .service(contacts::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
