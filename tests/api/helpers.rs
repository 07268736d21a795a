use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response};

use serde_json::json;

use url::Url;

use wiremock::MockServer;

use contact_notify::app;
use contact_notify::client::EmailClient;
use contact_notify::params::{ParamSource, EMAIL_PASSWORD, EMAIL_RECIPIENT, EMAIL_USER};
use contact_notify::settings::SenderLabel;

pub const TEST_USER: &str = "notifier@test.com";
pub const TEST_RECIPIENT: &str = "owner@test.com";

/// In-memory parameter source; each test controls exactly which
/// configuration values are present.
#[derive(Debug, Default)]
pub struct TestParams(HashMap<&'static str, String>);

impl TestParams {
    pub fn all_set() -> Self {
        let mut values = HashMap::new();
        values.insert(EMAIL_USER, TEST_USER.to_string());
        values.insert(EMAIL_PASSWORD, "hunter2".to_string());
        values.insert(EMAIL_RECIPIENT, TEST_RECIPIENT.to_string());
        Self(values)
    }

    pub fn without(mut self, key: &'static str) -> Self {
        self.0.remove(key);
        self
    }
}

impl ParamSource for TestParams {
    fn value(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

pub struct TestApp {
    addr: String,

    pub client: Client,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn(params: TestParams) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let email_server = MockServer::start().await;

        let email_client = {
            let api_base_url =
                Url::parse(&email_server.uri()).expect("Failed to parse mock server uri");
            let api_timeout = Duration::from_secs(2);

            EmailClient::new(api_timeout, api_base_url).expect("Failed to create email client")
        };

        let params: Arc<dyn ParamSource> = Arc::new(params);

        let server = app::run(
            listener,
            params,
            SenderLabel::new("Contact Form"),
            email_client,
        )
        .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self {
            addr,
            client,
            email_server,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn contact_created(&self, event: &serde_json::Value) -> reqwest::Result<Response> {
        self.request(Method::POST, "triggers/contacts")
            .json(event)
            .send()
            .await
    }
}

/// Document-creation event payload for the contacts trigger
pub fn contact_event(doc_id: &str, name: &str, email: &str, message: &str) -> serde_json::Value {
    json!({
        "doc_id": doc_id,
        "data": {
            "name": name,
            "email": email,
            "message": message,
        },
    })
}
