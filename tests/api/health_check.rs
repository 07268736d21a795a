use crate::helpers::{TestApp, TestParams};

#[tokio::test]
async fn is_present() {
    let app = TestApp::spawn(TestParams::all_set()).await;

    let res = app.health_check().await.expect("Failed to execute request");

    assert!(res.status().is_success());
}
