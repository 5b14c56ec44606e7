mod common;

use common::{app_for, seeded_db};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

#[tokio::test]
async fn test_main_server_startup() {
    let db = seeded_db().await;
    let app = app_for(&db);

    // Port 0 lets the OS pick a free port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let server_task: JoinHandle<()> = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait a moment for the server to start up
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let health = client.get(format!("http://{}/health", addr)).send().await;
    let totals = client
        .get(format!("http://{}/investors/1/total_commitments", addr))
        .send()
        .await;

    server_task.abort();

    let health = health.expect("Failed to connect to test server");
    assert!(health.status().is_success());

    let totals: serde_json::Value = totals.unwrap().json().await.unwrap();
    assert_eq!(totals["total_commitments_gbp"].as_f64(), Some(1_500_000.0));
}
