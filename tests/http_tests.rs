//! End-to-end tests over real TCP.
//!
//! Each test binds the server to an ephemeral port on 127.0.0.1, so tests run in
//! parallel without colliding with each other or with a server on 8080.
//!
//! Run with: cargo test --test http_tests
use std::net::SocketAddr;

use futures::future::join_all;
use hello_server::create_router;
use hello_server::http::{bind, serve};
use reqwest::{Method, StatusCode};

const GREETING: &str = "Hello, World!";
const HEALTH_BODY: &str = "{\"status\":\"ok\"}\n";

/// Start the server in the background and return its base URL.
async fn spawn_server() -> String {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let listener = bind(addr).await.expect("bind ephemeral port");
    let local_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, create_router()).await.unwrap();
    });

    format!("http://{}", local_addr)
}

async fn get(client: &reqwest::Client, url: &str) -> (StatusCode, String) {
    let response = client.get(url).send().await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, &format!("{}/", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, GREETING);

    let response = client.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(value, serde_json::json!({ "status": "ok" }));

    let (status, body) = get(&client, &format!("{}/missing", base)).await;
    assert_ne!(status, StatusCode::OK);
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, GREETING);
    assert_ne!(body, HEALTH_BODY);
}

#[tokio::test]
async fn test_root_ignores_method_headers_and_query() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for method in [Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
        let response = client
            .request(method.clone(), format!("{}/?q=1&lang=en", base))
            .header("accept", "application/json")
            .header("x-custom", "anything")
            .body("ignored")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "method {}", method);
        assert_eq!(response.text().await.unwrap(), GREETING);
    }
}

#[tokio::test]
async fn test_health_body_bytes() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, &format!("{}/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, HEALTH_BODY);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let requests = (0..100).map(|i| {
        let client = client.clone();
        let path = if i % 2 == 0 { "/" } else { "/health" };
        let url = format!("{}{}", base, path);
        async move {
            let (status, body) = get(&client, &url).await;
            (path, status, body)
        }
    });

    for (path, status, body) in join_all(requests).await {
        assert_eq!(status, StatusCode::OK);
        match path {
            "/" => assert_eq!(body, GREETING),
            _ => assert_eq!(body, HEALTH_BODY),
        }
    }
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for path in ["/", "/health"] {
        let url = format!("{}{}", base, path);
        let first = client.get(&url).send().await.unwrap().bytes().await.unwrap();
        for _ in 0..20 {
            let again = client.get(&url).send().await.unwrap().bytes().await.unwrap();
            assert_eq!(first, again, "path {}", path);
        }
    }
}

#[tokio::test]
async fn test_server_survives_client_disconnect() {
    use tokio::io::AsyncWriteExt;

    let base = spawn_server().await;
    let addr = base.trim_start_matches("http://").to_string();

    // Send a request and hang up without reading the response
    let mut stream = tokio::net::TcpStream::connect(&addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();
    drop(stream);

    let client = reqwest::Client::new();
    let (status, body) = get(&client, &format!("{}/", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, GREETING);
}
