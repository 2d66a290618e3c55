//! Remote provider tests against a mock capture service

use glimpse_capture::{CaptureError, CaptureProvider, RemoteCaptureProvider};

#[tokio::test]
async fn test_remote_capture_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "success": true,
                "image": "AQIDBA==",
                "title": "Switch console"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    let page = provider.capture_page("http://192.0.2.9:80/").await.unwrap();

    assert_eq!(page.image, vec![1, 2, 3, 4]);
    assert_eq!(page.title, "Switch console");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_capture_missing_title_defaults_to_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({"success": true, "image": "AQIDBA=="}).to_string())
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    let page = provider.capture_page("http://192.0.2.9:80/").await.unwrap();

    assert!(page.title.is_empty());
}

#[tokio::test]
async fn test_remote_capture_service_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(500)
        .with_body("capture backend down")
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    let result = provider.capture_page("http://192.0.2.9:80/").await;

    match result {
        Err(CaptureError::HttpRequest(msg)) => assert!(msg.contains("500")),
        other => panic!("Expected HttpRequest error, got {:?}", other.map(|p| p.title)),
    }
}

#[tokio::test]
async fn test_remote_capture_reported_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({"success": false, "error": "page did not respond"}).to_string(),
        )
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    let result = provider.capture_page("http://192.0.2.9:80/").await;

    match result {
        Err(CaptureError::ProviderError(msg)) => assert_eq!(msg, "page did not respond"),
        other => panic!("Expected ProviderError, got {:?}", other.map(|p| p.title)),
    }
}

#[tokio::test]
async fn test_remote_capture_success_without_image() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({"success": true}).to_string())
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    let result = provider.capture_page("http://192.0.2.9:80/").await;

    assert!(matches!(result, Err(CaptureError::ProviderError(_))));
}

#[tokio::test]
async fn test_health_probe_drives_availability() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;

    let provider = RemoteCaptureProvider::new(server.url(), None).unwrap();
    assert!(provider.is_available().await);
}
