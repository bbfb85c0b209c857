// File: crates/chart-fetch/tests/http.rs
// Purpose: HttpTransport against a one-shot local HTTP server with canned responses.

use chart_core::TimeSeriesResponse;
use chart_fetch::{FetchError, Fetcher, HttpTransport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one request; returns the base url and a handle yielding the raw request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 { break; }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn posts_json_content_type_and_decodes_body() {
    let body = r#"{"datasets":[{"label":"emissions","data_points":[{"date":"2024-01-01T00:00:00+00:00","value":5.0,"color":"red"}]}],"labels":{"x":"Time","y":"kg"}}"#;
    let (base, server) = serve_once("HTTP/1.1 200 OK", body).await;

    let fetcher = Fetcher::new(HttpTransport::new());
    let ts: TimeSeriesResponse = fetcher.fetch_one(&format!("{base}/fetch_emissions/1")).await.unwrap();
    assert_eq!(ts.datasets[0].data_points[0].color, "red");
    assert_eq!(ts.labels.y, "kg");

    let head = server.await.unwrap().to_ascii_lowercase();
    assert!(head.starts_with("post /fetch_emissions/1 http/1.1"), "{head}");
    assert!(head.contains("content-type: application/json"), "{head}");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base, server) = serve_once("HTTP/1.1 404 Not Found", "{}").await;

    let fetcher = Fetcher::http();
    let url = format!("{base}/fetch_hourly_histogram/9");
    let err = fetcher.fetch_one::<TimeSeriesResponse>(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.url(), url);
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
        l.local_addr().unwrap().port()
    };
    let fetcher = Fetcher::http();
    let err = fetcher
        .fetch_one::<TimeSeriesResponse>(&format!("http://127.0.0.1:{port}/x"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
