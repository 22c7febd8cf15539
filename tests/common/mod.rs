//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock product catalog serving fakestore-style JSON.
///
/// Ids below 100 exist and answer `{"id": N, "title": "Catalog Product N",
/// "price": 9.99, ...}`; anything else answers 404.
pub async fn start_mock_catalog(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);
                        let path = request.split_whitespace().nth(1).unwrap_or("/");

                        let (status_line, body) = catalog_response(path);
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

fn catalog_response(path: &str) -> (&'static str, String) {
    let id = path
        .strip_prefix("/products/")
        .and_then(|raw| raw.parse::<u64>().ok());

    match id {
        Some(id) if id < 100 => (
            "200 OK",
            format!(
                r#"{{"id":{id},"title":"Catalog Product {id}","price":9.99,"description":"mock","category":"test"}}"#
            ),
        ),
        _ => ("404 Not Found", r#"{"message":"product not found"}"#.to_string()),
    }
}

/// Start a catalog that always answers 500, for gateway-error tests.
#[allow(dead_code)]
pub async fn start_broken_catalog(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let _ = socket.read(&mut buf).await;
                        let body = r#"{"message":"catalog exploded"}"#;
                        let response = format!(
                            "HTTP/1.1 500 Internal Server Error\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}
