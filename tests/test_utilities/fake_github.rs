//! Loopback stand-in for the GitHub REST API.
//!
//! Serves canned JSON responses keyed by request path over plain HTTP/1.1
//! and records every request so tests can assert on paths and headers.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
}

/// Builder for the route table
#[derive(Default)]
pub struct FakeGitHubBuilder {
    routes: HashMap<String, CannedResponse>,
}

impl FakeGitHubBuilder {
    pub fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            CannedResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Serves repository info, latest release and advisories for one repository
    pub fn repository(
        self,
        slug: &str,
        info: serde_json::Value,
        release: Option<serde_json::Value>,
        advisories: serde_json::Value,
    ) -> Self {
        let base = format!("/repos/{}", slug);
        let with_info = self.route(&base, 200, &info.to_string());
        let with_release = match release {
            Some(release) => with_info.route(
                &format!("{}/releases/latest", base),
                200,
                &release.to_string(),
            ),
            None => with_info,
        };
        with_release.route(
            &format!("{}/security/advisories", base),
            200,
            &advisories.to_string(),
        )
    }

    pub async fn start(self) -> FakeGitHub {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let server_requests = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&server_requests);
                tokio::spawn(async move {
                    handle_connection(stream, &routes, &requests).await;
                });
            }
        });

        FakeGitHub {
            addr,
            requests,
            handle,
        }
    }
}

/// Running fake server; stops when dropped
pub struct FakeGitHub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl FakeGitHub {
    pub fn builder() -> FakeGitHubBuilder {
        FakeGitHubBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests whose path equals `path`
    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }
}

impl Drop for FakeGitHub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: &HashMap<String, CannedResponse>,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buffer).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        headers,
    });

    let response = routes.get(&path).cloned().unwrap_or(CannedResponse {
        status: 404,
        body: r#"{"message":"Not Found"}"#.to_string(),
    });
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason_phrase(response.status),
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
