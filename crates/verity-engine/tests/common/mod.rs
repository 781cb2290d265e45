//! In-process analysis backend for the dashboard integration tests.
//!
//! Serves canned responses keyed by `"{METHOD} {path}"` on a random
//! loopback port and records every request it receives.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
pub struct Route {
    pub key: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(key: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            key,
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub body: String,
}

pub struct FakeBackend {
    pub base_url: String,
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = Arc::clone(&server);
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for mut request in worker.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().to_string();
                let url = request.url().to_string();
                log.lock().unwrap().push(Recorded {
                    method: method.clone(),
                    url: url.clone(),
                    body,
                });

                let key = format!("{method} {}", url.split('?').next().unwrap_or_default());
                let route = routes.iter().find(|r| key.starts_with(r.key));
                let (status, payload) = route.map_or_else(
                    || (404, r#"{"detail": "Not Found"}"#.to_string()),
                    |r| (r.status, r.body.clone()),
                );
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .unwrap();
                let response = tiny_http::Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            server,
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than health probes.
    pub fn analysis_requests(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.url != "/health")
            .collect()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
    }
}
