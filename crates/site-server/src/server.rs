//! HTTP server: a shared `tiny_http` listener drained by a pool of worker threads.

use crate::config::ServerConfig;
use crate::error::{RouteError, ServerError};
use crate::headers;
use crate::limiter::{retry_after_secs, RateDecision, RateLimiter};
use crate::routes::{self, Reply, RouteContext};
use std::net::{IpAddr, Ipv4Addr};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Method, Request, Response, Server};

pub const RATE_LIMITED: &str = "Too many requests, please try again later.";

/// State shared by every worker.
struct Shared {
    routes: RouteContext,
    limiter: RateLimiter,
    base_headers: Vec<Header>,
}

pub struct SiteServer {
    config: ServerConfig,
    actual_port: Option<u16>,
    server: Option<Arc<Server>>,
    workers: Vec<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl SiteServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            actual_port: None,
            server: None,
            workers: Vec::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Bind and spawn the worker pool; returns once the port is open.
    pub fn start(&mut self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr();
        let server = Server::http(&addr).map_err(|e| ServerError::BindError {
            addr,
            error: e.to_string(),
        })?;
        let actual_port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .unwrap_or(self.config.port);
        self.actual_port = Some(actual_port);

        let mut base_headers = headers::security_headers();
        base_headers.extend(headers::cors_headers(&self.config.client_url));
        let shared = Arc::new(Shared {
            routes: RouteContext {
                static_dir: self.config.static_dir.clone(),
                body_limit_bytes: self.config.body_limit_bytes,
            },
            limiter: RateLimiter::new(self.config.rate_limit_max, self.config.rate_limit_window()),
            base_headers,
        });

        let server = Arc::new(server);
        for i in 0..self.config.workers.max(1) {
            let server = server.clone();
            let shared = shared.clone();
            let shutdown = self.shutdown.clone();
            let handle = thread::Builder::new()
                .name(format!("site-worker-{i}"))
                .spawn(move || worker_loop(&server, &shared, &shutdown))
                .map_err(ServerError::SpawnError)?;
            self.workers.push(handle);
        }
        self.server = Some(server);

        log::info!(
            "Pearlmeen Media server running on port {} ({} workers)",
            actual_port,
            self.workers.len()
        );
        log::info!("Environment: {}", self.config.environment);
        Ok(())
    }

    pub fn actual_port(&self) -> u16 {
        self.actual_port.unwrap_or(self.config.port)
    }

    /// Wake every worker and wait for it to exit.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(server) = self.server.take() {
            for _ in 0..self.workers.len() {
                server.unblock();
            }
        }
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("worker thread panicked during shutdown");
            }
        }
    }

    /// Start and serve until every worker exits.
    pub fn run(mut self) -> Result<(), ServerError> {
        self.start()?;
        let mut panicked = false;
        for handle in self.workers.drain(..) {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(ServerError::WorkerPanic);
        }
        Ok(())
    }
}

impl Drop for SiteServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn worker_loop(server: &Server, shared: &Shared, shutdown: &AtomicBool) {
    loop {
        match server.recv() {
            Ok(request) => {
                if let Err(e) = handle_request(request, shared) {
                    log::warn!("failed to send response: {e}");
                }
            }
            Err(e) => {
                if shutdown.load(Ordering::SeqCst) {
                    break;
                }
                log::warn!("accept error: {e}");
            }
        }
    }
}

fn request_header(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_owned())
}

fn handle_request(mut request: Request, shared: &Shared) -> std::io::Result<()> {
    let ip = request
        .remote_addr()
        .map(|a| a.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let method = request.method().clone();
    let url = request.url().to_owned();

    let mut extra = Vec::new();
    let reply = match shared.limiter.check(ip) {
        RateDecision::Limited { retry_after } => {
            log::warn!("rate limit exceeded for {ip}: {method} {url}");
            extra.extend(headers::rate_limit_headers(shared.limiter.limit(), 0));
            extra.extend(headers::header(
                "Retry-After",
                &retry_after_secs(retry_after).to_string(),
            ));
            Reply::text(429, RATE_LIMITED)
        }
        RateDecision::Allowed { remaining } => {
            extra.extend(headers::rate_limit_headers(shared.limiter.limit(), remaining));
            if method == Method::Options {
                let requested = request_header(&request, "Access-Control-Request-Headers");
                extra.extend(headers::preflight_headers(requested.as_deref()));
                Reply::empty(204)
            } else {
                let content_type = request_header(&request, "Content-Type");
                let body = request.as_reader();
                let routed = panic::catch_unwind(AssertUnwindSafe(|| {
                    routes::dispatch(&shared.routes, &method, &url, content_type.as_deref(), body)
                }));
                let result = routed.unwrap_or_else(|_| {
                    Err(RouteError::Internal(format!("handler panicked on {method} {url}")))
                });
                match result {
                    Ok(reply) => reply,
                    Err(e) => {
                        if let RouteError::Internal(_) = e {
                            log::error!("{method} {url}: {e}");
                        }
                        Reply::from_error(&e)
                    }
                }
            }
        }
    };
    log::debug!("{ip} {method} {url} -> {}", reply.status);

    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    for h in shared.base_headers.iter().cloned().chain(extra) {
        response.add_header(h);
    }
    if let Some(h) = headers::header("Content-Type", reply.content_type) {
        response.add_header(h);
    }
    request.respond(response)
}
