//! Kubernetes-style health probes.
//!
//! Liveness is stateless: a worker that can run the handler proves the
//! process is alive, so the probe always answers 200. Readiness is a flag
//! flipped by server startup once the listener is bound, so a pod only
//! receives traffic after the repositories and routes are wired.

use actix_web::{HttpResponse, get, http::header, web};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};

/// Readiness flag shared between server startup and the probe handler.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Create a health state that reports not ready until startup completes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the readiness flag. Called once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return whether startup has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn probe(ok: bool, status: &str) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "status": status }))
}

/// Readiness probe: 200 once the server can handle traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let ready = state.is_ready();
    probe(ready, if ready { "ready" } else { "starting" })
}

/// Liveness probe: answering at all is the signal, so this is always 200.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe(true, "alive")
}
