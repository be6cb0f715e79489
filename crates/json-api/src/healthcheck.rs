//! Liveness probe

use salvo::{oapi::ToSchema, prelude::*};
use serde::Serialize;

/// Process state reported to load balancers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The server is accepting requests.
    Ok,
}

/// Body of `GET /healthcheck`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current process state.
    pub status: HealthStatus,
}

/// Reports liveness only; the catalog database is not consulted, and the
/// route sits outside the API key gate.
#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Ok,
    })
}
