//! Readiness checks backed by live dependencies

use axum::{Json, extract::State, http::StatusCode};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Readiness handler: verifies the database is reachable.
///
/// The object store is intentionally not probed here; its credentials may
/// resolve lazily (profile-based mode) and a cold store must not flip the
/// whole service to not-ready.
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
