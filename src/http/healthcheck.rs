//! Liveness handler.

use axum::{extract::State, http::StatusCode, response::Response};
use serde_json::json;

use crate::http::envelope::write_json;
use crate::http::gate::GateState;

/// Report service availability plus the configured environment and
/// version, through the standard writer like every other response.
pub async fn healthcheck(State(state): State<GateState>) -> Response {
    let data = json!({
        "status": "available",
        "system_info": {
            "environment": state.config.service.environment.clone(),
            "version": state.config.service.version.clone(),
        },
    });
    write_json(StatusCode::OK, &data, None)
}
