use crate::AppState;

use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET /v1/healthcheck - Report availability, environment and build version
pub async fn healthcheck(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "available",
        "system_info": {
            "environment": state.environment.as_str(),
            "version": env!("CARGO_PKG_VERSION"),
        },
    }))
}
