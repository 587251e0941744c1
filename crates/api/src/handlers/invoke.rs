use crate::{
    dto::{InvocationEvent, InvocationResponse},
    handlers::lookup::process_lookup,
    state::AppState,
};
use axum::{extract::State, Json};
use ferrous_dig_domain::{DomainError, LookupRequest};
use serde_json::Value;
use tracing::{debug, instrument};

fn request_from_event(event: InvocationEvent) -> Result<LookupRequest, DomainError> {
    let parsed = match event.body {
        Some(Value::String(raw)) => serde_json::from_str(&raw),
        Some(inline @ Value::Object(_)) => serde_json::from_value(inline),
        Some(other) => {
            return Err(DomainError::InvalidRequest(format!(
                "body must be a JSON string or object, got {}",
                other
            )))
        }
        None => return Err(DomainError::InvalidRequest("missing body".to_string())),
    };

    parsed.map_err(|e| DomainError::InvalidRequest(e.to_string()))
}

/// Lambda-style entry point. Always answers HTTP 200; the outcome lives in
/// the envelope's `statusCode`.
#[instrument(skip(state, event), name = "api_invoke")]
pub async fn invoke(
    State(state): State<AppState>,
    Json(event): Json<InvocationEvent>,
) -> Json<InvocationResponse> {
    let response = match request_from_event(event) {
        Ok(request) => process_lookup(&state.lookup, request).await,
        Err(e) => InvocationResponse::bad_request(e.to_string()),
    };

    debug!(status_code = response.status_code, "Invocation finished");
    Json(response)
}
