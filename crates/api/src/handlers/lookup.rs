use crate::{
    dto::{DomainResultDto, InvocationResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{body::Bytes, extract::State, Json};
use ferrous_dig_application::use_cases::HandleLookupUseCase;
use ferrous_dig_domain::{DomainError, LookupRequest};
use tracing::{error, info, instrument, warn};

pub fn parse_request(raw: &[u8]) -> Result<LookupRequest, DomainError> {
    serde_json::from_slice(raw).map_err(|e| DomainError::InvalidRequest(e.to_string()))
}

/// Runs a lookup and wraps the outcome in the `{statusCode, body}` envelope.
pub async fn process_lookup(
    use_case: &HandleLookupUseCase,
    request: LookupRequest,
) -> InvocationResponse {
    let results = match use_case.execute(request).await {
        Ok(results) => results,
        Err(e) if e.is_request_error() => {
            warn!(error = %e, "Lookup rejected");
            return InvocationResponse::bad_request(e.to_string());
        }
        Err(e) => {
            error!(error = %e, "Lookup failed");
            return InvocationResponse::internal_error(e.to_string());
        }
    };

    let dtos: Vec<DomainResultDto> = results.into_iter().map(Into::into).collect();
    match serde_json::to_value(dtos) {
        Ok(body) => InvocationResponse::ok(body),
        Err(e) => {
            error!(error = %e, "Failed to serialize lookup results");
            InvocationResponse::internal_error(e.to_string())
        }
    }
}

#[instrument(skip(state, body), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<DomainResultDto>>, ApiError> {
    let request = parse_request(&body)?;
    let results = state.lookup.execute(request).await?;

    info!(domains = results.len(), "Lookup completed");

    Ok(Json(results.into_iter().map(Into::into).collect()))
}
