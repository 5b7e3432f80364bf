use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use blast_core::{evaluate, BlastError, BlastInput, DesignResult, HoleOption};

/// Request body for `POST /calculate`.
///
/// Field names match what the estimation clients send: `z` is the powder
/// factor, `n` the number of options the client filled in, and `options` the
/// candidate rows.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub z: f64,
    pub n: u32,
    pub options: Vec<OptionPayload>,
}

/// One candidate row from the client form.
///
/// Clients are expected to strip incomplete rows before submitting, but the
/// handler tolerates them: a row missing any field is excluded rather than
/// failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionPayload {
    pub diameter: Option<f64>,
    pub cost: Option<f64>,
    #[serde(rename = "numberOfHoles")]
    pub number_of_holes: Option<u32>,
}

/// Error wrapper for the calculate endpoint.
///
/// Whatever the underlying cause, clients receive the single fixed 400 body;
/// the structured detail goes to the log.
pub struct ApiError(BlastError);

impl From<BlastError> for ApiError {
    fn from(err: BlastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.0.error_code(), error = %self.0, "calculate request rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "No valid selection made"
            })),
        )
            .into_response()
    }
}

/// `POST /calculate` - evaluate the candidate options and return the
/// minimum-total-cost design.
pub async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<DesignResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError(BlastError::invalid_input(
            "body",
            rejection.body_text(),
            "Request body must be JSON with z, n and options",
        ))
    })?;

    if request.n == 0 {
        return Err(BlastError::invalid_input("n", "0", "At least one option is required").into());
    }

    let options = complete_options(&request.options);
    tracing::debug!(
        n = request.n,
        received = request.options.len(),
        complete = options.len(),
        "evaluating calculate request"
    );

    let input = BlastInput {
        powder_factor: request.z,
        options,
    };
    let result = evaluate(&input)?;

    Ok(Json(result))
}

/// Keep only rows with all three fields present; the selected index in the
/// response is relative to this filtered list, exactly as the clients build it.
fn complete_options(payloads: &[OptionPayload]) -> Vec<HoleOption> {
    payloads
        .iter()
        .filter_map(|payload| {
            match (payload.diameter, payload.cost, payload.number_of_holes) {
                (Some(diameter_mm), Some(cost_per_kg), Some(hole_count)) => Some(HoleOption {
                    diameter_mm,
                    cost_per_kg,
                    hole_count,
                }),
                _ => None,
            }
        })
        .collect()
}

/// Build the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
