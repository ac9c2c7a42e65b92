//! Age handlers
//!
//! Endpoint computing a person's age and returning a greeting.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::PersonInput;
use crate::error::AppError;
use crate::AppState;

/// Request body shared by the age and export endpoints
///
/// Every field is optional at the wire level so that a missing field is
/// reported by the validator with the same error body as a bad date.
#[derive(Debug, Default, Deserialize)]
pub struct PersonRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    /// Birth date as `YYYY-MM-DD`
    #[serde(rename = "fechaNacimiento")]
    pub fecha_nacimiento: Option<String>,
}

impl From<PersonRequest> for PersonInput {
    fn from(request: PersonRequest) -> Self {
        PersonInput {
            name: request.nombre,
            surname: request.apellido,
            birth_date: request.fecha_nacimiento,
        }
    }
}

/// Response body for the age endpoint
#[derive(Debug, Serialize)]
pub struct AgeResponse {
    pub mensaje: String,
}

/// POST /api/calculate-age
///
/// Compute the age from `fechaNacimiento` and greet the person.
pub async fn calculate_age(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<AgeResponse>, AppError> {
    let Json(request) = payload?;
    let greeting = state.person_service.greet(request.into())?;

    tracing::info!(age = %greeting.aged.age, "Age calculated");

    Ok(Json(AgeResponse {
        mensaje: greeting.message,
    }))
}
