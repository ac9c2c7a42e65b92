//! Export handlers
//!
//! Endpoint returning the person record as a downloadable workbook.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::handlers::PersonRequest;
use crate::render::{SPREADSHEET_CONTENT_TYPE, SPREADSHEET_FILENAME};
use crate::AppState;

/// POST /api/export-excel
///
/// Compute the age and return `datos_usuario.xlsx` as an attachment.
/// Invalid input gets the same 400 body as the age endpoint.
pub async fn export_excel(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let export = state.person_service.export(request.into())?;

    tracing::info!(
        age = %export.aged.age,
        size = export.bytes.len(),
        "Spreadsheet exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, SPREADSHEET_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SPREADSHEET_FILENAME),
            ),
        ],
        export.bytes,
    )
        .into_response())
}
