use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gestao_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        DomainError::Integrity(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Structural { model, cause } => {
            tracing::error!(model = %model, cause = %cause, "structural error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "structural_error",
                format!("error inspecting model '{model}'"),
            )
        }
        DomainError::Unauthorized => {
            json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
