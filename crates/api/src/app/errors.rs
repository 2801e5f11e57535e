use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use debtdesk_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::UnknownStatus(label) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_status",
            format!(
                "unknown status {label:?}; expected one of: PAID, PENDING, OVERDUE \
                 (or PAGO, PENDENTE, VENCIDO)"
            ),
        ),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
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
