//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

/// Code attached to every persistence failure
pub const STORE_ERROR: &str = "STORE_ERROR";

/// Code attached to request/payload validation failures
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::bad_request("Invalid number format")
            .with_code(VALIDATION_ERROR)
            .with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(format!("JSON parse error: {}", err))
                .with_code(VALIDATION_ERROR)
                .with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// ストアエラーの分類と公開メッセージ
///
/// ## Notes
/// * SQLSTATE は <https://www.postgresql.org/docs/current/errcodes-appendix.html> を参照
/// * メッセージにはドライバの詳細を含めない
#[cfg(feature = "sqlx")]
fn classify_sqlx(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
            Some("23502" | "23514") => (
                ErrorKind::InternalServerError,
                "Stored offer violates a table constraint",
            ),
            Some("53000" | "53100" | "53200" | "53300") => {
                (ErrorKind::ServiceUnavailable, "Database resource exhausted")
            }
            Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                (ErrorKind::ServiceUnavailable, "Database unavailable")
            }
            _ => (ErrorKind::InternalServerError, "Database error"),
        },
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

/// ストアエラーがレンダリングされる際のエラー種別を取得
///
/// `AppError::from(sqlx::Error)` と同じ分類を返します。
/// エラーを所有せずにステータスを判定したい場合に使用します。
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    classify_sqlx(err).0
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx(&err);
        AppError::new(kind, message)
            .with_code(STORE_ERROR)
            .with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_code(VALIDATION_ERROR)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_code(VALIDATION_ERROR)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details, extended with a stable `code`
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "code": self.code(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
