//! Offer Error Types
//!
//! Offer-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::{STORE_ERROR, VALIDATION_ERROR, sqlx_error_kind};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Offer-specific result type alias
pub type OfferResult<T> = Result<T, OfferError>;

pub const UNKNOWN_DISCOUNT_TYPE: &str = "UNKNOWN_DISCOUNT_TYPE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Reasons an upstream offers payload is rejected.
///
/// `index` is the zero-based position of the element inside `offers`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("`offers` must be an array")]
    OffersNotArray,

    #[error("payload carries {count} offers, at most {max} are accepted")]
    TooManyOffers { count: usize, max: usize },

    #[error("offers[{index}] is malformed: {reason}")]
    MalformedElement { index: usize, reason: String },

    #[error("offers[{index}].{field} is required")]
    MissingField { index: usize, field: &'static str },

    #[error("offers[{index}].{field} must be a finite non-negative number, got {value}")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("offers[{index}].discountType `{value}` is not FLAT or PERCENTAGE")]
    UnknownDiscountType { index: usize, value: String },

    #[error("offers[{index}].paymentInstruments contains a blank entry")]
    BlankPaymentInstrument { index: usize },
}

/// Offer-specific error variants
#[derive(Debug, Error)]
pub enum OfferError {
    /// Upstream payload failed the typed decode
    #[error("Invalid offers payload: {0}")]
    Payload(#[from] PayloadError),

    /// Request field missing or malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No stored offer under this offer id
    #[error("Offer not found: {0}")]
    OfferNotFound(String),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OfferError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OfferError::Payload(_) | OfferError::InvalidRequest(_) => ErrorKind::BadRequest,
            OfferError::OfferNotFound(_) => ErrorKind::NotFound,
            OfferError::Database(e) => sqlx_error_kind(e),
            OfferError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Stable machine-readable code rendered in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            OfferError::Payload(PayloadError::UnknownDiscountType { .. }) => UNKNOWN_DISCOUNT_TYPE,
            OfferError::Payload(_) | OfferError::InvalidRequest(_) => VALIDATION_ERROR,
            OfferError::OfferNotFound(_) => NOT_FOUND,
            OfferError::Database(_) => STORE_ERROR,
            OfferError::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Offer request failed");
            return;
        }

        match self {
            OfferError::Payload(PayloadError::UnknownDiscountType { index, value }) => {
                tracing::warn!(index, discount_type = %value, "Rejected unknown discount type");
            }
            _ => {
                tracing::debug!(error = %self, "Offer request rejected");
            }
        }
    }
}

impl From<OfferError> for AppError {
    fn from(err: OfferError) -> Self {
        match err {
            // Store details stay in the logs
            OfferError::Database(e) => AppError::from(e),
            OfferError::Internal(_) => {
                AppError::internal("Internal error").with_code(INTERNAL_ERROR)
            }
            other => {
                let kind = other.kind();
                let code = other.code();
                AppError::new(kind, other.to_string()).with_code(code)
            }
        }
    }
}

impl IntoResponse for OfferError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<AppError> for OfferError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => OfferError::InvalidRequest(err.message().to_string()),
            _ => OfferError::Internal(err.to_string()),
        }
    }
}
