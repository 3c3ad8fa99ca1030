//! Offer Backend Module
//!
//! Ingests bank offers from upstream checkout responses and answers
//! "what is the best discount this payment can get".
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, discount rules, repository traits
//! - `application/` - Payload parsing and use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers
//!
//! ## Storage Model
//! - Offers are keyed by the upstream offer id and never updated
//! - Ingestion is insert-if-absent, so replaying a payload is a no-op
//! - A payload is validated as a whole before anything is written

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::OfferConfig;
pub use error::{OfferError, OfferResult, PayloadError};
pub use infra::postgres::PgOfferRepository;
pub use presentation::router::{offer_router, offer_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
