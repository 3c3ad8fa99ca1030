//! Offer Router

use crate::application::config::OfferConfig;
use crate::domain::repository::OfferRepository;
use crate::infra::postgres::PgOfferRepository;
use crate::presentation::handlers::{self, OfferAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the offer router with PostgreSQL repository
pub fn offer_router(repo: PgOfferRepository, config: OfferConfig) -> Router {
    offer_router_generic(repo, config)
}

/// Create a generic offer router for any repository implementation
pub fn offer_router_generic<R>(repo: R, config: OfferConfig) -> Router
where
    R: OfferRepository + Clone + Send + Sync + 'static,
{
    let state = OfferAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/offer", post(handlers::create_offers::<R>))
        .route("/offer/{offer_id}", get(handlers::get_offer::<R>))
        .route("/highest-discount", get(handlers::highest_discount::<R>))
        .with_state(state)
}
