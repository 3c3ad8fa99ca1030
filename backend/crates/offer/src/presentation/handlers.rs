//! HTTP Handlers

use crate::application::config::OfferConfig;
use crate::application::get_offer::GetOfferUseCase;
use crate::application::highest_discount::HighestDiscountUseCase;
use crate::application::ingest_offers::IngestOffersUseCase;
use crate::domain::repository::OfferRepository;
use crate::domain::value_objects::OfferId;
use crate::error::{OfferError, OfferResult};
use crate::presentation::dto::{
    CreateOffersRequest, CreateOffersResponse, HighestDiscountQuery, HighestDiscountResponse,
    OfferResponse,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use std::sync::Arc;

/// Shared state for offer handlers
#[derive(Clone)]
pub struct OfferAppState<R>
where
    R: OfferRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<OfferConfig>,
}

/// POST /offer
pub async fn create_offers<R>(
    State(state): State<OfferAppState<R>>,
    payload: Result<Json<CreateOffersRequest>, JsonRejection>,
) -> OfferResult<impl IntoResponse>
where
    R: OfferRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| OfferError::from(AppError::from(rejection)))?;

    let use_case = IngestOffersUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(&req.flipkart_offer_api_response).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOffersResponse {
            no_of_offers_identified: output.identified_count,
            no_of_new_offers_created: output.created_count,
        }),
    ))
}

/// GET /highest-discount
pub async fn highest_discount<R>(
    State(state): State<OfferAppState<R>>,
    query: Result<Query<HighestDiscountQuery>, QueryRejection>,
) -> OfferResult<Json<HighestDiscountResponse>>
where
    R: OfferRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|rejection| OfferError::from(AppError::from(rejection)))?;
    let input = query.validate()?;

    let use_case = HighestDiscountUseCase::new(state.repo.clone());
    let highest_discount_amount = use_case.execute(input).await?;

    Ok(Json(HighestDiscountResponse {
        highest_discount_amount,
    }))
}

/// GET /offer/{offer_id}
pub async fn get_offer<R>(
    State(state): State<OfferAppState<R>>,
    Path(offer_id): Path<String>,
) -> OfferResult<Json<OfferResponse>>
where
    R: OfferRepository + Clone + Send + Sync + 'static,
{
    let offer_id = OfferId::new(offer_id)
        .ok_or_else(|| OfferError::InvalidRequest("offerId must not be blank".into()))?;

    let use_case = GetOfferUseCase::new(state.repo.clone());
    let offer = use_case.execute(&offer_id).await?;

    Ok(Json(OfferResponse::from(offer)))
}
