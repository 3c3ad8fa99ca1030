//! Get Offer Use Case

use crate::domain::entities::Offer;
use crate::domain::repository::OfferRepository;
use crate::domain::value_objects::OfferId;
use crate::error::{OfferError, OfferResult};
use std::sync::Arc;

/// Get Offer Use Case
pub struct GetOfferUseCase<R>
where
    R: OfferRepository,
{
    offer_repo: Arc<R>,
}

impl<R> GetOfferUseCase<R>
where
    R: OfferRepository,
{
    pub fn new(offer_repo: Arc<R>) -> Self {
        Self { offer_repo }
    }

    pub async fn execute(&self, offer_id: &OfferId) -> OfferResult<Offer> {
        self.offer_repo
            .find_by_offer_id(offer_id)
            .await?
            .ok_or_else(|| OfferError::OfferNotFound(offer_id.to_string()))
    }
}
