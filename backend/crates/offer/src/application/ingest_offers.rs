//! Ingest Offers Use Case
//!
//! Stores every offer from an upstream payload whose offer id is not
//! already known.

use crate::application::config::OfferConfig;
use crate::application::parse_offers::parse_offers;
use crate::domain::entities::Offer;
use crate::domain::repository::OfferRepository;
use crate::error::OfferResult;
use serde_json::Value;
use std::sync::Arc;

/// Output DTO for ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOffersOutput {
    /// Offers found in the payload
    pub identified_count: usize,
    /// Offers newly written to the store
    pub created_count: usize,
}

/// Ingest Offers Use Case
pub struct IngestOffersUseCase<R>
where
    R: OfferRepository,
{
    offer_repo: Arc<R>,
    config: Arc<OfferConfig>,
}

impl<R> IngestOffersUseCase<R>
where
    R: OfferRepository,
{
    pub fn new(offer_repo: Arc<R>, config: Arc<OfferConfig>) -> Self {
        Self { offer_repo, config }
    }

    /// Parse `payload` and insert each new offer in order.
    ///
    /// Inserts are independent: a store failure part-way leaves the
    /// earlier offers persisted.
    pub async fn execute(&self, payload: &Value) -> OfferResult<IngestOffersOutput> {
        let drafts = parse_offers(payload, self.config.max_offers_per_payload)?;
        let identified_count = drafts.len();
        let mut created_count = 0;

        for draft in drafts {
            let offer = Offer::new(draft);
            if self.offer_repo.insert_if_absent(&offer).await? {
                created_count += 1;
            } else {
                tracing::debug!(offer_id = %offer.offer_id, "Offer already stored, skipped");
            }
        }

        tracing::info!(
            identified = identified_count,
            created = created_count,
            "Ingested offers payload"
        );

        Ok(IngestOffersOutput {
            identified_count,
            created_count,
        })
    }
}
