//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Offer;
use crate::domain::value_objects::{BankName, OfferId, PaymentInstrument};
use crate::error::OfferResult;

/// Offer repository trait
#[trait_variant::make(OfferRepository: Send)]
pub trait LocalOfferRepository {
    /// Find the offer stored under an upstream offer id
    async fn find_by_offer_id(&self, offer_id: &OfferId) -> OfferResult<Option<Offer>>;

    /// All offers for `bank_name`, restricted to those accepting
    /// `instrument` when one is given
    async fn find_applicable(
        &self,
        bank_name: &BankName,
        instrument: Option<&PaymentInstrument>,
    ) -> OfferResult<Vec<Offer>>;

    /// Persist the offer unless one with the same offer id exists.
    /// Must be atomic with respect to concurrent callers.
    /// Returns true if a new row was written.
    async fn insert_if_absent(&self, offer: &Offer) -> OfferResult<bool>;
}
