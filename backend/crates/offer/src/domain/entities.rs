//! Domain Entities
//!
//! Core business entities for the offer domain.

use chrono::{DateTime, Utc};
use kernel::id::OfferRecordId;
use std::collections::BTreeSet;

use crate::domain::value_objects::{BankName, DiscountType, OfferId, PaymentInstrument};

/// Validated candidate offer produced by the payload parser, not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct OfferDraft {
    pub offer_id: OfferId,
    pub title: String,
    pub description: String,
    pub bank_name: BankName,
    pub discount_type: DiscountType,
    /// Currency amount for FLAT, percentage points for PERCENTAGE
    pub discount_value: f64,
    /// Cap on the computed discount; only meaningful for PERCENTAGE
    pub max_discount_amount: Option<f64>,
    pub payment_instruments: BTreeSet<PaymentInstrument>,
    pub terms: String,
}

/// Offer entity - one persisted bank discount offer.
///
/// Append-only: nothing updates or deletes a stored offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub record_id: OfferRecordId,
    pub offer_id: OfferId,
    pub title: String,
    pub description: String,
    pub bank_name: BankName,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub max_discount_amount: Option<f64>,
    pub payment_instruments: BTreeSet<PaymentInstrument>,
    pub terms: String,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new offer record from a parsed draft
    pub fn new(draft: OfferDraft) -> Self {
        Self {
            record_id: OfferRecordId::new(),
            offer_id: draft.offer_id,
            title: draft.title,
            description: draft.description,
            bank_name: draft.bank_name,
            discount_type: draft.discount_type,
            discount_value: draft.discount_value,
            max_discount_amount: draft.max_discount_amount,
            payment_instruments: draft.payment_instruments,
            terms: draft.terms,
            created_at: Utc::now(),
        }
    }

    /// Whether this offer applies to the given instrument
    pub fn accepts(&self, instrument: &PaymentInstrument) -> bool {
        self.payment_instruments.contains(instrument)
    }
}
