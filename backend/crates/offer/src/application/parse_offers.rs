//! Upstream Payload Parser
//!
//! Typed decode of the Flipkart offer API response into offer drafts.
//! Every element is validated before anything reaches the store.

use crate::domain::entities::OfferDraft;
use crate::domain::value_objects::{BankName, DiscountType, OfferId, PaymentInstrument};
use crate::error::PayloadError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// One element of the upstream `offers` array, as it appears on the wire
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamOffer {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    bank: Option<String>,
    discount_type: Option<String>,
    discount_value: Option<f64>,
    max_discount_amount: Option<f64>,
    payment_instruments: Option<Vec<String>>,
    terms: Option<String>,
}

/// Parse an upstream response into offer drafts.
///
/// A payload that is not an object, or has no `offers` (or a null one),
/// yields no drafts. Any malformed element rejects the whole payload.
pub fn parse_offers(payload: &Value, max_offers: usize) -> Result<Vec<OfferDraft>, PayloadError> {
    let elements = match payload.get("offers") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(_) => return Err(PayloadError::OffersNotArray),
    };

    if elements.len() > max_offers {
        return Err(PayloadError::TooManyOffers {
            count: elements.len(),
            max: max_offers,
        });
    }

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect()
}

fn parse_element(index: usize, element: &Value) -> Result<OfferDraft, PayloadError> {
    if !element.is_object() {
        return Err(PayloadError::MalformedElement {
            index,
            reason: "expected an object".to_string(),
        });
    }

    let raw = UpstreamOffer::deserialize(element).map_err(|e| PayloadError::MalformedElement {
        index,
        reason: e.to_string(),
    })?;

    let missing = |field: &'static str| PayloadError::MissingField { index, field };

    let offer_id = raw.id.and_then(OfferId::new).ok_or_else(|| missing("id"))?;

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| missing("title"))?;

    let description = raw.description.ok_or_else(|| missing("description"))?;

    let bank_name = raw.bank.and_then(BankName::new).ok_or_else(|| missing("bank"))?;

    let raw_type = raw.discount_type.ok_or_else(|| missing("discountType"))?;
    let discount_type = DiscountType::parse(&raw_type).ok_or(PayloadError::UnknownDiscountType {
        index,
        value: raw_type,
    })?;

    let discount_value = raw.discount_value.ok_or_else(|| missing("discountValue"))?;
    check_amount(index, "discountValue", discount_value)?;

    if let Some(cap) = raw.max_discount_amount {
        check_amount(index, "maxDiscountAmount", cap)?;
    }

    let payment_instruments = raw
        .payment_instruments
        .unwrap_or_default()
        .into_iter()
        .map(|tag| PaymentInstrument::new(tag).ok_or(PayloadError::BlankPaymentInstrument { index }))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(OfferDraft {
        offer_id,
        title,
        description,
        bank_name,
        discount_type,
        discount_value,
        max_discount_amount: raw.max_discount_amount,
        payment_instruments,
        terms: raw.terms.unwrap_or_default(),
    })
}

fn check_amount(index: usize, field: &'static str, value: f64) -> Result<(), PayloadError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PayloadError::InvalidNumber {
            index,
            field,
            value,
        })
    }
}
