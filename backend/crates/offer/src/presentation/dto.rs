//! API DTOs (Data Transfer Objects)

use crate::application::highest_discount::HighestDiscountInput;
use crate::domain::entities::Offer;
use crate::domain::value_objects::{BankName, PaymentAmount, PaymentInstrument};
use crate::error::{OfferError, OfferResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Ingestion
// ============================================================================

/// Request for POST /offer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffersRequest {
    /// Raw upstream response, forwarded to the parser untouched
    pub flipkart_offer_api_response: Value,
}

/// Response for POST /offer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffersResponse {
    pub no_of_offers_identified: usize,
    pub no_of_new_offers_created: usize,
}

// ============================================================================
// Highest discount
// ============================================================================

/// Query string for GET /highest-discount.
///
/// Every field is optional at the extractor level so that missing values
/// surface as our own validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestDiscountQuery {
    pub amount_to_pay: Option<String>,
    pub bank_name: Option<String>,
    pub payment_instrument: Option<String>,
}

impl HighestDiscountQuery {
    /// Coerce and validate into use case input
    pub fn validate(self) -> OfferResult<HighestDiscountInput> {
        let raw_amount = self
            .amount_to_pay
            .ok_or_else(|| invalid("amountToPay is required"))?;

        if !is_numeric_string(&raw_amount) {
            return Err(invalid("amountToPay must be a numeric string"));
        }

        let amount: f64 = raw_amount
            .parse()
            .map_err(|_| invalid("amountToPay must be a numeric string"))?;

        // A digit string long enough to overflow parses to infinity
        let amount_to_pay = PaymentAmount::new(amount)
            .ok_or_else(|| invalid("amountToPay is out of range"))?;

        let bank_name = self
            .bank_name
            .and_then(BankName::new)
            .ok_or_else(|| invalid("bankName must be a non-empty string"))?;

        // An empty instrument means "any instrument"
        let payment_instrument = self.payment_instrument.and_then(PaymentInstrument::new);

        Ok(HighestDiscountInput {
            amount_to_pay,
            bank_name,
            payment_instrument,
        })
    }
}

/// Response for GET /highest-discount
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestDiscountResponse {
    pub highest_discount_amount: f64,
}

// ============================================================================
// Offer lookup
// ============================================================================

/// Response for GET /offer/{offerId}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub offer_id: String,
    pub title: String,
    pub description: String,
    pub bank_name: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub max_discount_amount: Option<f64>,
    pub payment_instruments: Vec<String>,
    pub terms: String,
    pub created_at_ms: i64,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            offer_id: offer.offer_id.to_string(),
            title: offer.title,
            description: offer.description,
            bank_name: offer.bank_name.to_string(),
            discount_type: offer.discount_type.code().to_string(),
            discount_value: offer.discount_value,
            max_discount_amount: offer.max_discount_amount,
            payment_instruments: offer
                .payment_instruments
                .iter()
                .map(ToString::to_string)
                .collect(),
            terms: offer.terms,
            created_at_ms: offer.created_at.timestamp_millis(),
        }
    }
}

fn invalid(message: impl Into<String>) -> OfferError {
    OfferError::InvalidRequest(message.into())
}

/// Optional sign, optional `digits.` prefix, then at least one digit.
/// No exponent, no thousands separators.
fn is_numeric_string(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => ("", unsigned),
    };

    int_part.bytes().all(|b| b.is_ascii_digit())
        && !frac_part.is_empty()
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}
