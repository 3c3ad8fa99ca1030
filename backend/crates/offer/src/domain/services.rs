//! Domain Services
//!
//! Pure discount arithmetic.

use crate::domain::entities::Offer;
use crate::domain::value_objects::{DiscountType, PaymentAmount};

/// Discount a single offer yields for `amount`.
///
/// FLAT yields `discount_value` regardless of amount. PERCENTAGE yields
/// `amount * discount_value / 100`, clamped to `max_discount_amount` when set.
/// Unknown types and results that overflow to infinity yield zero and are
/// reported at `warn`.
pub fn compute_discount(offer: &Offer, amount: PaymentAmount) -> f64 {
    let discount = match &offer.discount_type {
        DiscountType::Flat => offer.discount_value,
        DiscountType::Percentage => {
            let discount = amount.value() * offer.discount_value / 100.0;
            match offer.max_discount_amount {
                Some(cap) => discount.min(cap),
                None => discount,
            }
        }
        DiscountType::Unknown(raw) => {
            tracing::warn!(
                offer_id = %offer.offer_id,
                discount_type = %raw,
                "Unknown discount type, treating discount as zero"
            );
            return 0.0;
        }
    };

    if discount.is_finite() {
        discount
    } else {
        tracing::warn!(
            offer_id = %offer.offer_id,
            discount_value = offer.discount_value,
            amount = amount.value(),
            "Discount is not finite, treating discount as zero"
        );
        0.0
    }
}

/// Largest discount among `offers`, never below zero.
pub fn highest_discount<'a>(offers: impl IntoIterator<Item = &'a Offer>, amount: PaymentAmount) -> f64 {
    offers
        .into_iter()
        .map(|offer| compute_discount(offer, amount))
        .fold(0.0, f64::max)
}
