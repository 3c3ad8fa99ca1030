//! Highest Discount Use Case

use crate::domain::repository::OfferRepository;
use crate::domain::services::highest_discount;
use crate::domain::value_objects::{BankName, PaymentAmount, PaymentInstrument};
use crate::error::OfferResult;
use std::sync::Arc;

/// Input DTO for the discount lookup (already validated)
#[derive(Debug, Clone)]
pub struct HighestDiscountInput {
    pub amount_to_pay: PaymentAmount,
    pub bank_name: BankName,
    pub payment_instrument: Option<PaymentInstrument>,
}

/// Highest Discount Use Case
pub struct HighestDiscountUseCase<R>
where
    R: OfferRepository,
{
    offer_repo: Arc<R>,
}

impl<R> HighestDiscountUseCase<R>
where
    R: OfferRepository,
{
    pub fn new(offer_repo: Arc<R>) -> Self {
        Self { offer_repo }
    }

    /// Best discount any applicable offer gives; zero when none apply
    pub async fn execute(&self, input: HighestDiscountInput) -> OfferResult<f64> {
        let offers = self
            .offer_repo
            .find_applicable(&input.bank_name, input.payment_instrument.as_ref())
            .await?;

        let best = highest_discount(&offers, input.amount_to_pay);

        tracing::debug!(
            bank_name = %input.bank_name,
            payment_instrument = ?input.payment_instrument.as_ref().map(PaymentInstrument::as_str),
            matched = offers.len(),
            highest_discount = best,
            "Computed highest discount"
        );

        Ok(best)
    }
}
