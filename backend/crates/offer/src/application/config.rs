//! Application Configuration
//!
//! Configuration for the offer application layer.

/// Offer application configuration
#[derive(Debug, Clone)]
pub struct OfferConfig {
    /// Upper bound on elements in one upstream `offers` array
    pub max_offers_per_payload: usize,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            max_offers_per_payload: 1000,
        }
    }
}
