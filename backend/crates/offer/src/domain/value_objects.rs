//! Domain Value Objects
//!
//! Immutable value types for the offer domain.

use derive_more::Display;
use serde::Serialize;

/// Upstream-assigned offer identifier (unique across stored offers)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Returns `None` when the id is blank
    pub fn new(id: impl Into<String>) -> Option<Self> {
        non_blank(id.into()).map(Self)
    }

    /// Wrap a value read back from the store
    pub fn from_db(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Issuing bank, matched by exact equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
pub struct BankName(String);

impl BankName {
    /// Returns `None` when the name is blank
    pub fn new(name: impl Into<String>) -> Option<Self> {
        non_blank(name.into()).map(Self)
    }

    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tag identifying a payment method (card network, card product, UPI, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(transparent)]
pub struct PaymentInstrument(String);

impl PaymentInstrument {
    pub fn new(tag: impl Into<String>) -> Option<Self> {
        non_blank(tag.into()).map(Self)
    }

    pub fn from_db(tag: String) -> Self {
        Self(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How an offer's `discount_value` is interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiscountType {
    /// Fixed currency amount
    #[serde(rename = "FLAT")]
    Flat,
    /// Percentage points of the amount to pay, optionally capped
    #[serde(rename = "PERCENTAGE")]
    Percentage,
    /// Stored value this version does not understand. Never produced by ingestion.
    #[serde(untagged)]
    Unknown(String),
}

impl DiscountType {
    pub const FLAT: &'static str = "FLAT";
    pub const PERCENTAGE: &'static str = "PERCENTAGE";

    /// Strict parse used for upstream input.
    /// Case-insensitive, ignores surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(Self::FLAT) {
            Some(Self::Flat)
        } else if raw.eq_ignore_ascii_case(Self::PERCENTAGE) {
            Some(Self::Percentage)
        } else {
            None
        }
    }

    /// Lenient decode of a stored column; unrecognised values are kept verbatim
    pub fn from_db(raw: String) -> Self {
        match raw.as_str() {
            Self::FLAT => Self::Flat,
            Self::PERCENTAGE => Self::Percentage,
            _ => Self::Unknown(raw),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Flat => Self::FLAT,
            Self::Percentage => Self::PERCENTAGE,
            Self::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Amount the customer is about to pay.
///
/// Any finite value is accepted, negative included; the discount fold
/// never reports less than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
pub struct PaymentAmount(f64);

impl PaymentAmount {
    /// Returns `None` for NaN or infinite amounts
    pub fn new(amount: f64) -> Option<Self> {
        amount.is_finite().then_some(Self(amount))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
