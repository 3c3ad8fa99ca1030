//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Offer, OfferDraft)
//! - Domain value objects (OfferId, BankName, DiscountType, ...)
//! - Domain services (discount computation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
