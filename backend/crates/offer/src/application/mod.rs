//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains the payload parser and use case implementations.

pub mod config;
pub mod get_offer;
pub mod highest_discount;
pub mod ingest_offers;
pub mod parse_offers;
