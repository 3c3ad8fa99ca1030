//! Server configuration

use clap::Parser;
use offer::OfferConfig;
use std::net::SocketAddr;

/// Offer API server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "api", about = "Offer ingestion and highest-discount API", long_about = None)]
pub struct ApiConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Address the HTTP server binds to
    #[arg(long, env = "API_BIND_ADDR", default_value = "0.0.0.0:31113")]
    pub bind_addr: SocketAddr,

    /// Upper bound on pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub database_max_connections: u32,

    /// Comma-separated CORS origins
    #[arg(
        long,
        env = "FRONTEND_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:40922,http://127.0.0.1:40922"
    )]
    pub frontend_origins: Vec<String>,

    /// Upper bound on elements in one upstream `offers` array
    #[arg(
        long,
        env = "OFFER_MAX_OFFERS_PER_PAYLOAD",
        default_value_t = OfferConfig::default().max_offers_per_payload
    )]
    pub max_offers_per_payload: usize,
}

impl ApiConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub fn offer_config(&self) -> OfferConfig {
        OfferConfig {
            max_offers_per_payload: self.max_offers_per_payload,
        }
    }
}
