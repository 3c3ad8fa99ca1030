//! PostgreSQL Repository Implementation

use crate::domain::entities::Offer;
use crate::domain::repository::OfferRepository;
use crate::domain::value_objects::{BankName, DiscountType, OfferId, PaymentInstrument};
use crate::error::OfferResult;
use kernel::id::OfferRecordId;
use sqlx::PgPool;
use uuid::Uuid;

const OFFER_COLUMNS: &str = r#"
    offer_record_id,
    offer_id,
    title,
    description,
    bank_name,
    discount_type,
    discount_value,
    max_discount_amount,
    payment_instruments,
    terms,
    created_at
"#;

/// PostgreSQL-backed offer repository
#[derive(Clone)]
pub struct PgOfferRepository {
    pool: PgPool,
}

impl PgOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OfferRepository for PgOfferRepository {
    async fn find_by_offer_id(&self, offer_id: &OfferId) -> OfferResult<Option<Offer>> {
        let sql = format!("SELECT {OFFER_COLUMNS} FROM offers WHERE offer_id = $1");

        let row = sqlx::query_as::<_, OfferRow>(&sql)
            .bind(offer_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(OfferRow::into_offer))
    }

    async fn find_applicable(
        &self,
        bank_name: &BankName,
        instrument: Option<&PaymentInstrument>,
    ) -> OfferResult<Vec<Offer>> {
        let sql = format!(
            r#"
            SELECT {OFFER_COLUMNS}
            FROM offers
            WHERE bank_name = $1
              AND ($2::TEXT IS NULL OR $2 = ANY(payment_instruments))
            "#
        );

        let rows = sqlx::query_as::<_, OfferRow>(&sql)
            .bind(bank_name.as_str())
            .bind(instrument.map(PaymentInstrument::as_str))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(OfferRow::into_offer).collect())
    }

    async fn insert_if_absent(&self, offer: &Offer) -> OfferResult<bool> {
        let instruments: Vec<&str> = offer
            .payment_instruments
            .iter()
            .map(PaymentInstrument::as_str)
            .collect();

        let inserted = sqlx::query(
            r#"
            INSERT INTO offers (
                offer_record_id,
                offer_id,
                title,
                description,
                bank_name,
                discount_type,
                discount_value,
                max_discount_amount,
                payment_instruments,
                terms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (offer_id) DO NOTHING
            "#,
        )
        .bind(offer.record_id.into_uuid())
        .bind(offer.offer_id.as_str())
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(offer.bank_name.as_str())
        .bind(offer.discount_type.code())
        .bind(offer.discount_value)
        .bind(offer.max_discount_amount)
        .bind(instruments)
        .bind(&offer.terms)
        .bind(offer.created_at)
        .execute(&self.pool)
        .await?
        .rows_affected()
            == 1;

        if inserted {
            tracing::info!(
                offer_id = %offer.offer_id,
                bank_name = %offer.bank_name,
                discount_type = %offer.discount_type,
                "Offer created"
            );
        }

        Ok(inserted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct OfferRow {
    offer_record_id: Uuid,
    offer_id: String,
    title: String,
    description: String,
    bank_name: String,
    discount_type: String,
    discount_value: f64,
    max_discount_amount: Option<f64>,
    payment_instruments: Vec<String>,
    terms: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl OfferRow {
    fn into_offer(self) -> Offer {
        Offer {
            record_id: OfferRecordId::from_uuid(self.offer_record_id),
            offer_id: OfferId::from_db(self.offer_id),
            title: self.title,
            description: self.description,
            bank_name: BankName::from_db(self.bank_name),
            discount_type: DiscountType::from_db(self.discount_type),
            discount_value: self.discount_value,
            max_discount_amount: self.max_discount_amount,
            payment_instruments: self
                .payment_instruments
                .into_iter()
                .map(PaymentInstrument::from_db)
                .collect(),
            terms: self.terms,
            created_at: self.created_at,
        }
    }
}
