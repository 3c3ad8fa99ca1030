//! Unit tests for offer crate

/// In-memory test doubles shared by the use case and router tests
pub(crate) mod support {
    use crate::domain::entities::Offer;
    use crate::domain::repository::OfferRepository;
    use crate::domain::value_objects::{BankName, OfferId, PaymentInstrument};
    use crate::error::{OfferError, OfferResult};
    use std::sync::{Arc, Mutex};

    /// Offer store backed by a vector, in insertion order
    #[derive(Clone, Default)]
    pub struct InMemoryOfferRepository {
        offers: Arc<Mutex<Vec<Offer>>>,
        failing: bool,
    }

    impl InMemoryOfferRepository {
        pub fn with_offers(offers: impl IntoIterator<Item = Offer>) -> Self {
            Self {
                offers: Arc::new(Mutex::new(offers.into_iter().collect())),
                failing: false,
            }
        }

        /// Every call fails as if the pool were exhausted
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn len(&self) -> usize {
            self.offers.lock().unwrap().len()
        }

        fn check(&self) -> OfferResult<()> {
            if self.failing {
                Err(OfferError::Database(sqlx::Error::PoolTimedOut))
            } else {
                Ok(())
            }
        }
    }

    impl OfferRepository for InMemoryOfferRepository {
        async fn find_by_offer_id(&self, offer_id: &OfferId) -> OfferResult<Option<Offer>> {
            self.check()?;
            let offers = self.offers.lock().unwrap();
            Ok(offers.iter().find(|o| &o.offer_id == offer_id).cloned())
        }

        async fn find_applicable(
            &self,
            bank_name: &BankName,
            instrument: Option<&PaymentInstrument>,
        ) -> OfferResult<Vec<Offer>> {
            self.check()?;
            let offers = self.offers.lock().unwrap();
            Ok(offers
                .iter()
                .filter(|o| &o.bank_name == bank_name)
                .filter(|o| instrument.is_none_or(|i| o.accepts(i)))
                .cloned()
                .collect())
        }

        async fn insert_if_absent(&self, offer: &Offer) -> OfferResult<bool> {
            self.check()?;
            let mut offers = self.offers.lock().unwrap();
            if offers.iter().any(|o| o.offer_id == offer.offer_id) {
                return Ok(false);
            }
            offers.push(offer.clone());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::InMemoryOfferRepository;
    use crate::application::config::OfferConfig;
    use crate::presentation::router::offer_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn router(repo: &InMemoryOfferRepository) -> Router {
        offer_router_generic(repo.clone(), OfferConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_offers(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/offer")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn hdfc_payload() -> Value {
        json!({
            "flipkartOfferApiResponse": {
                "offers": [
                    {
                        "id": "FK-HDFC-FLAT",
                        "title": "Flat 100 off",
                        "description": "HDFC cards",
                        "bank": "HDFC",
                        "discountType": "FLAT",
                        "discountValue": 100,
                        "paymentInstruments": ["CREDIT", "UPI"]
                    },
                    {
                        "id": "FK-HDFC-PCT",
                        "title": "10% off",
                        "description": "HDFC credit cards",
                        "bank": "HDFC",
                        "discountType": "PERCENTAGE",
                        "discountValue": 10,
                        "maxDiscountAmount": 50,
                        "paymentInstruments": ["CREDIT"]
                    },
                    {
                        "id": "FK-AXIS-PCT",
                        "title": "15% off",
                        "description": "AXIS debit cards",
                        "bank": "AXIS",
                        "discountType": "percentage",
                        "discountValue": 15,
                        "paymentInstruments": ["DEBIT"]
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_create_offers_then_replay() {
        let repo = InMemoryOfferRepository::default();

        let (status, body) = send(router(&repo), post_offers(&hdfc_payload())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "noOfOffersIdentified": 3, "noOfNewOffersCreated": 3 })
        );

        let (status, body) = send(router(&repo), post_offers(&hdfc_payload())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "noOfOffersIdentified": 3, "noOfNewOffersCreated": 0 })
        );
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_create_offers_empty_response() {
        let repo = InMemoryOfferRepository::default();
        let (status, body) = send(
            router(&repo),
            post_offers(&json!({ "flipkartOfferApiResponse": {} })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["noOfOffersIdentified"], 0);
        assert_eq!(body["noOfNewOffersCreated"], 0);
    }

    #[tokio::test]
    async fn test_create_offers_missing_field_is_validation_error() {
        let repo = InMemoryOfferRepository::default();
        let (status, body) =
            send(router(&repo), post_offers(&json!({ "offers": [] }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_offers_invalid_json_is_validation_error() {
        let repo = InMemoryOfferRepository::default();
        let request = Request::builder()
            .method("POST")
            .uri("/offer")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(router(&repo), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_offers_unknown_type_rejects_whole_payload() {
        let repo = InMemoryOfferRepository::default();
        let mut payload = hdfc_payload();
        payload["flipkartOfferApiResponse"]["offers"][2]["discountType"] = json!("CASHBACK");

        let (status, body) = send(router(&repo), post_offers(&payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_DISCOUNT_TYPE");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_create_offers_store_failure() {
        let repo = InMemoryOfferRepository::failing();
        let (status, body) = send(router(&repo), post_offers(&hdfc_payload())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "STORE_ERROR");
    }

    #[tokio::test]
    async fn test_highest_discount_scenarios() {
        let repo = InMemoryOfferRepository::default();
        send(router(&repo), post_offers(&hdfc_payload())).await;

        let cases = [
            ("amountToPay=1000&bankName=HDFC", 100.0),
            ("amountToPay=300&bankName=HDFC", 100.0),
            ("amountToPay=1000&bankName=HDFC&paymentInstrument=CREDIT", 100.0),
            ("amountToPay=1000&bankName=HDFC&paymentInstrument=EMI_OPTIONS", 0.0),
            ("amountToPay=1000&bankName=AXIS&paymentInstrument=DEBIT", 150.0),
            ("amountToPay=1000&bankName=AXIS&paymentInstrument=", 150.0),
            ("amountToPay=1000&bankName=ICICI", 0.0),
        ];

        for (query, expected) in cases {
            let (status, body) =
                send(router(&repo), get(&format!("/highest-discount?{query}"))).await;
            assert_eq!(status, StatusCode::OK, "{query}");
            assert_eq!(body["highestDiscountAmount"], json!(expected), "{query}");
        }
    }

    #[tokio::test]
    async fn test_highest_discount_validation() {
        let repo = InMemoryOfferRepository::default();

        for query in [
            "bankName=HDFC",
            "amountToPay=abc&bankName=HDFC",
            "amountToPay=1e3&bankName=HDFC",
            "amountToPay=1000",
            "amountToPay=1000&bankName=",
        ] {
            let (status, body) =
                send(router(&repo), get(&format!("/highest-discount?{query}"))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
            assert_eq!(body["code"], "VALIDATION_ERROR", "{query}");
        }
    }

    #[tokio::test]
    async fn test_highest_discount_accepts_negative_and_large_amounts() {
        let repo = InMemoryOfferRepository::default();
        send(router(&repo), post_offers(&hdfc_payload())).await;

        for (query, expected) in [
            ("amountToPay=-5&bankName=HDFC", 100.0),
            ("amountToPay=-5&bankName=AXIS", 0.0),
            ("amountToPay=1000000000000&bankName=AXIS", 150_000_000_000.0),
        ] {
            let (status, body) =
                send(router(&repo), get(&format!("/highest-discount?{query}"))).await;
            assert_eq!(status, StatusCode::OK, "{query}");
            assert_eq!(body["highestDiscountAmount"], json!(expected), "{query}");
        }
    }

    #[tokio::test]
    async fn test_highest_discount_overflow_stays_numeric() {
        let repo = InMemoryOfferRepository::default();
        let payload = json!({
            "flipkartOfferApiResponse": {
                "offers": [{
                    "id": "FK-HUGE",
                    "title": "Huge percentage",
                    "description": "",
                    "bank": "HDFC",
                    "discountType": "PERCENTAGE",
                    "discountValue": 1e305
                }]
            }
        });
        let (status, _) = send(router(&repo), post_offers(&payload)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            router(&repo),
            get("/highest-discount?amountToPay=100000000&bankName=HDFC"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["highestDiscountAmount"], json!(0.0));
    }

    #[tokio::test]
    async fn test_get_offer() {
        let repo = InMemoryOfferRepository::default();
        send(router(&repo), post_offers(&hdfc_payload())).await;

        let (status, body) = send(router(&repo), get("/offer/FK-HDFC-PCT")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["offerId"], "FK-HDFC-PCT");
        assert_eq!(body["discountType"], "PERCENTAGE");
        assert_eq!(body["maxDiscountAmount"], json!(50.0));
        assert_eq!(body["paymentInstruments"], json!(["CREDIT"]));

        let (status, body) = send(router(&repo), get("/offer/FK-MISSING")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(OfferError, StatusCode)> = vec![
            (
                OfferError::Payload(PayloadError::OffersNotArray),
                StatusCode::BAD_REQUEST,
            ),
            (
                OfferError::InvalidRequest("bankName".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                OfferError::OfferNotFound("FK-1".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                OfferError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                OfferError::Database(sqlx::Error::Protocol("unexpected message".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                OfferError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    /// Postgres error carrying only a SQLSTATE
    #[derive(Debug)]
    struct PgStateError(&'static str);

    impl std::fmt::Display for PgStateError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "SQLSTATE {}", self.0)
        }
    }

    impl std::error::Error for PgStateError {}

    impl sqlx::error::DatabaseError for PgStateError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    #[test]
    fn test_database_status_matches_rendered_response() {
        let cases = [
            ("57P01", StatusCode::SERVICE_UNAVAILABLE),
            ("53300", StatusCode::SERVICE_UNAVAILABLE),
            ("23505", StatusCode::CONFLICT),
            ("XX000", StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (sqlstate, expected_status) in cases {
            let error = OfferError::Database(sqlx::Error::database(PgStateError(sqlstate)));
            assert_eq!(error.status_code(), expected_status, "{sqlstate}");
            assert_eq!(error.into_response().status(), expected_status, "{sqlstate}");
        }
    }

    #[test]
    fn test_error_codes() {
        let unknown = OfferError::Payload(PayloadError::UnknownDiscountType {
            index: 0,
            value: "BOGO".into(),
        });
        assert_eq!(unknown.code(), UNKNOWN_DISCOUNT_TYPE);
        assert_eq!(
            OfferError::Payload(PayloadError::MissingField {
                index: 2,
                field: "bank"
            })
            .code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(OfferError::OfferNotFound("x".into()).code(), NOT_FOUND);
        assert_eq!(
            OfferError::Database(sqlx::Error::PoolClosed).code(),
            "STORE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = OfferError::Payload(PayloadError::MissingField {
            index: 2,
            field: "bank",
        });
        assert!(err.to_string().contains("offers[2].bank"));
        assert!(
            OfferError::OfferNotFound("FK-1".into())
                .to_string()
                .contains("FK-1")
        );
    }

    #[test]
    fn test_store_details_not_exposed() {
        let app: kernel::error::app_error::AppError =
            OfferError::Database(sqlx::Error::Protocol("unexpected message".into())).into();
        assert_eq!(app.code(), Some("STORE_ERROR"));
        assert!(!app.message().contains("unexpected message"));
    }
}
