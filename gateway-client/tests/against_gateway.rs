//! Client SDK tests against a gateway running in-process on a real socket.

use async_trait::async_trait;
use tokio::net::TcpListener;

use gateway_client::{ClientError, GatewayClient};
use gateway_hex::{GatewayService, inbound::HttpServer};
use gateway_types::{
    CreateIntentParams, CreatePaymentIntentRequest, Metadata, PaymentIntent, PaymentProvider,
    ProviderError,
};

/// Provider that accepts any intent and knows exactly one id.
struct FakeProvider;

#[async_trait]
impl PaymentProvider for FakeProvider {
    async fn create_intent(
        &self,
        params: CreateIntentParams,
    ) -> Result<PaymentIntent, ProviderError> {
        if params.currency != "usd" {
            return Err(ProviderError::Rejected {
                status: 400,
                kind: Some("invalid_request_error".into()),
                code: None,
                message: format!("Invalid currency: {}", params.currency),
            });
        }

        Ok(PaymentIntent {
            id: "pi_fake".into(),
            client_secret: Some("pi_fake_secret".into()),
            status: "requires_payment_method".into(),
            amount: params.amount,
            currency: params.currency,
            metadata: Metadata::new(),
        })
    }

    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent, ProviderError> {
        Ok(PaymentIntent {
            id: id.to_string(),
            client_secret: None,
            status: "processing".into(),
            amount: 900,
            currency: "usd".into(),
            metadata: Metadata::from([("roomId".to_string(), "r1".to_string())]),
        })
    }
}

async fn spawn_gateway() -> GatewayClient {
    let router = HttpServer::new(GatewayService::new(FakeProvider)).router();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    GatewayClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_health() {
    let client = spawn_gateway().await;

    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_create_payment_intent() {
    let client = spawn_gateway().await;

    let created = client
        .create_payment_intent(&CreatePaymentIntentRequest::new(1500, "USD").with_room_id("r1"))
        .await
        .unwrap();

    assert_eq!(created.payment_intent_id, "pi_fake");
    assert_eq!(created.client_secret.as_deref(), Some("pi_fake_secret"));
}

#[tokio::test]
async fn test_create_payment_intent_validation_error() {
    let client = spawn_gateway().await;

    let err = client
        .create_payment_intent(&CreatePaymentIntentRequest::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            message,
            details,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Missing required fields: amount, currency");
            assert_eq!(details, None);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_payment_intent_provider_error() {
    let client = spawn_gateway().await;

    let err = client
        .create_payment_intent(&CreatePaymentIntentRequest::new(1500, "XYZ"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            message,
            details,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to create payment intent");
            assert_eq!(details.as_deref(), Some("Invalid currency: xyz"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_payment_intent_encodes_id() {
    let client = spawn_gateway().await;

    let status = client.get_payment_intent("pi_a b").await.unwrap();

    assert_eq!(status.id, "pi_a b");
    assert_eq!(status.status, "processing");
    assert_eq!(status.metadata["roomId"], "r1");
}
