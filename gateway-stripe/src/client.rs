//! Stripe payment provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};

use gateway_types::{CreateIntentParams, PaymentIntent, PaymentProvider, ProviderError};

use crate::wire;

/// Production Stripe API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Same request timeout as Stripe's official client libraries.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

const MISSING_KEY_MESSAGE: &str =
    "You did not provide an API key. Set STRIPE_SECRET_KEY to your Stripe secret key.";

/// Settings for the Stripe adapter.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl StripeConfig {
    pub fn new(secret_key: Option<String>) -> Self {
        Self {
            secret_key,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// `PaymentProvider` backed by Stripe's `/v1/payment_intents` API.
///
/// Holds a pooled HTTP client; cheap to share behind an `Arc`.
pub struct StripeProvider {
    http: reqwest::Client,
    api_base: Url,
    secret_key: Option<String>,
}

impl StripeProvider {
    /// Creates a provider from the given configuration.
    ///
    /// A missing secret key is accepted here; every call will then fail
    /// with an authentication error.
    pub fn new(config: StripeConfig) -> anyhow::Result<Self> {
        let api_base = Url::parse(&config.api_base)?;
        if api_base.cannot_be_a_base() {
            anyhow::bail!("Stripe API base must be an http(s) URL: {}", config.api_base);
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_base,
            secret_key: config.secret_key.filter(|key| !key.is_empty()),
        })
    }

    /// Whether a secret key was supplied.
    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }

    fn secret_key(&self) -> Result<&str, ProviderError> {
        self.secret_key
            .as_deref()
            .ok_or_else(|| ProviderError::Authentication(MISSING_KEY_MESSAGE.into()))
    }

    /// Builds `{api_base}/v1/payment_intents[/{id}]`, percent-encoding the id.
    fn intents_url(&self, id: Option<&str>) -> Result<Url, ProviderError> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ProviderError::Connection(format!("Invalid Stripe API base: {}", self.api_base))
            })?;
            segments.pop_if_empty().extend(["v1", "payment_intents"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<PaymentIntent, ProviderError> {
        let response = request.send().await.map_err(|e| {
            ProviderError::Connection(format!(
                "An error occurred with our connection to Stripe: {e}"
            ))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::Connection(format!("Failed to read Stripe response: {e}"))
        })?;

        if !status.is_success() {
            return Err(wire::decode_error(status.as_u16(), &body));
        }

        wire::decode_intent(&body)
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    #[tracing::instrument(skip(self, params), fields(amount = params.amount, currency = %params.currency))]
    async fn create_intent(
        &self,
        params: CreateIntentParams,
    ) -> Result<PaymentIntent, ProviderError> {
        let key = self.secret_key()?;
        let url = self.intents_url(None)?;
        let form = wire::encode_create_params(&params);

        tracing::debug!("POST {}", url);
        self.send(self.http.post(url).bearer_auth(key).form(&form)).await
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent, ProviderError> {
        let key = self.secret_key()?;
        let url = self.intents_url(Some(id))?;

        tracing::debug!("GET {}", url);
        self.send(self.http.get(url).bearer_auth(key)).await
    }
}
