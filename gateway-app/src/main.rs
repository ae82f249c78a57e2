//! # Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the Stripe provider adapter
//! - Create the gateway service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_hex::{GatewayService, inbound::HttpServer};
use gateway_stripe::{StripeConfig, StripeProvider};

use config::Config;

fn init_tracer(
    endpoint: &str,
) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("payment-intent-gateway"), provider))
}

fn log_banner(config: &Config) {
    tracing::info!("🚀 Stripe Payment Backend");
    tracing::info!("📡 Server: http://localhost:{}", config.port);
    tracing::info!("📱 Android Emulator: http://10.0.2.2:{}", config.port);
    if config.stripe_configured() {
        tracing::info!("💳 Stripe: ✅ Configured");
    } else {
        tracing::warn!("💳 Stripe: ❌ Missing (set STRIPE_SECRET_KEY, provider calls will fail)");
    }
    tracing::info!("Endpoints:");
    tracing::info!("  POST /api/create-payment-intent");
    tracing::info!("  GET  /api/payment-intent/{{id}}");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // OpenTelemetry export is opt-in
    let (telemetry, otel_provider) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, provider) = init_tracer(endpoint)?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,gateway_app=debug,gateway_hex=debug,gateway_stripe=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    log_banner(&config);

    // Build the provider adapter
    let provider = StripeProvider::new(
        StripeConfig::new(config.stripe_secret_key.clone()).with_api_base(&config.stripe_api_base),
    )?;

    // Create the gateway service
    let service = GatewayService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
