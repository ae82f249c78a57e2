//! Gateway CLI
//!
//! Command-line interface for the payment intent gateway.

use anyhow::Result;
use clap::{Parser, Subcommand};

use gateway_client::GatewayClient;
use gateway_types::CreatePaymentIntentRequest;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(author, version, about = "Payment intent gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the gateway
    #[arg(
        long,
        env = "GATEWAY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Health,
    /// Create a payment intent
    Create {
        /// Amount in smallest currency unit (e.g. cents)
        #[arg(long)]
        amount: i64,
        /// Currency code, any case
        #[arg(long, default_value = "usd")]
        currency: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        booking_id: Option<String>,
        #[arg(long)]
        room_id: Option<String>,
    },
    /// Show the status of a payment intent
    Get {
        /// Payment intent ID (pi_...)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = GatewayClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            println!("✓ {} ({})", health.message, health.timestamp);
        }

        Commands::Create {
            amount,
            currency,
            description,
            user_id,
            booking_id,
            room_id,
        } => {
            let mut req = CreatePaymentIntentRequest::new(amount, currency);
            if let Some(description) = description {
                req = req.with_description(description);
            }
            if let Some(user_id) = user_id {
                req = req.with_user_id(user_id);
            }
            if let Some(booking_id) = booking_id {
                req = req.with_booking_id(booking_id);
            }
            if let Some(room_id) = room_id {
                req = req.with_room_id(room_id);
            }

            let created = client.create_payment_intent(&req).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }

        Commands::Get { id } => {
            let status = client.get_payment_intent(&id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
