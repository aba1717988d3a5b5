//! Console front-end for the housing lookup flows.
//!
//! Wires console implementations of the surface ports into the same
//! renter/buyer flows a richer UI would use. Each subcommand simulates the
//! input events, awaits the scheduled work, and prints the result.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rentorbuy::api::{HttpQueryApi, QueryApi};
use rentorbuy::config::{self, LookupConfig};
use rentorbuy::flows::{BuyerFlow, RenterFlow};
use rentorbuy::surface::{BufferField, Notifier, OutputSink, TextField};

#[derive(Parser)]
#[command(name = "rentorbuy", about = "Query the housing data API")]
struct Cli {
    /// Base URL of the housing query API.
    #[arg(long, env = "RENTORBUY_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List place matches for a partial name.
    Places { name: String },
    /// Resolve a place and print its per-year rental rates.
    Renter { location: String },
    /// Resolve a place and print the indexed valuation of a house bought
    /// there.
    Buyer {
        location: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        year: i32,
    },
}

struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn render(&self, content: &str) {
        println!("{content}");
    }
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = LookupConfig::default().with_base_url(&cli.base_url)?;
    let api: Arc<dyn QueryApi> = Arc::new(HttpQueryApi::new(&config)?);

    match cli.command {
        Command::Places { name } => {
            let response = api.find_places(&name).await?;
            if response.count == 0 {
                println!("No places match '{name}'");
                return Ok(());
            }
            for place in &response.places {
                println!(
                    "{} (scg5 {}, scg7 {})",
                    place.name, place.scg_code5, place.scg_code7
                );
            }
        }
        Command::Renter { location } => {
            let field = Arc::new(BufferField::new(&location));
            let flow = RenterFlow::new(
                Arc::clone(&api),
                &config,
                Arc::clone(&field) as Arc<dyn TextField>,
                Arc::new(ConsoleSink),
                Arc::new(ConsoleNotifier),
            );

            let Some(handle) = flow.on_location_input() else {
                bail!("'{location}' is too short to search on");
            };
            handle.await?;

            let selection = flow.selection();
            if !selection.is_set() {
                bail!("no place matched '{location}'");
            }
            println!(
                "Resolved: {} (scg5 {}, scg7 {})",
                field.text(),
                selection.scg_code5,
                selection.scg_code7
            );

            if let Some(handle) = flow.fetch_rates() {
                handle.await?;
            }
        }
        Command::Buyer {
            location,
            price,
            year,
        } => {
            let field = Arc::new(BufferField::new(&location));
            let price_field = Arc::new(BufferField::new(&price.to_string()));
            let year_field = Arc::new(BufferField::new(&year.to_string()));
            let flow = BuyerFlow::new(
                Arc::clone(&api),
                &config,
                Arc::clone(&field) as Arc<dyn TextField>,
                price_field as Arc<dyn TextField>,
                year_field as Arc<dyn TextField>,
                Arc::new(ConsoleSink),
                Arc::new(ConsoleNotifier),
            );
            flow.on_price_input();
            flow.on_year_input();

            let Some(handle) = flow.on_location_input() else {
                bail!("'{location}' is too short to search on");
            };
            handle.await?;

            let selection = flow.selection();
            if !selection.is_set() {
                bail!("no place matched '{location}'");
            }
            println!(
                "Resolved: {} (scg5 {}, scg7 {})",
                field.text(),
                selection.scg_code5,
                selection.scg_code7
            );

            if let Some(handle) = flow.fetch_valuation() {
                handle.await?;
            }
        }
    }

    Ok(())
}
