use clap::{Parser, Subcommand};
use fulfillment::application::engine::FulfillmentEngine;
use fulfillment::config::FulfillmentConfig;
use fulfillment::domain::order::OrderSummary;
use fulfillment::domain::payment::PaymentRequest;
use fulfillment::domain::shipping::ShippingRequest;
use fulfillment::infrastructure::carrier::ShipmentStoreBox;
use fulfillment::infrastructure::in_memory::InMemoryShipmentStore;
#[cfg(feature = "storage-rocksdb")]
use fulfillment::infrastructure::rocksdb::RocksDbShipmentStore;
use fulfillment::interfaces::csv::record_reader::RecordReader;
use fulfillment::interfaces::json::result_writer::ResultWriter;
use fulfillment::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file (shipping policy, enabled payment methods)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a persistent shipment registry. Requires the 'storage-rocksdb' feature.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a CSV file of payment requests
    Pay { input: PathBuf },
    /// Register every shipment in a CSV file with the carrier
    Ship {
        input: PathBuf,
        /// Query the carrier status of each registered shipment
        #[arg(long)]
        with_status: bool,
    },
    /// Query the status of a registered shipment
    Track { tracking_number: String },
    /// Cancel a registered shipment
    Cancel {
        tracking_number: String,
        #[arg(long)]
        reason: String,
    },
    /// Quote shipping fees for a CSV file of order totals
    Quote { input: PathBuf },
}

fn open_shipment_store(db_path: Option<PathBuf>) -> Result<ShipmentStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = RocksDbShipmentStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryShipmentStore::new()))
        }
        None => Ok(Box::new(InMemoryShipmentStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FulfillmentConfig::from_path(path).into_diagnostic()?,
        None => FulfillmentConfig::default(),
    };
    let engine = FulfillmentEngine::from_config(&config, open_shipment_store(cli.db_path)?);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    match cli.command {
        Command::Pay { input } => {
            let file = File::open(input).into_diagnostic()?;
            for request in RecordReader::new(file).records::<PaymentRequest>() {
                match request {
                    Ok(request) => match engine.process_payment(&request) {
                        Ok(result) => writer.write(&result).into_diagnostic()?,
                        Err(e) => eprintln!("Error processing payment: {}", e),
                    },
                    Err(e) => eprintln!("Error reading payment: {}", e),
                }
            }
        }
        Command::Ship { input, with_status } => {
            let file = File::open(input).into_diagnostic()?;
            for request in RecordReader::new(file).records::<ShippingRequest>() {
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        eprintln!("Error reading shipment: {}", e);
                        continue;
                    }
                };
                let response = match engine.register_shipment(&request).await {
                    Ok(response) => response,
                    Err(e) => {
                        eprintln!("Error registering shipment: {}", e);
                        continue;
                    }
                };
                writer.write(&response).into_diagnostic()?;

                if with_status && let Some(tracking_number) = &response.tracking_number {
                    match engine.shipment_status(tracking_number).await {
                        Ok(status) => writer.write(&status).into_diagnostic()?,
                        Err(e) => eprintln!("Error querying shipment: {}", e),
                    }
                }
            }
        }
        Command::Track { tracking_number } => {
            let status = engine.shipment_status(&tracking_number).await.into_diagnostic()?;
            writer.write(&status).into_diagnostic()?;
        }
        Command::Cancel {
            tracking_number,
            reason,
        } => {
            let response = engine
                .cancel_shipment(&tracking_number, &reason)
                .await
                .into_diagnostic()?;
            writer.write(&response).into_diagnostic()?;
        }
        Command::Quote { input } => {
            let file = File::open(input).into_diagnostic()?;
            for order in RecordReader::new(file).records::<OrderSummary>() {
                match order {
                    Ok(order) => writer.write(&engine.quote_shipping(&order)).into_diagnostic()?,
                    Err(e) => eprintln!("Error reading order: {}", e),
                }
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
