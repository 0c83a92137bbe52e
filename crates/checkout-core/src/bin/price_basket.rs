//! # Basket Pricer
//!
//! Prices a list of SKUs against a checkout config file.
//!
//! ## Usage
//! ```bash
//! # Uses ./checkout.toml
//! cargo run -p checkout-core --bin price-basket -- A A B C
//!
//! # Explicit config
//! cargo run -p checkout-core --bin price-basket -- --config ./uk.toml A B
//!
//! # Or via environment
//! CHECKOUT_CONFIG=./wales.json cargo run -p checkout-core --bin price-basket -- A
//! ```
//!
//! Set `RUST_LOG=checkout_core=debug` to see each scan and discount.

use std::env;
use std::process::ExitCode;

use checkout_core::{BasketItem, CheckoutConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "checkout.toml";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path =
        env::var("CHECKOUT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut skus = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args.get(i + 1).ok_or("--config needs a path")?;
                config_path = path.clone();
                i += 1;
            }
            "--help" | "-h" => {
                println!("Usage: price-basket [--config <PATH>] <SKU>...");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file, .toml or .json");
                println!("                       default: $CHECKOUT_CONFIG, then {DEFAULT_CONFIG_PATH}");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            sku => skus.push(sku.to_string()),
        }
        i += 1;
    }

    let config = CheckoutConfig::load(&config_path)?;
    let mut checkout = config.checkout()?;
    info!(transaction_id = %checkout.id(), skus = skus.len(), "Pricing basket");

    for sku in &skus {
        checkout.scan(sku)?;
    }

    let priced = checkout.priced_basket()?;
    for item in priced.contents() {
        print_line(item);
    }
    println!("{:<24} {:>10}", "TOTAL", checkout.calculate_price()?);

    Ok(())
}

fn print_line(item: &BasketItem) {
    println!(
        "{:<16} x{:<6} {:>10}",
        item.sku(),
        item.qty(),
        item.total_value()
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,checkout_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
