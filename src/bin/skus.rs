use std::process;

use clap::Parser;
use tracing::{error, warn};

use views::sku::{fetch_product, format_sku_details, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(name = "skus")]
#[command(version, about = "List SKU details for a product in the catalog API")]
struct Cli {
    /// Product identifier to look up
    product_id: String,

    /// Base URL of the product-catalog API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    let product = match fetch_product(&cli.api_base, &cli.product_id) {
        Ok(product) => product,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    let skus = product.sku_details();
    if skus.is_empty() {
        warn!("no SKU details found for product {}", cli.product_id);
        return;
    }
    print!("{}", format_sku_details(&skus));
}
