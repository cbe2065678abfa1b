use std::{path::PathBuf, process};

use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "views")]
#[command(version, about = "Report product view counts by organization and brand")]
struct Cli {
    /// Input CSV file
    path: PathBuf,

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

    match views::report_from_file(&cli.path) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
