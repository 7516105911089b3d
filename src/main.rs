use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use roadready::core::config::{self, CliOverrides};
use roadready::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "roadready", about = "Ontario G1 driving test practice")]
struct Args {
    /// Backend base URL (overrides config file and ROADREADY_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for the saved session (overrides config file and ROADREADY_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roadready.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("roadready.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            data_dir: args.data_dir.as_deref(),
        },
    );

    log::info!(
        "RoadReady starting up: backend={}, data_dir={}",
        resolved.base_url,
        resolved.data_dir.display()
    );

    tui::run(resolved)
}
