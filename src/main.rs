use clap::Parser;
use reflection::core::config::{self, CliOverrides, ReflectionConfig};
use reflection::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reflection", about = "Write a reflection, see the emotion behind it")]
struct Args {
    /// Emotion analysis service URL (overrides config and REFLECTION_API_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {}", e);
        ReflectionConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            log_file: args.log_file,
        },
    );

    // Initialize file logger - the TUI owns the terminal, so logs go to disk
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Reflection starting up against {}", resolved.base_url);

    tui::run(resolved)
}
