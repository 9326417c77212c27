use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use atrium::api::HttpStatusProbe;
use atrium::core::config::{load_config, resolve};
use atrium::tui;

#[derive(Parser)]
#[command(name = "atrium", about = "Terminal workspace dashboard")]
struct Args {
    /// Section to open on start (home, inbox, agents)
    #[arg(short, long)]
    section: Option<String>,

    /// Base URL of the backend server
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atrium.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atrium.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config file is a startup error; only a missing file
    // falls back to defaults (load_config handles that case itself).
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Refusing to start: {}", e);
            eprintln!("atrium: {e}");
            std::process::exit(1);
        }
    };
    let resolved = resolve(&config, args.section.as_deref(), args.base_url.as_deref());

    log::info!(
        "Atrium starting up in section '{}' against {}",
        resolved.start_section.label(),
        resolved.base_url
    );

    let probe = Arc::new(HttpStatusProbe::new(resolved.base_url.clone()));
    tui::run(resolved, probe)
}
