use byebuy::core::config::{self, ByeBuyConfig, CliOverrides};
use byebuy::core::session;
use byebuy::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "byebuy", about = "Navigation demo with sign-in gated screens")]
struct Args {
    /// Route to start on, e.g. "onboarding/welcome"
    #[arg(short, long)]
    start: Option<String>,

    /// Route to redirect to when a screen needs sign-in
    #[arg(long)]
    login: Option<String>,

    /// Ignore the saved session and start from the start route
    #[arg(long)]
    fresh: bool,

    /// Where to write the log file (default: byebuy.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, load_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ByeBuyConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        start_route: args.start,
        login_route: args.login,
        fresh: args.fresh,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "ByeBuy starting on {} (login route: {})",
        resolved.start_route,
        resolved.login_route
    );
    if let Some(e) = load_error {
        log::warn!("{}, using defaults", e);
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }

    let saved_history = if resolved.restore_session {
        session::load_saved_history(resolved.session_path.as_deref())
    } else {
        None
    };

    tui::run(resolved, saved_history)
}
