mod app;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Async processing pipeline runner with result envelopes")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose cycle diagnostics
    #[arg(long)]
    verbose: bool,

    /// Per-cycle timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Max retries for a failed cycle
    #[arg(long)]
    max_retries: Option<u32>,

    /// Number of sequential processing cycles
    #[arg(long, default_value = "1")]
    runs: u32,

    /// Emit the final report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    // Load base configuration from file if provided
    let base_config = if let Some(config_path) = &args.config {
        Some(config::Config::from_file(config_path)?)
    } else {
        None
    };

    // Create AppCfg with priority: CLI args > Config file > Defaults
    let app_cfg = if let Some(cfg) = base_config {
        let mut app_cfg = app::AppCfg::from_config(cfg, args.verbose)?;

        if let Some(timeout_ms) = args.timeout_ms {
            app_cfg.timeout_ms = timeout_ms;
        }
        if let Some(max_retries) = args.max_retries {
            app_cfg.max_retries = max_retries;
        }
        if args.runs != 1 {
            // Only override if not default
            app_cfg.runs = args.runs;
        }
        if args.json {
            app_cfg.json_output = true;
        }

        app_cfg
    } else {
        app::AppCfg::from_cli_args(
            args.verbose,
            args.timeout_ms,
            args.max_retries,
            args.runs,
            args.json,
        )?
    };

    app::run(app_cfg).await
}
