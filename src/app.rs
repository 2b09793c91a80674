// src/app.rs
use anyhow::Result;
use std::time::Instant;
use tracing::info;

use procunit::application::ProcessingService;
use procunit::shared::types::ProcessorConfig;

use crate::config::Config;
use crate::report::ProcessingReport;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub verbose: bool,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub runs: u32,
    pub json_output: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config, override_verbose: bool) -> Result<Self> {
        let defaults = ProcessorConfig::default();
        let run = cfg.run.unwrap_or_default();

        Ok(Self {
            verbose: if override_verbose {
                true
            } else {
                cfg.processor.verbose.unwrap_or(defaults.verbose)
            },
            timeout_ms: cfg.processor.timeout_ms.unwrap_or(defaults.timeout_ms),
            max_retries: cfg.processor.max_retries.unwrap_or(defaults.max_retries),
            runs: run.runs.unwrap_or(1),
            json_output: run.json.unwrap_or(false),
        })
    }

    pub fn from_cli_args(
        verbose: bool,
        timeout_ms: Option<u64>,
        max_retries: Option<u32>,
        runs: u32,
        json_output: bool,
    ) -> Result<Self> {
        let defaults = ProcessorConfig::default();

        Ok(Self {
            verbose,
            timeout_ms: timeout_ms.unwrap_or(defaults.timeout_ms),
            max_retries: max_retries.unwrap_or(defaults.max_retries),
            runs,
            json_output,
        })
    }
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("Starting processing pipeline runner");

    let processor_config = ProcessorConfig {
        verbose: app_cfg.verbose,
        timeout_ms: app_cfg.timeout_ms,
        max_retries: app_cfg.max_retries,
    };

    let service = ProcessingService::new(&processor_config)?;

    let started = Instant::now();
    let results = service.run_batch(app_cfg.runs).await?;
    let report =
        ProcessingReport::new(results).with_elapsed_ms(started.elapsed().as_millis() as u64);

    if app_cfg.json_output {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
    }

    Ok(())
}
