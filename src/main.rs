use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

/// Default directives used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info,logstats_chart=debug";

/// `RUST_LOG` wins when present and valid; otherwise fall back to the default
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📊 Starting logstats-chart v{}", env!("CARGO_PKG_VERSION"));

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    if commands::handle_args(&config, &args).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = env_filter(Some("logstats_chart=warn")).to_string();
        assert!(filter.contains("logstats_chart=warn"));
        assert!(!filter.contains("debug"));
    }

    #[test]
    fn test_default_filter_when_unset() {
        let filter = env_filter(None).to_string();
        assert!(filter.contains("logstats_chart=debug"));
    }
}
