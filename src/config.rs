use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use crate::api::logstats::LogStatsClient;
use crate::models::{ChartOptions, Mount};
use crate::services::fetch_service::DEFAULT_FETCH_RECORDS;
use crate::utils::ChartError;

/// Runtime settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub records: usize,
    pub timeout: Duration,
    pub bind: SocketAddr,
    pub chart_dir: PathBuf,
    pub chart_id: String,
    pub width: u32,
    pub height: u32,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ChartError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChartError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ChartOptions::default();

        Ok(Self {
            base_url: lookup("LOGSTATS_BASE_URL")
                .unwrap_or_else(|| LogStatsClient::DEFAULT_BASE_URL.to_string()),
            records: match lookup("LOGSTATS_RECORDS") {
                Some(raw) => parse_record_count(&raw)
                    .map_err(|e| ChartError::Config(format!("LOGSTATS_RECORDS: {}", e)))?,
                None => DEFAULT_FETCH_RECORDS,
            },
            timeout: Duration::from_secs(parse_var(&lookup, "LOGSTATS_TIMEOUT_SECS", 30)?),
            bind: parse_var(&lookup, "LOGSTATS_BIND", SocketAddr::from(([127, 0, 0, 1], 6800)))?,
            chart_dir: lookup("CHART_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            chart_id: lookup("CHART_ID").unwrap_or_else(|| "chart1".to_string()),
            width: parse_var(&lookup, "CHART_WIDTH", defaults.width)?,
            height: parse_var(&lookup, "CHART_HEIGHT", defaults.height)?,
        })
    }

    pub fn mount(&self) -> Mount {
        Mount::new(self.chart_dir.clone(), self.chart_id.clone())
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.width,
            height: self.height,
            ..ChartOptions::default()
        }
    }

    pub fn client(&self) -> Result<LogStatsClient, ChartError> {
        LogStatsClient::new(self.base_url.clone(), self.timeout).map_err(ChartError::from)
    }
}

/// Record count for `/logstats_data`; must be a positive integer
pub fn parse_record_count(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("❌ Invalid record count: '{}'. Use a positive integer, e.g. 1000", raw)),
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ChartError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ChartError::Config(format!("{}='{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
