use thiserror::Error;
use crate::api::logstats::ApiError;

/// Failures of a single render attempt
///
/// None of these are fatal: the pipeline logs them and skips the chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Missing mount point: {0}")]
    MissingMountPoint(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ApiError> for ChartError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Deserialization(_) => ChartError::MalformedPayload(err.to_string()),
            ApiError::Request(_) | ApiError::Status(_, _) => ChartError::NetworkFailure(err.to_string()),
        }
    }
}

/// Map any plotting backend error into a render failure
pub fn render_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_map_to_taxonomy() {
        let status: ChartError = ApiError::Status(502, "bad gateway".to_string()).into();
        assert!(matches!(status, ChartError::NetworkFailure(_)));

        let request: ChartError = ApiError::Request("connection refused".to_string()).into();
        assert!(matches!(request, ChartError::NetworkFailure(_)));

        let body: ChartError = ApiError::Deserialization("expected value".to_string()).into();
        assert!(matches!(body, ChartError::MalformedPayload(ref msg) if msg.contains("expected value")));
    }
}
