/// Errors from the logstats HTTP endpoint
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read
    Request(String),
    /// Non-2xx status with the response body
    Status(u16, String),
    /// Body is not JSON or not shaped like chart input
    Deserialization(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request Error: {}", msg),
            ApiError::Status(code, body) => write!(f, "HTTP Error ({}): {}", code, body),
            ApiError::Deserialization(msg) => write!(f, "Deserialization Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
