pub mod client;
pub mod models;

pub use client::LogStatsClient;
pub use models::ApiError;
