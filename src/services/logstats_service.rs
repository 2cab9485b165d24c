use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;
use crate::models::ChartPayload;
use super::synthetic_service::{random_series, RANDOM_POINTS_COLOR};

/// Records returned when `n` is missing or unusable
pub const DEFAULT_RECORDS: usize = 100;
/// Upper bound on `n` so one request can't ask for an unbounded body
pub const MAX_RECORDS: usize = 10_000;
pub const LOGSTATS_KEY: &str = "random points";

/// Query of `GET /logstats_data`; other keys (`sd`, `ed`, `p`, `s`) are ignored
#[derive(Debug, Default, Deserialize)]
pub struct LogStatsParams {
    pub n: Option<String>,
}

/// Parse `n`, falling back to the default and clamping to the maximum
pub fn requested_records(n: Option<&str>) -> usize {
    n.and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_RECORDS)
        .min(MAX_RECORDS)
}

/// Build the `/logstats_data` body for the given query
pub fn logstats_payload(params: &LogStatsParams) -> ChartPayload {
    let records = requested_records(params.n.as_deref());
    let series = random_series(&mut rand::thread_rng(), LOGSTATS_KEY, RANDOM_POINTS_COLOR, records);
    ChartPayload::Many(vec![series])
}

async fn logstats_data(Query(params): Query<LogStatsParams>) -> Json<ChartPayload> {
    debug!("logstats_data query: {:?}", params);
    Json(logstats_payload(&params))
}

/// Router exposing `GET /logstats_data`
pub fn router() -> Router {
    Router::new().route("/logstats_data", get(logstats_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use serde_json::Value;

    async fn spawn_server() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });
        addr
    }

    #[test]
    fn test_requested_records() {
        assert_eq!(requested_records(None), 100);
        assert_eq!(requested_records(Some("1000")), 1000);
        assert_eq!(requested_records(Some(" 5 ")), 5);
        assert_eq!(requested_records(Some("0")), 0);
        assert_eq!(requested_records(Some("abc")), 100);
        assert_eq!(requested_records(Some("-3")), 100);
        assert_eq!(requested_records(Some("999999")), MAX_RECORDS);
    }

    #[test]
    fn test_payload_shape() {
        let params = LogStatsParams { n: Some("12".to_string()) };
        let payload = logstats_payload(&params);

        let series = payload.series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].key, "random points");
        assert_eq!(series[0].color.as_deref(), Some("#2222ff"));
        assert_eq!(series[0].values.len(), 12);
    }

    #[tokio::test]
    async fn test_endpoint_serves_json_series() {
        let addr = spawn_server().await;

        let response = reqwest::get(format!("http://{}/logstats_data?n=5&sd=20240101&p=demo", addr))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body: Value = response.json().await.unwrap();
        let values = body[0]["values"].as_array().unwrap();
        assert_eq!(values.len(), 5);
        assert_eq!(body[0]["key"], "random points");
        assert_eq!(values[4]["x"].as_f64(), Some(4.0));
    }

    #[tokio::test]
    async fn test_endpoint_defaults_bad_n() {
        let addr = spawn_server().await;

        let body: Value = reqwest::get(format!("http://{}/logstats_data?n=lots", addr))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body[0]["values"].as_array().unwrap().len(), DEFAULT_RECORDS);
    }
}
