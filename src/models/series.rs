//! Series models shared by the fetch and synthetic paths

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record on a line; `y == None` means "not available"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y: Some(y) }
    }

    pub fn missing(x: f64) -> Self {
        Self { x, y: None }
    }
}

/// A named, colored, ordered sequence of points drawn as one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub values: Vec<Point>,
    /// Series-level fields we don't interpret (e.g. `area`, `disabled`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    pub fn new(key: impl Into<String>, color: Option<&str>, values: Vec<Point>) -> Self {
        Self {
            key: key.into(),
            color: color.map(str::to_string),
            values,
            extra: Map::new(),
        }
    }

    /// The y value of the last record, `None` if empty or not available
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().and_then(|p| p.y)
    }

    /// Number of records whose y is not available
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|p| p.y.is_none()).count()
    }
}

/// Chart input exactly as the server sent it: a bare series object or an array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartPayload {
    Many(Vec<Series>),
    One(Series),
}

impl ChartPayload {
    /// View the payload as a slice of series regardless of its JSON shape
    pub fn series(&self) -> &[Series] {
        match self {
            ChartPayload::Many(series) => series,
            ChartPayload::One(series) => std::slice::from_ref(series),
        }
    }

    pub fn point_count(&self) -> usize {
        self.series().iter().map(|s| s.values.len()).sum()
    }

    /// First key that appears more than once, if any
    pub fn duplicate_key(&self) -> Option<&str> {
        let series = self.series();
        series
            .iter()
            .enumerate()
            .find(|(i, s)| series[..*i].iter().any(|prev| prev.key == s.key))
            .map(|(_, s)| s.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_array_with_null() {
        let body = r##"[{"key":"s","color":"#fff","values":[{"x":0,"y":1.0},{"x":1,"y":null}]}]"##;
        let payload: ChartPayload = serde_json::from_str(body).expect("parse failed");

        let expected = ChartPayload::Many(vec![Series::new(
            "s",
            Some("#fff"),
            vec![Point::new(0.0, 1.0), Point::missing(1.0)],
        )]);
        assert_eq!(payload, expected);
        assert_eq!(payload.series()[0].missing_count(), 1);
        assert_eq!(payload.series()[0].last_value(), None);
    }

    #[test]
    fn test_parses_single_series_object() {
        let body = r#"{"key":"solo","values":[{"x":3,"y":0.5}]}"#;
        let payload: ChartPayload = serde_json::from_str(body).expect("parse failed");

        assert!(matches!(payload, ChartPayload::One(_)));
        assert_eq!(payload.series().len(), 1);
        assert_eq!(payload.series()[0].color, None);
        assert_eq!(payload.series()[0].last_value(), Some(0.5));
    }

    #[test]
    fn test_keeps_unknown_series_fields() {
        let body = r#"[{"key":"a","area":true,"values":[]}]"#;
        let payload: ChartPayload = serde_json::from_str(body).expect("parse failed");

        let series = &payload.series()[0];
        assert_eq!(series.extra.get("area"), Some(&Value::Bool(true)));
        let back = serde_json::to_value(&payload).expect("serialize failed");
        assert_eq!(back[0]["area"], Value::Bool(true));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(serde_json::from_str::<ChartPayload>(r#"{"values":[]}"#).is_err());
        assert!(serde_json::from_str::<ChartPayload>(r#"[{"key":"a","values":[{"x":"a","y":1}]}]"#).is_err());
        assert!(serde_json::from_str::<ChartPayload>("42").is_err());
    }

    #[test]
    fn test_preserves_value_order() {
        let body = r#"[{"key":"a","values":[{"x":5,"y":1},{"x":2,"y":2},{"x":9,"y":3}]}]"#;
        let payload: ChartPayload = serde_json::from_str(body).expect("parse failed");

        let xs: Vec<f64> = payload.series()[0].values.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![5.0, 2.0, 9.0]);
    }

    #[test]
    fn test_duplicate_key() {
        let payload = ChartPayload::Many(vec![
            Series::new("a", None, vec![]),
            Series::new("b", None, vec![]),
            Series::new("a", None, vec![]),
        ]);
        assert_eq!(payload.duplicate_key(), Some("a"));

        let unique = ChartPayload::Many(vec![Series::new("a", None, vec![])]);
        assert_eq!(unique.duplicate_key(), None);
    }
}
