use crate::models::ChartPayload;
use super::format::format_tick;

/// Plain-text table summarising a payload for the log after a render
pub struct SummaryTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl SummaryTable {
    const HEADERS: [&'static str; 5] = ["Key", "Color", "Points", "N/A", "Last"];

    /// One row per series: key, color, record count, missing count, last value
    pub fn from_payload(payload: &ChartPayload, fraction_digits: usize) -> Self {
        let mut table = SummaryTable {
            headers: Self::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            col_widths: Self::HEADERS.iter().map(|h| h.len()).collect(),
        };

        for series in payload.series() {
            table.add_row(vec![
                series.key.clone(),
                series.color.clone().unwrap_or_else(|| "-".to_string()),
                series.values.len().to_string(),
                series.missing_count().to_string(),
                format_tick(series.last_value(), fraction_digits),
            ]);
        }

        table
    }

    fn add_row(&mut self, row: Vec<String>) {
        for (width, col) in self.col_widths.iter_mut().zip(&row) {
            *width = (*width).max(col.chars().count());
        }
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render header, separator and rows, one per line
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_separator());
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        row.iter()
            .zip(&self.col_widths)
            .map(|(col, &width)| format!("{:<width$}", col, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Series};

    #[test]
    fn test_summary_rows() {
        let payload = ChartPayload::Many(vec![
            Series::new("Random Points", Some("#2222ff"), vec![Point::new(0.0, 0.5), Point::new(1.0, 0.25)]),
            Series::new("gaps", None, vec![Point::new(0.0, 1.0), Point::missing(1.0)]),
        ]);

        let table = SummaryTable::from_payload(&payload, 2);
        assert_eq!(table.row_count(), 2);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Key"));
        assert!(lines[2].contains("Random Points") && lines[2].contains("0.25"));
        assert!(lines[3].contains("N/A") && lines[3].contains(" - "));
    }

    #[test]
    fn test_empty_payload() {
        let table = SummaryTable::from_payload(&ChartPayload::Many(vec![]), 2);
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.render().lines().count(), 2);
    }
}
