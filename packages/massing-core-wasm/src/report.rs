use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;

/// One line of the metrics panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub label: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superscript: Option<String>,
    pub value: f64,
    pub fraction_digits: usize,
    pub formatted: String,
}

fn row(label: &str, unit: &str, superscript: Option<&str>, value: f64, fraction_digits: usize) -> ReportRow {
    ReportRow {
        label: label.to_string(),
        unit: unit.to_string(),
        superscript: superscript.map(str::to_string),
        value,
        fraction_digits,
        formatted: format!("{:.*}", fraction_digits, value),
    }
}

/// Panel rows in display order
pub fn metrics_report(metrics: &Metrics) -> Vec<ReportRow> {
    vec![
        row("Land Area", "m", Some("2"), metrics.land_area, 2),
        row("Building Area", "m", Some("2"), metrics.building_area, 2),
        row("Building Floor Area", "m", Some("2"), metrics.building_floor_area, 2),
        row("Building Volume", "m", Some("3"), metrics.volume, 2),
        row("Building Height", "m", None, metrics.building_height, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_panel_order_and_precision() {
        let metrics = Metrics {
            land_area: 3069.9696761913397,
            building_area: 767.4924190822928,
            building_floor_area: 2302.4772572468784,
            building_height: 12.0,
            volume: 9209.909028987514,
        };
        let rows = metrics_report(&metrics);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Land Area", "Building Area", "Building Floor Area", "Building Volume", "Building Height"]
        );
        assert_eq!(rows[0].formatted, "3069.97");
        assert_eq!(rows[1].formatted, "767.49");
        assert_eq!(rows[3].superscript.as_deref(), Some("3"));
        assert_eq!(rows[4].formatted, "12.0");
        assert!(rows[4].superscript.is_none());
    }
}
