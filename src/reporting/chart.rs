//! Chart descriptions and their Chart.js configuration

use serde_json::{Value, json};

use crate::core::constants::colors;

/// The kinds of chart the reports use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Histogram,
    Pie,
    Scatter,
}

impl ChartKind {
    /// Chart.js `type` used to draw this kind
    pub fn chart_js_type(&self) -> &'static str {
        match self {
            ChartKind::Bar | ChartKind::Histogram => "bar",
            ChartKind::Line | ChartKind::Scatter => "line",
            ChartKind::Pie => "pie",
        }
    }
}

/// One data series of a chart. `None` values are drawn as gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub color: String,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.into(),
            data: data.into_iter().map(Some).collect(),
            color: color.to_string(),
        }
    }

    pub fn with_gaps(label: impl Into<String>, data: Vec<Option<f64>>, color: &str) -> Self {
        Self {
            label: label.into(),
            data,
            color: color.to_string(),
        }
    }
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Category or date labels along the x axis (slice names for pies)
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            labels: Vec::new(),
            series: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// True when there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.data.is_empty())
    }

    /// Chart.js configuration object for this chart.
    /// The title is drawn by the surrounding page, not by Chart.js.
    pub fn to_chart_js(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|series| self.dataset_config(series))
            .collect();

        let mut options = json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": false },
                "legend": { "display": self.kind == ChartKind::Pie || self.series.len() > 1 },
                "tooltip": { "mode": "index", "intersect": false }
            }
        });

        if self.kind != ChartKind::Pie {
            options["scales"] = json!({
                "x": { "title": { "display": true, "text": self.x_label } },
                "y": {
                    "beginAtZero": true,
                    "title": { "display": true, "text": self.y_label }
                }
            });
        }

        json!({
            "type": self.kind.chart_js_type(),
            "data": { "labels": self.labels, "datasets": datasets },
            "options": options
        })
    }

    fn dataset_config(&self, series: &ChartSeries) -> Value {
        match self.kind {
            ChartKind::Pie => json!({
                "label": series.label,
                "data": series.data,
                "backgroundColor": palette(self.labels.len()),
                "borderColor": "#ffffff",
                "borderWidth": 2
            }),
            ChartKind::Histogram => json!({
                "label": series.label,
                "data": series.data,
                "backgroundColor": series.color,
                "borderColor": "#ffffff",
                "borderWidth": 1,
                "barPercentage": 1.0,
                "categoryPercentage": 1.0
            }),
            ChartKind::Bar => json!({
                "label": series.label,
                "data": series.data,
                "backgroundColor": series.color
            }),
            ChartKind::Line => json!({
                "label": series.label,
                "data": series.data,
                "borderColor": series.color,
                "backgroundColor": series.color,
                "fill": false,
                "spanGaps": true,
                "tension": 0.1
            }),
            ChartKind::Scatter => json!({
                "label": series.label,
                "data": series.data,
                "borderColor": series.color,
                "backgroundColor": series.color,
                "fill": false,
                "showLine": true,
                "pointRadius": 4
            }),
        }
    }
}

/// `count` colors cycled from the default palette
pub fn palette(count: usize) -> Vec<&'static str> {
    colors::PALETTE.iter().copied().cycle().take(count).collect()
}

/// One equal-width histogram bucket, `[lower, upper)` except the last
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Bin {
    pub fn label(&self) -> String {
        if self.lower == self.upper {
            format_value(self.lower)
        } else {
            format!("{}–{}", format_value(self.lower), format_value(self.upper))
        }
    }
}

/// Split `values` into `bins` equal-width buckets spanning their range.
///
/// Non-finite values are ignored. When every value is equal a single
/// bucket holds them all; empty input gives no buckets.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut buckets: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in finite {
        let idx = (((value - min) / width).floor() as usize).min(bins - 1);
        buckets[idx].count += 1;
    }

    buckets
}

/// Compact number formatting for labels: at most two decimals, no trailing zeros
pub fn format_value(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
