use crate::analysis::HeadlineStats;
use crate::reporting::chart::{ChartSpec, format_value};
use std::fs;
use std::io;
use std::path::Path;

/// Constants for page styling and layout
mod page_constants {
    pub const EMPTY_NOTE: &str = "No data available";
    pub const GENERATOR: &str = "workout-viz";
    pub const CHART_HEIGHT_PX: u32 = 480;
    pub const PANEL_HEIGHT_PX: u32 = 320;
}

/// Page-level settings shared by every generated document
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Chart.js script URL
    pub chart_js_cdn: String,
    /// Timestamp shown in the page header
    pub generated_at: String,
}

/// One cell of the dashboard grid
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Chart(ChartSpec),
    Placeholder { title: String, message: String },
}

/// Error type for page generation
#[derive(Debug)]
pub enum RenderError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::FileWrite(e) => write!(f, "Failed to write chart file: {}", e),
            RenderError::Serialization(e) => write!(f, "Failed to serialize chart data: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::FileWrite(e) => Some(e),
            RenderError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::FileWrite(e)
    }
}

/// HTML page generator for charts and the summary dashboard
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Generate and write a single-chart page to the specified path
    pub fn write_chart(
        spec: &ChartSpec,
        output_path: &Path,
        context: &PageContext,
    ) -> Result<(), RenderError> {
        let html_content = Self::generate_chart_page(spec, context)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate and write the dashboard page to the specified path
    pub fn write_dashboard(
        title: &str,
        headline: &HeadlineStats,
        panels: &[Panel],
        output_path: &Path,
        context: &PageContext,
    ) -> Result<(), RenderError> {
        let html_content = Self::generate_dashboard_page(title, headline, panels, context)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    fn generate_chart_page(spec: &ChartSpec, context: &PageContext) -> Result<String, RenderError> {
        let body = format!(
            r#"
            <div class="container">
                {}
                {}
            </div>
            "#,
            Self::generate_header_section(&spec.title, &context.generated_at, None),
            Self::generate_chart_section(spec, "chart-0", page_constants::CHART_HEIGHT_PX)?
        );

        Ok(Self::generate_html_document(&spec.title, &body, context))
    }

    fn generate_dashboard_page(
        title: &str,
        headline: &HeadlineStats,
        panels: &[Panel],
        context: &PageContext,
    ) -> Result<String, RenderError> {
        let panels_html = panels
            .iter()
            .enumerate()
            .map(|(index, panel)| Self::generate_panel(panel, index))
            .collect::<Result<Vec<_>, _>>()?
            .join("");

        let body = format!(
            r#"
            <div class="container">
                {}
                {}
                <div class="panel-grid">
                    {}
                </div>
            </div>
            "#,
            Self::generate_header_section(
                title,
                &context.generated_at,
                Some(&Self::headline_summary(headline))
            ),
            Self::generate_stats_section(headline),
            panels_html
        );

        Ok(Self::generate_html_document(title, &body, context))
    }

    /// Generate the complete HTML document around a body
    fn generate_html_document(title: &str, body: &str, context: &PageContext) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - {}</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            escape_html(title),
            page_constants::GENERATOR,
            escape_html(&context.chart_js_cdn),
            Self::generate_css(),
            body,
            Self::generate_javascript()
        )
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #2563eb;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 2rem;
            padding: 2rem;
            background: linear-gradient(135deg, var(--primary-color), #3b82f6);
            color: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }

        .header h1 {
            font-size: 2rem;
            margin-bottom: 0.5rem;
            font-weight: 700;
        }

        .header p { opacity: 0.9; }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1.5rem;
            margin-bottom: 2rem;
        }

        .stat-card {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .stat-value {
            font-size: 2rem;
            font-weight: 700;
            margin-bottom: 0.5rem;
            color: var(--primary-color);
        }

        .stat-label {
            color: var(--text-secondary);
            font-size: 0.9rem;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .panel-grid {
            display: grid;
            grid-template-columns: repeat(2, minmax(0, 1fr));
            gap: 1.5rem;
        }

        .chart-container {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .chart-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }

        .chart-canvas { position: relative; }

        .empty-note, .placeholder {
            color: var(--text-secondary);
            text-align: center;
            padding: 1rem;
        }

        .placeholder {
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 200px;
            font-size: 1.1rem;
        }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .panel-grid { grid-template-columns: 1fr; }
            .stats-grid { grid-template-columns: 1fr; }
        }
        "#
    }

    /// Generate the page header section
    fn generate_header_section(title: &str, timestamp: &str, summary: Option<&str>) -> String {
        let summary_html = summary
            .map(|text| format!("<p>{}</p>", escape_html(text)))
            .unwrap_or_default();

        format!(
            r#"
            <div class="header">
                <h1>{}</h1>
                {}
                <p>Generated on {} by {}</p>
            </div>
            "#,
            escape_html(title),
            summary_html,
            escape_html(timestamp),
            page_constants::GENERATOR
        )
    }

    fn headline_summary(headline: &HeadlineStats) -> String {
        format!(
            "Total Workouts: {} | Total Sets: {} | Unique Exercises: {} | Avg Sets/Workout: {:.1}",
            headline.total_workouts,
            headline.total_sets,
            headline.unique_exercises,
            headline.avg_sets_per_workout
        )
    }

    /// Generate the headline statistics cards
    fn generate_stats_section(headline: &HeadlineStats) -> String {
        format!(
            r#"
            <div class="stats-grid">
                {}
                {}
                {}
                {}
                {}
            </div>
            "#,
            Self::generate_stat_card(&headline.total_workouts.to_string(), "Total Workouts"),
            Self::generate_stat_card(&headline.total_sets.to_string(), "Total Sets"),
            Self::generate_stat_card(&headline.unique_exercises.to_string(), "Unique Exercises"),
            Self::generate_stat_card(
                &format!("{:.1}", headline.avg_sets_per_workout),
                "Avg Sets/Workout"
            ),
            Self::generate_stat_card(&format_value(headline.total_volume), "Total Volume"),
        )
    }

    /// Generate a single statistics card
    fn generate_stat_card(value: &str, label: &str) -> String {
        format!(
            r#"
            <div class="stat-card">
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>
            "#,
            escape_html(value),
            escape_html(label)
        )
    }

    fn generate_panel(panel: &Panel, index: usize) -> Result<String, RenderError> {
        match panel {
            Panel::Chart(spec) => Self::generate_chart_section(
                spec,
                &format!("chart-{index}"),
                page_constants::PANEL_HEIGHT_PX,
            ),
            Panel::Placeholder { title, message } => Ok(format!(
                r#"
                <div class="chart-container">
                    <h3 class="chart-title">{}</h3>
                    <div class="placeholder">{}</div>
                </div>
                "#,
                escape_html(title),
                escape_html(message)
            )),
        }
    }

    /// Generate a chart card: canvas plus its embedded Chart.js config
    fn generate_chart_section(
        spec: &ChartSpec,
        canvas_id: &str,
        height_px: u32,
    ) -> Result<String, RenderError> {
        let config_json = serde_json::to_string(&spec.to_chart_js())
            .map_err(|e| RenderError::Serialization(e.to_string()))?;

        let empty_note = if spec.is_empty() {
            format!(r#"<p class="empty-note">{}</p>"#, page_constants::EMPTY_NOTE)
        } else {
            String::new()
        };

        Ok(format!(
            r#"
            <div class="chart-container">
                <h3 class="chart-title">{}</h3>
                {}
                <div class="chart-canvas" style="height: {}px;">
                    <canvas id="{}"></canvas>
                </div>
            </div>

            <script>
                window.chartConfigs = window.chartConfigs || {{}};
                window.chartConfigs["{}"] = {};
            </script>
            "#,
            escape_html(&spec.title),
            empty_note,
            height_px,
            canvas_id,
            canvas_id,
            script_safe_json(&config_json)
        ))
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof Chart === 'undefined' || !window.chartConfigs) {
                return;
            }
            Object.keys(window.chartConfigs).forEach(function(id) {
                const ctx = document.getElementById(id);
                if (ctx) {
                    new Chart(ctx, window.chartConfigs[id]);
                }
            });
        });
        "#
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Make serialized JSON safe to embed in a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes back to it.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::chart::{ChartKind, ChartSeries};
    use std::error::Error;
    use tempfile::TempDir;

    fn create_test_context() -> PageContext {
        PageContext {
            chart_js_cdn: "https://cdn.jsdelivr.net/npm/chart.js".to_string(),
            generated_at: "2025-01-01 12:00:00".to_string(),
        }
    }

    fn create_test_spec() -> ChartSpec {
        ChartSpec::new(ChartKind::Bar, "Top Exercises", "Exercise", "Total Volume")
            .with_labels(vec!["Bench".to_string(), "Squat".to_string()])
            .with_series(ChartSeries::new("Volume", vec![1800.0, 750.0], "#CD5C5C"))
    }

    fn create_test_headline() -> HeadlineStats {
        HeadlineStats {
            total_workouts: 2,
            total_sets: 3,
            unique_exercises: 2,
            total_volume: 2550.0,
            avg_sets_per_workout: 1.5,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Curl" & 'Press'</b>"#),
            "&lt;b&gt;&quot;Curl&quot; &amp; &#39;Press&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Bench Press"), "Bench Press");
    }

    #[test]
    fn test_script_safe_json() {
        let json = r#"{"labels":["</script><script>alert(1)"]}"#;
        let safe = script_safe_json(json);

        assert!(!safe.contains("</script>"));
        assert!(safe.contains("\\u003c/script>"));
        let decoded: serde_json::Value = serde_json::from_str(&safe).unwrap();
        assert_eq!(decoded["labels"][0], "</script><script>alert(1)");
    }

    #[test]
    fn test_generate_chart_page() {
        let html = HtmlRenderer::generate_chart_page(&create_test_spec(), &create_test_context())
            .unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Top Exercises - workout-viz</title>"));
        assert!(html.contains("chart.js"));
        assert!(html.contains(r#"<canvas id="chart-0">"#));
        assert!(html.contains("\"Bench\""));
        assert!(html.contains("2025-01-01 12:00:00"));
        assert!(!html.contains(page_constants::EMPTY_NOTE));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_chart_title_is_drawn_once() {
        let html = HtmlRenderer::generate_chart_page(&create_test_spec(), &create_test_context())
            .unwrap();

        assert_eq!(
            html.matches(r#"<h3 class="chart-title">Top Exercises</h3>"#).count(),
            1
        );
        assert!(!html.contains(r#""text":"Top Exercises""#));
        assert!(html.contains(r#""title":{"display":false}"#));
    }

    #[test]
    fn test_empty_chart_gets_placeholder_note() {
        let spec = ChartSpec::new(ChartKind::Bar, "Empty", "x", "y");
        let html = HtmlRenderer::generate_chart_page(&spec, &create_test_context()).unwrap();

        assert!(html.contains("No data available"));
        assert!(html.contains("<canvas"));
    }

    #[test]
    fn test_exercise_names_are_escaped() {
        let spec = ChartSpec::new(ChartKind::Bar, "<Top>", "x", "y")
            .with_labels(vec!["</script>".to_string()])
            .with_series(ChartSeries::new("v", vec![1.0], "#000"));
        let html = HtmlRenderer::generate_chart_page(&spec, &create_test_context()).unwrap();

        assert!(html.contains("&lt;Top&gt;"));
        assert!(!html.contains("<Top>"));
        assert_eq!(html.matches("</script>").count(), 3);
    }

    #[test]
    fn test_generate_stats_section() {
        let stats = HtmlRenderer::generate_stats_section(&create_test_headline());

        assert!(stats.contains("Total Workouts"));
        assert!(stats.contains("Avg Sets/Workout"));
        assert!(stats.contains("1.5"));
        assert!(stats.contains("2550"));
        assert_eq!(stats.matches("stat-card").count(), 5);
    }

    #[test]
    fn test_headline_summary() {
        assert_eq!(
            HtmlRenderer::headline_summary(&create_test_headline()),
            "Total Workouts: 2 | Total Sets: 3 | Unique Exercises: 2 | Avg Sets/Workout: 1.5"
        );
    }

    #[test]
    fn test_generate_dashboard_page() {
        let panels = vec![
            Panel::Chart(create_test_spec()),
            Panel::Placeholder {
                title: "Sets Over Time".to_string(),
                message: "No date information available".to_string(),
            },
        ];
        let html = HtmlRenderer::generate_dashboard_page(
            "Workout Summary Dashboard",
            &create_test_headline(),
            &panels,
            &create_test_context(),
        )
        .unwrap();

        assert!(html.contains("panel-grid"));
        assert!(html.contains(r#"<canvas id="chart-0">"#));
        assert!(!html.contains(r#"<canvas id="chart-1">"#));
        assert!(html.contains("No date information available"));
        assert!(html.contains("Total Workouts: 2"));
    }

    #[test]
    fn test_generate_css() {
        let css = HtmlRenderer::generate_css();

        assert!(css.contains("body"));
        assert!(css.contains("grid-template-columns: repeat(2"));
    }

    #[test]
    fn test_generate_javascript() {
        let js = HtmlRenderer::generate_javascript();

        assert!(js.contains("new Chart"));
        assert!(js.contains("chartConfigs"));
    }

    #[test]
    fn test_write_chart_file_creation() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("chart.html");

        HtmlRenderer::write_chart(&create_test_spec(), &path, &create_test_context())?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("<!DOCTYPE html>"));
        assert!(content.contains("Top Exercises"));
        Ok(())
    }

    #[test]
    fn test_write_chart_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("chart.html");

        let result = HtmlRenderer::write_chart(&create_test_spec(), &path, &create_test_context());
        assert!(matches!(result, Err(RenderError::FileWrite(_))));
    }

    #[test]
    fn test_render_error_display() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let render_error = RenderError::FileWrite(io_error);
        let display_str = format!("{}", render_error);
        assert!(display_str.contains("Failed to write chart file"));
        assert!(display_str.contains("Permission denied"));

        let serialization_error = RenderError::Serialization("Invalid JSON".to_string());
        assert!(
            serialization_error
                .to_string()
                .contains("Failed to serialize chart data")
        );
    }

    #[test]
    fn test_render_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        assert!(RenderError::FileWrite(io_error).source().is_some());
        assert!(
            RenderError::Serialization("Test".to_string())
                .source()
                .is_none()
        );
    }

    #[test]
    fn test_render_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid input");
        assert!(matches!(
            RenderError::from(io_error),
            RenderError::FileWrite(_)
        ));
    }
}
