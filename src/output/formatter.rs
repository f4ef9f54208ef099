//! Output formatters - multiple format support for score reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ResumeReport;
use crate::processing::scorer::{ScoreCategory, Severity};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting resume reports
pub trait ReportFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and section headers
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for tooling integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Score Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #ffc107; color: #000; }
        .score-needs-improvement { background: #fd7e14; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { border-collapse: collapse; width: 100%; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        .feedback { padding: 10px 15px; margin: 8px 0; border-radius: 6px; background: #f8f9fa; }
        .feedback-error { border-left: 4px solid #dc3545; }
        .feedback-warning { border-left: 4px solid #ffc107; }
        .feedback-info { border-left: 4px solid #17a2b8; }
        .metadata {
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Score Report</h1>
            <p>{{ source }}</p>
            <p><span class="score-badge {{ score_class }}">{{ score }}% &middot; {{ category_label }}</span></p>
        </div>

        <div class="section">
            <h2>Score Breakdown</h2>
            <table>
                <tr><th>Rubric</th><th>Earned</th><th>Max</th></tr>
                {% for row in breakdown %}
                <tr><td>{{ row.label }}</td><td>{{ row.earned }}</td><td>{{ row.max }}</td></tr>
                {% endfor %}
            </table>
        </div>

        <div class="section">
            <h2>Critical Issues</h2>
            {% if critical_issues.is_empty() %}
            <p>No critical issues found!</p>
            {% endif %}
            {% for item in critical_issues %}
            <div class="feedback {{ item.severity_class }}">{{ item.message }}</div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Suggested Improvements</h2>
            {% for item in improvements %}
            <div class="feedback {{ item.severity_class }}">{{ item.message }}</div>
            {% endfor %}
        </div>

        {% if !validation_errors.is_empty() %}
        <div class="section">
            <h2>Validation Errors</h2>
            {% for error in validation_errors %}
            <div class="feedback feedback-error"><strong>{{ error.field }}</strong>: {{ error.message }}</div>
            {% endfor %}
        </div>
        {% endif %}

        <div class="metadata">
            Generated by Resume Studio v{{ version }} on {{ generated_at }}
        </div>
    </div>
</body>
</html>"#,
    ext = "html"
)]
struct HtmlReportTemplate {
    include_styles: bool,
    source: String,
    score: u8,
    score_class: String,
    category_label: String,
    breakdown: Vec<HtmlRubricRow>,
    critical_issues: Vec<HtmlFeedbackRow>,
    improvements: Vec<HtmlFeedbackRow>,
    validation_errors: Vec<HtmlValidationRow>,
    version: String,
    generated_at: String,
}

#[derive(Debug, Clone)]
struct HtmlRubricRow {
    label: String,
    earned: u32,
    max: u32,
}

#[derive(Debug, Clone)]
struct HtmlFeedbackRow {
    severity_class: String,
    message: String,
}

#[derive(Debug, Clone)]
struct HtmlValidationRow {
    field: String,
    message: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(category: ScoreCategory) -> Color {
        match category {
            ScoreCategory::Excellent => Color::Green,
            ScoreCategory::Good => Color::Yellow,
            ScoreCategory::NeedsImprovement => Color::BrightYellow,
            ScoreCategory::Poor => Color::Red,
        }
    }

    fn severity_icon(&self, severity: Severity) -> &'static str {
        if self.use_colors {
            match severity {
                Severity::Error => "🚨 ",
                Severity::Warning => "⚠️  ",
                Severity::Info => "💡 ",
            }
        } else {
            match severity {
                Severity::Error => "[!] ",
                Severity::Warning => "[*] ",
                Severity::Info => "[i] ",
            }
        }
    }

    fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Blue,
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS SCORE ANALYSIS", 1));
        output.push_str(&format!(
            "Source: {} | Generated: {}\n",
            report.source,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        let category = report.category();
        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "Score: {} ({})\n",
            self.colorize(
                &format!("{}%", report.analysis.score),
                Self::score_color(category)
            ),
            self.colorize(&category.to_string(), Self::score_color(category))
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for rubric in &report.analysis.breakdown {
            output.push_str(&format!(
                "  {}: {}/{}\n",
                rubric.rubric, rubric.earned, rubric.max
            ));
        }

        output.push_str(&self.format_header("Critical Issues", 3));
        if report.analysis.critical_issues.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("No critical issues found!", Color::Green)
            ));
        } else {
            for issue in &report.analysis.critical_issues {
                output.push_str(&format!(
                    "  {}{}\n",
                    self.severity_icon(issue.severity),
                    self.colorize(&issue.message, Self::severity_color(issue.severity))
                ));
            }
        }

        if !report.analysis.improvements.is_empty() {
            output.push_str(&self.format_header("Suggested Improvements", 3));
            for item in &report.analysis.improvements {
                output.push_str(&format!(
                    "  {}{}\n",
                    self.severity_icon(item.severity),
                    self.colorize(&item.message, Self::severity_color(item.severity))
                ));
            }
        }

        if self.detailed || !report.validation.valid {
            output.push_str(&self.format_header("Validation", 3));
            if report.validation.valid {
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize("All submission rules pass", Color::Green)
                ));
            } else {
                for error in &report.validation.errors {
                    output.push_str(&format!(
                        "  {} {}\n",
                        self.colorize(&error.field, Color::Cyan),
                        error.message
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\nGenerated by Resume Studio v{}\n",
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn severity_label(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "**Error**",
            Severity::Warning => "**Warning**",
            Severity::Info => "*Info*",
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Score Analysis\n\n");
        output.push_str(&format!("**Source:** {}\n\n", report.source));
        output.push_str(&format!(
            "**Overall Score:** {}% — {}\n\n",
            report.analysis.score,
            report.category()
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Rubric | Earned | Max |\n");
        output.push_str("|--------|--------|-----|\n");
        for rubric in &report.analysis.breakdown {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                rubric.rubric, rubric.earned, rubric.max
            ));
        }
        output.push('\n');

        output.push_str("## Critical Issues\n\n");
        if report.analysis.critical_issues.is_empty() {
            output.push_str("No critical issues found!\n");
        } else {
            for issue in &report.analysis.critical_issues {
                output.push_str(&format!(
                    "- {} {}\n",
                    Self::severity_label(issue.severity),
                    issue.message
                ));
            }
        }
        output.push('\n');

        if !report.analysis.improvements.is_empty() {
            output.push_str("## Suggested Improvements\n\n");
            for item in &report.analysis.improvements {
                output.push_str(&format!(
                    "- {} {}\n",
                    Self::severity_label(item.severity),
                    item.message
                ));
            }
            output.push('\n');
        }

        if !report.validation.valid {
            output.push_str("## Validation Errors\n\n");
            for error in &report.validation.errors {
                output.push_str(&format!("- `{}`: {}\n", error.field, error.message));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str(&format!(
                "---\n\nGenerated by Resume Studio v{} on {}\n",
                report.metadata.tool_version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn severity_class(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "feedback-error",
            Severity::Warning => "feedback-warning",
            Severity::Info => "feedback-info",
        }
    }

    fn score_class(category: ScoreCategory) -> &'static str {
        match category {
            ScoreCategory::Excellent => "score-excellent",
            ScoreCategory::Good => "score-good",
            ScoreCategory::NeedsImprovement => "score-needs-improvement",
            ScoreCategory::Poor => "score-poor",
        }
    }

    fn feedback_rows(items: &[crate::processing::scorer::Feedback]) -> Vec<HtmlFeedbackRow> {
        items
            .iter()
            .map(|item| HtmlFeedbackRow {
                severity_class: Self::severity_class(item.severity).to_string(),
                message: item.message.clone(),
            })
            .collect()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let template = HtmlReportTemplate {
            include_styles: self.include_styles,
            source: report.source.clone(),
            score: report.analysis.score,
            score_class: Self::score_class(report.category()).to_string(),
            category_label: report.category().to_string(),
            breakdown: report
                .analysis
                .breakdown
                .iter()
                .map(|rubric| HtmlRubricRow {
                    label: rubric.rubric.to_string(),
                    earned: rubric.earned,
                    max: rubric.max,
                })
                .collect(),
            critical_issues: Self::feedback_rows(&report.analysis.critical_issues),
            improvements: Self::feedback_rows(&report.analysis.improvements),
            validation_errors: report
                .validation
                .errors
                .iter()
                .map(|error| HtmlValidationRow {
                    field: error.field.clone(),
                    message: error.message.clone(),
                })
                .collect(),
            version: report.metadata.tool_version.clone(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        };

        template.render().map_err(|e| {
            crate::error::ResumeStudioError::OutputFormatting(format!(
                "HTML rendering failed: {}",
                e
            ))
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ResumeReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a formatted report to disk, creating parent directories as needed.
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
