//! Output formatters: console, JSON, Markdown and HTML renderings of an ATS score

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::processing::score::{ATSScore, IssueSeverity, SuggestionPriority};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a finished analysis
pub trait OutputFormatter {
    fn format_report(&self, score: &ATSScore) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

struct HtmlSectionRow {
    label: &'static str,
    score: u32,
    max: u32,
    percent: u32,
}

struct HtmlSuggestion {
    priority: String,
    title: String,
    description: String,
    impact: String,
}

struct HtmlPenalty {
    name: String,
    points: u32,
    reason: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Resume Score Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 860px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 3px solid {{ band_color }}; }
        .score { font-size: 3em; font-weight: bold; color: {{ band_color }}; }
        .badge { display: inline-block; padding: 6px 14px; border-radius: 20px; color: white; font-weight: bold; background: {{ band_color }}; }
        .section { margin: 25px 0; }
        .section h2 { border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        .bar { background: #e9ecef; border-radius: 4px; height: 10px; width: 100%; }
        .bar-fill { background: {{ band_color }}; border-radius: 4px; height: 10px; }
        table { width: 100%; border-collapse: collapse; }
        td { padding: 6px 4px; vertical-align: middle; }
        .suggestion { background: #f8f9fa; padding: 12px 15px; margin: 10px 0; border-radius: 6px; border-left: 4px solid #3b82f6; }
        .priority-high { border-left-color: #ef4444; }
        .priority-medium { border-left-color: #f59e0b; }
        .priority-low { border-left-color: #22c55e; }
        .penalty { color: #b91c1c; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Resume Score Report</h1>
            <div class="score">{{ overall }}/100</div>
            <span class="badge">{{ band_label }}</span>
        </div>

        <div class="section">
            <h2>Section Breakdown</h2>
            <table>
                {% for row in sections %}
                <tr>
                    <td>{{ row.label }}</td>
                    <td>{{ row.score }}/{{ row.max }}</td>
                    <td style="width: 50%"><div class="bar"><div class="bar-fill" style="width: {{ row.percent }}%"></div></div></td>
                </tr>
                {% endfor %}
            </table>
        </div>

        {% if has_matched %}
        <div class="section">
            <h2>Matched Keywords</h2>
            <p>{{ matched_keywords }}</p>
        </div>
        {% endif %}

        {% if has_missing %}
        <div class="section">
            <h2>Missing Keywords</h2>
            <p>{{ missing_keywords }}</p>
        </div>
        {% endif %}

        {% if has_suggestions %}
        <div class="section">
            <h2>Top Suggestions</h2>
            {% for s in suggestions %}
            <div class="suggestion priority-{{ s.priority }}">
                <strong>{{ loop.index }}. {{ s.title }}</strong> <em>({{ s.impact }})</em>
                <p>{{ s.description }}</p>
            </div>
            {% endfor %}
        </div>
        {% endif %}

        {% if has_penalties %}
        <div class="section">
            <h2>Penalties Applied</h2>
            <ul>
                {% for p in penalties %}
                <li class="penalty"><strong>{{ p.name }}</strong> (-{{ p.points }}pts): {{ p.reason }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Analyzed:</strong> {{ analyzed_at }}</p>
            <p><strong>Resume:</strong> {{ resume_file }} ({{ resume_words }} words) | <strong>Job:</strong> {{ job_title }} ({{ jd_words }} words)</p>
            <p>Generated by ATS Scorer v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    overall: u32,
    band_label: String,
    band_color: String,
    sections: Vec<HtmlSectionRow>,
    has_matched: bool,
    matched_keywords: String,
    has_missing: bool,
    missing_keywords: String,
    has_suggestions: bool,
    suggestions: Vec<HtmlSuggestion>,
    has_penalties: bool,
    penalties: Vec<HtmlPenalty>,
    analyzed_at: String,
    resume_file: String,
    resume_words: usize,
    job_title: String,
    jd_words: usize,
    version: String,
}

fn matched_keyword_list(score: &ATSScore) -> String {
    score
        .matched_keywords
        .iter()
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_keyword_list(score: &ATSScore) -> String {
    score
        .missing_keywords
        .iter()
        .map(|k| format!("{} ({})", k.keyword, k.source))
        .collect::<Vec<_>>()
        .join(", ")
}

fn priority_name(priority: SuggestionPriority) -> &'static str {
    match priority {
        SuggestionPriority::High => "high",
        SuggestionPriority::Medium => "medium",
        SuggestionPriority::Low => "low",
    }
}

/// Parse a `#rrggbb` band colour for terminal output
fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::TrueColor { r, g, b },
        _ => Color::White,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
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

    fn format_score_badge(&self, score: &ATSScore) -> String {
        let info = score.band_info();
        if self.use_colors {
            format!("[{}]", info.label.color(hex_to_color(info.color)).bold())
        } else {
            format!("[{}]", info.label)
        }
    }

    fn format_bar(&self, score: u32, max: u32) -> String {
        const WIDTH: u32 = 20;
        let filled = if max == 0 { 0 } else { (score * WIDTH + max / 2) / max }.min(WIDTH);
        let bar = format!(
            "{}{}",
            "█".repeat(filled as usize),
            "░".repeat((WIDTH - filled) as usize)
        );
        let ratio = if max == 0 { 0.0 } else { score as f64 / max as f64 };
        let color = if ratio >= 0.7 {
            Color::Green
        } else if ratio >= 0.4 {
            Color::Yellow
        } else {
            Color::Red
        };
        self.colorize(&bar, color)
    }

    fn format_priority_icon(&self, priority: SuggestionPriority) -> String {
        if self.use_colors {
            match priority {
                SuggestionPriority::High => "🚨 ".to_string(),
                SuggestionPriority::Medium => "📋 ".to_string(),
                SuggestionPriority::Low => "💡 ".to_string(),
            }
        } else {
            match priority {
                SuggestionPriority::High => "[!] ".to_string(),
                SuggestionPriority::Medium => "[-] ".to_string(),
                SuggestionPriority::Low => "[+] ".to_string(),
            }
        }
    }

    fn format_details(&self, score: &ATSScore, output: &mut String) {
        output.push_str(&self.format_header("Skills Coverage", 3));
        for cluster in &score.skills {
            output.push_str(&format!(
                "{:<5} {:>3}%  matched: {}  missing: {}\n",
                cluster.category,
                cluster.score,
                if cluster.matched.is_empty() { "-".to_string() } else { cluster.matched.join(", ") },
                if cluster.missing.is_empty() { "-".to_string() } else { cluster.missing.join(", ") },
            ));
        }

        if !score.formatting_issues.is_empty() {
            output.push_str(&self.format_header("Formatting Issues", 3));
            for issue in &score.formatting_issues {
                let (tag, color) = match issue.severity {
                    IssueSeverity::Error => ("ERROR", Color::Red),
                    IssueSeverity::Warning => ("WARN", Color::Yellow),
                    IssueSeverity::Info => ("INFO", Color::Cyan),
                };
                output.push_str(&format!(
                    "[{}] {}\n      {}\n",
                    self.colorize(tag, color),
                    issue.message,
                    issue.suggestion
                ));
            }
        }

        if !score.matched_keywords.is_empty() {
            output.push_str(&self.format_header("Keyword Context", 3));
            for keyword in &score.matched_keywords {
                output.push_str(&format!(
                    "\"{}\" ({}x, {}): {}\n",
                    self.colorize(&keyword.keyword, Color::Green),
                    keyword.count,
                    keyword.source,
                    keyword.context
                ));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, score: &ATSScore) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS RESUME SCORE REPORT", 1));
        output.push_str(&format!("Analyzed: {}\n", score.metadata.analyzed_at));
        if let Some(file) = &score.metadata.resume_file_name {
            output.push_str(&format!("Resume: {}\n", file));
        }
        if let Some(title) = &score.metadata.job_title {
            output.push_str(&format!("Job: {}\n", title));
        }

        output.push_str(&format!(
            "\nOverall Score: {}/100 — {} {}\n",
            score.overall,
            score.band.to_string().to_uppercase(),
            self.format_score_badge(score)
        ));

        output.push_str(&self.format_header("Section Breakdown", 2));
        for (label, value, max) in score.sections.rows() {
            output.push_str(&format!(
                "{:<18} {} {:>2}/{}\n",
                label,
                self.format_bar(value, max),
                value,
                max
            ));
        }

        if !score.matched_keywords.is_empty() {
            output.push_str(&self.format_header("Matched Keywords", 2));
            output.push_str(&self.colorize(&matched_keyword_list(score), Color::Green));
            output.push('\n');
        }

        if !score.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 2));
            output.push_str(&self.colorize(&missing_keyword_list(score), Color::Red));
            output.push('\n');
        }

        if !score.suggestions.is_empty() {
            output.push_str(&self.format_header("Top Suggestions", 2));
            for (i, suggestion) in score.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}{}. {}: {} {}\n",
                    self.format_priority_icon(suggestion.priority),
                    i + 1,
                    suggestion.title,
                    suggestion.description,
                    self.colorize(&format!("({})", suggestion.impact), Color::Cyan)
                ));
            }
        }

        if !score.penalties.is_empty() {
            output.push_str(&self.format_header("Penalties Applied", 2));
            for penalty in &score.penalties {
                output.push_str(&format!(
                    "• {} {}: {}\n",
                    penalty.name,
                    self.colorize(&format!("(-{}pts)", penalty.points), Color::Red),
                    penalty.reason
                ));
            }
        }

        if self.detailed {
            self.format_details(score, &mut output);
        }

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

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, score: &ATSScore) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(score)?)
        } else {
            Ok(serde_json::to_string(score)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, score: &ATSScore) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Resume Score Report\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}/100 — {} ({})\n\n",
            score.overall,
            score.band.to_string().to_uppercase(),
            score.band_info().label
        ));

        if self.include_metadata {
            output.push_str(&format!("**Analyzed:** {}\n", score.metadata.analyzed_at));
            if let Some(file) = &score.metadata.resume_file_name {
                output.push_str(&format!("**Resume:** `{}` ({} words)\n", file, score.metadata.resume_word_count));
            }
            if let Some(title) = &score.metadata.job_title {
                output.push_str(&format!("**Job:** {} ({} words)\n", title, score.metadata.jd_word_count));
            }
            output.push('\n');
        }

        output.push_str("## Section Breakdown\n\n");
        output.push_str("| Section | Score | Max |\n");
        output.push_str("|---------|-------|-----|\n");
        for (label, value, max) in score.sections.rows() {
            output.push_str(&format!("| {} | {} | {} |\n", label, value, max));
        }
        output.push('\n');

        if !score.matched_keywords.is_empty() {
            output.push_str("## Matched Keywords\n\n");
            output.push_str(&matched_keyword_list(score));
            output.push_str("\n\n");
        }

        if !score.missing_keywords.is_empty() {
            output.push_str("## Missing Keywords\n\n");
            output.push_str(&missing_keyword_list(score));
            output.push_str("\n\n");
        }

        if !score.suggestions.is_empty() {
            output.push_str("## Top Suggestions\n\n");
            for (i, suggestion) in score.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. **{}**: {} _({})_\n",
                    i + 1,
                    suggestion.title,
                    suggestion.description,
                    suggestion.impact
                ));
            }
            output.push('\n');
        }

        if !score.penalties.is_empty() {
            output.push_str("## Penalties Applied\n\n");
            for penalty in &score.penalties {
                output.push_str(&format!("- **{}** (-{}pts): {}\n", penalty.name, penalty.points, penalty.reason));
            }
            output.push('\n');
        }

        if !score.skills.is_empty() {
            output.push_str("## Skills Coverage\n\n");
            output.push_str("| Category | Score | Matched | Missing |\n");
            output.push_str("|----------|-------|---------|---------|\n");
            for cluster in &score.skills {
                output.push_str(&format!(
                    "| {} | {}% | {} | {} |\n",
                    cluster.category,
                    cluster.score,
                    cluster.matched.join(", "),
                    cluster.missing.join(", ")
                ));
            }
            output.push('\n');
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

    fn create_template_data(&self, score: &ATSScore) -> HtmlTemplate {
        let info = score.band_info();

        let sections = score
            .sections
            .rows()
            .into_iter()
            .map(|(label, value, max)| HtmlSectionRow {
                label,
                score: value,
                max,
                percent: if max == 0 { 0 } else { value * 100 / max },
            })
            .collect();

        let suggestions = score
            .suggestions
            .iter()
            .map(|s| HtmlSuggestion {
                priority: priority_name(s.priority).to_string(),
                title: s.title.clone(),
                description: s.description.clone(),
                impact: s.impact.clone(),
            })
            .collect();

        let penalties = score
            .penalties
            .iter()
            .map(|p| HtmlPenalty {
                name: p.name.clone(),
                points: p.points,
                reason: p.reason.clone(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            overall: score.overall,
            band_label: info.label.to_string(),
            band_color: info.color.to_string(),
            sections,
            has_matched: !score.matched_keywords.is_empty(),
            matched_keywords: matched_keyword_list(score),
            has_missing: !score.missing_keywords.is_empty(),
            missing_keywords: missing_keyword_list(score),
            has_suggestions: !score.suggestions.is_empty(),
            suggestions,
            has_penalties: !score.penalties.is_empty(),
            penalties,
            analyzed_at: score.metadata.analyzed_at.clone(),
            resume_file: score
                .metadata
                .resume_file_name
                .clone()
                .unwrap_or_else(|| "(pasted text)".to_string()),
            resume_words: score.metadata.resume_word_count,
            job_title: score
                .metadata
                .job_title
                .clone()
                .unwrap_or_else(|| "(untitled)".to_string()),
            jd_words: score.metadata.jd_word_count,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, score: &ATSScore) -> Result<String> {
        self.create_template_data(score)
            .render()
            .map_err(|e| AtsError::OutputFormatting(format!("Failed to render HTML template: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, score: &ATSScore, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(score),
            OutputFormat::Json => self.json_formatter.format_report(score),
            OutputFormat::Markdown => self.markdown_formatter.format_report(score),
            OutputFormat::Html => self.html_formatter.format_report(score),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// `<resume stem>-ats-report-<overall>.<ext>`, or without the stem for pasted text
pub fn suggest_filename(format: OutputFormat, resume_name: Option<&str>, overall: u32) -> String {
    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    let stem = resume_name
        .and_then(|name| Path::new(name).file_stem())
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty());

    match stem {
        Some(stem) => format!("{}-ats-report-{}.{}", stem, overall, extension),
        None => format!("ats-report-{}.{}", overall, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ATSAnalyzer;

    const RESUME: &str = "John Doe\njohn@example.com\n\nEXPERIENCE\nSoftware Engineer at Acme\n• Built systems\n\nEDUCATION\nBS Computer Science, 2020\n\nSKILLS\nPython, SQL";
    const JOB: &str = "Senior Engineer\nRequirements:\n- Python\n- SQL\nPreferred:\n- AWS";

    fn sample_score() -> ATSScore {
        ATSAnalyzer::new().unwrap().analyze(RESUME, JOB, Some("john_doe.pdf"))
    }

    #[test]
    fn test_console_report_plain() {
        let score = sample_score();
        let report = ConsoleFormatter::new(false, false).format_report(&score).unwrap();

        assert!(report.contains(&format!("Overall Score: {}/100", score.overall)));
        assert!(report.contains("Keyword Relevance"));
        assert!(report.contains("aws (preferred)"));
        assert!(report.contains("Penalties Applied"));
        assert!(!report.contains("Skills Coverage"));
    }

    #[test]
    fn test_console_detailed_adds_sections() {
        let report = ConsoleFormatter::new(false, true).format_report(&sample_score()).unwrap();
        assert!(report.contains("Skills Coverage"));
        assert!(report.contains("Formatting Issues"));
        assert!(report.contains("Keyword Context"));
    }

    #[test]
    fn test_markdown_report() {
        let score = sample_score();
        let report = MarkdownFormatter::new(true).format_report(&score).unwrap();

        assert!(report.starts_with("# ATS Resume Score Report"));
        assert!(report.contains("| Keyword Relevance | "));
        assert!(report.contains("| Bonus | "));
        assert!(report.contains("**Resume:** `john_doe.pdf`"));
        assert!(report.contains("1. **"));
        assert!(report.contains("pts): "));
    }

    #[test]
    fn test_json_report_roundtrips() {
        let score = sample_score();
        let json = JsonFormatter::new(true).format_report(&score).unwrap();
        let parsed: ATSScore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, score);
    }

    #[test]
    fn test_html_report_escapes_content() {
        let mut score = sample_score();
        score.metadata.job_title = Some("<script>alert(1)</script>".to_string());
        let html = HtmlFormatter::new(true).format_report(&score).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(&format!("{}/100", score.overall)));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains(score.band_info().color));
    }

    #[test]
    fn test_report_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, false, false, false);
        let score = sample_score();

        let json = generator.generate_report(&score, OutputFormat::Json).unwrap();
        assert!(!json.contains('\n'));
        let markdown = generator.generate_report(&score, OutputFormat::Markdown).unwrap();
        assert!(!markdown.contains("**Analyzed:**"));
        let html = generator.generate_report(&score, OutputFormat::Html).unwrap();
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Markdown, Some("cv/jane.pdf"), 72), "jane-ats-report-72.md");
        assert_eq!(suggest_filename(OutputFormat::Json, None, 5), "ats-report-5.json");
        assert_eq!(suggest_filename(OutputFormat::Console, Some(""), 0), "ats-report-0.txt");
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#22c55e"), Color::TrueColor { r: 0x22, g: 0xc5, b: 0x5e });
        assert_eq!(hex_to_color("nope"), Color::White);
    }
}
