//! Renders a `ResultDocument` as a standalone text report.
//!
//! The output depends only on the document and the generation time passed in.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::models::{Entities, ResultDocument, ScoreCategory, SectionKey};
use crate::render::pipeline::{group_thousands, round_display};

pub const NO_DATA_PLACEHOLDER: &str = "No analysis data available.";
pub const REPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

const TITLE: &str = "AI RESUME ANALYSIS REPORT";
const BANNER_WIDTH: usize = 62;
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Builds the full report. `None` yields the no-data placeholder.
pub fn generate_report<Tz>(doc: Option<&ResultDocument>, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(doc) = doc else {
        return NO_DATA_PLACEHOLDER.to_string();
    };

    let mut lines = Vec::new();
    lines.push(format!("╔{}╗", "═".repeat(BANNER_WIDTH)));
    lines.push(format!("║{TITLE:^BANNER_WIDTH$}║"));
    lines.push(format!("╚{}╝", "═".repeat(BANNER_WIDTH)));
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    lines.push(rule());

    section(&mut lines, "OVERALL RATING");
    lines.push(format!("Score: {}/100", round_display(doc.overall_rating.score)));
    lines.push(format!("Rating: {}", doc.overall_rating.rating));

    let stats = &doc.statistics;
    section(&mut lines, "STATISTICS");
    lines.push(format!("{:<19}{}", "Word Count:", group_thousands(stats.word_count)));
    lines.push(format!("{:<19}{}", "Character Count:", group_thousands(stats.char_count)));
    lines.push(format!("{:<19}{}", "Sentence Count:", stats.sentence_count));
    lines.push(format!(
        "{:<19}{}/100",
        "Readability Score:",
        round_display(stats.readability_score)
    ));

    section(&mut lines, "SCORE BREAKDOWN");
    for category in ScoreCategory::ALL {
        let value = doc
            .score(category)
            .map(|v| format!("{}%", round_display(v)))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("{:<19}{}", format!("{}:", category.label()), value));
    }

    section(&mut lines, "RESUME SECTIONS");
    for key in SectionKey::ALL {
        let status = if doc.has_section(key) {
            "✓ Present"
        } else {
            "✗ Missing"
        };
        lines.push(format!("{:<25}{}", format!("{}:", key.label()), status));
    }

    section(&mut lines, "DETECTED SKILLS");
    if doc.skills.is_empty() {
        lines.push("No skills detected.".to_string());
    } else {
        for (i, skill) in doc.skills.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, skill));
        }
    }

    section(&mut lines, "IMPROVEMENT SUGGESTIONS");
    if doc.suggestions.is_empty() {
        lines.push("Great job! Your resume looks excellent.".to_string());
    } else {
        for (i, suggestion) in doc.suggestions.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!(
                "{}. [{}] {}",
                i + 1,
                suggestion.priority.to_uppercase(),
                suggestion.kind.to_uppercase()
            ));
            lines.push(format!("   {}", suggestion.message));
        }
    }

    if let Some(entities) = &doc.entities {
        section(&mut lines, "DETECTED ENTITIES");
        entity_lines(entities, &mut lines);
    }

    lines.push(String::new());
    lines.push(rule());
    lines.push("Report generated by AI Resume Analyzer".to_string());
    lines.push("Powered by NLP & Machine Learning".to_string());
    lines.push(rule());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Phone numbers are reported as a count only.
fn entity_lines(entities: &Entities, lines: &mut Vec<String>) {
    if !entities.emails.is_empty() {
        lines.push(format!("Emails: {}", entities.emails.join(", ")));
    }
    if !entities.phones.is_empty() {
        lines.push(format!("Phone Numbers: {} found", entities.phones.len()));
    }
    if !entities.urls.is_empty() {
        lines.push(format!("URLs: {}", entities.urls.join(", ")));
    }
    if !entities.organizations.is_empty() {
        lines.push(format!(
            "Organizations: {}",
            entities.organizations.join(", ")
        ));
    }
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push(rule());
}

fn rule() -> String {
    "━".repeat(60)
}

pub fn report_file_name(epoch_millis: i64) -> String {
    format!("resume-analysis-report-{epoch_millis}.txt")
}

/// A generated report ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportedReport {
    pub fn new<Tz>(doc: &ResultDocument, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            file_name: report_file_name(now.timestamp_millis()),
            mime_type: REPORT_MIME_TYPE,
            contents: generate_report(Some(doc), now),
        }
    }

    /// Writes the report into `dir`, creating it if needed.
    pub async fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, self.contents.as_bytes()).await?;
        info!("Report written to {} ({})", path.display(), self.mime_type);
        Ok(path)
    }
}
