//! Terminal template for the `Screen`.

use owo_colors::OwoColorize;

use crate::models::Priority;
use crate::render::screen::Screen;
use crate::render::view::{Field, Notice, NoticeLevel, SkillsView, SuggestionsView, Tier};

const BAR_CELLS: usize = 24;

#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub color: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Draws whichever screen is visible.
pub fn render_screen(screen: &Screen, options: &ConsoleOptions) -> String {
    let mut lines = Vec::new();
    if screen.input_visible {
        input_lines(screen, &mut lines);
    }
    if screen.results_visible {
        results_lines(screen, options, &mut lines);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn input_lines(screen: &Screen, lines: &mut Vec<String>) {
    lines.push("Resume Analyzer".to_string());
    lines.push(format!("  File: {}", screen.form.file_label()));
    let pasted = screen.form.text.trim().chars().count();
    if pasted > 0 {
        lines.push(format!("  Text: {pasted} characters pasted"));
    }
    if screen.loading {
        lines.push("  Analyzing your resume...".to_string());
    }
}

fn results_lines(screen: &Screen, options: &ConsoleOptions, lines: &mut Vec<String>) {
    if let Some(rating) = &screen.rating {
        lines.push(heading("Overall Rating"));
        lines.push(format!(
            "  {}  {}/100  [{}]",
            paint(&bar(rating.fill() * 100.0), rating.tier, options),
            rating.score_text,
            paint(&rating.label, label_tier(&rating.style_tag).unwrap_or(rating.tier), options)
        ));
        lines.push(String::new());
    }

    lines.push(heading("Statistics"));
    for field in Field::ALL {
        lines.push(format!("  {:<14}{}", field.label(), screen.text(field)));
    }
    lines.push(String::new());

    if !screen.score_items.is_empty() {
        lines.push(heading("Score Breakdown"));
        for item in &screen.score_items {
            lines.push(format!(
                "  {} {:<13}{} {:>5}",
                icon_glyph(item.icon),
                item.label,
                paint(&bar(item.bar_width), item.tier, options),
                paint(&item.value_text, item.tier, options)
            ));
        }
        lines.push(String::new());
    }

    lines.push(heading("Skills"));
    match &screen.skills {
        SkillsView::Placeholder(text) => lines.push(format!("  {text}")),
        SkillsView::Tags(tags) => {
            let tags: Vec<_> = tags.iter().map(|t| format!("[{t}]")).collect();
            lines.push(format!("  {}", tags.join(" ")));
        }
    }
    lines.push(String::new());

    lines.push(heading("Resume Sections"));
    for item in &screen.sections {
        let tier = if item.present { Tier::Excellent } else { Tier::Poor };
        lines.push(format!("  {} {}", paint(item.glyph(), tier, options), item.label));
    }
    lines.push(String::new());

    lines.push(heading("Suggestions"));
    match &screen.suggestions {
        SuggestionsView::Placeholder(text) => lines.push(format!("  {text}")),
        SuggestionsView::Items(items) => {
            for item in items {
                lines.push(format!("  * {}", paint_priority(&item.header, item.priority, options)));
                lines.push(format!("    {}", item.message));
            }
        }
    }
}

/// One-line rendering of a notice, prefixed by its level.
pub fn format_notice(notice: &Notice, options: &ConsoleOptions) -> String {
    let prefix = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    if !options.color {
        return format!("{prefix}: {}", notice.message);
    }
    let prefix = match notice.level {
        NoticeLevel::Info => prefix.cyan().to_string(),
        NoticeLevel::Warning => prefix.yellow().to_string(),
        NoticeLevel::Error => prefix.red().to_string(),
    };
    format!("{prefix}: {}", notice.message)
}

/// Known rating labels keep their own colour even when the score disagrees.
fn label_tier(style_tag: &str) -> Option<Tier> {
    match style_tag {
        "excellent" => Some(Tier::Excellent),
        "very-good" | "good" => Some(Tier::Good),
        "fair" => Some(Tier::Fair),
        "needs-improvement" | "poor" => Some(Tier::Poor),
        _ => None,
    }
}

fn icon_glyph(icon: &str) -> char {
    match icon {
        "check-circle" => '✔',
        "tools" => '⚒',
        "briefcase" => '▣',
        "graduation-cap" => '◆',
        "book-reader" => '¶',
        "ruler" => '↔',
        _ => '•',
    }
}

fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(title.chars().count()))
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn paint_priority(text: &str, priority: Priority, options: &ConsoleOptions) -> String {
    if !options.color {
        return text.to_string();
    }
    match priority {
        Priority::High => text.red().to_string(),
        Priority::Medium => text.yellow().to_string(),
        Priority::Low | Priority::Other => text.to_string(),
    }
}

fn paint(text: &str, tier: Tier, options: &ConsoleOptions) -> String {
    if options.color {
        let (r, g, b) = tier.rgb();
        text.truecolor(r, g, b).to_string()
    } else {
        text.to_string()
    }
}
