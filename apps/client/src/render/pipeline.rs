//! Maps a `ResultDocument` onto view updates.
//!
//! Each `render_*` function is pure and covers one panel of the results
//! screen. Lists are always emitted as whole replacements, so running the
//! pipeline twice over the same document leaves the screen unchanged.

use std::f64::consts::PI;

use tracing::debug;

use crate::models::{ResultDocument, ScoreCategory, SectionKey, Statistics};
use crate::render::view::{
    Field, RatingView, ScoreItem, SectionItem, SkillsView, SuggestionItem, SuggestionsView, Tier,
    ViewUpdate, NO_SKILLS_PLACEHOLDER, NO_SUGGESTIONS_PLACEHOLDER,
};

/// Radius of the overall-score ring.
pub const RING_RADIUS: f64 = 85.0;

/// Renders every panel of the results screen.
pub fn render(doc: &ResultDocument) -> Vec<ViewUpdate> {
    debug!(
        "Rendering result: {} scores, {} skills, {} suggestions",
        doc.scores.len(),
        doc.skills.len(),
        doc.suggestions.len()
    );

    let mut updates = render_statistics(&doc.statistics, doc.skills.len());
    updates.push(ViewUpdate::SetRating(render_overall_rating(
        doc.overall_rating.score,
        &doc.overall_rating.rating,
    )));
    updates.push(ViewUpdate::ReplaceScoreItems(render_score_breakdown(doc)));
    updates.push(ViewUpdate::ReplaceSkills(render_skills(&doc.skills)));
    updates.push(ViewUpdate::ReplaceSections(render_sections(doc)));
    updates.push(ViewUpdate::ReplaceSuggestions(render_suggestions(doc)));
    updates
}

/// The skills count comes from the document, not from rendered tags.
pub fn render_statistics(stats: &Statistics, skills_count: usize) -> Vec<ViewUpdate> {
    let set = |field, value: String| ViewUpdate::SetText { field, value };
    vec![
        set(Field::WordCount, group_thousands(stats.word_count)),
        set(Field::SentenceCount, stats.sentence_count.to_string()),
        set(Field::ReadabilityScore, round_display(stats.readability_score)),
        set(Field::SkillsCount, skills_count.to_string()),
    ]
}

pub fn render_overall_rating(score: f64, rating: &str) -> RatingView {
    let circumference = 2.0 * PI * RING_RADIUS;
    let dash_offset = circumference * (1.0 - clamp_percent(score) / 100.0);
    RatingView {
        score_text: round_display(score),
        label: rating.to_string(),
        style_tag: rating_style_tag(rating),
        circumference,
        dash_offset,
        tier: classify_tier(score),
    }
}

/// Categories missing from `scores` get no row; unknown keys are ignored.
pub fn render_score_breakdown(doc: &ResultDocument) -> Vec<ScoreItem> {
    ScoreCategory::ALL
        .iter()
        .filter_map(|&category| {
            let value = doc.score(category)?;
            Some(ScoreItem {
                label: category.label(),
                icon: category.icon(),
                bar_width: clamp_percent(value),
                tier: classify_tier(value),
                value_text: format!("{}%", round_display(value)),
            })
        })
        .collect()
}

pub fn render_skills(skills: &[String]) -> SkillsView {
    if skills.is_empty() {
        SkillsView::Placeholder(NO_SKILLS_PLACEHOLDER.to_string())
    } else {
        SkillsView::Tags(skills.to_vec())
    }
}

/// One indicator per fixed section. Keys outside the fixed set are skipped.
pub fn render_sections(doc: &ResultDocument) -> Vec<SectionItem> {
    SectionKey::ALL
        .iter()
        .map(|&section| SectionItem {
            label: section.label(),
            present: doc.has_section(section),
        })
        .collect()
}

pub fn render_suggestions(doc: &ResultDocument) -> SuggestionsView {
    if doc.suggestions.is_empty() {
        return SuggestionsView::Placeholder(NO_SUGGESTIONS_PLACEHOLDER.to_string());
    }
    SuggestionsView::Items(
        doc.suggestions
            .iter()
            .map(|s| SuggestionItem {
                priority: s.level(),
                header: format!(
                    "{} - {}",
                    s.kind.to_uppercase(),
                    s.priority.to_uppercase()
                ),
                message: s.message.clone(),
            })
            .collect(),
    )
}

/// Inclusive lower bounds, checked top-down: 80, 60, 40.
pub fn classify_tier(score: f64) -> Tier {
    match score {
        s if s >= 80.0 => Tier::Excellent,
        s if s >= 60.0 => Tier::Good,
        s if s >= 40.0 => Tier::Fair,
        _ => Tier::Poor,
    }
}

/// "Very Good" → "very-good".
pub fn rating_style_tag(rating: &str) -> String {
    rating
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rounds to the nearest integer for display, halves toward +inf, so
/// -12.5 shows as -12. NaN shows as 0.
pub fn round_display(value: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    format!("{}", (value + 0.5).floor() as i64)
}

/// Clamps a percentage into 0 to 100 for bar widths and ring offsets.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_document;
    use crate::models::{Priority, Suggestion};

    #[test]
    fn test_tier_boundaries_are_inclusive_low() {
        assert_eq!(classify_tier(100.0), Tier::Excellent);
        assert_eq!(classify_tier(80.0), Tier::Excellent);
        assert_eq!(classify_tier(79.999), Tier::Good);
        assert_eq!(classify_tier(60.0), Tier::Good);
        assert_eq!(classify_tier(59.999), Tier::Fair);
        assert_eq!(classify_tier(40.0), Tier::Fair);
        assert_eq!(classify_tier(39.999), Tier::Poor);
        assert_eq!(classify_tier(0.0), Tier::Poor);
        assert_eq!(classify_tier(f64::NAN), Tier::Poor);
    }

    #[test]
    fn test_statistics_use_document_skill_count() {
        let doc = sample_document();
        let updates = render_statistics(&doc.statistics, doc.skills.len());
        assert_eq!(
            updates,
            vec![
                ViewUpdate::SetText {
                    field: Field::WordCount,
                    value: "1,234".to_string()
                },
                ViewUpdate::SetText {
                    field: Field::SentenceCount,
                    value: "57".to_string()
                },
                ViewUpdate::SetText {
                    field: Field::ReadabilityScore,
                    value: "62".to_string()
                },
                ViewUpdate::SetText {
                    field: Field::SkillsCount,
                    value: "3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_overall_rating_ring_and_style_tag() {
        let view = render_overall_rating(75.0, "Very Good");
        let circumference = 2.0 * PI * 85.0;
        assert!((view.circumference - circumference).abs() < 1e-9);
        assert!((view.dash_offset - circumference * 0.25).abs() < 1e-9);
        assert_eq!(view.score_text, "75");
        assert_eq!(view.style_tag, "very-good");
        assert!((view.fill() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_overall_rating_clamps_ring_but_not_label() {
        let high = render_overall_rating(130.0, "Excellent");
        assert_eq!(high.dash_offset, 0.0);
        assert_eq!(high.score_text, "130");

        let low = render_overall_rating(-5.0, "Needs Improvement");
        assert!((low.dash_offset - low.circumference).abs() < 1e-9);
        assert_eq!(low.style_tag, "needs-improvement");
    }

    #[test]
    fn test_score_breakdown_fixed_order_and_tiers() {
        let items = render_score_breakdown(&sample_document());
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec![
                "Completeness",
                "Skills",
                "Experience",
                "Education",
                "Readability",
                "Length"
            ]
        );
        assert_eq!(items[0].tier, Tier::Excellent);
        assert_eq!(items[1].value_text, "65%");
        assert_eq!(items[1].bar_width, 65.4);
        assert_eq!(items[2].tier, Tier::Fair);
        assert_eq!(items[2].value_text, "60%");
        assert_eq!(items[4].tier, Tier::Poor);
        assert_eq!(items[4].value_text, "40%");
    }

    #[test]
    fn test_score_breakdown_skips_absent_categories() {
        let mut doc = sample_document();
        doc.scores.remove("education");
        doc.scores.insert("length".to_string(), 140.0);

        let items = render_score_breakdown(&doc);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.label != "Education"));
        let length = items.last().unwrap();
        assert_eq!(length.bar_width, 100.0);
        assert_eq!(length.value_text, "140%");
    }

    #[test]
    fn test_empty_skills_yield_single_placeholder() {
        assert_eq!(
            render_skills(&[]),
            SkillsView::Placeholder(NO_SKILLS_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_skills_rendered_verbatim_in_order() {
        let skills = vec!["Python".to_string(), "SQL".to_string(), "Python".to_string()];
        assert_eq!(render_skills(&skills), SkillsView::Tags(skills.clone()));
        assert_eq!(
            render_skills(&skills[..2]),
            SkillsView::Tags(vec!["Python".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn test_sections_three_present_four_missing() {
        let items = render_sections(&sample_document());
        assert_eq!(items.len(), 7);
        let present: Vec<_> = items.iter().filter(|i| i.present).map(|i| i.label).collect();
        let missing: Vec<_> = items.iter().filter(|i| !i.present).map(|i| i.label).collect();
        assert_eq!(present, vec!["Contact Information", "Work Experience", "Skills"]);
        assert_eq!(
            missing,
            vec!["Summary/Objective", "Education", "Projects", "Certifications"]
        );
    }

    #[test]
    fn test_sections_skip_unknown_keys_and_default_missing() {
        let mut doc = sample_document();
        doc.sections.clear();
        doc.sections.insert("hobbies".to_string(), true);

        let items = render_sections(&doc);
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| !i.present));
    }

    #[test]
    fn test_empty_suggestions_yield_positive_placeholder() {
        let mut doc = sample_document();
        doc.suggestions.clear();
        assert_eq!(
            render_suggestions(&doc),
            SuggestionsView::Placeholder(NO_SUGGESTIONS_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_suggestion_header_and_body() {
        let mut doc = sample_document();
        doc.suggestions = vec![Suggestion {
            kind: "skills".to_string(),
            priority: "High".to_string(),
            message: "Add more keywords".to_string(),
        }];
        match render_suggestions(&doc) {
            SuggestionsView::Items(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].header, "SKILLS - HIGH");
                assert_eq!(items[0].priority, Priority::High);
                assert_eq!(items[0].message, "Add more keywords");
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sample_document();
        assert_eq!(render(&doc), render(&doc));
        assert_eq!(render(&doc).len(), 9);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_round_display_halves_up() {
        assert_eq!(round_display(61.5), "62");
        assert_eq!(round_display(61.49), "61");
        assert_eq!(round_display(f64::NAN), "0");
    }

    #[test]
    fn test_round_display_negative_halves_go_up() {
        assert_eq!(round_display(-12.5), "-12");
        assert_eq!(round_display(-12.51), "-13");
        assert_eq!(round_display(-0.5), "0");
        assert_eq!(round_display(-0.4), "0");
    }
}
