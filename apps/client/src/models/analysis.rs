use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The analysis result returned by the analysis service.
///
/// Both endpoints answer with this shape. Fields the client does not display
/// (e.g. `education`, `experience`) are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub statistics: Statistics,
    pub overall_rating: OverallRating,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sections: BTreeMap<String, bool>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,
}

impl ResultDocument {
    /// Score for a fixed category, if the service reported one.
    pub fn score(&self, category: ScoreCategory) -> Option<f64> {
        self.scores.get(category.key()).copied()
    }

    /// A section the service did not report counts as missing.
    pub fn has_section(&self, section: SectionKey) -> bool {
        self.sections.get(section.key()).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub word_count: u64,
    pub char_count: u64,
    pub sentence_count: u64,
    pub readability_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRating {
    pub score: f64,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    /// Kept exactly as the service sent it.
    pub priority: String,
    pub message: String,
}

impl Suggestion {
    pub fn level(&self) -> Priority {
        Priority::parse(&self.priority)
    }
}

/// Suggestion severity, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Other,
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed display sets
// ────────────────────────────────────────────────────────────────────────────

/// Score categories shown in the breakdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    Completeness,
    Skills,
    Experience,
    Education,
    Readability,
    Length,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 6] = [
        ScoreCategory::Completeness,
        ScoreCategory::Skills,
        ScoreCategory::Experience,
        ScoreCategory::Education,
        ScoreCategory::Readability,
        ScoreCategory::Length,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScoreCategory::Completeness => "completeness",
            ScoreCategory::Skills => "skills",
            ScoreCategory::Experience => "experience",
            ScoreCategory::Education => "education",
            ScoreCategory::Readability => "readability",
            ScoreCategory::Length => "length",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Completeness => "Completeness",
            ScoreCategory::Skills => "Skills",
            ScoreCategory::Experience => "Experience",
            ScoreCategory::Education => "Education",
            ScoreCategory::Readability => "Readability",
            ScoreCategory::Length => "Length",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScoreCategory::Completeness => "check-circle",
            ScoreCategory::Skills => "tools",
            ScoreCategory::Experience => "briefcase",
            ScoreCategory::Education => "graduation-cap",
            ScoreCategory::Readability => "book-reader",
            ScoreCategory::Length => "ruler",
        }
    }
}

/// Resume sections checked for presence, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Contact,
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Certifications,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SectionKey::Contact => "contact",
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Contact => "Contact Information",
            SectionKey::Summary => "Summary/Objective",
            SectionKey::Experience => "Work Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
            SectionKey::Certifications => "Certifications",
        }
    }
}
