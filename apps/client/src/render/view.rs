//! View updates and the typed view models they carry.
//!
//! The render pipeline and the view controller only ever describe changes as
//! `ViewUpdate` commands; a `Screen` applies them and a template draws the
//! screen. Nothing here knows about a concrete UI toolkit.

use crate::models::Priority;

pub const NO_SKILLS_PLACEHOLDER: &str = "No skills detected";
pub const NO_SUGGESTIONS_PLACEHOLDER: &str = "Great job! Your resume looks excellent.";

/// Text fields of the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    WordCount,
    SentenceCount,
    ReadabilityScore,
    SkillsCount,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::WordCount,
        Field::SentenceCount,
        Field::ReadabilityScore,
        Field::SkillsCount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::WordCount => "Words",
            Field::SentenceCount => "Sentences",
            Field::ReadabilityScore => "Readability",
            Field::SkillsCount => "Skills Found",
        }
    }
}

/// Four-bucket score tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Tier {
    /// Tier colour as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tier::Excellent => (0x10, 0xb9, 0x81),
            Tier::Good => (0x63, 0x66, 0xf1),
            Tier::Fair => (0xf5, 0x9e, 0x0b),
            Tier::Poor => (0xef, 0x44, 0x44),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingView {
    /// Rounded overall score.
    pub score_text: String,
    pub label: String,
    /// Lower-cased label with whitespace replaced by `-`.
    pub style_tag: String,
    pub circumference: f64,
    pub dash_offset: f64,
    pub tier: Tier,
}

impl RatingView {
    /// Fraction of the ring that is filled, 0.0 to 1.0.
    pub fn fill(&self) -> f64 {
        if self.circumference > 0.0 {
            1.0 - self.dash_offset / self.circumference
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreItem {
    pub label: &'static str,
    /// Icon name from the fixed category set, e.g. `briefcase`.
    pub icon: &'static str,
    /// Bar width in percent, clamped to 0 to 100 but not rounded.
    pub bar_width: f64,
    pub tier: Tier,
    /// Rounded value followed by `%`.
    pub value_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkillsView {
    Placeholder(String),
    Tags(Vec<String>),
}

impl Default for SkillsView {
    fn default() -> Self {
        SkillsView::Tags(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionItem {
    pub label: &'static str,
    pub present: bool,
}

impl SectionItem {
    pub fn glyph(&self) -> &'static str {
        if self.present {
            "✓"
        } else {
            "✗"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    pub priority: Priority,
    /// `TYPE - PRIORITY`, both upper-cased.
    pub header: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionsView {
    Placeholder(String),
    Items(Vec<SuggestionItem>),
}

impl Default for SuggestionsView {
    fn default() -> Self {
        SuggestionsView::Items(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Input,
    Results,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollTarget {
    #[default]
    Top,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-facing message (the terminal stand-in for an alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A single change to the visible state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    SetText { field: Field, value: String },
    SetRating(RatingView),
    ReplaceScoreItems(Vec<ScoreItem>),
    ReplaceSkills(SkillsView),
    ReplaceSections(Vec<SectionItem>),
    ReplaceSuggestions(SuggestionsView),
    SetScreenVisible { screen: ScreenId, visible: bool },
    SetLoading(bool),
    SetSubmitEnabled(bool),
    ScrollTo(ScrollTarget),
    ClearInputs,
    Notify(Notice),
}
