use std::collections::BTreeMap;

use crate::input::InputForm;
use crate::render::view::{
    Field, Notice, RatingView, ScoreItem, ScreenId, ScrollTarget, SectionItem, SkillsView,
    SuggestionsView, ViewUpdate,
};

/// Retained view state: everything a front-end needs to draw both screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub input_visible: bool,
    pub results_visible: bool,
    pub loading: bool,
    pub submit_enabled: bool,
    /// Where a scrolling front-end should bring the view. The console
    /// prints top to bottom and keeps this as state only.
    #[allow(dead_code)]
    pub scroll: ScrollTarget,
    pub form: InputForm,
    pub texts: BTreeMap<Field, String>,
    pub rating: Option<RatingView>,
    pub score_items: Vec<ScoreItem>,
    pub skills: SkillsView,
    pub sections: Vec<SectionItem>,
    pub suggestions: SuggestionsView,
    /// Pending notices, oldest first. Drained by the front-end.
    pub notices: Vec<Notice>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            input_visible: true,
            results_visible: false,
            loading: false,
            submit_enabled: true,
            scroll: ScrollTarget::Top,
            form: InputForm::default(),
            texts: BTreeMap::new(),
            rating: None,
            score_items: Vec::new(),
            skills: SkillsView::default(),
            sections: Vec::new(),
            suggestions: SuggestionsView::default(),
            notices: Vec::new(),
        }
    }
}

impl Screen {
    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::SetText { field, value } => {
                self.texts.insert(field, value);
            }
            ViewUpdate::SetRating(rating) => self.rating = Some(rating),
            ViewUpdate::ReplaceScoreItems(items) => self.score_items = items,
            ViewUpdate::ReplaceSkills(skills) => self.skills = skills,
            ViewUpdate::ReplaceSections(sections) => self.sections = sections,
            ViewUpdate::ReplaceSuggestions(suggestions) => self.suggestions = suggestions,
            ViewUpdate::SetScreenVisible { screen, visible } => match screen {
                ScreenId::Input => self.input_visible = visible,
                ScreenId::Results => self.results_visible = visible,
            },
            ViewUpdate::SetLoading(loading) => self.loading = loading,
            ViewUpdate::SetSubmitEnabled(enabled) => self.submit_enabled = enabled,
            ViewUpdate::ScrollTo(target) => self.scroll = target,
            ViewUpdate::ClearInputs => self.form.clear(),
            ViewUpdate::Notify(notice) => self.notices.push(notice),
        }
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = ViewUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    /// Statistics text for a field, `0` until something was rendered.
    pub fn text(&self, field: Field) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("0")
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
