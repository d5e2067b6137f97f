//! Drives capture → request → store → render and owns the
//! only mutable state of the client: the result store and the screen.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::errors::ClientError;
use crate::gateway::{AnalysisError, AnalysisGateway};
use crate::input::{CapturedInput, InputForm};
use crate::models::ResultDocument;
use crate::render::{self, Notice, Screen, ScreenId, ScrollTarget, ViewUpdate};
use crate::report::ExportedReport;
use crate::store::ResultStore;

/// A captured submission waiting to be sent.
pub struct PendingAnalysis {
    gateway: Arc<dyn AnalysisGateway>,
    input: CapturedInput,
}

impl std::fmt::Debug for PendingAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAnalysis")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl PendingAnalysis {
    pub async fn run(self) -> Result<ResultDocument, AnalysisError> {
        self.gateway.analyze(&self.input).await
    }
}

pub struct ViewController {
    gateway: Arc<dyn AnalysisGateway>,
    store: ResultStore,
    screen: Screen,
}

impl ViewController {
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            gateway,
            store: ResultStore::default(),
            screen: Screen::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.screen.form
    }

    pub fn current(&self) -> Option<Arc<ResultDocument>> {
        self.store.get()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.screen.take_notices()
    }

    /// First half of a submission: captures the form and enters the loading
    /// state. Empty input is rejected without contacting the service, and so
    /// is a second submission while one is pending.
    ///
    /// Draw the screen, run the returned request, then hand its outcome to
    /// `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<PendingAnalysis, ClientError> {
        if !self.screen.submit_enabled {
            return Err(self.fail(ClientError::Busy));
        }
        let input = self.screen.form.capture();
        if input.is_empty() {
            return Err(self.fail(ClientError::EmptyInput));
        }

        self.screen.apply_all([
            ViewUpdate::SetLoading(true),
            ViewUpdate::SetSubmitEnabled(false),
        ]);
        Ok(PendingAnalysis {
            gateway: Arc::clone(&self.gateway),
            input,
        })
    }

    /// Second half of a submission: shows the result or restores the input
    /// screen and surfaces the error.
    pub fn finish_submit(
        &mut self,
        outcome: Result<ResultDocument, AnalysisError>,
    ) -> Result<(), ClientError> {
        match outcome {
            Ok(doc) => {
                info!(
                    "Analysis complete: {} ({})",
                    doc.overall_rating.score, doc.overall_rating.rating
                );
                self.show_result(doc);
                Ok(())
            }
            Err(e) => {
                self.screen.apply_all([
                    ViewUpdate::SetLoading(false),
                    ViewUpdate::SetSubmitEnabled(true),
                ]);
                Err(self.fail(e.into()))
            }
        }
    }

    /// Displays a result obtained elsewhere, e.g. a saved JSON document.
    pub fn load_result(&mut self, doc: ResultDocument) {
        self.show_result(doc);
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.screen.apply_all([
            ViewUpdate::SetScreenVisible {
                screen: ScreenId::Input,
                visible: true,
            },
            ViewUpdate::SetScreenVisible {
                screen: ScreenId::Results,
                visible: false,
            },
            ViewUpdate::ClearInputs,
            ViewUpdate::ScrollTo(ScrollTarget::Top),
        ]);
    }

    /// Builds the downloadable report for the stored result.
    pub fn export<Tz>(&mut self, now: &DateTime<Tz>) -> Result<ExportedReport, ClientError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(doc) = self.store.get() else {
            return Err(self.fail(ClientError::NoAnalysisData));
        };
        let report = ExportedReport::new(&doc, now);
        self.screen.apply(ViewUpdate::Notify(Notice::info(format!(
            "Report ready: {}",
            report.file_name
        ))));
        Ok(report)
    }

    fn show_result(&mut self, doc: ResultDocument) {
        let doc = self.store.set(doc);
        self.screen.apply_all([
            ViewUpdate::SetLoading(false),
            ViewUpdate::SetSubmitEnabled(true),
            ViewUpdate::SetScreenVisible {
                screen: ScreenId::Input,
                visible: false,
            },
            ViewUpdate::SetScreenVisible {
                screen: ScreenId::Results,
                visible: true,
            },
            ViewUpdate::ScrollTo(ScrollTarget::Results),
        ]);
        self.screen.apply_all(render::render(&doc));
    }

    /// Surfaces an error to the user and hands it back to the caller.
    fn fail(&mut self, error: ClientError) -> ClientError {
        self.screen.apply(ViewUpdate::Notify(error.notice()));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::FakeGateway;
    use crate::input::FileInput;
    use crate::models::fixtures::sample_document;
    use crate::render::{NoticeLevel, SkillsView};
    use chrono::Utc;

    async fn submit(controller: &mut ViewController) -> Result<(), ClientError> {
        let pending = controller.begin_submit()?;
        let outcome = pending.run().await;
        controller.finish_submit(outcome)
    }

    #[tokio::test]
    async fn test_empty_submission_never_calls_gateway() {
        let gateway = FakeGateway::new(Ok(sample_document()));
        let mut controller = ViewController::new(gateway.clone());
        controller.form_mut().text = "   \n\t".to_string();
        controller.form_mut().file = Some(FileInput::new("empty.pdf", Vec::new()));

        let err = submit(&mut controller).await.unwrap_err();

        assert!(matches!(err, ClientError::EmptyInput));
        assert!(gateway.calls().is_empty());
        assert!(controller.screen().input_visible);
        assert!(controller.screen().submit_enabled);
        assert_eq!(
            controller.take_notices(),
            vec![Notice::warning("Please upload a file or paste resume text")]
        );
    }

    #[tokio::test]
    async fn test_successful_submission_shows_results() {
        let gateway = FakeGateway::new(Ok(sample_document()));
        let mut controller = ViewController::new(gateway.clone());
        controller.form_mut().text = "  Jane Doe, Rust engineer  ".to_string();

        submit(&mut controller).await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![CapturedInput::Text("Jane Doe, Rust engineer".to_string())]
        );
        let screen = controller.screen();
        assert!(!screen.input_visible);
        assert!(screen.results_visible);
        assert!(!screen.loading);
        assert!(screen.submit_enabled);
        assert_eq!(screen.scroll, ScrollTarget::Results);
        assert_eq!(screen.skills, SkillsView::Tags(sample_document().skills));
        assert!(controller.current().is_some());
    }

    #[tokio::test]
    async fn test_failed_submission_restores_input_screen() {
        let gateway = FakeGateway::new(Err(AnalysisError::new("Unsupported file type")));
        let mut controller = ViewController::new(gateway.clone());
        controller.form_mut().file = Some(FileInput::new("cv.exe", vec![1, 2, 3]));

        let err = submit(&mut controller).await.unwrap_err();

        assert!(matches!(err, ClientError::Analysis(_)));
        let screen = controller.screen();
        assert!(screen.input_visible);
        assert!(!screen.results_visible);
        assert!(!screen.loading);
        assert!(screen.submit_enabled);
        assert!(controller.current().is_none());
        let notices = controller.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Error analyzing resume: Unsupported file type");
    }

    #[test]
    fn test_begin_submit_enters_loading_before_any_request() {
        let gateway = FakeGateway::new(Ok(sample_document()));
        let mut controller = ViewController::new(gateway.clone());
        controller.form_mut().text = "resume".to_string();

        let _pending = controller.begin_submit().unwrap();

        assert!(gateway.calls().is_empty());
        assert!(controller.screen().loading);
        assert!(!controller.screen().submit_enabled);
        assert!(controller.screen().input_visible);
    }

    #[test]
    fn test_second_submission_while_pending_is_rejected() {
        let gateway = FakeGateway::new(Ok(sample_document()));
        let mut controller = ViewController::new(gateway);
        controller.form_mut().text = "resume".to_string();
        let _pending = controller.begin_submit().unwrap();

        let err = controller.begin_submit().unwrap_err();

        assert!(matches!(err, ClientError::Busy));
        assert!(controller.screen().loading);
        assert_eq!(controller.take_notices()[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_reset_clears_store_and_inputs() {
        let gateway = FakeGateway::new(Ok(sample_document()));
        let mut controller = ViewController::new(gateway);
        controller.form_mut().text = "resume".to_string();
        submit(&mut controller).await.unwrap();

        controller.reset();

        let screen = controller.screen();
        assert!(screen.input_visible);
        assert!(!screen.results_visible);
        assert!(screen.form.text.is_empty());
        assert!(screen.form.file.is_none());
        assert_eq!(screen.scroll, ScrollTarget::Top);
        assert!(controller.current().is_none());
    }

    #[test]
    fn test_export_without_data_warns() {
        let mut controller = ViewController::new(FakeGateway::new(Ok(sample_document())));

        let err = controller.export(&Utc::now()).unwrap_err();

        assert!(matches!(err, ClientError::NoAnalysisData));
        assert_eq!(controller.take_notices()[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_export_after_load_result() {
        let mut controller = ViewController::new(FakeGateway::new(Ok(sample_document())));
        controller.load_result(sample_document());

        let now = Utc::now();
        let report = controller.export(&now).unwrap();

        assert_eq!(
            report.file_name,
            format!("resume-analysis-report-{}.txt", now.timestamp_millis())
        );
        assert!(report.contents.contains("AI RESUME ANALYSIS REPORT"));
        assert!(controller.screen().results_visible);
    }

    #[test]
    fn test_load_result_twice_is_idempotent() {
        let mut controller = ViewController::new(FakeGateway::new(Ok(sample_document())));
        controller.load_result(sample_document());
        let first = controller.screen().clone();
        controller.load_result(sample_document());

        assert_eq!(controller.screen(), &first);
    }
}
