//! Command handlers for the terminal front-end.
//!
//! Each handler drives a `ViewController` and prints its screen to the output
//! sink (stdout in the binary) and its notices to stderr. They return `false`
//! when the user should see a non-zero exit status.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::{debug, warn};

use crate::controller::ViewController;
use crate::errors::ClientError;
use crate::input::FileInput;
use crate::models::ResultDocument;
use crate::render::console::{format_notice, render_screen, ConsoleOptions};

const SESSION_HELP: &str = "\
Commands:
  file <path>   choose a resume file
  text <line>   append a line of resume text
  analyze       submit the current input
  export        save a text report of the current result
  reset         clear the result and the input
  show          redraw the screen
  quit          leave the session";

pub struct Frontend<W = io::Stdout> {
    pub controller: ViewController,
    pub export_dir: PathBuf,
    pub options: ConsoleOptions,
    out: W,
}

impl Frontend {
    pub fn new(controller: ViewController, export_dir: PathBuf, options: ConsoleOptions) -> Self {
        Self::with_output(controller, export_dir, options, io::stdout())
    }

    /// Interactive session over stdin.
    pub async fn session(&mut self) -> Result<bool> {
        self.run_session(BufReader::new(tokio::io::stdin())).await
    }
}

impl<W: Write> Frontend<W> {
    pub fn with_output(
        controller: ViewController,
        export_dir: PathBuf,
        options: ConsoleOptions,
        out: W,
    ) -> Self {
        Self {
            controller,
            export_dir,
            options,
            out,
        }
    }

    pub async fn analyze(
        &mut self,
        file: Option<PathBuf>,
        text: Option<String>,
        export: bool,
        json: bool,
    ) -> Result<bool> {
        if let Some(path) = file {
            if !self.choose_file(&path).await {
                return Ok(false);
            }
        }
        if let Some(text) = text {
            let text = if text == "-" {
                match read_stdin().await {
                    Ok(text) => text,
                    Err(e) => {
                        self.report_error(&ClientError::Internal(e));
                        return Ok(false);
                    }
                }
            } else {
                text
            };
            self.controller.form_mut().text = text;
        }

        if !self.submit().await {
            return Ok(false);
        }
        match (json, self.controller.current()) {
            (true, Some(doc)) => {
                let body = serde_json::to_string_pretty(&*doc)?;
                self.emit(&format!("{body}\n"));
            }
            _ => self.show(),
        }
        Ok(!export || self.export().await)
    }

    pub async fn render(&mut self, path: &Path, export: bool) -> bool {
        match read_result(path).await {
            Ok(doc) => {
                self.controller.load_result(doc);
                self.show();
                !export || self.export().await
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    /// Line-oriented stand-in for the interactive page.
    pub async fn run_session<R>(&mut self, input: R) -> Result<bool>
    where
        R: AsyncBufRead + Unpin,
    {
        self.emit(&format!("{SESSION_HELP}\n"));
        self.show();

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read command")? {
            if self.handle_line(&line).await.is_break() {
                break;
            }
        }
        Ok(true)
    }

    /// Runs one session command. `Break` ends the session.
    pub async fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        let (command, arg) = match line.trim_start().split_once(' ') {
            Some((command, arg)) => (command, arg),
            None => (line.trim(), ""),
        };
        debug!("Session command: {command}");
        match command {
            "" => {}
            "file" => {
                if self.choose_file(Path::new(arg.trim())).await {
                    self.show();
                }
            }
            "text" => {
                let form = self.controller.form_mut();
                form.text.push_str(arg);
                form.text.push('\n');
            }
            "analyze" => {
                if self.submit().await {
                    self.show();
                }
            }
            "export" => {
                self.export().await;
            }
            "reset" => {
                self.controller.reset();
                self.show();
            }
            "show" => self.show(),
            "quit" | "exit" => return ControlFlow::Break(()),
            _ => self.emit(&format!("{SESSION_HELP}\n")),
        }
        ControlFlow::Continue(())
    }

    async fn choose_file(&mut self, path: &Path) -> bool {
        match FileInput::load(path).await {
            Ok(file) => {
                self.controller.form_mut().file = Some(file);
                true
            }
            Err(e) => {
                self.report_error(&ClientError::from(e));
                false
            }
        }
    }

    /// The loading screen is drawn before the request goes out.
    async fn submit(&mut self) -> bool {
        let outcome = match self.controller.begin_submit() {
            Ok(pending) => {
                self.show();
                let result = pending.run().await;
                self.controller.finish_submit(result)
            }
            Err(e) => Err(e),
        };
        self.print_notices();
        outcome.is_ok()
    }

    /// Saves the report for the current result. Returns false if nothing was written.
    async fn export(&mut self) -> bool {
        let written = match self.controller.export(&chrono::Local::now()) {
            Ok(report) => match report.write_to(&self.export_dir).await {
                Ok(path) => {
                    eprintln!("Report saved to {}", path.display());
                    true
                }
                Err(e) => {
                    self.report_error(&ClientError::from(e));
                    false
                }
            },
            Err(_) => false,
        };
        self.print_notices();
        written
    }

    fn show(&mut self) {
        let screen = render_screen(self.controller.screen(), &self.options);
        self.emit(&screen);
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = write_flushed(&mut self.out, text) {
            warn!("Failed to write output: {e}");
        }
    }

    fn report_error(&self, error: &ClientError) {
        eprintln!("{}", format_notice(&error.notice(), &self.options));
    }

    fn print_notices(&mut self) {
        for notice in self.controller.take_notices() {
            eprintln!("{}", format_notice(&notice, &self.options));
        }
    }
}

fn write_flushed<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read resume text from stdin")?;
    Ok(text)
}

async fn read_result(path: &Path) -> Result<ResultDocument, ClientError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
