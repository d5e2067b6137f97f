use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "client", version, about = "Resume analysis client")]
pub struct Cli {
    #[arg(long, global = true, help = "Analysis service base URL (overrides ANALYZER_URL)")]
    pub server: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Directory for exported reports (overrides EXPORT_DIR)"
    )]
    pub export_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a resume file or pasted text for analysis
    Analyze {
        #[arg(long, help = "Resume file (pdf, doc, docx, txt); takes precedence over --text")]
        file: Option<PathBuf>,
        #[arg(long, help = "Resume text; use '-' to read from stdin")]
        text: Option<String>,
        #[arg(long, help = "Save a text report after a successful analysis")]
        export: bool,
        #[arg(long, help = "Print the raw result as JSON instead of the report view")]
        json: bool,
    },
    /// Render a previously saved result document
    Render {
        result: PathBuf,
        #[arg(long, help = "Save a text report")]
        export: bool,
    },
    /// Interactive session: choose input, analyze, export and reset
    Session,
}
