use thiserror::Error;

use crate::gateway::AnalysisError;
use crate::render::view::Notice;

/// Client-level error type.
/// Every variant maps onto a user-facing `Notice`; none of them is fatal.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please upload a file or paste resume text")]
    EmptyInput,

    #[error("Error analyzing resume: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("No analysis data available. Please analyze a resume first.")]
    NoAnalysisData,

    #[error("An analysis is already in progress")]
    Busy,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid result document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    pub fn notice(&self) -> Notice {
        match self {
            ClientError::EmptyInput | ClientError::NoAnalysisData | ClientError::Busy => {
                Notice::warning(self.to_string())
            }
            ClientError::Analysis(e) => {
                tracing::warn!("Analysis error: {e}");
                Notice::error(self.to_string())
            }
            ClientError::Io(e) => {
                tracing::error!("I/O error: {e}");
                Notice::error(self.to_string())
            }
            ClientError::Json(e) => {
                tracing::error!("Result document error: {e}");
                Notice::error(self.to_string())
            }
            ClientError::Internal(e) => {
                tracing::error!("Internal error: {e:#}");
                Notice::error(self.to_string())
            }
        }
    }
}
