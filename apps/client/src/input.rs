use std::path::Path;

use bytes::Bytes;

/// Label shown next to the file picker when nothing is chosen.
pub const FILE_LABEL_PLACEHOLDER: &str = "Choose file or drag & drop";

/// A resume file picked by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInput {
    pub name: String,
    pub bytes: Bytes,
}

impl FileInput {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, keeping only its file name.
    pub async fn load(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        Ok(Self::new(name, bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type for the upload, guessed from the extension.
    /// The service accepts pdf, doc, docx and txt.
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }
}

/// The normalized submission: exactly one of file or text, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedInput {
    File(FileInput),
    Text(String),
    Empty,
}

impl CapturedInput {
    pub fn is_empty(&self) -> bool {
        matches!(self, CapturedInput::Empty)
    }
}

/// Current contents of the input screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputForm {
    pub file: Option<FileInput>,
    pub text: String,
}

impl InputForm {
    /// A non-empty file wins over pasted text; text counts only once trimmed.
    pub fn capture(&self) -> CapturedInput {
        if let Some(file) = self.file.as_ref().filter(|f| !f.is_empty()) {
            return CapturedInput::File(file.clone());
        }
        let text = self.text.trim();
        if text.is_empty() {
            CapturedInput::Empty
        } else {
            CapturedInput::Text(text.to_string())
        }
    }

    pub fn file_label(&self) -> &str {
        self.file
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or(FILE_LABEL_PLACEHOLDER)
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.text.clear();
    }
}
