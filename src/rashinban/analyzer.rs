//! Seam to the CSV analysis collaborator.
//!
//! Parsing, statistics and LLM summarization live behind [`CsvAnalyzer`]. The
//! session gate only decides whether an upload reaches it.

use serde_json::{json, Value};
use std::{future::Future, pin::Pin};

/// An uploaded CSV file, as received.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub filename: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Rejected(String),
}

pub type AnalyzeFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, AnalyzeError>> + Send + 'a>>;

pub trait CsvAnalyzer: Send + Sync {
    fn analyze<'a>(&'a self, upload: &'a CsvUpload) -> AnalyzeFuture<'a>;
}

/// Acknowledges an upload without interpreting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadReceipt;

impl CsvAnalyzer for UploadReceipt {
    fn analyze<'a>(&'a self, upload: &'a CsvUpload) -> AnalyzeFuture<'a> {
        Box::pin(async move {
            if upload.content.is_empty() {
                return Err(AnalyzeError::Rejected("Empty file".to_string()));
            }

            let lines = upload
                .content
                .split(|byte| *byte == b'\n')
                .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
                .count();

            Ok(json!({
                "filename": upload.filename,
                "bytes": upload.content.len(),
                "lines": lines,
            }))
        })
    }
}
