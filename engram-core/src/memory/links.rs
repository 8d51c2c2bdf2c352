use serde::{Deserialize, Serialize};

/// A file citation attached to a memory.
///
/// Carries enough information for the citation validator to detect drift:
/// the line the knowledge refers to and a content hash taken when the
/// citation was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileLink {
    pub file_path: String,
    pub line_start: Option<u32>,
    pub content_hash: Option<String>,
}

impl FileLink {
    /// A bare path citation with no line or hash information.
    pub fn path(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line_start: None,
            content_hash: None,
        }
    }
}
