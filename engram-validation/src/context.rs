//! External context the validators need: file system and pattern-detector
//! lookups, injected as callbacks so the engine stays free of I/O concerns.

/// Current state of a cited file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// blake3 hash of the file's current content, if available.
    pub content_hash: Option<String>,
    /// Total line count, if available.
    pub total_lines: Option<u32>,
}

/// Current state of a detected code pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternStatus {
    /// The pattern is still detected somewhere in the codebase.
    pub detected: bool,
    /// The pattern is the dominant convention for its category.
    pub dominant: bool,
}

/// Callback bundle for a validation run.
pub struct ValidationContext<'a> {
    /// Returns file info when the path exists, None when it doesn't.
    pub file_checker: &'a dyn Fn(&str) -> Option<FileInfo>,
    /// Returns the new path when a file was renamed (git mv detection).
    pub rename_detector: &'a dyn Fn(&str) -> Option<String>,
    /// Returns the current state of a named pattern.
    pub pattern_checker: &'a dyn Fn(&str) -> PatternStatus,
}

impl<'a> ValidationContext<'a> {
    /// No-op context: files assumed present with nothing to compare, no
    /// renames, patterns assumed dominant. Used for basic temporal +
    /// contradiction validation without codebase access.
    pub fn noop() -> ValidationContext<'static> {
        ValidationContext {
            file_checker: &|_| {
                Some(FileInfo {
                    content_hash: None,
                    total_lines: None,
                })
            },
            rename_detector: &|_| None,
            pattern_checker: &|_| PatternStatus {
                detected: true,
                dominant: true,
            },
        }
    }
}
