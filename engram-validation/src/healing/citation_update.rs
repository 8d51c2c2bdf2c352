//! Citation refresh: apply detected renames and re-anchor hashes/lines to
//! the file's current state.

use engram_core::memory::BaseMemory;

use crate::context::ValidationContext;

/// Refresh every stale citation in the memory. Returns the number of links
/// repaired.
pub fn refresh(memory: &mut BaseMemory, ctx: &ValidationContext<'_>) -> usize {
    let mut repaired = 0;

    for link in &mut memory.linked_files {
        match (ctx.file_checker)(&link.file_path) {
            Some(info) => {
                let mut touched = false;
                if let (Some(expected), Some(actual)) = (&link.content_hash, &info.content_hash) {
                    if expected != actual {
                        link.content_hash = Some(actual.clone());
                        touched = true;
                    }
                }
                if let (Some(line), Some(total)) = (link.line_start, info.total_lines) {
                    if line > total {
                        // The cited line is gone; keep the file reference.
                        link.line_start = None;
                        touched = true;
                    }
                }
                if touched {
                    repaired += 1;
                }
            }
            None => {
                if let Some(new_path) = (ctx.rename_detector)(&link.file_path) {
                    link.file_path = new_path;
                    // Content may have changed across the rename.
                    link.content_hash = None;
                    repaired += 1;
                }
            }
        }
    }

    repaired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{FileInfo, PatternStatus};
    use engram_core::memory::links::FileLink;
    use engram_core::memory::types::TribalContent;
    use engram_core::memory::TypedContent;

    #[test]
    fn rename_updates_path_and_clears_hash() {
        let mut memory = BaseMemory::new(
            TypedContent::Tribal(TribalContent {
                knowledge: "k".to_string(),
                severity: "low".to_string(),
                consequences: vec![],
            }),
            "s",
        )
        .unwrap();
        memory.linked_files.push(FileLink {
            file_path: "src/old.rs".to_string(),
            line_start: Some(5),
            content_hash: Some("h".to_string()),
        });

        let ctx = ValidationContext {
            file_checker: &|_| None,
            rename_detector: &|p| (p == "src/old.rs").then(|| "src/new.rs".to_string()),
            pattern_checker: &|_| PatternStatus {
                detected: true,
                dominant: true,
            },
        };

        assert_eq!(refresh(&mut memory, &ctx), 1);
        assert_eq!(memory.linked_files[0].file_path, "src/new.rs");
        assert!(memory.linked_files[0].content_hash.is_none());

        // A second pass against a file checker that now sees the new file
        // re-anchors nothing further.
        let ctx2 = ValidationContext {
            file_checker: &|_| {
                Some(FileInfo {
                    content_hash: Some("h2".to_string()),
                    total_lines: Some(3),
                })
            },
            rename_detector: &|_| None,
            pattern_checker: &|_| PatternStatus {
                detected: true,
                dominant: true,
            },
        };
        assert_eq!(refresh(&mut memory, &ctx2), 1); // line 5 > 3 lines → dropped
        assert!(memory.linked_files[0].line_start.is_none());
    }
}
