//! Summary regeneration: rebuild an empty summary from the typed content.

use engram_core::memory::BaseMemory;

/// Maximum regenerated summary length in characters.
const MAX_SUMMARY_CHARS: usize = 120;

/// Build a summary from the memory's knowledge text, truncated at a word
/// boundary.
pub fn regenerate(memory: &BaseMemory) -> String {
    let text = memory.content.knowledge_text();
    let trimmed = text.trim();
    if trimmed.len() <= MAX_SUMMARY_CHARS {
        return trimmed.to_string();
    }

    let mut cut = MAX_SUMMARY_CHARS;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    let head = &trimmed[..cut];
    match head.rfind(' ') {
        Some(space) if space > 0 => head[..space].to_string(),
        _ => head.to_string(),
    }
}
