//! Topic derivation for episodes that carry no explicit topic tag.

use std::collections::HashMap;

use engram_core::memory::BaseMemory;

use super::text;

/// The topic of an episode: its first tag when present, otherwise the most
/// frequent content word of its knowledge text.
pub fn topic_of(memory: &BaseMemory) -> String {
    if let Some(tag) = memory.topic() {
        return tag.to_string();
    }

    let tokens = text::tokenize(&memory.content.knowledge_text());
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        // Tie-break alphabetically so topic derivation is deterministic.
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(token, _)| token.to_string())
        .unwrap_or_else(|| "untagged".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engram_core::memory::types::{EpisodicContent, EpisodeStatus};
    use engram_core::memory::TypedContent;

    fn episode(interaction: &str, tags: &[&str]) -> BaseMemory {
        let mut m = BaseMemory::new(
            TypedContent::Episodic(EpisodicContent {
                interaction: interaction.to_string(),
                context: String::new(),
                outcome: None,
                status: EpisodeStatus::Pending,
            }),
            interaction,
        )
        .unwrap();
        m.tags = tags.iter().map(|t| t.to_string()).collect();
        m
    }

    #[test]
    fn first_tag_wins() {
        let m = episode("fixed the auth token refresh", &["auth", "tokens"]);
        assert_eq!(topic_of(&m), "auth");
    }

    #[test]
    fn untagged_falls_back_to_most_frequent_word() {
        let m = episode("cache invalidation bug, cache warmed too late", &[]);
        assert_eq!(topic_of(&m), "cache");
    }
}
