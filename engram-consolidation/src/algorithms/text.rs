//! Tokenization and word-set similarity used by abstraction grouping and
//! integration merging.

use std::collections::HashSet;

/// Lowercase alphanumeric tokenizer with stop-word removal.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .collect()
}

/// Word-set Jaccard similarity: `|A∩B| / |A∪B|` over lower-cased tokens.
/// Empty-vs-empty is 0.0, not 1.0 — no shared words is no similarity.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<String> = tokenize(a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(b).into_iter().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the" | "and" | "for" | "are" | "but" | "not" | "you" | "all" | "can" | "had" | "her"
            | "was" | "one" | "our" | "out" | "has" | "have" | "this" | "that" | "with" | "from"
            | "they" | "will" | "would" | "there" | "their" | "what" | "when" | "which" | "into"
            | "then" | "them" | "these" | "than" | "been" | "were" | "said" | "each" | "where"
            | "does" | "about" | "should" | "after" | "before" | "while" | "because"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_similarity_one() {
        let sim = jaccard("retry failed requests with backoff", "retry failed requests with backoff");
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_texts_have_similarity_zero() {
        assert_eq!(jaccard("database connection pooling", "frontend css layout"), 0.0);
    }

    #[test]
    fn empty_text_has_similarity_zero() {
        assert_eq!(jaccard("", "anything here"), 0.0);
        assert_eq!(jaccard("", ""), 0.0);
    }

    #[test]
    fn stop_words_and_case_are_ignored() {
        let sim = jaccard("The Database and the Pooling", "database pooling");
        assert!((sim - 1.0).abs() < 1e-12);
    }
}
