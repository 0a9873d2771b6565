/// Splits text into tokens. Implementations are pure functions of their
/// input: no normalization, no locale awareness, bytes pass through
/// untouched.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn name(&self) -> &str;
}

/// Splits on single ASCII space bytes. Runs of multiple spaces never
/// produce empty tokens; any other whitespace (tabs, newlines) is treated
/// as an ordinary byte belonging to the surrounding token.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_into_words(text)
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

/// Free function used directly by callers that don't need the trait
/// object (the hot path inside `SearchServer`).
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|token| !token.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_spaces() {
        assert_eq!(split_into_words("cat in the city"), vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn collapses_runs_of_spaces() {
        assert_eq!(split_into_words("a   b"), vec!["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("   ").is_empty());
    }

    #[test]
    fn passes_bytes_through_untouched() {
        assert_eq!(split_into_words("зеленый крокодил"), vec!["зеленый", "крокодил"]);
    }

    #[test]
    fn trait_object_matches_free_function() {
        let tokenizer = WhitespaceTokenizer;
        assert_eq!(tokenizer.tokenize("one two"), split_into_words("one two"));
        assert_eq!(tokenizer.name(), "whitespace");
    }
}
