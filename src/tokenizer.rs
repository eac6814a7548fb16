use std::collections::HashSet;

/// Characters stripped from the end of a word before it is checked.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Turns raw whitespace-delimited words into lower case keywords,
/// dropping noise words.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    noise_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            noise_words: noise_words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_noise_word(&self, word: &str) -> bool {
        self.noise_words.contains(&word.to_lowercase())
    }

    pub fn noise_word_count(&self) -> usize {
        self.noise_words.len()
    }

    pub fn keyword(&self, word: &str) -> Option<String> {
        normalize(word, &self.noise_words)
    }

    pub fn tokenize<'a, I>(&'a self, words: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .filter_map(move |word| self.keyword(word.as_ref()))
    }
}

/// Returns the keyword for `word`, or `None` if it is not one.
///
/// Trailing punctuation is stripped, any repetition of it. What remains
/// must be non-empty and purely alphabetic, and must not be in
/// `noise_words` once lower-cased. `noise_words` is expected to hold
/// lower case entries.
pub fn normalize(word: &str, noise_words: &HashSet<String>) -> Option<String> {
    let stripped = word.trim_end_matches(TRAILING_PUNCTUATION);

    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return None;
    }

    let keyword = stripped.to_lowercase();
    if noise_words.contains(&keyword) {
        None
    } else {
        Some(keyword)
    }
}
