//! Word, sentence and syllable splitting.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word boundaries: accented letters split a word instead of hiding it.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[A-Za-z0-9_']+(?-u:\b)").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+|[^.!?]+$").unwrap());

static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z]").unwrap());

static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Word tokens in order, case preserved. Apostrophes stay inside the token.
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Sentences with whitespace collapsed. A trailing fragment without a
/// terminator still counts, so non-blank input always yields at least one.
pub fn sentences(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE_RUN_RE.replace_all(text, " ");
    let collapsed = collapsed.trim();

    let found: Vec<String> = SENTENCE_RE
        .find_iter(collapsed)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    // Terminator-only input such as "?!" matches nothing above.
    if found.is_empty() && !collapsed.is_empty() {
        return vec![collapsed.to_string()];
    }
    found
}

/// Coarse syllable estimate. Counts vowel groups of one or two letters after
/// dropping a silent trailing `e`; not a phonetic count.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let letters = NON_LETTER_RE.replace_all(&lower, "");
    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let stem = letters.strip_suffix('e').unwrap_or(&letters[..]);
    match VOWEL_GROUP_RE.find_iter(stem).count() {
        0 => 1,
        n => n,
    }
}

/// Words per sentence, or the plain word count when nothing splits out.
pub fn average_sentence_length(text: &str) -> f64 {
    let word_count = words(text).len() as f64;
    let sentence_count = sentences(text).len();
    if sentence_count == 0 {
        word_count
    } else {
        word_count / sentence_count as f64
    }
}

/// Keep the first `limit` whitespace-delimited tokens. Truncated text is
/// re-joined with single spaces and gets an ellipsis; short text is returned
/// untouched.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= limit {
        return text.to_string();
    }
    format!("{}\u{2026}", tokens[..limit].join(" "))
}
