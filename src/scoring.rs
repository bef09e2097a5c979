//! Current-state sub-scores: clarity, grammar, language, flow, copyediting.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::readability::flesch;
use crate::text::{average_sentence_length, sentences, words};
use crate::{clamp, round_half_up, ScoreSet, HP, TRANSITIONS, WORDY_PHRASES};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

pub(crate) static DOUBLE_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

static PUNCT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?.,]{2,}").unwrap());

static TERMINAL_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]$").unwrap());

static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\r?\n){2,}").unwrap());

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s[,.]").unwrap());

static BARE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Non-overlapping occurrences of each phrase in already lower-cased text.
pub(crate) fn phrase_hits(lower: &str, phrases: &[&str]) -> usize {
    phrases.iter().map(|p| lower.matches(p).count()).sum()
}

/// True when a word is followed, across whitespace only, by itself ("the the").
fn has_repeated_word(text: &str) -> bool {
    let tokens: Vec<_> = BARE_WORD_RE.find_iter(text).collect();
    tokens.windows(2).any(|pair| {
        let gap = &text[pair[0].end()..pair[1].start()];
        !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && pair[0].as_str().to_lowercase() == pair[1].as_str().to_lowercase()
    })
}

// ---------------------------------------------------------------------------
// Sub-scores (unrounded)
// ---------------------------------------------------------------------------

fn clarity(text: &str) -> f64 {
    let mut score = (flesch(text) + HP.clarity_offset) / HP.clarity_divisor;
    let avg = average_sentence_length(text);
    if avg > HP.long_sentence_words {
        score -= (avg - HP.long_sentence_words) * HP.long_sentence_step;
    }
    clamp(score, HP.score_min, HP.score_max)
}

fn grammar(text: &str) -> f64 {
    let mut score = HP.grammar_base;
    if DOUBLE_SPACE_RE.is_match(text) {
        score -= HP.grammar_double_space_penalty;
    }
    if PUNCT_RUN_RE.is_match(text) {
        score -= HP.grammar_punct_run_penalty;
    }
    if !text.is_empty() && !TERMINAL_PUNCT_RE.is_match(text) {
        score -= HP.grammar_no_terminal_penalty;
    }
    clamp(score, HP.score_min, HP.score_max)
}

fn language(text: &str) -> f64 {
    let word_list = words(text);
    let ttr = if word_list.is_empty() {
        0.0
    } else {
        let distinct: HashSet<String> = word_list.iter().map(|w| w.to_lowercase()).collect();
        distinct.len() as f64 / word_list.len() as f64
    };

    let wordy = phrase_hits(&text.to_lowercase(), WORDY_PHRASES);
    let score = HP.language_base + ttr * HP.language_ttr_weight
        - wordy as f64 * HP.wordy_phrase_penalty;
    clamp(score, HP.score_min, HP.score_max)
}

fn flow(text: &str) -> f64 {
    let mut score = HP.flow_base;
    let transition_hits = phrase_hits(&text.to_lowercase(), TRANSITIONS);
    let sentence_count = sentences(text).len();
    if sentence_count > 0 {
        let density = transition_hits as f64 / sentence_count as f64;
        score += clamp(
            density * HP.transition_density_weight,
            0.0,
            HP.transition_bonus_cap,
        );
    }

    let paragraphs = PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();
    if text.chars().count() > HP.unbroken_text_chars && paragraphs == 1 {
        score -= HP.unbroken_text_penalty;
    }
    clamp(score, HP.score_min, HP.score_max)
}

fn copyediting(text: &str) -> f64 {
    let mut score = HP.copyediting_base;
    if has_repeated_word(text) {
        score -= HP.repeated_word_penalty;
    }
    if SPACE_BEFORE_PUNCT_RE.is_match(text) {
        score -= HP.space_before_punct_penalty;
    }
    if DOUBLE_SPACE_RE.is_match(text) {
        score -= HP.copyediting_double_space_penalty;
    }
    clamp(score, HP.score_min, HP.score_max)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score the text as it stands. Sub-scores are rounded individually; the
/// overall score is rounded once from the unrounded weighted sum.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn current_scores(text: &str) -> ScoreSet {
    let text = text.trim();

    let clarity = clarity(text);
    let grammar = grammar(text);
    let language = language(text);
    let flow = flow(text);
    let copyediting = copyediting(text);

    let overall = clarity * HP.weight_clarity
        + language * HP.weight_language
        + flow * HP.weight_flow
        + grammar * HP.weight_grammar
        + copyediting * HP.weight_copyediting;
    tracing::debug!(clarity, grammar, language, flow, copyediting, overall, "sub-scores");

    ScoreSet {
        overall: round_half_up(overall) as i32,
        clarity: round_half_up(clarity) as i32,
        flow: round_half_up(flow) as i32,
        language: round_half_up(language) as i32,
        grammar: round_half_up(grammar) as i32,
        copyediting: round_half_up(copyediting) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_word_needs_whitespace_gap() {
        assert!(has_repeated_word("I saw the the cat."));
        assert!(has_repeated_word("The\nthe end."));
        assert!(!has_repeated_word("the theory"));
        assert!(!has_repeated_word("the, the"));
    }

    #[test]
    fn phrase_hits_do_not_overlap() {
        assert_eq!(phrase_hits("in order to in order to", WORDY_PHRASES), 2);
        assert_eq!(phrase_hits("enthusiasm", TRANSITIONS), 1);
        assert_eq!(phrase_hits("nothing here", TRANSITIONS), 0);
    }

    #[test]
    fn grammar_penalties_stack() {
        assert_eq!(grammar("This is great."), 92.0);
        assert_eq!(grammar("This is  great"), 92.0 - 8.0 - 6.0);
        assert_eq!(grammar("Wait,, what?!"), 92.0 - 6.0);
        assert_eq!(grammar(""), 92.0);
    }

    #[test]
    fn copyediting_penalties_stack() {
        assert_eq!(copyediting("Clean text."), 88.0);
        assert_eq!(copyediting("A stray space ."), 82.0);
        assert_eq!(copyediting("It is is  done ."), 88.0 - 8.0 - 6.0 - 6.0);
    }

    #[test]
    fn flow_rewards_transitions() {
        // 1 hit over 2 sentences: 0.5 * 90 = 45, capped at 35
        assert_eq!(flow("It rained. However, we went out."), 90.0);
        assert_eq!(flow("It rained. We went out."), 55.0);
        assert_eq!(flow(""), 55.0);
    }

    #[test]
    fn flow_penalises_long_unbroken_text() {
        let body = "Plain words without any signposting at all. ".repeat(8);
        let body = body.trim();
        assert!(body.chars().count() > 320);
        assert_eq!(flow(body), 47.0);

        let split = body.replacen(". ", ".\n\n", 1);
        assert_eq!(flow(&split), 55.0);

        let crlf = body.replacen(". ", ".\r\n\r\n", 1);
        assert_eq!(flow(&crlf), 55.0);
    }

    #[test]
    fn overall_rounds_the_raw_weighted_sum() {
        // clarity is 18.6875; rounding it first would give 68.54 -> 69
        let text = "Effect paper method every.";
        assert!((clarity(text) - 18.6875).abs() < 1e-9);
        let s = current_scores(text);
        assert_eq!(s.clarity, 19);
        assert_eq!(s.overall, 68);
    }

    #[test]
    fn language_uses_type_token_ratio() {
        // 4 distinct of 4 words
        assert_eq!(language("one two three four"), 100.0);
        // 1 distinct of 4 words: 55 + 0.25 * 70
        assert_eq!(language("go Go go GO"), 72.5);
        assert_eq!(language(""), 55.0);
    }
}
