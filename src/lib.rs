use serde::Serialize;
use strum::Display;

pub mod error;
pub mod issues;
pub mod projection;
pub mod readability;
pub mod scoring;
pub mod text;

pub use error::{DiagnosticError, Result};
pub use issues::find_issues;
pub use projection::project_potential;
pub use readability::flesch;
pub use scoring::current_scores;
pub use text::{average_sentence_length, sentences, syllables, truncate_words, words};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// One set of 0-100 scores. Always computed from scratch, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSet {
    pub overall: i32,
    pub clarity: i32,
    pub flow: i32,
    pub language: i32,
    pub grammar: i32,
    pub copyediting: i32,
}

/// Which categories the caller wants evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSelection {
    pub clarity: bool,
    pub flow: bool,
    pub language: bool,
    pub grammar: bool,
    pub copyediting: bool,
}

impl Default for FocusSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FocusSelection {
    pub fn all() -> Self {
        Self {
            clarity: true,
            flow: true,
            language: true,
            grammar: true,
            copyediting: true,
        }
    }

    pub fn none() -> Self {
        Self {
            clarity: false,
            flow: false,
            language: false,
            grammar: false,
            copyediting: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Priority {
    High,
    Medium,
    Low,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueItem {
    pub priority: Priority,
    pub title: String,
    pub why: String,
    pub next: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticResult {
    pub current: ScoreSet,
    pub potential: ScoreSet,
    pub issues: Vec<IssueItem>,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    // readability
    pub flesch_base: f64,
    pub flesch_sentence_weight: f64,
    pub flesch_syllable_weight: f64,
    // clarity
    pub clarity_offset: f64,
    pub clarity_divisor: f64,
    pub long_sentence_words: f64,
    pub long_sentence_step: f64,
    // grammar
    pub grammar_base: f64,
    pub grammar_double_space_penalty: f64,
    pub grammar_punct_run_penalty: f64,
    pub grammar_no_terminal_penalty: f64,
    // language
    pub language_base: f64,
    pub language_ttr_weight: f64,
    pub wordy_phrase_penalty: f64,
    // flow
    pub flow_base: f64,
    pub transition_density_weight: f64,
    pub transition_bonus_cap: f64,
    pub unbroken_text_chars: usize,
    pub unbroken_text_penalty: f64,
    // copyediting
    pub copyediting_base: f64,
    pub repeated_word_penalty: f64,
    pub space_before_punct_penalty: f64,
    pub copyediting_double_space_penalty: f64,
    // overall weights, sum to 1.0
    pub weight_clarity: f64,
    pub weight_language: f64,
    pub weight_flow: f64,
    pub weight_grammar: f64,
    pub weight_copyediting: f64,
    pub score_min: f64,
    pub score_max: f64,
    // issue finder
    pub issue_high_sentence_words: f64,
    pub issue_medium_sentence_words: f64,
    pub signposting_min_sentences: usize,
    pub max_issues: usize,
    // projection
    pub uplift_high: i32,
    pub uplift_medium: i32,
    pub uplift_low: i32,
    pub uplift_safe: i32,
    pub uplift_min: i32,
    pub uplift_max: i32,
    pub potential_min_gain: i32,
    pub potential_overall_min: i32,
    pub potential_overall_max: i32,
    pub potential_category_max: i32,
    pub delta_clarity: (f64, i32, i32),
    pub delta_flow: (f64, i32, i32),
    pub delta_language: (f64, i32, i32),
    pub delta_grammar: (f64, i32, i32),
    pub delta_copyediting: (f64, i32, i32),
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    flesch_base: 206.835,
    flesch_sentence_weight: 1.015,
    flesch_syllable_weight: 84.6,
    clarity_offset: 10.0,
    clarity_divisor: 1.2,
    long_sentence_words: 28.0,
    long_sentence_step: 1.2,
    grammar_base: 92.0,
    grammar_double_space_penalty: 8.0,
    grammar_punct_run_penalty: 6.0,
    grammar_no_terminal_penalty: 6.0,
    language_base: 55.0,
    language_ttr_weight: 70.0,
    wordy_phrase_penalty: 6.0,
    flow_base: 55.0,
    transition_density_weight: 90.0,
    transition_bonus_cap: 35.0,
    unbroken_text_chars: 320,
    unbroken_text_penalty: 8.0,
    copyediting_base: 88.0,
    repeated_word_penalty: 8.0,
    space_before_punct_penalty: 6.0,
    copyediting_double_space_penalty: 6.0,
    weight_clarity: 0.24,
    weight_language: 0.18,
    weight_flow: 0.18,
    weight_grammar: 0.22,
    weight_copyediting: 0.18,
    score_min: 0.0,
    score_max: 100.0,
    issue_high_sentence_words: 28.0,
    issue_medium_sentence_words: 22.0,
    signposting_min_sentences: 2,
    max_issues: 4,
    uplift_high: 8,
    uplift_medium: 5,
    uplift_low: 3,
    uplift_safe: 0,
    uplift_min: 10,
    uplift_max: 26,
    potential_min_gain: 6,
    potential_overall_min: 85,
    potential_overall_max: 95,
    potential_category_max: 97,
    delta_clarity: (0.30, 4, 12),
    delta_flow: (0.25, 3, 11),
    delta_language: (0.20, 3, 10),
    delta_grammar: (0.15, 2, 8),
    delta_copyediting: (0.10, 2, 8),
};

/// Wordy phrases penalised by the language score and flagged by the issue finder.
pub const WORDY_PHRASES: &[&str] = &[
    "in order to",
    "due to the fact that",
    "it is important to note that",
    "at this point in time",
    "in the event that",
];

/// Signposting words rewarded by the flow score.
pub const TRANSITIONS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "in addition",
    "thus",
    "consequently",
    "for example",
    "in contrast",
    "overall",
];

/// Input cap applied by callers before evaluation.
pub const WORD_LIMIT: usize = 200;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

/// Round half toward positive infinity, so `-1.5` becomes `-1`.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full diagnostic: current scores, issue list and projected scores.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn evaluate(text: &str, focus: &FocusSelection) -> DiagnosticResult {
    let current = current_scores(text);
    let issues = find_issues(text, focus);
    let potential = project_potential(&current, &issues, focus);
    tracing::debug!(
        current = current.overall,
        potential = potential.overall,
        issues = issues.len(),
        "evaluation finished"
    );

    DiagnosticResult {
        current,
        potential,
        issues,
    }
}
