//! Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! The result is left unclamped; it goes negative for dense text and above
//! 100 for very short words. Callers clamp.

use crate::text::{sentences, syllables, words};
use crate::HP;

/// Reading ease of `text`, or 0 when it has no words or no sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn flesch(text: &str) -> f64 {
    let word_list = words(text);
    let word_count = word_list.len();
    let sentence_count = sentences(text).len();
    if word_count == 0 || sentence_count == 0 {
        return 0.0;
    }

    let syllable_total: usize = word_list.iter().map(|w| syllables(w)).sum();
    let asl = word_count as f64 / sentence_count as f64;
    let asw = syllable_total as f64 / word_count as f64;
    let score = HP.flesch_base - HP.flesch_sentence_weight * asl - HP.flesch_syllable_weight * asw;
    tracing::debug!(word_count, sentence_count, syllable_total, score, "flesch");
    score
}
