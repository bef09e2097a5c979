//! Prioritised advisory issues.
//!
//! Rules run in a fixed order and each contributes at most one item. When
//! nothing fires the list holds a single `Safe` item, so it is never empty.

use crate::scoring::DOUBLE_SPACE_RE;
use crate::text::{average_sentence_length, sentences};
use crate::{FocusSelection, IssueItem, Priority, HP, WORDY_PHRASES};

fn issue(priority: Priority, title: &str, why: &str, next: &str) -> IssueItem {
    IssueItem {
        priority,
        title: title.to_string(),
        why: why.to_string(),
        next: next.to_string(),
    }
}

fn rule_sentence_length(text: &str) -> Option<IssueItem> {
    let avg = average_sentence_length(text);
    if avg > HP.issue_high_sentence_words {
        Some(issue(
            Priority::High,
            "Sentence is too long (multi-clause)",
            "Readers lose the thread when one sentence carries several clauses.",
            "Split the sentence at its main clauses and keep one claim per sentence.",
        ))
    } else if avg > HP.issue_medium_sentence_words {
        Some(issue(
            Priority::Medium,
            "Sentences are long",
            "Average sentence length is above what reviewers read comfortably.",
            "Shorten the longest sentences or break them into two.",
        ))
    } else {
        None
    }
}

// Fires on sentence count alone; it does not look for transition words.
fn rule_signposting(text: &str) -> Option<IssueItem> {
    if sentences(text).len() >= HP.signposting_min_sentences {
        Some(issue(
            Priority::Medium,
            "Weak signposting between ideas",
            "Connections between sentences are left for the reader to infer.",
            "Add transitions such as \"however\" or \"therefore\" where the argument turns.",
        ))
    } else {
        None
    }
}

fn rule_wordy_phrase(text: &str) -> Option<IssueItem> {
    let lower = text.to_lowercase();
    if WORDY_PHRASES.iter().any(|p| lower.contains(p)) {
        Some(issue(
            Priority::Low,
            "Wordy phrase detected",
            "Stock phrases add length without adding meaning.",
            "Replace phrases like \"in order to\" with \"to\" and \"due to the fact that\" with \"because\".",
        ))
    } else {
        None
    }
}

fn rule_extra_spacing(text: &str) -> Option<IssueItem> {
    if DOUBLE_SPACE_RE.is_match(text) {
        Some(issue(
            Priority::Low,
            "Extra spacing found",
            "Repeated spaces look careless in a submitted manuscript.",
            "Collapse double spaces to one.",
        ))
    } else {
        None
    }
}

fn no_issues() -> IssueItem {
    issue(
        Priority::Safe,
        "No major issues detected yet",
        "None of the quick checks fired on this sample.",
        "A full human edit still catches argument and citation problems these checks cannot.",
    )
}

/// Scan raw text for the issues the focus selection asks about, in priority
/// order, capped at four items.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn find_issues(text: &str, focus: &FocusSelection) -> Vec<IssueItem> {
    let mut out: Vec<IssueItem> = Vec::new();

    if focus.clarity {
        out.extend(rule_sentence_length(text));
    }
    if focus.flow {
        out.extend(rule_signposting(text));
    }
    if focus.language {
        out.extend(rule_wordy_phrase(text));
    }
    if focus.copyediting {
        out.extend(rule_extra_spacing(text));
    }

    if out.is_empty() {
        out.push(no_issues());
    }
    out.truncate(HP.max_issues);
    tracing::debug!(count = out.len(), "issues found");
    out
}
