use edit_diagnostic::{evaluate, FocusSelection, ScoreSet};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_focus()(
        clarity in any::<bool>(),
        flow in any::<bool>(),
        language in any::<bool>(),
        grammar in any::<bool>(),
        copyediting in any::<bool>()
    ) -> FocusSelection {
        FocusSelection { clarity, flow, language, grammar, copyediting }
    }
}

fn arb_prose() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("the".to_string()),
        Just("however,".to_string()),
        Just("in order to".to_string()),
        Just("results.".to_string()),
        Just("methodology".to_string()),
        Just("?!".to_string()),
        Just("\n\n".to_string()),
        Just(" ".to_string()),
        "[a-z]{1,12}",
    ];
    proptest::collection::vec(token, 0..120).prop_map(|tokens| tokens.join(" "))
}

fn in_range(s: &ScoreSet, lo: i32, hi: i32) -> bool {
    [s.overall, s.clarity, s.flow, s.language, s.grammar, s.copyediting]
        .iter()
        .all(|v| (lo..=hi).contains(v))
}

// --- PROPERTIES ---

proptest! {
    #[test]
    fn current_scores_stay_in_bounds(text in "\\PC{0,300}", focus in arb_focus()) {
        let result = evaluate(&text, &focus);
        prop_assert!(in_range(&result.current, 0, 100));
    }

    #[test]
    fn prose_scores_stay_in_bounds(text in arb_prose(), focus in arb_focus()) {
        let result = evaluate(&text, &focus);
        prop_assert!(in_range(&result.current, 0, 100));
        prop_assert!(in_range(&result.potential, 0, 97));
    }

    #[test]
    fn potential_overall_band(text in arb_prose(), focus in arb_focus()) {
        let result = evaluate(&text, &focus);
        let p = result.potential.overall;
        prop_assert!((85..=95).contains(&p));
        prop_assert!(p >= (result.current.overall + 6).min(95));
    }

    #[test]
    fn issues_never_empty_and_capped(text in arb_prose(), focus in arb_focus()) {
        let issues = evaluate(&text, &focus).issues;
        prop_assert!(!issues.is_empty());
        prop_assert!(issues.len() <= 4);
    }

    #[test]
    fn evaluation_is_pure(text in arb_prose(), focus in arb_focus()) {
        prop_assert_eq!(evaluate(&text, &focus), evaluate(&text, &focus));
    }
}
