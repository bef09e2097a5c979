//! Projected "after human editing" scores.

use crate::{round_half_up, FocusSelection, IssueItem, Priority, ScoreSet, HP};

fn priority_weight(priority: Priority) -> i32 {
    match priority {
        Priority::High => HP.uplift_high,
        Priority::Medium => HP.uplift_medium,
        Priority::Low => HP.uplift_low,
        Priority::Safe => HP.uplift_safe,
    }
}

fn category_delta(enabled: bool, delta: i32, (share, lo, hi): (f64, i32, i32)) -> i32 {
    if !enabled {
        return 0;
    }
    (round_half_up(delta as f64 * share) as i32).clamp(lo, hi)
}

/// Project the score set an edited version of the text would reach.
///
/// Overall always lands in [85, 95] and never below `current.overall + 6`
/// unless that would pass 95. Categories outside the focus selection keep
/// their current value; every category is capped at 97.
#[tracing::instrument(skip_all, fields(current = current.overall))]
pub fn project_potential(
    current: &ScoreSet,
    issues: &[IssueItem],
    focus: &FocusSelection,
) -> ScoreSet {
    let uplift: i32 = issues
        .iter()
        .map(|i| priority_weight(i.priority))
        .sum::<i32>()
        .clamp(HP.uplift_min, HP.uplift_max);

    let overall = (current.overall + uplift)
        .max(HP.potential_overall_min)
        .max(current.overall + HP.potential_min_gain)
        .clamp(HP.potential_overall_min, HP.potential_overall_max);
    let delta = overall - current.overall;
    tracing::debug!(uplift, overall, delta, "projection");

    let cap = |value: i32| value.clamp(0, HP.potential_category_max);

    ScoreSet {
        overall,
        clarity: cap(current.clarity + category_delta(focus.clarity, delta, HP.delta_clarity)),
        flow: cap(current.flow + category_delta(focus.flow, delta, HP.delta_flow)),
        language: cap(current.language + category_delta(focus.language, delta, HP.delta_language)),
        grammar: cap(current.grammar + category_delta(focus.grammar, delta, HP.delta_grammar)),
        copyediting: cap(
            current.copyediting + category_delta(focus.copyediting, delta, HP.delta_copyediting),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(overall: i32, each: i32) -> ScoreSet {
        ScoreSet {
            overall,
            clarity: each,
            flow: each,
            language: each,
            grammar: each,
            copyediting: each,
        }
    }

    fn item(priority: Priority) -> IssueItem {
        IssueItem {
            priority,
            title: String::new(),
            why: String::new(),
            next: String::new(),
        }
    }

    #[test]
    fn uplift_is_clamped_to_band() {
        // 8 + 5 + 3 = 16
        let issues = [item(Priority::High), item(Priority::Medium), item(Priority::Low)];
        let p = project_potential(&scores(72, 70), &issues, &FocusSelection::all());
        assert_eq!(p.overall, 88);

        // 0 raised to 10
        let p = project_potential(&scores(78, 70), &[item(Priority::Safe)], &FocusSelection::all());
        assert_eq!(p.overall, 88);
    }

    #[test]
    fn overall_floor_and_ceiling() {
        let safe = [item(Priority::Safe)];
        let low = project_potential(&scores(20, 20), &safe, &FocusSelection::all());
        assert_eq!(low.overall, 85);

        let high = project_potential(&scores(93, 93), &safe, &FocusSelection::all());
        assert_eq!(high.overall, 95);
    }

    #[test]
    fn category_deltas_follow_shares_and_bounds() {
        // overall 60 -> 85, delta 25
        let p = project_potential(&scores(60, 50), &[item(Priority::Safe)], &FocusSelection::all());
        assert_eq!(p.clarity, 50 + 8); // round(7.5)
        assert_eq!(p.flow, 50 + 6); // round(6.25)
        assert_eq!(p.language, 50 + 5);
        assert_eq!(p.grammar, 50 + 4); // round(3.75)
        assert_eq!(p.copyediting, 50 + 3); // round(2.5)
    }

    #[test]
    fn negative_delta_uses_category_minimums() {
        // overall 100 -> 95, delta -5
        let p = project_potential(&scores(100, 90), &[item(Priority::Safe)], &FocusSelection::all());
        assert_eq!(p.overall, 95);
        assert_eq!(p.clarity, 94);
        assert_eq!(p.flow, 93);
        assert_eq!(p.language, 93);
        assert_eq!(p.grammar, 92);
        assert_eq!(p.copyediting, 92);
    }

    #[test]
    fn unfocused_categories_are_unchanged() {
        let focus = FocusSelection {
            clarity: true,
            ..FocusSelection::none()
        };
        let p = project_potential(&scores(60, 50), &[item(Priority::Safe)], &focus);
        assert_eq!(p.clarity, 58);
        assert_eq!(p.flow, 50);
        assert_eq!(p.copyediting, 50);
    }

    #[test]
    fn categories_cap_at_97() {
        let p = project_potential(&scores(40, 95), &[item(Priority::High)], &FocusSelection::all());
        assert_eq!(p.clarity, 97);
        assert_eq!(p.grammar, 97);
    }
}
