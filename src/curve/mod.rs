//! Staffing curve core: ramp normalization and per-month crew curves.
//!
//! A department is staffed as ramp-up, plateau, ramp-down across its
//! timeframe. All three functions here are pure and total; user-supplied
//! numbers are sanitized at the serde boundary (`crate::spec`), so this
//! module only ever sees unsigned integers.

/// Crew count for one step of a linear ramp.
///
/// `current_step` runs `1..=total_steps` on the way up and mirrors back
/// down on the way out. Every ramp month yields at least 1 so a shallow
/// ramp never renders as an empty month.
///
/// `total_steps == 0` is the degenerate instantaneous ramp: full crew.
pub fn ramp_value(current_step: u32, total_steps: u32, max_value: u32) -> u32 {
    if max_value == 0 {
        return 0;
    }
    if total_steps == 0 {
        return max_value;
    }
    let scaled = f64::from(max_value) * f64::from(current_step) / f64::from(total_steps);
    (scaled.round() as u32).max(1)
}

/// Clamp ramp durations so at least one plateau month remains.
///
/// Callers guarantee `duration >= 1`. If `ramp_up + ramp_down` already fits
/// the pair is returned unchanged, so the function is a fixed point on its
/// own output. Otherwise the budget is `duration - 1` months:
///
/// - budget 0 forces both ramps to 0, whatever they were;
/// - a single nonzero ramp takes the whole budget;
/// - two nonzero ramps split the budget in proportion to their original
///   ratio. The split is integer arithmetic (`floor`, then clamp into
///   `1..=budget-1`) with the remainder going to the ramp-down, so equal
///   inputs resolve deterministically: `normalize_ramp(5, 5, 6) == (2, 3)`.
///   A budget of 1 cannot keep both ramps alive; the ramp-up wins.
pub fn normalize_ramp(ramp_up: u32, ramp_down: u32, duration: u32) -> (u32, u32) {
    let total = u64::from(ramp_up) + u64::from(ramp_down);
    if total < u64::from(duration) {
        return (ramp_up, ramp_down);
    }

    let budget = duration.saturating_sub(1);
    if budget == 0 {
        return (0, 0);
    }

    match (ramp_up > 0, ramp_down > 0) {
        (true, false) => (budget, 0),
        (false, true) => (0, budget),
        (false, false) => (0, 0),
        (true, true) => {
            if budget == 1 {
                return (1, 0);
            }
            let up = (u64::from(budget) * u64::from(ramp_up) / total) as u32;
            let up = up.clamp(1, budget - 1);
            (up, budget - up)
        }
    }
}

/// Build the full per-month crew curve for one department.
///
/// Returns a fresh buffer of length `total_months`: zero outside
/// `[start_month, end_month]`, ramp/plateau/ramp values inside, then a
/// post-pass raising any active month below 1 to 1 when `max_crew > 0`.
/// Writes that would land outside the month axis are silently skipped.
///
/// The ramp durations are taken as given; pass them through
/// [`normalize_ramp`] first if they may not fit the timeframe.
pub fn build_crew_curve(
    start_month: u32,
    end_month: u32,
    ramp_up: u32,
    ramp_down: u32,
    max_crew: u32,
    total_months: usize,
) -> Vec<u32> {
    let mut curve = vec![0u32; total_months];

    let start = i64::from(start_month);
    let end = i64::from(end_month);
    let plateau_start = start + i64::from(ramp_up);
    let plateau_end = end - i64::from(ramp_down);

    for i in 0..ramp_up {
        put(
            &mut curve,
            start + i64::from(i),
            ramp_value(i + 1, ramp_up, max_crew),
        );
    }

    let mut month = plateau_start;
    while month <= plateau_end {
        put(&mut curve, month, max_crew);
        month += 1;
    }

    for i in 0..ramp_down {
        put(
            &mut curve,
            plateau_end + 1 + i64::from(i),
            ramp_value(ramp_down - i - 1, ramp_down, max_crew),
        );
    }

    // No zero-crew gaps inside an active timeframe.
    if max_crew > 0 {
        let mut month = start.max(0);
        let last = end.min(total_months as i64 - 1);
        while month <= last {
            if curve[month as usize] < 1 {
                curve[month as usize] = 1;
            }
            month += 1;
        }
    }

    curve
}

fn put(curve: &mut [u32], month: i64, crew: u32) {
    if month >= 0 && (month as usize) < curve.len() {
        curve[month as usize] = crew;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ramp_value_zero_crew_is_zero() {
        assert_eq!(ramp_value(1, 4, 0), 0);
        assert_eq!(ramp_value(4, 4, 0), 0);
    }

    #[test]
    fn ramp_value_instantaneous_ramp_is_full_crew() {
        assert_eq!(ramp_value(0, 0, 7), 7);
        assert_eq!(ramp_value(3, 0, 7), 7);
    }

    #[test]
    fn ramp_value_rounds_half_up_with_floor_of_one() {
        // 10 * 1/4 = 2.5 rounds up.
        assert_eq!(ramp_value(1, 4, 10), 3);
        // 4 * 1/8 = 0.5 would round to 1 anyway; 1 * 1/8 would round to 0.
        assert_eq!(ramp_value(1, 8, 1), 1);
        assert_eq!(ramp_value(4, 4, 10), 10);
    }

    #[test]
    fn normalize_leaves_fitting_ramps_alone() {
        assert_eq!(normalize_ramp(2, 3, 6), (2, 3));
        assert_eq!(normalize_ramp(0, 0, 1), (0, 0));
    }

    #[test]
    fn normalize_splits_proportionally_with_remainder_down() {
        // budget 5, ratio 1:1 -> floor(2.5) = 2 up, remainder to the down.
        assert_eq!(normalize_ramp(5, 5, 6), (2, 3));
        // ratio 100:1 -> up takes all but the minimum 1 for the down.
        assert_eq!(normalize_ramp(100, 1, 4), (2, 1));
        // ratio 1:100 -> clamp keeps the up alive at 1.
        assert_eq!(normalize_ramp(1, 100, 4), (1, 2));
    }

    #[test]
    fn normalize_single_sided_ramp_takes_whole_budget() {
        assert_eq!(normalize_ramp(9, 0, 4), (3, 0));
        assert_eq!(normalize_ramp(0, 9, 4), (0, 3));
    }

    #[test]
    fn normalize_one_month_timeframe_zeroes_both() {
        assert_eq!(normalize_ramp(3, 4, 1), (0, 0));
        assert_eq!(normalize_ramp(1, 0, 1), (0, 0));
    }

    #[test]
    fn normalize_budget_of_one_keeps_ramp_up() {
        assert_eq!(normalize_ramp(3, 4, 2), (1, 0));
    }

    #[test]
    fn normalize_is_idempotent_on_its_output() {
        for (up, down, duration) in [(5, 5, 6), (9, 0, 4), (3, 4, 2), (7, 2, 5)] {
            let once = normalize_ramp(up, down, duration);
            assert_eq!(normalize_ramp(once.0, once.1, duration), once);
        }
    }

    #[test]
    fn curve_ramps_up_plateaus_and_ramps_down() {
        let curve = build_crew_curve(0, 5, 2, 2, 4, 6);
        assert_eq!(curve, vec![2, 4, 4, 4, 2, 1]);
    }

    #[test]
    fn curve_is_zero_outside_the_timeframe() {
        let curve = build_crew_curve(2, 4, 1, 1, 6, 8);
        assert_eq!(curve, vec![0, 0, 6, 6, 1, 0, 0, 0]);
    }

    #[test]
    fn curve_without_ramps_is_a_flat_plateau() {
        let curve = build_crew_curve(1, 3, 0, 0, 5, 5);
        assert_eq!(curve, vec![0, 5, 5, 5, 0]);
    }

    #[test]
    fn curve_active_months_never_drop_below_one() {
        // A long shallow ramp-down would round to 0 near its tail without
        // the floor of 1.
        let curve = build_crew_curve(0, 11, 0, 10, 3, 12);
        for month in 0..=11 {
            assert!(curve[month] >= 1, "month {} dropped to 0", month);
        }
    }

    #[test]
    fn curve_clips_writes_past_the_month_axis() {
        let curve = build_crew_curve(4, 9, 1, 1, 3, 6);
        assert_eq!(curve, vec![0, 0, 0, 0, 3, 3]);
    }

    #[test]
    fn curve_with_zero_crew_is_all_zero() {
        let curve = build_crew_curve(0, 5, 2, 2, 0, 6);
        assert_eq!(curve, vec![0; 6]);
    }
}
