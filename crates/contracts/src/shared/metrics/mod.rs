//! Derived campaign metrics.
//!
//! Every function here is pure: same input, same output, no state kept
//! between calls. Degenerate denominators are replaced with a fixed default
//! (`"0.00"` or `0`) instead of producing `NaN`/`inf`, so a metric can never
//! break a table render.

use serde::{Deserialize, Serialize};

use super::format::{round_half_up, to_fixed};

/// Value shown whenever a cost cannot be computed
pub const ZERO_COST: &str = "0.00";

/// Signed follower delta for a content (negative when followers were lost)
pub fn new_followers(followers_before: i64, followers_after: i64) -> i64 {
    followers_after.saturating_sub(followers_before)
}

/// Cost of each follower gained, two decimals.
///
/// Returns `"0.00"` when no followers were gained. The spend is not
/// validated, so a negative spend gives a negative cost.
pub fn cost_per_follower(amount_spent: f64, followers_before: i64, followers_after: i64) -> String {
    let gained = new_followers(followers_before, followers_after);
    if gained > 0 {
        to_fixed(amount_spent / gained as f64, 2)
    } else {
        ZERO_COST.to_string()
    }
}

/// Absolute number of interactions implied by reach and engagement rate
pub fn total_engagements(reach: i64, engagement_percent: f64) -> f64 {
    reach as f64 * (engagement_percent / 100.0)
}

/// Cost of each interaction, two decimals. `"0.00"` when there were none.
pub fn cost_per_engagement(amount_spent: f64, reach: i64, engagement_percent: f64) -> String {
    let engagements = total_engagements(reach, engagement_percent);
    // NaN fails the comparison and falls through to the default
    if engagements > 0.0 && engagements.is_finite() {
        to_fixed(amount_spent / engagements, 2)
    } else {
        ZERO_COST.to_string()
    }
}

/// Share of the monthly budget already spent, as a whole percentage.
///
/// Not clamped: over-budget projects report values above 100. A budget of
/// zero or less reports 0.
pub fn budget_percentage(current_spend: f64, monthly_budget: f64) -> i64 {
    if !(monthly_budget > 0.0) || !monthly_budget.is_finite() {
        return 0;
    }
    round_half_up((current_spend / monthly_budget) * 100.0)
}

/// Progress bar fill, clamped to `0..=100`
pub fn budget_bar_width(percentage: i64) -> u8 {
    percentage.clamp(0, 100) as u8
}

/// Colour band of the budget progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTone {
    Healthy,
    Primary,
    Warning,
}

pub fn budget_tone(percentage: i64) -> BudgetTone {
    if percentage > 80 {
        BudgetTone::Warning
    } else if percentage > 60 {
        BudgetTone::Primary
    } else {
        BudgetTone::Healthy
    }
}

/// Mean engagement rate with one decimal, `"0.0"` for an empty set
pub fn average_engagement<I>(values: I) -> String
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return "0.0".to_string();
    }
    to_fixed(sum / count as f64, 1)
}
