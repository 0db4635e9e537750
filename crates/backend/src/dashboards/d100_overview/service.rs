use anyhow::{Context, Result};
use contracts::dashboards::d100_overview::{OverviewResponse, OverviewStats};
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_content::aggregate::Content;
use contracts::domain::a003_campaign::aggregate::Campaign;
use contracts::enums::classification::Classification;
use contracts::shared::format::round_half_up;
use contracts::shared::funnel::{best_per_stage, Creative, FunnelMetric};
use contracts::shared::metrics::{budget_percentage, cost_per_engagement, cost_per_follower};

use crate::system::initialization::AppState;

/// Load every collection and build the dashboard overview
pub async fn get_overview(state: &AppState) -> Result<OverviewResponse> {
    let projects = state.projects.list().await.context("Cannot load projects")?;
    let contents = state.contents.list().await.context("Cannot load contents")?;
    let campaigns = state.campaigns.list().await.context("Cannot load campaigns")?;

    tracing::debug!(
        "Overview over {} projects, {} contents, {} campaigns",
        projects.len(),
        contents.len(),
        campaigns.len()
    );

    Ok(build_overview(&projects, &contents, &campaigns))
}

pub fn build_overview(
    projects: &[Project],
    contents: &[Content],
    campaigns: &[Campaign],
) -> OverviewResponse {
    let acquisition: Vec<&Content> = contents
        .iter()
        .filter(|c| c.classification == Classification::C1)
        .collect();

    // Contents that lost followers do not cancel out the others
    let followers_gained: i64 = acquisition
        .iter()
        .map(|c| c.new_followers().max(0))
        .sum();
    let acquisition_spend: f64 = acquisition.iter().map(|c| c.amount_spent).sum();

    let total_spend: f64 = projects.iter().map(|p| p.current_spend).sum();
    let total_budget: f64 = projects.iter().map(|p| p.monthly_budget).sum();

    let total_invested = contents.iter().map(|c| c.amount_spent).sum::<f64>()
        + campaigns.iter().map(|c| c.amount_spent).sum::<f64>();

    let stats = OverviewStats {
        followers_gained,
        average_cost_per_follower: cost_per_follower(acquisition_spend, 0, followers_gained),
        active_campaigns: campaigns.len(),
        budget_percentage: budget_percentage(total_spend, total_budget),
        total_invested,
    };

    let creatives = contents
        .iter()
        .filter_map(content_creative)
        .chain(campaigns.iter().filter_map(campaign_creative))
        .collect();

    OverviewResponse {
        stats,
        best_creatives: best_per_stage(creatives),
    }
}

fn content_creative(content: &Content) -> Option<Creative> {
    let metric = content.funnel_metric()?;
    let cost = match metric {
        FunnelMetric::Followers { .. } => content.cost_per_follower(),
        _ => cost_per_engagement(content.amount_spent, content.reach, content.engagement),
    };
    Some(Creative::new(
        creative_code(&content.content_id, &content.name),
        performance(metric, content.reach),
        cost,
        metric,
    ))
}

fn campaign_creative(campaign: &Campaign) -> Option<Creative> {
    let metric = campaign.funnel_metric()?;
    Some(Creative::new(
        creative_code(&campaign.content_id, &campaign.name),
        performance(metric, campaign.reach),
        cost_per_engagement(campaign.amount_spent, campaign.reach, campaign.engagement),
        metric,
    ))
}

fn creative_code(code: &str, name: &str) -> String {
    if code.trim().is_empty() {
        name.to_string()
    } else {
        code.trim().to_string()
    }
}

/// Score in 0..=100. Follower gain is scored against reach.
fn performance(metric: FunnelMetric, reach: i64) -> u8 {
    let score = match metric {
        FunnelMetric::Followers { gained } => {
            if reach <= 0 {
                return 0;
            }
            gained as f64 / reach as f64 * 100.0
        }
        FunnelMetric::Engagement { percent }
        | FunnelMetric::ThruPlay { percent }
        | FunnelMetric::Completion { percent } => percent,
    };
    if !score.is_finite() {
        return 0;
    }
    round_half_up(score.clamp(0.0, 100.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::seed;

    #[test]
    fn test_overview_over_sample_data() {
        let overview = build_overview(&seed::projects(), &seed::contents(), &seed::campaigns());
        let stats = &overview.stats;

        assert_eq!(stats.followers_gained, 230);
        // 84.65 / 230
        assert_eq!(stats.average_cost_per_follower, "0.37");
        assert_eq!(stats.active_campaigns, 2);
        // 9850 / 11500
        assert_eq!(stats.budget_percentage, 86);
        assert!((stats.total_invested - 974.65).abs() < 1e-9);

        let codes: Vec<&str> = overview.best_creatives.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["C001", "C002", "C003"]);
        assert_eq!(overview.best_creatives[1].performance, 12);
        assert_eq!(overview.best_creatives[1].cost, "0.29");
        assert_eq!(overview.best_creatives[2].metric, FunnelMetric::ThruPlay { percent: 82.1 });
        assert_eq!(overview.best_creatives[0].label, "145 seguidores");
        assert_eq!(overview.best_creatives[2].label, "82.1% thruplay");
    }

    #[test]
    fn test_empty_overview() {
        let overview = build_overview(&[], &[], &[]);
        assert_eq!(overview.stats.followers_gained, 0);
        assert_eq!(overview.stats.average_cost_per_follower, "0.00");
        assert_eq!(overview.stats.budget_percentage, 0);
        assert!(overview.best_creatives.is_empty());
    }

    #[test]
    fn test_lost_followers_are_not_subtracted() {
        let mut contents = seed::contents();
        contents[1].followers_after = contents[1].followers_before - 50;
        let overview = build_overview(&[], &contents, &[]);
        assert_eq!(overview.stats.followers_gained, 145);
    }

    #[test]
    fn test_performance_is_clamped() {
        assert_eq!(performance(FunnelMetric::Engagement { percent: 140.0 }, 10), 100);
        assert_eq!(performance(FunnelMetric::Completion { percent: -3.0 }, 10), 0);
        assert_eq!(performance(FunnelMetric::Followers { gained: 50 }, 0), 0);
        assert_eq!(performance(FunnelMetric::Followers { gained: 50 }, 200), 25);
    }

    #[tokio::test]
    async fn test_get_overview_from_seeded_state() {
        let state = AppState::seeded();
        let overview = get_overview(&state).await.unwrap();
        assert_eq!(overview.stats.active_campaigns, 2);
        assert_eq!(overview.best_creatives.len(), 3);
    }
}
