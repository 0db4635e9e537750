//! Sample records for the in-memory store

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::a002_content::aggregate::{Content, ContentId};
use contracts::domain::a003_campaign::aggregate::{Campaign, CampaignId, RetentionCurve};
use contracts::enums::classification::Classification;
use contracts::shared::metrics::cost_per_engagement;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Stored cost per engagement, as the campaign dialog computes it
fn stored_cost(amount_spent: f64, reach: i64, engagement: f64) -> f64 {
    cost_per_engagement(amount_spent, reach, engagement)
        .parse()
        .unwrap_or(0.0)
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            name: "Projeto Alpha".into(),
            monthly_budget: 5000.0,
            current_spend: 4500.0,
            status: "active".into(),
            created_at: at(2025, 1, 2),
        },
        Project {
            id: ProjectId(2),
            name: "Projeto Beta".into(),
            monthly_budget: 4500.0,
            current_spend: 5000.0,
            status: "active".into(),
            created_at: at(2025, 1, 3),
        },
        Project {
            id: ProjectId(3),
            name: "Projeto Gamma".into(),
            monthly_budget: 2000.0,
            current_spend: 350.0,
            status: "paused".into(),
            created_at: at(2025, 1, 4),
        },
    ]
}

pub fn contents() -> Vec<Content> {
    let base = |id: i64, code: &str, classification: Classification| Content {
        id: ContentId(id),
        name: format!("Conteúdo {code}"),
        project_id: ProjectId(1),
        classification,
        reach: 0,
        engagement: 0.0,
        followers_before: 0,
        followers_after: 0,
        start_date: date(2025, 1, 10),
        end_date: date(2025, 1, 17),
        amount_spent: 0.0,
        cpm: 0.0,
        content_id: code.into(),
        created_at: at(2025, 1, 10),
    };

    vec![
        Content {
            reach: 15200,
            engagement: 6.1,
            followers_before: 12000,
            followers_after: 12145,
            amount_spent: 46.4,
            cpm: 3.05,
            ..base(1, "C001", Classification::C1)
        },
        Content {
            reach: 9800,
            engagement: 4.2,
            followers_before: 12145,
            followers_after: 12230,
            amount_spent: 38.25,
            cpm: 3.9,
            created_at: at(2025, 1, 12),
            ..base(2, "C007", Classification::C1)
        },
        Content {
            project_id: ProjectId(2),
            reach: 21000,
            engagement: 8.4,
            followers_before: 8000,
            followers_after: 7990,
            amount_spent: 120.0,
            cpm: 5.71,
            created_at: at(2025, 1, 14),
            ..base(3, "C042", Classification::C2)
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CampaignId(1),
            name: "Campanha Nutrir Q1".into(),
            project_id: ProjectId(1),
            content_id: "C002".into(),
            classification: Classification::C2,
            start_date: date(2025, 1, 21),
            end_date: date(2025, 1, 25),
            reach: 8920,
            engagement: 12.3,
            thruplay: 78.5,
            frequency: 2.1,
            amount_spent: 320.0,
            cost_per_engagement: stored_cost(320.0, 8920, 12.3),
            retention: RetentionCurve {
                reproduction_25: 85.2,
                reproduction_50: 72.8,
                reproduction_75: 58.3,
                reproduction_95: 42.1,
                reproduction_100: 35.7,
            },
            created_at: at(2025, 1, 21),
        },
        Campaign {
            id: CampaignId(2),
            name: "Campanha Consciência Beta".into(),
            project_id: ProjectId(2),
            content_id: "C003".into(),
            classification: Classification::C3,
            start_date: date(2025, 1, 18),
            end_date: date(2025, 1, 23),
            reach: 12450,
            engagement: 9.8,
            thruplay: 82.1,
            frequency: 1.8,
            amount_spent: 450.0,
            cost_per_engagement: stored_cost(450.0, 12450, 9.8),
            retention: RetentionCurve {
                reproduction_25: 88.9,
                reproduction_50: 76.2,
                reproduction_75: 64.1,
                reproduction_95: 48.7,
                reproduction_100: 41.3,
            },
            created_at: at(2025, 1, 18),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: Vec<i64> = contents().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(campaigns().iter().all(|c| c.classification.is_campaign_kind()));
    }

    #[test]
    fn test_campaign_costs_match_engine() {
        let costs: Vec<f64> = campaigns().iter().map(|c| c.cost_per_engagement).collect();
        assert_eq!(costs, vec![0.29, 0.37]);
    }
}
