//! Per-stage success metrics.
//!
//! Every funnel stage is judged by a different number: follower gain for
//! C1, engagement for C2, ThruPlay for C3 and completion for C4. The metric
//! carries its own stage, so the tag and the payload can never disagree.

use serde::{Deserialize, Serialize};

use crate::enums::classification::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FunnelMetric {
    Followers { gained: i64 },
    Engagement { percent: f64 },
    ThruPlay { percent: f64 },
    Completion { percent: f64 },
}

impl FunnelMetric {
    pub fn classification(&self) -> Classification {
        match self {
            FunnelMetric::Followers { .. } => Classification::C1,
            FunnelMetric::Engagement { .. } => Classification::C2,
            FunnelMetric::ThruPlay { .. } => Classification::C3,
            FunnelMetric::Completion { .. } => Classification::C4,
        }
    }

    /// Secondary line of a creative card, e.g. "145 seguidores"
    pub fn label(&self) -> String {
        match self {
            FunnelMetric::Followers { gained } => format!("{} seguidores", gained),
            FunnelMetric::Engagement { percent } => format!("{}% eng.", percent),
            FunnelMetric::ThruPlay { percent } => format!("{}% thruplay", percent),
            FunnelMetric::Completion { percent } => format!("{}% compl.", percent),
        }
    }
}

/// One entry of the "best creatives" ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    /// Business code of the content, e.g. "C001"
    pub code: String,
    /// Score in 0..=100
    pub performance: u8,
    /// Stage cost, two decimals
    pub cost: String,
    pub metric: FunnelMetric,
    /// Secondary card line, see `FunnelMetric::label`
    pub label: String,
}

impl Creative {
    pub fn new(code: String, performance: u8, cost: String, metric: FunnelMetric) -> Self {
        Self {
            label: metric.label(),
            code,
            performance,
            cost,
            metric,
        }
    }

    pub fn classification(&self) -> Classification {
        self.metric.classification()
    }
}

/// Best performance first. Equal scores keep their input order.
pub fn rank_creatives(mut creatives: Vec<Creative>) -> Vec<Creative> {
    creatives.sort_by(|a, b| b.performance.cmp(&a.performance));
    creatives
}

/// Best creative of every stage that has one, in stage order
pub fn best_per_stage(creatives: Vec<Creative>) -> Vec<Creative> {
    let ranked = rank_creatives(creatives);
    Classification::all()
        .into_iter()
        .filter_map(|stage| ranked.iter().find(|c| c.classification() == stage).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creative(code: &str, performance: u8, metric: FunnelMetric) -> Creative {
        Creative::new(code.into(), performance, "0.30".into(), metric)
    }

    #[test]
    fn test_metric_stage_and_label() {
        let cases = [
            (FunnelMetric::Followers { gained: 145 }, Classification::C1, "145 seguidores"),
            (FunnelMetric::Engagement { percent: 8.4 }, Classification::C2, "8.4% eng."),
            (FunnelMetric::ThruPlay { percent: 78.0 }, Classification::C3, "78% thruplay"),
            (FunnelMetric::Completion { percent: 65.0 }, Classification::C4, "65% compl."),
        ];
        for (metric, stage, label) in cases {
            assert_eq!(metric.classification(), stage);
            assert_eq!(metric.label(), label);
        }
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let ranked = rank_creatives(vec![
            creative("C015", 81, FunnelMetric::Completion { percent: 65.0 }),
            creative("C001", 92, FunnelMetric::Followers { gained: 145 }),
            creative("C023", 85, FunnelMetric::ThruPlay { percent: 78.0 }),
            creative("C024", 85, FunnelMetric::ThruPlay { percent: 70.0 }),
        ]);
        let codes: Vec<&str> = ranked.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["C001", "C023", "C024", "C015"]);
    }

    #[test]
    fn test_best_per_stage() {
        let best = best_per_stage(vec![
            creative("C002", 40, FunnelMetric::Engagement { percent: 4.0 }),
            creative("C042", 88, FunnelMetric::Engagement { percent: 8.4 }),
            creative("C001", 92, FunnelMetric::Followers { gained: 145 }),
        ]);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].code, "C001");
        assert_eq!(best[1].code, "C042");
        assert_eq!(best[1].label, "8.4% eng.");
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(FunnelMetric::ThruPlay { percent: 78.5 }).unwrap();
        assert_eq!(json["kind"], "thru_play");
        assert_eq!(json["percent"], 78.5);
    }
}
