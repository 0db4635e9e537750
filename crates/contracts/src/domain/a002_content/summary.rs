use serde::{Deserialize, Serialize};

use super::aggregate::Content;

/// Summary cards under the contents table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    pub count: usize,
    pub total_reach: i64,
    /// Signed: contents that lost followers pull the total down
    pub total_new_followers: i64,
    pub total_spent: f64,
}

impl ContentSummary {
    pub fn from_contents(contents: &[Content]) -> Self {
        Self {
            count: contents.len(),
            total_reach: contents.iter().map(|c| c.reach).sum(),
            total_new_followers: contents.iter().map(Content::new_followers).sum(),
            total_spent: contents.iter().map(|c| c.amount_spent).sum(),
        }
    }
}
