use serde::{Deserialize, Serialize};

/// Funnel stage a content or campaign is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Follower acquisition
    C1,
    /// Audience nurture
    C2,
    /// Awareness
    C3,
    /// Conversion
    C4,
}

impl Classification {
    /// Code stored in the backend ("C1".."C4")
    pub fn code(&self) -> &'static str {
        match self {
            Classification::C1 => "C1",
            Classification::C2 => "C2",
            Classification::C3 => "C3",
            Classification::C4 => "C4",
        }
    }

    /// Human-readable stage name
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::C1 => "Atrair Seguidores",
            Classification::C2 => "Nutrir Audiência",
            Classification::C3 => "Elevar Consciência",
            Classification::C4 => "Conversão",
        }
    }

    pub fn all() -> Vec<Classification> {
        vec![
            Classification::C1,
            Classification::C2,
            Classification::C3,
            Classification::C4,
        ]
    }

    /// Follower acquisition is handled by contents, never by campaigns
    pub fn is_campaign_kind(&self) -> bool {
        !matches!(self, Classification::C1)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "C1" => Some(Classification::C1),
            "C2" => Some(Classification::C2),
            "C3" => Some(Classification::C3),
            "C4" => Some(Classification::C4),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
