use super::task_kind::TaskKind;
use std::collections::BTreeSet;

/// One annotation campaign as stored in the database.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub kind: TaskKind,
    pub options: CampaignOptions,
}

/// Lowercase option tokens attached to a campaign (e.g. "mqm;esa").
///
/// The tokens only toggle metric and key derivation in the analytics core;
/// they carry no other behavior.
#[derive(Debug, Clone, Default)]
pub struct CampaignOptions {
    tokens: BTreeSet<String>,
}

impl CampaignOptions {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .to_lowercase()
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Original semicolon-joined form for storage.
    pub fn to_db_str(&self) -> String {
        self.tokens.iter().cloned().collect::<Vec<_>>().join(";")
    }
}
