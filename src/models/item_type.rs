use serde::Serialize;

/// Tag assigned to every annotated item.
///
/// `Bad` covers both the plain `BAD` tag and the `BAD.<payload>` variants
/// used by ESA/MQM batches; the raw tag is kept because the payload after
/// the dot carries batch information.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ItemType {
    Tgt,
    Bad(String),
    Chk,
    Ref,
    Other(String),
}

impl ItemType {
    /// Convert DB string → enum. Unknown tags are preserved verbatim so they
    /// still count towards progress and timing.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "TGT" => ItemType::Tgt,
            "CHK" => ItemType::Chk,
            "REF" => ItemType::Ref,
            _ if s == "BAD" || s.starts_with("BAD.") => ItemType::Bad(s.to_string()),
            other => ItemType::Other(other.to_string()),
        }
    }

    /// Convert enum → DB string.
    pub fn to_db_str(&self) -> &str {
        match self {
            ItemType::Tgt => "TGT",
            ItemType::Bad(s) => s,
            ItemType::Chk => "CHK",
            ItemType::Ref => "REF",
            ItemType::Other(s) => s,
        }
    }

    pub fn is_target(&self) -> bool {
        matches!(self, ItemType::Tgt)
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, ItemType::Bad(_))
    }
}
