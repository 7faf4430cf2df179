use serde::Serialize;

/// Account metadata for one campaign member.
#[derive(Debug, Clone, Serialize)]
pub struct Annotator {
    pub username: String,
    pub is_active: bool,
    pub is_staff: bool,
}

impl Annotator {
    pub fn new(username: &str, is_active: bool, is_staff: bool) -> Self {
        Self {
            username: username.to_string(),
            is_active,
            is_staff,
        }
    }
}
