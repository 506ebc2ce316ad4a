use serde::{Deserialize, Serialize};

/// Scored outcome returned to the visitor and forwarded to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub is_recommended: bool,
    pub main_reason: String,
    pub additional_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_suggestion: Option<String>,
    pub practice_routine: Vec<String>,
    pub confidence_score: i32,
}

impl Recommendation {
    /// One-line summary used in logs and the CLI.
    pub fn headline(&self) -> String {
        let verdict = if self.is_recommended {
            "2-iron recommended"
        } else {
            "2-iron not recommended"
        };
        format!("{verdict} (confidence {})", self.confidence_score)
    }
}
