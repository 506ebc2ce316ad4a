use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::questionnaire::{QuestionnaireAnswers, Recommendation};

/// Everything the recommendation email template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEmail {
    pub name: String,
    pub email: String,
    pub recommendation: Recommendation,
    pub answers: QuestionnaireAnswers,
}

/// Contact to enrol in the follow-up sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowUpContact {
    pub email: String,
    pub name: String,
    pub assessed_at: DateTime<Utc>,
}

/// Outbound delivery hooks used after a questionnaire is scored.
#[async_trait]
pub trait RecommendationNotifier: Send + Sync {
    async fn send_recommendation(&self, email: &RecommendationEmail) -> Result<(), NotifierError>;
    async fn register_follow_up(&self, contact: &FollowUpContact) -> Result<(), NotifierError>;
}

/// Delivery failure reported by a notifier.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("email transport unavailable: {0}")]
    Transport(String),
    #[error("email provider rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Logs deliveries instead of sending them. Used when no provider key is
/// configured outside production.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl RecommendationNotifier for LoggingNotifier {
    async fn send_recommendation(&self, email: &RecommendationEmail) -> Result<(), NotifierError> {
        tracing::info!(
            to = %email.email,
            is_recommended = email.recommendation.is_recommended,
            confidence_score = email.recommendation.confidence_score,
            "dry run: recommendation email not sent"
        );
        Ok(())
    }

    async fn register_follow_up(&self, contact: &FollowUpContact) -> Result<(), NotifierError> {
        tracing::info!(
            email = %contact.email,
            assessed_at = %contact.assessed_at,
            "dry run: follow-up contact not registered"
        );
        Ok(())
    }
}
