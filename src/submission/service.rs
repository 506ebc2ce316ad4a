use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::notifier::{FollowUpContact, NotifierError, RecommendationEmail, RecommendationNotifier};
use crate::questionnaire::{QuestionnaireAnswers, Recommendation, ScoringEngine};

type Clock = fn() -> DateTime<Utc>;

/// Scores a questionnaire and hands the result to the notifier.
pub struct SubmissionService<N> {
    notifier: Arc<N>,
    engine: Arc<ScoringEngine>,
    clock: Clock,
}

impl<N> SubmissionService<N>
where
    N: RecommendationNotifier + 'static,
{
    pub fn new(notifier: Arc<N>, engine: ScoringEngine) -> Self {
        Self {
            notifier,
            engine: Arc::new(engine),
            clock: Utc::now,
        }
    }

    /// Replaces the source of the follow-up assessment timestamp.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Score `answers`, send the recommendation email, then register the
    /// follow-up contact. The second call only runs once the first succeeded.
    pub async fn submit(
        &self,
        answers: QuestionnaireAnswers,
    ) -> Result<Recommendation, SubmissionError> {
        let recommendation = self.engine.score(&answers);
        tracing::debug!(
            confidence_score = recommendation.confidence_score,
            is_recommended = recommendation.is_recommended,
            "questionnaire scored"
        );

        let contact = FollowUpContact {
            email: answers.email.clone(),
            name: answers.name.clone(),
            assessed_at: (self.clock)(),
        };
        let email = RecommendationEmail {
            name: answers.name.clone(),
            email: answers.email.clone(),
            recommendation: recommendation.clone(),
            answers,
        };

        self.notifier
            .send_recommendation(&email)
            .await
            .map_err(SubmissionError::RecommendationEmail)?;

        self.notifier
            .register_follow_up(&contact)
            .await
            .map_err(SubmissionError::FollowUpRegistration)?;

        Ok(recommendation)
    }
}

/// Failure of one delivery step, tagged with the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("recommendation email failed: {0}")]
    RecommendationEmail(#[source] NotifierError),
    #[error("follow-up registration failed: {0}")]
    FollowUpRegistration(#[source] NotifierError),
}

impl SubmissionError {
    pub fn step(&self) -> &'static str {
        match self {
            SubmissionError::RecommendationEmail(_) => "recommendation_email",
            SubmissionError::FollowUpRegistration(_) => "follow_up_registration",
        }
    }
}
