use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use two_iron::config::EmailConfig;
use two_iron::email::BrevoClient;
use two_iron::error::AppError;
use two_iron::questionnaire::QuestionnaireAnswers;
use two_iron::submission::{
    FollowUpContact, LoggingNotifier, NotifierError, RecommendationEmail, RecommendationNotifier,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Notifier selected from configuration at startup.
pub(crate) enum ConfiguredNotifier {
    Brevo(BrevoClient),
    DryRun(LoggingNotifier),
}

impl ConfiguredNotifier {
    pub(crate) fn from_config(config: &EmailConfig) -> Self {
        match BrevoClient::from_config(config) {
            Some(client) => {
                tracing::info!(
                    base_url = %config.base_url,
                    "delivering recommendations through brevo"
                );
                Self::Brevo(client)
            }
            None => {
                tracing::warn!(
                    "BREVO_API_KEY not set; recommendation emails will only be logged"
                );
                Self::DryRun(LoggingNotifier)
            }
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Brevo(_) => "brevo",
            Self::DryRun(_) => "dry_run",
        }
    }
}

#[async_trait]
impl RecommendationNotifier for ConfiguredNotifier {
    async fn send_recommendation(&self, email: &RecommendationEmail) -> Result<(), NotifierError> {
        match self {
            Self::Brevo(client) => client.send_recommendation(email).await,
            Self::DryRun(logger) => logger.send_recommendation(email).await,
        }
    }

    async fn register_follow_up(&self, contact: &FollowUpContact) -> Result<(), NotifierError> {
        match self {
            Self::Brevo(client) => client.register_follow_up(contact).await,
            Self::DryRun(logger) => logger.register_follow_up(contact).await,
        }
    }
}

pub(crate) fn read_answers(path: &Path) -> Result<QuestionnaireAnswers, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_selects_dry_run() {
        let notifier = ConfiguredNotifier::from_config(&EmailConfig::default());
        assert_eq!(notifier.label(), "dry_run");
    }

    #[test]
    fn read_answers_reports_missing_file() {
        let error = read_answers(Path::new("does-not-exist/answers.json"))
            .expect_err("missing file");
        assert!(matches!(error, AppError::Io(_)));
    }
}
