use async_trait::async_trait;
use chrono::SecondsFormat;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::submission::{
    FollowUpContact, NotifierError, RecommendationEmail, RecommendationNotifier,
};

const SMTP_EMAIL_PATH: &str = "/v3/smtp/email";
const CONTACTS_PATH: &str = "/v3/contacts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRecipient {
    pub email: String,
    pub name: String,
}

/// Variables substituted into the recommendation template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParams {
    pub name: String,
    pub is_recommended: bool,
    pub main_reason: String,
    pub additional_reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_suggestion: Option<String>,
    pub practice_routine: Vec<String>,
    pub handicap: String,
    pub experience: String,
    pub playing_style: String,
}

/// Body of `POST /v3/smtp/email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpEmailRequest {
    pub template_id: i64,
    pub to: Vec<EmailRecipient>,
    pub params: TemplateParams,
}

impl SmtpEmailRequest {
    pub fn recommendation(template_id: i64, email: &RecommendationEmail) -> Self {
        let recommendation = &email.recommendation;
        Self {
            template_id,
            to: vec![EmailRecipient {
                email: email.email.clone(),
                name: email.name.clone(),
            }],
            params: TemplateParams {
                name: email.name.clone(),
                is_recommended: recommendation.is_recommended,
                main_reason: recommendation.main_reason.clone(),
                additional_reasons: recommendation.additional_reasons.clone(),
                alternative_suggestion: recommendation.alternative_suggestion.clone(),
                practice_routine: recommendation.practice_routine.clone(),
                handicap: email.answers.handicap.label().to_string(),
                experience: email.answers.experience.label().to_string(),
                playing_style: email.answers.playing_style.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContactAttributes {
    pub firstname: String,
    pub assessment_date: String,
}

/// Body of `POST /v3/contacts`; `update_enabled` makes it create-or-update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub email: String,
    pub attributes: ContactAttributes,
    pub list_ids: Vec<i64>,
    pub update_enabled: bool,
}

impl CreateContactRequest {
    pub fn follow_up(list_id: i64, contact: &FollowUpContact) -> Self {
        Self {
            email: contact.email.clone(),
            attributes: ContactAttributes {
                firstname: contact.name.clone(),
                assessment_date: contact
                    .assessed_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            list_ids: vec![list_id],
            update_enabled: true,
        }
    }
}

/// Brevo REST client implementing [`RecommendationNotifier`].
pub struct BrevoClient {
    api_key: SecretString,
    base_url: String,
    recommendation_template_id: i64,
    follow_up_list_id: i64,
    http_client: reqwest::Client,
}

impl BrevoClient {
    pub fn new(api_key: SecretString, config: &EmailConfig) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            recommendation_template_id: config.recommendation_template_id,
            follow_up_list_id: config.follow_up_list_id,
            http_client: reqwest::Client::new(),
        }
    }

    /// Builds a client when an API key is configured.
    pub fn from_config(config: &EmailConfig) -> Option<Self> {
        config
            .api_key
            .clone()
            .map(|api_key| Self::new(api_key, config))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), NotifierError> {
        let response = self
            .http_client
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .header("api-key", self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "brevo request rejected");
            return Err(NotifierError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(path, status = status.as_u16(), "brevo request accepted");
        Ok(())
    }
}

#[async_trait]
impl RecommendationNotifier for BrevoClient {
    async fn send_recommendation(&self, email: &RecommendationEmail) -> Result<(), NotifierError> {
        let request = SmtpEmailRequest::recommendation(self.recommendation_template_id, email);
        self.post(SMTP_EMAIL_PATH, &request).await
    }

    async fn register_follow_up(&self, contact: &FollowUpContact) -> Result<(), NotifierError> {
        let request = CreateContactRequest::follow_up(self.follow_up_list_id, contact);
        self.post(CONTACTS_PATH, &request).await
    }
}
