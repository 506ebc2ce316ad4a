use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::questionnaire::{
    Experience, Handicap, IronDistances, LongIronAbility, PracticeFrequency,
    QuestionnaireAnswers, ScoringEngine, PLAYING_STYLE_OPTIONS,
};
use crate::submission::notifier::{
    FollowUpContact, NotifierError, RecommendationEmail, RecommendationNotifier,
};
use crate::submission::{submission_router, SubmissionService};

pub(super) fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        name: "Jordan".to_string(),
        email: "jordan@example.com".to_string(),
        handicap: Handicap::Scratch,
        experience: Experience::OverTenYears,
        height: "6'1\"".to_string(),
        strength: LongIronAbility::FightABear,
        swing_speed: "112 mph".to_string(),
        typical_iron_distances: IronDistances {
            seven_iron: "175".to_string(),
            four_iron: "210".to_string(),
        },
        playing_style: PLAYING_STYLE_OPTIONS[2].to_string(),
        current_struggles: Vec::new(),
        practice_frequency: PracticeFrequency::Daily,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Delivery {
    Email(RecommendationEmail),
    FollowUp(FollowUpContact),
}

/// Records deliveries and optionally fails one of the two steps.
#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    fail_email: bool,
    fail_follow_up: bool,
}

impl MemoryNotifier {
    pub(super) fn failing_email() -> Self {
        Self {
            fail_email: true,
            ..Self::default()
        }
    }

    pub(super) fn failing_follow_up() -> Self {
        Self {
            fail_follow_up: true,
            ..Self::default()
        }
    }

    pub(super) fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .expect("notifier mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl RecommendationNotifier for MemoryNotifier {
    async fn send_recommendation(&self, email: &RecommendationEmail) -> Result<(), NotifierError> {
        if self.fail_email {
            return Err(NotifierError::Rejected {
                status: 401,
                body: "unauthorized".to_string(),
            });
        }
        self.deliveries
            .lock()
            .expect("notifier mutex poisoned")
            .push(Delivery::Email(email.clone()));
        Ok(())
    }

    async fn register_follow_up(&self, contact: &FollowUpContact) -> Result<(), NotifierError> {
        if self.fail_follow_up {
            return Err(NotifierError::Transport("connection reset".to_string()));
        }
        self.deliveries
            .lock()
            .expect("notifier mutex poisoned")
            .push(Delivery::FollowUp(contact.clone()));
        Ok(())
    }
}

pub(super) fn build_service(
    notifier: MemoryNotifier,
) -> (SubmissionService<MemoryNotifier>, Arc<MemoryNotifier>) {
    let notifier = Arc::new(notifier);
    let service = SubmissionService::new(notifier.clone(), ScoringEngine::default())
        .with_clock(fixed_clock);
    (service, notifier)
}

pub(super) fn router_with_service(service: SubmissionService<MemoryNotifier>) -> axum::Router {
    submission_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
