use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::notifier::RecommendationNotifier;
use super::service::SubmissionService;
use crate::questionnaire::QuestionnaireAnswers;

pub const SUBMIT_PATH: &str = "/api/submit";
pub const GENERIC_FAILURE: &str = "Failed to process submission";

/// Router exposing the questionnaire submission endpoint.
pub fn submission_router<N>(service: Arc<SubmissionService<N>>) -> Router
where
    N: RecommendationNotifier + 'static,
{
    Router::new()
        .route(SUBMIT_PATH, post(submit_handler::<N>))
        .with_state(service)
}

fn failure() -> Response {
    let payload = json!({
        "success": false,
        "error": GENERIC_FAILURE,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<N>(
    State(service): State<Arc<SubmissionService<N>>>,
    payload: Result<Json<QuestionnaireAnswers>, JsonRejection>,
) -> Response
where
    N: RecommendationNotifier + 'static,
{
    let answers = match payload {
        Ok(Json(answers)) => answers,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected submission body");
            return failure();
        }
    };

    match service.submit(answers).await {
        Ok(recommendation) => {
            let payload = json!({
                "success": true,
                "recommendation": recommendation,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            tracing::error!(step = error.step(), error = %error, "submission failed");
            failure()
        }
    }
}
