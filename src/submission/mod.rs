//! Questionnaire submission: score the answers, email the result, and enrol
//! the golfer for follow-up.

pub mod notifier;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use notifier::{
    FollowUpContact, LoggingNotifier, NotifierError, RecommendationEmail, RecommendationNotifier,
};
pub use router::{submission_router, GENERIC_FAILURE, SUBMIT_PATH};
pub use service::{SubmissionError, SubmissionService};
