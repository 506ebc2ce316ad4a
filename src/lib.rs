//! Two-iron readiness questionnaire: scoring, submission delivery, and the
//! client-side wizard model.

pub mod analytics;
pub mod config;
pub mod email;
pub mod error;
pub mod questionnaire;
pub mod submission;
pub mod telemetry;
pub mod wizard;
