//! Questionnaire answers, the recommendation record, and the scoring engine
//! that maps one to the other.

pub mod answers;
pub mod recommendation;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use answers::{
    Experience, Handicap, IronDistances, LongIronAbility, PracticeFrequency,
    QuestionnaireAnswers, StyleClass, PLAYING_STYLE_OPTIONS, STRUGGLE_OPTIONS,
};
pub use recommendation::Recommendation;
pub use scoring::{score, ScoreComponent, ScoringEngine, ScoringPolicy, Signal};
