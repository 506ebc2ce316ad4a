mod policy;
mod rules;

use super::answers::QuestionnaireAnswers;
use super::recommendation::Recommendation;
use serde::{Deserialize, Serialize};

pub use policy::{
    DEVELOPMENT_ROUTINE, HYBRID_SUGGESTION, LONG_IRON_SUGGESTION, NOT_RECOMMENDED_REASON,
    RECOMMENDED_REASON, RECOMMENDED_ROUTINE,
};
pub use rules::{
    AGGRESSIVE_STYLE_REASON, CONSERVATIVE_STYLE_REASON, MODERATE_DISTANCE_REASON,
    SHORT_DISTANCE_REASON, STRONG_DISTANCE_REASON,
};

/// Score thresholds separating the recommendation branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Minimum confidence score (inclusive) for recommending a 2-iron.
    pub recommend_at: i32,
    /// Minimum score (inclusive) for suggesting a 3 or 4 iron over a hybrid.
    pub long_iron_suggestion_at: i32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            recommend_at: 7,
            long_iron_suggestion_at: 5,
        }
    }
}

/// Questionnaire signal contributing to the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Handicap,
    Experience,
    LongIronAbility,
    PracticeFrequency,
    SevenIronDistance,
    PlayingStyle,
}

impl Signal {
    pub const fn label(self) -> &'static str {
        match self {
            Signal::Handicap => "handicap",
            Signal::Experience => "experience",
            Signal::LongIronAbility => "long-iron ability",
            Signal::PracticeFrequency => "practice frequency",
            Signal::SevenIronDistance => "7-iron distance",
            Signal::PlayingStyle => "playing style",
        }
    }
}

/// Discrete contribution of one signal, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: Signal,
    pub points: i32,
    pub reason: Option<String>,
}

/// Stateless scorer mapping answers to a recommendation.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn score(&self, answers: &QuestionnaireAnswers) -> Recommendation {
        let (components, total) = rules::score_answers(answers);
        let reasons = components
            .into_iter()
            .filter_map(|component| component.reason)
            .collect();
        policy::decide(&self.policy, total, reasons)
    }

    /// Per-signal contributions in evaluation order.
    pub fn breakdown(&self, answers: &QuestionnaireAnswers) -> Vec<ScoreComponent> {
        rules::score_answers(answers).0
    }
}

/// Scores answers with the default thresholds.
pub fn score(answers: &QuestionnaireAnswers) -> Recommendation {
    ScoringEngine::default().score(answers)
}
