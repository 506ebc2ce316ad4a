use super::super::recommendation::Recommendation;
use super::ScoringPolicy;

pub const RECOMMENDED_REASON: &str =
    "Based on your skill level, experience, and power, you're ready for the challenge of a 2-iron!";
pub const NOT_RECOMMENDED_REASON: &str =
    "A 2-iron might be challenging for your current game.";
pub const LONG_IRON_SUGGESTION: &str =
    "Consider starting with a 3 or 4 iron to build confidence with long irons";
pub const HYBRID_SUGGESTION: &str =
    "A hybrid would be a better fit for your game right now";

pub const RECOMMENDED_ROUTINE: [&str; 4] = [
    "Start with half-swing punch shots to build confidence",
    "Practice with alignment sticks to ensure proper path",
    "Gradually increase swing speed as you gain control",
    "Work on both low runners and higher trajectory shots",
];

pub const DEVELOPMENT_ROUTINE: [&str; 3] = [
    "Focus on building consistent contact with your mid-irons",
    "Work on increasing swing speed through proper technique",
    "Practice with your longest current iron to build confidence",
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

pub(crate) fn decide(
    policy: &ScoringPolicy,
    confidence_score: i32,
    additional_reasons: Vec<String>,
) -> Recommendation {
    if confidence_score >= policy.recommend_at {
        return Recommendation {
            is_recommended: true,
            main_reason: RECOMMENDED_REASON.to_string(),
            additional_reasons,
            alternative_suggestion: None,
            practice_routine: owned(&RECOMMENDED_ROUTINE),
            confidence_score,
        };
    }

    let suggestion = if confidence_score >= policy.long_iron_suggestion_at {
        LONG_IRON_SUGGESTION
    } else {
        HYBRID_SUGGESTION
    };

    Recommendation {
        is_recommended: false,
        main_reason: NOT_RECOMMENDED_REASON.to_string(),
        additional_reasons,
        alternative_suggestion: Some(suggestion.to_string()),
        practice_routine: owned(&DEVELOPMENT_ROUTINE),
        confidence_score,
    }
}
