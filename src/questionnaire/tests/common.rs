use crate::questionnaire::answers::{
    Experience, Handicap, IronDistances, LongIronAbility, PracticeFrequency,
    QuestionnaireAnswers, PLAYING_STYLE_OPTIONS,
};
use crate::questionnaire::scoring::ScoringEngine;

pub(super) const BALANCED: &str = PLAYING_STYLE_OPTIONS[1];
pub(super) const AGGRESSIVE: &str = PLAYING_STYLE_OPTIONS[2];
pub(super) const CONSERVATIVE: &str = PLAYING_STYLE_OPTIONS[0];

/// Answers that contribute nothing: every table signal at zero, no distance,
/// neutral style.
pub(super) fn zero_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        name: "Casey".to_string(),
        email: "casey@example.com".to_string(),
        handicap: Handicap::Beginner,
        experience: Experience::UnderOneYear,
        height: "5'9\"".to_string(),
        strength: LongIronAbility::Struggles,
        swing_speed: String::new(),
        typical_iron_distances: IronDistances {
            seven_iron: String::new(),
            four_iron: String::new(),
        },
        playing_style: BALANCED.to_string(),
        current_struggles: Vec::new(),
        practice_frequency: PracticeFrequency::SpecialOccasions,
    }
}

pub(super) fn seasoned_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        handicap: Handicap::Scratch,
        experience: Experience::OverTenYears,
        strength: LongIronAbility::FightABear,
        practice_frequency: PracticeFrequency::Daily,
        typical_iron_distances: IronDistances {
            seven_iron: "175".to_string(),
            four_iron: "205".to_string(),
        },
        playing_style: AGGRESSIVE.to_string(),
        ..zero_answers()
    }
}

pub(super) fn beginner_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        typical_iron_distances: IronDistances {
            seven_iron: "120".to_string(),
            four_iron: String::new(),
        },
        current_struggles: vec!["Looking for a hybrid alternative".to_string()],
        ..zero_answers()
    }
}

pub(super) fn with_seven_iron(distance: &str) -> QuestionnaireAnswers {
    let mut answers = zero_answers();
    answers.typical_iron_distances.seven_iron = distance.to_string();
    answers
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}
