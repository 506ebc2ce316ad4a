use super::super::answers::{
    Experience, Handicap, LongIronAbility, PracticeFrequency, QuestionnaireAnswers, StyleClass,
};
use super::{ScoreComponent, Signal};

pub const STRONG_DISTANCE_REASON: &str =
    "Your 7-iron distance indicates you have the power needed for a 2-iron";
pub const MODERATE_DISTANCE_REASON: &str =
    "Your 7-iron distance suggests you might have enough power for a 2-iron";
pub const SHORT_DISTANCE_REASON: &str =
    "Your current 7-iron distance suggests you might need more swing speed for a 2-iron";
pub const AGGRESSIVE_STYLE_REASON: &str =
    "Your aggressive playing style could benefit from a 2-iron's versatility";
pub const CONSERVATIVE_STYLE_REASON: &str =
    "While you prefer conservative play, a 2-iron could still be valuable for certain situations";

const STRONG_DISTANCE_YARDS: i64 = 170;
const MODERATE_DISTANCE_YARDS: i64 = 150;

pub(crate) fn handicap_points(handicap: &Handicap) -> i32 {
    match handicap {
        Handicap::Beginner => 0,
        Handicap::TwentyToThirty => 1,
        Handicap::TenToTwenty => 2,
        Handicap::FiveToTen => 3,
        Handicap::BelowFive => 4,
        Handicap::Scratch => 5,
        Handicap::Unrecognized(_) => 0,
    }
}

pub(crate) fn experience_points(experience: &Experience) -> i32 {
    match experience {
        Experience::UnderOneYear => 0,
        Experience::OneToThreeYears => 1,
        Experience::ThreeToFiveYears => 2,
        Experience::FiveToTenYears => 3,
        Experience::OverTenYears => 4,
        Experience::Unrecognized(_) => 0,
    }
}

pub(crate) fn strength_points(ability: &LongIronAbility) -> i32 {
    match ability {
        LongIronAbility::Struggles => 0,
        LongIronAbility::ComfortableWithFourIron => 2,
        LongIronAbility::Strength | LongIronAbility::FightABear => 3,
        LongIronAbility::Unrecognized(_) => 0,
    }
}

pub(crate) fn practice_points(frequency: &PracticeFrequency) -> i32 {
    match frequency {
        PracticeFrequency::Daily => 3,
        PracticeFrequency::Weekly => 2,
        PracticeFrequency::Monthly => 1,
        PracticeFrequency::SpecialOccasions => 0,
        PracticeFrequency::Unrecognized(_) => 0,
    }
}

fn seven_iron_component(yards: i64) -> ScoreComponent {
    let (points, reason) = if yards >= STRONG_DISTANCE_YARDS {
        (3, Some(STRONG_DISTANCE_REASON))
    } else if yards >= MODERATE_DISTANCE_YARDS {
        (2, Some(MODERATE_DISTANCE_REASON))
    } else if yards > 0 {
        (-1, Some(SHORT_DISTANCE_REASON))
    } else {
        (0, None)
    };

    ScoreComponent {
        signal: Signal::SevenIronDistance,
        points,
        reason: reason.map(str::to_string),
    }
}

fn style_component(class: StyleClass) -> ScoreComponent {
    let (points, reason) = match class {
        StyleClass::Aggressive => (1, Some(AGGRESSIVE_STYLE_REASON)),
        StyleClass::Conservative => (0, Some(CONSERVATIVE_STYLE_REASON)),
        StyleClass::Neutral => (0, None),
    };

    ScoreComponent {
        signal: Signal::PlayingStyle,
        points,
        reason: reason.map(str::to_string),
    }
}

fn silent(signal: Signal, points: i32) -> ScoreComponent {
    ScoreComponent {
        signal,
        points,
        reason: None,
    }
}

/// Evaluates every signal in a fixed order. Reason order in the final
/// recommendation follows this order.
pub(crate) fn score_answers(answers: &QuestionnaireAnswers) -> (Vec<ScoreComponent>, i32) {
    let components = vec![
        silent(Signal::Handicap, handicap_points(&answers.handicap)),
        silent(Signal::Experience, experience_points(&answers.experience)),
        silent(Signal::LongIronAbility, strength_points(&answers.strength)),
        silent(
            Signal::PracticeFrequency,
            practice_points(&answers.practice_frequency),
        ),
        seven_iron_component(answers.typical_iron_distances.seven_iron_yards()),
        style_component(answers.style_class()),
    ];

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}
