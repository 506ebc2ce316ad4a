use proptest::prelude::*;
use proptest::sample::select;
use serde_json::json;
use two_iron::questionnaire::scoring::{
    AGGRESSIVE_STYLE_REASON, HYBRID_SUGGESTION, RECOMMENDED_ROUTINE, STRONG_DISTANCE_REASON,
};
use two_iron::questionnaire::{
    score, Experience, Handicap, IronDistances, LongIronAbility, PracticeFrequency,
    QuestionnaireAnswers, ScoringEngine, PLAYING_STYLE_OPTIONS,
};

fn answers_from(document: serde_json::Value) -> QuestionnaireAnswers {
    serde_json::from_value(document).expect("answers document parses")
}

#[test]
fn seasoned_golfer_document_is_recommended() {
    let answers = answers_from(json!({
        "name": "Alex",
        "email": "alex@example.com",
        "handicap": "Scratch or better",
        "experience": "10+ years",
        "height": "6'0\"",
        "strength": "I could probably fight a bear",
        "swingSpeed": "",
        "typicalIronDistances": { "sevenIron": "175", "fourIron": "" },
        "playingStyle": PLAYING_STYLE_OPTIONS[2],
        "currentStruggles": [],
        "practiceFrequency": "Daily grinder"
    }));

    let recommendation = score(&answers);

    assert!(recommendation.is_recommended);
    assert_eq!(recommendation.confidence_score, 19);
    assert_eq!(
        recommendation.additional_reasons,
        vec![
            STRONG_DISTANCE_REASON.to_string(),
            AGGRESSIVE_STYLE_REASON.to_string()
        ]
    );
    assert_eq!(recommendation.practice_routine, RECOMMENDED_ROUTINE.to_vec());
    assert!(recommendation.alternative_suggestion.is_none());
}

#[test]
fn beginner_document_is_steered_to_hybrid() {
    let answers = answers_from(json!({
        "name": "Blair",
        "email": "blair@example.com",
        "handicap": "Beginner (30+)",
        "experience": "Less than 1 year",
        "height": "5'5\"",
        "strength": "I struggle with long irons",
        "typicalIronDistances": { "sevenIron": "120" },
        "playingStyle": PLAYING_STYLE_OPTIONS[1],
        "practiceFrequency": "Special occasions only"
    }));

    let recommendation = score(&answers);

    assert!(!recommendation.is_recommended);
    assert_eq!(recommendation.confidence_score, -1);
    assert_eq!(recommendation.additional_reasons.len(), 1);
    assert_eq!(
        recommendation.alternative_suggestion.as_deref(),
        Some(HYBRID_SUGGESTION)
    );
    assert_eq!(recommendation.practice_routine.len(), 3);
}

fn option_or_noise<T>(options: &'static [T], parse: fn(&str) -> T) -> BoxedStrategy<T>
where
    T: Clone + std::fmt::Debug + 'static,
{
    prop_oneof![
        3 => select(options.to_vec()),
        1 => "[A-Za-z0-9 +-]{0,16}".prop_map(move |raw| parse(&raw)),
    ]
    .boxed()
}

fn answers_strategy() -> impl Strategy<Value = QuestionnaireAnswers> {
    let distance = prop_oneof![
        "[0-9]{0,3}",
        "[0-9]{1,3}[a-z ]{0,4}",
        "[a-z ]{0,6}",
    ];
    let style = prop_oneof![
        select(PLAYING_STYLE_OPTIONS.to_vec()).prop_map(str::to_string),
        "[A-Za-z ]{0,24}",
    ];

    (
        option_or_noise(Handicap::OPTIONS, Handicap::parse),
        option_or_noise(Experience::OPTIONS, Experience::parse),
        option_or_noise(LongIronAbility::OPTIONS, LongIronAbility::parse),
        option_or_noise(PracticeFrequency::OPTIONS, PracticeFrequency::parse),
        distance,
        style,
    )
        .prop_map(
            |(handicap, experience, strength, practice_frequency, seven_iron, playing_style)| {
                QuestionnaireAnswers {
                    name: "Prop".to_string(),
                    email: "prop@example.com".to_string(),
                    handicap,
                    experience,
                    height: "5'10\"".to_string(),
                    strength,
                    swing_speed: String::new(),
                    typical_iron_distances: IronDistances {
                        seven_iron,
                        four_iron: String::new(),
                    },
                    playing_style,
                    current_struggles: Vec::new(),
                    practice_frequency,
                }
            },
        )
}

proptest! {
    #[test]
    fn scoring_is_deterministic(answers in answers_strategy()) {
        let engine = ScoringEngine::default();
        prop_assert_eq!(engine.score(&answers), engine.score(&answers.clone()));
    }

    #[test]
    fn recommendation_follows_threshold(answers in answers_strategy()) {
        let recommendation = score(&answers);

        prop_assert_eq!(recommendation.is_recommended, recommendation.confidence_score >= 7);
        prop_assert_eq!(
            recommendation.alternative_suggestion.is_some(),
            !recommendation.is_recommended
        );
        let expected_routine = if recommendation.is_recommended { 4 } else { 3 };
        prop_assert_eq!(recommendation.practice_routine.len(), expected_routine);
    }

    #[test]
    fn confidence_is_the_sum_of_the_breakdown(answers in answers_strategy()) {
        let engine = ScoringEngine::default();
        let breakdown = engine.breakdown(&answers);
        let total: i32 = breakdown.iter().map(|component| component.points).sum();
        let reasons: Vec<String> = breakdown
            .into_iter()
            .filter_map(|component| component.reason)
            .collect();

        let recommendation = engine.score(&answers);
        prop_assert_eq!(recommendation.confidence_score, total);
        prop_assert_eq!(recommendation.additional_reasons, reasons);
    }
}
