use crate::infra::read_answers;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use two_iron::analytics::{dispatch, AnalyticsSink, TracingSink};
use two_iron::config::{AppEnvironment, TelemetryConfig};
use two_iron::error::AppError;
use two_iron::questionnaire::{
    Experience, Handicap, LongIronAbility, PracticeFrequency, Recommendation, ScoringEngine,
    PLAYING_STYLE_OPTIONS, STRUGGLE_OPTIONS,
};
use two_iron::telemetry;
use two_iron::wizard::{Advance, FieldKey, Wizard, WizardState};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a questionnaire answers JSON document
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the per-signal score breakdown
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Low handicap, long hitter, aggressive player
    #[default]
    Seasoned,
    /// New golfer still building a swing
    Beginner,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Canned golfer profile to feed through the wizard
    #[arg(long, value_enum, default_value_t = DemoProfile::Seasoned)]
    pub(crate) profile: DemoProfile,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, explain } = args;
    let answers = read_answers(&answers)?;
    let engine = ScoringEngine::default();

    let recommendation = engine.score(&answers);
    render_recommendation(&recommendation);

    if explain {
        println!("\nScore breakdown");
        for component in engine.breakdown(&answers) {
            match &component.reason {
                Some(reason) => println!(
                    "- {:<20} {:>+3}  {}",
                    component.signal.label(),
                    component.points,
                    reason
                ),
                None => println!("- {:<20} {:>+3}", component.signal.label(), component.points),
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    telemetry::init(
        &TelemetryConfig {
            log_level: "info".to_string(),
        },
        AppEnvironment::Development,
    )?;

    println!("2-iron questionnaire demo ({:?} golfer)", args.profile);
    match walk_wizard(args.profile, &TracingSink) {
        Ok(recommendation) => render_recommendation(&recommendation),
        Err(state) => {
            println!("Wizard stopped on step {}:", state.step + 1);
            for error in &state.field_errors {
                println!("- {}: {}", error.field, error.message);
            }
        }
    }
    Ok(())
}

fn profile_fields(profile: DemoProfile) -> (Vec<(FieldKey, String)>, Vec<&'static str>) {
    match profile {
        DemoProfile::Seasoned => (
            vec![
                (FieldKey::Name, "Morgan".to_string()),
                (FieldKey::Email, "morgan@example.com".to_string()),
                (FieldKey::Handicap, Handicap::Scratch.label().to_string()),
                (FieldKey::Experience, Experience::OverTenYears.label().to_string()),
                (FieldKey::Height, "6'1\"".to_string()),
                (FieldKey::Strength, LongIronAbility::FightABear.label().to_string()),
                (FieldKey::SwingSpeed, "114 mph".to_string()),
                (FieldKey::SevenIron, "178".to_string()),
                (FieldKey::FourIron, "212".to_string()),
                (FieldKey::PlayingStyle, PLAYING_STYLE_OPTIONS[2].to_string()),
                (
                    FieldKey::PracticeFrequency,
                    PracticeFrequency::Daily.label().to_string(),
                ),
            ],
            vec![STRUGGLE_OPTIONS[2]],
        ),
        DemoProfile::Beginner => (
            vec![
                (FieldKey::Name, "Riley".to_string()),
                (FieldKey::Email, "riley@example.com".to_string()),
                (FieldKey::Handicap, Handicap::Beginner.label().to_string()),
                (FieldKey::Experience, Experience::UnderOneYear.label().to_string()),
                (FieldKey::Height, "5'7\"".to_string()),
                (FieldKey::Strength, LongIronAbility::Struggles.label().to_string()),
                (FieldKey::SevenIron, "120".to_string()),
                (FieldKey::PlayingStyle, PLAYING_STYLE_OPTIONS[1].to_string()),
                (
                    FieldKey::PracticeFrequency,
                    PracticeFrequency::SpecialOccasions.label().to_string(),
                ),
            ],
            vec![STRUGGLE_OPTIONS[0], STRUGGLE_OPTIONS[4]],
        ),
    }
}

/// Fills every page for `profile`, advancing after each one, and scores the
/// submission locally. Returns the blocked state if a page fails validation.
pub(crate) fn walk_wizard(
    profile: DemoProfile,
    sink: &dyn AnalyticsSink,
) -> Result<Recommendation, WizardState> {
    let wizard = Wizard::default();
    let engine = ScoringEngine::default();
    let (fields, struggles) = profile_fields(profile);

    let (mut state, event) = wizard.start();
    dispatch(Some(sink), &event);

    loop {
        let page: Vec<FieldKey> = wizard
            .current_step(&state)
            .map(|step| step.fields.iter().map(|field| field.key).collect())
            .unwrap_or_default();

        for (key, value) in fields.iter().filter(|(key, _)| page.contains(key)) {
            state = wizard.update_field(state, *key, value);
        }
        if page.contains(&FieldKey::CurrentStruggles) {
            for option in &struggles {
                state = wizard.toggle_struggle(state, option, true);
            }
        }

        match wizard.advance(state) {
            Advance::Moved { state: next, event } => {
                dispatch(Some(sink), &event);
                state = next;
            }
            Advance::Submit {
                state: next,
                answers,
                event,
            } => {
                dispatch(Some(sink), &event);
                let recommendation = engine.score(&answers);
                let (_, event) = wizard.submission_succeeded(next, recommendation.clone());
                dispatch(Some(sink), &event);
                return Ok(recommendation);
            }
            Advance::Blocked { state } => return Err(state),
        }
    }
}

fn render_recommendation(recommendation: &Recommendation) {
    println!("\n{}", recommendation.headline());
    println!("{}", recommendation.main_reason);
    if !recommendation.additional_reasons.is_empty() {
        println!("\nWhy:");
        for reason in &recommendation.additional_reasons {
            println!("- {reason}");
        }
    }
    if let Some(suggestion) = &recommendation.alternative_suggestion {
        println!("\nAlternative: {suggestion}");
    }
    println!("\nPractice routine:");
    for (index, drill) in recommendation.practice_routine.iter().enumerate() {
        println!("{}. {drill}", index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use two_iron::analytics::{
        RecordingSink, FORM_START, FORM_STEP_COMPLETE, FORM_SUBMISSION, RECOMMENDATION_VIEW,
    };

    #[test]
    fn seasoned_profile_walks_every_page() {
        let sink = RecordingSink::default();

        let recommendation = walk_wizard(DemoProfile::Seasoned, &sink).expect("wizard completes");

        assert!(recommendation.is_recommended);
        assert_eq!(recommendation.confidence_score, 19);
        assert_eq!(
            sink.names(),
            vec![
                FORM_START,
                FORM_STEP_COMPLETE,
                FORM_STEP_COMPLETE,
                FORM_STEP_COMPLETE,
                FORM_STEP_COMPLETE,
                FORM_SUBMISSION,
                RECOMMENDATION_VIEW,
            ]
        );
    }

    #[test]
    fn beginner_profile_is_steered_to_a_hybrid() {
        let sink = RecordingSink::default();

        let recommendation = walk_wizard(DemoProfile::Beginner, &sink).expect("wizard completes");

        assert!(!recommendation.is_recommended);
        assert_eq!(recommendation.confidence_score, -1);
        assert!(recommendation.alternative_suggestion.is_some());
    }
}
