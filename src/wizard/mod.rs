//! Questionnaire wizard state and its pure transitions.
//!
//! A [`WizardState`] is a plain value. Every transition on [`Wizard`] takes
//! the current state by value and returns the next one together with the
//! analytics event the transition produced, so a presentation layer only has
//! to render the state and forward events to its sink.

mod draft;
mod steps;
mod validation;

pub use draft::{DraftDistances, DraftValue, FormDraft};
pub use steps::{questionnaire_steps, FieldKey, FieldKind, FieldSpec, StepSpec};
pub use validation::{is_valid_email, validate_step, FieldError};

use crate::analytics::{self, AnalyticsEvent};
use crate::questionnaire::{QuestionnaireAnswers, Recommendation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardPhase {
    Collecting,
    Submitting,
    Complete(Recommendation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: usize,
    pub draft: FormDraft,
    pub field_errors: Vec<FieldError>,
    pub error: Option<String>,
    pub phase: WizardPhase,
}

impl WizardState {
    fn initial() -> Self {
        Self {
            step: 0,
            draft: FormDraft::default(),
            field_errors: Vec::new(),
            error: None,
            phase: WizardPhase::Collecting,
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.phase {
            WizardPhase::Complete(recommendation) => Some(recommendation),
            _ => None,
        }
    }

    pub fn error_for(&self, key: FieldKey) -> Option<&FieldError> {
        self.field_errors
            .iter()
            .find(|error| error.field == key.path())
    }
}

/// Result of pressing "next" on the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The page validated and the wizard moved forward.
    Moved {
        state: WizardState,
        event: AnalyticsEvent,
    },
    /// The last page validated; `answers` should be posted to the server.
    Submit {
        state: WizardState,
        answers: QuestionnaireAnswers,
        event: AnalyticsEvent,
    },
    /// Validation failed (see `state.field_errors`) or the wizard is not
    /// collecting input.
    Blocked { state: WizardState },
}

/// Transition table over a fixed list of pages.
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: Vec<StepSpec>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(questionnaire_steps())
    }
}

impl Wizard {
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn current_step<'a>(&'a self, state: &WizardState) -> Option<&'a StepSpec> {
        self.steps.get(state.step)
    }

    /// Completion percentage shown by the progress bar.
    pub fn progress(&self, state: &WizardState) -> f32 {
        if self.steps.is_empty() {
            return 100.0;
        }
        let position = (state.step + 1).min(self.steps.len());
        position as f32 * 100.0 / self.steps.len() as f32
    }

    pub fn start(&self) -> (WizardState, AnalyticsEvent) {
        (
            WizardState::initial(),
            AnalyticsEvent::new(analytics::FORM_START),
        )
    }

    pub fn update_field(&self, mut state: WizardState, key: FieldKey, value: &str) -> WizardState {
        if state.phase != WizardPhase::Collecting {
            return state;
        }
        if let Some(slot) = state.draft.text_mut(key) {
            *slot = value.to_string();
        }
        state
    }

    pub fn toggle_struggle(&self, mut state: WizardState, option: &str, checked: bool) -> WizardState {
        if state.phase != WizardPhase::Collecting {
            return state;
        }
        let struggles = &mut state.draft.current_struggles;
        let present = struggles.iter().any(|existing| existing == option);
        if checked && !present {
            struggles.push(option.to_string());
        } else if !checked {
            struggles.retain(|existing| existing != option);
        }
        state
    }

    pub fn advance(&self, mut state: WizardState) -> Advance {
        if state.phase != WizardPhase::Collecting {
            return Advance::Blocked { state };
        }
        let Some(step) = self.steps.get(state.step) else {
            return Advance::Blocked { state };
        };

        let errors = validate_step(step, &state.draft);
        if !errors.is_empty() {
            state.field_errors = errors;
            return Advance::Blocked { state };
        }
        state.field_errors.clear();

        if state.step + 1 < self.steps.len() {
            let event = AnalyticsEvent::new(analytics::FORM_STEP_COMPLETE)
                .with("step", (state.step + 1) as i64)
                .with("stepName", step.id);
            state.step += 1;
            return Advance::Moved { state, event };
        }

        let answers = state.draft.to_answers();
        let event = AnalyticsEvent::new(analytics::FORM_SUBMISSION)
            .with("handicap", state.draft.handicap.clone())
            .with("experience", state.draft.experience.clone())
            .with("playingStyle", state.draft.playing_style.clone());
        state.error = None;
        state.phase = WizardPhase::Submitting;
        Advance::Submit {
            state,
            answers,
            event,
        }
    }

    pub fn back(&self, mut state: WizardState) -> WizardState {
        if state.phase == WizardPhase::Collecting && state.step > 0 {
            state.step -= 1;
        }
        state
    }

    pub fn submission_succeeded(
        &self,
        mut state: WizardState,
        recommendation: Recommendation,
    ) -> (WizardState, AnalyticsEvent) {
        let event = AnalyticsEvent::new(analytics::RECOMMENDATION_VIEW)
            .with("isRecommended", recommendation.is_recommended)
            .with("confidenceScore", i64::from(recommendation.confidence_score));
        state.step = self.steps.len();
        state.phase = WizardPhase::Complete(recommendation);
        (state, event)
    }

    /// Returns to the last page with `message` shown above the form.
    pub fn submission_failed(
        &self,
        mut state: WizardState,
        message: &str,
    ) -> (WizardState, AnalyticsEvent) {
        let event = AnalyticsEvent::new(analytics::FORM_ERROR).with("error", message);
        state.phase = WizardPhase::Collecting;
        state.error = Some(message.to_string());
        (state, event)
    }

    pub fn reset(&self, _state: WizardState) -> (WizardState, AnalyticsEvent) {
        (
            WizardState::initial(),
            AnalyticsEvent::new(analytics::FORM_RESTART),
        )
    }
}
