use super::steps::FieldKey;
use crate::questionnaire::answers::{
    Experience, Handicap, IronDistances, LongIronAbility, PracticeFrequency,
    QuestionnaireAnswers,
};
use serde::{Deserialize, Serialize};

/// Raw form contents as typed by the visitor. Serializes to the same JSON
/// document that the submission endpoint accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub handicap: String,
    pub experience: String,
    pub height: String,
    pub strength: String,
    pub swing_speed: String,
    pub typical_iron_distances: DraftDistances,
    pub playing_style: String,
    pub current_struggles: Vec<String>,
    pub practice_frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDistances {
    pub seven_iron: String,
    pub four_iron: String,
}

/// Borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValue<'a> {
    Text(&'a str),
    Choices(&'a [String]),
}

impl<'a> DraftValue<'a> {
    pub fn is_empty(&self) -> bool {
        match self {
            DraftValue::Text(text) => text.is_empty(),
            DraftValue::Choices(choices) => choices.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            DraftValue::Text(text) => Some(text),
            DraftValue::Choices(_) => None,
        }
    }
}

impl FormDraft {
    pub fn value(&self, key: FieldKey) -> DraftValue<'_> {
        let text = match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Handicap => &self.handicap,
            FieldKey::Experience => &self.experience,
            FieldKey::Height => &self.height,
            FieldKey::Strength => &self.strength,
            FieldKey::SwingSpeed => &self.swing_speed,
            FieldKey::SevenIron => &self.typical_iron_distances.seven_iron,
            FieldKey::FourIron => &self.typical_iron_distances.four_iron,
            FieldKey::PlayingStyle => &self.playing_style,
            FieldKey::PracticeFrequency => &self.practice_frequency,
            FieldKey::CurrentStruggles => return DraftValue::Choices(&self.current_struggles),
        };
        DraftValue::Text(text)
    }

    /// Mutable handle to a text field; `None` for the multi-choice field.
    pub(crate) fn text_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Handicap => &mut self.handicap,
            FieldKey::Experience => &mut self.experience,
            FieldKey::Height => &mut self.height,
            FieldKey::Strength => &mut self.strength,
            FieldKey::SwingSpeed => &mut self.swing_speed,
            FieldKey::SevenIron => &mut self.typical_iron_distances.seven_iron,
            FieldKey::FourIron => &mut self.typical_iron_distances.four_iron,
            FieldKey::PlayingStyle => &mut self.playing_style,
            FieldKey::PracticeFrequency => &mut self.practice_frequency,
            FieldKey::CurrentStruggles => return None,
        };
        Some(slot)
    }

    pub fn to_answers(&self) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            name: self.name.clone(),
            email: self.email.clone(),
            handicap: Handicap::parse(&self.handicap),
            experience: Experience::parse(&self.experience),
            height: self.height.clone(),
            strength: LongIronAbility::parse(&self.strength),
            swing_speed: self.swing_speed.clone(),
            typical_iron_distances: IronDistances {
                seven_iron: self.typical_iron_distances.seven_iron.clone(),
                four_iron: self.typical_iron_distances.four_iron.clone(),
            },
            playing_style: self.playing_style.clone(),
            current_struggles: self.current_struggles.clone(),
            practice_frequency: PracticeFrequency::parse(&self.practice_frequency),
        }
    }
}
