use crate::questionnaire::answers::{
    Experience, Handicap, LongIronAbility, PracticeFrequency, PLAYING_STYLE_OPTIONS,
    STRUGGLE_OPTIONS,
};
use serde::Serialize;

/// Addressable questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "handicap")]
    Handicap,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "strength")]
    Strength,
    #[serde(rename = "swingSpeed")]
    SwingSpeed,
    #[serde(rename = "typicalIronDistances.sevenIron")]
    SevenIron,
    #[serde(rename = "typicalIronDistances.fourIron")]
    FourIron,
    #[serde(rename = "playingStyle")]
    PlayingStyle,
    #[serde(rename = "currentStruggles")]
    CurrentStruggles,
    #[serde(rename = "practiceFrequency")]
    PracticeFrequency,
}

impl FieldKey {
    /// Dotted path matching the submitted JSON document.
    pub const fn path(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Handicap => "handicap",
            FieldKey::Experience => "experience",
            FieldKey::Height => "height",
            FieldKey::Strength => "strength",
            FieldKey::SwingSpeed => "swingSpeed",
            FieldKey::SevenIron => "typicalIronDistances.sevenIron",
            FieldKey::FourIron => "typicalIronDistances.fourIron",
            FieldKey::PlayingStyle => "playingStyle",
            FieldKey::CurrentStruggles => "currentStruggles",
            FieldKey::PracticeFrequency => "practiceFrequency",
        }
    }

    pub(crate) const fn is_iron_distance(self) -> bool {
        matches!(self, FieldKey::SevenIron | FieldKey::FourIron)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub optional: bool,
}

impl FieldSpec {
    fn text(key: FieldKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            placeholder: None,
            options: Vec::new(),
            optional: false,
        }
    }

    fn select(key: FieldKey, label: &'static str, options: Vec<String>) -> Self {
        Self {
            kind: FieldKind::Select,
            options,
            ..Self::text(key, label)
        }
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One page of the questionnaire wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: Vec<FieldSpec>,
}

fn labels<T>(options: &[T], label: impl Fn(&T) -> &str) -> Vec<String> {
    options.iter().map(|option| label(option).to_string()).collect()
}

fn strings(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

/// The questionnaire pages in presentation order.
pub fn questionnaire_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            id: "contact",
            title: "Ready to Find Out if a 2-Iron is Right for You?",
            subtitle: "Let's start with some basic info",
            fields: vec![
                FieldSpec::text(FieldKey::Name, "Your Name"),
                FieldSpec {
                    kind: FieldKind::Email,
                    ..FieldSpec::text(
                        FieldKey::Email,
                        "Email (for your personalized 2-iron recommendation)",
                    )
                },
            ],
        },
        StepSpec {
            id: "skill",
            title: "Your Golf Profile",
            subtitle: "This helps us understand if you're ready for a 2-iron",
            fields: vec![
                FieldSpec::select(
                    FieldKey::Handicap,
                    "What's your handicap?",
                    labels(Handicap::OPTIONS, Handicap::label),
                ),
                FieldSpec::select(
                    FieldKey::Experience,
                    "Years playing golf",
                    labels(Experience::OPTIONS, Experience::label),
                ),
            ],
        },
        StepSpec {
            id: "physical",
            title: "Physical Attributes",
            subtitle: "A 2-iron requires specific physical capabilities",
            fields: vec![
                FieldSpec::text(FieldKey::Height, "Your height").placeholder("e.g., 5'10\""),
                FieldSpec::select(
                    FieldKey::Strength,
                    "How would you rate your ability with long irons?",
                    labels(LongIronAbility::OPTIONS, LongIronAbility::label),
                ),
                FieldSpec::text(FieldKey::SwingSpeed, "Driver swing speed (if known)")
                    .placeholder("e.g., 95 mph")
                    .optional(),
            ],
        },
        StepSpec {
            id: "distances",
            title: "Current Iron Play",
            subtitle: "This helps us gauge if a 2-iron matches your game",
            fields: vec![
                FieldSpec::text(
                    FieldKey::SevenIron,
                    "How far do you hit your 7-iron? (yards)",
                )
                .placeholder("e.g., 150"),
                FieldSpec::text(
                    FieldKey::FourIron,
                    "How far do you hit your 4-iron? (if you use one)",
                )
                .placeholder("e.g., 180")
                .optional(),
            ],
        },
        StepSpec {
            id: "style",
            title: "Playing Style & Goals",
            subtitle: "Let's understand why you're interested in a 2-iron",
            fields: vec![
                FieldSpec::select(
                    FieldKey::PlayingStyle,
                    "What best describes your playing style?",
                    strings(&PLAYING_STYLE_OPTIONS),
                ),
                FieldSpec {
                    kind: FieldKind::Checkbox,
                    options: strings(&STRUGGLE_OPTIONS),
                    optional: true,
                    ..FieldSpec::text(
                        FieldKey::CurrentStruggles,
                        "Select your current challenges (multiple choice)",
                    )
                },
                FieldSpec::select(
                    FieldKey::PracticeFrequency,
                    "How often do you practice?",
                    labels(PracticeFrequency::OPTIONS, PracticeFrequency::label),
                ),
            ],
        },
    ]
}
