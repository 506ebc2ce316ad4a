use serde::{Deserialize, Serialize};

/// Declares a questionnaire option set backed by fixed display labels.
///
/// Labels outside the set are kept verbatim in `Unrecognized` so that the
/// submission round-trips into the email template unchanged. Non-string JSON
/// values also land in `Unrecognized` (`null` as the empty label).
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            /// Options in the order the questionnaire presents them.
            pub const OPTIONS: &'static [Self] = &[$(Self::$variant),+];

            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn parse(raw: &str) -> Self {
                match raw {
                    $($label => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.label().to_string(),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                lenient_text(deserializer).map(|raw| Self::parse(&raw))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unrecognized(String::new())
            }
        }
    };
}

option_set! {
    /// Self-reported handicap bracket.
    pub enum Handicap {
        Beginner => "Beginner (30+)",
        TwentyToThirty => "20-30",
        TenToTwenty => "10-20",
        FiveToTen => "5-10",
        BelowFive => "Below 5",
        Scratch => "Scratch or better",
    }
}

option_set! {
    /// Years spent playing golf.
    pub enum Experience {
        UnderOneYear => "Less than 1 year",
        OneToThreeYears => "1-3 years",
        ThreeToFiveYears => "3-5 years",
        FiveToTenYears => "5-10 years",
        OverTenYears => "10+ years",
    }
}

option_set! {
    /// How comfortable the golfer is with long irons.
    pub enum LongIronAbility {
        Struggles => "I struggle with long irons",
        ComfortableWithFourIron => "I can handle a 4-iron comfortably",
        Strength => "Long irons are my strength",
        FightABear => "I could probably fight a bear",
    }
}

option_set! {
    pub enum PracticeFrequency {
        Daily => "Daily grinder",
        Weekly => "Weekly warrior",
        Monthly => "Monthly enthusiast",
        SpecialOccasions => "Special occasions only",
    }
}

/// Playing-style labels offered by the questionnaire. The server never
/// matches on these directly; see [`StyleClass::classify`].
pub const PLAYING_STYLE_OPTIONS: [&str; 3] = [
    "Conservative - I prefer safer shots",
    "Balanced - I mix it up depending on the situation",
    "Aggressive - I'm here for a good time, not a long time",
];

pub const STRUGGLE_OPTIONS: [&str; 5] = [
    "Consistency with long irons",
    "Getting enough height on long shots",
    "Want more shot shape options",
    "Need more distance control",
    "Looking for a hybrid alternative",
];

/// Coarse classification of the free-text playing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    Aggressive,
    Conservative,
    Neutral,
}

impl StyleClass {
    const RULES: [(&'static str, StyleClass); 2] = [
        ("Aggressive", StyleClass::Aggressive),
        ("Conservative", StyleClass::Conservative),
    ];

    /// First matching substring rule wins; anything else is neutral.
    pub fn classify(playing_style: &str) -> Self {
        Self::RULES
            .iter()
            .find(|(needle, _)| playing_style.contains(needle))
            .map(|(_, class)| *class)
            .unwrap_or(StyleClass::Neutral)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IronDistances {
    #[serde(default, deserialize_with = "lenient_text")]
    pub seven_iron: String,
    #[serde(default)]
    pub four_iron: String,
}

impl IronDistances {
    /// Carry distance of the 7-iron in yards, or 0 when nothing parses.
    pub fn seven_iron_yards(&self) -> i64 {
        leading_integer(&self.seven_iron)
    }
}

/// Answers submitted by the questionnaire, as received over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub handicap: Handicap,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub strength: LongIronAbility,
    #[serde(default)]
    pub swing_speed: String,
    pub typical_iron_distances: IronDistances,
    pub playing_style: String,
    #[serde(default)]
    pub current_struggles: Vec<String>,
    #[serde(default)]
    pub practice_frequency: PracticeFrequency,
}

impl QuestionnaireAnswers {
    pub fn style_class(&self) -> StyleClass {
        StyleClass::classify(&self.playing_style)
    }
}

/// Reads any JSON scalar as text: strings verbatim, `null` as empty, and
/// numbers or booleans in their JSON spelling.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(raw) => raw,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Reads a leading base-10 integer the way browsers read form numbers:
/// leading whitespace and one sign are allowed, trailing text is ignored,
/// and input with no leading digits reads as 0. Overflow saturates.
pub(crate) fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
