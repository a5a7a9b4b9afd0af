use std::fmt;

use serde::{Deserialize, Serialize};

use Trait::*;

/// One of the five Big Five personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    /// Lowercase key, as used in serialized score sets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }

    /// Name shown to people. Neuroticism is presented inverted, as
    /// emotional stability.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Openness => "Openness to Experience",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Emotional Stability",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Openness => "Creativity, curiosity, and openness to new ideas",
            Self::Conscientiousness => "Organization, responsibility, and goal-oriented behavior",
            Self::Extraversion => "Social engagement, energy, and assertiveness",
            Self::Agreeableness => "Cooperation, compassion, and consideration for others",
            Self::Neuroticism => "Stress resistance, emotional control, and adaptability",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single questionnaire statement, answered on a 1 (disagree) to 5
/// (agree) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionnaireItem {
    pub id: u8,
    #[serde(rename = "trait")]
    pub trait_: Trait,
    pub text: &'static str,
    /// Agreement indicates a lower trait value; the answer is inverted
    /// (`6 - answer`) before averaging.
    pub reverse_scored: bool,
}

impl QuestionnaireItem {
    const fn new(id: u8, trait_: Trait, text: &'static str, reverse_scored: bool) -> Self {
        Self {
            id,
            trait_,
            text,
            reverse_scored,
        }
    }

    /// Contribution of a valid (1..=5) answer to the trait mean.
    pub fn effective_score(&self, answer: u8) -> u8 {
        if self.reverse_scored { 6 - answer } else { answer }
    }
}

/// The fixed 25-item questionnaire, five items per trait, ordered by id.
pub const CATALOG: [QuestionnaireItem; 25] = [
    QuestionnaireItem::new(1, Openness, "I am original, come up with new ideas", false),
    QuestionnaireItem::new(2, Openness, "I value artistic, aesthetic experiences", false),
    QuestionnaireItem::new(3, Openness, "I have an active imagination", false),
    QuestionnaireItem::new(4, Openness, "I prefer routine over variety", true),
    QuestionnaireItem::new(5, Openness, "I am curious about many different things", false),
    QuestionnaireItem::new(6, Conscientiousness, "I do a thorough job", false),
    QuestionnaireItem::new(7, Conscientiousness, "I am a reliable worker", false),
    QuestionnaireItem::new(8, Conscientiousness, "I tend to be disorganized", true),
    QuestionnaireItem::new(9, Conscientiousness, "I make plans and follow through with them", false),
    QuestionnaireItem::new(10, Conscientiousness, "I am easily distracted", true),
    QuestionnaireItem::new(11, Extraversion, "I am talkative", false),
    QuestionnaireItem::new(12, Extraversion, "I am outgoing, sociable", false),
    QuestionnaireItem::new(13, Extraversion, "I am reserved", true),
    QuestionnaireItem::new(14, Extraversion, "I generate a lot of enthusiasm", false),
    QuestionnaireItem::new(15, Extraversion, "I tend to be quiet", true),
    QuestionnaireItem::new(16, Agreeableness, "I am helpful and unselfish with others", false),
    QuestionnaireItem::new(17, Agreeableness, "I have a forgiving nature", false),
    QuestionnaireItem::new(18, Agreeableness, "I tend to find fault with others", true),
    QuestionnaireItem::new(19, Agreeableness, "I am considerate and kind to almost everyone", false),
    QuestionnaireItem::new(20, Agreeableness, "I can be cold and aloof", true),
    QuestionnaireItem::new(21, Neuroticism, "I worry a lot", false),
    QuestionnaireItem::new(22, Neuroticism, "I get nervous easily", false),
    QuestionnaireItem::new(23, Neuroticism, "I am relaxed, handle stress well", true),
    QuestionnaireItem::new(24, Neuroticism, "I remain calm in tense situations", true),
    QuestionnaireItem::new(25, Neuroticism, "I can be moody", false),
];

/// Look up a catalog item by id.
pub fn item(id: u8) -> Option<&'static QuestionnaireItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// The items measuring `trait_`, in id order.
pub fn items_for(trait_: Trait) -> impl Iterator<Item = &'static QuestionnaireItem> {
    CATALOG.iter().filter(move |item| item.trait_ == trait_)
}
