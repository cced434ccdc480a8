use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::checkin::Band;

/// Separator between a companion id and the item number in answer keys (`coral-2`).
pub const KEY_SEPARATOR: char = '-';

/// The seven tracked health domains, in questionnaire order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DomainId {
    Pip,
    Luna,
    Ember,
    Sage,
    Coral,
    Brook,
    Oak,
}

impl DomainId {
    pub const ALL: [DomainId; 7] = [
        DomainId::Pip,
        DomainId::Luna,
        DomainId::Ember,
        DomainId::Sage,
        DomainId::Coral,
        DomainId::Brook,
        DomainId::Oak,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DomainId::Pip => "pip",
            DomainId::Luna => "luna",
            DomainId::Ember => "ember",
            DomainId::Sage => "sage",
            DomainId::Coral => "coral",
            DomainId::Brook => "brook",
            DomainId::Oak => "oak",
        }
    }

    pub fn companion(self) -> &'static Companion {
        match self {
            DomainId::Pip => &PIP,
            DomainId::Luna => &LUNA,
            DomainId::Ember => &EMBER,
            DomainId::Sage => &SAGE,
            DomainId::Coral => &CORAL,
            DomainId::Brook => &BROOK,
            DomainId::Oak => &OAK,
        }
    }

    /// True when `key` is `<id>-<anything>`. Grouping answers relies on this prefix.
    pub fn owns_key(self, key: &str) -> bool {
        key.strip_prefix(self.as_str())
            .map(|rest| rest.starts_with(KEY_SEPARATOR))
            .unwrap_or(false)
    }

    /// Domain owning an answer or quest key, if any.
    pub fn for_key(key: &str) -> Option<DomainId> {
        DomainId::ALL.into_iter().find(|domain| domain.owns_key(key))
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        DomainId::ALL
            .into_iter()
            .find(|domain| domain.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownDomain(value.to_string()))
    }
}

/// Every companion in questionnaire order.
pub fn all_companions() -> impl Iterator<Item = &'static Companion> {
    DomainId::ALL.into_iter().map(DomainId::companion)
}

/// Questionnaire item for an answer key, searched across the whole catalog.
pub fn find_question(key: &str) -> Option<&'static QuestionItem> {
    let domain = DomainId::for_key(key)?;
    domain
        .companion()
        .questions
        .iter()
        .find(|question| question.key == key)
}

/// Character mascot representing one health domain.
#[derive(Debug, Serialize)]
pub struct Companion {
    pub id: DomainId,
    pub name: &'static str,
    pub animal: &'static str,
    pub emoji: &'static str,
    pub mood: MoodEmojis,
    pub domain_label: &'static str,
    pub description: &'static str,
    pub blurb: &'static str,
    pub questions: &'static [QuestionItem],
    pub micro_quests: &'static [MicroQuest],
}

impl Companion {
    pub fn mood_emoji(&self, band: Option<Band>) -> &'static str {
        match band {
            Some(Band::Low) => self.mood.low,
            Some(Band::Medium) => self.mood.medium,
            Some(Band::High) => self.mood.high,
            None => self.emoji,
        }
    }

    pub fn micro_quest(&self, index: usize) -> Option<&'static MicroQuest> {
        self.micro_quests.get(index)
    }
}

#[derive(Debug, Serialize)]
pub struct MoodEmojis {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub key: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
}

impl QuestionItem {
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::Choice { .. })
    }
}

/// Continuous items are 0-100 sliders defaulting to the midpoint; choice answers are option indices.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Scale { labels: [&'static str; 3] },
    Choice { options: &'static [&'static str] },
}

pub const SCALE_DEFAULT: f64 = 50.0;

#[derive(Debug, Serialize)]
pub struct MicroQuest {
    pub text: &'static str,
    pub icon: &'static str,
}

static PIP: Companion = Companion {
    id: DomainId::Pip,
    name: "Pip",
    animal: "Seedling Sprite",
    emoji: "🌱",
    mood: MoodEmojis {
        low: "🥀",
        medium: "🌱",
        high: "🌿",
    },
    domain_label: "Energy & Vitality",
    description: "A bright little sprite who notices your spark and vitality",
    blurb: "I pay attention to your spark. How's your energy been flowing?",
    questions: &[QuestionItem {
        key: "pip-1",
        text: "How would you describe your energy levels this week?",
        kind: QuestionKind::Scale {
            labels: ["Running on empty", "Steady", "Buzzing with energy"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "Take a 10-minute walk outside",
            icon: "🚶",
        },
        MicroQuest {
            text: "Notice when your energy peaks today",
            icon: "📝",
        },
        MicroQuest {
            text: "Try a 2-minute stretch break",
            icon: "🧘",
        },
    ],
};

static LUNA: Companion = Companion {
    id: DomainId::Luna,
    name: "Luna",
    animal: "Moon Owl",
    emoji: "🦉",
    mood: MoodEmojis {
        low: "😴",
        medium: "🦉",
        high: "🌙",
    },
    domain_label: "Sleep & Rest",
    description: "A wise owl who watches over your sleep and recovery",
    blurb: "Rest is where you rebuild. How has your sleep been treating you?",
    questions: &[QuestionItem {
        key: "luna-1",
        text: "How would you rate your sleep quality this week?",
        kind: QuestionKind::Scale {
            labels: ["Rough nights", "Hit or miss", "Sleeping well"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "No screens 30 min before bed tonight",
            icon: "📵",
        },
        MicroQuest {
            text: "Try a 5-minute breathing exercise before sleep",
            icon: "🌬️",
        },
        MicroQuest {
            text: "Notice how you feel when you wake up tomorrow",
            icon: "☀️",
        },
    ],
};

static EMBER: Companion = Companion {
    id: DomainId::Ember,
    name: "Ember",
    animal: "Fox",
    emoji: "🦊",
    mood: MoodEmojis {
        low: "🦥",
        medium: "🦊",
        high: "🏃",
    },
    domain_label: "Movement & Body",
    description: "A playful fox who celebrates how your body wants to move",
    blurb: "Your body loves to move in its own way. How's it been feeling?",
    questions: &[QuestionItem {
        key: "ember-1",
        text: "How much intentional movement did you get this week?",
        kind: QuestionKind::Scale {
            labels: ["Very little", "Some movement", "Moving regularly"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "Do 5 minutes of movement you enjoy",
            icon: "💃",
        },
        MicroQuest {
            text: "Take the stairs today",
            icon: "🪜",
        },
        MicroQuest {
            text: "Stretch for 3 minutes",
            icon: "🙆",
        },
    ],
};

static SAGE: Companion = Companion {
    id: DomainId::Sage,
    name: "Sage",
    animal: "Elephant",
    emoji: "🐘",
    mood: MoodEmojis {
        low: "🌫️",
        medium: "🐘",
        high: "🧠",
    },
    domain_label: "Mind & Focus",
    description: "A gentle elephant who helps notice your mental clarity and calm",
    blurb: "Your mind is always working. How clear has it felt lately?",
    questions: &[QuestionItem {
        key: "sage-1",
        text: "How would you describe your mental clarity this week?",
        kind: QuestionKind::Scale {
            labels: ["Foggy", "Somewhat clear", "Sharp and focused"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "Take 3 deep breaths right now",
            icon: "🌬️",
        },
        MicroQuest {
            text: "Write down one thing on your mind",
            icon: "📝",
        },
        MicroQuest {
            text: "Step outside for 2 minutes",
            icon: "🌳",
        },
    ],
};

static CORAL: Companion = Companion {
    id: DomainId::Coral,
    name: "Coral",
    animal: "Otter",
    emoji: "🦦",
    mood: MoodEmojis {
        low: "😔",
        medium: "🦦",
        high: "😊",
    },
    domain_label: "Mood & Emotions",
    description: "A warm otter who sits with whatever you're feeling",
    blurb: "All feelings are welcome here. How's your heart been?",
    questions: &[
        QuestionItem {
            key: "coral-1",
            text: "How would you describe your overall mood this week?",
            kind: QuestionKind::Scale {
                labels: ["Heavy", "Up and down", "Mostly good"],
            },
        },
        QuestionItem {
            key: "coral-2",
            text: "What emotions have been most present?",
            kind: QuestionKind::Choice {
                options: &[
                    "Anxiety or worry",
                    "Sadness or low mood",
                    "Frustration or irritation",
                    "Content or calm",
                    "A mix of everything",
                ],
            },
        },
    ],
    micro_quests: &[
        MicroQuest {
            text: "Text someone you care about",
            icon: "💬",
        },
        MicroQuest {
            text: "Name 3 things you're grateful for",
            icon: "🙏",
        },
        MicroQuest {
            text: "Do one small thing that makes you smile",
            icon: "😊",
        },
    ],
};

static BROOK: Companion = Companion {
    id: DomainId::Brook,
    name: "Brook",
    animal: "Bear",
    emoji: "🐻",
    mood: MoodEmojis {
        low: "🍂",
        medium: "🐻",
        high: "🍯",
    },
    domain_label: "Nutrition & Nourishment",
    description: "A friendly bear who notices how you're fueling yourself",
    blurb: "Food is fuel and comfort. How have you been nourishing yourself?",
    questions: &[QuestionItem {
        key: "brook-1",
        text: "How would you describe your eating patterns this week?",
        kind: QuestionKind::Scale {
            labels: ["Chaotic", "Inconsistent", "Pretty regular"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "Drink a glass of water right now",
            icon: "🥤",
        },
        MicroQuest {
            text: "Eat one more vegetable today",
            icon: "🥗",
        },
        MicroQuest {
            text: "Notice how you feel after your next meal",
            icon: "🍽️",
        },
    ],
};

static OAK: Companion = Companion {
    id: DomainId::Oak,
    name: "Oak",
    animal: "Tortoise",
    emoji: "🐢",
    mood: MoodEmojis {
        low: "🌪️",
        medium: "🐢",
        high: "🌳",
    },
    domain_label: "Stress & Resilience",
    description: "A steady tortoise who stands with you through stress",
    blurb: "Life brings storms. How are you weathering them?",
    questions: &[QuestionItem {
        key: "oak-1",
        text: "How stressed have you felt this week?",
        kind: QuestionKind::Scale {
            labels: ["Very stressed", "Moderate stress", "Pretty calm"],
        },
    }],
    micro_quests: &[
        MicroQuest {
            text: "Take 5 slow breaths",
            icon: "🌬️",
        },
        MicroQuest {
            text: "Step away from screens for 10 minutes",
            icon: "🚶",
        },
        MicroQuest {
            text: "Write down what's weighing on you",
            icon: "📓",
        },
    ],
};
