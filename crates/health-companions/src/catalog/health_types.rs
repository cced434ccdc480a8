use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domains::DomainId;
use super::CatalogError;

/// One pole of a classification axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    pub const fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::Energy,
            Letter::S | Letter::N => Axis::Perception,
            Letter::T | Letter::F => Axis::Judgment,
            Letter::J | Letter::P => Axis::Structure,
        }
    }
}

/// The four opposing pairs. The first side of each pair wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Energy,
    Perception,
    Judgment,
    Structure,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Energy, Axis::Perception, Axis::Judgment, Axis::Structure];

    pub const fn sides(self) -> (Letter, Letter) {
        match self {
            Axis::Energy => (Letter::E, Letter::I),
            Axis::Perception => (Letter::S, Letter::N),
            Axis::Judgment => (Letter::T, Letter::F),
            Axis::Structure => (Letter::J, Letter::P),
        }
    }
}

/// Four-letter code of the sixteen-entry axis catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeCode {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl TypeCode {
    pub const ALL: [TypeCode; 16] = [
        TypeCode::Istj,
        TypeCode::Isfj,
        TypeCode::Infj,
        TypeCode::Intj,
        TypeCode::Istp,
        TypeCode::Isfp,
        TypeCode::Infp,
        TypeCode::Intp,
        TypeCode::Estp,
        TypeCode::Esfp,
        TypeCode::Enfp,
        TypeCode::Entp,
        TypeCode::Estj,
        TypeCode::Esfj,
        TypeCode::Enfj,
        TypeCode::Entj,
    ];

    /// Returned when there is no signal to classify.
    pub const DEFAULT: TypeCode = TypeCode::Isfj;

    /// Build the code from which side won each axis (`true` = first letter: E, S, T, J).
    pub const fn from_winners(extraverted: bool, sensing: bool, thinking: bool, judging: bool) -> Self {
        match (extraverted, sensing, thinking, judging) {
            (false, true, true, true) => TypeCode::Istj,
            (false, true, false, true) => TypeCode::Isfj,
            (false, false, false, true) => TypeCode::Infj,
            (false, false, true, true) => TypeCode::Intj,
            (false, true, true, false) => TypeCode::Istp,
            (false, true, false, false) => TypeCode::Isfp,
            (false, false, false, false) => TypeCode::Infp,
            (false, false, true, false) => TypeCode::Intp,
            (true, true, true, false) => TypeCode::Estp,
            (true, true, false, false) => TypeCode::Esfp,
            (true, false, false, false) => TypeCode::Enfp,
            (true, false, true, false) => TypeCode::Entp,
            (true, true, true, true) => TypeCode::Estj,
            (true, true, false, true) => TypeCode::Esfj,
            (true, false, false, true) => TypeCode::Enfj,
            (true, false, true, true) => TypeCode::Entj,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeCode::Istj => "ISTJ",
            TypeCode::Isfj => "ISFJ",
            TypeCode::Infj => "INFJ",
            TypeCode::Intj => "INTJ",
            TypeCode::Istp => "ISTP",
            TypeCode::Isfp => "ISFP",
            TypeCode::Infp => "INFP",
            TypeCode::Intp => "INTP",
            TypeCode::Estp => "ESTP",
            TypeCode::Esfp => "ESFP",
            TypeCode::Enfp => "ENFP",
            TypeCode::Entp => "ENTP",
            TypeCode::Estj => "ESTJ",
            TypeCode::Esfj => "ESFJ",
            TypeCode::Enfj => "ENFJ",
            TypeCode::Entj => "ENTJ",
        }
    }

    pub fn letters(self) -> [Letter; 4] {
        let mut letters = [Letter::E; 4];
        for (slot, raw) in letters.iter_mut().zip(self.as_str().chars()) {
            *slot = match raw {
                'E' => Letter::E,
                'I' => Letter::I,
                'S' => Letter::S,
                'N' => Letter::N,
                'T' => Letter::T,
                'F' => Letter::F,
                'J' => Letter::J,
                _ => Letter::P,
            };
        }
        letters
    }

    pub fn profile(self) -> &'static HealthTypeProfile {
        &AXIS_PROFILES[self as usize]
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        TypeCode::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownTypeCode(value.to_string()))
    }
}

/// The six-entry category catalog used by the weight classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    SteadyBuilder,
    CuriousExplorer,
    WarmNurturer,
    BrightEnergizer,
    CalmRestorer,
    BalancedWanderer,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::SteadyBuilder,
        Archetype::CuriousExplorer,
        Archetype::WarmNurturer,
        Archetype::BrightEnergizer,
        Archetype::CalmRestorer,
        Archetype::BalancedWanderer,
    ];

    /// Near-tie and no-signal result.
    pub const FALLBACK: Archetype = Archetype::BalancedWanderer;

    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::SteadyBuilder => "steady_builder",
            Archetype::CuriousExplorer => "curious_explorer",
            Archetype::WarmNurturer => "warm_nurturer",
            Archetype::BrightEnergizer => "bright_energizer",
            Archetype::CalmRestorer => "calm_restorer",
            Archetype::BalancedWanderer => "balanced_wanderer",
        }
    }

    pub fn profile(self) -> &'static HealthTypeProfile {
        &ARCHETYPE_PROFILES[self as usize]
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownArchetype(value.to_string()))
    }
}

/// Classification result stored on check-ins and user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "catalog", content = "id", rename_all = "snake_case")]
pub enum HealthType {
    Axis(TypeCode),
    Archetype(Archetype),
}

impl HealthType {
    pub fn profile(self) -> &'static HealthTypeProfile {
        match self {
            HealthType::Axis(code) => code.profile(),
            HealthType::Archetype(archetype) => archetype.profile(),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            HealthType::Axis(code) => code.as_str(),
            HealthType::Archetype(archetype) => archetype.as_str(),
        }
    }

    pub fn quest_suggestions(self) -> [&'static str; 3] {
        self.profile().quest_style.suggestions()
    }

    /// Lead-in a companion uses when offering a quest to this type.
    pub fn companion_framing(self, companion_name: &str) -> String {
        let voice = &self.profile().voice;
        format!("As {}, {} {}", voice.persona, companion_name, voice.lead_in)
    }
}

impl fmt::Display for HealthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Suggestions offered before any health type is known.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Take a mindful walk today",
    "Drink an extra glass of water",
    "Get to bed 30 minutes earlier",
];

/// Framing used before any health type is known.
pub fn neutral_framing(companion_name: &str) -> String {
    format!("{companion_name}'s suggestion for you:")
}

#[derive(Debug, Serialize)]
pub struct HealthTypeProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub critter: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub resonant_domains: &'static [DomainId],
    pub quest_style: QuestStyle,
    pub voice: Voice,
}

#[derive(Debug, Serialize)]
pub struct Voice {
    pub persona: &'static str,
    pub lead_in: &'static str,
}

/// Action style a health type gravitates toward; drives quest suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStyle {
    StructuredRoutines,
    GentleSelfCare,
    MindfulPurpose,
    StrategicData,
    PracticalSolo,
    CreativeNature,
    EmotionallyMeaningful,
    ResearchExperiment,
    ActiveAdventure,
    FunSocial,
    CreativeExploration,
    InnovationOptimization,
    StructuredPlanning,
    CommunityActivities,
    LeadershipMotivation,
    PerformanceOptimization,
}

impl QuestStyle {
    pub const fn label(self) -> &'static str {
        match self {
            QuestStyle::StructuredRoutines => "structured routines and tracking",
            QuestStyle::GentleSelfCare => "gentle self-care and nurturing",
            QuestStyle::MindfulPurpose => "mindful and purposeful practices",
            QuestStyle::StrategicData => "strategic optimization and data",
            QuestStyle::PracticalSolo => "practical solo activities",
            QuestStyle::CreativeNature => "creative and nature-based",
            QuestStyle::EmotionallyMeaningful => "gentle and emotionally meaningful",
            QuestStyle::ResearchExperiment => "research and experimentation",
            QuestStyle::ActiveAdventure => "active adventures and challenges",
            QuestStyle::FunSocial => "fun social activities",
            QuestStyle::CreativeExploration => "creative exploration and meaning",
            QuestStyle::InnovationOptimization => "innovation and optimization",
            QuestStyle::StructuredPlanning => "structured planning and tracking",
            QuestStyle::CommunityActivities => "social and community activities",
            QuestStyle::LeadershipMotivation => "leadership and group motivation",
            QuestStyle::PerformanceOptimization => "strategic performance optimization",
        }
    }

    pub const fn suggestions(self) -> [&'static str; 3] {
        match self {
            QuestStyle::StructuredRoutines => [
                "Log your meals and energy levels today",
                "Set a consistent wake-up time for the week",
                "Schedule your workouts like appointments",
            ],
            QuestStyle::GentleSelfCare => [
                "Prepare a nourishing meal for yourself",
                "Take a warm bath or do gentle stretching",
                "Reach out to check on a friend's wellness",
            ],
            QuestStyle::MindfulPurpose => [
                "Try 10 minutes of meditation",
                "Journal about what wellness means to you",
                "Practice mindful eating at one meal",
            ],
            QuestStyle::StrategicData => [
                "Track a new health metric this week",
                "Research one wellness topic deeply",
                "Optimize your sleep schedule",
            ],
            QuestStyle::PracticalSolo => [
                "Try a new solo workout",
                "Build or improve your home gym setup",
                "Master a new physical skill",
            ],
            QuestStyle::CreativeNature => [
                "Take a walk in nature without your phone",
                "Try a creative movement practice",
                "Listen to what your body craves today",
            ],
            QuestStyle::EmotionallyMeaningful => [
                "Write in your gratitude journal",
                "Do yoga that honors how you feel",
                "Connect with your wellness community",
            ],
            QuestStyle::ResearchExperiment => [
                "Try an N=1 experiment on yourself",
                "Research a health question you have",
                "Test a new wellness approach",
            ],
            QuestStyle::ActiveAdventure => [
                "Try a new adventure activity",
                "Challenge a friend to a fitness goal",
                "Explore somewhere new while moving",
            ],
            QuestStyle::FunSocial => [
                "Join a dance or group fitness class",
                "Organize an active hangout with friends",
                "Make your workout playful today",
            ],
            QuestStyle::CreativeExploration => [
                "Try a wellness practice you've never done",
                "Journal about your health journey",
                "Inspire someone else's wellness",
            ],
            QuestStyle::InnovationOptimization => [
                "Hack your routine for efficiency",
                "Try the latest wellness tech or app",
                "Experiment with a new approach",
            ],
            QuestStyle::StructuredPlanning => [
                "Plan and prep your meals for the week",
                "Create a workout schedule",
                "Track your progress metrics",
            ],
            QuestStyle::CommunityActivities => [
                "Organize a group walk or workout",
                "Cook a healthy meal for others",
                "Check in on a friend's health goals",
            ],
            QuestStyle::LeadershipMotivation => [
                "Lead a group fitness activity",
                "Mentor someone on their journey",
                "Organize a wellness challenge",
            ],
            QuestStyle::PerformanceOptimization => [
                "Set ambitious health goals",
                "Analyze your performance data",
                "Create a strategic wellness plan",
            ],
        }
    }
}

use DomainId::{Brook, Coral, Ember, Luna, Oak, Pip, Sage};

// Indexed by `TypeCode as usize`; order must match `TypeCode::ALL`.
static AXIS_PROFILES: [HealthTypeProfile; 16] = [
    HealthTypeProfile {
        id: "ISTJ",
        name: "The Inspector",
        critter: "🐢",
        tagline: "Steady steps, lasting progress",
        description: "Trusts proven routines over trends and keeps a meticulous health log; consistency beats intensity.",
        resonant_domains: &[Oak, Brook, Sage],
        quest_style: QuestStyle::StructuredRoutines,
        voice: Voice {
            persona: "the steady Turtle",
            lead_in: "has a reliable suggestion:",
        },
    },
    HealthTypeProfile {
        id: "ISFJ",
        name: "The Protector",
        critter: "🐨",
        tagline: "Nurturing yourself and others",
        description: "Builds warm, comforting self-care rituals and is the friend others lean on for support.",
        resonant_domains: &[Luna, Coral, Brook],
        quest_style: QuestStyle::GentleSelfCare,
        voice: Voice {
            persona: "the nurturing Koala",
            lead_in: "offers this gentle idea:",
        },
    },
    HealthTypeProfile {
        id: "INFJ",
        name: "The Advocate",
        critter: "🦢",
        tagline: "Wellness with purpose",
        description: "Connects every health choice to deeper values and sees movement, mind, and meaning as one.",
        resonant_domains: &[Luna, Coral, Sage],
        quest_style: QuestStyle::MindfulPurpose,
        voice: Voice {
            persona: "the graceful Swan",
            lead_in: "shares something meaningful:",
        },
    },
    HealthTypeProfile {
        id: "INTJ",
        name: "The Mastermind",
        critter: "🦉",
        tagline: "Strategic wellness mastery",
        description: "Treats the body as a system to optimize and plans several moves ahead.",
        resonant_domains: &[Sage, Oak, Luna],
        quest_style: QuestStyle::StrategicData,
        voice: Voice {
            persona: "the strategic Owl",
            lead_in: "suggests this optimization:",
        },
    },
    HealthTypeProfile {
        id: "ISTP",
        name: "The Craftsman",
        critter: "🐱",
        tagline: "Practical, independent wellness",
        description: "Learns by doing, keeps what works, and drops what does not without fuss.",
        resonant_domains: &[Ember, Sage],
        quest_style: QuestStyle::PracticalSolo,
        voice: Voice {
            persona: "the independent Cat",
            lead_in: "has a practical tip:",
        },
    },
    HealthTypeProfile {
        id: "ISFP",
        name: "The Artist",
        critter: "🦌",
        tagline: "Intuitive, creative wellness",
        description: "Listens to the body and lets intuition, nature, and creativity shape each day.",
        resonant_domains: &[Coral, Ember],
        quest_style: QuestStyle::CreativeNature,
        voice: Voice {
            persona: "the intuitive Deer",
            lead_in: "invites you to try:",
        },
    },
    HealthTypeProfile {
        id: "INFP",
        name: "The Nurturer",
        critter: "🐰",
        tagline: "Gentle, meaningful wellness",
        description: "Seeks emotional harmony and practices that align with personal values, not rigid rules.",
        resonant_domains: &[Coral, Luna],
        quest_style: QuestStyle::EmotionallyMeaningful,
        voice: Voice {
            persona: "the gentle Rabbit",
            lead_in: "softly suggests:",
        },
    },
    HealthTypeProfile {
        id: "INTP",
        name: "The Thinker",
        critter: "🐙",
        tagline: "Curious, experimental wellness",
        description: "Wants the mechanism behind every habit and treats health as a puzzle full of hypotheses.",
        resonant_domains: &[Sage, Pip],
        quest_style: QuestStyle::ResearchExperiment,
        voice: Voice {
            persona: "the curious Octopus",
            lead_in: "proposes an experiment:",
        },
    },
    HealthTypeProfile {
        id: "ESTP",
        name: "The Adventurer",
        critter: "🦦",
        tagline: "Energetic, spontaneous wellness",
        description: "Turns wellness into an adventure of challenges, games, and friends along for the ride.",
        resonant_domains: &[Ember, Pip],
        quest_style: QuestStyle::ActiveAdventure,
        voice: Voice {
            persona: "the energetic Otter",
            lead_in: "has an adventure for you:",
        },
    },
    HealthTypeProfile {
        id: "ESFP",
        name: "The Performer",
        critter: "🐬",
        tagline: "Playful, joyful wellness",
        description: "Believes exercise is fun when it is shared; dance floors beat treadmills.",
        resonant_domains: &[Ember, Coral],
        quest_style: QuestStyle::FunSocial,
        voice: Voice {
            persona: "the playful Dolphin",
            lead_in: "says let's have fun with:",
        },
    },
    HealthTypeProfile {
        id: "ENFP",
        name: "The Explorer",
        critter: "🦋",
        tagline: "Creative, inspiring wellness",
        description: "Samples every new practice in search of wellness that feels inspiring and purposeful.",
        resonant_domains: &[Pip, Coral],
        quest_style: QuestStyle::CreativeExploration,
        voice: Voice {
            persona: "the creative Butterfly",
            lead_in: "inspires you to try:",
        },
    },
    HealthTypeProfile {
        id: "ENTP",
        name: "The Innovator",
        critter: "🦊",
        tagline: "Clever, optimizing wellness",
        description: "Looks for the smarter route, running experiments and hacks instead of following the crowd.",
        resonant_domains: &[Pip, Sage],
        quest_style: QuestStyle::InnovationOptimization,
        voice: Voice {
            persona: "the clever Fox",
            lead_in: "has an innovative idea:",
        },
    },
    HealthTypeProfile {
        id: "ESTJ",
        name: "The Planner",
        critter: "🦫",
        tagline: "Structured, goal-driven wellness",
        description: "Builds health habit by habit with systematic precision and an unshakeable schedule.",
        resonant_domains: &[Oak, Ember, Brook],
        quest_style: QuestStyle::StructuredPlanning,
        voice: Voice {
            persona: "the industrious Beaver",
            lead_in: "schedules this for you:",
        },
    },
    HealthTypeProfile {
        id: "ESFJ",
        name: "The Caregiver",
        critter: "🐘",
        tagline: "Community-driven wellness",
        description: "Makes health a group effort, cooking for loved ones and walking with friends.",
        resonant_domains: &[Coral, Brook, Pip],
        quest_style: QuestStyle::CommunityActivities,
        voice: Voice {
            persona: "the caring Elephant",
            lead_in: "suggests doing together:",
        },
    },
    HealthTypeProfile {
        id: "ENFJ",
        name: "The Mentor",
        critter: "🦁",
        tagline: "Inspiring, leading wellness",
        description: "Rallies others with encouragement and organized plans, lifting the whole group.",
        resonant_domains: &[Coral, Pip, Oak],
        quest_style: QuestStyle::LeadershipMotivation,
        voice: Voice {
            persona: "the inspiring Lion",
            lead_in: "leads with this:",
        },
    },
    HealthTypeProfile {
        id: "ENTJ",
        name: "The Strategist",
        critter: "🦅",
        tagline: "Ambitious, data-driven wellness",
        description: "Sets ambitious goals with ambitious timelines and measures everything on the way.",
        resonant_domains: &[Sage, Oak, Ember],
        quest_style: QuestStyle::PerformanceOptimization,
        voice: Voice {
            persona: "the ambitious Eagle",
            lead_in: "challenges you to:",
        },
    },
];

// Indexed by `Archetype as usize`; order must match `Archetype::ALL`.
static ARCHETYPE_PROFILES: [HealthTypeProfile; 6] = [
    HealthTypeProfile {
        id: "steady_builder",
        name: "The Steady Builder",
        critter: "🐢",
        tagline: "Small habits, every week",
        description: "Thrives on rhythm: regular meals, regular sleep, and routines that hold under stress.",
        resonant_domains: &[Oak, Brook],
        quest_style: QuestStyle::StructuredRoutines,
        voice: Voice {
            persona: "a Steady Builder",
            lead_in: "has a reliable suggestion:",
        },
    },
    HealthTypeProfile {
        id: "curious_explorer",
        name: "The Curious Explorer",
        critter: "🦊",
        tagline: "Every week a new experiment",
        description: "Notices patterns, asks why, and tries something different when the data says so.",
        resonant_domains: &[Sage, Pip],
        quest_style: QuestStyle::ResearchExperiment,
        voice: Voice {
            persona: "a Curious Explorer",
            lead_in: "proposes an experiment:",
        },
    },
    HealthTypeProfile {
        id: "warm_nurturer",
        name: "The Warm Nurturer",
        critter: "🐨",
        tagline: "Care that starts at home",
        description: "Leads with feeling and connection; wellness grows from rest and kind relationships.",
        resonant_domains: &[Coral, Luna],
        quest_style: QuestStyle::GentleSelfCare,
        voice: Voice {
            persona: "a Warm Nurturer",
            lead_in: "offers this gentle idea:",
        },
    },
    HealthTypeProfile {
        id: "bright_energizer",
        name: "The Bright Energizer",
        critter: "🦦",
        tagline: "Momentum is medicine",
        description: "Runs on movement and spark; the best day is one with something active in it.",
        resonant_domains: &[Ember, Pip],
        quest_style: QuestStyle::ActiveAdventure,
        voice: Voice {
            persona: "a Bright Energizer",
            lead_in: "has an adventure for you:",
        },
    },
    HealthTypeProfile {
        id: "calm_restorer",
        name: "The Calm Restorer",
        critter: "🦉",
        tagline: "Recovery first",
        description: "Protects sleep and calm, knowing that everything else rebuilds from rest.",
        resonant_domains: &[Luna, Oak],
        quest_style: QuestStyle::MindfulPurpose,
        voice: Voice {
            persona: "a Calm Restorer",
            lead_in: "shares something meaningful:",
        },
    },
    HealthTypeProfile {
        id: "balanced_wanderer",
        name: "The Balanced Wanderer",
        critter: "🦋",
        tagline: "A little of everything",
        description: "No single domain leads; the week is a mix and the path stays open.",
        resonant_domains: &[Coral, Ember, Brook],
        quest_style: QuestStyle::CreativeExploration,
        voice: Voice {
            persona: "a Balanced Wanderer",
            lead_in: "inspires you to try:",
        },
    },
];
