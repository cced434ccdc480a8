use serde::{Deserialize, Serialize};

use super::health_types::Letter;
use super::CatalogError;

/// What picking an assessment option adds to the axis tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTarget {
    Single(Letter),
    /// Dual-axis options add one to both letters (S+J or N+P).
    Pair(Letter, Letter),
}

#[derive(Debug, Serialize)]
pub struct AssessmentOption {
    pub text: &'static str,
    pub target: AxisTarget,
}

#[derive(Debug, Serialize)]
pub struct AssessmentQuestion {
    pub id: u8,
    pub emoji: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub options: [AssessmentOption; 2],
}

/// One answered assessment question, as submitted by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    pub question: u8,
    pub option: usize,
}

impl AssessmentAnswer {
    pub fn target(&self) -> Result<AxisTarget, CatalogError> {
        QUESTIONS
            .iter()
            .find(|question| question.id == self.question)
            .and_then(|question| question.options.get(self.option))
            .map(|option| option.target)
            .ok_or(CatalogError::UnknownAssessmentOption {
                question: self.question,
                option: self.option,
            })
    }
}

pub fn questions() -> &'static [AssessmentQuestion] {
    &QUESTIONS
}

use AxisTarget::{Pair, Single};
use Letter::{E, F, I, J, N, P, S, T};

static QUESTIONS: [AssessmentQuestion; 10] = [
    AssessmentQuestion {
        id: 1,
        emoji: "🌅",
        title: "Morning Energy",
        text: "You wake up early on a Saturday and the park is calling. What do you do first?",
        options: [
            AssessmentOption {
                text: "Meet friends for a morning run and coffee afterward",
                target: Single(E),
            },
            AssessmentOption {
                text: "Take a quiet solo walk or yoga session with your journal",
                target: Single(I),
            },
        ],
    },
    AssessmentQuestion {
        id: 2,
        emoji: "🥬",
        title: "Meal Planning Adventure",
        text: "You're deciding what to eat this week to support your energy.",
        options: [
            AssessmentOption {
                text: "Open a meal-planning app, track calories, and schedule every meal",
                target: Single(S),
            },
            AssessmentOption {
                text: "Wander the farmers' market and follow whatever inspires you",
                target: Single(N),
            },
        ],
    },
    AssessmentQuestion {
        id: 3,
        emoji: "🧘",
        title: "Choosing a New Habit",
        text: "Mindful meditation or a high-intensity program: how do you decide?",
        options: [
            AssessmentOption {
                text: "Research the science and compare which plan optimizes health",
                target: Single(T),
            },
            AssessmentOption {
                text: "Follow what resonates emotionally or feels meaningful",
                target: Single(F),
            },
        ],
    },
    AssessmentQuestion {
        id: 4,
        emoji: "📆",
        title: "Your Weekly Routine",
        text: "Your week is wide open. How do you fill it to stay healthy?",
        options: [
            AssessmentOption {
                text: "Schedule every workout, meditation, and bedtime in your calendar",
                target: Single(J),
            },
            AssessmentOption {
                text: "Leave blocks open and adapt to how you feel each day",
                target: Single(P),
            },
        ],
    },
    AssessmentQuestion {
        id: 5,
        emoji: "😰",
        title: "Stress Response",
        text: "A stressful week hits with deadlines and late nights. How do you cope?",
        options: [
            AssessmentOption {
                text: "Channel it into a sweaty run, strength session, or group class",
                target: Single(E),
            },
            AssessmentOption {
                text: "Retreat to a quiet spot to journal or meditate",
                target: Single(I),
            },
        ],
    },
    AssessmentQuestion {
        id: 6,
        emoji: "🎯",
        title: "Guidance Preference",
        text: "A friend recommends a wellness coach. Which approach suits you?",
        options: [
            AssessmentOption {
                text: "Step-by-step guidance, measurable goals, and data tracking",
                target: Single(S),
            },
            AssessmentOption {
                text: "Inspiration to explore holistic wellness and reflect on feelings",
                target: Single(N),
            },
        ],
    },
    AssessmentQuestion {
        id: 7,
        emoji: "🔥",
        title: "Motivation Source",
        text: "What keeps you going with a new healthy habit?",
        options: [
            AssessmentOption {
                text: "Measurable progress, numbers, and personal bests",
                target: Single(T),
            },
            AssessmentOption {
                text: "Feeling balanced, helping others, and a supportive community",
                target: Single(F),
            },
        ],
    },
    AssessmentQuestion {
        id: 8,
        emoji: "🔄",
        title: "Habit Flexibility",
        text: "How do you approach a daily wellness practice?",
        options: [
            AssessmentOption {
                text: "A strict schedule you keep no matter what",
                target: Single(J),
            },
            AssessmentOption {
                text: "Adjust to mood, energy, and whatever life throws at you",
                target: Single(P),
            },
        ],
    },
    AssessmentQuestion {
        id: 9,
        emoji: "✨",
        title: "Trying Something New",
        text: "A new studio mixes martial arts, dance, and yoga. What do you do?",
        options: [
            AssessmentOption {
                text: "Enroll in the structured classes with clear instructions",
                target: Pair(S, J),
            },
            AssessmentOption {
                text: "Sample everything and mix whatever feels fun",
                target: Pair(N, P),
            },
        ],
    },
    AssessmentQuestion {
        id: 10,
        emoji: "🪨",
        title: "Biggest Challenge",
        text: "Looking back, what has been your hardest obstacle?",
        options: [
            AssessmentOption {
                text: "Staying consistent with plans and routines",
                target: Pair(S, J),
            },
            AssessmentOption {
                text: "Overthinking, procrastinating, or switching routines often",
                target: Pair(N, P),
            },
        ],
    },
];
