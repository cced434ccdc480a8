//! Health type classification.
//!
//! Two interchangeable strategies sit behind [`ClassifierStrategy`]: the four-axis tally that
//! resolves to one of sixteen [`TypeCode`]s, and the six-way archetype weighting. A deployment
//! runs exactly one of them, so every stored [`HealthType`] belongs to the same family.

mod archetype;
mod axis;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{DomainScore, RawAnswers};
use crate::catalog::{
    Archetype, AssessmentAnswer, AxisTarget, CatalogError, HealthType, HealthTypeProfile, Letter,
    TypeCode,
};

pub use archetype::ArchetypeWeights;

/// What the classifier gets to look at.
#[derive(Debug, Clone)]
pub enum ClassificationSignal<'a> {
    None,
    /// Counters from the ten-question direct assessment.
    Assessment(AxisTally),
    /// Scores from a check-in, plus the raw answers for the statistical modifiers.
    Scores {
        scores: &'a [DomainScore],
        answers: &'a RawAnswers,
    },
}

impl ClassificationSignal<'_> {
    /// True when there is nothing to classify: no signal, an unanswered assessment, or no scores.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassificationSignal::None => true,
            ClassificationSignal::Assessment(tally) => tally.is_empty(),
            ClassificationSignal::Scores { scores, .. } => scores.is_empty(),
        }
    }
}

/// The classifier's answer together with the counters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub health_type: HealthType,
    pub evidence: Evidence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", content = "counters", rename_all = "snake_case")]
pub enum Evidence {
    Axis(AxisTally),
    Archetype(ArchetypeWeights),
}

/// A health type together with its catalog entry and quest ideas, for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthTypeView {
    pub health_type: HealthType,
    pub profile: &'static HealthTypeProfile,
    pub quest_style: &'static str,
    pub suggestions: [&'static str; 3],
}

impl From<HealthType> for HealthTypeView {
    fn from(health_type: HealthType) -> Self {
        let profile = health_type.profile();
        Self {
            health_type,
            profile,
            quest_style: profile.quest_style.label(),
            suggestions: health_type.quest_suggestions(),
        }
    }
}

impl PartialEq for HealthTypeView {
    fn eq(&self, other: &Self) -> bool {
        self.health_type == other.health_type
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierStrategy {
    #[default]
    Axis,
    Archetype,
}

impl ClassifierStrategy {
    pub fn classify(self, signal: &ClassificationSignal<'_>) -> Classification {
        match self {
            ClassifierStrategy::Axis => {
                let tally = axis::tally(signal);
                let code = if signal.is_empty() {
                    TypeCode::DEFAULT
                } else {
                    tally.resolve()
                };
                Classification {
                    health_type: HealthType::Axis(code),
                    evidence: Evidence::Axis(tally),
                }
            }
            ClassifierStrategy::Archetype => {
                let weights = archetype::weigh(signal);
                Classification {
                    health_type: HealthType::Archetype(weights.resolve()),
                    evidence: Evidence::Archetype(weights),
                }
            }
        }
    }

    /// Result for an empty signal.
    pub const fn default_type(self) -> HealthType {
        match self {
            ClassifierStrategy::Axis => HealthType::Axis(TypeCode::DEFAULT),
            ClassifierStrategy::Archetype => HealthType::Archetype(Archetype::FALLBACK),
        }
    }

    /// True when `health_type` belongs to this strategy's catalog.
    pub const fn owns(self, health_type: HealthType) -> bool {
        matches!(
            (self, health_type),
            (ClassifierStrategy::Axis, HealthType::Axis(_))
                | (ClassifierStrategy::Archetype, HealthType::Archetype(_))
        )
    }

    /// Parse a stored or submitted identifier against this strategy's catalog.
    pub fn parse_type(self, raw: &str) -> Result<HealthType, CatalogError> {
        match self {
            ClassifierStrategy::Axis => raw.parse::<TypeCode>().map(HealthType::Axis),
            ClassifierStrategy::Archetype => raw.parse::<Archetype>().map(HealthType::Archetype),
        }
    }

    pub fn catalog(self) -> Vec<&'static HealthTypeProfile> {
        match self {
            ClassifierStrategy::Axis => TypeCode::ALL.iter().map(|code| code.profile()).collect(),
            ClassifierStrategy::Archetype => Archetype::ALL
                .iter()
                .map(|archetype| archetype.profile())
                .collect(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ClassifierStrategy::Axis => "axis",
            ClassifierStrategy::Archetype => "archetype",
        }
    }
}

impl FromStr for ClassifierStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "axis" => Ok(ClassifierStrategy::Axis),
            "archetype" => Ok(ClassifierStrategy::Archetype),
            other => Err(other.to_string()),
        }
    }
}

/// Eight letter counters, one per axis pole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTally {
    pub e: u32,
    pub i: u32,
    pub s: u32,
    pub n: u32,
    pub t: u32,
    pub f: u32,
    pub j: u32,
    pub p: u32,
}

impl AxisTally {
    pub fn from_assessment(answers: &[AssessmentAnswer]) -> Result<Self, CatalogError> {
        let mut tally = Self::default();
        for answer in answers {
            match answer.target()? {
                AxisTarget::Single(letter) => tally.add(letter, 1),
                AxisTarget::Pair(first, second) => {
                    tally.add(first, 1);
                    tally.add(second, 1);
                }
            }
        }
        Ok(tally)
    }

    pub fn add(&mut self, letter: Letter, amount: u32) {
        *self.slot(letter) += amount;
    }

    pub fn get(&self, letter: Letter) -> u32 {
        match letter {
            Letter::E => self.e,
            Letter::I => self.i,
            Letter::S => self.s,
            Letter::N => self.n,
            Letter::T => self.t,
            Letter::F => self.f,
            Letter::J => self.j,
            Letter::P => self.p,
        }
    }

    pub fn is_empty(&self) -> bool {
        Letter::ALL.into_iter().all(|letter| self.get(letter) == 0)
    }

    /// Higher count wins each axis; ties go to E, S, T and J, so an all-zero tally is ESTJ.
    pub fn resolve(&self) -> TypeCode {
        TypeCode::from_winners(
            self.e >= self.i,
            self.s >= self.n,
            self.t >= self.f,
            self.j >= self.p,
        )
    }

    fn slot(&mut self, letter: Letter) -> &mut u32 {
        match letter {
            Letter::E => &mut self.e,
            Letter::I => &mut self.i,
            Letter::S => &mut self.s,
            Letter::N => &mut self.n,
            Letter::T => &mut self.t,
            Letter::F => &mut self.f,
            Letter::J => &mut self.j,
            Letter::P => &mut self.p,
        }
    }
}
