use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::domains::SCALE_DEFAULT;
use crate::catalog::{Archetype, DomainId, Letter};
use crate::checkin::domain::{DomainScore, RawAnswers};

use super::{AxisTally, ClassificationSignal};

const STRONG: f64 = 60.0;
const WEAK: f64 = 40.0;

/// Top two accumulators closer than this resolve to [`Archetype::FALLBACK`].
pub const NEAR_TIE_MARGIN: u32 = 2;

/// Distinct answer values at or above this count read as an exploring mind.
const VARIETY_THRESHOLD: usize = 5;
/// Population variance below this (with two or more answers) reads as a steady routine.
const STEADY_VARIANCE: f64 = 100.0;

use Archetype::{BrightEnergizer, CalmRestorer, CuriousExplorer, SteadyBuilder, WarmNurturer};

struct WeightRule {
    domain: DomainId,
    strong: &'static [(Archetype, u32)],
    weak: &'static [(Archetype, u32)],
}

const RULES: [WeightRule; 7] = [
    WeightRule {
        domain: DomainId::Pip,
        strong: &[(BrightEnergizer, 2), (CuriousExplorer, 1)],
        weak: &[(CalmRestorer, 2)],
    },
    WeightRule {
        domain: DomainId::Luna,
        strong: &[(CalmRestorer, 2), (SteadyBuilder, 1)],
        weak: &[(BrightEnergizer, 1)],
    },
    WeightRule {
        domain: DomainId::Ember,
        strong: &[(BrightEnergizer, 2)],
        weak: &[(CalmRestorer, 1), (WarmNurturer, 1)],
    },
    WeightRule {
        domain: DomainId::Sage,
        strong: &[(CuriousExplorer, 2), (SteadyBuilder, 1)],
        weak: &[(WarmNurturer, 1)],
    },
    WeightRule {
        domain: DomainId::Coral,
        strong: &[(WarmNurturer, 2), (BrightEnergizer, 1)],
        weak: &[(CalmRestorer, 1)],
    },
    WeightRule {
        domain: DomainId::Brook,
        strong: &[(SteadyBuilder, 2)],
        weak: &[(CuriousExplorer, 1)],
    },
    WeightRule {
        domain: DomainId::Oak,
        strong: &[(SteadyBuilder, 2), (CalmRestorer, 1)],
        weak: &[(WarmNurturer, 2)],
    },
];

/// Archetype credited by each assessment letter.
const fn letter_archetype(letter: Letter) -> Archetype {
    match letter {
        Letter::E | Letter::P => BrightEnergizer,
        Letter::I => CalmRestorer,
        Letter::S | Letter::J => SteadyBuilder,
        Letter::N | Letter::T => CuriousExplorer,
        Letter::F => WarmNurturer,
    }
}

/// One accumulator per archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArchetypeWeights(BTreeMap<Archetype, u32>);

impl Default for ArchetypeWeights {
    fn default() -> Self {
        Self(Archetype::ALL.into_iter().map(|archetype| (archetype, 0)).collect())
    }
}

impl ArchetypeWeights {
    pub fn add(&mut self, archetype: Archetype, amount: u32) {
        *self.0.entry(archetype).or_insert(0) += amount;
    }

    pub fn get(&self, archetype: Archetype) -> u32 {
        self.0.get(&archetype).copied().unwrap_or(0)
    }

    /// Highest accumulator, ties to catalog order; a near tie at the top is the fallback.
    pub fn resolve(&self) -> Archetype {
        let mut ranked: Vec<(Archetype, u32)> = Archetype::ALL
            .into_iter()
            .map(|archetype| (archetype, self.get(archetype)))
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1));

        match ranked.as_slice() {
            [(top, top_weight), (_, runner_up), ..] => {
                if top_weight - runner_up < NEAR_TIE_MARGIN {
                    Archetype::FALLBACK
                } else {
                    *top
                }
            }
            _ => Archetype::FALLBACK,
        }
    }
}

pub(super) fn weigh(signal: &ClassificationSignal<'_>) -> ArchetypeWeights {
    match signal {
        ClassificationSignal::None => ArchetypeWeights::default(),
        ClassificationSignal::Assessment(tally) => weigh_tally(tally),
        ClassificationSignal::Scores { scores, answers } => {
            let mut weights = weigh_scores(scores);
            apply_modifiers(&mut weights, answers);
            weights
        }
    }
}

fn weigh_tally(tally: &AxisTally) -> ArchetypeWeights {
    let mut weights = ArchetypeWeights::default();
    for letter in Letter::ALL {
        weights.add(letter_archetype(letter), tally.get(letter));
    }
    weights
}

fn weigh_scores(scores: &[DomainScore]) -> ArchetypeWeights {
    let mut weights = ArchetypeWeights::default();
    if scores.is_empty() {
        return weights;
    }

    for rule in &RULES {
        let score = scores
            .iter()
            .find(|entry| entry.domain == rule.domain)
            .map(|entry| entry.score)
            .unwrap_or(SCALE_DEFAULT);

        let increments = if score > STRONG {
            rule.strong
        } else if score < WEAK {
            rule.weak
        } else {
            continue;
        };
        for &(archetype, amount) in increments {
            weights.add(archetype, amount);
        }
    }
    weights
}

fn apply_modifiers(weights: &mut ArchetypeWeights, answers: &RawAnswers) {
    let values: Vec<f64> = answers
        .values()
        .copied()
        .filter(|value| value.is_finite())
        .collect();

    let distinct: BTreeSet<u64> = values.iter().map(|value| value.to_bits()).collect();
    if distinct.len() >= VARIETY_THRESHOLD {
        weights.add(CuriousExplorer, 1);
    }

    if values.len() >= 2 && population_variance(&values) < STEADY_VARIANCE {
        weights.add(SteadyBuilder, 1);
    }
}

fn population_variance(values: &[f64]) -> f64 {
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count
}
