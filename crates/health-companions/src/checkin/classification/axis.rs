use crate::catalog::domains::SCALE_DEFAULT;
use crate::catalog::{DomainId, Letter};
use crate::checkin::domain::DomainScore;

use super::{AxisTally, ClassificationSignal};

const STRONG: f64 = 60.0;
const WEAK: f64 = 40.0;

/// Letters nudged when a domain is strong (> 60) or weak (< 40).
struct AxisRule {
    domain: DomainId,
    strong: [(Letter, u32); 2],
    weak: [(Letter, u32); 2],
}

const RULES: [AxisRule; 7] = [
    AxisRule {
        domain: DomainId::Pip,
        strong: [(Letter::E, 2), (Letter::N, 1)],
        weak: [(Letter::I, 2), (Letter::S, 1)],
    },
    AxisRule {
        domain: DomainId::Luna,
        strong: [(Letter::I, 2), (Letter::J, 1)],
        weak: [(Letter::E, 1), (Letter::P, 1)],
    },
    AxisRule {
        domain: DomainId::Ember,
        strong: [(Letter::E, 2), (Letter::S, 1)],
        weak: [(Letter::I, 1), (Letter::N, 1)],
    },
    AxisRule {
        domain: DomainId::Sage,
        strong: [(Letter::T, 2), (Letter::J, 1)],
        weak: [(Letter::F, 1), (Letter::P, 1)],
    },
    AxisRule {
        domain: DomainId::Coral,
        strong: [(Letter::F, 2), (Letter::E, 1)],
        weak: [(Letter::T, 1), (Letter::I, 1)],
    },
    AxisRule {
        domain: DomainId::Brook,
        strong: [(Letter::S, 2), (Letter::J, 1)],
        weak: [(Letter::N, 1), (Letter::P, 1)],
    },
    AxisRule {
        domain: DomainId::Oak,
        strong: [(Letter::J, 2), (Letter::I, 1)],
        weak: [(Letter::P, 1), (Letter::E, 1)],
    },
];

pub(super) fn tally(signal: &ClassificationSignal<'_>) -> AxisTally {
    match signal {
        ClassificationSignal::None => AxisTally::default(),
        ClassificationSignal::Assessment(tally) => *tally,
        ClassificationSignal::Scores { scores, .. } => tally_scores(scores),
    }
}

fn tally_scores(scores: &[DomainScore]) -> AxisTally {
    let mut tally = AxisTally::default();
    if scores.is_empty() {
        return tally;
    }

    for rule in &RULES {
        let score = scores
            .iter()
            .find(|entry| entry.domain == rule.domain)
            .map(|entry| entry.score)
            .unwrap_or(SCALE_DEFAULT);

        let increments = if score > STRONG {
            &rule.strong
        } else if score < WEAK {
            &rule.weak
        } else {
            continue;
        };
        for &(letter, amount) in increments {
            tally.add(letter, amount);
        }
    }
    tally
}
