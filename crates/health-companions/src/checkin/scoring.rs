use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{DomainScore, RawAnswers};
use crate::catalog::domains::{find_question, SCALE_DEFAULT};
use crate::catalog::DomainId;

/// How discrete-choice answers participate in a domain mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// When set, option indices of choice items are averaged as plain numbers alongside
    /// 0-100 scale answers. When cleared, choice answers are left out of the mean.
    pub include_choice_indices: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            include_choice_indices: true,
        }
    }
}

impl ScoringPolicy {
    fn counts(&self, key: &str) -> bool {
        self.include_choice_indices || !find_question(key).is_some_and(|item| item.is_choice())
    }
}

/// Mean of each domain's answers, in catalog order. Domains with no answers score the neutral 50.
pub fn aggregate_scores(answers: &RawAnswers, policy: &ScoringPolicy) -> Vec<DomainScore> {
    DomainId::ALL
        .into_iter()
        .map(|domain| {
            let (sum, count) = answers
                .iter()
                .filter(|(key, _)| domain.owns_key(key) && policy.counts(key))
                .fold((0.0_f64, 0_usize), |(sum, count), (_, value)| {
                    (sum + value, count + 1)
                });

            let mean = if count == 0 {
                SCALE_DEFAULT
            } else {
                sum / count as f64
            };
            let score = if mean.is_finite() { mean } else { SCALE_DEFAULT };

            debug!(domain = %domain, answers = count, score, "domain scored");
            DomainScore::new(domain, score)
        })
        .collect()
}

/// How many of the lowest-scoring domains are flagged for attention.
pub const NEEDS_ATTENTION: usize = 3;

/// Scores split for presentation: weakest domains first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRanking {
    pub needs_attention: Vec<DomainScore>,
    pub supporting: Vec<DomainScore>,
}

/// Stable ascending sort; equal scores keep catalog order.
pub fn rank_scores(scores: &[DomainScore]) -> ScoreRanking {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|left, right| left.score.total_cmp(&right.score));
    let supporting = sorted.split_off(NEEDS_ATTENTION.min(sorted.len()));
    ScoreRanking {
        needs_attention: sorted,
        supporting,
    }
}
