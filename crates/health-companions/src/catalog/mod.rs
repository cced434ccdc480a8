//! Read-only reference data: companions, health types, the direct assessment, and the
//! garden palette. Every table is a closed enum plus a static lookup so a miss cannot happen
//! at runtime; only string parsing at the edges can fail.

pub mod assessment;
pub mod domains;
pub mod garden;
pub mod health_types;

pub use assessment::{AssessmentAnswer, AssessmentOption, AssessmentQuestion, AxisTarget};
pub use domains::{Companion, DomainId, MicroQuest, MoodEmojis, QuestionItem, QuestionKind};
pub use garden::{NatureElement, NatureKind};
pub use health_types::{Archetype, HealthType, HealthTypeProfile, Letter, TypeCode};

/// Raised when a loosely-typed identifier from storage or a request does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown companion '{0}'")]
    UnknownDomain(String),
    #[error("unknown health type code '{0}'")]
    UnknownTypeCode(String),
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),
    #[error("assessment question {question} has no option {option}")]
    UnknownAssessmentOption { question: u8, option: usize },
}
