//! Weekly check-in pipeline: answers are scored per domain, the user is classified into a
//! health type, and the saved history drives companion evolution, streaks, quests, and the
//! garden.

pub mod classification;
pub mod domain;
pub mod progression;
pub mod quests;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use classification::{
    ArchetypeWeights, AxisTally, Classification, ClassificationSignal, ClassifierStrategy,
    Evidence, HealthTypeView,
};
pub use domain::{
    forest_code, AcceptedQuest, Band, CheckInHistory, CheckInId, CheckInRecord, DomainScore,
    GardenElement, Quest, QuestId, QuestSource, QuestStatus, RawAnswers, Session, UserKey,
    UserRecord, UserSettings,
};
pub use progression::{
    check_in_streak, evolution_level, evolution_levels, user_stats, UserStats,
    MAX_EVOLUTION_LEVEL,
};
pub use quests::{AddOutcome, NewQuest, QuestBoard, QuestError};
pub use repository::{JsonFileStore, MemoryStore, RecordStore, StoreError};
pub use router::companion_router;
pub use scoring::{aggregate_scores, rank_scores, ScoreRanking, ScoringPolicy};
pub use service::{
    AccountError, CheckInDraft, CompanionService, Evaluation, Progress, ServiceError,
};
