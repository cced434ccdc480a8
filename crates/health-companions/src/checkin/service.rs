use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::classification::{
    AxisTally, Classification, ClassificationSignal, ClassifierStrategy, HealthTypeView,
};
use super::domain::{
    next_id, AcceptedQuest, CheckInId, CheckInRecord, DomainScore, GardenElement, Quest, QuestId,
    QuestSource, RawAnswers, Session, UserKey, UserRecord,
};
use super::progression::{check_in_streak, evolution_levels, user_stats, UserStats};
use super::quests::{AddOutcome, NewQuest, QuestError};
use super::repository::{RecordStore, StoreError};
use super::scoring::{aggregate_scores, rank_scores, ScoreRanking, ScoringPolicy};
use crate::catalog::health_types::FALLBACK_SUGGESTIONS;
use crate::catalog::{AssessmentAnswer, CatalogError, DomainId, HealthType};
use crate::config::CompanionsConfig;

/// Orchestrates accounts, check-ins, quests, and progress over a [`RecordStore`].
pub struct CompanionService<S> {
    store: Arc<S>,
    classifier: ClassifierStrategy,
    scoring: ScoringPolicy,
}

/// Everything a finished questionnaire produces before it is saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub scores: Vec<DomainScore>,
    pub ranking: ScoreRanking,
    pub classification: Classification,
    pub health_type: HealthTypeView,
}

/// Check-in submitted for saving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInDraft {
    pub answers: RawAnswers,
    #[serde(default)]
    pub accepted_quests: Vec<AcceptedQuest>,
    /// Answers to the direct assessment, when the user took it this time.
    #[serde(default)]
    pub assessment: Option<Vec<AssessmentAnswer>>,
    /// Type identifier chosen elsewhere (`"ISTJ"`, `"calm_restorer"`).
    #[serde(default)]
    pub health_type: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub evolution: BTreeMap<DomainId, u8>,
    pub streak: u32,
    pub stats: UserStats,
    pub health_type: Option<HealthTypeView>,
    pub latest_scores: Option<Vec<DomainScore>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Email is required")]
    MissingEmail,
    #[error("An account with this email already exists")]
    AlreadyExists,
    #[error("No account found with this email")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Quest(#[from] QuestError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("{domain} has no suggested quest {index}")]
    UnknownSuggestion { domain: DomainId, index: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<S> CompanionService<S>
where
    S: RecordStore + 'static,
{
    pub fn new(store: Arc<S>, config: &CompanionsConfig) -> Self {
        Self::with_settings(store, config.classifier, config.scoring)
    }

    pub fn with_settings(
        store: Arc<S>,
        classifier: ClassifierStrategy,
        scoring: ScoringPolicy,
    ) -> Self {
        Self {
            store,
            classifier,
            scoring,
        }
    }

    pub fn classifier(&self) -> ClassifierStrategy {
        self.classifier
    }

    /// Score answers and classify them without touching storage.
    pub fn evaluate(&self, answers: &RawAnswers) -> Evaluation {
        let scores = aggregate_scores(answers, &self.scoring);
        let classification = self.classifier.classify(&ClassificationSignal::Scores {
            scores: &scores,
            answers,
        });
        debug!(
            answers = answers.len(),
            health_type = %classification.health_type,
            "evaluated check-in"
        );
        Evaluation {
            ranking: rank_scores(&scores),
            health_type: HealthTypeView::from(classification.health_type),
            classification,
            scores,
        }
    }

    /// Classify the direct assessment.
    pub fn assess(&self, answers: &[AssessmentAnswer]) -> Result<Classification, ServiceError> {
        let tally = AxisTally::from_assessment(answers)?;
        Ok(self
            .classifier
            .classify(&ClassificationSignal::Assessment(tally)))
    }

    pub fn create_account(
        &self,
        email: &str,
        name: &str,
    ) -> Result<(Session, UserRecord), AccountError> {
        let key = UserKey::normalize(email).ok_or(AccountError::MissingEmail)?;
        let now = Utc::now();
        let record = UserRecord::new(key.clone(), name, now, &mut rand::thread_rng());
        if !self.store.insert_new(record.clone())? {
            return Err(AccountError::AlreadyExists);
        }
        self.store.set_current_session(&key)?;
        info!(user = %key, forest_code = %record.forest_code, "account created");
        Ok((Session::open(key, now), record))
    }

    pub fn login(&self, email: &str) -> Result<(Session, UserRecord), AccountError> {
        let (session, record) = self.session_for(email)?;
        self.store.set_current_session(&session.user)?;
        info!(user = %session.user, "logged in");
        Ok((session, record))
    }

    /// Open a session without remembering it, for request-scoped callers.
    pub fn session_for(&self, email: &str) -> Result<(Session, UserRecord), AccountError> {
        let key = UserKey::normalize(email).ok_or(AccountError::NotFound)?;
        let record = self.store.get(&key)?.ok_or(AccountError::NotFound)?;
        Ok((Session::open(key, Utc::now()), record))
    }

    pub fn logout(&self, session: Session) -> Result<(), ServiceError> {
        if self.store.current_session()?.as_ref() == Some(&session.user) {
            self.store.clear_current_session()?;
        }
        info!(user = %session.user, "logged out");
        Ok(())
    }

    /// The remembered session, if its record still exists.
    pub fn resume(&self) -> Result<Option<(Session, UserRecord)>, ServiceError> {
        let Some(key) = self.store.current_session()? else {
            return Ok(None);
        };
        match self.store.get(&key)? {
            Some(record) => Ok(Some((Session::open(key, Utc::now()), record))),
            None => {
                warn!(user = %key, "current session points at a missing record");
                self.store.clear_current_session()?;
                Ok(None)
            }
        }
    }

    pub fn record(&self, session: &Session) -> Result<UserRecord, ServiceError> {
        Ok(self
            .store
            .get(&session.user)?
            .ok_or(AccountError::NotFound)?)
    }

    /// Apply `change` to the session's record as one read-modify-write against the store.
    fn update_record<T>(
        &self,
        session: &Session,
        change: impl FnOnce(&mut UserRecord) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        self.store
            .update(&session.user, change)?
            .ok_or_else(|| AccountError::NotFound.into())
    }

    pub fn save_check_in(
        &self,
        session: &Session,
        draft: CheckInDraft,
    ) -> Result<UserRecord, ServiceError> {
        let new_quests = draft
            .accepted_quests
            .iter()
            .map(new_quest_for)
            .collect::<Result<Vec<_>, _>>()?;
        let scores = aggregate_scores(&draft.answers, &self.scoring);
        let now = Utc::now();

        let (record, health_type) = self.update_record(session, |record| {
            let health_type = self.resolve_health_type(&draft, &scores, record.health_type)?;
            for quest in new_quests {
                record.quests.add(quest, now)?;
            }

            record.history.push(CheckInRecord {
                id: CheckInId(next_id("checkin", now)),
                recorded_at: now,
                answers: draft.answers,
                scores: scores.clone(),
                health_type: Some(health_type),
                accepted_quests: draft.accepted_quests,
                reflection: draft
                    .reflection
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty()),
            });
            record.latest_scores = Some(scores);
            record.health_type = Some(health_type);
            record.last_check_in = Some(now);
            record.touch(now);
            Ok((record.clone(), health_type))
        })?;

        info!(
            user = %session.user,
            check_ins = record.history.len(),
            health_type = %health_type,
            "check-in saved"
        );
        Ok(record)
    }

    /// Supplied type, then assessment, then this check-in's scores. The previous type only
    /// stands when the check-in carries no answers at all.
    fn resolve_health_type(
        &self,
        draft: &CheckInDraft,
        scores: &[DomainScore],
        previous: Option<HealthType>,
    ) -> Result<HealthType, ServiceError> {
        if let Some(raw) = draft.health_type.as_deref() {
            return Ok(self.classifier.parse_type(raw)?);
        }
        if let Some(answers) = draft.assessment.as_deref() {
            return Ok(self.assess(answers)?.health_type);
        }
        match previous {
            Some(previous) if self.classifier.owns(previous) => {
                if draft.answers.is_empty() {
                    return Ok(previous);
                }
            }
            Some(previous) => warn!(
                stored = %previous,
                strategy = self.classifier.as_str(),
                "stored health type belongs to another classifier; reclassifying"
            ),
            None => {}
        }
        Ok(self
            .classifier
            .classify(&ClassificationSignal::Scores {
                scores,
                answers: &draft.answers,
            })
            .health_type)
    }

    pub fn add_quest(&self, session: &Session, quest: NewQuest) -> Result<Quest, ServiceError> {
        let (quest, outcome) = self.update_record(session, |record| {
            let now = Utc::now();
            let outcome = record.quests.add(quest, now)?;
            let quest = record
                .quests
                .get(outcome.id())
                .cloned()
                .ok_or_else(|| QuestError::NotFound(outcome.id().clone()))?;
            if let AddOutcome::Added(_) = outcome {
                record.touch(now);
            }
            Ok((quest, outcome))
        })?;

        match outcome {
            AddOutcome::Added(_) => {
                info!(user = %session.user, quest = %quest.id, domain = %quest.domain, "quest added");
            }
            AddOutcome::AlreadyPresent(_) => {
                debug!(user = %session.user, quest = %quest.id, "quest already on board");
            }
        }
        Ok(quest)
    }

    pub fn add_suggested_quest(
        &self,
        session: &Session,
        domain: DomainId,
        index: usize,
    ) -> Result<Quest, ServiceError> {
        let quest = NewQuest::suggested(domain, index)
            .ok_or(ServiceError::UnknownSuggestion { domain, index })?;
        self.add_quest(session, quest)
    }

    pub fn complete_quest<R: Rng + ?Sized>(
        &self,
        session: &Session,
        id: &QuestId,
        rng: &mut R,
    ) -> Result<GardenElement, ServiceError> {
        let element = self.update_record(session, |record| {
            let now = Utc::now();
            let element = record.quests.complete(id, now, rng)?;
            record.garden.push(element.clone());
            record.touch(now);
            Ok(element)
        })?;
        info!(
            user = %session.user,
            quest = %id,
            planted = element.name.as_str(),
            "quest completed"
        );
        Ok(element)
    }

    pub fn remove_quest(&self, session: &Session, id: &QuestId) -> Result<Quest, ServiceError> {
        let removed = self.update_record(session, |record| {
            let removed = record.quests.remove(id)?;
            record.touch(Utc::now());
            Ok(removed)
        })?;
        info!(user = %session.user, quest = %id, "quest removed");
        Ok(removed)
    }

    pub fn progress(&self, session: &Session) -> Result<Progress, ServiceError> {
        let record = self.record(session)?;
        Ok(Progress {
            evolution: evolution_levels(&record.history),
            streak: check_in_streak(&record.history),
            stats: user_stats(&record),
            health_type: record.health_type.map(HealthTypeView::from),
            latest_scores: record.latest_scores,
        })
    }

    /// Quest ideas for the user's type, or the generic trio before one is known.
    pub fn quest_suggestions(&self, health_type: Option<HealthType>) -> [&'static str; 3] {
        health_type
            .map(HealthType::quest_suggestions)
            .unwrap_or(FALLBACK_SUGGESTIONS)
    }
}

fn new_quest_for(accepted: &AcceptedQuest) -> Result<NewQuest, ServiceError> {
    let domain = accepted.domain;
    match &accepted.source {
        QuestSource::Suggestion { index } => {
            NewQuest::suggested(domain, *index).ok_or(ServiceError::UnknownSuggestion {
                domain,
                index: *index,
            })
        }
        QuestSource::Community { text } => Ok(NewQuest {
            domain,
            text: text.clone(),
            icon: domain.companion().emoji.to_string(),
            custom: false,
        }),
        QuestSource::Custom { text, icon } => Ok(NewQuest::custom(domain, text.clone(), icon.clone())),
    }
}
