use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::quests::QuestBoard;
use crate::catalog::{DomainId, HealthType, NatureKind};

/// Answer key (`pip-1`, `coral-2`) to numeric value. Choice answers are option indices.
pub type RawAnswers = BTreeMap<String, f64>;

/// Three-tier qualitative level derived from a domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub const MEDIUM_FLOOR: f64 = 35.0;
    pub const HIGH_FLOOR: f64 = 65.0;

    /// Total over `f64`; NaN lands in the neutral band.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            Band::Medium
        } else if score < Self::MEDIUM_FLOOR {
            Band::Low
        } else if score < Self::HIGH_FLOOR {
            Band::Medium
        } else {
            Band::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: DomainId,
    pub score: f64,
    pub band: Band,
}

impl DomainScore {
    pub fn new(domain: DomainId, score: f64) -> Self {
        Self {
            domain,
            score,
            band: Band::from_score(score),
        }
    }
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// `<prefix>-<unix millis>-<sequence>`; unique within a process and ordered by creation time.
pub(crate) fn next_id(prefix: &str, now: DateTime<Utc>) -> String {
    let sequence = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{}-{sequence}", now.timestamp_millis())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckInId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an accepted quest came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestSource {
    /// Index into the companion's micro-quest list.
    Suggestion { index: usize },
    Community { text: String },
    Custom {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
}

/// A quest picked during a check-in, credited to one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedQuest {
    pub domain: DomainId,
    pub source: QuestSource,
}

impl AcceptedQuest {
    pub fn suggestion(domain: DomainId, index: usize) -> Self {
        Self {
            domain,
            source: QuestSource::Suggestion { index },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub id: CheckInId,
    pub recorded_at: DateTime<Utc>,
    pub answers: RawAnswers,
    pub scores: Vec<DomainScore>,
    #[serde(default)]
    pub health_type: Option<HealthType>,
    #[serde(default)]
    pub accepted_quests: Vec<AcceptedQuest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

impl CheckInRecord {
    pub fn helped(&self, domain: DomainId) -> bool {
        self.accepted_quests
            .iter()
            .any(|accepted| accepted.domain == domain)
    }
}

/// Rolling check-in log holding at most [`CheckInHistory::CAPACITY`] entries, oldest evicted first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CheckInRecord>", into = "Vec<CheckInRecord>")]
pub struct CheckInHistory {
    entries: VecDeque<CheckInRecord>,
}

impl CheckInHistory {
    /// One year of weekly check-ins.
    pub const CAPACITY: usize = 52;

    pub fn push(&mut self, record: CheckInRecord) {
        self.entries.push_back(record);
        while self.entries.len() > Self::CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckInRecord> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&CheckInRecord> {
        self.entries.back()
    }
}

impl From<Vec<CheckInRecord>> for CheckInHistory {
    fn from(records: Vec<CheckInRecord>) -> Self {
        let mut history = Self::default();
        for record in records {
            history.push(record);
        }
        history
    }
}

impl From<CheckInHistory> for Vec<CheckInRecord> {
    fn from(history: CheckInHistory) -> Self {
        history.entries.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Active,
    Completed,
}

impl QuestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            QuestStatus::Active => "active",
            QuestStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub domain: DomainId,
    pub text: String,
    pub icon: String,
    pub status: QuestStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom: bool,
}

/// Cosmetic reward planted when a quest completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenElement {
    pub id: String,
    pub emoji: String,
    pub name: String,
    pub kind: NatureKind,
    pub domain: DomainId,
    pub quest_text: String,
    pub planted_at: DateTime<Utc>,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Normalized (trimmed, lower-cased) email used as the user record key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    /// `None` when nothing is left after trimming.
    pub fn normalize(email: &str) -> Option<Self> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An open session for one user. Passed explicitly to every user-scoped operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserKey,
    pub opened_at: DateTime<Utc>,
}

impl Session {
    pub fn open(user: UserKey, now: DateTime<Utc>) -> Self {
        Self {
            user,
            opened_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: UserKey,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub history: CheckInHistory,
    #[serde(default)]
    pub latest_scores: Option<Vec<DomainScore>>,
    #[serde(default)]
    pub health_type: Option<HealthType>,
    #[serde(default)]
    pub quests: QuestBoard,
    #[serde(default)]
    pub garden: Vec<GardenElement>,
    pub forest_code: String,
    #[serde(default)]
    pub settings: UserSettings,
}

impl UserRecord {
    pub fn new<R: Rng + ?Sized>(
        email: UserKey,
        name: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        Self {
            id: next_id("user", now),
            email,
            name: name.trim().to_string(),
            created_at: now,
            updated_at: None,
            last_check_in: None,
            history: CheckInHistory::default(),
            latest_scores: None,
            health_type: None,
            quests: QuestBoard::default(),
            garden: Vec::new(),
            forest_code: forest_code(rng),
            settings: UserSettings::default(),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }
}

const FOREST_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const FOREST_CODE_LEN: usize = 6;

/// Shareable garden code. The alphabet leaves out look-alike characters (0/O, 1/I).
pub fn forest_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..FOREST_CODE_LEN)
        .map(|_| FOREST_CODE_ALPHABET[rng.gen_range(0..FOREST_CODE_ALPHABET.len())] as char)
        .collect()
}
