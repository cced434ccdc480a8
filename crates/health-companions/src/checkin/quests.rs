use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::{next_id, GardenElement, Quest, QuestId, QuestStatus};
use crate::catalog::garden::palette;
use crate::catalog::DomainId;

pub const CUSTOM_QUEST_ICON: &str = "✨";

/// Half-widths of the random placement around the owning companion.
const OFFSET_X_SPAN: f64 = 15.0;
const OFFSET_Y_SPAN: f64 = 10.0;

/// Quest about to join the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuest {
    pub domain: DomainId,
    pub text: String,
    pub icon: String,
    #[serde(default)]
    pub custom: bool,
}

impl NewQuest {
    pub fn custom(domain: DomainId, text: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            domain,
            text: text.into(),
            icon: icon.unwrap_or_else(|| CUSTOM_QUEST_ICON.to_string()),
            custom: true,
        }
    }

    /// The companion's micro-quest at `index`, if there is one.
    pub fn suggested(domain: DomainId, index: usize) -> Option<Self> {
        let micro = domain.companion().micro_quest(index)?;
        Some(Self {
            domain,
            text: micro.text.to_string(),
            icon: micro.icon.to_string(),
            custom: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(QuestId),
    /// A quest with the same domain and text was already on the board.
    AlreadyPresent(QuestId),
}

impl AddOutcome {
    pub fn id(&self) -> &QuestId {
        match self {
            AddOutcome::Added(id) | AddOutcome::AlreadyPresent(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("quest text must not be empty")]
    EmptyText,
    #[error("quest '{0}' not found")]
    NotFound(QuestId),
    #[error("quest '{0}' is already completed")]
    AlreadyCompleted(QuestId),
}

/// A user's quests. Active quests complete once; any quest can be removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestBoard {
    quests: Vec<Quest>,
}

impl QuestBoard {
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|quest| &quest.id == id)
    }

    pub fn active(&self) -> impl Iterator<Item = &Quest> {
        self.quests
            .iter()
            .filter(|quest| quest.status == QuestStatus::Active)
    }

    pub fn add(&mut self, quest: NewQuest, now: DateTime<Utc>) -> Result<AddOutcome, QuestError> {
        let text = quest.text.trim();
        if text.is_empty() {
            return Err(QuestError::EmptyText);
        }

        if let Some(existing) = self
            .quests
            .iter()
            .find(|existing| existing.domain == quest.domain && existing.text == text)
        {
            return Ok(AddOutcome::AlreadyPresent(existing.id.clone()));
        }

        let prefix = if quest.custom {
            "custom"
        } else {
            quest.domain.as_str()
        };
        let id = QuestId(next_id(prefix, now));
        self.quests.push(Quest {
            id: id.clone(),
            domain: quest.domain,
            text: text.to_string(),
            icon: quest.icon,
            status: QuestStatus::Active,
            created_at: now,
            completed_at: None,
            custom: quest.custom,
        });
        Ok(AddOutcome::Added(id))
    }

    /// Mark an active quest completed and grow exactly one garden element for it.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        id: &QuestId,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<GardenElement, QuestError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|quest| &quest.id == id)
            .ok_or_else(|| QuestError::NotFound(id.clone()))?;

        if quest.status == QuestStatus::Completed {
            return Err(QuestError::AlreadyCompleted(id.clone()));
        }
        quest.status = QuestStatus::Completed;
        quest.completed_at = Some(now);

        let elements = palette();
        let element = elements[rng.gen_range(0..elements.len())];
        Ok(GardenElement {
            id: next_id("garden", now),
            emoji: element.emoji.to_string(),
            name: element.name.to_string(),
            kind: element.kind,
            domain: quest.domain,
            quest_text: quest.text.clone(),
            planted_at: now,
            offset_x: rng.gen_range(-OFFSET_X_SPAN..OFFSET_X_SPAN),
            offset_y: rng.gen_range(-OFFSET_Y_SPAN..OFFSET_Y_SPAN),
        })
    }

    /// Remove a quest in any state.
    pub fn remove(&mut self, id: &QuestId) -> Result<Quest, QuestError> {
        let position = self
            .quests
            .iter()
            .position(|quest| &quest.id == id)
            .ok_or_else(|| QuestError::NotFound(id.clone()))?;
        Ok(self.quests.remove(position))
    }
}
