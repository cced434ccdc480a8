use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::domain::{CheckInHistory, QuestStatus, UserRecord};
use crate::catalog::DomainId;

pub const MAX_EVOLUTION_LEVEL: u8 = 5;
/// Every this-many check-ins earns each companion one level.
pub const CHECK_INS_PER_LEVEL: usize = 3;

/// Longest gap between consecutive check-ins that keeps a weekly streak alive.
pub fn streak_tolerance() -> Duration {
    Duration::hours(7 * 24 * 3 / 2)
}

/// Help count for the domain plus one level per three check-ins, capped at five.
pub fn evolution_level(domain: DomainId, history: &CheckInHistory) -> u8 {
    let helped = history.iter().filter(|record| record.helped(domain)).count();
    let bonus = history.len() / CHECK_INS_PER_LEVEL;
    let level = (helped + bonus).min(MAX_EVOLUTION_LEVEL as usize);
    level as u8
}

pub fn evolution_levels(history: &CheckInHistory) -> BTreeMap<DomainId, u8> {
    DomainId::ALL
        .into_iter()
        .map(|domain| (domain, evolution_level(domain, history)))
        .collect()
}

/// Consecutive check-ins counting back from the most recent, each within
/// [`streak_tolerance`] of the next. Entry order in `history` does not matter.
pub fn check_in_streak(history: &CheckInHistory) -> u32 {
    let mut dates: Vec<DateTime<Utc>> = history.iter().map(|record| record.recorded_at).collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable_by(|left, right| right.cmp(left));

    let tolerance = streak_tolerance();
    let mut streak = 1;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] <= tolerance {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub check_ins: usize,
    pub quests_completed: usize,
    pub garden_size: usize,
    pub streak: u32,
    pub member_since: DateTime<Utc>,
}

pub fn user_stats(record: &UserRecord) -> UserStats {
    UserStats {
        check_ins: record.history.len(),
        quests_completed: record
            .quests
            .quests()
            .iter()
            .filter(|quest| quest.status == QuestStatus::Completed)
            .count(),
        garden_size: record.garden.len(),
        streak: check_in_streak(&record.history),
        member_since: record.created_at,
    }
}
