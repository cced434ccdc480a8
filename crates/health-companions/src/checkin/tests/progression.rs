use super::common::*;
use crate::catalog::DomainId;
use crate::checkin::domain::{AcceptedQuest, CheckInHistory, QuestSource};
use crate::checkin::progression::{
    check_in_streak, evolution_level, evolution_levels, streak_tolerance, MAX_EVOLUTION_LEVEL,
};

#[test]
fn evolution_is_zero_without_history() {
    let history = CheckInHistory::default();
    for domain in DomainId::ALL {
        assert_eq!(evolution_level(domain, &history), 0);
    }
}

#[test]
fn one_helped_check_in_raises_only_that_companion() {
    let history: CheckInHistory = vec![check_in_at(base_time(), vec![pip_quest()])].into();
    let levels = evolution_levels(&history);
    assert_eq!(levels[&DomainId::Pip], 1);
    assert_eq!(levels[&DomainId::Luna], 0);
}

#[test]
fn every_three_check_ins_raise_every_companion() {
    let history = weekly_history(3);
    assert!(evolution_levels(&history).values().all(|level| *level == 1));
}

#[test]
fn custom_and_community_quests_credit_their_domain() {
    let history: CheckInHistory = vec![check_in_at(
        base_time(),
        vec![
            AcceptedQuest {
                domain: DomainId::Oak,
                source: QuestSource::Custom {
                    text: "Stretch at lunch".to_string(),
                    icon: None,
                },
            },
            AcceptedQuest {
                domain: DomainId::Brook,
                source: QuestSource::Community {
                    text: "Cook with a friend".to_string(),
                },
            },
        ],
    )]
    .into();
    assert_eq!(evolution_level(DomainId::Oak, &history), 1);
    assert_eq!(evolution_level(DomainId::Brook, &history), 1);
    assert_eq!(evolution_level(DomainId::Sage, &history), 0);
}

#[test]
fn evolution_is_monotonic_and_capped() {
    let mut history = CheckInHistory::default();
    let mut previous = 0;
    for week in 0..30 {
        history.push(check_in_at(days_after_base(week * 7), vec![pip_quest()]));
        let level = evolution_level(DomainId::Pip, &history);
        assert!(level >= previous, "level dropped at week {week}");
        assert!(level <= MAX_EVOLUTION_LEVEL);
        previous = level;
    }
    assert_eq!(previous, MAX_EVOLUTION_LEVEL);
}

#[test]
fn streak_is_zero_for_empty_history() {
    assert_eq!(check_in_streak(&CheckInHistory::default()), 0);
}

#[test]
fn weekly_check_ins_count_every_week() {
    assert_eq!(check_in_streak(&weekly_history(1)), 1);
    assert_eq!(check_in_streak(&weekly_history(6)), 6);
}

#[test]
fn a_month_long_gap_breaks_the_streak() {
    let history = history_at(&[0, 7, 37, 44, 51]);
    assert_eq!(check_in_streak(&history), 3);
}

#[test]
fn streak_ignores_entry_order() {
    let shuffled = history_at(&[44, 0, 51, 37, 7]);
    assert_eq!(check_in_streak(&shuffled), 3);
}

#[test]
fn gap_of_exactly_ten_and_a_half_days_still_counts() {
    let latest = base_time() + streak_tolerance();
    let history: CheckInHistory = vec![
        check_in_at(base_time(), Vec::new()),
        check_in_at(latest, Vec::new()),
    ]
    .into();
    assert_eq!(check_in_streak(&history), 2);

    let too_late: CheckInHistory = vec![
        check_in_at(base_time(), Vec::new()),
        check_in_at(latest + chrono::Duration::minutes(1), Vec::new()),
    ]
    .into();
    assert_eq!(check_in_streak(&too_late), 1);
}

#[test]
fn history_keeps_the_latest_fifty_two_entries() {
    let mut history = CheckInHistory::default();
    for week in 0..60 {
        history.push(check_in_at(days_after_base(week * 7), Vec::new()));
        assert!(history.len() <= CheckInHistory::CAPACITY);
    }
    assert_eq!(history.len(), 52);
    let oldest = history.iter().next().expect("history is not empty");
    assert_eq!(oldest.recorded_at, days_after_base(8 * 7));
    assert_eq!(
        history.latest().map(|record| record.recorded_at),
        Some(days_after_base(59 * 7))
    );
}

#[test]
fn oversized_persisted_history_is_trimmed_on_load() {
    let records: Vec<_> = (0..55)
        .map(|week| check_in_at(days_after_base(week * 7), Vec::new()))
        .collect();
    let json = serde_json::to_string(&records).expect("serializes");
    let history: CheckInHistory = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(history.len(), 52);
}
