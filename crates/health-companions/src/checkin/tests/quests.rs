use super::common::*;
use crate::catalog::garden::palette;
use crate::catalog::DomainId;
use crate::checkin::domain::QuestStatus;
use crate::checkin::quests::{AddOutcome, NewQuest, QuestBoard, QuestError};

fn board_with(quests: &[NewQuest]) -> QuestBoard {
    let mut board = QuestBoard::default();
    for quest in quests {
        board.add(quest.clone(), base_time()).expect("quest added");
    }
    board
}

fn walk() -> NewQuest {
    NewQuest::suggested(DomainId::Pip, 0).expect("pip has a first suggestion")
}

#[test]
fn adding_the_same_quest_twice_keeps_one_entry() {
    let mut board = QuestBoard::default();
    let first = board.add(walk(), base_time()).expect("added");
    let second = board.add(walk(), base_time()).expect("deduped");

    assert!(matches!(first, AddOutcome::Added(_)));
    assert_eq!(second, AddOutcome::AlreadyPresent(first.id().clone()));
    assert_eq!(board.quests().len(), 1);
}

#[test]
fn same_text_for_another_domain_is_a_new_quest() {
    let mut board = board_with(&[NewQuest::custom(DomainId::Oak, "Take 5 slow breaths", None)]);
    let outcome = board
        .add(
            NewQuest::custom(DomainId::Sage, "Take 5 slow breaths", None),
            base_time(),
        )
        .expect("added");
    assert!(matches!(outcome, AddOutcome::Added(_)));
    assert_eq!(board.quests().len(), 2);
}

#[test]
fn custom_quests_are_flagged_and_trimmed() {
    let board = board_with(&[NewQuest::custom(DomainId::Coral, "  Call mum  ", None)]);
    let quest = &board.quests()[0];
    assert!(quest.custom);
    assert_eq!(quest.text, "Call mum");
    assert_eq!(quest.icon, "✨");
    assert!(quest.id.0.starts_with("custom-"));
    assert_eq!(quest.status, QuestStatus::Active);
}

#[test]
fn blank_quest_text_is_rejected() {
    let mut board = QuestBoard::default();
    let result = board.add(NewQuest::custom(DomainId::Coral, "   ", None), base_time());
    assert_eq!(result, Err(QuestError::EmptyText));
}

#[test]
fn completing_an_active_quest_plants_one_element() {
    let mut board = board_with(&[walk()]);
    let id = board.quests()[0].id.clone();
    let mut rng = seeded_rng(7);

    let element = board
        .complete(&id, days_after_base(1), &mut rng)
        .expect("completes");
    assert_eq!(element.domain, DomainId::Pip);
    assert_eq!(element.quest_text, "Take a 10-minute walk outside");
    assert!(palette().iter().any(|entry| entry.name == element.name));
    assert!((-15.0..15.0).contains(&element.offset_x));
    assert!((-10.0..10.0).contains(&element.offset_y));

    let quest = board.get(&id).expect("still on the board");
    assert_eq!(quest.status, QuestStatus::Completed);
    assert_eq!(quest.completed_at, Some(days_after_base(1)));
}

#[test]
fn completing_twice_is_rejected_without_a_second_element() {
    let mut board = board_with(&[walk()]);
    let id = board.quests()[0].id.clone();
    let mut rng = seeded_rng(1);

    board.complete(&id, base_time(), &mut rng).expect("completes");
    let repeat = board.complete(&id, base_time(), &mut rng);
    assert_eq!(repeat, Err(QuestError::AlreadyCompleted(id)));
}

#[test]
fn removed_quests_cannot_be_completed() {
    let mut board = board_with(&[walk()]);
    let id = board.quests()[0].id.clone();

    let removed = board.remove(&id).expect("removes");
    assert_eq!(removed.id, id);
    assert!(board.quests().is_empty());

    let result = board.complete(&id, base_time(), &mut seeded_rng(3));
    assert_eq!(result, Err(QuestError::NotFound(id.clone())));
    assert_eq!(board.remove(&id), Err(QuestError::NotFound(id)));
}

#[test]
fn completed_quests_can_still_be_removed() {
    let mut board = board_with(&[walk()]);
    let id = board.quests()[0].id.clone();
    board
        .complete(&id, base_time(), &mut seeded_rng(11))
        .expect("completes");
    assert!(board.remove(&id).is_ok());
    assert_eq!(board.active().count(), 0);
}

#[test]
fn the_same_seed_grows_the_same_garden() {
    let plant = |seed| {
        let mut board = board_with(&[walk()]);
        let id = board.quests()[0].id.clone();
        board
            .complete(&id, base_time(), &mut seeded_rng(seed))
            .expect("completes")
    };
    let first = plant(42);
    let second = plant(42);
    assert_eq!(first.name, second.name);
    assert_eq!(first.offset_x, second.offset_x);
    assert_eq!(first.offset_y, second.offset_y);
}

#[test]
fn suggestions_outside_the_catalog_do_not_exist() {
    assert!(NewQuest::suggested(DomainId::Luna, 2).is_some());
    assert!(NewQuest::suggested(DomainId::Luna, 3).is_none());
}
