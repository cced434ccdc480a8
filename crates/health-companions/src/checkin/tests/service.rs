use std::sync::Arc;

use super::common::*;
use crate::catalog::{Archetype, CatalogError, DomainId, HealthType, TypeCode};
use crate::checkin::domain::{AcceptedQuest, Band, QuestSource, QuestStatus, UserKey};
use crate::checkin::quests::{NewQuest, QuestError};
use crate::checkin::repository::{RecordStore, StoreError};
use crate::checkin::{
    AccountError, CheckInDraft, ClassifierStrategy, CompanionService, ScoringPolicy, ServiceError,
};

fn scenario_draft() -> CheckInDraft {
    CheckInDraft {
        answers: answers(&[("pip-1", 20.0), ("pip-2", 30.0), ("luna-1", 80.0)]),
        accepted_quests: vec![pip_quest()],
        ..CheckInDraft::default()
    }
}

#[test]
fn create_account_normalizes_email_and_opens_a_session() {
    let (service, store) = build_service();
    let (session, record) = service
        .create_account("  Robin@Example.COM ", " Robin ")
        .expect("account created");

    assert_eq!(session.user.as_str(), "robin@example.com");
    assert_eq!(record.name, "Robin");
    assert_eq!(record.forest_code.len(), 6);
    assert!(record.settings.notifications);
    assert_eq!(
        store.current_session().expect("store readable"),
        Some(session.user.clone())
    );
}

#[test]
fn duplicate_accounts_are_rejected() {
    let (service, _) = build_service();
    service
        .create_account("robin@example.com", "Robin")
        .expect("first account");

    match service.create_account("ROBIN@example.com", "Other") {
        Err(error @ AccountError::AlreadyExists) => {
            assert_eq!(error.to_string(), "An account with this email already exists")
        }
        other => panic!("expected duplicate rejection, got {other:?}"),
    }
}

#[test]
fn blank_email_is_rejected() {
    let (service, _) = build_service();
    assert!(matches!(
        service.create_account("   ", "Nobody"),
        Err(AccountError::MissingEmail)
    ));
}

#[test]
fn login_requires_an_existing_account() {
    let (service, _) = build_service();
    match service.login("ghost@example.com") {
        Err(error @ AccountError::NotFound) => {
            assert_eq!(error.to_string(), "No account found with this email")
        }
        other => panic!("expected missing account, got {other:?}"),
    }
}

#[test]
fn logout_forgets_the_current_session() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let (resumed, _) = service
        .resume()
        .expect("store readable")
        .expect("session remembered");
    assert_eq!(resumed.user, session.user);

    service.logout(session).expect("logout succeeds");
    assert!(service.resume().expect("store readable").is_none());

    let (again, _) = service.login("robin@example.com").expect("login");
    assert_eq!(again.user.as_str(), "robin@example.com");
    assert!(service.resume().expect("store readable").is_some());
}

#[test]
fn saving_the_weekly_scenario_updates_scores_type_and_evolution() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let record = service
        .save_check_in(&session, scenario_draft())
        .expect("check-in saved");

    let scores = record.latest_scores.as_ref().expect("scores snapshot");
    let pip = scores
        .iter()
        .find(|entry| entry.domain == DomainId::Pip)
        .expect("pip scored");
    assert_eq!(pip.score, 25.0);
    assert_eq!(pip.band, Band::Low);
    let luna = scores
        .iter()
        .find(|entry| entry.domain == DomainId::Luna)
        .expect("luna scored");
    assert_eq!(luna.band, Band::High);

    assert_eq!(record.health_type, Some(HealthType::Axis(TypeCode::Istj)));
    assert_eq!(record.history.len(), 1);
    assert!(record.last_check_in.is_some());
    assert_eq!(record.quests.quests().len(), 1);
    assert_eq!(record.quests.quests()[0].text, "Take a 10-minute walk outside");

    let progress = service.progress(&session).expect("progress");
    assert_eq!(progress.evolution[&DomainId::Pip], 1);
    assert_eq!(progress.evolution[&DomainId::Luna], 0);
    assert_eq!(progress.streak, 1);
    assert_eq!(progress.stats.check_ins, 1);
}

#[test]
fn later_check_ins_reclassify_from_their_scores() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let first = service
        .save_check_in(&session, scenario_draft())
        .expect("first check-in");
    assert_eq!(first.health_type, Some(HealthType::Axis(TypeCode::Istj)));

    let energetic = answers(&[("pip-1", 90.0), ("pip-2", 90.0)]);
    let fresh = service.evaluate(&energetic).classification.health_type;
    assert_eq!(fresh, HealthType::Axis(TypeCode::Entj));

    let second = service
        .save_check_in(
            &session,
            CheckInDraft {
                answers: energetic,
                ..scenario_draft()
            },
        )
        .expect("second check-in");
    assert_eq!(second.health_type, Some(fresh));
    assert_eq!(second.history.len(), 2);
    assert_eq!(
        second.quests.quests().len(),
        1,
        "accepting the same suggestion twice keeps one quest"
    );
}

#[test]
fn previous_health_type_stands_for_a_check_in_without_answers() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let first = service
        .save_check_in(
            &session,
            CheckInDraft {
                health_type: Some("enfp".to_string()),
                ..scenario_draft()
            },
        )
        .expect("first check-in");
    assert_eq!(first.health_type, Some(HealthType::Axis(TypeCode::Enfp)));

    let second = service
        .save_check_in(&session, CheckInDraft::default())
        .expect("empty check-in");
    assert_eq!(second.health_type, Some(HealthType::Axis(TypeCode::Enfp)));
    assert_eq!(second.history.len(), 2);
}

#[test]
fn assessment_answers_set_the_health_type() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let assessment = (1..=10)
        .map(|question| crate::catalog::AssessmentAnswer {
            question,
            option: 1,
        })
        .collect();
    let record = service
        .save_check_in(
            &session,
            CheckInDraft {
                assessment: Some(assessment),
                ..scenario_draft()
            },
        )
        .expect("check-in saved");
    assert_eq!(record.health_type, Some(HealthType::Axis(TypeCode::Infp)));
}

#[test]
fn types_from_another_catalog_are_rejected() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let result = service.save_check_in(
        &session,
        CheckInDraft {
            health_type: Some("calm_restorer".to_string()),
            ..scenario_draft()
        },
    );
    assert!(matches!(
        result,
        Err(ServiceError::Catalog(CatalogError::UnknownTypeCode(_)))
    ));
    assert!(service
        .record(&session)
        .expect("record readable")
        .history
        .is_empty());
}

#[test]
fn unknown_suggestions_leave_the_record_untouched() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let result = service.save_check_in(
        &session,
        CheckInDraft {
            accepted_quests: vec![AcceptedQuest::suggestion(DomainId::Oak, 9)],
            ..scenario_draft()
        },
    );
    assert!(matches!(
        result,
        Err(ServiceError::UnknownSuggestion {
            domain: DomainId::Oak,
            index: 9
        })
    ));
    assert!(service
        .record(&session)
        .expect("record readable")
        .history
        .is_empty());
}

#[test]
fn custom_quests_from_a_check_in_join_the_board() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let record = service
        .save_check_in(
            &session,
            CheckInDraft {
                accepted_quests: vec![AcceptedQuest {
                    domain: DomainId::Coral,
                    source: QuestSource::Custom {
                        text: "Call an old friend".to_string(),
                        icon: Some("📞".to_string()),
                    },
                }],
                ..scenario_draft()
            },
        )
        .expect("check-in saved");

    let quest = &record.quests.quests()[0];
    assert!(quest.custom);
    assert_eq!(quest.icon, "📞");
    assert_eq!(quest.domain, DomainId::Coral);
}

#[test]
fn completing_a_quest_grows_the_garden() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let quest = service
        .add_suggested_quest(&session, DomainId::Luna, 0)
        .expect("quest added");
    let element = service
        .complete_quest(&session, &quest.id, &mut seeded_rng(5))
        .expect("quest completed");
    assert_eq!(element.domain, DomainId::Luna);

    let record = service.record(&session).expect("record readable");
    assert_eq!(record.garden.len(), 1);
    assert_eq!(
        record.quests.get(&quest.id).map(|quest| quest.status),
        Some(QuestStatus::Completed)
    );

    let repeat = service.complete_quest(&session, &quest.id, &mut seeded_rng(5));
    assert!(matches!(
        repeat,
        Err(ServiceError::Quest(QuestError::AlreadyCompleted(_)))
    ));
    assert_eq!(service.record(&session).expect("readable").garden.len(), 1);

    let stats = service.progress(&session).expect("progress").stats;
    assert_eq!(stats.quests_completed, 1);
    assert_eq!(stats.garden_size, 1);
}

#[test]
fn removing_a_quest_drops_it_from_the_board() {
    let (service, _) = build_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let quest = service
        .add_quest(
            &session,
            NewQuest::custom(DomainId::Ember, "Dance in the kitchen", None),
        )
        .expect("quest added");
    service
        .remove_quest(&session, &quest.id)
        .expect("quest removed");

    let record = service.record(&session).expect("record readable");
    assert!(record.quests.quests().is_empty());
    assert!(matches!(
        service.remove_quest(&session, &quest.id),
        Err(ServiceError::Quest(QuestError::NotFound(_)))
    ));
}

#[test]
fn archetype_deployments_store_archetypes() {
    let (service, _) = build_service_with(ClassifierStrategy::Archetype);
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    let record = service
        .save_check_in(
            &session,
            CheckInDraft {
                answers: answers(&[("pip-1", 90.0), ("ember-1", 95.0)]),
                ..CheckInDraft::default()
            },
        )
        .expect("check-in saved");
    assert_eq!(
        record.health_type,
        Some(HealthType::Archetype(Archetype::BrightEnergizer))
    );
}

#[test]
fn evaluate_does_not_touch_storage() {
    let (service, store) = build_service();
    let evaluation = service.evaluate(&scenario_draft().answers);
    assert_eq!(evaluation.health_type.health_type, HealthType::Axis(TypeCode::Istj));
    assert_eq!(evaluation.ranking.needs_attention[0].domain, DomainId::Pip);
    assert!(store
        .get(&UserKey::normalize("robin@example.com").expect("valid"))
        .expect("store readable")
        .is_none());
}

#[test]
fn quest_suggestions_follow_the_health_type() {
    let (service, _) = build_service();
    assert_eq!(
        service.quest_suggestions(None)[0],
        "Take a mindful walk today"
    );
    assert_eq!(
        service.quest_suggestions(Some(HealthType::Axis(TypeCode::Esfp)))[0],
        "Join a dance or group fitness class"
    );
}

#[test]
fn store_failures_surface_as_errors() {
    let service = CompanionService::with_settings(
        Arc::new(UnavailableStore),
        ClassifierStrategy::Axis,
        ScoringPolicy::default(),
    );
    assert!(matches!(
        service.create_account("robin@example.com", "Robin"),
        Err(AccountError::Store(StoreError::Unavailable(_)))
    ));
    assert!(matches!(
        service.resume(),
        Err(ServiceError::Store(StoreError::Unavailable(_)))
    ));
}

fn slow_service() -> CompanionService<SlowStore> {
    CompanionService::with_settings(
        Arc::new(SlowStore::new(30)),
        ClassifierStrategy::Axis,
        ScoringPolicy::default(),
    )
}

#[test]
fn concurrent_completions_plant_a_single_element() {
    let service = slow_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");
    let quest = service
        .add_suggested_quest(&session, DomainId::Pip, 0)
        .expect("quest added");

    let results: Vec<_> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..2)
            .map(|seed| {
                let (service, session, id) = (&service, &session, &quest.id);
                scope.spawn(move || service.complete_quest(session, id, &mut seeded_rng(seed)))
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker finished"))
            .collect()
    });

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(ServiceError::Quest(QuestError::AlreadyCompleted(_)))
    )));
    let record = service.record(&session).expect("record");
    assert_eq!(record.garden.len(), 1);
    assert_eq!(record.quests.quests()[0].status, QuestStatus::Completed);
}

#[test]
fn concurrent_check_ins_are_all_kept() {
    let service = slow_service();
    let (session, _) = service
        .create_account("robin@example.com", "Robin")
        .expect("account created");

    std::thread::scope(|scope| {
        for _ in 0..3 {
            let (service, session) = (&service, &session);
            scope.spawn(move || {
                service
                    .save_check_in(session, scenario_draft())
                    .expect("check-in saved")
            });
        }
    });

    let record = service.record(&session).expect("record");
    assert_eq!(record.history.len(), 3);
    assert_eq!(record.quests.quests().len(), 1);
}

#[test]
fn concurrent_signups_create_one_account() {
    let service = slow_service();

    let created = std::thread::scope(|scope| {
        let workers: Vec<_> = ["robin@example.com", " ROBIN@example.com"]
            .into_iter()
            .map(|email| {
                let service = &service;
                scope.spawn(move || service.create_account(email, "Robin"))
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker finished"))
            .filter(|result| result.is_ok())
            .count()
    });
    assert_eq!(created, 1);
}
