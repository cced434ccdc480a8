use std::sync::Arc;
use std::thread;
use std::time::Duration as StdDuration;

use axum::response::Response;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use crate::catalog::DomainId;
use crate::checkin::domain::{
    AcceptedQuest, CheckInHistory, CheckInId, CheckInRecord, RawAnswers, UserKey, UserRecord,
};
use crate::checkin::repository::{MemoryStore, RecordStore, StoreError};
use crate::checkin::{companion_router, ClassifierStrategy, CompanionService, ScoringPolicy};

pub(super) fn answers(pairs: &[(&str, f64)]) -> RawAnswers {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days_after_base(days: i64) -> DateTime<Utc> {
    base_time() + Duration::days(days)
}

pub(super) fn check_in_at(
    recorded_at: DateTime<Utc>,
    accepted_quests: Vec<AcceptedQuest>,
) -> CheckInRecord {
    CheckInRecord {
        id: CheckInId(format!("checkin-{}", recorded_at.timestamp_millis())),
        recorded_at,
        answers: RawAnswers::new(),
        scores: Vec::new(),
        health_type: None,
        accepted_quests,
        reflection: None,
    }
}

/// One check-in per entry of `offsets` (days after the base time), no quests.
pub(super) fn history_at(offsets: &[i64]) -> CheckInHistory {
    offsets
        .iter()
        .map(|days| check_in_at(days_after_base(*days), Vec::new()))
        .collect::<Vec<_>>()
        .into()
}

pub(super) fn weekly_history(count: i64) -> CheckInHistory {
    let offsets: Vec<i64> = (0..count).map(|week| week * 7).collect();
    history_at(&offsets)
}

pub(super) fn pip_quest() -> AcceptedQuest {
    AcceptedQuest::suggestion(DomainId::Pip, 0)
}

pub(super) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub(super) fn build_service() -> (Arc<CompanionService<MemoryStore>>, Arc<MemoryStore>) {
    build_service_with(ClassifierStrategy::Axis)
}

pub(super) fn build_service_with(
    classifier: ClassifierStrategy,
) -> (Arc<CompanionService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(CompanionService::with_settings(
        store.clone(),
        classifier,
        ScoringPolicy::default(),
    ));
    (service, store)
}

pub(super) fn router_with_service(service: Arc<CompanionService<MemoryStore>>) -> Router {
    companion_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store whose backend is always down.
pub(super) struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn get(&self, _key: &UserKey) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn set(&self, _record: UserRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn insert_new(&self, _record: UserRecord) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn update<T, E, F>(&self, _key: &UserKey, _change: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        Err(StoreError::Unavailable("disk offline".to_string()).into())
    }

    fn current_session(&self) -> Result<Option<UserKey>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn set_current_session(&self, _key: &UserKey) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn clear_current_session(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

/// In-memory store that pauses inside every read and every update, so concurrent writers
/// overlap whenever the store lets them.
pub(super) struct SlowStore {
    inner: MemoryStore,
    pause: StdDuration,
}

impl SlowStore {
    pub(super) fn new(pause_ms: u64) -> Self {
        Self {
            inner: MemoryStore::new(),
            pause: StdDuration::from_millis(pause_ms),
        }
    }
}

impl RecordStore for SlowStore {
    fn get(&self, key: &UserKey) -> Result<Option<UserRecord>, StoreError> {
        let record = self.inner.get(key)?;
        thread::sleep(self.pause);
        Ok(record)
    }

    fn set(&self, record: UserRecord) -> Result<(), StoreError> {
        self.inner.set(record)
    }

    fn insert_new(&self, record: UserRecord) -> Result<bool, StoreError> {
        self.inner.insert_new(record)
    }

    fn update<T, E, F>(&self, key: &UserKey, change: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.inner.update(key, |record| {
            thread::sleep(self.pause);
            change(record)
        })
    }

    fn current_session(&self) -> Result<Option<UserKey>, StoreError> {
        self.inner.current_session()
    }

    fn set_current_session(&self, key: &UserKey) -> Result<(), StoreError> {
        self.inner.set_current_session(key)
    }

    fn clear_current_session(&self) -> Result<(), StoreError> {
        self.inner.clear_current_session()
    }
}
