use health_companions::checkin::{
    CompanionService, JsonFileStore, MemoryStore, RecordStore, StoreError, UserKey, UserRecord,
};
use health_companions::config::CompanionsConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// File the CLI keeps records in when neither `--data` nor `COMPANIONS_DATA_PATH` is set.
pub(crate) const DEFAULT_CLI_DATA_PATH: &str = "health-companions.json";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Record store selected at startup.
#[derive(Debug)]
pub(crate) enum CompanionStore {
    Memory(MemoryStore),
    File(JsonFileStore),
}

impl CompanionStore {
    pub(crate) fn open(data_path: Option<&Path>) -> Result<Self, StoreError> {
        match data_path {
            Some(path) => JsonFileStore::open(path).map(Self::File),
            None => {
                info!("no data path configured; records live in memory");
                Ok(Self::Memory(MemoryStore::new()))
            }
        }
    }

    fn backend(&self) -> &dyn RecordStore {
        match self {
            CompanionStore::Memory(store) => store,
            CompanionStore::File(store) => store,
        }
    }
}

impl RecordStore for CompanionStore {
    fn get(&self, key: &UserKey) -> Result<Option<UserRecord>, StoreError> {
        self.backend().get(key)
    }

    fn set(&self, record: UserRecord) -> Result<(), StoreError> {
        self.backend().set(record)
    }

    fn insert_new(&self, record: UserRecord) -> Result<bool, StoreError> {
        self.backend().insert_new(record)
    }

    fn update<T, E, F>(&self, key: &UserKey, change: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        match self {
            CompanionStore::Memory(store) => store.update(key, change),
            CompanionStore::File(store) => store.update(key, change),
        }
    }

    fn current_session(&self) -> Result<Option<UserKey>, StoreError> {
        self.backend().current_session()
    }

    fn set_current_session(&self, key: &UserKey) -> Result<(), StoreError> {
        self.backend().set_current_session(key)
    }

    fn clear_current_session(&self) -> Result<(), StoreError> {
        self.backend().clear_current_session()
    }
}

pub(crate) type Service = CompanionService<CompanionStore>;

pub(crate) fn build_service(
    config: &CompanionsConfig,
    data_path: Option<&Path>,
) -> Result<Arc<Service>, StoreError> {
    let store = CompanionStore::open(data_path)?;
    Ok(Arc::new(CompanionService::new(Arc::new(store), config)))
}

/// CLI commands always persist: explicit flag, then configuration, then the default file.
pub(crate) fn cli_data_path(flag: Option<PathBuf>, config: &CompanionsConfig) -> PathBuf {
    flag.or_else(|| config.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CLI_DATA_PATH))
}
