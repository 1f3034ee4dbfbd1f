use epical_engine::scene::{Case, SceneEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<SceneEngine>,
    pub(crate) cases: Arc<dyn CaseStore>,
}

/// Error enumeration for case store failures.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CaseStoreError {
    #[error("case store unavailable: {0}")]
    Unavailable(String),
}

/// Keeps the most recently evaluated case so the handover report can be built from it.
pub(crate) trait CaseStore: Send + Sync {
    fn save(&self, case: Case) -> Result<(), CaseStoreError>;
    fn last(&self) -> Result<Option<Case>, CaseStoreError>;
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCaseStore {
    last: Arc<Mutex<Option<Case>>>,
}

impl CaseStore for InMemoryCaseStore {
    fn save(&self, case: Case) -> Result<(), CaseStoreError> {
        let mut guard = self
            .last
            .lock()
            .map_err(|_| CaseStoreError::Unavailable("case store mutex poisoned".to_string()))?;
        *guard = Some(case);
        Ok(())
    }

    fn last(&self) -> Result<Option<Case>, CaseStoreError> {
        let guard = self
            .last
            .lock()
            .map_err(|_| CaseStoreError::Unavailable("case store mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }
}
