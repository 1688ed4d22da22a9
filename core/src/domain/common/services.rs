use std::sync::{
    Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    atomic::{AtomicU64, Ordering},
};

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::ports::LLMClient,
    session::entities::SessionState, storage::ports::LocalStore,
};

/// Application service shared by every port implementation.
///
/// The LLM client and the local store are injected; the session state is the
/// in-memory mirror of what the store persists plus the transient capture
/// state the presentation layer renders.
pub struct Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) local_store: Arc<ST>,
    pub(crate) session: Arc<RwLock<SessionState>>,
    pub(crate) profile_in_flight: Arc<InFlightGate>,
    pub(crate) analysis_in_flight: Arc<InFlightGate>,
}

impl<LLM, ST> Clone for Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            local_store: Arc::clone(&self.local_store),
            session: Arc::clone(&self.session),
            profile_in_flight: Arc::clone(&self.profile_in_flight),
            analysis_in_flight: Arc::clone(&self.analysis_in_flight),
        }
    }
}

impl<LLM, ST> Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    /// Builds the service and rehydrates the session from the store.
    pub async fn new(llm_client: LLM, local_store: ST) -> Self {
        let user = local_store.load_user().await;
        let history = local_store.load_history().await;

        Self {
            llm_client: Arc::new(llm_client),
            local_store: Arc::new(local_store),
            session: Arc::new(RwLock::new(SessionState::restored(user, history))),
            profile_in_flight: Arc::new(InFlightGate::default()),
            analysis_in_flight: Arc::new(InFlightGate::default()),
        }
    }

    pub(crate) fn read_session(&self) -> Result<RwLockReadGuard<'_, SessionState>, CoreError> {
        self.session.read().map_err(|e| {
            error!("Session lock poisoned: {}", e);
            CoreError::InternalServerError
        })
    }

    pub(crate) fn write_session(&self) -> Result<RwLockWriteGuard<'_, SessionState>, CoreError> {
        self.session.write().map_err(|e| {
            error!("Session lock poisoned: {}", e);
            CoreError::InternalServerError
        })
    }
}

/// Admits one request at a time.
///
/// Each acquisition takes a fresh generation number and the gate remembers
/// which generation holds it, `0` meaning open. [`InFlightGate::reopen`]
/// releases the gate on behalf of a request that is still running; when that
/// request finally finishes its guard no longer matches and leaves the gate
/// alone.
#[derive(Debug, Default)]
pub(crate) struct InFlightGate {
    holder: AtomicU64,
    generations: AtomicU64,
}

impl InFlightGate {
    pub(crate) fn is_held(&self) -> bool {
        self.holder.load(Ordering::Acquire) != 0
    }

    pub(crate) fn reopen(&self) {
        self.holder.store(0, Ordering::Release);
    }
}

/// Holds an [`InFlightGate`] closed until dropped.
///
/// Dropping also happens when the awaiting future is abandoned, so a
/// disconnected caller never leaves the gate stuck.
pub(crate) struct InFlight {
    gate: Arc<InFlightGate>,
    generation: u64,
}

impl InFlight {
    pub(crate) fn acquire(gate: &Arc<InFlightGate>) -> Option<Self> {
        let generation = gate.generations.fetch_add(1, Ordering::AcqRel) + 1;

        gate.holder
            .compare_exchange(0, generation, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                gate: Arc::clone(gate),
                generation,
            })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        // a reopened gate may already belong to a newer request
        let _ = self.gate.holder.compare_exchange(
            self.generation,
            0,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}
