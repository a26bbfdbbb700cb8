use advisory_site::content::GuideLibrary;
use advisory_site::survey::{
    dispatch, QuestionBank, Report, ReportDelivery, SurveyCommand, SurveySession,
};
use chrono::{Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) bank: Arc<QuestionBank>,
    pub(crate) sessions: InMemorySessionStore,
    pub(crate) delivery: Arc<dyn ReportDelivery>,
    pub(crate) guides: Arc<GuideLibrary>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_session_id() -> String {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("svy-{id:06}")
}

/// Abandoned surveys are dropped once they are this old.
pub(crate) const SESSION_TTL_MINUTES: i64 = 120;
/// Upper bound on surveys held at once; the oldest are evicted first.
pub(crate) const SESSION_CAPACITY: usize = 10_000;

/// Surveys in flight; lost on restart, which is fine for an anonymous quiz.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, SurveySession>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_limits(Duration::minutes(SESSION_TTL_MINUTES), SESSION_CAPACITY)
    }
}

impl InMemorySessionStore {
    pub(crate) fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Stores `session` after pruning expired entries and, when full, the oldest ones.
    pub(crate) fn insert(&self, session: SurveySession) -> SurveySession {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");

        let cutoff = Utc::now() - self.ttl;
        let before = guard.len();
        guard.retain(|_, existing| existing.created_at > cutoff);

        while guard.len() >= self.capacity {
            let Some(oldest) = guard
                .values()
                .min_by_key(|existing| existing.created_at)
                .map(|existing| existing.id.clone())
            else {
                break;
            };
            guard.remove(&oldest);
        }

        let evicted = before - guard.len();
        if evicted > 0 {
            debug!(evicted, remaining = guard.len(), "pruned survey sessions");
        }

        guard.insert(session.id.clone(), session.clone());
        session
    }

    pub(crate) fn fetch(&self, id: &str) -> Option<SurveySession> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        guard
            .get(id)
            .filter(|session| !self.is_expired(session))
            .cloned()
    }

    /// Applies `update` under the lock so concurrent events for one session serialize.
    pub(crate) fn update<T>(
        &self,
        id: &str,
        update: impl FnOnce(&mut SurveySession) -> T,
    ) -> Option<T> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.get(id).is_some_and(|session| self.is_expired(session)) {
            guard.remove(id);
            return None;
        }
        guard.get_mut(id).map(update)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }

    fn is_expired(&self, session: &SurveySession) -> bool {
        session.created_at <= Utc::now() - self.ttl
    }
}

/// Runs relay commands off the request path; failures only reach the log.
pub(crate) fn spawn_deliveries(
    delivery: Arc<dyn ReportDelivery>,
    report: Report,
    commands: Vec<SurveyCommand>,
) {
    if commands.is_empty() {
        return;
    }

    let handle = tokio::task::spawn_blocking(move || {
        for command in &commands {
            dispatch(command, &report, delivery.as_ref());
        }
    });

    tokio::spawn(async move {
        if let Err(err) = handle.await {
            warn!(%err, "survey delivery task aborted");
        }
    });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_sequential_and_prefixed() {
        let first = next_session_id();
        let second = next_session_id();
        assert!(first.starts_with("svy-"));
        assert_ne!(first, second);
    }

    #[test]
    fn store_updates_existing_sessions_only() {
        let bank = QuestionBank::standard();
        let store = InMemorySessionStore::default();
        let session = store.insert(SurveySession::new("svy-test".to_string(), &bank));

        let stage = store.update(&session.id, |session| {
            session.state.current_question = 4;
            session.state.stage
        });
        assert!(stage.is_some());
        assert_eq!(
            store.fetch("svy-test").map(|s| s.state.current_question),
            Some(4)
        );
        assert!(store.update("missing", |_| ()).is_none());
    }

    fn session_aged(bank: &QuestionBank, id: &str, minutes: i64) -> SurveySession {
        let mut session = SurveySession::new(id.to_string(), bank);
        session.created_at = Utc::now() - Duration::minutes(minutes);
        session
    }

    #[test]
    fn expired_sessions_are_pruned_on_insert() {
        let bank = QuestionBank::standard();
        let store = InMemorySessionStore::with_limits(Duration::minutes(30), 100);
        for index in 0..50 {
            store.insert(session_aged(&bank, &format!("svy-stale-{index}"), 45));
        }
        assert!(store.fetch("svy-stale-0").is_none());
        assert!(store.update("svy-stale-1", |_| ()).is_none());

        store.insert(session_aged(&bank, "svy-fresh", 0));
        assert_eq!(store.len(), 1);
        assert!(store.fetch("svy-fresh").is_some());
    }

    #[test]
    fn full_store_evicts_oldest_sessions() {
        let bank = QuestionBank::standard();
        let store = InMemorySessionStore::with_limits(Duration::minutes(60), 3);
        store.insert(session_aged(&bank, "svy-a", 30));
        store.insert(session_aged(&bank, "svy-b", 20));
        store.insert(session_aged(&bank, "svy-c", 10));
        store.insert(session_aged(&bank, "svy-d", 0));

        assert_eq!(store.len(), 3);
        assert!(store.fetch("svy-a").is_none());
        assert!(store.fetch("svy-b").is_some());
        assert!(store.fetch("svy-d").is_some());
    }
}
