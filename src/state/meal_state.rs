// ============================================================================
// MEAL STATE - Módulo "meal": estado + transiciones + acción fetch
// ============================================================================
// Toda escritura pasa por `commit(MealMutation)`. Cada fetch recibe un id;
// solo el último emitido puede confirmar éxito o fallo, las respuestas
// viejas se descartan aunque lleguen después.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::models::Meal;
use crate::services::{ApiError, MealApi};
use crate::state::reactivity::{SubscriptionId, Subscribers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealPhase {
    Idle,
    Pending,
    Fetched,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MealState {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub nosh: String,
    pub pending: bool,
    /// Una vez true, nunca vuelve a false
    pub is_fetched: bool,
    pub error: Option<String>,
    /// Unix ms del último commit exitoso
    pub fetched_at: Option<i64>,
}

impl MealState {
    pub fn phase(&self) -> MealPhase {
        if self.pending {
            MealPhase::Pending
        } else if self.error.is_some() {
            MealPhase::Failed
        } else if self.is_fetched {
            MealPhase::Fetched
        } else {
            MealPhase::Idle
        }
    }

    pub fn meal(&self) -> Option<Meal> {
        self.is_fetched.then(|| Meal {
            breakfast: self.breakfast.clone(),
            lunch: self.lunch.clone(),
            dinner: self.dinner.clone(),
            nosh: self.nosh.clone(),
        })
    }
}

/// Transiciones del módulo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealMutation {
    Request { request_id: u64 },
    Success { request_id: u64, meal: Meal },
    Failure { request_id: u64, error: String },
}

#[derive(Clone, Default)]
pub struct MealStore {
    state: Rc<RefCell<MealState>>,
    latest_request: Rc<Cell<u64>>,
    subscribers: Subscribers,
}

impl PartialEq for MealStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for MealStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MealStore")
            .field("state", &*self.state.borrow())
            .field("latest_request", &self.latest_request.get())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl MealStore {
    pub const NAMESPACE: &'static str = "meal";

    pub fn new() -> Self {
        Self::default()
    }

    /// Copia del estado actual
    pub fn state(&self) -> MealState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> MealPhase {
        self.state.borrow().phase()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    pub fn is_fetched(&self) -> bool {
        self.state.borrow().is_fetched
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    /// Único punto de escritura del estado
    pub fn commit(&self, mutation: MealMutation) {
        let applied = {
            let mut state = self.state.borrow_mut();
            match mutation {
                MealMutation::Request { request_id } => {
                    self.latest_request.set(request_id);
                    state.pending = true;
                    state.error = None;
                    true
                }
                MealMutation::Success { request_id, meal } => {
                    if self.is_stale(request_id) {
                        false
                    } else {
                        state.breakfast = meal.breakfast;
                        state.lunch = meal.lunch;
                        state.dinner = meal.dinner;
                        state.nosh = meal.nosh;
                        state.is_fetched = true;
                        state.pending = false;
                        state.error = None;
                        state.fetched_at = Some(chrono::Utc::now().timestamp_millis());
                        true
                    }
                }
                MealMutation::Failure { request_id, error } => {
                    if self.is_stale(request_id) {
                        false
                    } else {
                        state.pending = false;
                        state.error = Some(error);
                        true
                    }
                }
            }
        };

        if applied {
            self.subscribers.notify();
        }
    }

    fn is_stale(&self, request_id: u64) -> bool {
        let latest = self.latest_request.get();
        if request_id != latest {
            log::debug!(
                "🍽️ [{}] Respuesta #{} descartada (última: #{})",
                Self::NAMESPACE,
                request_id,
                latest
            );
            return true;
        }
        false
    }

    /// Pide las comidas del día.
    ///
    /// El estado pasa a `Pending` al llamar, antes de esperar el future. El
    /// resultado se confirma solo si no se emitió otro fetch entre medias.
    /// Si el future se suelta sin terminar, el estado queda en `Pending`
    /// hasta el siguiente fetch.
    pub fn fetch_meal<'a, A>(&self, api: &'a A) -> impl Future<Output = Result<Meal, ApiError>> + 'a
    where
        A: MealApi,
    {
        let request_id = self.latest_request.get() + 1;
        self.commit(MealMutation::Request { request_id });
        log::info!("🍽️ [{}] Fetch #{} iniciado", Self::NAMESPACE, request_id);

        let store = self.clone();
        async move {
            let outcome = api.get_meal().await.and_then(Meal::try_from);

            match &outcome {
                Ok(meal) => {
                    log::info!("✅ [{}] Fetch #{} completado", Self::NAMESPACE, request_id);
                    store.commit(MealMutation::Success {
                        request_id,
                        meal: meal.clone(),
                    });
                }
                Err(e) => {
                    log::error!("❌ [{}] Fetch #{} falló: {}", Self::NAMESPACE, request_id, e);
                    store.commit(MealMutation::Failure {
                        request_id,
                        error: e.to_string(),
                    });
                }
            }

            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;

    use super::*;

    type Reply = Result<Vec<String>, ApiError>;

    /// API falsa: cada llamada espera la respuesta que el test envíe por su canal
    #[derive(Default)]
    struct FakeApi {
        calls: Cell<usize>,
        pending: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
    }

    impl FakeApi {
        fn expect_call(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push_back(rx);
            tx
        }
    }

    impl MealApi for FakeApi {
        async fn get_meal(&self) -> Reply {
            self.calls.set(self.calls.get() + 1);
            let rx = self.pending.borrow_mut().pop_front().expect("unexpected get_meal call");
            rx.await
                .unwrap_or_else(|_| Err(ApiError::Network("dropped".to_string())))
        }
    }

    /// API que responde al instante
    struct ReadyApi(Reply);

    impl MealApi for ReadyApi {
        async fn get_meal(&self) -> Reply {
            self.0.clone()
        }
    }

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn poll_once<F: Future>(future: &mut Pin<Box<F>>) -> Poll<F::Output> {
        let mut cx = Context::from_waker(noop_waker_ref());
        future.as_mut().poll(&mut cx)
    }

    #[test]
    fn starts_idle_with_empty_slots() {
        let store = MealStore::new();
        let state = store.state();
        assert_eq!(state.phase(), MealPhase::Idle);
        assert_eq!(state.breakfast, "");
        assert_eq!(state.nosh, "");
        assert!(!state.pending);
        assert!(!state.is_fetched);
        assert_eq!(state.meal(), None);
    }

    #[test]
    fn pending_is_set_on_invocation_before_polling() {
        let store = MealStore::new();
        let api = FakeApi::default();
        let reply = api.expect_call();

        let mut fetch = Box::pin(store.fetch_meal(&api));
        assert_eq!(store.phase(), MealPhase::Pending);
        assert_eq!(api.calls.get(), 0);

        assert!(poll_once(&mut fetch).is_pending());
        assert_eq!(api.calls.get(), 1);
        assert!(store.is_pending());
        assert!(!store.is_fetched());

        reply.send(Ok(entries(&["A", "B", "C", "D"]))).unwrap();
        let outcome = poll_once(&mut fetch);
        assert!(matches!(outcome, Poll::Ready(Ok(_))));
        assert_eq!(store.phase(), MealPhase::Fetched);
    }

    #[test]
    fn success_fills_slots_positionally() {
        let store = MealStore::new();
        let api = ReadyApi(Ok(entries(&["A", "B", "C", "D"])));

        let meal = block_on(store.fetch_meal(&api)).unwrap();

        let state = store.state();
        assert_eq!(
            (state.breakfast.as_str(), state.lunch.as_str(), state.dinner.as_str(), state.nosh.as_str()),
            ("A", "B", "C", "D")
        );
        assert!(state.is_fetched);
        assert!(!state.pending);
        assert!(state.fetched_at.is_some());
        assert_eq!(state.meal(), Some(meal));
    }

    #[test]
    fn rejected_call_reaches_failed_not_stuck_pending() {
        let store = MealStore::new();
        let api = ReadyApi(Err(ApiError::Http {
            status: 500,
            text: "boom".to_string(),
        }));

        let outcome = block_on(store.fetch_meal(&api));

        assert!(outcome.is_err());
        assert_eq!(store.phase(), MealPhase::Failed);
        assert!(!store.is_pending());
        assert!(!store.is_fetched());
        assert_eq!(store.error().as_deref(), Some("HTTP 500: boom"));
    }

    #[test]
    fn malformed_payload_is_a_failure() {
        let store = MealStore::new();
        let api = ReadyApi(Ok(entries(&["A", "B"])));

        let outcome = block_on(store.fetch_meal(&api));

        assert_eq!(outcome, Err(ApiError::MalformedMeal(2)));
        assert_eq!(store.phase(), MealPhase::Failed);
        assert_eq!(store.state().breakfast, "");
    }

    #[test]
    fn failure_after_success_keeps_fetched_data() {
        let store = MealStore::new();
        block_on(store.fetch_meal(&ReadyApi(Ok(entries(&["A", "B", "C", "D"]))))).unwrap();

        let _ = block_on(store.fetch_meal(&ReadyApi(Err(ApiError::Timeout(10)))));

        let state = store.state();
        assert!(state.is_fetched);
        assert_eq!(state.lunch, "B");
        assert_eq!(state.phase(), MealPhase::Failed);

        // Un nuevo intento limpia el error mientras espera
        let api = FakeApi::default();
        let _reply = api.expect_call();
        let _fetch = store.fetch_meal(&api);
        assert_eq!(store.phase(), MealPhase::Pending);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn overlapping_fetches_newest_issued_wins_when_it_lands_first() {
        let store = MealStore::new();
        let api = FakeApi::default();
        let first_reply = api.expect_call();
        let second_reply = api.expect_call();

        let mut first = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut first).is_pending());
        let mut second = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut second).is_pending());

        second_reply.send(Ok(entries(&["e", "f", "g", "h"]))).unwrap();
        assert!(poll_once(&mut second).is_ready());
        assert_eq!(store.phase(), MealPhase::Fetched);

        first_reply.send(Ok(entries(&["a", "b", "c", "d"]))).unwrap();
        assert!(matches!(poll_once(&mut first), Poll::Ready(Ok(_))));

        let state = store.state();
        assert_eq!(state.breakfast, "e");
        assert_eq!(state.nosh, "h");
        assert!(!state.pending);
    }

    #[test]
    fn overlapping_fetches_stale_completion_keeps_pending() {
        let store = MealStore::new();
        let api = FakeApi::default();
        let first_reply = api.expect_call();
        let second_reply = api.expect_call();

        let mut first = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut first).is_pending());
        let mut second = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut second).is_pending());

        first_reply.send(Ok(entries(&["a", "b", "c", "d"]))).unwrap();
        assert!(poll_once(&mut first).is_ready());
        assert!(store.is_pending());
        assert!(!store.is_fetched());
        assert_eq!(store.state().breakfast, "");

        second_reply.send(Ok(entries(&["e", "f", "g", "h"]))).unwrap();
        assert!(poll_once(&mut second).is_ready());
        assert_eq!(store.state().breakfast, "e");
        assert_eq!(store.phase(), MealPhase::Fetched);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_request() {
        let store = MealStore::new();
        let api = FakeApi::default();
        let first_reply = api.expect_call();
        let second_reply = api.expect_call();

        let mut first = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut first).is_pending());
        let mut second = Box::pin(store.fetch_meal(&api));
        assert!(poll_once(&mut second).is_pending());

        second_reply.send(Ok(entries(&["e", "f", "g", "h"]))).unwrap();
        assert!(poll_once(&mut second).is_ready());

        drop(first_reply);
        assert!(matches!(poll_once(&mut first), Poll::Ready(Err(ApiError::Network(_)))));
        assert_eq!(store.phase(), MealPhase::Fetched);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn subscribers_see_each_applied_commit_once() {
        let store = MealStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = seen.clone();
            let observed = store.clone();
            store.subscribe(move || seen.borrow_mut().push(observed.phase()))
        };

        block_on(store.fetch_meal(&ReadyApi(Ok(entries(&["A", "B", "C", "D"]))))).unwrap();
        assert_eq!(*seen.borrow(), vec![MealPhase::Pending, MealPhase::Fetched]);

        // Un commit descartado no notifica
        store.commit(MealMutation::Success {
            request_id: 0,
            meal: Meal::default(),
        });
        assert_eq!(seen.borrow().len(), 2);

        store.unsubscribe(id);
        store.commit(MealMutation::Request { request_id: 9 });
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn dropped_fetch_stays_pending_until_next_fetch() {
        let store = MealStore::new();
        let api = FakeApi::default();
        let _abandoned = api.expect_call();

        drop(store.fetch_meal(&api));
        assert_eq!(store.phase(), MealPhase::Pending);

        let ready = ReadyApi(Ok(entries(&["A", "B", "C", "D"])));
        assert!(block_on(store.fetch_meal(&ready)).is_ok());
        assert_eq!(store.phase(), MealPhase::Fetched);
        assert!(!store.is_pending());
    }

    #[test]
    fn clones_share_state() {
        let store = MealStore::new();
        let view = store.clone();
        store.commit(MealMutation::Request { request_id: 1 });
        assert!(view.is_pending());
        assert_eq!(store, view);
        assert_ne!(store, MealStore::new());

        let printed = format!("{store:?}");
        assert!(printed.contains("pending: true"));
        assert!(printed.contains("latest_request: 1"));
    }
}
