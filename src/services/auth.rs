//! Session lifecycle against the external auth service.
//!
//! The session itself is owned by the backend; this module keeps the client's
//! observed copy in a process-scoped [`SessionStore`] (WASM is single-threaded,
//! so a `thread_local` cell is the whole synchronization story) and persists
//! the token in local storage across reloads. Consumers read snapshots and
//! subscribe to change events; they never mutate the session except through
//! the sign-in/sign-up/sign-out calls below.

use std::cell::{Cell, RefCell};

use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use serde_json::json;
use yew::Callback;

use crate::config::{BACKEND_URL, PUBLISHABLE_KEY};
use crate::services::api::ApiError;

const SESSION_KEY: &str = "petconnect_session";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// Profile metadata sent with sign-up; the backend materializes it into the
/// `profiles` table.
#[derive(Serialize, Debug, Clone)]
pub struct SignUpMetadata {
    pub full_name: String,
    pub phone: String,
    pub role: &'static str, // "tutor" | "cuidador"
}

/// Observable session value. `event_seen` makes the snapshot/event race
/// explicit: once any auth-state event has been applied, the initial snapshot
/// resolution must not clobber it (last write by delivery order).
#[derive(Default)]
pub struct SessionStore {
    current: Option<Session>,
    event_seen: bool,
    next_id: u64,
    listeners: Vec<(u64, Callback<Option<Session>>)>,
}

impl SessionStore {
    pub fn snapshot(&self) -> Option<Session> {
        self.current.clone()
    }

    pub fn subscribe(&mut self, callback: Callback<Option<Session>>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, callback));
        id
    }

    pub fn unsubscribe(&mut self, id: u64) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Records an auth-state event and returns the listeners to notify.
    /// Notification happens outside the store borrow so a listener may
    /// subscribe or unsubscribe reentrantly.
    #[must_use]
    pub fn apply_event(&mut self, session: Option<Session>) -> Vec<Callback<Option<Session>>> {
        self.event_seen = true;
        self.current = session;
        self.listeners.iter().map(|(_, cb)| cb.clone()).collect()
    }

    /// Applies the initial snapshot fetch, unless an event already won the
    /// race. Returns the session now in effect.
    pub fn resolve_initial(&mut self, session: Option<Session>) -> Option<Session> {
        if !self.event_seen {
            self.current = session;
        }
        self.snapshot()
    }
}

thread_local! {
    static STORE: RefCell<SessionStore> = RefCell::new(SessionStore::default());
}

/// Listener registration; releasing (or dropping) it stops delivery.
pub struct AuthSubscription {
    id: Cell<Option<u64>>,
}

impl AuthSubscription {
    pub fn release(&self) {
        if let Some(id) = self.id.take() {
            STORE.with(|store| store.borrow_mut().unsubscribe(id));
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

fn broadcast(session: Option<Session>) {
    let listeners = STORE.with(|store| store.borrow_mut().apply_event(session.clone()));
    for listener in listeners {
        listener.emit(session.clone());
    }
}

pub struct AuthService;

impl AuthService {
    pub fn subscribe(callback: Callback<Option<Session>>) -> AuthSubscription {
        let id = STORE.with(|store| store.borrow_mut().subscribe(callback));
        AuthSubscription {
            id: Cell::new(Some(id)),
        }
    }

    /// Current observed session; `None` until the first snapshot resolves or
    /// an event arrives.
    pub fn snapshot() -> Option<Session> {
        STORE.with(|store| store.borrow().snapshot())
    }

    pub fn current_user_id() -> Option<String> {
        Self::snapshot().map(|session| session.user.id)
    }

    /// One-shot session snapshot: restores the persisted token and validates
    /// it against the auth service. Any failure counts as "no session".
    pub async fn fetch_session() -> Option<Session> {
        let stored: Option<Session> = LocalStorage::get(SESSION_KEY).ok();
        let validated = match stored {
            None => None,
            Some(session) => {
                if Self::validate(&session).await {
                    Some(session)
                } else {
                    LocalStorage::delete(SESSION_KEY);
                    None
                }
            }
        };
        STORE.with(|store| store.borrow_mut().resolve_initial(validated))
    }

    async fn validate(session: &Session) -> bool {
        let result = Request::get(&format!("{BACKEND_URL}/auth/v1/user"))
            .header("apikey", PUBLISHABLE_KEY)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await;
        match result {
            Ok(response) => response.ok(),
            Err(error) => {
                log::warn!("session validation failed: {error}");
                false
            }
        }
    }

    pub async fn sign_up(
        email: &str,
        password: &str,
        metadata: &SignUpMetadata,
    ) -> Result<(), ApiError> {
        let response = Request::post(&format!("{BACKEND_URL}/auth/v1/signup"))
            .header("apikey", PUBLISHABLE_KEY)
            .json(&json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))?
            .send()
            .await?;
        match response.status() {
            200..=299 => Ok(()),
            422 | 400 => {
                let text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "cadastro recusado".to_string());
                Err(ApiError::Validation(text))
            }
            status => Err(ApiError::Server(format!("signup falhou ({status})"))),
        }
    }

    pub async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
        let response = Request::post(&format!(
            "{BACKEND_URL}/auth/v1/token?grant_type=password"
        ))
        .header("apikey", PUBLISHABLE_KEY)
        .json(&json!({ "email": email, "password": password }))?
        .send()
        .await?;

        match response.status() {
            200 => {
                let token: TokenResponse = response.json().await?;
                let session = Session {
                    access_token: token.access_token,
                    user: token.user,
                };
                let _ = LocalStorage::set(SESSION_KEY, &session);
                broadcast(Some(session.clone()));
                Ok(session)
            }
            400 | 401 | 422 => {
                let text = response.text().await.unwrap_or_default();
                if text.to_lowercase().contains("confirm") {
                    Err(ApiError::EmailNotConfirmed)
                } else {
                    Err(ApiError::Unauthorized)
                }
            }
            status => Err(ApiError::Server(format!("login falhou ({status})"))),
        }
    }

    /// Best-effort server-side revocation; the local session always ends.
    pub async fn sign_out() {
        if let Some(session) = Self::snapshot() {
            let result = Request::post(&format!("{BACKEND_URL}/auth/v1/logout"))
                .header("apikey", PUBLISHABLE_KEY)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .send()
                .await;
            if let Err(error) = result {
                log::warn!("logout request failed: {error}");
            }
        }
        LocalStorage::delete(SESSION_KEY);
        broadcast(None);
    }

    pub async fn resend_confirmation(email: &str) -> Result<(), ApiError> {
        let response = Request::post(&format!("{BACKEND_URL}/auth/v1/resend"))
            .header("apikey", PUBLISHABLE_KEY)
            .json(&json!({ "type": "signup", "email": email }))?
            .send()
            .await?;
        match response.status() {
            200..=299 => Ok(()),
            status => Err(ApiError::Server(format!("reenvio falhou ({status})"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn session(id: &str) -> Session {
        Session {
            access_token: format!("token-{id}"),
            user: AuthUser {
                id: id.to_string(),
                email: Some(format!("{id}@example.com")),
            },
        }
    }

    fn notify(store: &mut SessionStore, value: Option<Session>) {
        for listener in store.apply_event(value.clone()) {
            listener.emit(value.clone());
        }
    }

    #[test]
    fn event_before_initial_resolution_wins() {
        let mut store = SessionStore::default();
        notify(&mut store, Some(session("u1")));
        // the slow snapshot fetch resolves afterwards with "no session"
        let effective = store.resolve_initial(None);
        assert_eq!(effective, Some(session("u1")));
    }

    #[test]
    fn resolution_then_event_transitions_state() {
        let mut store = SessionStore::default();
        assert_eq!(store.resolve_initial(None), None);
        notify(&mut store, Some(session("u2")));
        assert_eq!(store.snapshot(), Some(session("u2")));
        notify(&mut store, None);
        assert_eq!(store.snapshot(), None);
    }

    #[test]
    fn listeners_observe_events_in_order() {
        let mut store = SessionStore::default();
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = seen.clone();
        store.subscribe(Callback::from(move |value: Option<Session>| {
            sink.borrow_mut().push(value.is_some());
        }));
        notify(&mut store, Some(session("u3")));
        notify(&mut store, None);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = SessionStore::default();
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = seen.clone();
        let id = store.subscribe(Callback::from(move |value: Option<Session>| {
            sink.borrow_mut().push(value.is_some());
        }));
        store.unsubscribe(id);
        // delivery after teardown must not touch the listener's state
        notify(&mut store, Some(session("u4")));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_leaves_other_listeners_intact() {
        let mut store = SessionStore::default();
        let first: Rc<Cell<u32>> = Rc::default();
        let second: Rc<Cell<u32>> = Rc::default();
        let first_sink = first.clone();
        let second_sink = second.clone();
        let first_id = store.subscribe(Callback::from(move |_| {
            first_sink.set(first_sink.get() + 1);
        }));
        store.subscribe(Callback::from(move |_| {
            second_sink.set(second_sink.get() + 1);
        }));
        store.unsubscribe(first_id);
        notify(&mut store, None);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}
