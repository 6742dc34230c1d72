//! Session provider hook: the one piece of cross-screen shared state.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::auth::{AuthService, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatus {
    /// True until the first session snapshot resolves.
    pub loading: bool,
    pub is_authenticated: bool,
}

/// Tracks the current session: one snapshot fetch on mount plus a listener
/// for subsequent auth-state events. If an event beats the snapshot, the
/// event's value stands ([`crate::services::auth::SessionStore`] resolves the
/// race). A liveness flag suppresses state writes after the consuming view
/// has been torn down; the listener is released in the effect cleanup.
#[hook]
pub fn use_auth_status() -> AuthStatus {
    let loading = use_state(|| true);
    let is_authenticated = use_state(|| false);

    {
        let loading = loading.clone();
        let is_authenticated = is_authenticated.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));

            let subscription = {
                let mounted = mounted.clone();
                let is_authenticated = is_authenticated.clone();
                AuthService::subscribe(Callback::from(move |session: Option<Session>| {
                    if mounted.get() {
                        is_authenticated.set(session.is_some());
                    }
                }))
            };

            {
                let mounted = mounted.clone();
                spawn_local(async move {
                    let session = AuthService::fetch_session().await;
                    if !mounted.get() {
                        return;
                    }
                    is_authenticated.set(session.is_some());
                    loading.set(false);
                });
            }

            move || {
                mounted.set(false);
                subscription.release();
            }
        });
    }

    AuthStatus {
        loading: *loading,
        is_authenticated: *is_authenticated,
    }
}
