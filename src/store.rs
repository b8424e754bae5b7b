//! Session Store
//!
//! Auth session held in a reactive store, provided from the composition
//! root and persisted to localStorage so it survives reloads.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::AuthUser;

const STORAGE_KEY: &str = "auth-storage";

/// Auth session state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
}

pub type SessionStore = Store<SessionState>;

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Restore the persisted session on startup. A token without a user (or
/// vice versa) is treated as no session.
pub fn load_session() -> SessionState {
    let Some(raw) = read_storage() else {
        return SessionState::default();
    };
    match serde_json::from_str::<SessionState>(&raw) {
        Ok(state) if state.access_token.is_some() && state.user.is_some() => SessionState {
            is_authenticated: true,
            ..state
        },
        _ => SessionState::default(),
    }
}

pub fn set_auth(store: &SessionStore, token: String, user: AuthUser) {
    store.access_token().set(Some(token));
    store.user().set(Some(user));
    store.is_authenticated().set(true);
    persist(store);
}

/// Clear on logout or auth failure.
pub fn clear_auth(store: &SessionStore) {
    store.access_token().set(None);
    store.user().set(None);
    store.is_authenticated().set(false);
    persist(store);
}

/// Current bearer token, empty when logged out.
pub fn access_token(store: &SessionStore) -> String {
    store.access_token().get_untracked().unwrap_or_default()
}

fn persist(store: &SessionStore) {
    let snapshot = SessionState {
        access_token: store.access_token().get_untracked(),
        user: store.user().get_untracked(),
        is_authenticated: store.is_authenticated().get_untracked(),
    };
    match serde_json::to_string(&snapshot) {
        Ok(raw) => write_storage(&raw),
        Err(err) => leptos::logging::error!("failed to serialize session: {err}"),
    }
}

fn read_storage() -> Option<String> {
    window()
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

fn write_storage(raw: &str) {
    if let Ok(Some(storage)) = window().local_storage() {
        let _ = storage.set_item(STORAGE_KEY, raw);
    }
}
