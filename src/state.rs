//! Application state managed by Tauri.
//!
//! One `AppState` owns the session, the domain store and the UI state
//! (router + modal). Readers get snapshots; writers go through the command
//! layer, which holds a lock only long enough to merge, never across an
//! await.

use std::sync::Mutex;

use crate::api::{self, ApiClient};
use crate::modal::ModalState;
use crate::router::SectionRouter;
use crate::session;
use crate::store::DomainStore;
use crate::types::{Identity, ThemeMode};

pub struct AppState {
    pub api: ApiClient,
    pub session: Mutex<Option<Identity>>,
    pub theme: Mutex<ThemeMode>,
    pub store: Mutex<DomainStore>,
    pub loading: Mutex<bool>,
    pub router: Mutex<SectionRouter>,
    pub modal: Mutex<ModalState>,
}

impl AppState {
    /// Restore the persisted session and theme, then start with an empty
    /// snapshot and the loading flag raised until the first `load_all`
    /// settles.
    pub fn new() -> Self {
        let api = ApiClient::new();

        let (identity, theme) = match session::session_dir() {
            Ok(dir) => (session::load_identity(&dir), session::load_theme(&dir)),
            Err(e) => {
                log::warn!("Session storage unavailable: {e}");
                (None, ThemeMode::default())
            }
        };

        if let Some(identity) = &identity {
            api.set_token(Some(identity.token.clone()));
        }

        Self {
            api,
            session: Mutex::new(identity),
            theme: Mutex::new(theme),
            store: Mutex::new(DomainStore::new()),
            loading: Mutex::new(true),
            router: Mutex::new(SectionRouter::new()),
            modal: Mutex::new(ModalState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial load: five parallel fetches, one per collection.
///
/// Fail-closed: `try_join!` short-circuits, so one failing endpoint logs and
/// leaves the whole snapshot empty instead of merging partial data. Either
/// way the loading flag drops.
pub async fn load_all(state: &AppState) {
    let result = tokio::try_join!(
        api::employees::list(&state.api),
        api::tasks::list(&state.api),
        api::leads::list(&state.api),
        api::projects::list(&state.api),
        api::products::list(&state.api),
    );

    match result {
        Ok((employees, tasks, leads, projects, products)) => {
            if let Ok(mut store) = state.store.lock() {
                store.replace_all(employees, tasks, leads, projects, products);
            }
        }
        Err(e) => {
            log::error!("Failed to load data from API: {e}");
        }
    }

    if let Ok(mut loading) = state.loading.lock() {
        *loading = false;
    }
}
