use std::rc::Rc;

use shared::fetch::{fetch_all, fetch_books, fetch_transactions, fetch_users};
use shared::{Book, CacheStore, Notifier, PersistentCache, Toast, Transaction, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::storage::BrowserStorage;

/// A toast on screen, keyed so it can be dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryState {
    /// Bumped on every cache write so dependents re-render
    pub revision: u32,
    pub loading: bool,
    pub toasts: Vec<ToastEntry>,
    next_toast_id: u32,
}

pub enum LibraryAction {
    CacheChanged,
    SetLoading(bool),
    PushToast(Toast),
    DismissToast(u32),
}

impl Reducible for LibraryState {
    type Action = LibraryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LibraryAction::CacheChanged => {
                next.revision = next.revision.wrapping_add(1);
            }
            LibraryAction::SetLoading(loading) => {
                if self.loading == loading {
                    return self;
                }
                next.loading = loading;
            }
            LibraryAction::PushToast(toast) => {
                // identical toast already showing
                if self.toasts.iter().any(|entry| entry.toast == toast) {
                    return self;
                }
                next.next_toast_id = next.next_toast_id.wrapping_add(1);
                next.toasts.push(ToastEntry {
                    id: next.next_toast_id,
                    toast,
                });
            }
            LibraryAction::DismissToast(id) => {
                next.toasts.retain(|entry| entry.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Shared handle to the API client, the persisted cache and the
/// app-wide loading/toast state. Passed down as a prop.
#[derive(Clone)]
pub struct LibraryHandle {
    pub api: ApiClient,
    cache: Rc<PersistentCache<BrowserStorage>>,
    state: UseReducerHandle<LibraryState>,
}

impl PartialEq for LibraryHandle {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api
            && Rc::ptr_eq(&self.cache, &other.cache)
            && *self.state == *other.state
    }
}

impl LibraryHandle {
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.state.toasts.clone()
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.state.dispatch(LibraryAction::DismissToast(id));
    }

    pub fn refresh_all(&self) {
        let library = self.clone();
        spawn_local(async move {
            let report = fetch_all(&library.api, &library, &library).await;
            if !report.is_complete() {
                log::warn!("Initial load incomplete: {:?}", report.failed);
            }
        });
    }

    pub fn refresh_users(&self) {
        let library = self.clone();
        spawn_local(async move {
            fetch_users(&library.api, &library, &library).await;
        });
    }

    pub fn refresh_books(&self) {
        let library = self.clone();
        spawn_local(async move {
            fetch_books(&library.api, &library, &library).await;
        });
    }

    pub fn refresh_transactions(&self) {
        let library = self.clone();
        spawn_local(async move {
            fetch_transactions(&library.api, &library, &library).await;
        });
    }
}

impl CacheStore for LibraryHandle {
    fn users(&self) -> Vec<User> {
        self.cache.users()
    }

    fn set_users(&self, users: Vec<User>) {
        self.cache.set_users(users);
        self.state.dispatch(LibraryAction::CacheChanged);
    }

    fn books(&self) -> Vec<Book> {
        self.cache.books()
    }

    fn set_books(&self, books: Vec<Book>) {
        self.cache.set_books(books);
        self.state.dispatch(LibraryAction::CacheChanged);
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.cache.transactions()
    }

    fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.cache.set_transactions(transactions);
        self.state.dispatch(LibraryAction::CacheChanged);
    }
}

impl Notifier for LibraryHandle {
    fn notify(&self, toast: Toast) {
        self.state.dispatch(LibraryAction::PushToast(toast));
    }

    fn set_loading(&self, loading: bool) {
        self.state.dispatch(LibraryAction::SetLoading(loading));
    }
}

#[hook]
pub fn use_library() -> LibraryHandle {
    let cache = use_memo((), |_| PersistentCache::restore(BrowserStorage));
    let api = use_memo((), |_| ApiClient::new());
    let state = use_reducer(LibraryState::default);

    LibraryHandle {
        api: (*api).clone(),
        cache,
        state,
    }
}
