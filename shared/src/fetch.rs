//! Populates the cache from the backend.
//!
//! Resources are fetched one after another because the UI shows a single
//! loading indicator. A failing resource keeps its stale cached copy and does
//! not stop the others.

use std::fmt;

use log::{debug, info};

use crate::{CacheStore, LibraryApi, Notifier, Toast};

/// The three backend collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Books,
    Transactions,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Users => write!(f, "users"),
            Resource::Books => write!(f, "books"),
            Resource::Transactions => write!(f, "transactions"),
        }
    }
}

/// Outcome of [`fetch_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub failed: Vec<Resource>,
}

impl FetchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Refresh users, books and transactions, in that order
pub async fn fetch_all<A, C, N>(api: &A, cache: &C, notifier: &N) -> FetchReport
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    info!("Fetching all library resources");
    notifier.set_loading(true);

    let mut report = FetchReport::default();
    for resource in [Resource::Users, Resource::Books, Resource::Transactions] {
        if !load(api, cache, notifier, resource).await {
            report.failed.push(resource);
        }
    }

    notifier.set_loading(false);
    report
}

pub async fn fetch_users<A, C, N>(api: &A, cache: &C, notifier: &N) -> bool
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    fetch_one(api, cache, notifier, Resource::Users).await
}

pub async fn fetch_books<A, C, N>(api: &A, cache: &C, notifier: &N) -> bool
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    fetch_one(api, cache, notifier, Resource::Books).await
}

pub async fn fetch_transactions<A, C, N>(api: &A, cache: &C, notifier: &N) -> bool
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    fetch_one(api, cache, notifier, Resource::Transactions).await
}

async fn fetch_one<A, C, N>(api: &A, cache: &C, notifier: &N, resource: Resource) -> bool
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    notifier.set_loading(true);
    let loaded = load(api, cache, notifier, resource).await;
    notifier.set_loading(false);
    loaded
}

async fn load<A, C, N>(api: &A, cache: &C, notifier: &N, resource: Resource) -> bool
where
    A: LibraryApi + ?Sized,
    C: CacheStore + ?Sized,
    N: Notifier + ?Sized,
{
    let loaded = match resource {
        Resource::Users => match api.list_users().await {
            Some(users) => {
                cache.set_users(users);
                true
            }
            None => false,
        },
        Resource::Books => match api.list_books().await {
            Some(books) => {
                cache.set_books(books);
                true
            }
            None => false,
        },
        Resource::Transactions => match api.list_transactions().await {
            Some(transactions) => {
                cache.set_transactions(transactions);
                true
            }
            None => false,
        },
    };

    if loaded {
        debug!("Refreshed cached {}", resource);
    } else {
        notifier.notify(Toast::error(format!("Failed to fetch {}", resource)));
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        sample_book, sample_user, FakeLibrary, MemoryStorage, RecordingNotifier,
    };
    use crate::PersistentCache;

    #[tokio::test]
    async fn test_fetch_all_fills_cache() {
        let api = FakeLibrary::default();
        api.seed_users(vec![sample_user(1, "Ada")]);
        api.seed_books(vec![sample_book(1, "Dune")]);
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        let notifier = RecordingNotifier::default();

        let report = fetch_all(&api, &cache, &notifier).await;

        assert!(report.is_complete());
        assert_eq!(cache.users(), vec![sample_user(1, "Ada")]);
        assert_eq!(cache.books(), vec![sample_book(1, "Dune")]);
        assert!(cache.transactions().is_empty());
        assert_eq!(
            api.calls(),
            vec!["list_users", "list_books", "list_transactions"]
        );
        assert_eq!(notifier.loading_history(), vec![true, false]);
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_resource_keeps_stale_data_and_continues() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(2, "Emma")]);
        api.fail("list_users");
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        cache.set_users(vec![sample_user(9, "Stale")]);
        let notifier = RecordingNotifier::default();

        let report = fetch_all(&api, &cache, &notifier).await;

        assert_eq!(report.failed, vec![Resource::Users]);
        assert_eq!(cache.users(), vec![sample_user(9, "Stale")]);
        assert_eq!(cache.books(), vec![sample_book(2, "Emma")]);
        assert_eq!(notifier.toasts(), vec![Toast::error("Failed to fetch users")]);
        assert_eq!(notifier.loading_history().last(), Some(&false));
    }

    #[tokio::test]
    async fn test_everything_failing_still_clears_loading() {
        let api = FakeLibrary::default();
        api.fail("list_users");
        api.fail("list_books");
        api.fail("list_transactions");
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        let notifier = RecordingNotifier::default();

        let report = fetch_all(&api, &cache, &notifier).await;

        assert_eq!(report.failed.len(), 3);
        assert_eq!(notifier.toasts().len(), 3);
        assert_eq!(notifier.loading_history(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_single_resource_fetch_toggles_loading() {
        let api = FakeLibrary::default();
        api.seed_books(vec![sample_book(1, "Dune")]);
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        let notifier = RecordingNotifier::default();

        assert!(fetch_books(&api, &cache, &notifier).await);
        assert_eq!(cache.books().len(), 1);
        assert_eq!(notifier.loading_history(), vec![true, false]);

        api.fail("list_transactions");
        assert!(!fetch_transactions(&api, &cache, &notifier).await);
        assert_eq!(
            notifier.toasts(),
            vec![Toast::error("Failed to fetch transactions")]
        );
    }
}
