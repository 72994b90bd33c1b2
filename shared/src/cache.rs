//! Session cache of the three backend collections.
//!
//! Each collection is mirrored to a key-value store under its own key so a
//! page reload starts from the last known data instead of an empty screen.

use std::cell::RefCell;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{Book, Transaction, User};

pub const USERS_KEY: &str = "users";
pub const BOOKS_KEY: &str = "books";
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Durable string storage, e.g. the browser's local storage
pub trait KeyValueStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// Whole-collection access to the cached resources.
///
/// Collections are only ever replaced wholesale, never patched in place.
pub trait CacheStore {
    fn books(&self) -> Vec<Book>;
    fn set_books(&self, books: Vec<Book>);
    fn users(&self) -> Vec<User>;
    fn set_users(&self, users: Vec<User>);
    fn transactions(&self) -> Vec<Transaction>;
    fn set_transactions(&self, transactions: Vec<Transaction>);
}

/// In-memory collections with write-through persistence
#[derive(Debug)]
pub struct PersistentCache<S> {
    storage: S,
    books: RefCell<Vec<Book>>,
    users: RefCell<Vec<User>>,
    transactions: RefCell<Vec<Transaction>>,
}

impl<S: KeyValueStorage> PersistentCache<S> {
    /// Load every collection from storage, defaulting to empty
    pub fn restore(storage: S) -> Self {
        let books = load(&storage, BOOKS_KEY);
        let users = load(&storage, USERS_KEY);
        let transactions = load(&storage, TRANSACTIONS_KEY);
        Self {
            storage,
            books: RefCell::new(books),
            users: RefCell::new(users),
            transactions: RefCell::new(transactions),
        }
    }
}

fn load<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Vec<T> {
    let Some(raw) = storage.read(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Discarding unreadable cached '{}': {}", key, e);
            Vec::new()
        }
    }
}

fn persist<T: Serialize>(storage: &impl KeyValueStorage, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(raw) => storage.write(key, &raw),
        Err(e) => warn!("Failed to serialize '{}' for storage: {}", key, e),
    }
}

impl<S: KeyValueStorage> CacheStore for PersistentCache<S> {
    fn books(&self) -> Vec<Book> {
        self.books.borrow().clone()
    }

    fn set_books(&self, books: Vec<Book>) {
        persist(&self.storage, BOOKS_KEY, &books);
        *self.books.borrow_mut() = books;
    }

    fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    fn set_users(&self, users: Vec<User>) {
        persist(&self.storage, USERS_KEY, &users);
        *self.users.borrow_mut() = users;
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    fn set_transactions(&self, transactions: Vec<Transaction>) {
        persist(&self.storage, TRANSACTIONS_KEY, &transactions);
        *self.transactions.borrow_mut() = transactions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_book, sample_transaction, sample_user, MemoryStorage};

    #[test]
    fn test_empty_storage_restores_empty_collections() {
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        assert!(cache.books().is_empty());
        assert!(cache.users().is_empty());
        assert!(cache.transactions().is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let storage = MemoryStorage::default();
        {
            let cache = PersistentCache::restore(&storage);
            cache.set_books(vec![sample_book(1, "Dune"), sample_book(2, "Emma")]);
            cache.set_users(vec![sample_user(1, "Ada")]);
            cache.set_transactions(vec![sample_transaction(1, 1, 2)]);
        }

        assert!(storage.read(BOOKS_KEY).is_some());

        let reloaded = PersistentCache::restore(&storage);
        assert_eq!(
            reloaded.books(),
            vec![sample_book(1, "Dune"), sample_book(2, "Emma")]
        );
        assert_eq!(reloaded.users(), vec![sample_user(1, "Ada")]);
        assert_eq!(reloaded.transactions(), vec![sample_transaction(1, 1, 2)]);
    }

    #[test]
    fn test_corrupt_entry_falls_back_to_empty() {
        let storage = MemoryStorage::default();
        storage.write(USERS_KEY, "{not json");
        storage.write(BOOKS_KEY, "[]");

        let cache = PersistentCache::restore(&storage);
        assert!(cache.users().is_empty());
        assert!(cache.books().is_empty());
    }

    #[test]
    fn test_set_replaces_whole_collection() {
        let storage = MemoryStorage::default();
        let cache = PersistentCache::restore(&storage);
        cache.set_users(vec![sample_user(1, "Ada"), sample_user(2, "Grace")]);
        cache.set_users(vec![sample_user(3, "Linus")]);

        assert_eq!(cache.users(), vec![sample_user(3, "Linus")]);
        assert_eq!(
            storage.read(USERS_KEY).as_deref(),
            Some(serde_json::to_string(&vec![sample_user(3, "Linus")]).unwrap().as_str())
        );
    }
}
