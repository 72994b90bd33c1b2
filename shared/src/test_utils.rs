//! In-memory stand-ins for the backend, browser storage and toasts.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::{
    BatchCreated, Book, BookId, BookInput, ImportedBooks, KeyValueStorage, LibraryApi, Notifier,
    Toast, Transaction, TransactionId, TransactionInput, TransactionStatus, User, UserId,
    UserInput, UserTransactions,
};

pub fn sample_book(id: BookId, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        authors: vec!["Test Author".to_string()],
        publisher: "Test Press".to_string(),
        language_code: Some("eng".to_string()),
        num_pages: 200,
        stock_quantity: 3,
        isbn: None,
        isbn13: Some(format!("978{:010}", id)),
        publication_date: Some("2001-01-01".to_string()),
        created_at: "2024-01-01T00:00:00".to_string(),
        updated_at: "2024-01-01T00:00:00".to_string(),
    }
}

pub fn sample_user(id: UserId, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        created_at: "2024-01-01T00:00:00".to_string(),
        updated_at: "2024-01-01T00:00:00".to_string(),
    }
}

pub fn sample_transaction(id: TransactionId, user_id: UserId, book_id: BookId) -> Transaction {
    Transaction {
        id,
        user_id,
        book_id,
        status: TransactionStatus::Pending,
        created_at: "2024-01-01T00:00:00".to_string(),
        updated_at: "2024-01-01T00:00:00".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Remembers every toast and loading change
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
    loading: RefCell<Vec<bool>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Loading changes with consecutive repeats collapsed
    pub fn loading_history(&self) -> Vec<bool> {
        let mut history: Vec<bool> = self.loading.borrow().clone();
        history.dedup();
        history
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.borrow_mut().push(loading);
    }
}

/// A backend kept in memory, with switchable failures
#[derive(Debug, Default)]
pub struct FakeLibrary {
    books: RefCell<Vec<Book>>,
    users: RefCell<Vec<User>>,
    transactions: RefCell<Vec<Transaction>>,
    catalog: RefCell<Vec<Book>>,
    next_id: Cell<i64>,
    failing: RefCell<HashSet<&'static str>>,
    calls: RefCell<Vec<&'static str>>,
    creation_attempts: Cell<usize>,
    fail_creation_at: Cell<Option<usize>>,
    last_user_update: RefCell<Option<serde_json::Value>>,
}

impl FakeLibrary {
    pub fn seed_books(&self, books: Vec<Book>) {
        *self.books.borrow_mut() = books;
    }

    pub fn seed_users(&self, users: Vec<User>) {
        *self.users.borrow_mut() = users;
    }

    pub fn seed_transactions(&self, transactions: Vec<Transaction>) {
        *self.transactions.borrow_mut() = transactions;
    }

    pub fn seed_catalog(&self, books: Vec<Book>) {
        *self.catalog.borrow_mut() = books;
    }

    /// Make every call of `operation` fail
    pub fn fail(&self, operation: &'static str) {
        self.failing.borrow_mut().insert(operation);
    }

    /// Make the `n`-th transaction creation from now on fail (1-based)
    pub fn fail_transaction_creation_at(&self, n: usize) {
        self.creation_attempts.set(0);
        self.fail_creation_at.set(Some(n));
    }

    /// Operations that reached the backend, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// JSON body of the most recent user update
    pub fn last_user_update_body(&self) -> Option<serde_json::Value> {
        self.last_user_update.borrow().clone()
    }

    fn enter(&self, operation: &'static str) -> bool {
        self.calls.borrow_mut().push(operation);
        !self.failing.borrow().contains(operation)
    }

    fn allocate_id(&self) -> i64 {
        let seeded = self
            .books
            .borrow()
            .iter()
            .map(|b| b.id)
            .chain(self.users.borrow().iter().map(|u| u.id))
            .chain(self.transactions.borrow().iter().map(|t| t.id))
            .max()
            .unwrap_or(0);
        let id = self.next_id.get().max(seeded) + 1;
        self.next_id.set(id);
        id
    }

    fn book_from_input(&self, id: BookId, input: &BookInput) -> Book {
        Book {
            id,
            title: input.title.clone(),
            authors: input.authors.clone(),
            publisher: input.publisher.clone(),
            language_code: input.language_code.clone(),
            num_pages: input.num_pages,
            stock_quantity: input.stock_quantity,
            isbn: input.isbn.clone(),
            isbn13: input.isbn13.clone(),
            publication_date: input.publication_date.clone(),
            created_at: "2024-01-02T00:00:00".to_string(),
            updated_at: "2024-01-02T00:00:00".to_string(),
        }
    }
}

fn dedup_key(isbn13: &Option<String>, isbn: &Option<String>, title: &str) -> String {
    isbn13
        .clone()
        .or_else(|| isbn.clone())
        .unwrap_or_else(|| title.to_lowercase())
}

#[async_trait(?Send)]
impl LibraryApi for FakeLibrary {
    async fn list_books(&self) -> Option<Vec<Book>> {
        self.enter("list_books").then(|| self.books.borrow().clone())
    }

    async fn get_book(&self, id: BookId) -> Option<Book> {
        if !self.enter("get_book") {
            return None;
        }
        self.books.borrow().iter().find(|b| b.id == id).cloned()
    }

    async fn create_book(&self, input: &BookInput) -> Option<Book> {
        if !self.enter("create_book") {
            return None;
        }
        let book = self.book_from_input(self.allocate_id(), input);
        self.books.borrow_mut().push(book.clone());
        Some(book)
    }

    async fn update_book(&self, id: BookId, input: &BookInput) -> Option<Book> {
        if !self.enter("update_book") {
            return None;
        }
        let updated = self.book_from_input(id, input);
        let mut books = self.books.borrow_mut();
        let slot = books.iter_mut().find(|b| b.id == id)?;
        *slot = updated.clone();
        Some(updated)
    }

    async fn delete_book(&self, id: BookId) -> Option<Book> {
        if !self.enter("delete_book") {
            return None;
        }
        let mut books = self.books.borrow_mut();
        let index = books.iter().position(|b| b.id == id)?;
        Some(books.remove(index))
    }

    async fn import_books(&self, limit: u32, keyword: &str) -> Option<ImportedBooks> {
        if !self.enter("import_books") {
            return None;
        }
        let keyword = keyword.to_lowercase();
        let books: Vec<Book> = self
            .catalog
            .borrow()
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&keyword))
            .take(limit as usize)
            .cloned()
            .collect();
        Some(ImportedBooks {
            count: books.len(),
            books,
        })
    }

    async fn create_book_batch(&self, books: &[BookInput]) -> Option<BatchCreated> {
        if !self.enter("create_book_batch") {
            return None;
        }
        let mut known: HashSet<String> = self
            .books
            .borrow()
            .iter()
            .map(|b| dedup_key(&b.isbn13, &b.isbn, &b.title))
            .collect();
        let mut count_unique = 0;
        for input in books {
            if known.insert(dedup_key(&input.isbn13, &input.isbn, &input.title)) {
                let book = self.book_from_input(self.allocate_id(), input);
                self.books.borrow_mut().push(book);
                count_unique += 1;
            }
        }
        Some(BatchCreated { count_unique })
    }

    async fn list_users(&self) -> Option<Vec<User>> {
        self.enter("list_users").then(|| self.users.borrow().clone())
    }

    async fn get_user(&self, id: UserId) -> Option<User> {
        if !self.enter("get_user") {
            return None;
        }
        self.users.borrow().iter().find(|u| u.id == id).cloned()
    }

    async fn create_user(&self, input: &UserInput) -> Option<User> {
        if !self.enter("create_user") {
            return None;
        }
        let user = User {
            id: self.allocate_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            created_at: "2024-01-02T00:00:00".to_string(),
            updated_at: "2024-01-02T00:00:00".to_string(),
        };
        self.users.borrow_mut().push(user.clone());
        Some(user)
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Option<User> {
        if !self.enter("update_user") {
            return None;
        }
        *self.last_user_update.borrow_mut() = serde_json::to_value(input).ok();
        let mut users = self.users.borrow_mut();
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.name = input.name.clone();
        user.email = input.email.clone();
        Some(user.clone())
    }

    async fn delete_user(&self, id: UserId) -> Option<User> {
        if !self.enter("delete_user") {
            return None;
        }
        let mut users = self.users.borrow_mut();
        let index = users.iter().position(|u| u.id == id)?;
        Some(users.remove(index))
    }

    async fn list_transactions(&self) -> Option<Vec<Transaction>> {
        self.enter("list_transactions").then(|| self.transactions.borrow().clone())
    }

    async fn create_transaction(&self, input: &TransactionInput) -> Option<Transaction> {
        if !self.enter("create_transaction") {
            return None;
        }
        let attempt = self.creation_attempts.get() + 1;
        self.creation_attempts.set(attempt);
        if self.fail_creation_at.get() == Some(attempt) {
            self.fail_creation_at.set(None);
            return None;
        }
        let transaction = Transaction {
            id: self.allocate_id(),
            user_id: input.user_id,
            book_id: input.book_id,
            status: TransactionStatus::Pending,
            created_at: "2024-01-02T00:00:00".to_string(),
            updated_at: "2024-01-02T00:00:00".to_string(),
        };
        self.transactions.borrow_mut().push(transaction.clone());
        Some(transaction)
    }

    async fn update_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Option<Transaction> {
        if !self.enter("update_transaction_status") {
            return None;
        }
        let mut transactions = self.transactions.borrow_mut();
        let transaction = transactions.iter_mut().find(|t| t.id == id)?;
        transaction.status = status;
        Some(transaction.clone())
    }

    async fn list_user_transactions(&self, user_id: UserId) -> Option<UserTransactions> {
        if !self.enter("list_user_transactions") {
            return None;
        }
        let transactions: Vec<Transaction> = self
            .transactions
            .borrow()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        let pending = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Pending)
            .count();
        Some(UserTransactions {
            transactions,
            total_due: pending as f64 * 5.0,
        })
    }
}
