use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod api;
pub mod cache;
pub mod circulation;
pub mod config;
pub mod display;
pub mod fetch;
pub mod forms;
pub mod import;
pub mod notify;
pub mod pagination;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{ApiError, Endpoint, LibraryApi};
pub use cache::{CacheStore, KeyValueStorage, PersistentCache};
pub use config::ApiConfig;
pub use notify::{Notifier, Toast, ToastLevel};
pub use pagination::Pagination;

pub type BookId = i64;
pub type UserId = i64;
pub type TransactionId = i64;

/// A book record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Author names, in the order they were entered
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_pages: i64,
    /// Not every backend row carries a stock count; missing reads as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: i64,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub isbn13: Option<String>,
    /// Publication date as sent by the backend (usually `YYYY-MM-DD`)
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body for creating or updating a book (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub num_pages: i64,
    pub stock_quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn13: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

impl Default for BookInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            authors: Vec::new(),
            publisher: String::new(),
            language_code: None,
            num_pages: 0,
            stock_quantity: 0,
            isbn: None,
            isbn13: None,
            publication_date: None,
        }
    }
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            authors: book.authors.clone(),
            publisher: book.publisher.clone(),
            language_code: book.language_code.clone(),
            num_pages: book.num_pages,
            stock_quantity: book.stock_quantity,
            isbn: book.isbn.clone(),
            isbn13: book.isbn13.clone(),
            publication_date: book.publication_date.as_deref().map(date_part),
        }
    }
}

/// `YYYY-MM-DD` prefix of a date or date-time string
fn date_part(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).trim().to_string()
}

impl BookInput {
    /// Append an author, ignoring blank names
    pub fn add_author(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.authors.push(name.to_string());
        true
    }

    pub fn remove_author(&mut self, index: usize) {
        if index < self.authors.len() {
            self.authors.remove(index);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body for creating or updating a user. Only these two keys ever go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub email: String,
    pub name: String,
}

impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Borrow state of a single issued copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

impl TransactionStatus {
    /// Status after the return/borrow toggle
    pub fn toggled(self) -> Self {
        match self {
            TransactionStatus::Pending => TransactionStatus::Completed,
            TransactionStatus::Completed => TransactionStatus::Pending,
        }
    }

    /// Value used in the `status` query parameter
    pub fn as_query_value(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
        }
    }

    /// Label of the button that toggles this status
    pub fn action_label(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Return",
            TransactionStatus::Completed => "Borrow",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// One copy of a book issued to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub user_id: UserId,
    pub book_id: BookId,
}

/// Result of a lookup against the external book catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedBooks {
    pub books: Vec<Book>,
    pub count: usize,
}

/// Response of the batch book creation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCreated {
    /// Number of books that were new to the library
    pub count_unique: usize,
}

/// Transactions of one user together with the fine owed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTransactions {
    pub transactions: Vec<Transaction>,
    pub total_due: f64,
}

impl UserTransactions {
    /// Number of copies the user still holds
    pub fn borrowed_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Pending)
            .count()
    }
}
