//! Contract between the views and the library backend.
//!
//! Every operation resolves to `Some(body)` on success and `None` on any
//! failure. Implementations log the underlying [`ApiError`] and drop it, so
//! callers only ever decide between "worked" and "failed".

use async_trait::async_trait;
use log::error;
use thiserror::Error;

use crate::{
    BatchCreated, Book, BookId, BookInput, ImportedBooks, Transaction, TransactionId,
    TransactionInput, TransactionStatus, User, UserId, UserInput, UserTransactions,
};

/// Why a request did not produce a usable body
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Collapse a request result into the `None` sentinel, logging the failure
pub fn discard_error<T>(operation: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(body) => Some(body),
        Err(e) => {
            error!("{} failed: {}", operation, e);
            None
        }
    }
}

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Every backend route the client talks to
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    ListBooks,
    GetBook(BookId),
    CreateBook,
    UpdateBook(BookId),
    DeleteBook(BookId),
    ImportBooks { limit: u32, keyword: String },
    CreateBookBatch,
    ListUsers,
    GetUser(UserId),
    CreateUser,
    UpdateUser(UserId),
    DeleteUser(UserId),
    ListTransactions,
    CreateTransaction,
    UpdateTransactionStatus { id: TransactionId, status: TransactionStatus },
    ListUserTransactions(UserId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListBooks
            | Endpoint::GetBook(_)
            | Endpoint::ImportBooks { .. }
            | Endpoint::ListUsers
            | Endpoint::GetUser(_)
            | Endpoint::ListTransactions
            | Endpoint::ListUserTransactions(_) => Method::Get,
            Endpoint::CreateBook
            | Endpoint::CreateBookBatch
            | Endpoint::CreateUser
            | Endpoint::CreateTransaction => Method::Post,
            Endpoint::UpdateBook(_)
            | Endpoint::UpdateUser(_)
            | Endpoint::UpdateTransactionStatus { .. } => Method::Patch,
            Endpoint::DeleteBook(_) | Endpoint::DeleteUser(_) => Method::Delete,
        }
    }

    /// Path relative to the configured base URL, without the query string
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListBooks | Endpoint::CreateBook => "/books".to_string(),
            Endpoint::GetBook(id) | Endpoint::UpdateBook(id) | Endpoint::DeleteBook(id) => {
                format!("/books/{}", id)
            }
            Endpoint::ImportBooks { .. } => "/books/import/frappe".to_string(),
            Endpoint::CreateBookBatch => "/books/batch".to_string(),
            Endpoint::ListUsers | Endpoint::CreateUser => "/users".to_string(),
            Endpoint::GetUser(id) | Endpoint::UpdateUser(id) | Endpoint::DeleteUser(id) => {
                format!("/users/{}", id)
            }
            Endpoint::ListTransactions | Endpoint::CreateTransaction => {
                "/transactions".to_string()
            }
            Endpoint::UpdateTransactionStatus { id, .. } => format!("/transactions/{}", id),
            Endpoint::ListUserTransactions(user_id) => format!("/transactions/users/{}", user_id),
        }
    }

    /// Query parameters, unencoded. The HTTP layer does the encoding.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ImportBooks { limit, keyword } => {
                let mut params = vec![("limit", limit.to_string())];
                let keyword = keyword.trim();
                if !keyword.is_empty() {
                    params.push(("includes", keyword.to_string()));
                }
                params
            }
            Endpoint::UpdateTransactionStatus { status, .. } => {
                vec![("status", status.as_query_value().to_string())]
            }
            _ => Vec::new(),
        }
    }
}

/// Operations offered by the library backend
#[async_trait(?Send)]
pub trait LibraryApi {
    async fn list_books(&self) -> Option<Vec<Book>>;
    async fn get_book(&self, id: BookId) -> Option<Book>;
    async fn create_book(&self, input: &BookInput) -> Option<Book>;
    async fn update_book(&self, id: BookId, input: &BookInput) -> Option<Book>;
    async fn delete_book(&self, id: BookId) -> Option<Book>;
    /// Look books up in the external catalog, `keyword` matched against titles
    async fn import_books(&self, limit: u32, keyword: &str) -> Option<ImportedBooks>;
    /// Create many books at once; the server skips the ones it already has
    async fn create_book_batch(&self, books: &[BookInput]) -> Option<BatchCreated>;

    async fn list_users(&self) -> Option<Vec<User>>;
    async fn get_user(&self, id: UserId) -> Option<User>;
    async fn create_user(&self, input: &UserInput) -> Option<User>;
    async fn update_user(&self, id: UserId, input: &UserInput) -> Option<User>;
    async fn delete_user(&self, id: UserId) -> Option<User>;

    async fn list_transactions(&self) -> Option<Vec<Transaction>>;
    async fn create_transaction(&self, input: &TransactionInput) -> Option<Transaction>;
    async fn update_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Option<Transaction>;
    async fn list_user_transactions(&self, user_id: UserId) -> Option<UserTransactions>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::ListBooks.path(), "/books");
        assert_eq!(Endpoint::GetBook(4).path(), "/books/4");
        assert_eq!(Endpoint::CreateBookBatch.path(), "/books/batch");
        assert_eq!(Endpoint::UpdateUser(9).path(), "/users/9");
        assert_eq!(Endpoint::ListUserTransactions(3).path(), "/transactions/users/3");
        assert_eq!(Endpoint::DeleteBook(2).method(), Method::Delete);
        assert_eq!(Endpoint::UpdateUser(9).method(), Method::Patch);
        assert_eq!(Endpoint::CreateBookBatch.method(), Method::Post);
    }

    #[test]
    fn test_import_query_skips_blank_keyword() {
        let endpoint = Endpoint::ImportBooks {
            limit: 10,
            keyword: "  ".to_string(),
        };
        assert_eq!(endpoint.path(), "/books/import/frappe");
        assert_eq!(endpoint.query(), vec![("limit", "10".to_string())]);

        let endpoint = Endpoint::ImportBooks {
            limit: 5,
            keyword: "Harry Potter".to_string(),
        };
        assert_eq!(
            endpoint.query(),
            vec![("limit", "5".to_string()), ("includes", "Harry Potter".to_string())]
        );
    }

    #[test]
    fn test_status_patch_uses_query() {
        let endpoint = Endpoint::UpdateTransactionStatus {
            id: 12,
            status: TransactionStatus::Completed,
        };
        assert_eq!(endpoint.path(), "/transactions/12");
        assert_eq!(endpoint.query(), vec![("status", "COMPLETED".to_string())]);
    }

    #[test]
    fn test_discard_error() {
        assert_eq!(discard_error("list books", Ok::<_, ApiError>(3)), Some(3));
        let failed: Result<u8, ApiError> = Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(discard_error("list books", failed), None);
    }
}
