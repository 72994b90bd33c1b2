use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::api::{discard_error, Method};
use shared::config::BASE_URL_VAR;
use shared::{
    ApiConfig, ApiError, BatchCreated, Book, BookId, BookInput, Endpoint, ImportedBooks,
    LibraryApi, Transaction, TransactionId, TransactionInput, TransactionStatus, User, UserId,
    UserInput, UserTransactions,
};

/// API client for communicating with the library backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the backend configured at build time
    pub fn new() -> Self {
        let config = ApiConfig::from_env_value(option_env!("LIBNEXT_BACKEND_URL"));
        log::debug!("{} resolved to {}", BASE_URL_VAR, config.base_url());
        Self::with_config(config)
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: ApiConfig) -> Self {
        Self { config }
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url(endpoint);
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        let query = endpoint.query();
        if query.is_empty() {
            builder
        } else {
            builder.query(query)
        }
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self
            .request(&endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }

    async fn send_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(&endpoint)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Status { status, body });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl LibraryApi for ApiClient {
    async fn list_books(&self) -> Option<Vec<Book>> {
        discard_error("List books", self.send(Endpoint::ListBooks).await)
    }

    async fn get_book(&self, id: BookId) -> Option<Book> {
        discard_error("Get book", self.send(Endpoint::GetBook(id)).await)
    }

    async fn create_book(&self, input: &BookInput) -> Option<Book> {
        discard_error(
            "Create book",
            self.send_json(Endpoint::CreateBook, input).await,
        )
    }

    async fn update_book(&self, id: BookId, input: &BookInput) -> Option<Book> {
        discard_error(
            "Update book",
            self.send_json(Endpoint::UpdateBook(id), input).await,
        )
    }

    async fn delete_book(&self, id: BookId) -> Option<Book> {
        discard_error("Delete book", self.send(Endpoint::DeleteBook(id)).await)
    }

    async fn import_books(&self, limit: u32, keyword: &str) -> Option<ImportedBooks> {
        let endpoint = Endpoint::ImportBooks {
            limit,
            keyword: keyword.to_string(),
        };
        discard_error("Import books", self.send(endpoint).await)
    }

    async fn create_book_batch(&self, books: &[BookInput]) -> Option<BatchCreated> {
        discard_error(
            "Create book batch",
            self.send_json(Endpoint::CreateBookBatch, books).await,
        )
    }

    async fn list_users(&self) -> Option<Vec<User>> {
        discard_error("List users", self.send(Endpoint::ListUsers).await)
    }

    async fn get_user(&self, id: UserId) -> Option<User> {
        discard_error("Get user", self.send(Endpoint::GetUser(id)).await)
    }

    async fn create_user(&self, input: &UserInput) -> Option<User> {
        discard_error(
            "Create user",
            self.send_json(Endpoint::CreateUser, input).await,
        )
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Option<User> {
        discard_error(
            "Update user",
            self.send_json(Endpoint::UpdateUser(id), input).await,
        )
    }

    async fn delete_user(&self, id: UserId) -> Option<User> {
        discard_error("Delete user", self.send(Endpoint::DeleteUser(id)).await)
    }

    async fn list_transactions(&self) -> Option<Vec<Transaction>> {
        discard_error(
            "List transactions",
            self.send(Endpoint::ListTransactions).await,
        )
    }

    async fn create_transaction(&self, input: &TransactionInput) -> Option<Transaction> {
        discard_error(
            "Create transaction",
            self.send_json(Endpoint::CreateTransaction, input).await,
        )
    }

    async fn update_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Option<Transaction> {
        let endpoint = Endpoint::UpdateTransactionStatus { id, status };
        discard_error(
            "Update transaction status",
            self.send_json(endpoint, &serde_json::json!({})).await,
        )
    }

    async fn list_user_transactions(&self, user_id: UserId) -> Option<UserTransactions> {
        discard_error(
            "List user transactions",
            self.send(Endpoint::ListUserTransactions(user_id)).await,
        )
    }
}
