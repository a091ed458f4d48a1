use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenConfig;
use book_service::book::errors::BookError;
use book_service::domain::book::models::Book;
use book_service::domain::book::models::BookId;
use book_service::domain::book::ports::BookRepository;
use book_service::domain::book::service::BookService;
use book_service::domain::user::models::AccountType;
use book_service::domain::user::models::User;
use book_service::domain::user::models::UserId;
use book_service::domain::user::ports::UserRepository;
use book_service::domain::user::service::UserService;
use book_service::inbound::http::router::create_router;
use book_service::user::errors::UserError;
use serde_json::json;
use serde_json::Value;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "pw123";

/// In-memory implementation of the identity repository port.
///
/// Behaves like the Postgres adapter for everything the suite exercises:
/// case-sensitive email uniqueness and exact-match lookups.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn list_authors(&self, skip: i64, limit: i64) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        let mut authors: Vec<User> = users
            .values()
            .filter(|u| u.account_type == AccountType::Author)
            .cloned()
            .collect();
        authors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(authors
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

/// In-memory implementation of the book repository port.
pub struct InMemoryBookRepository {
    books: Mutex<HashMap<Uuid, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.lock().unwrap().insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self.books.lock().unwrap().get(&id.0).cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Book>, BookError> {
        let books = self.books.lock().unwrap();
        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Book>, BookError> {
        let books = self.books.lock().unwrap();
        let mut owned: Vec<Book> = books
            .values()
            .filter(|b| b.author_id == *author_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.lock().unwrap();
        if !books.contains_key(&book.id.0) {
            return Err(BookError::NotFound(book.id.to_string()));
        }
        books.insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let mut books = self.books.lock().unwrap();
        books
            .remove(&id.0)
            .map(|_| ())
            .ok_or(BookError::NotFound(id.to_string()))
    }
}

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default token lifetimes.
    pub async fn spawn() -> Self {
        Self::spawn_with_token_config(TokenConfig::new(TEST_SECRET)).await
    }

    /// Spawn the application with custom token lifetimes (used by the
    /// expiration scenarios).
    pub async fn spawn_with_token_config(config: TokenConfig) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(config));
        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            authenticator,
        ));
        let book_service = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new())));

        let router = create_router(user_service, book_service);

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an account and return the response body.
    pub async fn register(&self, email: &str, account_type: &str) -> Value {
        let response = self
            .post("/api/v1/auth/register")
            .json(&json!({
                "email": email,
                "password": TEST_PASSWORD,
                "first_name": "Test",
                "last_name": "User",
                "account_type": account_type,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse response")
    }

    /// Login and return (access_token, refresh_token).
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/v1/auth/login")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        (
            body["access_token"].as_str().unwrap().to_string(),
            body["refresh_token"].as_str().unwrap().to_string(),
        )
    }

    /// Register an account and return its id plus a fresh access token.
    pub async fn register_and_login(&self, email: &str, account_type: &str) -> (String, String) {
        let user = self.register(email, account_type).await;
        let (access_token, _) = self.login(email, TEST_PASSWORD).await;
        (user["id"].as_str().unwrap().to_string(), access_token)
    }

    /// Create a book as the given user and return the response body.
    pub async fn create_book(&self, access_token: &str, title: &str, content: &str) -> Value {
        let response = self
            .post("/api/v1/books")
            .bearer_auth(access_token)
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("Failed to parse response")
    }
}
