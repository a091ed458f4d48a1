use async_trait::async_trait;

use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::book::errors::BookError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for book domain service operations.
///
/// Every mutating operation takes the authenticated caller; the authorization
/// decision lives behind this port, not in the transport layer.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a new book owned by the caller.
    ///
    /// # Errors
    /// * `NotAnAuthor` - Caller is a reader account
    /// * `DatabaseError` - Persistence operation failed
    async fn create_book(&self, caller: &User, command: CreateBookCommand)
        -> Result<Book, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// List books with pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_books(&self, skip: i64, limit: i64) -> Result<Vec<Book>, BookError>;

    /// List the books owned by one author.
    ///
    /// Readers own nothing, so for them this is always empty.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_books_by_author(&self, author_id: &UserId) -> Result<Vec<Book>, BookError>;

    /// Update a book. Existence is checked before ownership.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `NotOwner` - Caller does not own the book
    async fn update_book(
        &self,
        caller: &User,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;

    /// Delete a book. Existence is checked before ownership.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `NotOwner` - Caller does not own the book
    async fn delete_book(&self, caller: &User, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book.
    ///
    /// # Errors
    /// * `DatabaseError` - Persistence operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve books with pagination, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Book>, BookError>;

    /// Retrieve all books owned by one author.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Book>, BookError>;

    /// Update an existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Persistence operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a book from storage.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Persistence operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
