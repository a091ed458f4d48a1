use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::book::errors::BookIdError;
use crate::book::errors::BookTitleError;
use crate::domain::user::models::UserId;

/// Book aggregate entity.
///
/// Owned by exactly one author; `author_id` is set at creation and never
/// changes.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title value type
///
/// Non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid book title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title longer than 255 characters
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.is_empty() {
            return Err(BookTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(BookTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book with domain types.
///
/// The owner is not part of the command; it is always the authenticated
/// caller.
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub content: String,
}

impl CreateBookCommand {
    pub fn new(title: BookTitle, content: String) -> Self {
        Self { title, content }
    }
}

/// Command to update an existing book with optional validated fields.
///
/// Only provided fields are changed; ownership is immutable.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_round_trip() {
        let id = BookId::new();
        assert_eq!(BookId::from_string(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_book_id_invalid() {
        assert!(matches!(
            BookId::from_string("nope"),
            Err(BookIdError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_title_validation() {
        assert!(BookTitle::new("T".to_string()).is_ok());
        assert!(matches!(
            BookTitle::new(String::new()),
            Err(BookTitleError::Empty)
        ));
        assert!(matches!(
            BookTitle::new("x".repeat(256)),
            Err(BookTitleError::TooLong { .. })
        ));
    }
}
