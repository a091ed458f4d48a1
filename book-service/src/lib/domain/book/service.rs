use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::policy;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Domain service implementation for book operations.
///
/// Enforces the authorization policy on every mutation; the repository only
/// ever sees already-authorized writes.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    /// Create a new book service with an injected repository.
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(
        &self,
        caller: &User,
        command: CreateBookCommand,
    ) -> Result<Book, BookError> {
        if !policy::can_create_book(caller) {
            return Err(BookError::NotAnAuthor);
        }

        let book = Book {
            id: BookId::new(),
            title: command.title,
            content: command.content,
            author_id: caller.id,
            created_at: Utc::now(),
        };

        self.repository.create(book).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn list_books(&self, skip: i64, limit: i64) -> Result<Vec<Book>, BookError> {
        self.repository.list(skip, limit).await
    }

    async fn list_books_by_author(&self, author_id: &UserId) -> Result<Vec<Book>, BookError> {
        self.repository.list_by_author(author_id).await
    }

    async fn update_book(
        &self,
        caller: &User,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        // Existence before ownership: a missing book is 404, never 403
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if !policy::can_mutate_book(caller, &book) {
            return Err(BookError::NotOwner(book.id.to_string()));
        }

        if let Some(new_title) = command.title {
            book.title = new_title;
        }

        if let Some(new_content) = command.content {
            book.content = new_content;
        }

        self.repository.update(book).await
    }

    async fn delete_book(&self, caller: &User, id: &BookId) -> Result<(), BookError> {
        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if !policy::can_mutate_book(caller, &book) {
            return Err(BookError::NotOwner(book.id.to_string()));
        }

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::book::models::BookTitle;
    use crate::domain::user::models::AccountType;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: Book) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Book>, BookError>;
            async fn list_by_author(&self, author_id: &UserId) -> Result<Vec<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    fn user(account_type: AccountType) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
            account_type,
            created_at: Utc::now(),
        }
    }

    fn book(author_id: UserId) -> Book {
        Book {
            id: BookId::new(),
            title: BookTitle::new("T".to_string()).unwrap(),
            content: "C".to_string(),
            author_id,
            created_at: Utc::now(),
        }
    }

    fn command() -> CreateBookCommand {
        CreateBookCommand::new(BookTitle::new("T".to_string()).unwrap(), "C".to_string())
    }

    #[tokio::test]
    async fn test_create_book_sets_owner() {
        let author = user(AccountType::Author);
        let author_id = author.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_create()
            .withf(move |book| book.author_id == author_id && book.title.as_str() == "T")
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository));

        let created = service.create_book(&author, command()).await.unwrap();
        assert_eq!(created.author_id, author_id);
    }

    #[tokio::test]
    async fn test_create_book_rejects_reader() {
        let mut repository = MockTestBookRepository::new();
        repository.expect_create().times(0);

        let service = BookService::new(Arc::new(repository));

        let result = service.create_book(&user(AccountType::Reader), command()).await;
        assert!(matches!(result.unwrap_err(), BookError::NotAnAuthor));
    }

    #[tokio::test]
    async fn test_update_book_by_owner() {
        let owner = user(AccountType::Author);
        let existing = book(owner.id);
        let book_id = existing.id;

        let mut repository = MockTestBookRepository::new();
        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update()
            .withf(|book| book.title.as_str() == "New title" && book.content == "C")
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository));

        let update = UpdateBookCommand {
            title: Some(BookTitle::new("New title".to_string()).unwrap()),
            content: None,
        };

        let updated = service.update_book(&owner, &book_id, update).await.unwrap();
        assert_eq!(updated.title.as_str(), "New title");
    }

    #[tokio::test]
    async fn test_update_book_by_non_owner() {
        let owner = user(AccountType::Author);
        let other = user(AccountType::Author);
        let existing = book(owner.id);
        let book_id = existing.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = BookService::new(Arc::new(repository));

        let update = UpdateBookCommand {
            title: None,
            content: Some("hijacked".to_string()),
        };

        let result = service.update_book(&other, &book_id, update).await;
        assert!(matches!(result.unwrap_err(), BookError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_update_missing_book_is_not_found_even_for_non_owner() {
        // Existence is checked before ownership
        let caller = user(AccountType::Reader);

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = BookService::new(Arc::new(repository));

        let update = UpdateBookCommand {
            title: None,
            content: None,
        };

        let result = service.update_book(&caller, &BookId::new(), update).await;
        assert!(matches!(result.unwrap_err(), BookError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_book_by_owner() {
        let owner = user(AccountType::Author);
        let existing = book(owner.id);
        let book_id = existing.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(repository));

        assert!(service.delete_book(&owner, &book_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_book_by_non_owner() {
        let owner = user(AccountType::Author);
        let other = user(AccountType::Author);
        let existing = book(owner.id);
        let book_id = existing.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_delete().times(0);

        let service = BookService::new(Arc::new(repository));

        let result = service.delete_book(&other, &book_id).await;
        assert!(matches!(result.unwrap_err(), BookError::NotOwner(_)));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_book(&BookId::new()).await;
        assert!(matches!(result.unwrap_err(), BookError::NotFound(_)));
    }
}
