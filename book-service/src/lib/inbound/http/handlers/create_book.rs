use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::book::errors::BookTitleError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(body): Json<CreateBookRequest>,
) -> Result<Json<CreateBookResponseData>, ApiError> {
    state
        .books
        .create_book(&caller, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| Json(book.into()))
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    content: String,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, BookTitleError> {
        let title = BookTitle::new(self.title)?;
        Ok(CreateBookCommand::new(title, self.content))
    }
}

impl From<BookTitleError> for ApiError {
    fn from(err: BookTitleError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateBookResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for CreateBookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            content: book.content.clone(),
            author_id: book.author_id.to_string(),
            created_at: book.created_at,
        }
    }
}
