use axum::extract::Path;
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
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a book (raw JSON)
///
/// Fields are optional to support partial updates.
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, BookTitleError> {
        let title = self.title.map(BookTitle::new).transpose()?;

        Ok(UpdateBookCommand {
            title,
            content: self.content,
        })
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(book_id): Path<String>,
    Json(body): Json<UpdateBookRequest>,
) -> Result<Json<UpdateBookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let command = body.try_into_command()?;

    state
        .books
        .update_book(&caller, &book_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| Json(book.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBookResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for UpdateBookResponseData {
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
