use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<GetBookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .books
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| Json(book.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBookResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for GetBookResponseData {
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
