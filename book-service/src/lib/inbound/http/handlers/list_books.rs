use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::Pagination;
use crate::domain::book::models::Book;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<BookListItemData>>, ApiError> {
    let books = state
        .books
        .list_books(pagination.skip, pagination.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(books.iter().map(Into::into).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookListItemData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookListItemData {
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
