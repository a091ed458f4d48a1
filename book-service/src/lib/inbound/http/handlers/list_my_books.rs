use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::book::models::Book;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Books owned by the authenticated caller.
///
/// Readers own nothing, so they always get an empty list rather than an
/// error.
pub async fn list_my_books(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<MyBookData>>, ApiError> {
    let books = state
        .books
        .list_books_by_author(&caller.id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(books.iter().map(Into::into).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyBookData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for MyBookData {
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
