use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::book::models::Book;
use crate::domain::user::models::AccountType;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// A specific author and their books.
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<Json<AuthorDetailData>, ApiError> {
    let author_id = UserId::from_string(&author_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let author = state.users.get_author(&author_id).await.map_err(|e| match e {
        UserError::NotFound(_) => ApiError::NotFound("Author not found".to_string()),
        other => ApiError::from(other),
    })?;

    let books = state
        .books
        .list_books_by_author(&author.id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(AuthorDetailData::new(&author, &books)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorDetailData {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub account_type: AccountType,
    pub books: Vec<AuthorBookData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBookData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}

impl AuthorDetailData {
    fn new(user: &User, books: &[Book]) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            account_type: user.account_type,
            books: books
                .iter()
                .map(|book| AuthorBookData {
                    id: book.id.to_string(),
                    title: book.title.as_str().to_string(),
                    content: book.content.clone(),
                    author_id: book.author_id.to_string(),
                })
                .collect(),
        }
    }
}
