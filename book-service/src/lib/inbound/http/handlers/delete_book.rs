use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(book_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let book_id = BookId::from_string(&book_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .books
        .delete_book(&caller, &book_id)
        .await
        .map_err(|e| match e {
            BookError::NotOwner(_) => {
                ApiError::Forbidden("Only the author can delete this book".to_string())
            }
            other => ApiError::from(other),
        })
        .map(|_| StatusCode::NO_CONTENT)
}
