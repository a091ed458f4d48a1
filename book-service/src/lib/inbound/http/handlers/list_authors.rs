use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::Pagination;
use crate::domain::user::models::AccountType;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

pub async fn list_authors(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<AuthorData>>, ApiError> {
    let authors = state
        .users
        .list_authors(pagination.skip, pagination.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(authors.iter().map(Into::into).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub account_type: AccountType,
}

impl From<&User> for AuthorData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            account_type: user.account_type,
        }
    }
}
