use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Login with form-encoded credentials (OAuth2 password grant shape:
/// `username` carries the email).
///
/// Failure is uniform whatever actually went wrong, so callers cannot probe
/// which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let pair = state
        .users
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoginResponseData {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}
