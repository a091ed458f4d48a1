use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Exchange a refresh token for a fresh access token.
///
/// No new refresh token is issued; when the presented one expires the caller
/// must log in again.
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequestBody>,
) -> Result<Json<RefreshResponseData>, ApiError> {
    let access_token = state
        .users
        .refresh(&body.refresh_token)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(RefreshResponseData {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequestBody {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub access_token: String,
    pub token_type: String,
}
