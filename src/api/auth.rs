//! Auth service: login and signup.

use super::{ApiClient, ApiError};
use crate::constants::{ROUTE_LOGIN, ROUTE_SIGNUP};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    jwt_token: String,
}

impl ApiClient {
    /// Exchange credentials for a JWT token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .post(ROUTE_LOGIN, &CredentialsRequest { username, password })
            .await?;
        Ok(response.jwt_token)
    }

    /// Create an account and return its JWT token.
    pub async fn signup(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .post(ROUTE_SIGNUP, &CredentialsRequest { username, password })
            .await?;
        Ok(response.jwt_token)
    }
}
