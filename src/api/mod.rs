//! Client for the chartboard dashboard service
//!
//! The service speaks connect-style JSON: every operation is a POST to
//! a service/method route with a JSON body, authenticated by a JWT
//! bearer token. Each service (auth, datasets, dashboards) contributes
//! its methods from its own submodule.

mod auth;
mod dashboards;
mod datasets;
mod error;

pub use error::ApiError;

use crate::session::Session;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the dashboard service.
///
/// Cheap to clone; holds the base URL and the session's bearer token.
/// A fresh token (after login) requires constructing a new client via
/// [`ApiClient::with_session`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Unauthenticated client (login, signup, public dashboards).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
            token: None,
        }
    }

    /// Client carrying the session's token, if any.
    pub fn with_session(base_url: impl Into<String>, session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            ..Self::new(base_url)
        }
    }

    /// POST a JSON body to a service route and decode the JSON reply.
    pub(crate) async fn post<Req, Resp>(&self, route: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, route);
        tracing::debug!(%url, "API request");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "API request failed");
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
