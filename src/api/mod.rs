//! Spell API Client
//!
//! HTTP bindings to the remote spell API, organized by domain.

mod auth;
mod spells;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorKind};

pub use auth::*;
pub use spells::*;

/// Outbound client bound to one viewer's token
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    on_unauthorized: Option<Callback<()>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            on_unauthorized: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Called when a token-carrying request comes back 401
    pub fn on_unauthorized(mut self, callback: Callback<()>) -> Self {
        self.on_unauthorized = Some(callback);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        log::debug!("[API] GET {}", path);
        self.authorize(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        log::debug!("[API] POST {}", path);
        self.authorize(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        log::debug!("[API] PUT {}", path);
        self.authorize(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        log::debug!("[API] DELETE {}", path);
        self.authorize(Request::delete(&self.url(path)))
    }

    /// Send and map non-2xx statuses to `ApiError`
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        log::warn!("[API] {} -> {}", response.url(), err);

        if tears_down_session(&err, self.is_authenticated()) {
            if let Some(callback) = self.on_unauthorized {
                callback.run(());
            }
        }
        Err(err)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For endpoints answering 204 or an ignorable body
    async fn fetch_empty(&self, request: Request) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }
}

/// A 401 only ends the session when the request carried a token;
/// an anonymous 401 is a bad-credentials answer for the login form.
pub fn tears_down_session(err: &ApiError, authenticated: bool) -> bool {
    authenticated && err.kind() == ErrorKind::Authentication
}

fn encode_err(e: gloo_net::Error) -> ApiError {
    ApiError::Encode(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_build_failures_are_generic() {
        let err = encode_err(gloo_net::Error::GlooError("bad body".into()));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), "could not build request: bad body");
        assert!(!tears_down_session(&err, true));
    }

    #[test]
    fn test_only_token_carrying_401_tears_down() {
        let unauthorized = ApiError::from_status(401, "");
        let forbidden = ApiError::from_status(403, "");

        assert!(tears_down_session(&unauthorized, true));
        assert!(!tears_down_session(&unauthorized, false));
        assert!(!tears_down_session(&forbidden, true));
        assert!(!tears_down_session(&ApiError::Network("down".into()), true));
    }

    #[test]
    fn test_client_token_binding() {
        let anon = ApiClient::new("http://api");
        assert!(!anon.is_authenticated());
        assert_eq!(anon.url("/spells/3/vote"), "http://api/spells/3/vote");

        let authed = anon.with_token(Some("abc".into()));
        assert!(authed.is_authenticated());
    }
}
