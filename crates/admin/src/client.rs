//! Authenticated HTTP transport for the admin API.
//!
//! Every request goes through [`AdminClient::dispatch`], which implements
//! the one piece of cross-cutting behavior in the dashboard: attach the
//! bearer token, and on a 401 attempt exactly one silent refresh before
//! retrying the original request once. A failed refresh (or a second 401
//! on the retry) clears the stored tokens and surfaces
//! [`ApiError::SessionExpired`] - the terminal state the browser handled
//! with a hard redirect to the login route.
//!
//! Per-request state machine:
//! `sent -> (success | 401 -> refresh -> (retried-success |
//! retried-failure -> session-expired))`. Non-401 errors propagate to the
//! caller unchanged; nothing else is retried.

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use tokio::sync::RwLock;
use url::Url;

use shopdesk_core::Email;

use crate::auth::{AuthTokens, TokenStore};
use crate::config::AdminConfig;
use crate::error::{ApiError, flatten_error_body};

const LOGIN_PATH: &str = "api/auth/login/";
const REFRESH_PATH: &str = "api/auth/refresh/";

/// Client for the admin API.
///
/// Cheap to clone; all clones share the HTTP connection pool and the
/// cached token pair.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    /// In-memory token cache, persisted through `store` on every change.
    tokens: RwLock<Option<AuthTokens>>,
    store: Box<dyn TokenStore>,
}

/// Request body shapes the transport can resend after a refresh.
pub(crate) enum Payload {
    Empty,
    Json(serde_json::Value),
    /// Multipart forms are not clonable, so the builder runs once per
    /// attempt.
    Multipart(Box<dyn Fn() -> Result<reqwest::multipart::Form, ApiError> + Send + Sync>),
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
    /// Some backends rotate the refresh token as well.
    #[serde(default)]
    refresh: Option<String>,
}

impl AdminClient {
    /// Create a new client, loading any persisted token pair from the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// token store cannot be read.
    pub fn new(config: &AdminConfig, store: Box<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let tokens = store.load()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.clone(),
                tokens: RwLock::new(tokens),
                store,
            }),
        })
    }

    // =========================================================================
    // Session management
    // =========================================================================

    /// Exchange credentials for a token pair and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// credentials.
    pub async fn login(&self, email: &Email, password: &SecretString) -> Result<(), ApiError> {
        let url = self.endpoint(LOGIN_PATH)?;
        let body = serde_json::json!({
            "email": email.as_str(),
            "password": password.expose_secret(),
        });

        let resp = self
            .inner
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport)?;
        let resp = Self::ensure_success(resp, LOGIN_PATH).await?;
        let pair: LoginResponse = resp.json().await?;

        let tokens = AuthTokens {
            access: pair.access,
            refresh: pair.refresh,
            obtained_at: chrono::Utc::now().timestamp(),
        };
        self.inner.store.save(&tokens)?;
        *self.inner.tokens.write().await = Some(tokens);

        tracing::info!("signed in");
        Ok(())
    }

    /// Drop the cached and persisted token pair.
    pub async fn logout(&self) {
        self.end_session().await;
    }

    /// Whether a token pair is available.
    pub async fn has_session(&self) -> bool {
        self.inner.tokens.read().await.is_some()
    }

    async fn current_access(&self) -> Option<String> {
        self.inner
            .tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.access.clone())
    }

    /// Clear the cached pair and the backing store.
    async fn end_session(&self) {
        *self.inner.tokens.write().await = None;
        if let Err(e) = self.inner.store.clear() {
            tracing::warn!(error = %e, "failed to clear token store");
        }
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Any failure here is terminal for the session: tokens are cleared
    /// and `SessionExpired` is returned.
    async fn refresh_access(&self) -> Result<(), ApiError> {
        let refresh = self
            .inner
            .tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.refresh.clone());
        let Some(refresh) = refresh else {
            self.end_session().await;
            return Err(ApiError::SessionExpired);
        };

        let url = self.endpoint(REFRESH_PATH)?;
        let body = serde_json::json!({ "refresh": refresh });
        let outcome = self.inner.http.post(url).json(&body).send().await;

        let parsed: Option<RefreshResponse> = match outcome {
            Ok(resp) if resp.status().is_success() => resp.json().await.ok(),
            _ => None,
        };
        let Some(renewed) = parsed else {
            tracing::warn!("token refresh failed, ending session");
            self.end_session().await;
            return Err(ApiError::SessionExpired);
        };

        let mut guard = self.inner.tokens.write().await;
        if let Some(tokens) = guard.as_mut() {
            tokens.access = renewed.access;
            if let Some(rotated) = renewed.refresh {
                tokens.refresh = rotated;
            }
            tokens.obtained_at = chrono::Utc::now().timestamp();
            if let Err(e) = self.inner.store.save(tokens) {
                tracing::warn!(error = %e, "failed to persist refreshed tokens");
            }
        }
        tracing::debug!("access token refreshed");
        Ok(())
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|_| ApiError::InvalidPath(path.to_string()))
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &Url,
        query: &[(&str, String)],
        payload: &Payload,
        access: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut req = self.inner.http.request(method.clone(), url.clone());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = access {
            req = req.bearer_auth(token);
        }
        req = match payload {
            Payload::Empty => req,
            Payload::Json(body) => req.json(body),
            Payload::Multipart(make) => req.multipart(make()?),
        };
        req.send().await.map_err(map_transport)
    }

    /// Send a request through the refresh state machine and return the
    /// raw response, which is guaranteed not to be a 401.
    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        payload: &Payload,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        let access = self.current_access().await;
        let resp = self
            .send_once(method, &url, query, payload, access.as_deref())
            .await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp);
        }

        // Exactly one silent refresh, then one retry of the original
        // request.
        self.refresh_access().await?;
        let access = self.current_access().await;
        let retried = self
            .send_once(method, &url, query, payload, access.as_deref())
            .await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            self.end_session().await;
            return Err(ApiError::SessionExpired);
        }
        Ok(retried)
    }

    async fn ensure_success(resp: Response, path: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.trim_end_matches('/').to_string()));
        }
        let body = resp.text().await.unwrap_or_default();
        let message = flatten_error_body(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T, ApiError> {
        let resp = Self::ensure_success(resp, path).await?;
        Ok(resp.json::<T>().await?)
    }

    // =========================================================================
    // Typed helpers used by the resource modules
    // =========================================================================

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self
            .dispatch(&Method::GET, path, query, &Payload::Empty)
            .await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = Payload::Json(serde_json::to_value(body)?);
        let resp = self.dispatch(&Method::POST, path, &[], &payload).await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = Payload::Json(serde_json::to_value(body)?);
        let resp = self.dispatch(&Method::PUT, path, &[], &payload).await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = Payload::Json(serde_json::to_value(body)?);
        let resp = self.dispatch(&Method::PATCH, path, &[], &payload).await?;
        Self::decode(resp, path).await
    }

    /// PATCH with no body, used by the `toggle_status` actions.
    pub(crate) async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .dispatch(&Method::PATCH, path, &[], &Payload::Empty)
            .await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .dispatch(&Method::DELETE, path, &[], &Payload::Empty)
            .await?;
        Self::ensure_success(resp, path).await.map(|_| ())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        make_form: Box<dyn Fn() -> Result<reqwest::multipart::Form, ApiError> + Send + Sync>,
    ) -> Result<T, ApiError> {
        let payload = Payload::Multipart(make_form);
        let resp = self.dispatch(&Method::POST, path, &[], &payload).await?;
        Self::decode(resp, path).await
    }
}

/// Map transport errors, surfacing the uniform timeout distinctly.
fn map_transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use std::path::PathBuf;

    fn config() -> AdminConfig {
        AdminConfig::new("http://localhost:8000", PathBuf::from("/tmp/unused.json")).unwrap()
    }

    #[tokio::test]
    async fn test_new_client_has_no_session() {
        let client = AdminClient::new(&config(), Box::new(MemoryTokenStore::new())).unwrap();
        assert!(!client.has_session().await);
    }

    #[tokio::test]
    async fn test_new_client_loads_persisted_tokens() {
        let store = MemoryTokenStore::with_tokens(AuthTokens {
            access: "a".to_string(),
            refresh: "r".to_string(),
            obtained_at: 0,
        });
        let client = AdminClient::new(&config(), Box::new(store)).unwrap();
        assert!(client.has_session().await);
        assert_eq!(client.current_access().await.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_logout_clears_cache_and_store() {
        let store = MemoryTokenStore::with_tokens(AuthTokens {
            access: "a".to_string(),
            refresh: "r".to_string(),
            obtained_at: 0,
        });
        let client = AdminClient::new(&config(), Box::new(store)).unwrap();
        client.logout().await;
        assert!(!client.has_session().await);
    }

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let client = AdminClient::new(&config(), Box::new(MemoryTokenStore::new())).unwrap();
        let url = client.endpoint("api/products/black-tee/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/products/black-tee/");
    }
}
