use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::envelope::{ApiResponse, EnvelopeHead, is_success_code};
use crate::http::errors::{ClientError, ClientResult};
use crate::http::navigation::Navigator;
use crate::models::config::ClientConfig;
use crate::session::SessionStore;

/// Envelope code the backend uses for an expired or missing token.
const CODE_UNAUTHORIZED: i32 = 401;

/// Single dispatch point for the admin REST API.
///
/// Attaches the bearer token, unwraps the response envelope and tears the
/// session down when the backend answers 401. Never retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    redirect_delay: Duration,
    redirect_pending: Arc<AtomicBool>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("login_path", &self.login_path)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if normalized != raw.trim().trim_end_matches('/') {
        log::warn!("Normalized base URL from '{raw}' to '{normalized}'");
    }
    normalized
}

impl HttpClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
            session,
            navigator,
            login_path: config.login_path.clone(),
            redirect_delay: config.redirect_delay(),
            redirect_pending: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Joins an endpoint path onto the base URL.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let request = self.client.get(self.build_url(path));
        self.execute(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.build_url(path)).json(body);
        self.execute(request).await
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<EnvelopeHead>(&body)
                .map(|head| head.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(self.http_failure(status, message));
        }

        let head: EnvelopeHead = serde_json::from_slice(&body)?;
        if head.code == CODE_UNAUTHORIZED {
            return Err(self.http_failure(StatusCode::UNAUTHORIZED, head.message));
        }
        if !is_success_code(head.code) {
            log::warn!("Request rejected with code {}: {}", head.code, head.message);
            return Err(ClientError::Business {
                code: head.code,
                message: head.message,
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }

    fn http_failure(&self, status: StatusCode, message: String) -> ClientError {
        match status {
            StatusCode::BAD_REQUEST => log::error!("Bad request parameters: {message}"),
            StatusCode::UNAUTHORIZED => {
                log::warn!("Session rejected by the server, signing out: {message}");
                self.handle_unauthorized();
                return ClientError::Unauthorized;
            }
            StatusCode::FORBIDDEN => log::error!("Access denied: {message}"),
            StatusCode::NOT_FOUND => log::error!("Requested resource not found: {message}"),
            StatusCode::CONFLICT => log::error!("Resource conflict: {message}"),
            StatusCode::LOCKED => log::error!("Resource is locked: {message}"),
            StatusCode::INTERNAL_SERVER_ERROR => log::error!("Server error: {message}"),
            other => log::error!("Request failed with status {other}: {message}"),
        }
        ClientError::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Clears every stored credential and sends the console back to login.
    fn handle_unauthorized(&self) {
        self.session.teardown();

        if self.navigator.current_path() == self.login_path {
            return;
        }
        if self.redirect_pending.swap(true, Ordering::AcqRel) {
            return;
        }

        if self.redirect_delay.is_zero() {
            self.navigator.navigate(&self.login_path);
            self.redirect_pending.store(false, Ordering::Release);
            return;
        }

        let navigator = self.navigator.clone();
        let login_path = self.login_path.clone();
        let delay = self.redirect_delay;
        let pending = self.redirect_pending.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if navigator.current_path() != login_path {
                navigator.navigate(&login_path);
            }
            pending.store(false, Ordering::Release);
        });
    }
}
