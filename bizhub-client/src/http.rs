//! HTTP client for network-based API calls
//!
//! Single egress point for every request. Two cross-cutting policies live
//! here and nowhere else: bearer-token attachment on the way out, and
//! session-expiry handling on the way back.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::{ApiResponse, ClientConfig, ClientError, ClientResult};
use crate::session::{ClientEvent, Session, SessionStore};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// HTTP client for making requests to the BizHub API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    events: broadcast::Sender<ClientEvent>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration and a session store.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            events,
        }
    }

    /// Subscribe to client events (session expiry).
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Current session snapshot, if one is stored.
    pub fn session(&self) -> Option<Session> {
        self.session.load()
    }

    /// Whether a session is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.session.load().is_some()
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token if a session is stored; otherwise the
    /// request goes out unauthenticated and the server decides.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.load() {
            Some(session) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", session.token),
            ),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        self.parse_data(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        self.parse_data(response).await
    }

    /// Make a POST request with JSON body, discarding any response data
    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        self.parse_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        self.parse_data(response).await
    }

    /// Make a DELETE request. Delete responses carry no payload, so only
    /// the envelope's success flag is checked.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await?;
        self.parse_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Inspect the response exactly once: 401 triggers the global expiry
    /// side effect; other error statuses map to the error taxonomy with
    /// the envelope message when one is present.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::FORBIDDEN => ClientError::Forbidden(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                _ => ClientError::Internal(message),
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "Request rejected".to_string());
            return Err(ClientError::Api(message));
        }
        Ok(envelope)
    }

    async fn parse_data<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        self.parse_envelope(response)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    /// Global expiry handling: clear both halves of the stored session and
    /// notify subscribers. Fires for any endpoint, unconditionally.
    fn expire_session(&self) {
        if let Err(err) = self.session.clear() {
            tracing::warn!(error = %err, "Failed to clear expired session");
        }
        tracing::info!("Session rejected by server, stored credentials cleared");
        // No subscriber is fine: the host may not be watching yet.
        let _ = self.events.send(ClientEvent::SessionExpired);
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
