//! Auth gateway

use shared::client::{LoginRequest, LoginResponse, RegisterRequest};

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::session::Session;

/// Operations over the /auth endpoints
pub struct AuthApi<'a> {
    pub(crate) client: &'a HttpClient,
}

impl AuthApi<'_> {
    /// Login with email and password. On success the token and business
    /// profile are saved to the session store together.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let data: LoginResponse = self.client.post("/auth/login", request).await?;
        let session = Session {
            token: data.token.clone(),
            business: data.business.clone(),
        };
        self.client.store().save(&session)?;
        tracing::info!(business = %session.business.name, "Logged in");
        Ok(data)
    }

    /// Register a new business account. Registration does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.client.post_unit("/auth/register", request).await
    }

    /// Logout: purely local, clears the stored session. The API holds no
    /// server-side session state to invalidate.
    pub fn logout(&self) -> ClientResult<()> {
        self.client.store().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
