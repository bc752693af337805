//! Auth Service
//!
//! One attempt per operation, no retries. Server messages are passed through
//! unchanged for display.

use serde::de::IgnoredAny;
use tracing::{debug, info};

use super::TokenStore;
use crate::api::{ApiClient, ApiError};
use crate::models::{Credentials, TokenResponse, User};
use crate::route::{Navigate, Route};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    tokens: TokenStore,
}

impl AuthService {
    pub fn new(api: ApiClient, tokens: TokenStore) -> Self {
        Self { api, tokens }
    }

    /// Register an account. Does not sign the session in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user = self
            .api
            .post::<User, _>("/api/auth/signup", &Credentials { email, password })
            .await?
            .ok_or_else(|| ApiError::new("No user received"))?;

        info!(email = %user.email, "account created");
        Ok(user)
    }

    /// Exchange credentials for a token and store it.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .api
            .post::<TokenResponse, _>("/api/auth/signin", &Credentials { email, password })
            .await?;

        let token = response
            .and_then(|r| r.access_token)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::new("No token received"))?;

        self.tokens.set(&token);
        info!("signed in");
        Ok(())
    }

    /// Tell the server (best-effort), drop the token, show the sign-in view.
    pub async fn sign_out(&self, navigator: &impl Navigate) {
        if self.tokens.is_authenticated() {
            if let Err(e) = self.api.post_empty::<IgnoredAny>("/api/auth/signout").await {
                debug!(error = %e, "signout notification failed, clearing anyway");
            }
        }

        self.tokens.clear();
        info!("signed out");
        navigator.navigate(Route::sign_in());
    }

    pub fn check_auth(&self) -> bool {
        self.tokens.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::api::Method;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    fn service() -> (AuthService, Arc<ScriptedTransport>, TokenStore) {
        let transport = Arc::new(ScriptedTransport::new());
        let tokens = TokenStore::in_memory();
        let api = ApiClient::new("http://api.test", transport.clone(), tokens.clone());
        (AuthService::new(api, tokens.clone()), transport, tokens)
    }

    #[tokio::test]
    async fn test_sign_up_returns_user_without_signing_in() {
        let (auth, transport, tokens) = service();
        transport.respond(201, r#"{"id": "u1", "email": "ada@example.com", "created_at": "2024-05-01T09:30:00"}"#);

        let user = auth.sign_up("ada@example.com", "password1").await.unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(!tokens.is_authenticated());

        let sent = transport.requests().remove(0);
        assert_eq!(sent.url, "http://api.test/api/auth/signup");
        assert_eq!(sent.body.as_deref(), Some(r#"{"email":"ada@example.com","password":"password1"}"#));
    }

    #[tokio::test]
    async fn test_sign_up_conflict() {
        let (auth, transport, _) = service();
        transport.respond(409, r#"{"detail": "Email already registered"}"#);

        let err = auth.sign_up("ada@example.com", "password1").await.unwrap_err();
        assert_eq!(err.detail, "Email already registered");
    }

    #[tokio::test]
    async fn test_sign_in_stores_token() {
        let (auth, transport, tokens) = service();
        transport.respond(200, r#"{"access_token": "jwt-123", "token_type": "bearer"}"#);

        auth.sign_in("ada@example.com", "password1").await.unwrap();
        assert!(auth.check_auth());
        assert_eq!(tokens.get().as_deref(), Some("jwt-123"));
    }

    #[tokio::test]
    async fn test_sign_in_failure_keeps_store() {
        let (auth, transport, tokens) = service();
        tokens.set("previous");
        transport.respond(401, r#"{"detail": "Invalid email or password"}"#);

        let err = auth.sign_in("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.detail, "Invalid email or password");
        assert_eq!(tokens.get().as_deref(), Some("previous"));

        transport.fail("offline");
        assert!(auth.sign_in("ada@example.com", "x").await.is_err());
        assert_eq!(tokens.get().as_deref(), Some("previous"));
    }

    #[tokio::test]
    async fn test_sign_in_without_token() {
        let (auth, transport, _) = service();
        transport.respond(200, r#"{"token_type": "bearer"}"#);

        let err = auth.sign_in("ada@example.com", "password1").await.unwrap_err();
        assert_eq!(err.detail, "No token received");
        assert!(!auth.check_auth());
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_server_fails() {
        let (auth, transport, tokens) = service();
        tokens.set("jwt-123");
        transport.fail("offline");
        let navigator = RecordingNavigator::default();

        auth.sign_out(&navigator).await;

        assert!(!auth.check_auth());
        assert_eq!(*navigator.visited.borrow(), vec![Route::sign_in()]);
        let sent = transport.requests().remove(0);
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/api/auth/signout");
        assert_eq!(sent.bearer.as_deref(), Some("jwt-123"));
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn test_sign_out_when_signed_out_skips_server() {
        let (auth, transport, _) = service();
        let navigator = RecordingNavigator::default();

        auth.sign_out(&navigator).await;

        assert!(transport.requests().is_empty());
        assert_eq!(*navigator.visited.borrow(), vec![Route::sign_in()]);
    }
}
