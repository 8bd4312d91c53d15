// src/auth.rs
//! Signed-in state: the current user plus the persisted bearer token

use anyhow::Result;
use tracing::{info, warn};

use crate::core::{ApiClient, TokenStore};
use crate::error::ClientError;
use crate::types::User;

pub struct AuthSession {
    client: ApiClient,
    tokens: TokenStore,
    user: Option<User>,
}

impl AuthSession {
    pub fn new(client: ApiClient, tokens: TokenStore) -> Self {
        Self {
            client,
            tokens,
            user: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Resolve the stored token into a user. A token the server rejects is
    /// discarded; without a stored token no request is made.
    pub async fn restore(&mut self) -> Result<Option<&User>> {
        let Some(token) = self.tokens.get().await? else {
            self.user = None;
            return Ok(None);
        };

        match self.client.get_me(&token).await {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                self.user = Some(user);
            }
            Err(e) => {
                warn!("Discarding stored token: {}", e);
                self.tokens.remove().await?;
                self.user = None;
            }
        }
        Ok(self.user.as_ref())
    }

    /// Validate `token` against the server and persist it. On failure the
    /// stored token is removed and the error is returned.
    pub async fn login(&mut self, token: &str) -> Result<&User> {
        match self.client.get_me(token).await {
            Ok(user) => {
                self.tokens.set(token).await?;
                info!("Signed in as {}", user.email);
                Ok(&*self.user.insert(user))
            }
            Err(e) => {
                self.tokens.remove().await?;
                self.user = None;
                Err(e.into())
            }
        }
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.tokens.remove().await?;
        self.user = None;
        info!("Signed out");
        Ok(())
    }

    /// Stored token, if any, for calls where authentication is optional
    pub async fn token(&self) -> Result<Option<String>> {
        self.tokens.get().await
    }

    pub async fn require_token(&self) -> Result<String> {
        match self.tokens.get().await? {
            Some(token) => Ok(token),
            None => Err(ClientError::NotAuthenticated.into()),
        }
    }
}
