//! Signed-in user context.

use serde::{Deserialize, Serialize};
use tracing::info;

/// User returned by the accounts endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<String>,
}

/// Body of a successful sign-in or sign-up response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Authentication state, held in memory and passed to whatever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    auth: Option<AuthResponse>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replace any current session with `auth`.
    pub fn sign_in(&mut self, auth: AuthResponse) {
        info!(username = %auth.user.username, "signed in");
        self.auth = Some(auth);
    }

    /// Drop the current session. No-op when anonymous.
    pub fn sign_out(&mut self) {
        if let Some(auth) = self.auth.take() {
            info!(username = %auth.user.username, "signed out");
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.user.username.as_str())
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.auth.as_ref().map(|a| &a.user)
    }

    /// Value for the `Authorization` header of authenticated requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.auth.as_ref().map(|a| format!("Token {}", a.token))
    }
}
