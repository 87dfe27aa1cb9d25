use docflow_auth::SessionToken;

/// The current user's session as the dashboard sees it.
///
/// The token is read at call time and never mutated here; refreshing it is
/// the session layer's job. When the token changes the owner rebuilds
/// whatever holds a [Session] (the relay reconnects with the new socket url).
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    /// a session with no authenticated user
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn authenticated(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }
}
