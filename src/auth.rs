//! The authentication context seen by the dashboard.

use crate::models::user::User;

pub trait AuthContext {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<&User>;

    fn logout(&mut self);
}

/// A local session for the configured user. There is no credential check;
/// signing in happens outside this crate.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl AuthContext for Session {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("signed out {}", user.email);
        }
    }
}
