//! Session handling: login, signup and logout.

use scribe_core::form::FormBuffer;
use scribe_core::session::Session;

use super::BlogApp;

impl BlogApp {
    /// Submits the login form.
    ///
    /// On success the token becomes the default `Authorization` header, the
    /// email becomes the active user and the form is cleared. On failure
    /// nothing changes.
    pub async fn login(&mut self) {
        match self.api.login(&self.login_form).await {
            Ok(token) => {
                self.api.set_bearer_token(Some(&token)).await;
                let email = std::mem::take(&mut self.login_form.email);
                tracing::info!("[Session] Logged in as {}", email);
                self.session = Some(Session::new(email));
                self.login_form.clear();
            }
            Err(e) => tracing::error!("[Session] Error logging in: {}", e),
        }
    }

    /// Submits the signup form. Clears it once the request went through,
    /// without logging the user in.
    pub async fn signup(&mut self) {
        match self.api.register(&self.signup_form).await {
            Ok(()) => {
                tracing::info!("[Session] Signup submitted for {}", self.signup_form.email);
                self.signup_form.clear();
            }
            Err(e) => tracing::error!("[Session] Error signing up: {}", e),
        }
    }

    /// Forgets the active user and blanks the auth header.
    pub async fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("[Session] Logged out {}", session.email);
        }
        self.api.set_bearer_token(None).await;
    }
}
