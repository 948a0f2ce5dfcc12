//! Auth Context
//!
//! Signal-backed owner of the session, provided at the App root. All
//! session mutation goes through the operations here; views read through
//! the accessors and never touch the write signals directly.

use leptos::prelude::*;

use crate::api;
use crate::models::User;
use crate::session::{self, LoginOutcome, Session};
use crate::storage;
use crate::{console_error, console_log};

/// App-wide auth state provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Current user, tracked reactively.
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Whether the boot-time restore is still running.
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    /// Snapshot of the session for guard decisions.
    pub fn session(&self) -> Session {
        Session {
            user: self.user.get(),
            loading: self.loading.get(),
        }
    }

    /// Silent restore on boot: only attempted when a token is stored; any
    /// failure clears the token and leaves the session anonymous. Always
    /// ends the loading phase.
    pub async fn restore_session(&self) {
        if storage::token().is_some() {
            match session::evaluate_restore(api::auth::me().await) {
                Some(user) => self.set_user.set(Some(user)),
                None => {
                    console_log("session restore failed, clearing stored token");
                    storage::clear_token();
                }
            }
        }
        self.set_loading.set(false);
    }

    /// Log in and persist the returned token. Never returns an error; the
    /// caller shows the failure message and lets the user retry.
    pub async fn login(&self, credentials: api::auth::Credentials) -> LoginOutcome {
        let outcome = session::evaluate_login(api::auth::login(&credentials).await);
        if let LoginOutcome::Success { user, token } = &outcome {
            storage::save_token(token);
            self.set_user.set(Some(user.clone()));
        }
        outcome
    }

    /// Apply a confirmed profile edit to the in-memory user.
    pub fn apply_profile(&self, name: String, email: String) {
        self.set_user.update(|user| {
            if let Some(user) = user {
                user.name = name;
                user.email = email;
            }
        });
    }

    /// Server-side logout is best effort; local state is cleared no matter
    /// what.
    pub async fn logout(&self) {
        if let Err(err) = api::auth::logout().await {
            console_error(&format!("logout request failed: {err}"));
        }
        storage::clear_token();
        self.set_user.set(None);
    }
}

/// Get the auth context from any component below the App root.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
