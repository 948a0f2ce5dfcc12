//! Session State Machine
//!
//! Pure transitions for the client-held identity: who is logged in, whether
//! the boot-time restore is still running, and what a route guard should do
//! about it. The async glue lives in `context.rs`; everything here is plain
//! data so it can be exercised directly in tests.

use crate::api::ApiError;
use crate::models::{LoginResponse, MeResponse, Role, User};

/// Client-held representation of the authenticated identity.
///
/// `loading` is true from boot until the silent restore finishes; route
/// guards must not render protected content while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    pub fn booting() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_leader(&self) -> bool {
        self.role() == Some(Role::Leader)
    }

    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }
}

/// Route guard decision for a session against a route's allowed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Restore still running: render nothing (or a spinner), never the
    /// protected children.
    Loading,
    Granted,
    /// No user: send to the login view.
    NotLoggedIn,
    /// Logged in with the wrong role: send to the unauthorized view.
    Forbidden,
}

pub fn check_access(session: &Session, allowed: &[Role]) -> Access {
    if session.loading {
        return Access::Loading;
    }
    match &session.user {
        None => Access::NotLoggedIn,
        Some(user) if allowed.contains(&user.role) => Access::Granted,
        Some(_) => Access::Forbidden,
    }
}

/// Outcome handed back to the login form. Never an error: transport and
/// business failures both collapse into `Failure` with a displayable
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success { user: User, token: String },
    Failure(String),
}

const LOGIN_FALLBACK: &str = "Login failed";

/// Interpret the login endpoint's result. Success requires the `success`
/// flag plus both a token and a user in the body; anything else is a
/// failure with the server's message when one was provided.
pub fn evaluate_login(result: Result<LoginResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(resp) if resp.success => match (resp.token, resp.user) {
            (Some(token), Some(user)) => LoginOutcome::Success { user, token },
            _ => LoginOutcome::Failure(
                resp.message.unwrap_or_else(|| LOGIN_FALLBACK.to_string()),
            ),
        },
        Ok(resp) => {
            LoginOutcome::Failure(resp.message.unwrap_or_else(|| LOGIN_FALLBACK.to_string()))
        }
        Err(err) => LoginOutcome::Failure(err.user_message()),
    }
}

/// Interpret the `/auth/me` result during silent restore. `None` means the
/// stored token is stale and must be cleared; restore failures are an
/// expected "not logged in", never surfaced to the user.
pub fn evaluate_restore(result: Result<MeResponse, ApiError>) -> Option<User> {
    match result {
        Ok(resp) if resp.success => resp.user,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "Avery".into(),
            email: "avery@example.com".into(),
            role,
        }
    }

    fn session_with(role: Role) -> Session {
        Session {
            user: Some(user(role)),
            loading: false,
        }
    }

    #[test]
    fn guard_blocks_while_restore_is_running() {
        let booting = Session::booting();
        assert_eq!(check_access(&booting, &[Role::Employee]), Access::Loading);
    }

    #[test]
    fn guard_redirects_anonymous_users_to_login() {
        let anon = Session {
            user: None,
            loading: false,
        };
        assert_eq!(check_access(&anon, &[Role::Admin]), Access::NotLoggedIn);
    }

    #[test]
    fn guard_rejects_wrong_role() {
        let employee = session_with(Role::Employee);
        assert_eq!(check_access(&employee, &[Role::Admin]), Access::Forbidden);
        assert_eq!(
            check_access(&employee, &[Role::Admin, Role::Leader]),
            Access::Forbidden
        );
    }

    #[test]
    fn guard_grants_matching_role() {
        let admin = session_with(Role::Admin);
        assert_eq!(check_access(&admin, &[Role::Admin]), Access::Granted);
        let leader = session_with(Role::Leader);
        assert_eq!(
            check_access(&leader, &[Role::Admin, Role::Leader]),
            Access::Granted
        );
    }

    #[test]
    fn valid_admin_login_succeeds_with_token() {
        let outcome = evaluate_login(Ok(LoginResponse {
            success: true,
            message: None,
            token: Some("jwt".into()),
            user: Some(user(Role::Admin)),
        }));
        match outcome {
            LoginOutcome::Success { user, token } => {
                assert_eq!(user.role, Role::Admin);
                assert_eq!(token, "jwt");
            }
            LoginOutcome::Failure(msg) => panic!("unexpected failure: {msg}"),
        }
    }

    #[test]
    fn rejected_credentials_keep_session_anonymous() {
        let mut session = Session {
            user: None,
            loading: false,
        };
        let outcome = evaluate_login(Err(ApiError::Server {
            status: 401,
            message: "Invalid credentials".into(),
        }));
        assert_eq!(
            outcome,
            LoginOutcome::Failure("Invalid credentials".into())
        );
        // the caller only mutates the session on Success
        if let LoginOutcome::Success { user, .. } = outcome {
            session.user = Some(user);
        }
        assert!(session.user.is_none());
    }

    #[test]
    fn success_flag_without_token_is_a_failure() {
        let outcome = evaluate_login(Ok(LoginResponse {
            success: true,
            message: None,
            token: None,
            user: Some(user(Role::Employee)),
        }));
        assert!(matches!(outcome, LoginOutcome::Failure(_)));
    }

    #[test]
    fn network_failure_uses_generic_message() {
        let outcome = evaluate_login(Err(ApiError::Network("connection refused".into())));
        assert!(matches!(outcome, LoginOutcome::Failure(_)));
    }

    #[test]
    fn restore_fails_closed() {
        assert!(evaluate_restore(Err(ApiError::Network("offline".into()))).is_none());
        assert!(evaluate_restore(Ok(MeResponse {
            success: false,
            user: None,
        }))
        .is_none());
        let restored = evaluate_restore(Ok(MeResponse {
            success: true,
            user: Some(user(Role::Leader)),
        }));
        assert_eq!(restored.map(|u| u.role), Some(Role::Leader));
    }
}
