//! Role-gating state machine for protected route subtrees.
//!
//! The routing layer feeds this machine events (session snapshot arrived,
//! role-wait timer fired) and renders whatever the resulting state dictates.
//! The backend may deliver identity and role in separate steps, so a bare
//! identity gets one bounded wait window for the role to appear before the
//! caller is sent back to sign-in. Every denial redirects to sign-in, never
//! to the caller's own dashboard; that is deliberate policy.

use std::time::Duration;

use crate::models::Role;

/// How long a bare identity may wait for its role before being denied.
pub const ROLE_WAIT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Session still loading from storage.
    Init,
    /// Loading finished with no identity. Terminal.
    NoIdentity,
    /// Identity present, role not yet; the wait window is open.
    WaitingForRole,
    /// Wait window elapsed with the role still absent. Terminal.
    RoleTimeout,
    /// Role present but not the one this subtree requires. Terminal.
    RoleMismatch,
    /// Role present and matching. Terminal.
    Granted,
}

/// What the routing layer should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Pending,
    Redirect,
    Grant,
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    required: Role,
    state: GuardState,
    redirected: bool,
}

impl RouteGuard {
    pub fn new(required: Role) -> Self {
        Self {
            required,
            state: GuardState::Init,
            redirected: false,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn outcome(&self) -> GuardOutcome {
        match self.state {
            GuardState::Init | GuardState::WaitingForRole => GuardOutcome::Pending,
            GuardState::NoIdentity | GuardState::RoleTimeout | GuardState::RoleMismatch => {
                GuardOutcome::Redirect
            }
            GuardState::Granted => GuardOutcome::Grant,
        }
    }

    fn terminal(&self) -> bool {
        matches!(
            self.state,
            GuardState::NoIdentity
                | GuardState::RoleTimeout
                | GuardState::RoleMismatch
                | GuardState::Granted
        )
    }

    /// Feed the current session snapshot. Safe to call on every re-render;
    /// terminal states never move again.
    pub fn on_session(
        &mut self,
        loading: bool,
        identity: Option<&str>,
        role: Option<Role>,
    ) -> GuardState {
        if self.terminal() {
            return self.state;
        }
        self.state = if loading {
            GuardState::Init
        } else if identity.is_none() {
            GuardState::NoIdentity
        } else {
            match role {
                None => GuardState::WaitingForRole,
                Some(role) if role == self.required => GuardState::Granted,
                Some(_) => GuardState::RoleMismatch,
            }
        };
        self.state
    }

    /// The single role-wait timer fired. Only meaningful while waiting.
    pub fn on_timeout(&mut self) -> GuardState {
        if self.state == GuardState::WaitingForRole {
            self.state = GuardState::RoleTimeout;
        }
        self.state
    }

    /// True exactly once per guard when a denial state is reached, so the
    /// caller issues a single redirect and no loop.
    pub fn take_redirect(&mut self) -> bool {
        if self.outcome() == GuardOutcome::Redirect && !self.redirected {
            self.redirected = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_stays_pending_while_loading() {
        let mut guard = RouteGuard::new(Role::Admin);
        assert_eq!(guard.on_session(true, None, None), GuardState::Init);
        assert_eq!(guard.outcome(), GuardOutcome::Pending);
    }

    #[test]
    fn test_no_identity_redirects() {
        let mut guard = RouteGuard::new(Role::Admin);
        assert_eq!(guard.on_session(false, None, None), GuardState::NoIdentity);
        assert_eq!(guard.outcome(), GuardOutcome::Redirect);
    }

    #[test]
    fn test_role_mismatch_always_denied_never_pending() {
        // admin required, member supplied: denied, not granted, not pending
        let mut guard = RouteGuard::new(Role::Admin);
        let state = guard.on_session(false, Some("a@x.com"), Some(Role::Member));
        assert_eq!(state, GuardState::RoleMismatch);
        assert_eq!(guard.outcome(), GuardOutcome::Redirect);

        // terminal: a later matching snapshot cannot flip it to granted
        let state = guard.on_session(false, Some("a@x.com"), Some(Role::Admin));
        assert_eq!(state, GuardState::RoleMismatch);
    }

    #[test]
    fn test_matching_role_grants() {
        let mut guard = RouteGuard::new(Role::Member);
        let state = guard.on_session(false, Some("m@x.com"), Some(Role::Member));
        assert_eq!(state, GuardState::Granted);
        assert_eq!(guard.outcome(), GuardOutcome::Grant);
    }

    #[test]
    fn test_role_arriving_within_wait_window_grants() {
        let mut guard = RouteGuard::new(Role::User);
        assert_eq!(
            guard.on_session(false, Some("u@x.com"), None),
            GuardState::WaitingForRole
        );
        assert_eq!(guard.outcome(), GuardOutcome::Pending);

        assert_eq!(
            guard.on_session(false, Some("u@x.com"), Some(Role::User)),
            GuardState::Granted
        );
    }

    #[test]
    fn test_timeout_with_absent_role_redirects_exactly_once() {
        let mut guard = RouteGuard::new(Role::Admin);
        guard.on_session(false, Some("a@x.com"), None);
        assert_eq!(guard.on_timeout(), GuardState::RoleTimeout);

        assert!(guard.take_redirect());
        // No repeated redirects, even if events keep arriving.
        assert!(!guard.take_redirect());
        guard.on_session(false, Some("a@x.com"), None);
        guard.on_timeout();
        assert!(!guard.take_redirect());
    }

    #[test]
    fn test_timeout_after_grant_is_ignored() {
        let mut guard = RouteGuard::new(Role::Admin);
        guard.on_session(false, Some("a@x.com"), Some(Role::Admin));
        assert_eq!(guard.on_timeout(), GuardState::Granted);
        assert!(!guard.take_redirect());
    }

    #[test]
    fn test_timeout_before_session_loads_is_ignored() {
        let mut guard = RouteGuard::new(Role::Admin);
        assert_eq!(guard.on_timeout(), GuardState::Init);
        assert_eq!(guard.outcome(), GuardOutcome::Pending);
    }
}
