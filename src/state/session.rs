//! Session state for the current navigation, driven by discrete events.
//!
//! DESIGN
//! ======
//! The guard and the login/logout flows emit events; this module owns the
//! only transition function. Pages never mutate fields directly, so the
//! machine is testable without a rendering surface.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::failure::AuthFailure;
use crate::net::types::Session;

/// Where the current navigation stands in the guard lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No check has run for this navigation yet.
    #[default]
    Unchecked,
    /// Probe/verify pair in flight.
    Checking,
    /// Verification succeeded; the guarded subtree may render.
    Authorized,
    /// Verification failed or no cookie; the login detour supersedes.
    Redirecting,
}

/// Session state attached to the routed subtree.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub session: Option<Session>,
    pub failure: Option<AuthFailure>,
}

/// Discrete transitions applied by the guard and the auth flows.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// A guarded navigation began its probe/verify pair.
    CheckStarted,
    /// The identity check verified this session.
    CheckSucceeded(Session),
    /// The check was denied or failed; the login detour follows.
    CheckFailed(AuthFailure),
    /// Credentials were exchanged; the next guarded navigation re-verifies.
    LoginSucceeded,
    /// The user logged out; locally always treated as effective.
    LoggedOut,
}

impl SessionState {
    /// Apply one event. Stale values never survive a transition: a failed
    /// check drops the session, a fresh check drops the prior failure.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CheckStarted => {
                self.phase = SessionPhase::Checking;
                self.failure = None;
            }
            SessionEvent::CheckSucceeded(session) => {
                self.phase = SessionPhase::Authorized;
                self.session = Some(session);
                self.failure = None;
            }
            SessionEvent::CheckFailed(failure) => {
                self.phase = SessionPhase::Redirecting;
                self.session = None;
                self.failure = Some(failure);
            }
            SessionEvent::LoginSucceeded => {
                self.phase = SessionPhase::Unchecked;
                self.failure = None;
            }
            SessionEvent::LoggedOut => {
                self.phase = SessionPhase::Unchecked;
                self.session = None;
                self.failure = None;
            }
        }
    }

    /// True once the guard has authorized the current navigation.
    pub fn is_authorized(&self) -> bool {
        self.phase == SessionPhase::Authorized && self.session.is_some()
    }
}
