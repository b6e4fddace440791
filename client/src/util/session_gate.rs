//! Route gating on session presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` applies the same rule: once the persisted
//! session has been read, a missing token sends the user to `/login`. List
//! and inventory fetches check [`may_fetch`] so nothing is requested before
//! the gate has had its say.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

/// Path of the login route.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing route after login.
pub const HOME_ROUTE: &str = "/";

/// True when a protected route must send the user to `/login`.
pub fn should_redirect_to_login(session: &SessionStore) -> bool {
    session.is_loaded() && !session.has_session()
}

/// True when the login page should forward an authenticated user home.
pub fn should_leave_login(session: &SessionStore) -> bool {
    session.is_loaded() && session.has_session()
}

/// True when protected data may be requested.
pub fn may_fetch(session: &SessionStore) -> bool {
    session.is_loaded() && session.has_session()
}

/// Redirect to `/login` whenever the session is loaded and absent.
pub fn install_session_gate<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&session.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
