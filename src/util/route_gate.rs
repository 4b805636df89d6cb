//! Route gating on session authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route-level page applies the same decision: unauthorized visitors
//! are sent to the login screen, signed-in visitors are kept away from the
//! entry screens. Pages run the decision inside a reactive effect over the
//! session view, so it is re-evaluated on every session transition as well
//! as on navigation.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionView;

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";
/// Path of the registration screen.
pub const REGISTER_PATH: &str = "/register";
/// Default protected path, used as the post-login landing route.
pub const HOME_PATH: &str = "/";

/// Where to redirect a visitor at `path`, if anywhere.
///
/// Entry screens (login/registration) are served only to unauthorized
/// visitors; every other path is protected and served only to authorized
/// ones.
#[must_use]
pub fn redirect_target(authorized: bool, path: &str) -> Option<&'static str> {
    let entry_screen = matches!(path, LOGIN_PATH | REGISTER_PATH);
    match (authorized, entry_screen) {
        (true, true) => Some(HOME_PATH),
        (false, false) => Some(LOGIN_PATH),
        _ => None,
    }
}

/// Re-apply [`redirect_target`] for `path` whenever the session view changes.
pub fn install_route_gate<F>(view: RwSignal<SessionView>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(view.get().authorized, path) {
            navigate(target, NavigateOptions::default());
        }
    });
}
