//! Protected landing page showing the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default protected route. On load it validates the stored
//! credential by fetching the account summary; an auth rejection ends the
//! session, and the route gate returns the visitor to the login screen.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::auth_api;
use crate::net::types::UserSummary;
use crate::state::session::{Session, SessionView};
use crate::util::route_gate;

/// Display name for the account card, falling back to the email.
fn display_name(user: &UserSummary) -> &str {
    user.name.as_deref().unwrap_or(&user.email)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let view_sig = expect_context::<RwSignal<SessionView>>();
    route_gate::install_route_gate(view_sig, route_gate::HOME_PATH, use_navigate());

    let load_error = RwSignal::new(None::<String>);

    // Load the account summary once per authorized session; a login that
    // already delivered the summary skips the fetch.
    let fetch_session = session.clone();
    Effect::new(move || {
        let view = view_sig.get();
        if !view.authorized || view.user.is_some() {
            return;
        }
        let session = fetch_session.clone();
        leptos::task::spawn_local(async move {
            match auth_api::fetch_me(&session.credentials()).await {
                Ok(user) => view_sig.update(|v| v.user = Some(user)),
                Err(err) => {
                    leptos::logging::warn!("account fetch failed: {err}");
                    session.note_rejection(&err);
                    load_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="home-page">
            <NavBar/>
            <main class="home-page__content">
                {move || match view_sig.get().user {
                    Some(user) => {
                        let welcome = format!("Welcome, {}", display_name(&user));
                        view! {
                            <section class="account-card">
                                <h2>{welcome}</h2>
                                <p class="account-card__email">{user.email}</p>
                            </section>
                        }
                            .into_any()
                    }
                    None => view! {
                        <p class="home-page__loading">
                            {move || {
                                load_error.get().unwrap_or_else(|| "Loading your account...".to_owned())
                            }}
                        </p>
                    }
                        .into_any(),
                }}
            </main>
        </div>
    }
}
