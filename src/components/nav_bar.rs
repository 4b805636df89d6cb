//! Top navigation bar for authenticated screens.

use leptos::prelude::*;

use crate::state::session::{Session, SessionView};

/// Header with the product name, the signed-in identity, and sign-out.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let view_sig = expect_context::<RwSignal<SessionView>>();

    let identity = move || {
        view_sig
            .get()
            .user
            .map(|user| user.name.unwrap_or(user.email))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        // Dropping the token is enough; the route gate moves the visitor
        // back to the login screen on the resulting session transition.
        session.end();
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"ClassHub"</span>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__identity">{identity}</span>
            <button class="nav-bar__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
