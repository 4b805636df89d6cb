//! Login page: credentials form that establishes a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates input locally, performs the login exchange, and
//! commits the issued token into the session; the route gate then moves the
//! visitor to the protected landing page. One submission is in flight at a
//! time, and a response landing after the view is torn down is ignored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::auth_api;
use crate::net::types::Credentials;
use crate::state::session::{Session, SessionView};
use crate::util::route_gate::{self, REGISTER_PATH};
use crate::util::validate::{self, FieldErrors};

/// Build the login payload from raw form input.
fn credentials_from_input(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.trim().to_owned(),
        password: password.to_owned(),
    }
}

/// Input type for a password field with a visibility toggle.
fn password_input_type(show: bool) -> &'static str {
    if show { "text" } else { "password" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let view_sig = expect_context::<RwSignal<SessionView>>();
    route_gate::install_route_gate(view_sig, route_gate::LOGIN_PATH, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let field_errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);

    // Ignore a response that lands after this view is torn down.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        server_error.set(None);

        let credentials = credentials_from_input(&email.get(), &password.get());
        let errors = validate::validate_login(&credentials.email, &credentials.password);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        busy.set(true);

        let session = session.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match auth_api::login(&session.credentials(), &credentials).await {
                Ok(success) => {
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    view_sig.update(|v| v.user = success.user.clone());
                    session.commit(&success.token);
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    if alive.load(Ordering::Relaxed) {
                        server_error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ClassHub"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=field_errors field="email"/>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=field_errors field="password"/>
                    <button
                        class="login-form__toggle"
                        type="button"
                        on:click=move |_| show_password.update(|show| *show = !*show)
                    >
                        {move || if show_password.get() { "Hide password" } else { "Show password" }}
                    </button>
                    <Show when=move || server_error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || server_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <a class="login-link" href=REGISTER_PATH>
                    "No account yet? Register"
                </a>
            </div>
        </div>
    }
}
