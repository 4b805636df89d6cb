//! Registration page: profile form that creates an account and a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the login flow with the registration payload: local validation,
//! the registration exchange, then the session commit. The role select
//! carries the platform role to the server alongside the credentials.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::auth_api;
use crate::net::types::{RegisterProfile, Role};
use crate::state::session::{Session, SessionView};
use crate::util::route_gate::{self, LOGIN_PATH};
use crate::util::validate::{self, FieldErrors};

/// Build the registration payload from raw form input.
fn profile_from_input(name: &str, email: &str, password: &str, role: Role) -> RegisterProfile {
    RegisterProfile {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        role,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let view_sig = expect_context::<RwSignal<SessionView>>();
    route_gate::install_route_gate(view_sig, route_gate::REGISTER_PATH, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
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

        let profile = profile_from_input(&name.get(), &email.get(), &password.get(), role.get());
        let errors = validate::validate_registration(
            &profile.name,
            &profile.email,
            &profile.password,
            &confirm_password.get(),
        );
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        busy.set(true);

        let session = session.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            match auth_api::register(&session.credentials(), &profile).await {
                Ok(success) => {
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    view_sig.update(|v| v.user = success.user.clone());
                    session.commit(&success.token);
                }
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
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
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=field_errors field="name"/>
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
                            type="password"
                            placeholder="Choose a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=field_errors field="password"/>
                    <label class="login-form__label">
                        "Confirm password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Repeat the password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=field_errors field="confirmPassword"/>
                    <label class="login-form__label">
                        "Role"
                        <select
                            class="login-input"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| role.set(Role::from_select(&event_target_value(&ev)))
                        >
                            <option value="student">"Student"</option>
                            <option value="teacher">"Teacher"</option>
                        </select>
                    </label>
                    <Show when=move || server_error.get().is_some()>
                        <p class="login-message login-message--error">
                            {move || server_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <a class="login-link" href=LOGIN_PATH>
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}
