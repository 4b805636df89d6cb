//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::credentials::CredentialStore;
use crate::state::session::{Session, SessionView};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Hydrates the credential store before anything derives authorization from
/// it, so the first render reflects a restored session, then provides the
/// session and its reactive view to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(CredentialStore::load());
    let view_sig = RwSignal::new(SessionView::of(&session));
    session.subscribe(move |authorized| {
        view_sig.update(|view| {
            view.authorized = authorized;
            if !authorized {
                view.user = None;
            }
        });
    });

    provide_context(session);
    provide_context(view_sig);

    view! {
        <Stylesheet id="leptos" href="/pkg/classhub.css"/>
        <Title text="ClassHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
