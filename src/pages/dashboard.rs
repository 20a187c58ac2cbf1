//! Dashboard page — session-gated landing view with user info and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::install_unauth_redirect;
use crate::util::session;

/// Dashboard page. Renders the stored user record verbatim; with no
/// session record present it renders nothing and redirects to `/login`
/// without touching user fields.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();

    install_unauth_redirect(navigate.clone());

    let Some(record) = session::load_session() else {
        return ().into_any();
    };
    let user = record.user;

    let on_logout = move |_| {
        session::clear_session();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__card">
                <header class="dashboard-page__header">
                    <h1>{format!("Welcome, {}!", user.username)}</h1>
                    <p>"You are successfully logged in"</p>
                </header>

                <section class="dashboard-page__info">
                    <h2>"User Information"</h2>
                    <div class="dashboard-page__row">
                        <span>"Username:"</span>
                        <span>{user.username.clone()}</span>
                    </div>
                    <div class="dashboard-page__row">
                        <span>"Email:"</span>
                        <span>{user.email.clone()}</span>
                    </div>
                    <div class="dashboard-page__row">
                        <span>"User ID:"</span>
                        <span>{user.id.to_string()}</span>
                    </div>
                </section>

                <button class="btn btn--secondary" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
    .into_any()
}
