//! Not-found page for unmatched routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// 404 view with a way back to the login page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__lead">"Page not found"</p>
            <p class="not-found-page__detail">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <button
                class="btn btn--primary"
                on:click=move |_| navigate("/login", NavigateOptions::default())
            >
                "Back to Login"
            </button>
        </div>
    }
}
