//! Centered card wrapping every auth form.

use leptos::prelude::*;

/// Card with a title, an optional reactive subtitle, and the form body as
/// children. The subtitle is a signal because the forgot/reset pages swap
/// it as their state changes.
#[component]
pub fn AuthCard(
    title: &'static str,
    #[prop(optional)] subtitle: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-card">
            <header class="auth-card__header">
                <h1 class="auth-card__title">{title}</h1>
                {subtitle.map(|subtitle| {
                    view! {
                        <p class="auth-card__subtitle">{move || subtitle.get()}</p>
                    }
                })}
            </header>
            {children()}
        </div>
    }
}
