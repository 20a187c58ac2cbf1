//! Login page — email-or-username + password sign-in form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::input_field::InputField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::LoginRequest;
use crate::state::form::{FieldSpec, FormState};
use crate::state::toast::ToastState;

fn email_or_username_rule(form: &FormState) -> Option<String> {
    if form.value("email_or_username").is_empty() {
        Some("Email or username is required".to_owned())
    } else {
        None
    }
}

fn password_rule(form: &FormState) -> Option<String> {
    if form.value("password").is_empty() {
        Some("Password is required".to_owned())
    } else {
        None
    }
}

// Login only checks presence; the server decides whether the credentials
// are an email or a username.
const SCHEMA: &[FieldSpec] = &[
    FieldSpec { name: "email_or_username", validate: email_or_username_rule },
    FieldSpec { name: "password", validate: password_rule },
];

/// The email-or-username field maps onto the wire `email` field; the
/// server matches it against both columns.
#[cfg(any(test, feature = "hydrate"))]
fn login_payload(form: &FormState) -> LoginRequest {
    LoginRequest {
        email: form.value("email_or_username").to_owned(),
        password: form.value("password").to_owned(),
    }
}

/// Login page. On success: persists the session record, shows the server's
/// message, and navigates to the dashboard after a short delay so the
/// toast is visible.
#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(FormState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = form.try_update(|f| f.try_begin_submit(SCHEMA)).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::toast::{Severity, show_toast};
            use crate::util::schedule;
            use crate::util::session::{self, SessionRecord};

            let payload = login_payload(&form.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&payload).await {
                    Ok(resp) => {
                        session::save_session(&SessionRecord {
                            token: resp.token,
                            user: resp.user,
                        });
                        show_toast(toasts, resp.message, Severity::Success);
                        schedule::after(schedule::NAVIGATE_DELAY_MS, move || {
                            navigate("/dashboard", NavigateOptions::default());
                        });
                    }
                    Err(message) => show_toast(toasts, message, Severity::Error),
                }
                form.try_update(FormState::finish_submit);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <AuthCard
                title="Sign In"
                subtitle=Signal::derive(|| "Welcome back to your account".to_owned())
            >
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="Email or Username"
                        name="email_or_username"
                        placeholder="your@email.com or username"
                        form=form
                    />
                    <InputField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Enter your password"
                        form=form
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || form.get().submitting
                    >
                        {move || if form.get().submitting { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <a class="auth-card__link" href="/forgot-password">
                        "Forgot your password?"
                    </a>
                    <p>
                        "Don't have an account? "
                        <a class="auth-card__link" href="/signup">"Sign up"</a>
                    </p>
                </div>
            </AuthCard>
        </div>
    }
}
