//! Signup page — username, email, and password with confirmation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::input_field::InputField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SignupRequest;
use crate::state::form::{FieldSpec, FormState};
use crate::state::toast::ToastState;
use crate::util::validators;

fn username_rule(form: &FormState) -> Option<String> {
    validators::username_error(form.value("username")).map(str::to_owned)
}

fn email_rule(form: &FormState) -> Option<String> {
    validators::email_error(form.value("email")).map(str::to_owned)
}

fn password_rule(form: &FormState) -> Option<String> {
    validators::password_error(form.value("password")).map(str::to_owned)
}

fn confirm_rule(form: &FormState) -> Option<String> {
    validators::confirm_password_error(form.value("password"), form.value("confirm_password"))
        .map(str::to_owned)
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec { name: "username", validate: username_rule },
    FieldSpec { name: "email", validate: email_rule },
    FieldSpec { name: "password", validate: password_rule },
    FieldSpec { name: "confirm_password", validate: confirm_rule },
];

/// The confirmation field is client-side only and never leaves the form.
#[cfg(any(test, feature = "hydrate"))]
fn signup_payload(form: &FormState) -> SignupRequest {
    SignupRequest {
        username: form.value("username").to_owned(),
        email: form.value("email").to_owned(),
        password: form.value("password").to_owned(),
    }
}

/// Signup page. On success: shows the server's message and navigates to
/// the login page after a short delay.
#[component]
pub fn SignupPage() -> impl IntoView {
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

            let payload = signup_payload(&form.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&payload).await {
                    Ok(resp) => {
                        show_toast(toasts, resp.message, Severity::Success);
                        schedule::after(schedule::NAVIGATE_DELAY_MS, move || {
                            navigate("/login", NavigateOptions::default());
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
            <AuthCard title="Create Account">
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="Username"
                        name="username"
                        placeholder="Choose a unique username"
                        form=form
                    />
                    <InputField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="your@email.com"
                        form=form
                    />
                    <InputField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Min 6+ chars, 1 number & special char"
                        form=form
                    />
                    <InputField
                        label="Confirm Password"
                        name="confirm_password"
                        input_type="password"
                        placeholder="Confirm your password"
                        form=form
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || form.get().submitting
                    >
                        {move || {
                            if form.get().submitting { "Creating account..." } else { "Create Account" }
                        }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <p>
                        "Already have an account? "
                        <a class="auth-card__link" href="/login">"Sign in"</a>
                    </p>
                </div>
            </AuthCard>
        </div>
    }
}
