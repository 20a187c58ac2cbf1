//! Forgot-password page — requests an OTP for an email address.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::input_field::InputField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ForgotRequest;
use crate::state::form::{FieldSpec, FormState};
use crate::state::toast::ToastState;
use crate::util::validators;

fn email_rule(form: &FormState) -> Option<String> {
    validators::required_email_error(form.value("email")).map(str::to_owned)
}

const SCHEMA: &[FieldSpec] = &[FieldSpec { name: "email", validate: email_rule }];

#[cfg(any(test, feature = "hydrate"))]
fn forgot_payload(form: &FormState) -> ForgotRequest {
    ForgotRequest {
        email: form.value("email").to_owned(),
    }
}

/// Reset route carrying the email as a percent-encoded query parameter, so
/// the reset page knows which account the OTP belongs to.
#[cfg(any(test, feature = "hydrate"))]
fn reset_password_url(email: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("email", email)
        .finish();
    format!("/reset-password?{query}")
}

/// Forgot-password page. On success: locks the form (`submitted`), shows
/// the server's message, and navigates to the reset page after a short
/// delay with the email carried in the query string.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
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

            let payload = forgot_payload(&form.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::forgot(&payload).await {
                    Ok(resp) => {
                        show_toast(toasts, resp.message, Severity::Success);
                        form.try_update(|f| f.submitted = true);
                        let url = reset_password_url(&payload.email);
                        schedule::after(schedule::NAVIGATE_DELAY_MS, move || {
                            navigate(&url, NavigateOptions::default());
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

    let subtitle = Signal::derive(move || {
        if form.get().submitted {
            "Check your email for the OTP".to_owned()
        } else {
            "Enter your email to reset your password".to_owned()
        }
    });

    let button_label = move || {
        let state = form.get();
        if state.submitting {
            "Sending OTP..."
        } else if state.submitted {
            "OTP Sent"
        } else {
            "Send OTP"
        }
    };

    view! {
        <div class="auth-page">
            <AuthCard title="Forgot Password?" subtitle=subtitle>
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="Email Address"
                        name="email"
                        input_type="email"
                        placeholder="your@email.com"
                        form=form
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || {
                            let state = form.get();
                            state.submitting || state.submitted
                        }
                    >
                        {button_label}
                    </button>
                </form>
                <div class="auth-card__links">
                    <p>
                        "Remember your password? "
                        <a class="auth-card__link" href="/login">"Sign in"</a>
                    </p>
                </div>
            </AuthCard>
        </div>
    }
}
