//! Reset-password page — OTP plus new password for the email carried in
//! the query string.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::auth_card::AuthCard;
use crate::components::input_field::InputField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ResetRequest;
use crate::state::form::{FieldSpec, FormState};
use crate::state::toast::{Severity, ToastState, show_toast};
use crate::util::validators;

fn otp_rule(form: &FormState) -> Option<String> {
    validators::otp_error(form.value("otp")).map(str::to_owned)
}

fn password_rule(form: &FormState) -> Option<String> {
    validators::password_error(form.value("password")).map(str::to_owned)
}

fn confirm_rule(form: &FormState) -> Option<String> {
    validators::confirm_password_error(form.value("password"), form.value("confirm_password"))
        .map(str::to_owned)
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec { name: "otp", validate: otp_rule },
    FieldSpec { name: "password", validate: password_rule },
    FieldSpec { name: "confirm_password", validate: confirm_rule },
];

/// Email from the query string. Empty or missing means the page was
/// entered without going through the forgot-password step — an invalid
/// entry point, not a form error.
fn email_param(raw: Option<String>) -> Option<String> {
    raw.filter(|email| !email.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_payload(email: &str, form: &FormState) -> ResetRequest {
    ResetRequest {
        email: email.to_owned(),
        otp: form.value("otp").to_owned(),
        password: form.value("password").to_owned(),
    }
}

/// Reset-password page. Without an email query parameter it refuses to
/// render the form: it shows an error toast and redirects back to the
/// forgot-password step. On success: navigates to login after a short
/// delay.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let Some(email) = email_param(query.read_untracked().get("email")) else {
        // Missing precondition: bounce to the previous step after render.
        Effect::new(move || {
            show_toast(
                toasts,
                "Email is required. Please start from forgot password.",
                Severity::Error,
            );
            navigate("/forgot-password", NavigateOptions::default());
        });
        return ().into_any();
    };

    let form = RwSignal::new(FormState::default());
    let subtitle = {
        let email = email.clone();
        Signal::derive(move || format!("Reset password for {email}"))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = form.try_update(|f| f.try_begin_submit(SCHEMA)).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::util::schedule;

            let payload = reset_payload(&email, &form.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset(&payload).await {
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
            let _ = (&email, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <AuthCard title="Reset Password" subtitle=subtitle>
                <form class="auth-form" on:submit=on_submit>
                    <InputField
                        label="OTP"
                        name="otp"
                        placeholder="Enter 6-digit OTP"
                        form=form
                    />
                    <InputField
                        label="New Password"
                        name="password"
                        input_type="password"
                        placeholder="Min 6+ chars, 1 number & special char"
                        form=form
                    />
                    <InputField
                        label="Confirm Password"
                        name="confirm_password"
                        input_type="password"
                        placeholder="Confirm your new password"
                        form=form
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || form.get().submitting
                    >
                        {move || if form.get().submitting { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <p>
                        <a class="auth-card__link" href="/login">"Back to sign in"</a>
                    </p>
                </div>
            </AuthCard>
        </div>
    }
    .into_any()
}
