//! Toast notification stack rendered above every route.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the shared toast stack. Toasts appear bottom-right, newest
/// last, and disappear when their timer dismisses them from state.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=|toast| {
                    view! {
                        <div class=format!("toast {}", toast.severity.class())>
                            <span class="toast__message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
