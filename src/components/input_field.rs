//! Labeled input bound to a form controller field.

use leptos::prelude::*;

use crate::state::form::FormState;

/// Text input wired to one named field of a [`FormState`] signal: edits go
/// through `set_field` (which clears the field's error eagerly), and the
/// recorded error renders inline below the input. Inputs disable while the
/// form is submitting or locked after a first success.
#[component]
pub fn InputField(
    label: &'static str,
    name: &'static str,
    form: RwSignal<FormState>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let has_error = move || form.get().error(name).is_some();

    view! {
        <div class="input-field">
            <label class="input-field__label">{label}</label>
            <input
                class="input-field__input"
                class=("input-field__input--error", has_error)
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || form.get().value(name).to_owned()
                disabled=move || {
                    let state = form.get();
                    state.submitting || state.submitted
                }
                on:input=move |ev| {
                    form.update(|f| f.set_field(name, event_target_value(&ev)));
                }
            />
            <Show when=has_error>
                <p class="input-field__error">
                    {move || form.get().error(name).unwrap_or_default().to_owned()}
                </p>
            </Show>
        </div>
    }
}
