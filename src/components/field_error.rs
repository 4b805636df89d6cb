//! Inline validation message rendered under a form field.

use leptos::prelude::*;

use crate::util::validate::FieldErrors;

/// Shows the validation message for `field`, if one is present.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.get().contains_key(field)>
            <p class="form-field__error">
                {move || errors.get().get(field).cloned().unwrap_or_default()}
            </p>
        </Show>
    }
}
