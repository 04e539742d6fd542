//! Edit Modal Component
//!
//! Opens for the record picked in the table, pre-filled with its amount and
//! label. Nothing is written until Save passes validation; a rejected amount
//! is reported inside the dialog.

use leptos::prelude::*;

use crate::context::{use_tracker, FormStateStoreFields};

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_tracker();
    let form = ctx.form;

    let (amount, set_amount) = signal(String::new());
    let (name, set_name) = signal(String::new());

    // Pre-fill whenever a new target opens
    Effect::new(move |_| {
        if let Some(target) = form.editing().get() {
            set_amount.set(target.amount);
            set_name.set(target.name);
        }
    });

    let save = move |_| {
        let Some(target) = form.editing().get_untracked() else {
            return;
        };
        ctx.commit_edit(&target, &amount.get_untracked(), &name.get_untracked());
    };

    let title = move || {
        form.editing()
            .get()
            .map(|t| format!("Edit {} record", t.kind))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || form.editing().get().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-label="Edit record">
                    <h2 class="modal-title">{title}</h2>
                    <label for="edit-amount">"Calories"</label>
                    <input
                        id="edit-amount"
                        type="text"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    <p class="modal-error" role="alert">
                        {move || form.error().get().unwrap_or_default()}
                    </p>
                    <label for="edit-name">"Label"</label>
                    <input
                        id="edit-name"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="save-btn" on:click=save>"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
