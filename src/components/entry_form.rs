//! Entry Form Component
//!
//! Amount and label inputs, the two add buttons and the inline error message.

use leptos::prelude::*;

use crate::context::{use_tracker, FormStateStoreFields};
use crate::models::RecordKind;

const INPUT_CLASSES: &str = "w-full bg-gray-900 text-sm text-gray-400 transition border border-gray-800 focus:outline-none focus:border-gray-600 rounded py-1 px-2 pl-10 appearance-none leading-normal";
const GAINED_BUTTON_CLASSES: &str = "focus:outline-none text-white bg-red-700 hover:bg-red-800 focus:ring-4 focus:ring-red-300 font-medium rounded-lg text-sm px-5 py-2.5 me-2 mb-2 p-2";
const BURNED_BUTTON_CLASSES: &str = "focus:outline-none text-white bg-green-700 hover:bg-green-800 focus:ring-4 focus:ring-green-300 font-medium rounded-lg text-sm px-5 py-2.5 me-2 mb-2 p-2";

#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_tracker();
    let form = ctx.form;

    view! {
        <fieldset class="entry-form">
            <input
                id="amount"
                name="amount"
                type="text"
                aria-label="amount"
                placeholder="Enter calories"
                class=INPUT_CLASSES
                prop:value=move || form.amount().get()
                on:input=move |ev| form.amount().set(event_target_value(&ev))
            />
            <input
                id="record-name"
                name="name"
                type="text"
                aria-label="name"
                placeholder="Label (optional)"
                class=INPUT_CLASSES
                prop:value=move || form.name().get()
                on:input=move |ev| form.name().set(event_target_value(&ev))
            />
        </fieldset>

        <ErrorMessage />

        <button type="button" class=GAINED_BUTTON_CLASSES on:click=move |_| ctx.submit(RecordKind::Gained)>
            "Add Gained Calories"
        </button>
        <button type="button" class=BURNED_BUTTON_CLASSES on:click=move |_| ctx.submit(RecordKind::Burned)>
            "Add Burned Calories"
        </button>
    }
}

/// Inline validation message, kept in the layout and hidden while empty
#[component]
pub fn ErrorMessage() -> impl IntoView {
    let form = use_tracker().form;
    let visibility = move || if form.error().get().is_some() { "visible" } else { "hidden" };

    view! {
        <p
            class="flex items-center w-full max-w-xs p-4 text-gray-500 rounded-lg shadow"
            role="alert"
            style:visibility=visibility
        >
            {move || form.error().get().unwrap_or_default()}
        </p>
    }
}
