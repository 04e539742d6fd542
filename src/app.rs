//! Calorie Tracker App
//!
//! Root component: owns the record store for the lifetime of the mount and
//! lays out the form, table, chart and edit modal.

use leptos::prelude::*;

use crate::chart::DonutChart;
use crate::components::{EditModal, EntryForm, RecordTable};
use crate::config::TrackerConfig;
use crate::context::TrackerContext;
use crate::storage::LocalStorage;
use crate::store::RecordStore;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let store = RecordStore::load(LocalStorage, config.storage_keys.clone());
    let ctx = TrackerContext::new(store);

    // Provide context to all children
    provide_context(ctx);
    provide_context(config);

    on_cleanup(|| log::info!(target: "APP", "Tracker unmounted"));

    view! {
        <div class="max-w-sm mx-auto">
            <h1 class="title-custom">"Calorie Tracker"</h1>
            <EntryForm />
            <RecordTable />
            <DonutChart />
            <EditModal />
        </div>
    }
}
