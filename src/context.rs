//! Tracker Context
//!
//! Record store signal and form state, provided once by `App` and shared by
//! every component through the Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::StoreError;
use crate::models::RecordKind;
use crate::storage::{KeyValueStorage, LocalStorage};
use crate::store::RecordStore;
use crate::validation;

/// Record currently open in the edit modal
#[derive(Clone, Debug, PartialEq)]
pub struct EditTarget {
    pub kind: RecordKind,
    pub index: usize,
    pub amount: String,
    pub name: String,
}

/// Form inputs, inline error and edit modal target
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub amount: String,
    pub name: String,
    pub error: Option<String>,
    pub editing: Option<EditTarget>,
}

/// App-wide handles; `S` is the durable storage behind the record store
pub struct TrackerContext<S: 'static = LocalStorage> {
    pub records: RwSignal<RecordStore<S>>,
    pub form: Store<FormState>,
}

impl<S: 'static> Clone for TrackerContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for TrackerContext<S> {}

pub fn use_tracker() -> TrackerContext {
    expect_context::<TrackerContext>()
}

impl<S> TrackerContext<S>
where
    S: KeyValueStorage + Send + Sync + 'static,
{
    /// Wrap the store in a signal. The records are flushed once more when the
    /// owning reactive scope is cleaned up.
    pub fn new(records: RecordStore<S>) -> Self {
        let records = RwSignal::new(records);
        on_cleanup(move || {
            records.with_untracked(|store| store.flush());
        });
        Self {
            records,
            form: Store::new(FormState::default()),
        }
    }

    /// Validate an amount, showing or hiding the inline error
    pub fn check_value(&self, input: &str) -> bool {
        self.form.error().set(None);
        match validation::check_value(input) {
            Ok(_) => true,
            Err(e) => {
                self.form.error().set(Some(e.to_string()));
                false
            }
        }
    }

    /// Add a record from the form inputs, then clear them
    pub fn submit(&self, kind: RecordKind) {
        let amount = self.form.amount().get_untracked();
        if !self.check_value(&amount) {
            return;
        }
        let name = self.form.name().get_untracked();

        if let Some(Err(e)) = self.records.try_update(|store| store.add(kind, &amount, Some(&name))) {
            log::warn!(target: "APP", "Add rejected: {}", e);
            return;
        }
        self.form.amount().set(String::new());
        self.form.name().set(String::new());
    }

    pub fn remove(&self, kind: RecordKind, index: usize) {
        match self.records.try_update(|store| store.remove(kind, index)) {
            Some(Err(e @ StoreError::IndexOutOfRange { .. })) => {
                log::warn!(target: "APP", "Stale delete ignored: {}", e);
            }
            Some(Err(e)) => log::error!(target: "APP", "Delete failed: {}", e),
            _ => {}
        }
    }

    /// Open the edit modal for the record at `index`
    pub fn begin_edit(&self, kind: RecordKind, index: usize) {
        let target = self.records.with_untracked(|store| {
            store.resolve(kind, index).map(|record| EditTarget {
                kind,
                index,
                amount: record.amount_text(),
                name: record.name.clone().unwrap_or_default(),
            })
        });
        match target {
            Some(target) => {
                self.form.error().set(None);
                self.form.editing().set(Some(target));
            }
            None => log::warn!(target: "APP", "Stale edit ignored: no {} record at {}", kind, index),
        }
    }

    /// Commit the modal's values. Returns false when the amount is invalid
    /// and the modal should stay open. A blank label clears the name.
    pub fn commit_edit(&self, target: &EditTarget, amount: &str, name: &str) -> bool {
        if !self.check_value(amount) {
            return false;
        }
        let result = self
            .records
            .try_update(|store| store.edit(target.kind, target.index, amount, Some(name)));
        if let Some(Err(e)) = result {
            log::warn!(target: "APP", "Edit rejected: {}", e);
        }
        self.form.editing().set(None);
        true
    }

    pub fn cancel_edit(&self) {
        self.form.error().set(None);
        self.form.editing().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::models::Record;
    use crate::storage::MemoryStorage;
    use crate::validation::INVALID_AMOUNT_MESSAGE;

    fn tracker(storage: &MemoryStorage) -> TrackerContext<MemoryStorage> {
        TrackerContext::new(RecordStore::load(storage.clone(), StorageKeys::default()))
    }

    fn records(ctx: &TrackerContext<MemoryStorage>, kind: RecordKind) -> Vec<Record> {
        ctx.records.with_untracked(|store| store.records(kind).to_vec())
    }

    #[test]
    fn test_check_value_shows_and_clears_error() {
        Owner::new().with(|| {
            let ctx = tracker(&MemoryStorage::default());

            for input in ["", "abc", "-3", "0"] {
                assert!(!ctx.check_value(input), "{input:?}");
                assert_eq!(
                    ctx.form.error().get_untracked().as_deref(),
                    Some(INVALID_AMOUNT_MESSAGE)
                );
            }

            assert!(ctx.check_value("120"));
            assert_eq!(ctx.form.error().get_untracked(), None);
        });
    }

    #[test]
    fn test_submit_adds_and_clears_inputs() {
        Owner::new().with(|| {
            let ctx = tracker(&MemoryStorage::default());
            ctx.form.amount().set("500".to_string());
            ctx.form.name().set("dinner".to_string());

            ctx.submit(RecordKind::Gained);

            assert_eq!(
                records(&ctx, RecordKind::Gained),
                vec![Record::new(500.0, Some("dinner".to_string()))]
            );
            assert_eq!(ctx.form.amount().get_untracked(), "");
            assert_eq!(ctx.form.name().get_untracked(), "");
            assert_eq!(ctx.records.with_untracked(|s| s.totals().burned_total), 0.0);
        });
    }

    #[test]
    fn test_submit_with_blank_label_stores_no_name() {
        Owner::new().with(|| {
            let ctx = tracker(&MemoryStorage::default());
            ctx.form.amount().set("80".to_string());

            ctx.submit(RecordKind::Burned);

            assert_eq!(records(&ctx, RecordKind::Burned), vec![Record::new(80.0, None)]);
        });
    }

    #[test]
    fn test_invalid_submit_keeps_inputs_and_store() {
        Owner::new().with(|| {
            let storage = MemoryStorage::default();
            let ctx = tracker(&storage);
            ctx.form.amount().set("abc".to_string());

            ctx.submit(RecordKind::Gained);

            assert!(records(&ctx, RecordKind::Gained).is_empty());
            assert_eq!(ctx.form.amount().get_untracked(), "abc");
            assert!(ctx.form.error().get_untracked().is_some());
            assert_eq!(storage.raw("gainedRecords"), None);
        });
    }

    #[test]
    fn test_invalid_edit_keeps_modal_open() {
        Owner::new().with(|| {
            let ctx = tracker(&MemoryStorage::default());
            ctx.form.amount().set("100".to_string());
            ctx.form.name().set("breakfast".to_string());
            ctx.submit(RecordKind::Gained);

            ctx.begin_edit(RecordKind::Gained, 0);
            let target = ctx.form.editing().get_untracked().unwrap();
            assert_eq!(target.amount, "100");
            assert_eq!(target.name, "breakfast");

            assert!(!ctx.commit_edit(&target, "-5", "breakfast"));
            assert_eq!(ctx.form.editing().get_untracked(), Some(target.clone()));
            assert_eq!(
                ctx.form.error().get_untracked().as_deref(),
                Some(INVALID_AMOUNT_MESSAGE)
            );
            assert_eq!(
                records(&ctx, RecordKind::Gained),
                vec![Record::new(100.0, Some("breakfast".to_string()))]
            );

            assert!(ctx.commit_edit(&target, "150", "brunch"));
            assert_eq!(ctx.form.editing().get_untracked(), None);
            assert_eq!(ctx.form.error().get_untracked(), None);
            assert_eq!(
                records(&ctx, RecordKind::Gained),
                vec![Record::new(150.0, Some("brunch".to_string()))]
            );
        });
    }

    #[test]
    fn test_clearing_label_in_edit_stores_no_name() {
        Owner::new().with(|| {
            let storage = MemoryStorage::default();
            let ctx = tracker(&storage);
            ctx.form.amount().set("50".to_string());
            ctx.form.name().set("walk".to_string());
            ctx.submit(RecordKind::Burned);

            ctx.begin_edit(RecordKind::Burned, 0);
            let target = ctx.form.editing().get_untracked().unwrap();
            assert!(ctx.commit_edit(&target, "50", ""));

            assert_eq!(records(&ctx, RecordKind::Burned), vec![Record::new(50.0, None)]);
            assert_eq!(
                storage.raw("burnedRecords").as_deref(),
                Some(r#"[{"amount":50.0,"name":null}]"#)
            );
        });
    }

    #[test]
    fn test_cancel_edit_leaves_store_untouched() {
        Owner::new().with(|| {
            let storage = MemoryStorage::default();
            let ctx = tracker(&storage);
            ctx.form.amount().set("300".to_string());
            ctx.submit(RecordKind::Gained);
            let persisted = storage.raw("gainedRecords");

            ctx.begin_edit(RecordKind::Gained, 0);
            ctx.check_value("nope");
            ctx.cancel_edit();

            assert_eq!(ctx.form.editing().get_untracked(), None);
            assert_eq!(ctx.form.error().get_untracked(), None);
            assert_eq!(records(&ctx, RecordKind::Gained), vec![Record::new(300.0, None)]);
            assert_eq!(storage.raw("gainedRecords"), persisted);
        });
    }

    #[test]
    fn test_stale_edit_and_delete_are_ignored() {
        Owner::new().with(|| {
            let ctx = tracker(&MemoryStorage::default());
            ctx.form.amount().set("100".to_string());
            ctx.submit(RecordKind::Gained);

            ctx.begin_edit(RecordKind::Gained, 5);
            assert_eq!(ctx.form.editing().get_untracked(), None);

            ctx.remove(RecordKind::Gained, 5);
            assert_eq!(records(&ctx, RecordKind::Gained).len(), 1);

            ctx.remove(RecordKind::Gained, 0);
            assert!(records(&ctx, RecordKind::Gained).is_empty());
        });
    }

    #[test]
    fn test_cleanup_flushes_records() {
        let storage = MemoryStorage::default();
        let owner = Owner::new();
        owner.with(|| {
            let ctx = tracker(&storage);
            ctx.form.amount().set("200".to_string());
            ctx.submit(RecordKind::Gained);
        });
        storage.clear();
        assert_eq!(storage.raw("gainedRecords"), None);

        owner.cleanup();

        assert_eq!(
            storage.raw("gainedRecords").as_deref(),
            Some(r#"[{"amount":200.0,"name":null}]"#)
        );
        assert_eq!(storage.raw("burnedRecords").as_deref(), Some("[]"));
    }
}
