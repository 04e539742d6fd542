//! Record Store
//!
//! Owns the gained and burned record lists and mirrors both to durable
//! storage after every mutation. Records are addressed by their position in
//! the list; all positional lookups go through `resolve`/`resolve_mut`.

use serde::Deserialize;

use crate::config::StorageKeys;
use crate::error::StoreError;
use crate::models::{Record, RecordKind, Summary, Totals};
use crate::storage::KeyValueStorage;
use crate::validation::parse_amount;

/// Persisted entry: the `{amount, name}` object, or a bare number written by
/// older builds of the tracker
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Bare(f64),
    Full(Record),
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        match stored {
            StoredRecord::Bare(amount) => Record::new(amount, None),
            StoredRecord::Full(record) => record,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    storage: S,
    keys: StorageKeys,
    gained: Vec<Record>,
    burned: Vec<Record>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Hydrate both lists from storage. Missing keys, unreadable storage and
    /// corrupt payloads all load as an empty list.
    pub fn load(storage: S, keys: StorageKeys) -> Self {
        let gained = load_records(&storage, &keys.gained);
        let burned = load_records(&storage, &keys.burned);
        log::info!(
            target: "STORE",
            "Loaded {} gained and {} burned records",
            gained.len(),
            burned.len()
        );
        Self {
            storage,
            keys,
            gained,
            burned,
        }
    }

    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Gained => &self.gained,
            RecordKind::Burned => &self.burned,
        }
    }

    fn records_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Gained => &mut self.gained,
            RecordKind::Burned => &mut self.burned,
        }
    }

    /// Look up a record by its current position
    pub fn resolve(&self, kind: RecordKind, index: usize) -> Option<&Record> {
        self.records(kind).get(index)
    }

    fn resolve_mut(&mut self, kind: RecordKind, index: usize) -> Result<&mut Record, StoreError> {
        let len = self.records(kind).len();
        self.records_mut(kind)
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { kind, index, len })
    }

    /// Append a record to the end of `kind`'s list
    pub fn add(&mut self, kind: RecordKind, amount: &str, name: Option<&str>) -> Result<(), StoreError> {
        let amount = parse_amount(amount).ok_or_else(|| StoreError::InvalidAmount(amount.to_string()))?;
        self.records_mut(kind)
            .push(Record::new(amount, name.and_then(label)));
        log::debug!(target: "STORE", "Added {} record of {}", kind, amount);
        self.persist_logged();
        Ok(())
    }

    /// Remove and return the record at `index`
    pub fn remove(&mut self, kind: RecordKind, index: usize) -> Result<Record, StoreError> {
        let len = self.records(kind).len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { kind, index, len });
        }
        let removed = self.records_mut(kind).remove(index);
        log::debug!(target: "STORE", "Removed {} record at {}", kind, index);
        self.persist_logged();
        Ok(removed)
    }

    /// Replace the amount at `index`, and the name when one is given.
    /// The record keeps its `{amount, name}` shape; a blank name clears it.
    pub fn edit(
        &mut self,
        kind: RecordKind,
        index: usize,
        new_amount: &str,
        name: Option<&str>,
    ) -> Result<(), StoreError> {
        let amount =
            parse_amount(new_amount).ok_or_else(|| StoreError::InvalidAmount(new_amount.to_string()))?;
        let record = self.resolve_mut(kind, index)?;
        record.amount = amount;
        if let Some(name) = name {
            record.name = label(name);
        }
        log::debug!(target: "STORE", "Edited {} record at {}", kind, index);
        self.persist_logged();
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        Totals {
            gained_total: self.gained.iter().map(|r| r.amount).sum(),
            burned_total: self.burned.iter().map(|r| r.amount).sum(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            gained: self.gained.clone(),
            burned: self.burned.clone(),
            totals: self.totals(),
        }
    }

    /// Write both lists to storage. Both writes are attempted even when the
    /// first one fails.
    pub fn persist(&self) -> Result<(), StoreError> {
        let gained = serde_json::to_string(&self.gained)?;
        let burned = serde_json::to_string(&self.burned)?;
        let gained_result = self.storage.set_item(&self.keys.gained, &gained);
        let burned_result = self.storage.set_item(&self.keys.burned, &burned);

        match (gained_result, burned_result) {
            (Ok(()), Ok(())) => Ok(()),
            (Ok(()), Err(source)) => Err(StoreError::PartialWrite {
                written: self.keys.gained.clone(),
                failed: self.keys.burned.clone(),
                source,
            }),
            (Err(source), Ok(())) => Err(StoreError::PartialWrite {
                written: self.keys.burned.clone(),
                failed: self.keys.gained.clone(),
                source,
            }),
            (Err(source), Err(_)) => Err(source.into()),
        }
    }

    /// Persist once more before the view goes away
    pub fn flush(&self) {
        self.persist_logged();
    }

    // In-memory state is already updated when this runs, so a failed write is
    // reported rather than returned.
    fn persist_logged(&self) {
        match self.persist() {
            Ok(()) => log::debug!(
                target: "STORE",
                "Persisted {} gained, {} burned",
                self.gained.len(),
                self.burned.len()
            ),
            Err(e) => log::error!(target: "STORE", "Failed to persist records: {}", e),
        }
    }
}

/// Stored form of a label; blank labels are kept as no name
fn label(name: &str) -> Option<String> {
    (!name.is_empty()).then(|| name.to_string())
}

fn load_records<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Record> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!(target: "STORE", "Cannot read {}: {}", key, e);
            return Vec::new();
        }
    };

    let stored: Vec<StoredRecord> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!(target: "STORE", "Discarding corrupt {} payload: {}", key, e);
            return Vec::new();
        }
    };

    let total = stored.len();
    let records: Vec<Record> = stored
        .into_iter()
        .map(Record::from)
        .filter(|r| r.amount.is_finite() && r.amount > 0.0)
        .collect();
    if records.len() != total {
        log::warn!(target: "STORE", "Dropped {} invalid entries from {}", total - records.len(), key);
    }
    records
}
