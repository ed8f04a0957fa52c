use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::scenario::ScenarioEntry;

use super::backend::ScenarioStorage;
use super::format;

/// Owns the saved-scenario collection and keeps it mirrored in storage.
///
/// The collection is read once in `open` and rewritten in full after every
/// mutation: read full, mutate, write full. There is no locking, so two
/// stores over the same backend and key will overwrite each other's writes.
pub struct ScenarioStore<S: ScenarioStorage> {
    storage: S,
    key: String,
    entries: Vec<ScenarioEntry>,
}

impl<S: ScenarioStorage> std::fmt::Debug for ScenarioStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioStore")
            .field("key", &self.key)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<S: ScenarioStorage> ScenarioStore<S> {
    /// Load the collection persisted under `key`.
    ///
    /// Never fails: a missing key, a storage read error or a malformed blob
    /// all start the store with an empty collection.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = Self::read_collection(&storage, &key);
        debug!(key = %key, count = entries.len(), "opened scenario store");
        Self { storage, key, entries }
    }

    fn read_collection(storage: &S, key: &str) -> Vec<ScenarioEntry> {
        let blob = match storage.get(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read saved scenarios, starting empty");
                return Vec::new();
            }
        };

        format::decode_collection(&blob).unwrap_or_else(|e| {
            warn!(key = %key, error = %e, "discarding malformed saved scenarios");
            Vec::new()
        })
    }

    /// All saved scenarios, in save order.
    pub fn list(&self) -> &[ScenarioEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage key the collection lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append `entry` and persist the whole collection.
    /// If persisting fails the entry is not kept. Entries with a NaN or
    /// infinite amount are rejected before anything is written.
    pub fn save(&mut self, entry: ScenarioEntry) -> Result<(), CoreError> {
        if let Some(field) = entry.non_finite_field() {
            return Err(CoreError::Serialization(format!(
                "scenario '{}' has a non-finite {field}",
                entry.name
            )));
        }

        self.entries.push(entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        debug!(key = %self.key, count = self.entries.len(), "saved scenario");
        Ok(())
    }

    /// Look up the scenario at `index`.
    pub fn load(&self, index: usize) -> Result<&ScenarioEntry, CoreError> {
        self.entries
            .get(index)
            .ok_or(CoreError::ScenarioNotFound(index))
    }

    /// Remove the scenario at `index` and persist. Returns the removed entry.
    /// The remaining entries keep their relative order.
    pub fn delete(&mut self, index: usize) -> Result<ScenarioEntry, CoreError> {
        if index >= self.entries.len() {
            return Err(CoreError::ScenarioNotFound(index));
        }

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }
        debug!(key = %self.key, index, count = self.entries.len(), "deleted scenario");
        Ok(removed)
    }

    /// Drop every scenario and remove the storage key.
    ///
    /// Asking the user for confirmation is up to the caller.
    pub fn clear_all(&mut self) -> Result<(), CoreError> {
        self.storage.remove(&self.key)?;
        let cleared = self.entries.len();
        self.entries.clear();
        debug!(key = %self.key, cleared, "cleared all scenarios");
        Ok(())
    }

    /// Pretty-printed JSON of the whole collection, ready to download.
    /// Does not touch storage.
    pub fn export_json(&self) -> Result<Vec<u8>, CoreError> {
        let bytes = format::encode_export(&self.entries)?;
        debug!(key = %self.key, count = self.entries.len(), bytes = bytes.len(), "exported scenarios");
        Ok(bytes)
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), CoreError> {
        let blob = format::encode_collection(&self.entries)?;
        self.storage.set(&self.key, &blob)
    }
}
