//! Recently generated passwords, newest first.

pub mod store;

use zeroize::Zeroize;

use crate::error::Result;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Store key holding the JSON array of passwords.
pub const HISTORY_KEY: &str = "passwordHistory";
pub const MAX_ENTRIES: usize = 10;

pub struct History<S: KeyValueStore> {
    store: S,
    entries: Vec<String>,
}

impl<S: KeyValueStore> History<S> {
    /// Load from `store`. A missing, unreadable or corrupt value starts an
    /// empty history; the next write replaces it.
    pub fn load(store: S) -> Self {
        let mut entries = match store.get(HISTORY_KEY) {
            Ok(Some(mut raw)) => {
                let parsed = serde_json::from_str::<Vec<String>>(&raw);
                raw.zeroize();
                parsed.unwrap_or_else(|e| {
                    log::warn!("discarding unreadable history: {e}");
                    Vec::new()
                })
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read history: {e}");
                Vec::new()
            }
        };
        truncate(&mut entries);

        Self { store, entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push `password` to the front. Returns `false` when it equals the
    /// current newest entry and nothing changed.
    pub fn record(&mut self, password: &str) -> Result<bool> {
        Ok(self.record_all(&[password])? == 1)
    }

    /// Record a batch in order, so the last password ends up newest. The
    /// store is written once; returns how many entries were added.
    pub fn record_all(&mut self, passwords: &[&str]) -> Result<usize> {
        let mut added = 0;
        for password in passwords {
            if self.entries.first().map(String::as_str) == Some(*password) {
                continue;
            }
            self.entries.insert(0, password.to_string());
            truncate(&mut self.entries);
            added += 1;
        }

        if added > 0 {
            self.persist()?;
        }
        Ok(added)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.zeroize();
        self.entries.clear();
        self.store.remove(HISTORY_KEY)
    }

    fn persist(&mut self) -> Result<()> {
        let mut json = serde_json::to_string(&self.entries)?;
        let result = self.store.set(HISTORY_KEY, &json);
        json.zeroize();
        result
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> Drop for History<S> {
    fn drop(&mut self) {
        self.entries.zeroize();
    }
}

fn truncate(entries: &mut Vec<String>) {
    if entries.len() > MAX_ENTRIES {
        for dropped in entries.iter_mut().skip(MAX_ENTRIES) {
            dropped.zeroize();
        }
        entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> History<MemoryStore> {
        History::load(MemoryStore::new())
    }

    #[test]
    fn consecutive_duplicate_is_ignored() {
        let mut h = history();
        assert!(h.record("alpha").unwrap());
        assert!(!h.record("alpha").unwrap());
        assert_eq!(h.entries(), ["alpha"]);
    }

    #[test]
    fn non_consecutive_duplicate_is_kept() {
        let mut h = history();
        h.record("alpha").unwrap();
        h.record("beta").unwrap();
        h.record("alpha").unwrap();
        assert_eq!(h.entries(), ["alpha", "beta", "alpha"]);
    }

    #[test]
    fn keeps_ten_newest_first() {
        let mut h = history();
        for i in 0..11 {
            h.record(&format!("pw{i}")).unwrap();
        }
        let expected: Vec<String> = (1..11).rev().map(|i| format!("pw{i}")).collect();
        assert_eq!(h.entries(), expected.as_slice());
    }

    #[test]
    fn persists_json_array() {
        let mut h = history();
        h.record("one").unwrap();
        h.record("two").unwrap();
        let raw = h.store().get(HISTORY_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"["two","one"]"#);
    }

    #[test]
    fn reload_from_store() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["b","a"]"#).unwrap();
        let h = History::load(store);
        assert_eq!(h.entries(), ["b", "a"]);
    }

    #[test]
    fn corrupt_value_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "not json").unwrap();
        let h = History::load(store);
        assert!(h.is_empty());
    }

    #[test]
    fn oversized_stored_list_is_truncated() {
        let list: Vec<String> = (0..15).map(|i| i.to_string()).collect();
        let mut store = MemoryStore::new();
        store
            .set(HISTORY_KEY, &serde_json::to_string(&list).unwrap())
            .unwrap();
        let h = History::load(store);
        assert_eq!(h.entries().len(), MAX_ENTRIES);
        assert_eq!(h.entries()[0], "0");
    }

    #[test]
    fn clear_removes_key() {
        let mut h = history();
        h.record("one").unwrap();
        h.clear().unwrap();
        assert!(h.is_empty());
        assert_eq!(h.store().get(HISTORY_KEY).unwrap(), None);
    }

    /// Counts writes to the wrapped store.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        sets: usize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.sets += 1;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn batch_is_written_once() {
        let mut h = History::load(CountingStore::default());
        let batch: Vec<String> = (0..1000).map(|i| format!("pw{i}")).collect();
        let refs: Vec<&str> = batch.iter().map(String::as_str).collect();

        assert_eq!(h.record_all(&refs).unwrap(), 1000);
        assert_eq!(h.store().sets, 1);
        let expected: Vec<String> = (990..1000).rev().map(|i| format!("pw{i}")).collect();
        assert_eq!(h.entries(), expected.as_slice());
    }

    #[test]
    fn batch_applies_consecutive_dedup() {
        let mut h = history();
        h.record("a").unwrap();
        assert_eq!(h.record_all(&["a", "b", "b", "a"]).unwrap(), 2);
        assert_eq!(h.entries(), ["a", "b", "a"]);
    }

    #[test]
    fn unchanged_batch_does_not_write() {
        let mut h = History::load(CountingStore::default());
        h.record("a").unwrap();
        assert_eq!(h.record_all(&["a"]).unwrap(), 0);
        assert_eq!(h.record_all(&[]).unwrap(), 0);
        assert_eq!(h.store().sets, 1);
    }

    #[test]
    fn file_backed_history_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut h = History::load(FileStore::new(dir.path()));
            h.record("first").unwrap();
            h.record("second").unwrap();
        }
        let h = History::load(FileStore::new(dir.path()));
        assert_eq!(h.entries(), ["second", "first"]);
    }
}
