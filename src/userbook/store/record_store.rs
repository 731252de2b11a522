use super::StorageBackend;
use crate::error::{Result, UserbookError};
use crate::model::UserRecord;

/// The ordered record collection and its persisted mirror.
///
/// After every mutating call returns `Ok`, the backend holds exactly the
/// serialized form of [`records`](Self::records). If persisting fails, the
/// in-memory change is rolled back before the error is returned.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key: String,
    records: Vec<UserRecord>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Reads the collection stored under `key`.
    ///
    /// Absent and malformed payloads both load as an empty collection. Only a
    /// backend read failure is an error.
    pub fn load(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let records = match backend.get_item(&key)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Option<Vec<UserRecord>>>(&raw) {
                Ok(parsed) => parsed.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "stored collection is malformed, starting empty");
                    Vec::new()
                }
            },
        };
        tracing::debug!(key = %key, count = records.len(), "loaded collection");
        Ok(Self {
            backend,
            key,
            records,
        })
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn get(&self, index: usize) -> Result<&UserRecord> {
        self.records.get(index).ok_or(UserbookError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Appends and returns the new record's index.
    pub fn add(&mut self, record: UserRecord) -> Result<usize> {
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(self.records.len() - 1)
    }

    /// Replaces the record at `index`, returning the previous value.
    pub fn update(&mut self, index: usize, record: UserRecord) -> Result<UserRecord> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.records[index], record);
        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e);
        }
        Ok(previous)
    }

    /// Deletes the record at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<UserRecord> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(UserbookError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.records).map_err(UserbookError::Serialization)?;
        self.backend.set_item(&self.key, &payload)?;
        tracing::debug!(key = %self.key, count = self.records.len(), "persisted collection");
        Ok(())
    }
}
