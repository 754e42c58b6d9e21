use crate::error::StoreResult;

/// Key-value view of the ledger's world state.
///
/// All implementations must satisfy these invariants:
/// - Reading an absent key returns `Ok(None)`.
/// - Writing an existing key replaces its value (last write wins).
/// - Values are opaque bytes; the store never inspects them.
/// - Backend failures are returned as `Err`, never swallowed.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Check whether a value exists under `key`.
    ///
    /// Default implementation calls `get()`.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
