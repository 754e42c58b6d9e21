//! Ledger state access for the User Credential Ledger.
//!
//! The contract never owns persistence. It reads and writes opaque bytes
//! through the [`KvStore`] trait, which stands in for the world state of
//! whatever ledger platform hosts it. Consistency, durability and ordering
//! across invocations are the backend's business.
//!
//! # Storage Backends
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests and embedding
//! - [`FileKvStore`] -- single JSON document on disk, for the local host
//!
//! # Design Rules
//!
//! 1. `get` on an absent key is `Ok(None)`, never an error.
//! 2. `put` is last-write-wins; there is no delete.
//! 3. The store never interprets values.
//! 4. Backend errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileKvStore;
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
