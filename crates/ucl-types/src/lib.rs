//! Record model for the User Credential Ledger (UCL).
//!
//! Every value the contract writes to the ledger is a [`Record`]: a user
//! identifier plus the ordered list of identifiers that user has granted
//! access to. This crate owns the shape of that record and its wire
//! encoding. Every other UCL crate depends on `ucl-types`.
//!
//! # Wire Format
//!
//! Records are stored as compact JSON with two fixed field names:
//!
//! ```text
//! {"identifier":"1234-XXX-SSD","associatedIdentifiers":["a","b"]}
//! ```
//!
//! [`serialize`] and [`deserialize`] are inverses for every record.

pub mod error;
pub mod record;

pub use error::{RecordError, RecordResult};
pub use record::{deserialize, serialize, Record};
