//! User record contract for the User Credential Ledger (UCL).
//!
//! The hosting ledger platform calls [`UserContract::invoke`] with an
//! operation name and positional string arguments. The contract routes the
//! call to one of three handlers and answers with a [`Response`]:
//!
//! | Operation    | Arguments                         | Effect                         |
//! |--------------|-----------------------------------|--------------------------------|
//! | `initLedger` | ignored                           | writes the two seed records    |
//! | `createUser` | key, identifier, associated, _, _ | writes one record under key    |
//! | `queryUser`  | key                               | returns the raw stored bytes   |
//!
//! The contract keeps no state of its own. The ledger state is passed in
//! on every call as a [`ucl_store::KvStore`].

pub mod contract;
pub mod error;
pub mod invocation;
pub mod operation;
pub mod traits;

pub use contract::{UserContract, SEED_IDENTIFIERS, SEED_KEY_PREFIX};
pub use error::{ContractError, ContractResult};
pub use invocation::{status, Invocation, Response};
pub use operation::{Operation, CREATE_USER_ARGS, QUERY_USER_ARGS};
pub use traits::Chaincode;
