use ucl_store::KvStore;

use crate::invocation::{Invocation, Response};

/// Entry points a ledger platform calls on a deployed contract.
pub trait Chaincode: Send + Sync {
    /// Lifecycle hook run when the contract is instantiated or upgraded.
    fn init(&self, store: &dyn KvStore) -> Response;

    /// Handle one invocation against the given ledger state.
    fn invoke(&self, store: &dyn KvStore, invocation: &Invocation) -> Response;
}
