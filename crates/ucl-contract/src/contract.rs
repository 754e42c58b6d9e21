use tracing::{debug, info, warn};
use ucl_store::KvStore;
use ucl_types::Record;

use crate::error::{expect_args, ContractError, ContractResult};
use crate::invocation::{Invocation, Response};
use crate::operation::{Operation, CREATE_USER_ARGS, QUERY_USER_ARGS};
use crate::traits::Chaincode;

/// Prefix of the keys written by `initLedger`; the seed index is appended.
pub const SEED_KEY_PREFIX: &str = "USER";

/// Identifiers of the seed records, in key order.
pub const SEED_IDENTIFIERS: [&str; 2] = ["1234-XXX-SSD", "2344-XXX-SSS"];

/// The user record contract.
///
/// Holds no state: every call is a function of the invocation and the
/// ledger state handed in by the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserContract;

impl UserContract {
    pub fn new() -> Self {
        Self
    }

    /// Route an invocation to its handler and return the success payload.
    pub fn dispatch(
        &self,
        store: &dyn KvStore,
        invocation: &Invocation,
    ) -> ContractResult<Vec<u8>> {
        let op = Operation::parse(&invocation.function)?;
        debug!(operation = %op, args = invocation.args.len(), "dispatching");
        match op {
            Operation::QueryUser => self.query(store, &invocation.args),
            Operation::InitLedger => self.bootstrap(store).map(|()| Vec::new()),
            Operation::CreateUser => self.create(store, &invocation.args).map(|()| Vec::new()),
        }
    }

    /// Write the seed records under `USER0`, `USER1`, ...
    ///
    /// Stops at the first failed write.
    pub fn bootstrap(&self, store: &dyn KvStore) -> ContractResult<()> {
        for (i, identifier) in SEED_IDENTIFIERS.iter().enumerate() {
            let key = format!("{SEED_KEY_PREFIX}{i}");
            let record = Record::seed(*identifier);
            store.put(&key, &record.to_bytes()?)?;
            info!(%key, %record, "added seed record");
        }
        Ok(())
    }

    /// Write a record built from `args[1]` and `args[2]` under `args[0]`.
    ///
    /// Exactly five arguments are required; the last two are reserved.
    /// An existing value under the key is replaced.
    pub fn create(&self, store: &dyn KvStore, args: &[String]) -> ContractResult<()> {
        expect_args(args, CREATE_USER_ARGS)?;
        let record = Record::new(args[1].as_str(), Record::parse_associated(&args[2]));
        store.put(&args[0], &record.to_bytes()?)?;
        debug!(key = %args[0], identifier = %record.identifier, "created record");
        Ok(())
    }

    /// Return the bytes stored under `args[0]` without decoding them.
    ///
    /// An absent key yields an empty payload, indistinguishable from a
    /// stored empty value.
    pub fn query(&self, store: &dyn KvStore, args: &[String]) -> ContractResult<Vec<u8>> {
        expect_args(args, QUERY_USER_ARGS)?;
        let value = store.get(&args[0])?;
        if value.is_none() {
            debug!(key = %args[0], "query miss");
        }
        Ok(value.unwrap_or_default())
    }
}

impl Chaincode for UserContract {
    fn init(&self, _store: &dyn KvStore) -> Response {
        debug!("contract instantiated");
        Response::success(Vec::new())
    }

    fn invoke(&self, store: &dyn KvStore, invocation: &Invocation) -> Response {
        match self.dispatch(store, invocation) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                if let ContractError::Store(ref cause) = e {
                    warn!(function = %invocation.function, error = %cause, "store failure");
                } else {
                    debug!(function = %invocation.function, error = %e, "invocation rejected");
                }
                Response::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use ucl_store::{InMemoryKvStore, StoreError, StoreResult};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StoreResult<Option<Vec<u8>>> {
            Ok(None)
        }

        fn put(&self, _key: &str, _value: &[u8]) -> StoreResult<()> {
            Err(StoreError::Unavailable("read-only".into()))
        }
    }

    /// Store that is unreachable and counts attempted writes.
    #[derive(Default)]
    struct DownStore {
        puts: AtomicUsize,
    }

    impl KvStore for DownStore {
        fn get(&self, _key: &str) -> StoreResult<Option<Vec<u8>>> {
            Err(StoreError::Unavailable("peer down".into()))
        }

        fn put(&self, _key: &str, _value: &[u8]) -> StoreResult<()> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Unavailable("peer down".into()))
        }
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    #[test]
    fn bootstrap_writes_seed_records() {
        let store = InMemoryKvStore::new();
        UserContract::new().bootstrap(&store).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["USER0", "USER1"]);
        let user0 = Record::from_bytes(&store.get("USER0").unwrap().unwrap()).unwrap();
        assert_eq!(user0, Record::seed("1234-XXX-SSD"));
        let user1 = Record::from_bytes(&store.get("USER1").unwrap().unwrap()).unwrap();
        assert_eq!(user1, Record::seed("2344-XXX-SSS"));
    }

    #[test]
    fn bootstrap_is_repeatable() {
        let store = InMemoryKvStore::new();
        let contract = UserContract::new();
        contract.bootstrap(&store).unwrap();
        contract.bootstrap(&store).unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn create_uses_identifier_and_associated_args() {
        let store = InMemoryKvStore::new();
        UserContract::new()
            .create(&store, &args(&["KEY1", "id-A", r#"["b","c"]"#, "y", "z"]))
            .unwrap();
        let record = Record::from_bytes(&store.get("KEY1").unwrap().unwrap()).unwrap();
        assert_eq!(record.identifier, "id-A");
        assert_eq!(record.associated_identifiers, vec!["b", "c"]);
    }

    #[test]
    fn create_overwrites_existing_key() {
        let store = InMemoryKvStore::new();
        let contract = UserContract::new();
        contract.bootstrap(&store).unwrap();
        contract
            .create(&store, &args(&["USER0", "replaced", "", "", ""]))
            .unwrap();
        let record = Record::from_bytes(&store.get("USER0").unwrap().unwrap()).unwrap();
        assert_eq!(record, Record::seed("replaced"));
    }

    #[test]
    fn create_rejects_wrong_arity() {
        let store = InMemoryKvStore::new();
        let contract = UserContract::new();
        for n in [0, 1, 4, 6] {
            let a: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            assert!(matches!(
                contract.create(&store, &a),
                Err(ContractError::ArgumentCount { expected: 5, .. })
            ));
        }
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn query_returns_raw_bytes() {
        let store = InMemoryKvStore::new();
        store.put("raw", b"not a record").unwrap();
        let payload = UserContract::new().query(&store, &args(&["raw"])).unwrap();
        assert_eq!(payload, b"not a record");
    }

    #[test]
    fn query_miss_is_empty_success() {
        let store = InMemoryKvStore::new();
        let contract = UserContract::new();
        for _ in 0..3 {
            assert!(contract.query(&store, &args(&["nobody"])).unwrap().is_empty());
        }
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn query_rejects_wrong_arity() {
        let store = InMemoryKvStore::new();
        let contract = UserContract::new();
        assert!(matches!(
            contract.query(&store, &args(&["a", "b"])),
            Err(ContractError::ArgumentCount { expected: 1, actual: 2 })
        ));
        assert!(matches!(
            contract.query(&store, &[]),
            Err(ContractError::ArgumentCount { expected: 1, actual: 0 })
        ));
    }

    // -----------------------------------------------------------------------
    // Store failures
    // -----------------------------------------------------------------------

    #[test]
    fn bootstrap_surfaces_store_failure() {
        let err = UserContract::new().bootstrap(&ReadOnlyStore).unwrap_err();
        assert!(matches!(err, ContractError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn bootstrap_stops_after_first_failed_write() {
        let store = DownStore::default();
        assert!(UserContract::new().bootstrap(&store).is_err());
        assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn query_surfaces_read_failure() {
        let err = UserContract::new()
            .query(&DownStore::default(), &args(&["USER0"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn invoke_reports_read_failure_message() {
        let response = UserContract::new()
            .invoke(&DownStore::default(), &Invocation::new("queryUser", ["USER0"]));
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("store unavailable: peer down"));
    }

    #[test]
    fn invoke_reports_store_failure_message() {
        let response = UserContract::new().invoke(
            &ReadOnlyStore,
            &Invocation::new("createUser", ["k", "id", "", "", ""]),
        );
        assert_eq!(response.message(), Some("store unavailable: read-only"));
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    #[test]
    fn init_touches_nothing() {
        let store = InMemoryKvStore::new();
        let response = UserContract::new().init(&store);
        assert_eq!(response, Response::success(Vec::new()));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn init_ledger_ignores_arguments() {
        let store = InMemoryKvStore::new();
        let response =
            UserContract::new().invoke(&store, &Invocation::new("initLedger", ["extra"]));
        assert!(response.is_success());
        assert!(response.payload().is_empty());
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn invoke_unknown_operation() {
        let store = InMemoryKvStore::new();
        let response =
            UserContract::new().invoke(&store, &Invocation::new("deleteUser", ["USER0"]));
        assert_eq!(
            response,
            Response::error("Invalid Smart Contract function name.")
        );
    }
}
