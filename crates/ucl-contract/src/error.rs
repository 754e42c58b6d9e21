use thiserror::Error;

/// Errors raised while handling an invocation.
///
/// The display text of each variant is the message returned to the caller
/// in a failure [`Response`](crate::Response).
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Invalid Smart Contract function name.")]
    UnknownOperation(String),

    #[error(transparent)]
    Store(#[from] ucl_store::StoreError),

    #[error(transparent)]
    Record(#[from] ucl_types::RecordError),
}

pub type ContractResult<T> = Result<T, ContractError>;

/// Fail with [`ContractError::ArgumentCount`] unless exactly `expected`
/// arguments were supplied.
pub(crate) fn expect_args(args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_messages() {
        let err = ContractError::ArgumentCount { expected: 5, actual: 4 };
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 5");
        let err = ContractError::ArgumentCount { expected: 1, actual: 2 };
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 1");
    }

    #[test]
    fn unknown_operation_message() {
        let err = ContractError::UnknownOperation("deleteUser".into());
        assert_eq!(err.to_string(), "Invalid Smart Contract function name.");
    }

    #[test]
    fn store_errors_pass_through() {
        let err = ContractError::from(ucl_store::StoreError::Unavailable("peer down".into()));
        assert_eq!(err.to_string(), "store unavailable: peer down");
    }

    #[test]
    fn expect_args_checks_exact_count() {
        let args = vec!["a".to_string()];
        assert!(expect_args(&args, 1).is_ok());
        assert!(matches!(
            expect_args(&args, 5),
            Err(ContractError::ArgumentCount { expected: 5, actual: 1 })
        ));
    }
}
