use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// Arguments `createUser` requires: key, identifier, associated, and two reserved.
pub const CREATE_USER_ARGS: usize = 5;

/// Arguments `queryUser` requires: the key.
pub const QUERY_USER_ARGS: usize = 1;

/// The operations the contract understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `queryUser`: read the raw bytes stored under a key.
    QueryUser,
    /// `initLedger`: write the fixed seed records.
    InitLedger,
    /// `createUser`: write one record under a caller-chosen key.
    CreateUser,
}

impl Operation {
    /// Every operation, in dispatch order.
    pub const ALL: [Operation; 3] = [Self::QueryUser, Self::InitLedger, Self::CreateUser];

    /// Resolve an operation by its exact, case-sensitive name.
    pub fn parse(name: &str) -> Result<Self, ContractError> {
        match name {
            "queryUser" => Ok(Self::QueryUser),
            "initLedger" => Ok(Self::InitLedger),
            "createUser" => Ok(Self::CreateUser),
            other => Err(ContractError::UnknownOperation(other.to_string())),
        }
    }

    /// The name the platform uses to invoke this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueryUser => "queryUser",
            Self::InitLedger => "initLedger",
            Self::CreateUser => "createUser",
        }
    }

    /// Required argument count, or `None` if arguments are ignored.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::QueryUser => Some(QUERY_USER_ARGS),
            Self::InitLedger => None,
            Self::CreateUser => Some(CREATE_USER_ARGS),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::parse(op.name()).unwrap(), op);
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(Operation::parse("queryuser").is_err());
        assert!(Operation::parse("QueryUser").is_err());
        assert!(Operation::parse(" queryUser").is_err());
    }

    #[test]
    fn unknown_name_is_reported() {
        match Operation::parse("deleteUser") {
            Err(ContractError::UnknownOperation(name)) => assert_eq!(name, "deleteUser"),
            other => panic!("expected UnknownOperation, got {other:?}"),
        }
    }

    #[test]
    fn arities() {
        assert_eq!(Operation::QueryUser.arity(), Some(1));
        assert_eq!(Operation::CreateUser.arity(), Some(5));
        assert_eq!(Operation::InitLedger.arity(), None);
    }
}
