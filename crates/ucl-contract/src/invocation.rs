/// Status codes carried by a [`Response`].
pub mod status {
    /// The invocation succeeded.
    pub const OK: i32 = 200;
    /// The invocation failed.
    pub const ERROR: i32 = 500;
}

/// A single call from the hosting platform: operation name plus
/// positional arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw argument vector into function name and parameters.
    ///
    /// The first element names the function; an empty vector yields an
    /// empty function name, which no operation matches.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = parts.into_iter().map(Into::into);
        let function = iter.next().unwrap_or_default();
        Self {
            function,
            args: iter.collect(),
        }
    }
}

/// The contract's answer to an invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Success with an opaque payload (possibly empty).
    Success { payload: Vec<u8> },
    /// Failure with a human-readable message.
    Error { message: String },
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self::Success { payload }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn status(&self) -> i32 {
        match self {
            Self::Success { .. } => status::OK,
            Self::Error { .. } => status::ERROR,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload of a successful response; empty for failures.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Success { payload } => payload,
            Self::Error { .. } => &[],
        }
    }

    /// The message of a failed response.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}
