use thiserror::Error;

/// The kind of value an option coerces its raw token into.
///
/// The kind decides two things during parsing: how the raw string is
/// converted, and whether the option consumes a following token
/// (a [`ValueKind::Bool`] never does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Taken verbatim; the empty string is a valid value.
    String,
    /// Base-10 signed integer (`i64`).
    Int,
    /// Base-10 unsigned integer (`u64`).
    Uint,
    /// Floating point literal (`f64`).
    Double,
    /// Presence flag: `""` and `"1"` read as `true`, anything else as `false`.
    Bool,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The failure family for both registration and parsing.
///
/// Every variant carries the offending option name or token text.
/// The first failure aborts the call that produced it; bindings written
/// earlier in the same `parse` call are not rolled back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
    /// A malformed token, or a registration name of the wrong length class.
    #[error("flag: bad syntax '{0}'")]
    BadSyntax(String),

    /// An option name absent from the registry.
    #[error("flag: not defined '{0}'")]
    NotDefined(String),

    /// A name registered twice, or an option supplied twice in one parse call.
    #[error("flag: already defined '{0}'")]
    AlreadyDefined(String),

    /// A required option resolved to an empty value.
    #[error("flag: value is missing '{0}'")]
    MissingValue(String),

    /// A value that does not coerce to the option's kind.
    #[error("flag: invalid value '{value}' for '{option}'")]
    InvalidValue {
        /// The option the value was supplied to.
        option: String,
        /// The raw value text.
        value: String,
    },
}

impl FlagError {
    /// The offending option name or token text.
    pub fn offending(&self) -> &str {
        match self {
            FlagError::BadSyntax(text)
            | FlagError::NotDefined(text)
            | FlagError::AlreadyDefined(text)
            | FlagError::MissingValue(text) => text,
            FlagError::InvalidValue { option, .. } => option,
        }
    }
}
