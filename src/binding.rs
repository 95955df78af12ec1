use crate::model::{FlagError, ValueKind};

/// An exclusive, non-owning reference into caller storage, tagged by kind.
///
/// The closed set of variants replaces a type-erased pointer plus a separate
/// tag field; a kind/destination mismatch is unrepresentable.
/// The caller retains ownership of the destination for the lifetime `'a` —
/// the binding only writes through it while a parse call is in progress.
#[derive(Debug)]
pub(crate) enum Binding<'a> {
    String(&'a mut String),
    Int(&'a mut i64),
    Uint(&'a mut u64),
    Double(&'a mut f64),
    Bool(&'a mut bool),
}

impl<'a> Binding<'a> {
    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Binding::String(_) => ValueKind::String,
            Binding::Int(_) => ValueKind::Int,
            Binding::Uint(_) => ValueKind::Uint,
            Binding::Double(_) => ValueKind::Double,
            Binding::Bool(_) => ValueKind::Bool,
        }
    }

    /// Coerce `raw` per the binding's kind and write it through.
    ///
    /// `option` names the option under coercion; it only feeds the error value.
    pub(crate) fn assign(&mut self, option: &str, raw: &str) -> Result<(), FlagError> {
        match self {
            Binding::String(destination) => {
                **destination = raw.to_string();
            }
            Binding::Int(destination) => {
                **destination = coerce::<i64>(option, raw)?;
            }
            Binding::Uint(destination) => {
                **destination = coerce::<u64>(option, raw)?;
            }
            Binding::Double(destination) => {
                **destination = coerce::<f64>(option, raw)?;
            }
            Binding::Bool(destination) => {
                // A boolean option is a presence flag, not a true/false switch.
                // The empty value (option present without a token) reads as true.
                **destination = raw.is_empty() || raw == "1";
            }
        }

        Ok(())
    }
}

fn coerce<T: std::str::FromStr>(option: &str, raw: &str) -> Result<T, FlagError> {
    T::from_str(raw).map_err(|_| FlagError::InvalidValue {
        option: option.to_string(),
        value: raw.to_string(),
    })
}
