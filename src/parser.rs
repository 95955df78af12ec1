use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::FlagError;
use crate::registry::Registry;

/// The per-call capture of a parse: which options were supplied with what
/// raw value, and the trailing positional arguments in encounter order.
///
/// `supplied` is keyed by canonical name, so an option supplied through two
/// of its alias names still reads as a duplicate.
#[derive(Debug, Default)]
pub(crate) struct ParseResult {
    supplied: HashMap<String, String>,
    positionals: Vec<String>,
}

impl ParseResult {
    pub(crate) fn positionals(&self) -> &[String] {
        &self.positionals
    }

    #[cfg(test)]
    pub(crate) fn supplied(&self, name: &str) -> Option<&str> {
        self.supplied.get(name).map(String::as_str)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'t> {
    /// Does not read as an option; scanning stops and the token is kept.
    Positional,
    /// The literal `--`; scanning stops and the token is discarded.
    Terminator,
    /// A `-short` or `--long` form, possibly carrying an inline `=value`.
    Option {
        name: &'t str,
        inline: Option<&'t str>,
    },
}

fn classify(token: &str) -> Result<Token<'_>, FlagError> {
    let Some(stripped) = token.strip_prefix('-') else {
        return Ok(Token::Positional);
    };

    let name_part = match stripped.strip_prefix('-') {
        // Precisely `--`.
        Some("") => return Ok(Token::Terminator),
        Some(rest) => rest,
        None => stripped,
    };

    if name_part.is_empty() || name_part.starts_with('-') || name_part.starts_with('=') {
        return Err(FlagError::BadSyntax(name_part.to_string()));
    }

    // Only the first `=` separates; the value may itself contain `=`.
    match name_part.split_once('=') {
        Some((name, inline)) => Ok(Token::Option {
            name,
            inline: Some(inline),
        }),
        None => Ok(Token::Option {
            name: name_part,
            inline: None,
        }),
    }
}

// A dash followed by a digit reads as a negative number, not an option.
fn option_shaped(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// Walk the argument vector, binding option occurrences through the registry
/// until a positional or terminator stops the scan; the remainder is captured
/// verbatim.
///
/// `args[0]` is the invocation path and is never scanned.
pub(crate) fn scan<T: AsRef<str>>(
    registry: &mut Registry<'_>,
    args: &[T],
) -> Result<ParseResult, FlagError> {
    let mut result = ParseResult::default();
    let mut index = 1;

    while index < args.len() {
        let token = args[index].as_ref();

        match classify(token)? {
            Token::Positional => break,
            Token::Terminator => {
                index += 1;
                break;
            }
            Token::Option { name, inline } => {
                let (value, consumed) = match inline {
                    Some(inline) => (inline, 1),
                    None if registry.is_boolean(name) => ("", 1),
                    None => match args.get(index + 1) {
                        Some(next) if !option_shaped(next.as_ref()) => (next.as_ref(), 2),
                        _ => ("", 1),
                    },
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched option '{name}' with value '{value}'.");
                }

                apply(registry, &mut result, name, value)?;
                index += consumed;
            }
        }
    }

    if index < args.len() {
        result
            .positionals
            .extend(args[index..].iter().map(|token| token.as_ref().to_string()));
    }

    Ok(result)
}

fn apply(
    registry: &mut Registry<'_>,
    result: &mut ParseResult,
    name: &str,
    raw: &str,
) -> Result<(), FlagError> {
    let index = registry
        .index_of(name)
        .ok_or_else(|| FlagError::NotDefined(name.to_string()))?;
    let canonical = registry.record(index).canonical().to_string();

    if result.supplied.contains_key(&canonical) {
        return Err(FlagError::AlreadyDefined(name.to_string()));
    }

    let record = registry.record_mut(index);

    if record.required() && !record.is_boolean() && raw.is_empty() {
        return Err(FlagError::MissingValue(name.to_string()));
    }

    record.binding_mut().assign(name, raw)?;
    result.supplied.insert(canonical, raw.to_string());

    Ok(())
}
