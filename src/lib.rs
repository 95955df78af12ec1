//! `flagset` is a flag-style command line option parser for Rust.
//!
//! Options are declared up front against caller-owned variables: each
//! `bind_*` call names an option (a 1-character short form, a longer long
//! form, or both) and takes an exclusive reference to the destination the
//! parsed value is written into. [`FlagSet::parse`] then walks the raw
//! argument vector, coerces each supplied value to its destination's type,
//! and collects everything after the options as positional arguments.
//!
//! The token syntax:
//! * `-n VALUE` / `--name VALUE`: a detached value. A following token is
//! consumed as the value unless it reads as another option. A leading dash
//! followed by a digit reads as a negative number, so `--limit -99` works.
//! * `-n=VALUE` / `--name=VALUE`: an inline value; no token is consumed.
//! * `-b` / `--boolean`: boolean options are presence flags. They never
//! consume a following token; supplying one sets its destination to `true`.
//! * `--`: ends option scanning and is itself discarded.
//! * Any token not starting with `-` ends option scanning and becomes the
//! first positional argument.
//!
//! Each option may be supplied at most once per parse call, no matter which
//! of its names is used. Malformed input surfaces as a [`FlagError`] naming
//! the offending token; the set itself never prints and never exits.
//!
//! # Usage
//! ```
//! use flagset::FlagSet;
//!
//! let mut dir: String = "/var".to_string();
//! let mut limit: i64 = 0;
//! let mut verbose: bool = false;
//!
//! let mut set = FlagSet::new("flagtest", "flagtest shows how to use the flag library");
//! set.bind_string(&mut dir, "d", "dir", "set the working directory", false).unwrap();
//! set.bind_int(&mut limit, "c", "limit", "limit recursion level", false).unwrap();
//! set.bind_bool(&mut verbose, "v", "verbose", "increase verbosity", false).unwrap();
//!
//! match set.parse(&["flagtest", "--dir", "/tmp", "-c", "-2", "-v", "input.txt"]) {
//!     Ok(()) => {
//!         assert_eq!(set.positionals(), &["input.txt".to_string()]);
//!     }
//!     Err(error) => {
//!         // The caller owns the exit path: print the error plus the usage
//!         // line, then terminate with a non-zero status.
//!         eprintln!("{error}");
//!         eprintln!("{}", set.usage());
//!     }
//! }
//!
//! drop(set);
//! assert_eq!(dir, "/tmp");
//! assert_eq!(limit, -2);
//! assert!(verbose);
//! ```
//!
//! Note that a failed parse call leaves the destinations partially updated:
//! options processed before the offending token keep their parsed values.
//! Re-initialize the variables before relying on them after a failure.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events from the parse driver.
#![deny(missing_docs)]
mod api;
mod binding;
mod model;
mod parser;
mod printer;
mod registry;

pub use api::FlagSet;
pub use model::{FlagError, ValueKind};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
