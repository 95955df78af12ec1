use crate::binding::Binding;
use crate::model::FlagError;
use crate::parser::{scan, ParseResult};
use crate::printer;
use crate::registry::{OptionRecord, Registry};

/// The set of declared options for one program, bound to caller storage.
///
/// Build the set by `bind`ing options, then hand it the raw argument vector.
/// Parsing writes each supplied option's value through its binding; anything
/// after the options becomes a positional argument.
///
/// ### Example
/// ```
/// use flagset::FlagSet;
///
/// let mut dir: String = "/var".to_string();
/// let mut verbose: bool = false;
///
/// let mut set = FlagSet::new("flagtest", "a demo program");
/// set.bind_string(&mut dir, "d", "dir", "set the working directory", false).unwrap();
/// set.bind_bool(&mut verbose, "v", "verbose", "increase verbosity", false).unwrap();
///
/// set.parse(&["flagtest", "-d", "/tmp", "-v", "--", "extra"]).unwrap();
///
/// assert_eq!(set.positional(0), "extra");
/// drop(set);
/// assert_eq!(dir, "/tmp");
/// assert!(verbose);
/// ```
pub struct FlagSet<'a> {
    program: String,
    description: String,
    registry: Registry<'a>,
    result: ParseResult,
}

impl<'a> FlagSet<'a> {
    /// Create a flag set.
    ///
    /// An empty `program` defaults from the invocation path (`args[0]`) the
    /// first time [`FlagSet::parse`] runs. The `description` feeds
    /// [`FlagSet::help`] only; when empty, `help()` collapses to `usage()`.
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            description: description.into(),
            registry: Registry::default(),
            result: ParseResult::default(),
        }
    }

    /// Bind a string option. The raw value is taken verbatim; empty is valid.
    pub fn bind_string(
        &mut self,
        destination: &'a mut String,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.bind(Binding::String(destination), short, long, help, required)
    }

    /// Bind a base-10 signed integer option.
    pub fn bind_int(
        &mut self,
        destination: &'a mut i64,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.bind(Binding::Int(destination), short, long, help, required)
    }

    /// Bind a base-10 unsigned integer option.
    pub fn bind_uint(
        &mut self,
        destination: &'a mut u64,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.bind(Binding::Uint(destination), short, long, help, required)
    }

    /// Bind a floating point option.
    pub fn bind_double(
        &mut self,
        destination: &'a mut f64,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.bind(Binding::Double(destination), short, long, help, required)
    }

    /// Bind a boolean option.
    ///
    /// Booleans are presence flags: they never consume a following token,
    /// and only an inline value of `""` or `"1"` reads as `true`.
    pub fn bind_bool(
        &mut self,
        destination: &'a mut bool,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.bind(Binding::Bool(destination), short, long, help, required)
    }

    fn bind(
        &mut self,
        binding: Binding<'a>,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Result<(), FlagError> {
        self.registry
            .register(OptionRecord::new(binding, short, long, help, required))
    }

    /// Parse the argument vector, writing supplied values through the
    /// bindings and capturing the trailing positional arguments.
    ///
    /// `args[0]` is the program invocation path; scanning starts at
    /// `args[1]`. The previous call's result is discarded at the start of
    /// each call, so repeated calls do not accumulate supplied-option state.
    ///
    /// On failure the call aborts at the offending token; bindings written
    /// earlier in the same call keep their new values. This set never prints
    /// and never exits — surface the error, [`FlagSet::usage`], and the exit
    /// status from the caller.
    pub fn parse<T: AsRef<str>>(&mut self, args: &[T]) -> Result<(), FlagError> {
        if self.program.is_empty() {
            if let Some(path) = args.first() {
                self.program = path.as_ref().to_string();
            }
        }

        self.result = scan(&mut self.registry, args)?;
        Ok(())
    }

    /// The program name: as constructed, or defaulted from the invocation path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The number of positional arguments captured by the last parse.
    pub fn positional_count(&self) -> usize {
        self.result.positionals().len()
    }

    /// The positional argument at `index`, in encounter order.
    ///
    /// An out-of-range `index` yields the empty string rather than failing.
    pub fn positional(&self, index: usize) -> String {
        self.result
            .positionals()
            .get(index)
            .cloned()
            .unwrap_or_default()
    }

    /// All positional arguments captured by the last parse, in encounter order.
    pub fn positionals(&self) -> &[String] {
        self.result.positionals()
    }

    /// The one-line usage summary over every registered option.
    pub fn usage(&self) -> String {
        printer::usage(&self.program, self.registry.records())
    }

    /// The full help message; identical to [`FlagSet::usage`] when no
    /// description was supplied.
    pub fn help(&self) -> String {
        printer::help(&self.program, &self.description, self.registry.records())
    }
}
