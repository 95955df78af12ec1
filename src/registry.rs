use std::collections::HashMap;

use crate::binding::Binding;
use crate::model::{FlagError, ValueKind};

// The offending text reported when a record carries neither name.
const EMPTY_NAME: &str = "<empty>";

/// The immutable description of one declared option.
#[derive(Debug)]
pub(crate) struct OptionRecord<'a> {
    short: Option<String>,
    long: Option<String>,
    help: String,
    required: bool,
    binding: Binding<'a>,
}

impl<'a> OptionRecord<'a> {
    pub(crate) fn new(
        binding: Binding<'a>,
        short: &str,
        long: &str,
        help: &str,
        required: bool,
    ) -> Self {
        // Accept names with or without their dash prefix.
        let short = short.trim_start_matches('-');
        let long = long.trim_start_matches('-');

        Self {
            short: (!short.is_empty()).then(|| short.to_string()),
            long: (!long.is_empty()).then(|| long.to_string()),
            help: help.to_string(),
            required,
            binding,
        }
    }

    pub(crate) fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub(crate) fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn help(&self) -> &str {
        &self.help
    }

    pub(crate) fn required(&self) -> bool {
        self.required
    }

    pub(crate) fn is_boolean(&self) -> bool {
        self.binding.kind() == ValueKind::Bool
    }

    pub(crate) fn binding_mut(&mut self) -> &mut Binding<'a> {
        &mut self.binding
    }

    /// The name an option is recorded under, however it was supplied:
    /// the long name when present, otherwise the short name.
    pub(crate) fn canonical(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or(EMPTY_NAME)
    }
}

/// The ordered option records plus a flat name lookup across both forms.
///
/// Built once before parsing; during a parse call the only mutation is
/// writing through the records' bindings.
#[derive(Debug, Default)]
pub(crate) struct Registry<'a> {
    records: Vec<OptionRecord<'a>>,
    lookup: HashMap<String, usize>,
}

impl<'a> Registry<'a> {
    /// Validate and insert a record, indexing each of its present names.
    pub(crate) fn register(&mut self, record: OptionRecord<'a>) -> Result<(), FlagError> {
        if record.short.is_none() && record.long.is_none() {
            return Err(FlagError::BadSyntax(EMPTY_NAME.to_string()));
        }

        if let Some(short) = &record.short {
            self.validate(short, true)?;
        }

        if let Some(long) = &record.long {
            self.validate(long, false)?;
        }

        let index = self.records.len();

        if let Some(short) = &record.short {
            self.lookup.insert(short.clone(), index);
        }

        if let Some(long) = &record.long {
            self.lookup.insert(long.clone(), index);
        }

        self.records.push(record);

        Ok(())
    }

    fn validate(&self, name: &str, short: bool) -> Result<(), FlagError> {
        // Short names are exactly 1 character and long names never are,
        // so the two forms cannot shadow each other.
        let count = name.chars().count();

        if (short && count != 1) || (!short && count == 1) {
            return Err(FlagError::BadSyntax(name.to_string()));
        }

        if self.lookup.contains_key(name) {
            return Err(FlagError::AlreadyDefined(name.to_string()));
        }

        Ok(())
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub(crate) fn record(&self, index: usize) -> &OptionRecord<'a> {
        &self.records[index]
    }

    pub(crate) fn record_mut(&mut self, index: usize) -> &mut OptionRecord<'a> {
        &mut self.records[index]
    }

    pub(crate) fn is_boolean(&self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => self.records[index].is_boolean(),
            None => false,
        }
    }

    /// The records in registration order, for display rendering.
    pub(crate) fn records(&self) -> &[OptionRecord<'a>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn string_record<'a>(
        variable: &'a mut String,
        short: &str,
        long: &str,
    ) -> OptionRecord<'a> {
        OptionRecord::new(Binding::String(variable), short, long, "", false)
    }

    #[test]
    fn register() {
        // Setup
        let mut variable = String::default();
        let mut registry = Registry::default();

        // Execute
        registry
            .register(string_record(&mut variable, "s", "string"))
            .unwrap();

        // Verify
        assert_eq!(registry.index_of("s"), Some(0));
        assert_eq!(registry.index_of("string"), Some(0));
        assert_eq!(registry.index_of("other"), None);
        assert_eq!(registry.records().len(), 1);
    }

    #[rstest]
    #[case("s", "")]
    #[case("", "string")]
    fn register_single_name(#[case] short: &str, #[case] long: &str) {
        // Setup
        let mut variable = String::default();
        let mut registry = Registry::default();

        // Execute
        registry
            .register(string_record(&mut variable, short, long))
            .unwrap();

        // Verify
        let name = if short.is_empty() { long } else { short };
        assert_eq!(registry.index_of(name), Some(0));
    }

    #[test]
    fn register_nameless() {
        // Setup
        let mut variable = String::default();
        let mut registry = Registry::default();

        // Execute
        let error = registry
            .register(string_record(&mut variable, "", ""))
            .unwrap_err();

        // Verify
        assert_eq!(error, FlagError::BadSyntax("<empty>".to_string()));
    }

    #[rstest]
    #[case("sh", "")]
    #[case("", "l")]
    fn register_wrong_length_class(#[case] short: &str, #[case] long: &str) {
        // Setup
        let mut variable = String::default();
        let mut registry = Registry::default();

        // Execute
        let error = registry
            .register(string_record(&mut variable, short, long))
            .unwrap_err();

        // Verify
        assert_matches!(error, FlagError::BadSyntax(_));
    }

    #[rstest]
    #[case("s", "", "s", "")]
    #[case("", "long", "", "long")]
    // The registry is one flat namespace: a long name may not reuse a short
    // name's spelling, in either direction.
    #[case("s", "other", "", "other")]
    #[case("", "long", "x", "long")]
    fn register_collision(
        #[case] first_short: &str,
        #[case] first_long: &str,
        #[case] second_short: &str,
        #[case] second_long: &str,
    ) {
        // Setup
        let mut first = String::default();
        let mut second = String::default();
        let mut registry = Registry::default();
        registry
            .register(string_record(&mut first, first_short, first_long))
            .unwrap();

        // Execute
        let error = registry
            .register(string_record(&mut second, second_short, second_long))
            .unwrap_err();

        // Verify
        assert_matches!(error, FlagError::AlreadyDefined(_));
        // The registry remains usable after a rejected registration.
        let mut third = String::default();
        registry
            .register(string_record(&mut third, "z", "zeta"))
            .unwrap();
    }

    #[test]
    fn register_strips_dashes() {
        // Setup
        let mut variable = String::default();
        let mut registry = Registry::default();

        // Execute
        registry
            .register(string_record(&mut variable, "-s", "--string"))
            .unwrap();

        // Verify
        assert_eq!(registry.index_of("s"), Some(0));
        assert_eq!(registry.index_of("string"), Some(0));
    }

    #[test]
    fn is_boolean() {
        // Setup
        let mut flag = false;
        let mut text = String::default();
        let mut registry = Registry::default();
        registry
            .register(OptionRecord::new(
                Binding::Bool(&mut flag),
                "v",
                "verbose",
                "",
                false,
            ))
            .unwrap();
        registry
            .register(string_record(&mut text, "s", "string"))
            .unwrap();

        // Execute & verify
        assert!(registry.is_boolean("v"));
        assert!(registry.is_boolean("verbose"));
        assert!(!registry.is_boolean("s"));
        assert!(!registry.is_boolean("unregistered"));
    }

    #[rstest]
    #[case("s", "string", "string")]
    #[case("s", "", "s")]
    #[case("", "string", "string")]
    fn canonical(#[case] short: &str, #[case] long: &str, #[case] expected: &str) {
        // Setup
        let mut variable = String::default();

        // Execute
        let record = string_record(&mut variable, short, long);

        // Verify
        assert_eq!(record.canonical(), expected);
    }
}
