use crate::registry::OptionRecord;

// Width of the name column in the help listing, dash prefix included.
const NAME_COLUMN_WIDTH: usize = 16;
const NAME_INDENT: usize = 2;

/// Render the one-line usage summary:
/// the program name, every record's bracketed names, and the
/// trailing positional marker.
pub(crate) fn usage(program: &str, records: &[OptionRecord<'_>]) -> String {
    let mut line = format!("usage: {program} ");

    for record in records {
        line.push('[');

        if let Some(short) = record.short() {
            line.push('-');
            line.push_str(short);

            if record.long().is_some() {
                line.push(',');
            }
        }

        if let Some(long) = record.long() {
            line.push_str("--");
            line.push_str(long);
        }

        line.push_str("] ");
    }

    line.push_str("<arguments...>");
    line
}

/// Render the full help message.
///
/// Without a description this is just the usage line. Otherwise: the
/// description, an `options:` listing of every short name and then every
/// long name with their help texts, and the usage line.
pub(crate) fn help(program: &str, description: &str, records: &[OptionRecord<'_>]) -> String {
    if description.is_empty() {
        return usage(program, records);
    }

    let indent = NAME_INDENT;
    let width = NAME_COLUMN_WIDTH;
    let mut out = format!("{description}\n\noptions:\n\n");

    for record in records {
        if let Some(short) = record.short() {
            let name = format!("{:indent$}-{short}", "");
            out.push_str(&format!("{name:<width$}{}\n", record.help()));
        }
    }

    for record in records {
        if let Some(long) = record.long() {
            let name = format!("{:indent$}--{long}", "");
            out.push_str(&format!("{name:<width$}{}\n", record.help()));
        }
    }

    out.push('\n');
    out.push_str(&usage(program, records));
    out
}
