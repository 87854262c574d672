//! Line → LineCommand conversion for REPL and pipe mode.
//!
//! Lines are split shell-style (quotes group words). Values may span several
//! words: `set title The Rust Book` sets `title` to `The Rust Book`.

use silo_filter::LogicalCombinator;

/// One parsed REPL/pipe line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Set a row's raw value
    Set { field: String, value: String },
    /// Set a row's operator token
    Op { field: String, op: String },
    /// Set operator and value at once
    Where {
        field: String,
        op: String,
        value: String,
    },
    /// Remove a row
    Clear { field: String },
    /// Pick a combinator
    Combinator(LogicalCombinator),
    /// Flip the combinator
    Toggle,
    /// Remove every row
    Reset,
    /// Print the current document
    Show,
    /// List declared fields
    Fields,
    /// Change the backend dbType (no argument clears it)
    DbType(Option<String>),
    /// Print usage
    Help,
    /// Leave the session
    Quit,
}

/// Usage text for `help`.
pub const HELP: &str = "\
set <field> <value...>        set a row's value (empty clears the value)
op <field> <op>               set a row's operator (eq ne gt gte lt lte)
where <field> <op> <value...> set operator and value together
clear <field>                 remove a row
and | or | toggle             choose how rows are combined
reset                         remove every row
dbtype [type]                 switch backend (QDRANT or anything else)
show                          print the compiled document
fields                        list declared fields
help                          this text
quit                          leave";

/// Parse a line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<LineCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shlex::split(trimmed).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let mut parts = words.into_iter();
    let cmd = match parts.next() {
        Some(c) => c.to_lowercase(),
        None => return Ok(None),
    };
    let rest: Vec<String> = parts.collect();

    let command = match cmd.as_str() {
        "set" => {
            let (field, value) = split_field(&rest, "set <field> <value...>")?;
            LineCommand::Set { field, value }
        }
        "op" => match rest.as_slice() {
            [field, op] => LineCommand::Op {
                field: field.clone(),
                op: op.clone(),
            },
            _ => return Err("Usage: op <field> <op>".to_string()),
        },
        "where" => match rest.as_slice() {
            [field, op, value @ ..] if !value.is_empty() => LineCommand::Where {
                field: field.clone(),
                op: op.clone(),
                value: value.join(" "),
            },
            _ => return Err("Usage: where <field> <op> <value...>".to_string()),
        },
        "clear" => match rest.as_slice() {
            [field] => LineCommand::Clear {
                field: field.clone(),
            },
            _ => return Err("Usage: clear <field>".to_string()),
        },
        "and" => LineCommand::Combinator(LogicalCombinator::And),
        "or" => LineCommand::Combinator(LogicalCombinator::Or),
        "toggle" => LineCommand::Toggle,
        "reset" => LineCommand::Reset,
        "show" => LineCommand::Show,
        "fields" => LineCommand::Fields,
        "dbtype" => LineCommand::DbType(rest.first().cloned()),
        "help" => LineCommand::Help,
        "quit" | "exit" => LineCommand::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(Some(command))
}

fn split_field(rest: &[String], usage: &str) -> Result<(String, String), String> {
    match rest {
        [field, value @ ..] => Ok((field.clone(), value.join(" "))),
        [] => Err(format!("Usage: {}", usage)),
    }
}
