//! Session state: one orchestrator plus the schema it was configured with.

use serde_json::Value;
use silo_filter::{
    ComparisonOperator, CompilerConfig, FilterOrchestrator, LogicalCombinator, MetadataField,
};
use silo_filter_wire::encode_document;
use tracing::{debug, warn};

use crate::parse::{LineCommand, HELP};

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The current filter document
    Document(Option<Value>),
    /// The declared fields
    Fields(Vec<MetadataField>),
    /// Plain text
    Text(String),
    /// Leave the session
    Quit,
}

/// CLI session over a [`FilterOrchestrator`].
pub struct SessionState {
    filters: FilterOrchestrator,
    db_type: Option<String>,
}

impl SessionState {
    pub fn new(config: &CompilerConfig) -> Self {
        let filters = FilterOrchestrator::with_config(config, |doc: Option<&Value>| {
            debug!(document = %encode_document(doc), "filter recomputed");
        });
        SessionState {
            filters,
            db_type: config.db_type.clone(),
        }
    }

    /// Prompt label, e.g. `qdrant AND`.
    pub fn prompt(&self) -> String {
        format!(
            "{} {}> ",
            self.filters.dialect(),
            self.filters.combinator()
        )
    }

    pub fn set_combinator(&mut self, combinator: LogicalCombinator) {
        self.filters.set_combinator(combinator);
    }

    pub fn document(&self) -> Option<Value> {
        self.filters.document().cloned()
    }

    /// Apply a `(field, op, value)` row.
    pub fn apply_where(&mut self, field: &str, op: &str, value: &str) -> Result<(), String> {
        self.check_field(field)?;
        self.check_operator(op);
        self.filters.set_operator(field, op);
        self.filters.set_value(field, value);
        Ok(())
    }

    /// Run one line command.
    pub fn execute(&mut self, cmd: LineCommand) -> Result<Output, String> {
        match cmd {
            LineCommand::Set { field, value } => {
                self.check_field(&field)?;
                self.filters.set_value(&field, value);
            }
            LineCommand::Op { field, op } => {
                self.check_field(&field)?;
                self.check_operator(&op);
                self.filters.set_operator(&field, op);
            }
            LineCommand::Where { field, op, value } => self.apply_where(&field, &op, &value)?,
            LineCommand::Clear { field } => {
                self.check_field(&field)?;
                self.filters.clear_field(&field);
            }
            LineCommand::Combinator(c) => self.set_combinator(c),
            LineCommand::Toggle => {
                self.filters.toggle_combinator();
            }
            LineCommand::Reset => self.filters.reset(),
            LineCommand::DbType(db_type) => {
                self.db_type = db_type;
                let fields = self.filters.fields().to_vec();
                self.filters.configure(fields, self.db_type.as_deref());
            }
            LineCommand::Show => {}
            LineCommand::Fields => return Ok(Output::Fields(self.filters.fields().to_vec())),
            LineCommand::Help => return Ok(Output::Text(HELP.to_string())),
            LineCommand::Quit => return Ok(Output::Quit),
        }
        Ok(Output::Document(self.document()))
    }

    pub fn fields(&self) -> &[MetadataField] {
        self.filters.fields()
    }

    fn check_field(&self, field: &str) -> Result<(), String> {
        if self.filters.fields().iter().any(|f| f.name == field) {
            Ok(())
        } else {
            Err(format!("Unknown field '{}'", field))
        }
    }

    // Unknown tokens are still applied; the row is then left out of the document.
    fn check_operator(&self, op: &str) {
        if ComparisonOperator::parse(op).is_none() {
            warn!(op, "unknown operator, row will be ignored");
        }
    }
}
