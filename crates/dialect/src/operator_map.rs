//! Abstract operator → dialect token table
//!
//! | Abstract | Postgres-vector | Qdrant |
//! |----------|-----------------|--------|
//! | eq | eq | match |
//! | ne | ne | must_not_match |
//! | gt | gt | gt |
//! | gte | gte | gte |
//! | lt | lt | lt |
//! | lte | lte | lte |

use silo_filter_core::{BackendDialect, ComparisonOperator};

/// Qdrant token for equality
pub const QDRANT_MATCH: &str = "match";

/// Qdrant token for negated equality; always routed to `must_not`
pub const QDRANT_MUST_NOT_MATCH: &str = "must_not_match";

/// Concrete token for an operator in a dialect
pub fn native_token(dialect: BackendDialect, op: ComparisonOperator) -> &'static str {
    match (dialect, op) {
        (BackendDialect::Qdrant, ComparisonOperator::Eq) => QDRANT_MATCH,
        (BackendDialect::Qdrant, ComparisonOperator::Ne) => QDRANT_MUST_NOT_MATCH,
        (_, op) => op.as_str(),
    }
}

/// Resolve a UI operator token against the table.
///
/// `None` means the token names no table row; the caller drops the field.
pub fn resolve_operator(
    dialect: BackendDialect,
    token: &str,
) -> Option<(ComparisonOperator, &'static str)> {
    let op = ComparisonOperator::parse(token)?;
    Some((op, native_token(dialect, op)))
}
