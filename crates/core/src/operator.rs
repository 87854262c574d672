//! Comparison operators and logical combinators
//!
//! Both are dialect-neutral. Mapping onto concrete query tokens lives in the
//! dialect crate.

use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract comparison applied to one metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOperator {
    /// Equal (default when a row has no explicit choice)
    #[default]
    Eq,
    /// Not equal
    Ne,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
}

impl ComparisonOperator {
    /// Every operator, in table order
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Eq,
        ComparisonOperator::Ne,
        ComparisonOperator::Gt,
        ComparisonOperator::Gte,
        ComparisonOperator::Lt,
        ComparisonOperator::Lte,
    ];

    /// Token used in UI state and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Ne => "ne",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
        }
    }

    /// Parse from a token (case-insensitive, symbolic aliases accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "eq" | "=" | "==" => Some(ComparisonOperator::Eq),
            "ne" | "!=" | "<>" => Some(ComparisonOperator::Ne),
            "gt" | ">" => Some(ComparisonOperator::Gt),
            "gte" | ">=" => Some(ComparisonOperator::Gte),
            "lt" | "<" => Some(ComparisonOperator::Lt),
            "lte" | "<=" => Some(ComparisonOperator::Lte),
            _ => None,
        }
    }

    /// True for ordering comparisons (gt, gte, lt, lte)
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            ComparisonOperator::Gt
                | ComparisonOperator::Gte
                | ComparisonOperator::Lt
                | ComparisonOperator::Lte
        )
    }
}

impl FromStr for ComparisonOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::parse(s).ok_or_else(|| FilterError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How active conditions are joined in one compiled document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalCombinator {
    /// Every condition must hold
    #[default]
    #[serde(alias = "AND")]
    And,
    /// At least one condition must hold
    #[serde(alias = "OR")]
    Or,
}

impl LogicalCombinator {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalCombinator::And => "and",
            LogicalCombinator::Or => "or",
        }
    }

    /// Parse from a token (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "and" | "&&" => Some(LogicalCombinator::And),
            "or" | "||" => Some(LogicalCombinator::Or),
            _ => None,
        }
    }

    /// The other combinator
    pub fn toggled(self) -> Self {
        match self {
            LogicalCombinator::And => LogicalCombinator::Or,
            LogicalCombinator::Or => LogicalCombinator::And,
        }
    }
}

impl FromStr for LogicalCombinator {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::parse(s).ok_or_else(|| FilterError::InvalidCombinator(s.to_string()))
    }
}

impl fmt::Display for LogicalCombinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalCombinator::And => "AND",
            LogicalCombinator::Or => "OR",
        })
    }
}
