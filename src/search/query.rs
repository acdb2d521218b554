//! Query input normalization.
//!
//! A search request arrives either as free text or as an ordered list of
//! explicit filter terms. Normalization produces the canonical value handed
//! to the rest of the pipeline, or nothing at all when there is no query to
//! run — an empty query is a silent no-op, not an error.

use serde::{Deserialize, Serialize};

/// One explicit filter term of a structured query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    pub field: String,
    pub value: String,
}

impl FilterTerm {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A search request: free text or an ordered sequence of filter terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    FreeText(String),
    Structured(Vec<FilterTerm>),
}

/// Canonical query ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedQuery {
    /// Trimmed free text; exclusion clauses may still be appended.
    Text(String),
    /// Serialized filter terms; bypasses exclusion handling entirely.
    Structured(String),
}

impl NormalizedQuery {
    pub fn is_structured(&self) -> bool {
        matches!(self, NormalizedQuery::Structured(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            NormalizedQuery::Text(value) | NormalizedQuery::Structured(value) => value,
        }
    }
}

/// Produce the canonical form, or `None` when there is nothing to search for.
pub fn normalize(input: &QueryInput) -> Option<NormalizedQuery> {
    match input {
        QueryInput::FreeText(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(NormalizedQuery::Text(trimmed.to_string()))
        }
        QueryInput::Structured(terms) => {
            if terms.is_empty() {
                return None;
            }
            let serialized = serde_json::to_string(terms).ok()?;
            Some(NormalizedQuery::Structured(serialized))
        }
    }
}
