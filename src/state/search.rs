//! Search state machine and filter pass.
//!
//! SearchState is a sum type with two states:
//! - Inactive: browsing mode, pagination and sorting available
//! - Active: a non-empty query filters the whole table

use crate::model::{RowId, Table};

// ===== SearchQuery =====

/// Validated search query. Never empty after trimming.
///
/// Holds the text as typed; matching uses the trimmed, lowercased form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Smart constructor: returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(Self { raw, needle })
        }
    }

    /// Query as typed, untrimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lowercased text used for matching.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test against a row's full text.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one view mode at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query: rows are browsed page by page.
    #[default]
    Inactive,
    /// Non-empty query: every matching row is visible, in display order.
    Active {
        /// Query being applied.
        query: SearchQuery,
        /// Matching rows in display order.
        matches: Vec<RowId>,
    },
}

impl SearchState {
    /// Whether a query is applied.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active { .. })
    }

    /// Applied query, if any.
    pub fn query(&self) -> Option<&SearchQuery> {
        match self {
            SearchState::Active { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    /// Matching rows; zero when inactive.
    pub fn match_count(&self) -> usize {
        match self {
            SearchState::Active { matches, .. } => matches.len(),
            SearchState::Inactive => 0,
        }
    }
}

// ===== NoResultsBanner =====

/// The "no results" notice shown below the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsBanner {
    query: String,
}

impl NoResultsBanner {
    /// Banner for a query with no matches.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Query as shown in the message.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// `No results found for "<query>"`
    pub fn message(&self) -> String {
        format!("No results found for \"{}\"", self.query)
    }
}

// ===== Filter =====

/// Rows of `order` whose full text contains the query, keeping display order.
///
/// Considers every row regardless of the current page.
pub fn filter_rows(table: &Table, order: &[RowId], query: &SearchQuery) -> Vec<RowId> {
    order
        .iter()
        .copied()
        .filter(|id| {
            table
                .row(*id)
                .is_some_and(|row| query.matches(&row.full_text()))
        })
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
