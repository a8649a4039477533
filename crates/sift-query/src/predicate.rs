//! Engine-neutral predicate tree.
//!
//! A [`PredicateTree`] is the AND of at most one text clause and any number of filter clauses.
//! Text clauses contribute to relevance; filter clauses only restrict the match set.

use std::fmt;

/// Free-text match against the product name.
///
/// The text is analyzed by the index; any analyzed token may match and documents matching
/// more tokens score higher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    /// Trimmed, non-empty query text.
    text: String,
}

impl TextMatch {
    /// Name of the field text clauses search.
    pub const FIELD: &'static str = "name";

    /// Creates a text clause from already-trimmed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Keyword fields that support exact matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordField {
    /// Product category.
    Category,
    /// Product brand.
    Brand,
}

impl KeywordField {
    /// Index field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Brand => "brand",
        }
    }
}

/// Numeric fields that support range filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    /// Product price in minor currency units.
    Price,
}

impl NumericField {
    /// Index field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Price => "price",
        }
    }
}

/// A non-scoring restriction on the match set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Field value equals `value` exactly.
    Exact {
        /// Field to compare.
        field: KeywordField,
        /// Required value.
        value: String,
    },
    /// Field value is at least `value`.
    AtLeast {
        /// Field to compare.
        field: NumericField,
        /// Inclusive lower bound.
        value: u64,
    },
    /// Field value is at most `value`.
    AtMost {
        /// Field to compare.
        field: NumericField,
        /// Inclusive upper bound.
        value: u64,
    },
}

/// The AND-combination of an optional text clause and filter clauses.
///
/// A tree with no clauses matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateTree {
    /// The single relevance-bearing clause.
    text: Option<TextMatch>,
    /// Restrictions, in compile order.
    filters: Vec<FilterClause>,
}

impl PredicateTree {
    /// Creates a tree from its clauses.
    pub fn new(text: Option<TextMatch>, filters: Vec<FilterClause>) -> Self {
        Self { text, filters }
    }

    /// A tree matching every document.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// The text clause, if any.
    pub fn text(&self) -> Option<&TextMatch> {
        self.text.as_ref()
    }

    /// The filter clauses.
    pub fn filters(&self) -> &[FilterClause] {
        &self.filters
    }

    /// True when the tree has no clauses at all.
    pub fn is_match_all(&self) -> bool {
        self.text.is_none() && self.filters.is_empty()
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { field, value } => write!(f, "{}={value:?}", field.name()),
            Self::AtLeast { field, value } => write!(f, "{}>={value}", field.name()),
            Self::AtMost { field, value } => write!(f, "{}<={value}", field.name()),
        }
    }
}

impl fmt::Display for PredicateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match_all() {
            return write!(f, "*");
        }

        let mut first = true;
        if let Some(text) = &self.text {
            write!(f, "{}:{:?}", TextMatch::FIELD, text.text())?;
            first = false;
        }
        for clause in &self.filters {
            if !first {
                write!(f, " AND ")?;
            }
            write!(f, "{clause}")?;
            first = false;
        }
        Ok(())
    }
}
