//! Sort resolution.

use std::fmt;

use crate::QueryError;

/// Product fields a search may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Price in minor currency units.
    Price,
    /// Units sold.
    Sold,
    /// Number of reviews.
    CommentCount,
    /// Last modification time.
    UpdatedAt,
}

impl SortField {
    /// All sortable fields.
    pub const ALL: [Self; 4] = [Self::Price, Self::Sold, Self::CommentCount, Self::UpdatedAt];

    /// Resolves a requested sort name. Accepts both the index names and the wire names.
    pub fn parse(name: &str) -> Result<Self, QueryError> {
        match name.trim() {
            "price" => Ok(Self::Price),
            "sold" => Ok(Self::Sold),
            "comment_count" | "commentCount" => Ok(Self::CommentCount),
            "updated_at" | "updateTime" => Ok(Self::UpdatedAt),
            other => Err(QueryError::UnknownSortField(other.to_string())),
        }
    }

    /// Index field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Sold => "sold",
            Self::CommentCount => "comment_count",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Ascending when `is_asc`, otherwise descending.
    pub fn from_is_asc(is_asc: bool) -> Self {
        if is_asc { Self::Asc } else { Self::Desc }
    }
}

/// A single-key sort. Ties are broken by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to order by.
    pub field: SortField,
    /// Direction.
    pub order: SortOrder,
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.order {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        write!(f, "{} {dir}", self.field.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_and_wire_names() {
        assert_eq!(SortField::parse("price"), Ok(SortField::Price));
        assert_eq!(SortField::parse(" sold "), Ok(SortField::Sold));
        assert_eq!(SortField::parse("commentCount"), Ok(SortField::CommentCount));
        assert_eq!(SortField::parse("comment_count"), Ok(SortField::CommentCount));
        assert_eq!(SortField::parse("updateTime"), Ok(SortField::UpdatedAt));
        assert_eq!(SortField::parse("updated_at"), Ok(SortField::UpdatedAt));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert_eq!(
            SortField::parse("name"),
            Err(QueryError::UnknownSortField("name".into()))
        );
        assert!(SortField::parse("Price").is_err());
    }

    #[test]
    fn names_round_trip() {
        for field in SortField::ALL {
            assert_eq!(SortField::parse(field.name()), Ok(field));
        }
    }

    #[test]
    fn display() {
        let spec = SortSpec {
            field: SortField::Sold,
            order: SortOrder::from_is_asc(false),
        };
        assert_eq!(spec.to_string(), "sold desc");
    }
}
