//! The raw search request.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

/// Raw search criteria as received from a caller.
///
/// Field names follow the public wire format (`minPrice`, `sortBy`, `pageNo`, ...). Numeric and
/// boolean fields accept either JSON values or strings, and blank strings count as absent, so
/// the same type deserializes from a JSON body and from a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free text matched against product names.
    pub key: Option<String>,
    /// Exact category filter.
    pub category: Option<String>,
    /// Exact brand filter.
    pub brand: Option<String>,
    /// Inclusive lower price bound, in minor currency units.
    #[serde(deserialize_with = "lenient")]
    pub min_price: Option<u64>,
    /// Inclusive upper price bound, in minor currency units.
    #[serde(deserialize_with = "lenient")]
    pub max_price: Option<u64>,
    /// Field to sort by. Blank means relevance ordering.
    pub sort_by: Option<String>,
    /// Sort ascending instead of descending.
    #[serde(deserialize_with = "lenient_flag")]
    pub is_asc: bool,
    /// 1-based page number. Absent means the first page.
    #[serde(deserialize_with = "lenient")]
    pub page_no: Option<u32>,
    /// Page size. Absent means the configured default.
    #[serde(deserialize_with = "lenient")]
    pub page_size: Option<u32>,
}

impl SearchQuery {
    /// Returns the sort field if one was requested.
    pub fn sort_field(&self) -> Option<&str> {
        non_blank(self.sort_by.as_deref())
    }
}

/// Returns the trimmed value when it has any non-whitespace content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Deserializes an optional scalar from either its native form or a string.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    /// Either the value itself or its textual form.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        /// Native value, as in JSON.
        Value(T),
        /// Text, as in a query string.
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => match text.trim() {
            "" => Ok(None),
            trimmed => trimmed.parse().map(Some).map_err(de::Error::custom),
        },
    }
}

/// Deserializes a flag that defaults to false when blank.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, bool>(deserializer)?.unwrap_or(false))
}
