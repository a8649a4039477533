//! The product document projection.

use serde::{Deserialize, Serialize};
use tantivy::{
    DateTime, TantivyDocument,
    schema::{Field, OwnedValue, Value},
};

use crate::{IndexError, schema::ProductSchema};

/// A product as stored in and returned from the index.
///
/// Serialized with the public wire names (`commentCount`, `isAD`, `updateTime`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Product identifier.
    pub id: u64,
    /// Product name. Search results may carry highlight markup here.
    pub name: String,
    /// Price in minor currency units.
    #[serde(default)]
    pub price: u64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Category keyword.
    #[serde(default)]
    pub category: String,
    /// Brand keyword.
    #[serde(default)]
    pub brand: String,
    /// Units sold.
    #[serde(default)]
    pub sold: u64,
    /// Number of reviews.
    #[serde(default)]
    pub comment_count: u64,
    /// Paid placement flag.
    #[serde(default, rename = "isAD")]
    pub promoted: bool,
    /// Last modification time in unix seconds.
    #[serde(default, rename = "updateTime")]
    pub updated_at: i64,
}

impl Document {
    /// Converts the document into its Tantivy representation.
    pub(crate) fn to_tantivy(&self, schema: &ProductSchema) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        doc.add_u64(schema.id, self.id);
        doc.add_text(schema.name, &self.name);
        doc.add_u64(schema.price, self.price);
        doc.add_text(schema.image, &self.image);
        // Blank keywords are left out so they never form a facet bucket.
        for (field, keyword) in [(schema.category, &self.category), (schema.brand, &self.brand)] {
            if !keyword.trim().is_empty() {
                doc.add_text(field, keyword);
            }
        }
        doc.add_u64(schema.sold, self.sold);
        doc.add_u64(schema.comment_count, self.comment_count);
        doc.add_bool(schema.promoted, self.promoted);
        doc.add_date(
            schema.updated_at,
            DateTime::from_timestamp_secs(self.updated_at),
        );
        doc
    }

    /// Rebuilds a document from its stored fields.
    ///
    /// `id` and `name` are required; every other field falls back to its zero value.
    pub(crate) fn from_stored(
        doc: &TantivyDocument,
        schema: &ProductSchema,
    ) -> Result<Self, IndexError> {
        let id = first(doc, schema.id)
            .and_then(|v| v.as_u64())
            .ok_or_else(|| IndexError::decode("document", "stored document has no id"))?;
        let name = first(doc, schema.name)
            .and_then(|v| v.as_str())
            .ok_or_else(|| IndexError::decode("document", format!("product {id} has no name")))?
            .to_string();

        Ok(Self {
            id,
            name,
            price: u64_field(doc, schema.price),
            image: text_field(doc, schema.image),
            category: text_field(doc, schema.category),
            brand: text_field(doc, schema.brand),
            sold: u64_field(doc, schema.sold),
            comment_count: u64_field(doc, schema.comment_count),
            promoted: first(doc, schema.promoted)
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            updated_at: first(doc, schema.updated_at)
                .and_then(|v| v.as_datetime())
                .map_or(0, DateTime::into_timestamp_secs),
        })
    }
}

/// First stored value of a field.
fn first(doc: &TantivyDocument, field: Field) -> Option<&OwnedValue> {
    doc.get_first(field)
}

/// Reads a text field, returning an empty string if missing.
fn text_field(doc: &TantivyDocument, field: Field) -> String {
    first(doc, field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Reads a u64 field, returning zero if missing.
fn u64_field(doc: &TantivyDocument, field: Field) -> u64 {
    first(doc, field).and_then(|v| v.as_u64()).unwrap_or(0)
}
