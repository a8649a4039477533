//! Index schema definition for the product index.
//!
//! Defines the Tantivy schema with all fields of a product:
//! - `id`: Product identifier (u64, indexed for lookup, stored)
//! - `name`: Product name (text, analyzed, stored)
//! - `price`: Price in minor currency units (u64, indexed for ranges, fast for sorting)
//! - `image`: Image URL (stored only)
//! - `category`, `brand`: Keywords (string, stored, fast for facets)
//! - `sold`, `comment_count`: Popularity counters (u64, fast for sorting)
//! - `promoted`: Paid placement flag (bool, fast for scoring)
//! - `updated_at`: Last modification time (date, fast for sorting)

use tantivy::schema::{
    DateOptions, FAST, Field, INDEXED, IndexRecordOption, STORED, STRING, Schema,
    TextFieldIndexing, TextOptions,
};

use crate::analyzer::SIFT_TOKENIZER;

/// Handles to all fields in the product schema.
#[derive(Debug, Clone)]
pub struct ProductSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Product identifier.
    pub id: Field,
    /// Product name.
    pub name: Field,
    /// Price in minor currency units.
    pub price: Field,
    /// Image URL.
    pub image: Field,
    /// Category keyword.
    pub category: Field,
    /// Brand keyword.
    pub brand: Field,
    /// Units sold.
    pub sold: Field,
    /// Number of reviews.
    pub comment_count: Field,
    /// Paid placement flag.
    pub promoted: Field,
    /// Last modification time.
    pub updated_at: Field,
}

impl ProductSchema {
    /// Creates a new product schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        let id = builder.add_u64_field("id", INDEXED | STORED | FAST);

        let name_options = TextOptions::default()
            .set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(SIFT_TOKENIZER)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            )
            .set_stored();
        let name = builder.add_text_field("name", name_options);

        let price = builder.add_u64_field("price", INDEXED | STORED | FAST);
        let image = builder.add_text_field("image", STORED);

        // Keywords: single token, fast for terms aggregation
        let category = builder.add_text_field("category", STRING | STORED | FAST);
        let brand = builder.add_text_field("brand", STRING | STORED | FAST);

        let sold = builder.add_u64_field("sold", STORED | FAST);
        let comment_count = builder.add_u64_field("comment_count", STORED | FAST);
        let promoted = builder.add_bool_field("promoted", INDEXED | STORED | FAST);

        let updated_at_options = DateOptions::default()
            .set_indexed()
            .set_stored()
            .set_fast();
        let updated_at = builder.add_date_field("updated_at", updated_at_options);

        let schema = builder.build();

        Self {
            schema,
            id,
            name,
            price,
            image,
            category,
            brand,
            sold,
            comment_count,
            promoted,
            updated_at,
        }
    }

    /// Returns the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for ProductSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use sift_query::{KeywordField, NumericField, SortField};

    use super::*;

    #[test]
    fn schema_has_all_fields() {
        let schema = ProductSchema::new();
        let tantivy_schema = schema.schema();

        for name in [
            "id",
            "name",
            "price",
            "image",
            "category",
            "brand",
            "sold",
            "comment_count",
            "promoted",
            "updated_at",
        ] {
            assert!(tantivy_schema.get_field(name).is_ok(), "missing {name}");
        }
    }

    #[test]
    fn name_uses_sift_tokenizer() {
        let schema = ProductSchema::new();
        let entry = schema.schema().get_field_entry(schema.name);
        let options = entry.field_type().get_index_record_option();
        assert_eq!(options, Some(IndexRecordOption::WithFreqsAndPositions));
        assert!(entry.is_stored());
    }

    #[test]
    fn keywords_are_fast_and_stored() {
        let schema = ProductSchema::new();
        for field in [schema.category, schema.brand] {
            let entry = schema.schema().get_field_entry(field);
            assert!(entry.is_fast());
            assert!(entry.is_stored());
            assert!(entry.is_indexed());
        }
    }

    #[test]
    fn query_field_names_resolve() {
        let schema = ProductSchema::new();
        for name in [
            KeywordField::Category.name(),
            KeywordField::Brand.name(),
            NumericField::Price.name(),
        ] {
            assert!(schema.schema().get_field(name).is_ok(), "missing {name}");
        }
        for field in SortField::ALL {
            let entry = schema
                .schema()
                .get_field_entry(schema.schema().get_field(field.name()).unwrap());
            assert!(entry.is_fast(), "{} must be fast to sort", field.name());
        }
    }
}
