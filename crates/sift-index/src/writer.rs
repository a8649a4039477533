//! Building product indexes locally.
//!
//! Deployed indexes are kept in sync by an external pipeline; this writer backs `sift load`
//! and the test fixtures.

use std::{
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use tantivy::{
    Index, IndexWriter as TantivyIndexWriter, TantivyError, Term, directory::MmapDirectory,
};
use tracing::debug;

use crate::{
    analyzer::{SIFT_TOKENIZER, build_analyzer_from_name},
    document::Document,
    error::IndexError,
    schema::ProductSchema,
};

/// Indexing memory budget in bytes.
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Stages product upserts and deletions against an on-disk index.
pub struct IndexWriter {
    /// Index being written.
    index: Index,
    /// Tantivy's single writer for `index`.
    writer: TantivyIndexWriter,
    /// Field handles.
    schema: ProductSchema,
}

impl IndexWriter {
    /// Opens the index at `path`, creating the directory and index when missing.
    ///
    /// `language` picks the name stemmer; searches must use the same one.
    pub fn open(path: &Path, language: &str) -> Result<Self, IndexError> {
        let analyzer = build_analyzer_from_name(language)?;
        fs::create_dir_all(path)?;

        let open_failed = |e: &TantivyError| IndexError::open_index(path.to_path_buf(), e);
        let directory = MmapDirectory::open(path).map_err(|e| open_failed(&e.into()))?;
        let schema = ProductSchema::new();
        let index = Index::open_or_create(directory, schema.schema().clone())
            .map_err(|e| open_failed(&e))?;
        index.tokenizers().register(SIFT_TOKENIZER, analyzer);
        let writer = index
            .writer(WRITER_HEAP_BYTES)
            .map_err(|e| open_failed(&e))?;

        Ok(Self {
            index,
            writer,
            schema,
        })
    }

    /// Stages `doc`, replacing whatever product already has its id.
    ///
    /// Nothing is visible to readers until [`Self::commit`].
    pub fn add_document(&mut self, doc: &Document) -> Result<(), IndexError> {
        self.delete(doc.id);
        self.writer
            .add_document(doc.to_tantivy(&self.schema))
            .map(drop)
            .map_err(|e| IndexError::write(&e))
    }

    /// Stages every product in `docs`.
    pub fn add_documents(&mut self, docs: &[Document]) -> Result<(), IndexError> {
        docs.iter().try_for_each(|doc| self.add_document(doc))?;
        debug!(count = docs.len(), "staged products");
        Ok(())
    }

    /// Stages removal of product `id`.
    pub fn delete(&mut self, id: u64) {
        let term = Term::from_field_u64(self.schema.id, id);
        self.writer.delete_term(term);
    }

    /// Stages removal of every product.
    pub fn delete_all(&mut self) -> Result<(), IndexError> {
        self.writer
            .delete_all_documents()
            .map(drop)
            .map_err(|e| IndexError::write(&e))
    }

    /// Publishes staged changes.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer
            .commit()
            .map(drop)
            .map_err(|e| IndexError::commit(&e))
    }

    /// Discards staged changes.
    pub fn rollback(&mut self) -> Result<(), IndexError> {
        self.writer
            .rollback()
            .map(drop)
            .map_err(|e| IndexError::commit(&e))
    }

    /// Products visible as of the last commit.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self.index.reader().map_err(|e| IndexError::search(&e))?;
        Ok(reader.searcher().num_docs())
    }
}

/// Reads a JSON-lines product file.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, IndexError> {
    parse_documents(BufReader::new(fs::File::open(path)?))
}

/// Parses one product per non-blank line.
pub fn parse_documents(reader: impl BufRead) -> Result<Vec<Document>, IndexError> {
    let mut docs = Vec::new();
    for (number, line) in (1..).zip(reader.lines()) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        docs.push(
            serde_json::from_str(&line).map_err(|e| IndexError::Fixture {
                line: number,
                message: e.to_string(),
            })?,
        );
    }
    Ok(docs)
}
