//! Tantivy implementation of the index access port.
//!
//! A [`TantivyStore`] serves one logical index from one directory. It is opened once at
//! service start, shared read-only between requests, and closed at shutdown.

mod aggregate;
mod highlight;
mod query;
mod search;

use std::path::{Path, PathBuf};

use sift_config::Config;
use sift_query::PredicateTree;
use tantivy::{
    Index, IndexReader, ReloadPolicy, TantivyDocument, Term,
    collector::TopDocs,
    directory::MmapDirectory,
    query::TermQuery,
    schema::IndexRecordOption,
    tokenizer::TextAnalyzer,
};
use tracing::{debug, info};

use crate::{
    Document, IndexError,
    analyzer::{SIFT_TOKENIZER, build_analyzer_from_name},
    port::{FacetCounts, FacetSpec, IndexPort, SearchHits, SearchRequest},
    schema::ProductSchema,
};

/// Read-only product store backed by an on-disk Tantivy index.
pub struct TantivyStore {
    /// Logical index name this store answers for.
    name: String,
    /// Index directory.
    path: PathBuf,
    /// Reader holding the current searcher generation.
    reader: IndexReader,
    /// Schema with field handles.
    schema: ProductSchema,
    /// Analyzer for query text and highlighting.
    analyzer: TextAnalyzer,
}

impl TantivyStore {
    /// Opens an existing index for searching.
    ///
    /// `name` is the logical index callers must address; `language` must match the stemmer
    /// the index was written with.
    pub fn open(path: &Path, name: &str, language: &str) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::OpenIndex {
                path: path.to_path_buf(),
                message: "index directory does not exist".to_string(),
            });
        }

        let schema = ProductSchema::new();

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open(dir).map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        let analyzer = build_analyzer_from_name(language)?;
        index.tokenizers().register(SIFT_TOKENIZER, analyzer.clone());

        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        info!(index = name, path = %path.display(), "opened product index");

        Ok(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            reader,
            schema,
            analyzer,
        })
    }

    /// Opens an existing index using configuration for its name and stemmer.
    pub fn open_with_config(path: &Path, config: &Config) -> Result<Self, IndexError> {
        Self::open(path, &config.index.name, &config.index.stemmer)
    }

    /// Releases the index. Outstanding searchers keep their segments until dropped.
    pub fn close(self) {
        info!(index = %self.name, "closed product index");
    }

    /// Logical index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of documents visible to the current searcher.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Fails unless `index` names the index this store serves.
    fn check_index(&self, index: &str) -> Result<(), IndexError> {
        if index == self.name {
            Ok(())
        } else {
            Err(IndexError::UnknownIndex {
                requested: index.to_string(),
                served: self.name.clone(),
            })
        }
    }
}

impl IndexPort for TantivyStore {
    fn search(&self, index: &str, request: &SearchRequest) -> Result<SearchHits, IndexError> {
        self.check_index(index)?;
        search::execute(
            &self.reader.searcher(),
            &self.schema,
            &self.analyzer,
            request,
        )
    }

    fn get(&self, index: &str, id: u64) -> Result<Option<Document>, IndexError> {
        self.check_index(index)?;

        let searcher = self.reader.searcher();
        let query = TermQuery::new(
            Term::from_field_u64(self.schema.id, id),
            IndexRecordOption::Basic,
        );
        let top = searcher
            .search(&query, &TopDocs::with_limit(1))
            .map_err(|e| IndexError::search(&e))?;

        let Some((_, address)) = top.into_iter().next() else {
            debug!(id, "product not found");
            return Ok(None);
        };

        let doc: TantivyDocument = searcher.doc(address).map_err(|e| IndexError::search(&e))?;
        Document::from_stored(&doc, &self.schema).map(Some)
    }

    fn aggregate(
        &self,
        index: &str,
        predicate: &PredicateTree,
        facets: &[FacetSpec],
    ) -> Result<FacetCounts, IndexError> {
        self.check_index(index)?;
        let query = query::build_query(&self.schema, &self.analyzer, predicate);
        aggregate::execute(&self.reader.searcher(), query.as_ref(), facets)
    }
}
