//! Document search sessions
//!
//! A `Documents` session owns one [`Query`] and translates validated caller
//! intent into builder primitives. Invalid input (non-positive numbers, empty
//! strings, empty lists) is ignored and leaves the session unchanged.

use std::marker::PhantomData;
use std::sync::Arc;

use cd_core::{positive, CdResult};
use cd_queries::filters::fields::{CATEGORIES, ID, NAME, TAGS};
use cd_queries::sorts::default_sort;
use cd_queries::{escape_value, Query, QueryBuilder, SortDirection, DOCUMENT_FIELD};

use crate::capability::{Capability, ContentPreview, DocumentKind, Preview, PreviewCapable, Published};
use crate::result::SearchResults;
use crate::transport::SearchTransport;
use crate::visibility::Visibility;

/// Full-text term matching every document
pub const MATCH_ALL: &str = "*:*";

/// Search session over one kind of document
pub struct Documents<C = Published> {
    transport: Arc<dyn SearchTransport>,
    kind: DocumentKind,
    query: Query,
    page_number: Option<u32>,
    visibility: Visibility,
    include_document: bool,
    capability: PhantomData<C>,
}

impl<C: Capability> Clone for Documents<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            kind: self.kind,
            query: self.query.clone(),
            page_number: self.page_number,
            visibility: self.visibility,
            include_document: self.include_document,
            capability: PhantomData,
        }
    }
}

impl<C: Capability> std::fmt::Debug for Documents<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Documents")
            .field("kind", &self.kind)
            .field("query", &self.query)
            .field("page_number", &self.page_number)
            .field("visibility", &self.visibility)
            .field("include_document", &self.include_document)
            .finish_non_exhaustive()
    }
}

impl<C: Capability> Documents<C> {
    /// Session over any document, seeded with all fields plus the embedded document
    pub fn new(transport: Arc<dyn SearchTransport>) -> Self {
        Self::with_query(transport, Query::new())
    }

    /// Session over a caller-supplied query
    pub fn with_query(transport: Arc<dyn SearchTransport>, query: Query) -> Self {
        Self {
            transport,
            kind: DocumentKind::Document,
            query,
            page_number: None,
            visibility: Visibility::default(),
            include_document: true,
            capability: PhantomData,
        }
    }

    fn seeded(transport: Arc<dyn SearchTransport>, kind: DocumentKind) -> Self {
        let mut session = Self::new(transport);
        session.kind = kind;
        session.add_raw_filters(kind.seed_filter());
        session
    }

    /// Independent session over a copy of the current query, with fresh flags
    pub(crate) fn follow_up(&self) -> Self {
        let mut session = Self::with_query(Arc::clone(&self.transport), self.query.clone());
        session.kind = self.kind;
        session
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Builder over the session's query
    pub fn builder(&mut self) -> QueryBuilder<'_> {
        QueryBuilder::new(&mut self.query)
    }

    // Filtering

    /// Add one `field:value` filter per pair, in iteration order
    pub fn filter_by<I, F, V>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = (F, V)>,
        F: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = self.builder();
        for (field, value) in filters {
            builder.add_filter(field.as_ref(), value.as_ref());
        }
        self
    }

    /// Add pre-built filter clauses verbatim
    pub fn add_raw_filters<I, S>(&mut self, clauses: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = self.builder();
        for clause in clauses {
            builder.add_raw_filter(clause);
        }
        self
    }

    /// Filter by exact name
    pub fn filter_by_name(&mut self, name: &str) -> &mut Self {
        if name.is_empty() {
            tracing::debug!(kind = %self.kind, "Ignoring empty name filter");
            return self;
        }
        self.filter_by([(NAME, format!("\"{}\"", name))])
    }

    /// Filter by any of the given tags
    pub fn filter_by_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let quoted: Vec<String> = tags
            .into_iter()
            .map(|tag| format!("\"{}\"", tag.as_ref()))
            .collect();

        if quoted.is_empty() {
            tracing::debug!(kind = %self.kind, "Ignoring empty tag filter");
            return self;
        }
        self.filter_by([(TAGS, format!("({})", quoted.join(" OR ")))])
    }

    pub fn filter_by_id(&mut self, id: &str) -> &mut Self {
        if id.is_empty() {
            tracing::debug!(kind = %self.kind, "Ignoring empty id filter");
            return self;
        }
        self.filter_by([(ID, id)])
    }

    pub fn filter_by_category(&mut self, category: &str) -> &mut Self {
        if category.is_empty() {
            tracing::debug!(kind = %self.kind, "Ignoring empty category filter");
            return self;
        }
        self.filter_by([(CATEGORIES, format!("(\"{}\")", category))])
    }

    /// Replace the full-text search
    pub fn search_text(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            tracing::debug!(kind = %self.kind, "Ignoring empty search text");
            return self;
        }
        self.builder().clear_search_terms().add_search_term(text);
        self
    }

    // Sorting

    /// Sort by a field; sorting again by the same field moves it to the end
    pub fn sort_by(&mut self, field: &str, ascending: bool) -> &mut Self {
        self.query.sorts.remove_sort_for(field);
        self.builder().add_sort(field, SortDirection::from_ascending(ascending));
        self
    }

    // Paging

    pub fn set_row_limit(&mut self, rows: i64) -> &mut Self {
        match positive(rows) {
            Some(rows) => {
                self.builder().set_row_limit(rows);
            }
            None => tracing::debug!(kind = %self.kind, rows, "Ignoring invalid row limit"),
        }
        self
    }

    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        match positive(offset) {
            Some(offset) => {
                self.builder().set_offset(offset);
            }
            None => tracing::debug!(kind = %self.kind, offset, "Ignoring invalid offset"),
        }
        self
    }

    /// Request a 1-indexed page; the offset is resolved when the query string is built
    pub fn set_page(&mut self, page: i64) -> &mut Self {
        match positive(page) {
            Some(page) => self.page_number = Some(page),
            None => tracing::debug!(kind = %self.kind, page, "Ignoring invalid page number"),
        }
        self
    }

    /// Advance the offset by one page; ignored when the offset would leave the wire range
    pub fn next_page(&mut self) -> &mut Self {
        match self.query.window().next_offset() {
            Some(offset) => {
                self.builder().set_offset(offset);
            }
            None => tracing::debug!(kind = %self.kind, "Ignoring next page past the last offset"),
        }
        self
    }

    /// Move the offset back by one page, stopping at zero
    pub fn previous_page(&mut self) -> &mut Self {
        let offset = self.query.window().previous_offset();
        self.builder().set_offset(offset);
        self
    }

    // Projection

    /// Whether results embed the JSON document; applies to the next query string only
    pub fn include_document(&mut self, include: bool) -> &mut Self {
        self.include_document = include;
        self
    }

    /// Escape Solr syntax in a value before putting it in a filter or search term
    pub fn escape_value(&self, source: &str) -> String {
        escape_value(source)
    }

    /// Resolve session state into the query string
    ///
    /// Adds the status clause for the requested visibility, falls back to
    /// matching everything sorted by `lastModified`, resolves the page number,
    /// then resets visibility and the document projection for the next call.
    pub fn build_query_string(&mut self) -> CdResult<String> {
        let visibility = self.visibility;
        let page_number = self.page_number;
        let include_document = self.include_document;

        let mut builder = QueryBuilder::new(&mut self.query);
        visibility.apply(&mut builder)?;

        if !builder.query().has_full_text() {
            builder.add_search_term(MATCH_ALL);
        }

        if !builder.query().has_custom_sort() {
            let sort = default_sort();
            builder.add_sort(&sort.field, sort.direction);
        }

        if let Some(page) = page_number {
            match builder.query().window().offset_for_page(page) {
                Some(offset) => {
                    builder.set_offset(offset);
                }
                None => tracing::debug!(kind = %self.kind, page, "Ignoring page past the last offset"),
            }
        }

        if !include_document {
            builder.query_mut().fields.remove(DOCUMENT_FIELD);
        }

        let query_string = builder.serialize();

        self.visibility = Visibility::default();
        self.include_document = true;

        tracing::debug!(kind = %self.kind, query = %query_string, "Built search query");
        Ok(query_string)
    }

    /// Run the search
    ///
    /// The returned results carry a copy of this session for paging, so later
    /// changes to this session do not affect them.
    pub async fn get(&mut self) -> CdResult<SearchResults<C>> {
        let query_string = self.build_query_string()?;

        tracing::info!(kind = %self.kind, "Searching delivery documents");
        let response = match self.transport.search(&query_string).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(kind = %self.kind, error = %e, "Delivery search failed");
                return Err(e);
            }
        };

        let results = SearchResults::new(response, self.follow_up());
        tracing::info!(
            kind = %self.kind,
            num_found = results.num_found(),
            returned = results.documents().len(),
            "Delivery search completed"
        );
        Ok(results)
    }

    /// End the authenticated session of the transport
    pub async fn logout(&self) -> CdResult<()> {
        tracing::info!(kind = %self.kind, "Logging out");
        self.transport.logout().await.map_err(|e| {
            tracing::warn!(kind = %self.kind, error = %e, "Logout failed");
            e
        })
    }
}

impl<C: PreviewCapable> Documents<C> {
    /// Include draft documents in the next query; switches the transport to preview
    pub fn include_draft(&mut self, include: bool) -> &mut Self {
        self.visibility = self.visibility.with_draft(include);
        self.transport.set_preview(self.visibility.requires_preview());
        self
    }

    /// Include retired documents in the next query; switches the transport to preview
    pub fn include_retired(&mut self, include: bool) -> &mut Self {
        self.visibility = self.visibility.with_retired(include);
        self.transport.set_preview(self.visibility.requires_preview());
        self
    }
}

impl Documents<Preview> {
    pub fn assets(transport: Arc<dyn SearchTransport>) -> Self {
        Self::seeded(transport, DocumentKind::Asset)
    }
}

impl Documents<Published> {
    pub fn categories(transport: Arc<dyn SearchTransport>) -> Self {
        Self::seeded(transport, DocumentKind::Category)
    }

    pub fn content_types(transport: Arc<dyn SearchTransport>) -> Self {
        Self::seeded(transport, DocumentKind::ContentType)
    }
}

impl Documents<ContentPreview> {
    pub fn content_items(transport: Arc<dyn SearchTransport>) -> Self {
        Self::seeded(transport, DocumentKind::Content)
    }

    /// Search authenticated content
    pub fn protected_content(&mut self, protected_content: bool) -> &mut Self {
        self.transport.set_protected_content(protected_content);
        self
    }

    /// Search rendering contexts with complete content
    pub fn complete_content_context(&mut self, complete_content_context: bool) -> &mut Self {
        self.transport.set_complete_content_context(complete_content_context);
        self
    }
}
