//! In-process search index.
//!
//! A secondary, read-optimized view of the catalog: every indexed resource
//! keeps one lowercase text document per row, maintained write-through by
//! the db services. `_search` endpoints resolve the matching ids against
//! the primary store, so the index never serves stale field values.

use dashmap::DashMap;

/// Index keys for the resources that carry a `_search` endpoint.
pub mod kind {
    pub const AGENT_MONITOR: &str = "agent-monitors";
    pub const SERVICE_INSTANCE: &str = "service-instances";
    pub const STATUS_PAGE_ITEM: &str = "status-page-items";
}

#[derive(Debug, Default)]
pub struct SearchIndex {
    indexes: DashMap<&'static str, DashMap<i64, String>>,
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

impl SearchIndex {
    /// Builds an index with the standard resource kinds registered.
    pub fn new() -> Self {
        let index = SearchIndex::default();
        index.register(kind::AGENT_MONITOR);
        index.register(kind::SERVICE_INSTANCE);
        index.register(kind::STATUS_PAGE_ITEM);
        index
    }

    pub fn register(&self, kind: &'static str) {
        self.indexes.entry(kind).or_default();
    }

    /// Stores (or replaces) the document for one row.
    pub fn index(&self, kind: &str, id: i64, document: &str) {
        if let Some(index) = self.indexes.get(kind) {
            index.insert(id, document.to_lowercase());
        }
    }

    pub fn remove(&self, kind: &str, id: i64) {
        if let Some(index) = self.indexes.get(kind) {
            index.remove(&id);
        }
    }

    /// Returns the ids whose document contains every whole token of the
    /// query, case-insensitively, in ascending id order. A kind that was
    /// never registered has no index and matches nothing.
    pub fn query(&self, kind: &str, query: &str) -> Vec<i64> {
        let Some(index) = self.indexes.get(kind) else {
            return Vec::new();
        };

        let needle = query.to_lowercase();
        let terms: Vec<&str> = tokenize(&needle).collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<i64> = index
            .iter()
            .filter(|entry| {
                let tokens: Vec<&str> = tokenize(entry.value()).collect();
                terms.iter().all(|term| tokens.contains(term))
            })
            .map(|entry| *entry.key())
            .collect();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_tokens_case_insensitively() {
        let index = SearchIndex::new();
        index.index(kind::AGENT_MONITOR, 1, "Active admin HTTP");
        index.index(kind::AGENT_MONITOR, 2, "inactive operator");

        assert_eq!(index.query(kind::AGENT_MONITOR, "ADMIN"), vec![1]);
        assert_eq!(index.query(kind::AGENT_MONITOR, "active admin"), vec![1]);
        // "admin" is not the whole token "inactive"
        assert!(index.query(kind::AGENT_MONITOR, "act").is_empty());
    }

    #[test]
    fn replaced_and_removed_documents_drop_out() {
        let index = SearchIndex::new();
        index.index(kind::STATUS_PAGE_ITEM, 5, "service alpha");
        index.index(kind::STATUS_PAGE_ITEM, 5, "instance beta");
        assert!(index.query(kind::STATUS_PAGE_ITEM, "alpha").is_empty());
        assert_eq!(index.query(kind::STATUS_PAGE_ITEM, "beta"), vec![5]);

        index.remove(kind::STATUS_PAGE_ITEM, 5);
        assert!(index.query(kind::STATUS_PAGE_ITEM, "beta").is_empty());
    }

    #[test]
    fn unregistered_kind_matches_nothing() {
        let index = SearchIndex::new();
        index.index("audit-trails", 1, "whatever");
        assert!(index.query("audit-trails", "whatever").is_empty());
    }
}
