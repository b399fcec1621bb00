use tracing::debug;
use crate::error::Result;
use crate::models::Provider;
use crate::search::{ordering, SearchQuery};
use crate::store::ProviderStore;

/// Runs a [`SearchQuery`] against the provider store: filter, then order.
#[derive(Clone)]
pub struct SearchEngine {
    store: ProviderStore,
}

impl SearchEngine {
    pub fn new(store: ProviderStore) -> Self {
        Self { store }
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Provider>> {
        debug!("Executing search query: {:?}", query);

        let matches = self.store.search(query.text.as_deref(), query.category.as_deref())?;

        let results = match query.sort_key() {
            Some(key) => ordering::sort_by_key(&matches, key),
            None => matches,
        };

        debug!("Search matched {} providers", results.len());
        Ok(results)
    }
}
