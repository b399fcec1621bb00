//! In-memory provider store for the application

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};
use serde::Serialize;
use tracing::debug;
use crate::error::{AppError, Result};
use crate::models::{NewProvider, Provider};
use crate::search::filters;

struct StoreInner {
    providers: BTreeMap<i64, Provider>,
    next_id: i64,
}

/// Owns every provider record. Cloning the store clones the handle, not the data.
///
/// Ids start at 1 and grow with every insert, so iterating the map in key
/// order is the same as iterating in insertion order. Records are handed out
/// as clones; nothing outside the store can mutate them.
#[derive(Clone)]
pub struct ProviderStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_providers: usize,
    pub available_providers: usize,
    pub unique_specializations: usize,
}

impl ProviderStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                providers: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Store populated with the built-in seed list.
    pub fn seeded() -> Result<Self> {
        Self::from_seed(crate::seed::default_seed()?)
    }

    pub fn from_seed(records: Vec<NewProvider>) -> Result<Self> {
        let store = Self::new();
        for record in records {
            store.create(record)?;
        }
        debug!("Seeded provider store with {} records", store.count()?);
        Ok(store)
    }

    pub fn create(&self, record: NewProvider) -> Result<Provider> {
        let mut inner = self.inner.write()
            .map_err(|_| AppError::InternalServerError)?;

        let id = inner.next_id;
        inner.next_id += 1;

        let provider = record.into_provider(id);
        inner.providers.insert(id, provider.clone());
        Ok(provider)
    }

    pub fn get_all(&self) -> Result<Vec<Provider>> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        Ok(inner.providers.values().cloned().collect())
    }

    /// `Ok(None)` when no record carries `id`.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Provider>> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        Ok(inner.providers.get(&id).cloned())
    }

    pub fn search(&self, query: Option<&str>, category: Option<&str>) -> Result<Vec<Provider>> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        Ok(filters::filter_providers(inner.providers.values(), query, category))
    }

    pub fn count(&self) -> Result<usize> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        Ok(inner.providers.len())
    }

    /// Distinct specialization labels, in the order they first appear.
    pub fn specializations(&self) -> Result<Vec<String>> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        let mut seen = HashSet::new();
        Ok(inner.providers.values()
            .filter(|p| seen.insert(p.specialization.as_str()))
            .map(|p| p.specialization.clone())
            .collect())
    }

    pub fn stats(&self) -> Result<StoreStats> {
        let inner = self.inner.read()
            .map_err(|_| AppError::InternalServerError)?;

        let specializations: HashSet<&str> = inner.providers.values()
            .map(|p| p.specialization.as_str())
            .collect();

        Ok(StoreStats {
            total_providers: inner.providers.len(),
            available_providers: inner.providers.values().filter(|p| p.available).count(),
            unique_specializations: specializations.len(),
        })
    }
}

impl Default for ProviderStore {
    fn default() -> Self {
        Self::new()
    }
}
