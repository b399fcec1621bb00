use serde::{Deserialize, Serialize};
use crate::models::request::ProviderListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Name,
    Location,
}

impl SortKey {
    /// Exact, case-sensitive match on the key names used by the API.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "rating" => Some(SortKey::Rating),
            "name" => Some(SortKey::Name),
            "location" => Some(SortKey::Location),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Rating => write!(f, "rating"),
            SortKey::Name => write!(f, "name"),
            SortKey::Location => write!(f, "location"),
        }
    }
}

/// A directory search: free text, a specialization category, and an
/// optional sort key. The sort key is kept as text so that unknown keys
/// can fall through to "no reordering".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>) -> Self {
        self.sort = Some(key.into());
        self
    }

    /// The recognized sort key, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort.as_deref().and_then(SortKey::parse)
    }
}

impl From<ProviderListParams> for SearchQuery {
    fn from(params: ProviderListParams) -> Self {
        Self {
            text: params.q,
            category: params.specialization,
            sort: params.sort,
        }
    }
}
