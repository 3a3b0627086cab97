//! src/model/catalog.rs
//! ============================================================================
//! # Catalog wire types
//!
//! `CatalogItem` is an immutable snapshot of one cocktail as served by the
//! remote catalog; `CatalogPage` is one page of them plus pagination metadata.

use serde::{Deserialize, Serialize};

/// Stable catalog identifier, unique across pages.
pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Serving vessel
    #[serde(default)]
    pub glass: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_url: String,
    pub alcoholic: bool,
    /// Opaque, display-only
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub last_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<CatalogItem>,
    pub meta: PageMeta,
}
