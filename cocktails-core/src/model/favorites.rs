//! src/model/favorites.rs
//! ============================================================================
//! # FavoritesStore: persisted set of liked cocktails
//!
//! Hydrated once at startup, mutated only through [`FavoritesStore::toggle`],
//! and written back in full after every mutation. The persisted form is a JSON
//! array of identifiers. Reads that fail for any reason produce an empty set;
//! writes are best-effort.

use std::{
    cell::RefCell,
    fs, io,
    path::PathBuf,
    rc::Rc,
};

use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::{error::AppError, model::catalog::ItemId};

/// Durable backing for the favorites list.
pub trait FavoritesStorage {
    /// Returns the raw persisted value, or `None` when nothing was stored yet.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Replaces the persisted value.
    fn write(&self, contents: &str) -> Result<(), AppError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(&self.path, e)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::storage(parent, e))?;
        }

        // The target file is either the old list or the new one, never partial.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| AppError::storage(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| AppError::storage(&self.path, e))
    }
}

/// In-process storage; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl FavoritesStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

pub struct FavoritesStore {
    ids: IndexSet<ItemId>,
    storage: Box<dyn FavoritesStorage>,
}

impl FavoritesStore {
    /// Loads the persisted set. Absent or malformed data yields an empty set.
    pub fn hydrate(storage: Box<dyn FavoritesStorage>) -> Self {
        let ids = match storage.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ItemId>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!("Ignoring malformed favorites data: {}", e);
                    IndexSet::new()
                }
            },
            Ok(None) => {
                debug!("No persisted favorites, starting empty");
                IndexSet::new()
            }
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {}", e);
                IndexSet::new()
            }
        };

        info!("Hydrated {} favorites", ids.len());
        Self { ids, storage }
    }

    /// Flips membership of `id` and persists the whole set.
    ///
    /// Returns the new membership.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let now_favorite = if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        debug!(id, now_favorite, "Toggled favorite");
        self.persist();
        now_favorite
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    fn persist(&self) {
        let list: Vec<ItemId> = self.ids().collect();

        let result = serde_json::to_string(&list)
            .map_err(AppError::from)
            .and_then(|json| self.storage.write(&json));

        if let Err(e) = result {
            warn!("Failed to persist favorites: {}", e);
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}
