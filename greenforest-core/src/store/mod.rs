//! Local collection storage.
//!
//! Each collection is a JSON array in its own `<key>.json` file under the
//! data directory, so saving one collection never rewrites another. Loading
//! never fails: a missing, unreadable or corrupt file yields the collection's
//! seed data.

mod collections;

pub use collections::{Artists, Events, Locations, Resources, ThemePlans};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};

/// A named, independently persisted collection.
pub trait Collection {
    type Item: Serialize + DeserializeOwned;

    /// Storage key, also the file stem.
    const KEY: &'static str;

    /// Built-in contents used when nothing has been saved yet.
    fn seed() -> Vec<Self::Item>;

    /// Bring a loaded record back within the collection's invariants.
    fn repair(item: Self::Item) -> Self::Item {
        item
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn open(config: &StudioConfig) -> Self {
        Self::new(config.data_path())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for<C: Collection>(&self) -> PathBuf {
        self.dir.join(format!("{}.json", C::KEY))
    }

    pub fn load<C: Collection>(&self) -> Vec<C::Item> {
        let path = self.path_for::<C>();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(collection = C::KEY, "nothing saved yet, using seed data");
                return C::seed();
            }
            Err(e) => {
                warn!(collection = C::KEY, error = %e, "could not read collection, using seed data");
                return C::seed();
            }
        };

        match serde_json::from_str::<Vec<C::Item>>(&content) {
            Ok(items) => items.into_iter().map(C::repair).collect(),
            Err(e) => {
                warn!(
                    collection = C::KEY,
                    path = %path.display(),
                    error = %e,
                    "stored collection is not valid, using seed data"
                );
                C::seed()
            }
        }
    }

    /// Write the whole collection, replacing the previous file atomically.
    pub fn save<C: Collection>(&self, items: &[C::Item]) -> StudioResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for::<C>();
        let temp = self.dir.join(format!("{}.json.tmp", C::KEY));

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StudioError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;

        debug!(collection = C::KEY, count = items.len(), "saved collection");
        Ok(())
    }
}
