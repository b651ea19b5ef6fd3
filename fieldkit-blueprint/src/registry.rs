//! BlueprintRegistry — loads blueprint documents from a directory.
//!
//! One `.yaml` file per blueprint. The registry reads the whole directory
//! once and keeps an in-memory index by blueprint name; it never writes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{BlueprintError, Result};
use crate::types::Blueprint;

/// In-memory index over a directory of blueprint YAML files.
pub struct BlueprintRegistry {
    root: PathBuf,
    blueprints: Vec<Blueprint>,
    name_index: HashMap<String, usize>,
}

impl BlueprintRegistry {
    /// Load every `*.yaml` blueprint under `root`.
    ///
    /// Files that fail to parse are skipped with a warning rather than
    /// failing the whole load.
    pub async fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(BlueprintError::NotInitialized { path: root });
        }

        let mut registry = Self {
            root,
            blueprints: Vec::new(),
            name_index: HashMap::new(),
        };
        registry.load_blueprints().await?;

        debug!(
            blueprints = registry.blueprints.len(),
            "blueprint registry loaded"
        );

        Ok(registry)
    }

    /// Get a blueprint by name.
    pub fn get(&self, name: &str) -> Option<&Blueprint> {
        self.name_index.get(name).map(|&i| &self.blueprints[i])
    }

    /// Get a blueprint by name, or error.
    pub fn require(&self, name: &str) -> Result<&Blueprint> {
        self.get(name).ok_or_else(|| BlueprintError::BlueprintNotFound {
            name: name.to_string(),
        })
    }

    /// All loaded blueprints.
    pub fn all(&self) -> &[Blueprint] {
        &self.blueprints
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load_blueprints(&mut self) -> Result<()> {
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            match Blueprint::from_yaml(&content) {
                Ok(blueprint) => {
                    let idx = self.blueprints.len();
                    self.name_index.insert(blueprint.name.clone(), idx);
                    self.blueprints.push(blueprint);
                }
                Err(e) => {
                    tracing::warn!(?path, %e, "skipping invalid blueprint");
                }
            }
        }
        Ok(())
    }
}
