use std::{collections::BTreeMap, fs, path::Path};

use anyhow::Context;
use pitchscope_profile::{profile::Profile, store::ProfileStore};

use crate::{schema::reference_model::ReferenceModel, util};

/// All reference models found in a directory, loaded into memory.
///
/// Each `*.json` file in the directory holds one [`ReferenceModel`];
/// models are indexed by their `model_name` field, not their file name.
#[derive(Debug, Clone)]
pub struct DirModelStore {
    models: BTreeMap<String, ReferenceModel>,
}

impl DirModelStore {
    /// Loads every `*.json` reference model in `dir`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read models directory: {}", dir.display()))?;

        let mut models = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list models directory: {}", dir.display()))?
                .path();
            if path.extension().is_some_and(|extension| extension == "json") {
                models.push(util::read_json_file("reference model", &path)?);
            }
        }

        let store = Self::from_models(models);
        eprintln!(
            "Loaded {} reference models from {}",
            store.len(),
            dir.display()
        );
        Ok(store)
    }

    /// Builds a store from already-loaded models. Later duplicates of a
    /// `model_name` replace earlier ones.
    #[must_use]
    pub fn from_models(models: Vec<ReferenceModel>) -> Self {
        let models = models
            .into_iter()
            .map(|model| (model.model_name.clone(), model))
            .collect();
        Self { models }
    }

    /// Iterates over the stored models in `model_name` order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceModel> {
        self.models.values()
    }

    /// Number of stored models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the directory contained no models at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ProfileStore for DirModelStore {
    fn find(&self, model_name: &str) -> Option<Profile> {
        self.models
            .get(model_name)
            .cloned()
            .map(ReferenceModel::into_profile)
    }
}
