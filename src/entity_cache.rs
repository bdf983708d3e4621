use crate::{config::DEFAULT_LANGUAGE, entity_source::EntitySource, Entity};
use std::{collections::HashMap, sync::Arc};

/// Loads entities through an `EntitySource`, remembering every result for the
/// lifetime of the cache. Failed loads are remembered as `None` and not retried.
#[derive(Debug)]
pub struct EntityCache<S> {
    source: S,
    language: String,
    entities: HashMap<String, Option<Arc<Entity>>>,
}

impl<S: EntitySource> EntityCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            language: DEFAULT_LANGUAGE.to_string(),
            entities: HashMap::new(),
        }
    }

    /// Sets the language `get_label` reads. Default is "en".
    pub fn with_language<L: Into<String>>(mut self, language: L) -> Self {
        self.language = language.into();
        self
    }

    /// Returns the entity, loading it on first use.
    pub async fn get_entity(&mut self, id: &str) -> Option<Arc<Entity>> {
        if let Some(cached) = self.entities.get(id) {
            return cached.clone();
        }
        let entity = match self.source.fetch_entity(id).await {
            Ok(entity) => Some(Arc::new(entity)),
            Err(e) => {
                tracing::warn!("Failed to fetch entity {id}: {e}");
                None
            }
        };
        self.entities.insert(id.to_string(), entity.clone());
        entity
    }

    /// Returns the entity's label in the cache language, loading it on first use.
    pub async fn get_label(&mut self, id: &str) -> Option<String> {
        let entity = self.get_entity(id).await?;
        entity.label(&self.language).map(|s| s.to_string())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the number of IDs looked up so far, including failed ones.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}
