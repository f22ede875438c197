//! InMemoryModelStore - HashMap-backed document store for development and tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use super::{Guard, Model, ModelError, ModelStore, Versioned};

/// Internal stored representation of a model.
struct StoredModel {
    bytes: Vec<u8>,
    version: u64,
}

type Storage = HashMap<String, StoredModel>;

/// In-memory model store backed by a HashMap.
///
/// Storage key is `"COLLECTION:id"`. Clone-friendly via Arc; clones share
/// the same storage. Every write takes the single write lock, which is what
/// makes batch inserts and find-and-modify atomic.
#[derive(Clone)]
pub struct InMemoryModelStore {
    storage: Arc<RwLock<Storage>>,
}

impl Default for InMemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryModelStore {
    /// Create a new empty model store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Storage>, ModelError> {
        self.storage
            .write()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))
    }

    fn encode<M: Model>(model: &M) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(model).map_err(|e| ModelError::Serde(e.to_string()))
    }

    fn decode<M: Model>(bytes: &[u8]) -> Result<M, ModelError> {
        serde_json::from_slice(bytes).map_err(|e| ModelError::Serde(e.to_string()))
    }

    fn conflict<M: Model>(id: &str) -> ModelError {
        ModelError::Conflict {
            collection: M::COLLECTION.to_string(),
            id: id.to_string(),
        }
    }
}

impl ModelStore for InMemoryModelStore {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self
            .storage
            .read()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))?;

        match storage.get(&key) {
            Some(stored) => Ok(Some(Versioned {
                data: Self::decode(&stored.bytes)?,
                version: stored.version,
            })),
            None => Ok(None),
        }
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        let mut inserted = self.insert_models(std::slice::from_ref(model))?;
        inserted
            .pop()
            .ok_or_else(|| ModelError::Storage("insert produced no document".into()))
    }

    fn insert_models<M: Model>(&self, models: &[M]) -> Result<Vec<Versioned<M>>, ModelError> {
        // Encode everything before taking the lock so a serde failure writes nothing.
        let mut encoded = Vec::with_capacity(models.len());
        for model in models {
            encoded.push((Self::make_key(M::COLLECTION, model.id()), Self::encode(model)?));
        }

        let mut storage = self.write()?;

        let mut seen = HashSet::with_capacity(encoded.len());
        for ((key, _), model) in encoded.iter().zip(models) {
            if storage.contains_key(key) || !seen.insert(key.as_str()) {
                return Err(Self::conflict::<M>(model.id()));
            }
        }

        for (key, bytes) in encoded {
            storage.insert(key, StoredModel { bytes, version: 1 });
        }

        Ok(models
            .iter()
            .cloned()
            .map(|data| Versioned { data, version: 1 })
            .collect())
    }

    fn modify_model<M: Model>(
        &self,
        id: &str,
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Versioned<M>>, ModelError> {
        Ok(self
            .modify_models(&[id], guard)?
            .and_then(|mut modified| modified.pop()))
    }

    fn modify_models<M: Model>(
        &self,
        ids: &[&str],
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Vec<Versioned<M>>>, ModelError> {
        let mut storage = self.write()?;

        // Work on copies keyed by storage key so repeated ids accumulate and
        // nothing reaches storage unless every guard call matched.
        let mut working: HashMap<String, Versioned<M>> = HashMap::new();
        let mut order = Vec::with_capacity(ids.len());

        for id in ids {
            let key = Self::make_key(M::COLLECTION, id);
            let current = match working.remove(&key) {
                Some(doc) => doc,
                None => match storage.get(&key) {
                    Some(stored) => Versioned {
                        data: Self::decode(&stored.bytes)?,
                        version: stored.version,
                    },
                    None => return Ok(None),
                },
            };

            let mut doc = current;
            if !guard(&mut doc.data) {
                return Ok(None);
            }
            doc.version += 1;
            working.insert(key.clone(), doc);
            order.push(key);
        }

        let mut encoded = Vec::with_capacity(working.len());
        for (key, doc) in &working {
            encoded.push((key.clone(), Self::encode(&doc.data)?, doc.version));
        }
        for (key, bytes, version) in encoded {
            storage.insert(key, StoredModel { bytes, version });
        }

        // One entry per requested id, reporting the final state of that document.
        let mut modified = Vec::with_capacity(order.len());
        for key in order {
            if let Some(doc) = working.get(&key) {
                modified.push(doc.clone());
            }
        }
        Ok(Some(modified))
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write()?;
        Ok(storage.remove(&key).is_some())
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Versioned<M>>, ModelError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| ModelError::Storage("lock poisoned".into()))?;

        let prefix = format!("{}:", M::COLLECTION);
        let mut results = Vec::new();

        for (key, stored) in storage.iter() {
            if !key.starts_with(&prefix) {
                continue;
            }
            let data: M = Self::decode(&stored.bytes)?;
            if predicate(&data) {
                results.push(Versioned {
                    data,
                    version: stored.version,
                });
            }
        }

        Ok(results)
    }
}
