//! ModelRepository - Typed accessor for model operations.

use std::marker::PhantomData;

use super::{Guard, Model, ModelError, ModelStore, Versioned};

/// Typed repository wrapper for accessing models of a specific type.
pub struct ModelRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: ModelStore, M: Model> ModelRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a model by ID.
    pub fn get(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError> {
        self.store.get_model(id)
    }

    /// Insert a new model. Fails if it already exists.
    pub fn insert(&self, model: &M) -> Result<Versioned<M>, ModelError> {
        self.store.insert_model(model)
    }

    /// Insert a batch of models, all or nothing.
    pub fn insert_all(&self, models: &[M]) -> Result<Vec<Versioned<M>>, ModelError> {
        self.store.insert_models(models)
    }

    /// Guarded atomic update of one model.
    pub fn modify(
        &self,
        id: &str,
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Versioned<M>>, ModelError> {
        self.store.modify_model(id, guard)
    }

    /// Guarded atomic update of several models, all or nothing.
    pub fn modify_all(
        &self,
        ids: &[&str],
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Vec<Versioned<M>>>, ModelError> {
        self.store.modify_models(ids, guard)
    }

    /// Delete a model by ID. Returns true if it existed.
    pub fn delete(&self, id: &str) -> Result<bool, ModelError> {
        self.store.delete_model::<M>(id)
    }

    /// Find models matching a predicate.
    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<Versioned<M>>, ModelError> {
        self.store.find_models(predicate)
    }

    /// All models in the collection.
    pub fn all(&self) -> Result<Vec<Versioned<M>>, ModelError> {
        self.store.find_models(&|_: &M| true)
    }
}

/// Extension trait for typed model access on any ModelStore.
pub trait ModelsExt: ModelStore + Sized {
    /// Get a typed model repository.
    fn models<M: Model>(&self) -> ModelRepository<'_, Self, M> {
        ModelRepository::new(self)
    }
}

impl<S: ModelStore> ModelsExt for S {}
