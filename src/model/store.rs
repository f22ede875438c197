//! ModelStore - Abstract document storage for models.

use super::{Model, ModelError, Versioned};

/// Mutation applied by the find-and-modify operations.
///
/// Receives the current document and returns `true` if its guard matched and
/// the document was mutated. Returning `false` leaves the stored document
/// untouched.
pub type Guard<'a, M> = dyn FnMut(&mut M) -> bool + 'a;

/// Abstract document storage for models.
///
/// Implementations must make `insert_models`, `modify_model` and
/// `modify_models` atomic with respect to every other writer of the same
/// collection, including writers in other processes sharing the backend.
pub trait ModelStore: Send + Sync {
    /// Get a model by ID. Returns None if not found.
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<Versioned<M>>, ModelError>;

    /// Insert a new model. Fails if it already exists.
    fn insert_model<M: Model>(&self, model: &M) -> Result<Versioned<M>, ModelError>;

    /// Insert a batch of new models. Either every model is written or none is.
    fn insert_models<M: Model>(&self, models: &[M]) -> Result<Vec<Versioned<M>>, ModelError>;

    /// Atomically apply `guard` to one document.
    ///
    /// Returns `None` when the document does not exist or the guard rejected it.
    fn modify_model<M: Model>(
        &self,
        id: &str,
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Versioned<M>>, ModelError>;

    /// Atomically apply `guard` to every listed document, or to none of them.
    ///
    /// `guard` is called once per id, in the order given. Ids may repeat;
    /// each repetition sees the result of the previous one.
    /// Returns `None` when any document is missing or any guard call rejected.
    fn modify_models<M: Model>(
        &self,
        ids: &[&str],
        guard: &mut Guard<'_, M>,
    ) -> Result<Option<Vec<Versioned<M>>>, ModelError>;

    /// Delete a model by ID. Returns true if it existed.
    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError>;

    /// Find models matching a predicate.
    ///
    /// A stored document that no longer decodes as `M` is an error, not a miss.
    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<Versioned<M>>, ModelError>;
}
