use crate::ports::{ArtifactStore, Clock, IdGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<I: IdGenerator, C: Clock, S: ArtifactStore> {
    ids: I,
    clock: C,
    store: S,
}

impl<I: IdGenerator, C: Clock, S: ArtifactStore> AppContext<I, C, S> {
    /// Create a new application context.
    pub fn new(ids: I, clock: C, store: S) -> Self {
        Self { ids, clock, store }
    }

    /// Get a reference to the identifier generator.
    pub fn ids(&self) -> &I {
        &self.ids
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
