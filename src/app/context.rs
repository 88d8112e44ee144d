use crate::ports::{BuildTree, ConfigSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigSource + BuildTree> {
    store: S,
}

impl<S: ConfigSource + BuildTree> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the configuration and build tree store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
