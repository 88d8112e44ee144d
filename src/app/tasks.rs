//! Named maintenance tasks.
//!
//! A task name is either unregistered or registered; once registered, a task
//! can be invoked any number of times and every invocation is independent.

use std::collections::BTreeMap;

use crate::app::commands::clean::{CleanOutcome, CleanTask};
use crate::domain::{AppError, BuildBase};
use crate::ports::BuildTree;

/// Result of a task invocation.
#[derive(Debug)]
pub enum TaskOutcome {
    Clean(CleanOutcome),
}

/// A named, argument-less operation.
pub trait Task {
    fn name(&self) -> &str;

    /// One-line summary shown by `outdir tasks`.
    fn description(&self) -> &str;

    fn run(&self, tree: &dyn BuildTree) -> Result<TaskOutcome, AppError>;
}

/// Registry of invocable tasks, keyed by name.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Box<dyn Task>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in tasks for a resolved base.
    pub fn with_defaults(base: &BuildBase) -> Result<Self, AppError> {
        let mut registry = Self::new();
        registry.register(Box::new(CleanTask::new(base.clone())))?;
        Ok(registry)
    }

    pub fn register(&mut self, task: Box<dyn Task>) -> Result<(), AppError> {
        let name = task.name().to_string();
        if self.tasks.contains_key(&name) {
            return Err(AppError::TaskAlreadyRegistered(name));
        }
        tracing::debug!(task = %name, "registered task");
        self.tasks.insert(name, task);
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Registered tasks as `(name, description)`, sorted by name.
    pub fn describe(&self) -> Vec<(String, String)> {
        self.tasks
            .values()
            .map(|task| (task.name().to_string(), task.description().to_string()))
            .collect()
    }

    pub fn invoke(&self, name: &str, tree: &dyn BuildTree) -> Result<TaskOutcome, AppError> {
        let task = self.tasks.get(name).ok_or_else(|| AppError::UnknownTask(name.to_string()))?;
        tracing::info!(task = %name, "running task");
        task.run(tree)
    }
}
