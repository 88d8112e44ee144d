//! outdir: relocate multi-project build outputs into one shared directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, BuildLayout, CleanOutcome, Overrides, clean, clean_at, configure_at, layout,
    layout_at, run_task_at, tasks_at,
};
pub use app::commands::configure::Configuration;
pub use app::tasks::{Task, TaskOutcome, TaskRegistry};
pub use domain::{
    BuildBase, ProjectGraph, ProjectName, ProjectOutput, RelativeOffset, resolve_base,
};
pub use ports::RemoveOutcome;
