pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod logging;
pub mod tasks;

pub use context::AppContext;
