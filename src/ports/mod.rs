mod build_tree;
mod config_source;

pub use build_tree::{BuildTree, BuildTreeLock, RemoveOutcome};
pub use config_source::ConfigSource;
