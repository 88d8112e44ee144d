pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod offset;
pub mod project_name;
pub mod projects;
pub mod resolver;

pub use configuration::{BuildConfig, ProjectConfig, RelocationConfig};
pub use error::AppError;
pub use offset::{DEFAULT_OFFSET, OffsetStep, RelativeOffset};
pub use project_name::ProjectName;
pub use projects::{BuildLayout, ProjectGraph, ProjectOutput};
pub use resolver::{BuildBase, resolve_base};
