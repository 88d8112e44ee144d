//! Tasks command implementation.

use crate::app::api::Overrides;
use crate::domain::AppError;

pub fn run_tasks(overrides: &Overrides) -> Result<(), AppError> {
    let tasks = crate::app::api::tasks_at(std::env::current_dir()?, overrides)?;
    for (name, description) in tasks {
        println!("{:<8} {}", name, description);
    }
    Ok(())
}
