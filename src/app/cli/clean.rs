//! Clean command implementation.

use crate::app::api::Overrides;
use crate::domain::AppError;
use crate::ports::RemoveOutcome;

pub fn run_clean(overrides: &Overrides) -> Result<(), AppError> {
    let outcome = crate::app::api::clean(overrides)?;

    match outcome.removed {
        RemoveOutcome::Absent => {
            println!("ℹ️ Nothing to clean at {}", outcome.target.display());
        }
        RemoveOutcome::RemovedDirectory | RemoveOutcome::RemovedFile => {
            println!("✅ Removed {}", outcome.target.display());
        }
    }
    Ok(())
}
