//! Layout command implementation.

use crate::app::api::Overrides;
use crate::domain::AppError;

pub fn run_layout(overrides: &Overrides, json: bool) -> Result<(), AppError> {
    let configuration = crate::app::api::configure_at(&std::env::current_dir()?, overrides)?;
    let layout = &configuration.layout;

    if json {
        let rendered = serde_json::to_string(layout)
            .map_err(|e| AppError::Internal(format!("Failed to serialize layout: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Config: {}", configuration.config_path.display());
    println!("Offset: {}", configuration.offset);
    println!("{} -> {}", layout.root.name, layout.root.output_dir.display());
    for project in &layout.subprojects {
        println!("  {} -> {}", project.name, project.output_dir.display());
    }
    Ok(())
}
