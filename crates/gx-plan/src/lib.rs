//! gx-plan: run plan file format and validation.

pub mod resolve;
pub mod schema;
pub mod validate;

pub use resolve::ResolvedPlan;
pub use schema::*;
pub use validate::{ValidationError, validate_plan};

/// Current plan file version.
pub const LATEST_VERSION: u32 = 1;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid plan: {0}")]
    Transfer(#[from] gx_transfer::TransferError),

    #[error("Invalid gas: {0}")]
    Gas(#[from] gx_gases::GasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlanResult<RunPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: RunPlan = serde_yaml::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_yaml(path: &std::path::Path, plan: &RunPlan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> PlanResult<RunPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: RunPlan = serde_json::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_json(path: &std::path::Path, plan: &RunPlan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a plan, picking the format from the file extension (`.json`, else YAML).
pub fn load(path: &std::path::Path) -> PlanResult<RunPlan> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
