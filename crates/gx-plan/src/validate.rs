//! Run plan validation.

use crate::schema::RunPlan;
use crate::{LATEST_VERSION, PlanError};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check the plan structure, then that it resolves to a valid run.
pub fn validate_plan(plan: &RunPlan) -> Result<(), PlanError> {
    if plan.version == 0 || plan.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plan.version,
        }
        .into());
    }
    if plan.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", plan.name),
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    plan.resolve()?;
    Ok(())
}
