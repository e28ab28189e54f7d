use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Transfer(#[from] gx_transfer::TransferError),

    #[error("{0}")]
    Gas(#[from] gx_gases::GasError),

    #[error("Plan error: {0}")]
    Plan(#[from] gx_plan::PlanError),
}

pub type CliResult<T> = Result<T, CliError>;
