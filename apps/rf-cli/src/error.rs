use rf_core::error::RfError;
use rf_project::ProjectError;
use rf_sim::SimError;
use rf_systems::SystemError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("{0}")]
    Sim(#[from] SimError),

    #[error("System '{id}': {source}")]
    System { id: String, source: SystemError },

    #[error("{0}")]
    Core(#[from] RfError),
}
