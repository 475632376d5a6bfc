use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RulesError(#[from] openhours_rules::error::RulesError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
