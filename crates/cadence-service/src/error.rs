use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] cadence_rfc::error::RfcError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
