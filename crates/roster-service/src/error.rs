use roster_store::StoreError;
use roster_types::AgeOutOfRange;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("User with email {0} already exists")]
    DuplicateEmail(String),
    #[error("Invalid email format: {0}")]
    InvalidEmailFormat(String),
    #[error(transparent)]
    InvalidAge(#[from] AgeOutOfRange),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// True for errors caused by caller input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::DuplicateEmail(_)
                | ServiceError::InvalidEmailFormat(_)
                | ServiceError::InvalidAge(_)
        )
    }
}
