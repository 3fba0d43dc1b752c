use brainium::error::{ConfirmationError, FormError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    FormError(#[from] FormError),
    #[error(transparent)]
    ConfirmationError(#[from] ConfirmationError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
