use thiserror::Error;

/// Errors raised while rendering the confirmation QR code.
#[derive(Error, Debug)]
pub enum ConfirmationError {
    #[error("Failed to serialize confirmation payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Failed to write QR code image: {0}")]
    Image(#[from] image::ImageError),
}
