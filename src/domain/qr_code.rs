//! QR code generation contract.

use async_trait::async_trait;

/// Errors raised while rendering or writing a QR image.
#[derive(Debug, thiserror::Error)]
pub enum QrCodeError {
    #[error("Failed to encode QR data: {0}")]
    Encode(String),

    #[error("Failed to write QR image: {0}")]
    Write(String),
}

/// Renders a QR code for a short link and stores it somewhere servable.
///
/// Generation is best-effort: callers log a failure and keep going.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr_code::PngQrCodeGenerator`] - PNG files on disk
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrCodeGenerator: Send + Sync {
    /// Encodes `content` and stores it under `file_stem`.
    ///
    /// Returns the public path of the stored image (e.g. `/qrcodes/abc123.png`).
    async fn generate(&self, content: &str, file_stem: &str) -> Result<String, QrCodeError>;
}
