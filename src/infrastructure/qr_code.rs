//! PNG QR code writer backed by the `qrcode` and `image` crates.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::Luma;
use qrcode::QrCode;

use crate::domain::qr_code::{QrCodeError, QrCodeGenerator};

/// Public URL prefix under which generated images are served.
pub const QR_PUBLIC_PREFIX: &str = "/qrcodes";

/// Writes `{output_dir}/{file_stem}.png` and reports it as
/// `{public_prefix}/{file_stem}.png`.
///
/// Encoding and file I/O run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct PngQrCodeGenerator {
    output_dir: PathBuf,
    public_prefix: String,
}

impl PngQrCodeGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            public_prefix: QR_PUBLIC_PREFIX.to_string(),
        }
    }
}

#[async_trait]
impl QrCodeGenerator for PngQrCodeGenerator {
    async fn generate(&self, content: &str, file_stem: &str) -> Result<String, QrCodeError> {
        let file_name = format!("{}.png", file_stem);
        let output_dir = self.output_dir.clone();
        let path = output_dir.join(&file_name);
        let content = content.to_string();

        let written = tokio::task::spawn_blocking(move || {
            write_png(&content, &output_dir, &path).map(|()| path)
        })
        .await
        .map_err(|e| QrCodeError::Write(e.to_string()))??;

        tracing::debug!(path = %written.display(), "QR code written");

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            file_name
        ))
    }
}

fn write_png(content: &str, output_dir: &Path, path: &Path) -> Result<(), QrCodeError> {
    let code = QrCode::new(content.as_bytes()).map_err(|e| QrCodeError::Encode(e.to_string()))?;
    let image = code.render::<Luma<u8>>().build();

    fs::create_dir_all(output_dir).map_err(|e| QrCodeError::Write(e.to_string()))?;

    image
        .save(path)
        .map_err(|e| QrCodeError::Write(e.to_string()))
}
