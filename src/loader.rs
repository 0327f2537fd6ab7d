//! 画像ファイル読み込み
//!
//! バイト列をそのままData URLにする（縮小・再圧縮はしない）

use crate::error::{Result, SnapChefError};
use image::ImageFormat;
use snapchef_common::image::DEFAULT_MIME_TYPE;
use snapchef_common::EncodedImage;
use std::path::Path;

/// 画像ファイルを読み込んでエンコード
pub fn load_image(path: &Path) -> Result<EncodedImage> {
    if !path.is_file() {
        return Err(SnapChefError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(SnapChefError::ImageLoad(format!(
            "空のファイルです: {}",
            path.display()
        )));
    }

    let mime_type = detect_mime_type(path, &bytes);
    log::debug!("{}: {} ({} bytes)", path.display(), mime_type, bytes.len());

    Ok(EncodedImage::from_bytes(mime_type, &bytes))
}

/// MIMEタイプ判定
///
/// 判定順: ファイル先頭のマジックバイト → 拡張子 → image/jpeg
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }

    path.extension()
        .and_then(ImageFormat::from_extension)
        .map(|format| format.to_mime_type())
        .unwrap_or(DEFAULT_MIME_TYPE)
}
