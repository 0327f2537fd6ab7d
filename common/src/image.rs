//! エンコード済み画像（Data URL）
//!
//! ファイル選択時に "data:image/jpeg;base64,/9j/4AAQ..." 形式へ変換した画像を保持する。
//! 中身の検証は行わない（読めない画像はAPI側で失敗する）。

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// MIMEタイプが宣言されていない場合の既定値
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// エンコード済み画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: String,
}

impl EncodedImage {
    /// バイト列からData URLを作成
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
        }
    }

    /// FileReader.readAsDataURL の結果などをそのまま保持
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    /// 宣言されたMIMEタイプ（"data:" と ";" の間）
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.data_url.strip_prefix("data:")?;
        let header = header.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// 送信用のMIMEタイプ
    ///
    /// image/* 以外や未宣言の場合は image/jpeg
    pub fn request_mime_type(&self) -> &str {
        match self.mime_type() {
            Some(mime) if mime.starts_with("image/") => mime,
            _ => DEFAULT_MIME_TYPE,
        }
    }

    /// エンコード方式の接頭辞を除いたペイロード
    ///
    /// 最初の "," より後ろ。"," がなければ文字列全体をそのまま返す
    pub fn payload(&self) -> &str {
        match self.data_url.split_once(',') {
            Some((_, payload)) if !payload.is_empty() => payload,
            _ => &self.data_url,
        }
    }

    /// ペイロードのおおよそのバイト数（ログ用）
    pub fn payload_len(&self) -> usize {
        self.payload().len()
    }
}
