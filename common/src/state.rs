//! 画面状態（ステートマシン）
//!
//! 画像・ローディング・結果・エラーを独立したフラグで持たず、1つのenumで表す。
//!
//! ```text
//! Idle --select--> ImageSelected --begin--> Analyzing --ok--> Resulted
//!                        ^                      |
//!                        +-------- err ---------+
//! ```
//! select_image はどの状態からでも ImageSelected に戻す。clear_image は Idle に戻す。

use std::sync::atomic::{AtomicU64, Ordering};

use crate::image::EncodedImage;
use crate::types::AnalysisResult;

/// 画像選択ごとに採番（クリア後の再選択でも重複しない）
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// 解析失敗時の既定メッセージ
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// 状態名（表示・ログ用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Analyzing,
    Resulted,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ImageSelected => "image-selected",
            Phase::Analyzing => "analyzing",
            Phase::Resulted => "resulted",
        }
    }
}

/// 画面状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    ImageSelected {
        image: EncodedImage,
        generation: u64,
        error: Option<String>,
    },
    Analyzing {
        image: EncodedImage,
        generation: u64,
    },
    Resulted {
        image: EncodedImage,
        generation: u64,
        result: AnalysisResult,
    },
}

/// 解析1回分の引換券
///
/// 完了時に渡し、その間に画像が差し替え・クリアされていれば結果を捨てる
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub image: EncodedImage,
    generation: u64,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        match self {
            ViewState::Idle => Phase::Idle,
            ViewState::ImageSelected { .. } => Phase::ImageSelected,
            ViewState::Analyzing { .. } => Phase::Analyzing,
            ViewState::Resulted { .. } => Phase::Resulted,
        }
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        match self {
            ViewState::Idle => None,
            ViewState::ImageSelected { image, .. }
            | ViewState::Analyzing { image, .. }
            | ViewState::Resulted { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Resulted { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::ImageSelected { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Analyzing { .. })
    }

    /// 解析ボタンを押せるか（画像あり・解析中でない・結果なし）
    pub fn can_analyze(&self) -> bool {
        matches!(self, ViewState::ImageSelected { .. })
    }

    /// 画像を選択（前の結果とエラーは消える）
    pub fn select_image(&mut self, image: EncodedImage) {
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        *self = ViewState::ImageSelected {
            image,
            generation,
            error: None,
        };
    }

    /// 画像と結果を破棄（何度呼んでもよい）
    pub fn clear_image(&mut self) {
        *self = ViewState::Idle;
    }

    /// 解析開始
    ///
    /// ImageSelected 以外では何もせず None（リクエストは送らない）
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        let ViewState::ImageSelected { image, generation, .. } = self else {
            return None;
        };
        let ticket = AnalysisTicket {
            image: image.clone(),
            generation: *generation,
        };
        *self = ViewState::Analyzing {
            image: ticket.image.clone(),
            generation: ticket.generation,
        };
        Some(ticket)
    }

    /// 解析完了
    ///
    /// # Returns
    /// 反映した場合 true。古い引換券（途中で画像が変わった）の場合 false
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: std::result::Result<AnalysisResult, String>,
    ) -> bool {
        let ViewState::Analyzing { generation, .. } = self else {
            return false;
        };
        if *generation != ticket.generation {
            return false;
        }

        *self = match outcome {
            Ok(result) => ViewState::Resulted {
                image: ticket.image,
                generation: ticket.generation,
                result,
            },
            Err(message) => ViewState::ImageSelected {
                image: ticket.image,
                generation: ticket.generation,
                error: Some(message),
            },
        };
        true
    }
}

/// エラーを画面表示用の文字列にする
///
/// 説明文が空の場合は既定メッセージ
pub fn failure_message(error: &impl std::fmt::Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
