//! SnapChef Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod image;
pub mod prompts;
pub mod gemini;
pub mod parser;
pub mod state;
pub mod view;

pub use types::{AnalysisResult, NutritionInfo, Recipe};
pub use error::{Error, Result};
pub use image::EncodedImage;
pub use prompts::{build_response_schema, ANALYSIS_PROMPT};
pub use gemini::{build_analysis_request, GeminiRequest, GeminiResponse, DEFAULT_MODEL};
pub use parser::{parse_analysis_response, parse_gemini_response, validate_required};
pub use state::{failure_message, AnalysisTicket, Phase, ViewState, FALLBACK_ERROR_MESSAGE};
pub use view::{macro_tiles, numbered_steps, render_text, MacroTile};
