//! Film Grade Common Library
//!
//! CLIとWeb(WASM)で共有されるプリセット・プロンプト生成・状態管理

pub mod catalog;
pub mod client;
pub mod controller;
pub mod error;
pub mod gemini;
pub mod image_data;
pub mod prompts;

pub use catalog::{Profile, CAMERA_PROFILES, FILM_LOOKS, find_camera, find_film, default_camera, default_film};
pub use client::{EditClient, EditOutcome, EditRequest};
pub use controller::{GradeController, GradeResult, GradeTicket, Phase, UploadedImage};
pub use error::{Error, Result};
pub use gemini::{build_edit_request_body, describe_http_error, edit_endpoint, parse_edit_response, parse_error_message, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use image_data::{decode_base64, encode_base64, extract_base64_from_data_url, extract_mime_type_from_data_url, split_data_url, to_data_url};
pub use prompts::compose_grade_prompt;
