//! Storage module for appdock
//!
//! - `source`: 데이터 접근 capability (`fetch(path, options)`)
//! - `json`: JSON - 범용 파일 저장/로드

mod json;
mod source;

// Data access capability
pub use source::{DataSource, FetchOptions, MemoryDb};

// JSON Storage (범용)
pub use json::{JsonStore, CONFIG_DIR_NAME};
