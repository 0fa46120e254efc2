//! # appdock-foundation
//!
//! Foundation layer for appdock:
//! - Error: 중앙 에러 타입
//! - Storage: 데이터 접근 capability (DataSource), JsonStore (범용)
//! - Config: 선언적 애플리케이션 목록 (apps.json)
//! - i18n: 번역 capability

pub mod config;
pub mod error;
pub mod i18n;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{AppConfig, AppsConfig, APPS_FILE};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::{
    // Data access capability
    DataSource,
    FetchOptions,
    // JSON (범용)
    JsonStore,
    MemoryDb,
    CONFIG_DIR_NAME,
};

// ============================================================================
// i18n (번역)
// ============================================================================
pub use i18n::Translator;
