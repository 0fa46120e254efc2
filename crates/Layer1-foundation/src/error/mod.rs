//! Error types for appdock
//!
//! 모든 에러를 중앙에서 관리
//!
//! 충돌(collision)은 에러가 아니라 데이터입니다. `CollisionReport`로 표현되며
//! 이 타입에는 포함되지 않습니다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// appdock 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 애플리케이션 관련
    // ========================================================================
    #[error("Failed to resolve {app}: {message}")]
    Resolution { app: String, message: String },

    #[error("Invalid registration descriptor from {app}: {message}")]
    Descriptor { app: String, message: String },

    #[error("Command failed: {command} - {message}")]
    Command { command: String, message: String },

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::InvalidInput(_)
                | Error::Validation(_)
                | Error::Resolution { .. }
                | Error::Descriptor { .. }
        )
    }

    /// 애플리케이션 단위로 복구 가능한 에러인지 확인
    ///
    /// 통합(integration) 중 이 에러가 나면 해당 애플리케이션만 건너뜁니다.
    pub fn is_per_app(&self) -> bool {
        matches!(self, Error::Resolution { .. } | Error::Descriptor { .. })
    }

    /// Resolution 에러 생성 헬퍼
    pub fn resolution(app: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Resolution {
            app: app.into(),
            message: message.into(),
        }
    }

    /// Descriptor 에러 생성 헬퍼
    pub fn descriptor(app: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Descriptor {
            app: app.into(),
            message: message.into(),
        }
    }

    /// Command 실행 에러 생성 헬퍼
    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Command {
            command: command.into(),
            message: message.into(),
        }
    }
}
