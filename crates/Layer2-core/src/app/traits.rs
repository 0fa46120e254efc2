//! App traits - 애플리케이션 인터페이스

use super::core::AppCore;
use super::descriptor::RegistrationDescriptor;
use super::result::AppResult;
use appdock_foundation::{AppConfig, Result};
use async_trait::async_trait;

// ============================================================================
// Application - 등록 entry point
// ============================================================================

/// 애플리케이션 등록 entry point
///
/// `register`는 요청할 네임스페이스를 설명하는 descriptor만 만들어야 하며
/// 공유 레지스트리를 건드리면 안 됩니다. 설정이 호출마다 다를 수 있으므로
/// 호출할 때마다 새 descriptor를 반환합니다.
pub trait Application: Send + Sync {
    fn register(&self, config: &AppConfig) -> Result<RegistrationDescriptor>;
}

impl<F> Application for F
where
    F: Fn(&AppConfig) -> Result<RegistrationDescriptor> + Send + Sync,
{
    fn register(&self, config: &AppConfig) -> Result<RegistrationDescriptor> {
        self(config)
    }
}

// ============================================================================
// App - 실행 가능한 애플리케이션
// ============================================================================

/// 실행 가능한 애플리케이션
///
/// `run`은 필수 메서드입니다. 구현하지 않으면 컴파일되지 않습니다.
#[async_trait]
pub trait App: Send + Sync {
    /// 애플리케이션 코어
    fn core(&self) -> &AppCore;

    /// 애플리케이션 코어 (mutable)
    fn core_mut(&mut self) -> &mut AppCore;

    /// 메인 실행
    async fn run(&mut self) -> Result<AppResult>;
}
