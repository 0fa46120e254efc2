//! Registry Entry - 레지스트리 항목 정의

use crate::app::AppResult;
use crate::system::Router;
use appdock_foundation::Result;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

// ============================================================================
// Setup 콜백 타입
// ============================================================================

/// API setup - `/<prefix>` 아래에 라우트를 마운트
pub type ApiSetup = Arc<dyn Fn(&mut Router) -> Result<()> + Send + Sync>;

/// CLI setup - 명령어 인자를 받아 실행
pub type CliSetup = Arc<dyn Fn(&[String]) -> Result<AppResult> + Send + Sync>;

/// UI loader - UI 컴포넌트 설명을 지연 로드
pub type UiLoader = Arc<dyn Fn() -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// 클로저로 [`ApiSetup`] 생성
pub fn api_setup<F>(f: F) -> ApiSetup
where
    F: Fn(&mut Router) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 클로저로 [`CliSetup`] 생성
pub fn cli_setup<F>(f: F) -> CliSetup
where
    F: Fn(&[String]) -> Result<AppResult> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// async 클로저로 [`UiLoader`] 생성
pub fn ui_loader<F, Fut>(f: F) -> UiLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

// ============================================================================
// RegistryEntry - 레지스트리 항목
// ============================================================================

/// 레지스트리 항목 - 소유자와 setup 콜백을 함께 보관
pub struct RegistryEntry<C> {
    /// 키를 점유한 애플리케이션 식별자
    pub owner: String,

    /// 소유 애플리케이션이 제공한 콜백
    pub setup: C,
}

impl<C> RegistryEntry<C> {
    /// 새 항목 생성
    pub fn new(owner: impl Into<String>, setup: C) -> Self {
        Self {
            owner: owner.into(),
            setup,
        }
    }

    /// 소유자 반환
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl<C: Clone> Clone for RegistryEntry<C> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            setup: self.setup.clone(),
        }
    }
}

impl<C> fmt::Debug for RegistryEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}
