//! Resolver - 애플리케이션 식별자를 등록 entry point로 해석
//!
//! 각 식별자는 관례상 `<identifier>/src/register` entry point를 가집니다.
//! 통합기는 이 capability를 주입받으므로 새 애플리케이션을 추가해도
//! 통합기 코드를 바꿀 필요가 없습니다.

use crate::app::Application;
use appdock_foundation::{Error, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// 등록 entry point 상대 경로
pub const REGISTER_ENTRY: &str = "src/register";

/// 식별자의 entry point 경로
pub fn entry_point(identifier: &str) -> String {
    format!("{}/{}", identifier.trim_end_matches('/'), REGISTER_ENTRY)
}

/// 애플리케이션 해석 capability
#[async_trait]
pub trait AppResolver: Send + Sync {
    /// 식별자의 등록 entry point 로드
    async fn resolve(&self, identifier: &str) -> Result<Arc<dyn Application>>;
}

/// 컴파일 시점에 링크된 애플리케이션 테이블
#[derive(Default, Clone)]
pub struct StaticResolver {
    entries: IndexMap<String, Arc<dyn Application>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 애플리케이션 추가 (builder)
    pub fn with_app(mut self, identifier: impl Into<String>, app: impl Application + 'static) -> Self {
        self.provide(identifier, Arc::new(app));
        self
    }

    /// 애플리케이션 추가
    pub fn provide(&mut self, identifier: impl Into<String>, app: Arc<dyn Application>) {
        let identifier = identifier.into();
        debug!("Providing entry point {}", entry_point(&identifier));
        self.entries.insert(identifier, app);
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[async_trait]
impl AppResolver for StaticResolver {
    async fn resolve(&self, identifier: &str) -> Result<Arc<dyn Application>> {
        self.entries.get(identifier).cloned().ok_or_else(|| {
            Error::resolution(
                identifier,
                format!("entry point {} not found", entry_point(identifier)),
            )
        })
    }
}
