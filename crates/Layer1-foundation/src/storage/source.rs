//! Data Source - 문서 단위 데이터 접근 인터페이스

use crate::{Error, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// `fetch` 옵션
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// 문서가 없을 때 에러 대신 반환할 값
    pub default_value: Option<Value>,
}

impl FetchOptions {
    /// 기본값 설정
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// 데이터 접근 capability
///
/// 애플리케이션 코어와 셸이 공유합니다. 로케일 문서 로드 등에 사용됩니다.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// 경로의 문서를 가져옵니다.
    ///
    /// 문서가 없으면 `options.default_value`를 반환하고, 기본값이 없으면
    /// [`Error::NotFound`]를 반환합니다.
    async fn fetch(&self, path: &str, options: FetchOptions) -> Result<Value>;
}

/// 메모리 기반 DataSource
#[derive(Debug, Default)]
pub struct MemoryDb {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// 문서 추가 (builder)
    pub fn with_document(self, path: impl Into<String>, value: Value) -> Self {
        self.insert(path, value);
        self
    }

    /// 문서 추가
    pub fn insert(&self, path: impl Into<String>, value: Value) {
        self.documents.write().insert(path.into(), value);
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl DataSource for MemoryDb {
    async fn fetch(&self, path: &str, options: FetchOptions) -> Result<Value> {
        if let Some(value) = self.documents.read().get(path) {
            return Ok(value.clone());
        }
        options
            .default_value
            .ok_or_else(|| Error::NotFound(format!("Document {}", path)))
    }
}
