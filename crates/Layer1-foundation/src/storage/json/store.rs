//! JSON 파일 저장소

use crate::storage::source::{DataSource, FetchOptions};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".appdock";

/// JSON 파일 저장소
///
/// `apps.json` 같은 설정 파일과 `i18n/*.json` 같은 리소스 문서를 같은 방식으로
/// 다룹니다. [`DataSource`]로도 사용할 수 있습니다.
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 프로젝트 설정 (.appdock/)
    pub fn project(root: impl Into<PathBuf>) -> Self {
        Self::new(root.into().join(CONFIG_DIR_NAME))
    }

    /// 현재 디렉토리 프로젝트 설정
    pub fn current_project() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::Config(format!("Cannot get current directory: {}", e)))?;
        Ok(Self::project(cwd))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 파일 경로 (선행 `/`는 base_dir 기준으로 해석)
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename.trim_start_matches('/'))
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
            }
        }
        Ok(())
    }

    /// JSON 로드
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.file_path(filename);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// JSON 로드 (Optional)
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.file_path(filename);
        if !path.exists() {
            return Ok(None);
        }
        self.load(filename).map(Some)
    }

    /// JSON 저장
    pub fn save<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        let path = self.file_path(filename);
        self.ensure_parent(&path)?;
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| Error::Config(format!("Failed to serialize: {}", e)))?;
        std::fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// 파일 존재 여부
    pub fn exists(&self, filename: &str) -> bool {
        self.file_path(filename).exists()
    }

    /// 파일 삭제
    pub fn remove(&self, filename: &str) -> Result<()> {
        let path = self.file_path(filename);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                Error::Config(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl DataSource for JsonStore {
    async fn fetch(&self, path: &str, options: FetchOptions) -> Result<Value> {
        // 문서는 base_dir 밖으로 나갈 수 없음
        if Path::new(path).components().any(|c| c == Component::ParentDir) {
            return Err(Error::InvalidInput(format!("Invalid document path {}", path)));
        }
        let file = self.file_path(path);
        if !tokio::fs::try_exists(&file).await? {
            debug!("Document {} not found under {:?}", path, self.base_dir);
            return options
                .default_value
                .ok_or_else(|| Error::NotFound(format!("Document {}", path)));
        }

        let content = tokio::fs::read_to_string(&file).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
