//! Apps Configuration - 선언적 애플리케이션 목록
//!
//! ```json
//! {
//!   "apps": {
//!     "@appdock/auth.app": { "enabled": true, "api": { "prefix": "auth2" } },
//!     "status.app": { "enabled": false }
//!   }
//! }
//! ```
//!
//! 목록의 순서가 곧 통합(integration) 순서입니다.

use crate::storage::JsonStore;
use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 애플리케이션 목록 파일명
pub const APPS_FILE: &str = "apps.json";

// ============================================================================
// AppConfig - 애플리케이션별 설정
// ============================================================================

/// 애플리케이션별 설정 (`enabled` + 애플리케이션 고유 오버라이드)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 활성화 여부 (없거나 falsy면 비활성)
    #[serde(default, deserialize_with = "truthy")]
    pub enabled: bool,

    /// 나머지 키 전부 (애플리케이션의 `register`에 그대로 전달)
    #[serde(flatten)]
    pub overrides: Map<String, Value>,
}

impl AppConfig {
    /// 활성화된 빈 설정
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            overrides: Map::new(),
        }
    }

    /// 비활성 stub (`add` 명령이 기록하는 형태)
    pub fn stub() -> Self {
        Self::default()
    }

    /// 오버라이드 추가
    pub fn with_override(mut self, key: impl Into<String>, value: Value) -> Self {
        self.overrides.insert(key.into(), value);
        self
    }

    /// 최상위 오버라이드 조회
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.overrides.get(key)
    }

    /// 점 경로 조회 (예: `api.prefix`)
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.overrides.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// 점 경로 문자열 조회
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`는 false
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// 항목 하나가 잘못되어도 목록 전체는 읽힘
///
/// 객체가 아닌 항목(`"yes"`, `null` 등)은 비활성 항목으로 취급합니다.
fn lenient_apps<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, AppConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        Value::Null => return Ok(IndexMap::new()),
        other => {
            warn!("\"apps\" must be an object, ignoring {}", other);
            return Ok(IndexMap::new());
        }
    };

    let mut apps = IndexMap::with_capacity(entries.len());
    for (id, value) in entries {
        let config = match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Invalid entry for {}: {}, treating as disabled", id, e);
                AppConfig::stub()
            }),
            other => {
                warn!("Entry for {} is not an object ({}), treating as disabled", id, other);
                AppConfig::stub()
            }
        };
        apps.insert(id, config);
    }
    Ok(apps)
}

// ============================================================================
// AppsConfig - apps.json 구조
// ============================================================================

/// apps.json 파일 구조
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppsConfig {
    /// 패키지 식별자 -> 설정 (순서 유지)
    #[serde(default, deserialize_with = "lenient_apps")]
    pub apps: IndexMap<String, AppConfig>,

    /// 알 수 없는 최상위 키 (저장 시 보존)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장소에서 로드 (파일이 없으면 빈 목록)
    pub fn load(store: &JsonStore) -> Result<Self> {
        match store.load_optional::<Self>(APPS_FILE)? {
            Some(config) => {
                debug!("Loaded {} app entries from {}", config.apps.len(), APPS_FILE);
                Ok(config)
            }
            None => {
                debug!("{} not found in {:?}, using empty list", APPS_FILE, store.base_dir());
                Ok(Self::default())
            }
        }
    }

    /// 저장소에 저장
    pub fn save(&self, store: &JsonStore) -> Result<()> {
        store.save(APPS_FILE, self)
    }

    /// 애플리케이션 추가 (builder)
    pub fn with_app(mut self, id: impl Into<String>, config: AppConfig) -> Self {
        self.apps.insert(id.into(), config);
        self
    }

    /// 비활성 stub 추가. 이미 있으면 건드리지 않고 false 반환
    pub fn add_stub(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.apps.contains_key(&id) {
            return false;
        }
        self.apps.insert(id, AppConfig::stub());
        true
    }

    pub fn get(&self, id: &str) -> Option<&AppConfig> {
        self.apps.get(id)
    }

    /// 활성화된 애플리케이션 (설정 순서대로)
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &AppConfig)> {
        self.apps.iter().filter(|(_, config)| config.enabled)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
