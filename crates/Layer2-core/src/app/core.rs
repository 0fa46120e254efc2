//! AppCore - 데이터 접근과 번역을 가진 애플리케이션 코어
//!
//! 실제 실행 로직은 [`super::App`]을 구현하는 타입이 제공합니다.

use super::command::ExecutableCommand;
use appdock_foundation::{DataSource, FetchOptions, Result, Translator};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// 기본 로케일
pub const DEFAULT_LOCALE: &str = "uk";

/// 기본 i18n 문서 경로 (`{{locale}}` 치환)
pub const DEFAULT_I18N_PATH: &str = "/i18n/{{locale}}.json";

/// 지원 언어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

fn default_langs() -> IndexMap<String, Language> {
    let mut langs = IndexMap::new();
    langs.insert(
        "en".to_string(),
        Language {
            id: "en".to_string(),
            icon: Some("🇬🇧".to_string()),
            locale: Some("en-GB".to_string()),
        },
    );
    langs
}

/// 애플리케이션 상태 스냅샷
#[derive(Debug, Clone)]
pub struct AppState {
    pub data: Value,
    /// 등록된 action 이름 (순서 유지)
    pub actions: Vec<String>,
    pub meta: Value,
    pub translator: Translator,
}

/// 애플리케이션 코어
pub struct AppCore {
    db: Arc<dyn DataSource>,
    pub title: String,
    pub uri: String,
    /// 2자 또는 5자 로케일 ("uk" | "uk-UA")
    pub locale: String,
    pub data: Value,
    pub actions: IndexMap<String, Arc<dyn ExecutableCommand>>,
    pub meta: Value,
    pub langs: IndexMap<String, Language>,
    translator: Translator,
    initialized: bool,
}

impl AppCore {
    /// 새 코어 생성
    pub fn new(db: Arc<dyn DataSource>) -> Self {
        Self {
            db,
            title: String::new(),
            uri: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
            data: Value::Object(Default::default()),
            actions: IndexMap::new(),
            meta: Value::Object(Default::default()),
            langs: default_langs(),
            translator: Translator::identity(),
            initialized: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_langs(mut self, langs: IndexMap<String, Language>) -> Self {
        self.langs = langs;
        self
    }

    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// action 추가 (이름은 action 키)
    pub fn with_action(mut self, name: impl Into<String>, command: Arc<dyn ExecutableCommand>) -> Self {
        self.actions.insert(name.into(), command);
        self
    }

    /// 공유 데이터 접근 capability
    pub fn db(&self) -> &Arc<dyn DataSource> {
        &self.db
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// 번역
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    /// 로케일 문서를 로드하여 번역기 설정
    ///
    /// `uk-UA` 문서가 없으면 `uk` 문서를 시도합니다. 둘 다 없으면 키를 그대로
    /// 돌려주는 번역기가 됩니다.
    pub async fn bootstrap_i18n(&mut self, path: &str) -> Result<()> {
        let uri = path.replace("{{locale}}", &self.locale);
        let mut document = self.fetch_optional(&uri).await?;

        if document.is_null() {
            if let Some((code, _country)) = self.locale.split_once('-') {
                let fallback = path.replace("{{locale}}", code);
                debug!("Locale document {} not found, trying {}", uri, fallback);
                document = self.fetch_optional(&fallback).await?;
            }
        }

        self.translator = Translator::new(document);
        debug!("Loaded {} translations for {}", self.translator.len(), self.locale);
        Ok(())
    }

    async fn fetch_optional(&self, uri: &str) -> Result<Value> {
        self.db
            .fetch(uri, FetchOptions::default().with_default(Value::Null))
            .await
    }

    /// 최초 1회 초기화. 처음이면 true, 이미 초기화됐으면 false
    pub async fn init(&mut self) -> Result<bool> {
        if self.initialized {
            return Ok(false);
        }
        self.bootstrap_i18n(DEFAULT_I18N_PATH).await?;
        self.initialized = true;
        Ok(true)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 현재 상태
    pub fn state(&self) -> AppState {
        AppState {
            data: self.data.clone(),
            actions: self.actions.keys().cloned().collect(),
            meta: self.meta.clone(),
            translator: self.translator.clone(),
        }
    }
}
