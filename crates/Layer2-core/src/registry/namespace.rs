//! Namespace Registry - 네임스페이스 키 -> 소유자 + setup 저장소
//!
//! 레지스트리는 충돌을 검사하지 않습니다. 같은 키로 다시 등록하면 조용히
//! 덮어씁니다. 충돌 정책은 [`crate::system::Validator`]가 담당합니다.

use super::entry::{ApiSetup, CliSetup, RegistryEntry, UiLoader};
use appdock_foundation::{Error, Result};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

/// 범용 네임스페이스 레지스트리 (삽입 순서 유지)
pub struct NamespaceRegistry<C> {
    /// 레지스트리 종류 (로그용: "api", "cli", "ui")
    kind: &'static str,

    /// 키 -> 항목
    entries: RwLock<IndexMap<String, RegistryEntry<C>>>,
}

/// API 라우트 prefix 레지스트리
pub type ApiRegistry = NamespaceRegistry<ApiSetup>;

/// CLI 명령어 레지스트리
pub type CliRegistry = NamespaceRegistry<CliSetup>;

/// UI 컴포넌트 레지스트리
pub type UiRegistry = NamespaceRegistry<UiLoader>;

impl<C: Clone> NamespaceRegistry<C> {
    /// 새 레지스트리 생성
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// 레지스트리 종류
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// 항목 등록 (무조건 삽입/덮어쓰기)
    pub fn register(&self, key: impl Into<String>, entry: RegistryEntry<C>) -> &Self {
        let key = key.into();
        let mut entries = self.entries.write();
        if let Some(previous) = entries.get(&key) {
            if previous.owner != entry.owner {
                debug!(
                    "{} registry: {} ownership replaced ({} -> {})",
                    self.kind, key, previous.owner, entry.owner
                );
            }
        }
        debug!("{} registry: {} registered by {}", self.kind, key, entry.owner);
        entries.insert(key, entry);
        self
    }

    /// 키 존재 여부
    pub fn has(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// 키 소유자 (진단 메시지용)
    pub fn get_owner(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).map(|entry| entry.owner.clone())
    }

    /// 항목 조회
    pub fn get(&self, key: &str) -> Option<RegistryEntry<C>> {
        self.entries.read().get(key).cloned()
    }

    /// 등록된 키 (삽입 순서)
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// 스냅샷 (복사본)
    pub fn snapshot(&self) -> IndexMap<String, RegistryEntry<C>> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

// ============================================================================
// 특수화
// ============================================================================

impl NamespaceRegistry<ApiSetup> {
    /// API 레지스트리 생성
    pub fn api() -> Self {
        Self::new("api")
    }

    /// 등록된 라우트 스냅샷
    pub fn get_routes(&self) -> IndexMap<String, RegistryEntry<ApiSetup>> {
        self.snapshot()
    }
}

impl NamespaceRegistry<CliSetup> {
    /// CLI 레지스트리 생성
    pub fn cli() -> Self {
        Self::new("cli")
    }

    /// 등록된 명령어 스냅샷
    pub fn get_commands(&self) -> IndexMap<String, RegistryEntry<CliSetup>> {
        self.snapshot()
    }
}

impl NamespaceRegistry<UiLoader> {
    /// UI 레지스트리 생성
    pub fn ui() -> Self {
        Self::new("ui")
    }

    /// 등록된 컴포넌트 스냅샷
    pub fn get_components(&self) -> IndexMap<String, RegistryEntry<UiLoader>> {
        self.snapshot()
    }

    /// 컴포넌트 loader 조회
    pub fn get_component(&self, name: &str) -> Option<UiLoader> {
        self.entries.read().get(name).map(|entry| entry.setup.clone())
    }

    /// prefix로 컴포넌트 이름 검색 (선형 스캔)
    pub fn find_components(&self, namespace: &str) -> Vec<String> {
        self.entries
            .read()
            .keys()
            .filter(|name| name.starts_with(namespace))
            .cloned()
            .collect()
    }

    /// 컴포넌트 로드
    pub async fn load_component(&self, name: &str) -> Result<Value> {
        let loader = self
            .get_component(name)
            .ok_or_else(|| Error::NotFound(format!("UI component {}", name)))?;
        loader().await
    }
}

impl Default for NamespaceRegistry<ApiSetup> {
    fn default() -> Self {
        Self::api()
    }
}

impl Default for NamespaceRegistry<CliSetup> {
    fn default() -> Self {
        Self::cli()
    }
}

impl Default for NamespaceRegistry<UiLoader> {
    fn default() -> Self {
        Self::ui()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppResult;
    use crate::registry::entry;
    use serde_json::json;

    fn cli_setup() -> CliSetup {
        entry::cli_setup(|_args| Ok(AppResult::from("ok")))
    }

    fn ui_loader(name: &'static str) -> UiLoader {
        entry::ui_loader(move || async move { Ok(json!({ "component": name })) })
    }

    #[test]
    fn test_has_before_and_after_register() {
        let registry = CliRegistry::cli();
        assert!(!registry.has("auth"));

        registry.register("auth", RegistryEntry::new("pkg-a", cli_setup()));
        assert!(registry.has("auth"));
        assert_eq!(registry.get_owner("auth"), Some("pkg-a".to_string()));
        assert_eq!(registry.get_owner("missing"), None);
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = CliRegistry::cli();
        let setup = cli_setup();

        registry
            .register("auth", RegistryEntry::new("pkg-a", setup.clone()))
            .register("auth", RegistryEntry::new("pkg-a", setup));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_owner("auth"), Some("pkg-a".to_string()));
    }

    #[test]
    fn test_overwrite_replaces_owner() {
        let registry = CliRegistry::cli();
        registry.register("auth", RegistryEntry::new("pkg-a", cli_setup()));
        registry.register("auth", RegistryEntry::new("pkg-b", cli_setup()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_owner("auth"), Some("pkg-b".to_string()));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let registry = CliRegistry::cli();
        registry.register("a", RegistryEntry::new("pkg-a", cli_setup()));

        let mut snapshot = registry.get_commands();
        snapshot.insert("b".into(), RegistryEntry::new("pkg-b", cli_setup()));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.len(), 1);
        assert!(!registry.has("b"));
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let registry = CliRegistry::cli();
        for key in ["zeta", "alpha", "mid"] {
            registry.register(key, RegistryEntry::new("pkg", cli_setup()));
        }
        assert_eq!(registry.keys(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_find_components_by_prefix() {
        let registry = UiRegistry::ui();
        registry.register("Auth.Login", RegistryEntry::new("pkg-a", ui_loader("login")));
        registry.register("Auth.Signup", RegistryEntry::new("pkg-a", ui_loader("signup")));
        registry.register("Blog.Post", RegistryEntry::new("pkg-b", ui_loader("post")));

        assert_eq!(registry.find_components("Auth"), vec!["Auth.Login", "Auth.Signup"]);
        assert!(registry.find_components("Shop").is_empty());
        assert!(registry.get_component("Blog.Post").is_some());
        assert!(registry.get_component("Blog").is_none());
    }

    #[tokio::test]
    async fn test_load_component() {
        let registry = UiRegistry::ui();
        registry.register("Auth.Login", RegistryEntry::new("pkg-a", ui_loader("login")));

        let component = registry.load_component("Auth.Login").await.unwrap();
        assert_eq!(component["component"], "login");

        assert!(matches!(
            registry.load_component("Auth.Missing").await,
            Err(Error::NotFound(_))
        ));
    }
}
