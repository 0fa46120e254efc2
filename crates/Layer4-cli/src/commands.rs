//! CLI 명령 구현

use crate::apps;
use anyhow::Context;
use appdock_core::{AppResult, AppSource, IntegrationReport, Integrator};
use appdock_foundation::{AppsConfig, JsonStore, APPS_FILE};
use std::sync::Arc;
use tracing::{debug, info};

/// `add` 결과
#[derive(Debug, PartialEq, Eq)]
pub enum Added {
    /// 새 stub 추가
    New(String),
    /// 이미 목록에 있음
    Existing(String),
}

/// 식별자를 패키지 이름으로 바꿔 비활성 stub으로 추가
pub fn add_app(store: &JsonStore, identifier: &str) -> anyhow::Result<Added> {
    let source = AppSource::parse(identifier);
    let name = source.package_name();
    anyhow::ensure!(!name.is_empty(), "Cannot derive a package name from {:?}", identifier);
    debug!("Adding {} source {} as {}", source.kind(), source, name);

    let mut config = AppsConfig::load(store)?;
    if !config.add_stub(name.clone()) {
        return Ok(Added::Existing(name));
    }
    config
        .save(store)
        .with_context(|| format!("Failed to write {}", store.file_path(APPS_FILE).display()))?;

    Ok(Added::New(name))
}

/// 설정된 애플리케이션 목록 (이름, 활성화 여부)
pub fn list_apps(store: &JsonStore) -> anyhow::Result<Vec<(String, bool)>> {
    let config = AppsConfig::load(store)?;
    Ok(config
        .apps
        .iter()
        .map(|(id, app)| (id.clone(), app.enabled))
        .collect())
}

/// 내장 resolver로 통합기 생성
pub fn integrator(store: JsonStore) -> Integrator {
    Integrator::new(Arc::new(apps::builtin_resolver())).with_store(store)
}

/// 통합 패스 실행
pub async fn setup(store: JsonStore) -> anyhow::Result<IntegrationReport> {
    let integrator = integrator(store);
    let report = integrator.register_all().await?;
    Ok(report)
}

/// 통합 후 CLI 명령 실행 (`exec <command> args...`)
pub async fn exec(store: JsonStore, args: &[String]) -> anyhow::Result<AppResult> {
    let integrator = integrator(store);
    integrator.register_all().await?;

    let bootstrap = integrator.bootstrap()?;
    info!("Available commands: {}", bootstrap.processor.commands().join(", "));
    let result = bootstrap.processor.dispatch(args)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdock_foundation::AppConfig;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_add_writes_disabled_stub() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());

        let added = add_app(&store, "https://github.com/acme/blog.app.git").unwrap();
        assert_eq!(added, Added::New("blog.app".to_string()));

        let again = add_app(&store, "./vendor/blog.app").unwrap();
        assert_eq!(again, Added::Existing("blog.app".to_string()));

        assert_eq!(list_apps(&store).unwrap(), vec![("blog.app".to_string(), false)]);
    }

    #[test]
    fn test_add_keeps_existing_entries() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        AppsConfig::new()
            .with_app(apps::AUTH_APP, AppConfig::enabled())
            .save(&store)
            .unwrap();

        add_app(&store, "@acme/shop.app").unwrap();

        let listed = list_apps(&store).unwrap();
        assert_eq!(
            listed,
            vec![
                (apps::AUTH_APP.to_string(), true),
                ("@acme/shop.app".to_string(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_setup_with_collision() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        store
            .save(
                APPS_FILE,
                &json!({
                    "apps": {
                        "@appdock/auth.app": { "enabled": true },
                        "@appdock/status.app": { "enabled": true, "cli": { "command": "auth" } },
                        "@acme/shop.app": { "enabled": false }
                    }
                }),
            )
            .unwrap();

        let report = setup(store).await.unwrap();
        assert_eq!(report.registered, vec![apps::AUTH_APP]);
        assert_eq!(report.disabled, vec!["@acme/shop.app"]);
        let messages = report.conflicts_for(apps::STATUS_APP).unwrap().messages();
        assert_eq!(messages, vec!["CLI command \"auth\" used by @appdock/auth.app"]);
    }

    #[tokio::test]
    async fn test_exec_dispatches_to_registered_command() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        AppsConfig::new()
            .with_app(apps::AUTH_APP, AppConfig::enabled())
            .with_app(apps::STATUS_APP, AppConfig::enabled())
            .save(&store)
            .unwrap();

        let args = vec!["auth".to_string(), "login".to_string(), "ada".to_string()];
        let result = exec(store.clone(), &args).await.unwrap();
        assert_eq!(result.content, vec!["Signed in as ada"]);

        let result = exec(store, &["status".to_string()]).await.unwrap();
        assert_eq!(result.content, vec!["ok"]);
    }

    #[tokio::test]
    async fn test_exec_unknown_command() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());

        let result = exec(store, &["nope".to_string()]).await;
        assert!(result.is_err());
    }
}
