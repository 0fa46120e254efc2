//! Integrator - 선언적 목록으로 애플리케이션을 검증하고 등록
//!
//! ```text
//! apps.json ──▶ resolve(id) ──▶ Validator.validate() ──┬─ clean ──▶ commit (owner = id)
//!                                                      └─ 충돌  ──▶ 보고 후 건너뜀
//! ```
//!
//! 한 애플리케이션을 끝까지 처리한 뒤 다음으로 넘어갑니다. 한 통합 패스 안에서
//! 먼저 커밋된 애플리케이션이 키를 가집니다.

use super::bootstrap::Bootstrap;
use super::resolver::AppResolver;
use super::validator::{CollisionReport, Validator};
use crate::app::{Application, RegistrationDescriptor};
use crate::registry::{ApiRegistry, CliRegistry, RegistryEntry, UiRegistry};
use appdock_foundation::{AppConfig, AppsConfig, Error, JsonStore, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

// ============================================================================
// IntegrationReport
// ============================================================================

/// 통합 패스 결과
#[derive(Debug, Default)]
pub struct IntegrationReport {
    /// 등록된 애플리케이션 (처리 순서)
    pub registered: Vec<String>,
    /// 비활성이라 건너뛴 애플리케이션
    pub disabled: Vec<String>,
    /// 충돌로 거부된 애플리케이션
    pub conflicts: Vec<(String, CollisionReport)>,
    /// 해석/등록 실패
    pub failures: Vec<(String, String)>,
}

impl IntegrationReport {
    /// 충돌과 실패가 하나도 없는지
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.failures.is_empty()
    }

    /// 특정 애플리케이션의 충돌 보고서
    pub fn conflicts_for(&self, id: &str) -> Option<&CollisionReport> {
        self.conflicts
            .iter()
            .find(|(app, _)| app == id)
            .map(|(_, report)| report)
    }
}

// ============================================================================
// Integrator
// ============================================================================

/// 통합기 - 세 레지스트리와 그에 묶인 Validator를 소유
pub struct Integrator {
    api: Arc<ApiRegistry>,
    cli: Arc<CliRegistry>,
    ui: Arc<UiRegistry>,
    validator: Validator,
    resolver: Arc<dyn AppResolver>,
    store: Option<JsonStore>,
    /// 통합 패스 직렬화
    pass_lock: Mutex<()>,
}

impl Integrator {
    /// 빈 레지스트리로 생성
    pub fn new(resolver: Arc<dyn AppResolver>) -> Self {
        let api = Arc::new(ApiRegistry::api());
        let cli = Arc::new(CliRegistry::cli());
        let ui = Arc::new(UiRegistry::ui());
        let validator = Validator::new(Arc::clone(&api), Arc::clone(&cli), Arc::clone(&ui));

        Self {
            api,
            cli,
            ui,
            validator,
            resolver,
            store: None,
            pass_lock: Mutex::new(()),
        }
    }

    /// apps.json을 읽을 저장소 설정
    pub fn with_store(mut self, store: JsonStore) -> Self {
        self.store = Some(store);
        self
    }

    /// 저장소의 apps.json으로 통합 패스 실행
    pub async fn register_all(&self) -> Result<IntegrationReport> {
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| Error::Config("No configuration store set".to_string()))?;
        let config = AppsConfig::load(store)?;
        Ok(self.register_apps(&config).await)
    }

    /// 주어진 목록으로 통합 패스 실행
    ///
    /// 애플리케이션 하나의 충돌이나 실패는 그 애플리케이션만 건너뛰고,
    /// 이미 커밋된 등록은 되돌리지 않습니다.
    pub async fn register_apps(&self, config: &AppsConfig) -> IntegrationReport {
        let _pass = self.pass_lock.lock().await;
        let mut report = IntegrationReport::default();

        info!("Integrating {} applications", config.len());

        for (id, app_config) in &config.apps {
            if !app_config.enabled {
                debug!("Skipping disabled application {}", id);
                report.disabled.push(id.clone());
                continue;
            }

            match self.integrate(id, app_config).await {
                Ok(collisions) if collisions.is_empty() => {
                    info!("Registered application {}", id);
                    report.registered.push(id.clone());
                }
                Ok(collisions) => {
                    for message in collisions.messages() {
                        error!("Conflict in {}: {}", id, message);
                    }
                    warn!("Application {} was not registered", id);
                    report.conflicts.push((id.clone(), collisions));
                }
                Err(e) => {
                    error!("Failed to integrate {}: {}", id, e);
                    report.failures.push((id.clone(), e.to_string()));
                }
            }
        }

        info!(
            "Integration finished: {} registered, {} disabled, {} conflicts, {} failures",
            report.registered.len(),
            report.disabled.len(),
            report.conflicts.len(),
            report.failures.len()
        );
        report
    }

    /// 애플리케이션 하나 처리 (resolve → validate → commit)
    ///
    /// 충돌 보고서가 비어 있으면 커밋된 것입니다.
    async fn integrate(&self, id: &str, config: &AppConfig) -> Result<CollisionReport> {
        let app = self.resolver.resolve(id).await?;

        let collisions = self
            .validator
            .validate(app.as_ref(), config)
            .map_err(|e| per_app_error(id, e))?;
        if !collisions.is_empty() {
            return Ok(collisions);
        }

        // descriptor는 매번 새로 만든다
        let descriptor = fresh_descriptor(id, app.as_ref(), config)?;
        let collisions = self.validator.check(&descriptor);
        if collisions.is_empty() {
            self.commit(id, descriptor);
        }
        Ok(collisions)
    }

    fn commit(&self, owner: &str, descriptor: RegistrationDescriptor) {
        let RegistrationDescriptor { api, cli, ui } = descriptor;

        if let Some(api) = api {
            self.api
                .register(api.prefix, RegistryEntry::new(owner, api.setup));
        }
        if let Some(cli) = cli {
            self.cli
                .register(cli.command, RegistryEntry::new(owner, cli.setup));
        }
        if let Some(ui) = ui {
            self.ui
                .register(ui.namespace, RegistryEntry::new(owner, ui.loader));
        }
    }

    pub fn api_registry(&self) -> &Arc<ApiRegistry> {
        &self.api
    }

    pub fn cli_registry(&self) -> &Arc<CliRegistry> {
        &self.cli
    }

    pub fn ui_registry(&self) -> &Arc<UiRegistry> {
        &self.ui
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// 현재 레지스트리로 API 라우터와 CLI 프로세서 구성
    pub fn bootstrap(&self) -> Result<Bootstrap> {
        Bootstrap::from_registries(&self.api, &self.cli)
    }
}

fn fresh_descriptor(
    id: &str,
    app: &dyn Application,
    config: &AppConfig,
) -> Result<RegistrationDescriptor> {
    let descriptor = app.register(config).map_err(|e| per_app_error(id, e))?;
    descriptor
        .ensure_well_formed()
        .map_err(|message| Error::descriptor(id, message))?;
    Ok(descriptor)
}

/// 애플리케이션 등록 중 에러를 해당 애플리케이션의 에러로 변환
fn per_app_error(id: &str, e: Error) -> Error {
    match e {
        e if e.is_per_app() => e,
        Error::Validation(message) => Error::descriptor(id, message),
        other => Error::descriptor(id, other.to_string()),
    }
}
