//! Validator - 등록 전 네임스페이스 충돌 검사
//!
//! 레지스트리는 무조건 덮어쓰는 저장소이고, 충돌 정책은 여기에만 있습니다.
//! 검사는 레지스트리를 읽기만 합니다.

use crate::app::{Application, RegistrationDescriptor};
use crate::registry::{ApiRegistry, CliRegistry, UiRegistry};
use appdock_foundation::{AppConfig, Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Collision / CollisionReport
// ============================================================================

/// 검출된 충돌 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// API prefix가 이미 사용 중
    Api { prefix: String, owner: Option<String> },
    /// CLI 명령어가 이미 사용 중
    Cli { command: String, owner: Option<String> },
    /// UI 네임스페이스 아래에 이미 컴포넌트가 있음
    Ui {
        namespace: String,
        /// (컴포넌트 키, 소유자)
        components: Vec<(String, Option<String>)>,
    },
}

impl Collision {
    /// 충돌한 키
    pub fn key(&self) -> &str {
        match self {
            Collision::Api { prefix, .. } => prefix,
            Collision::Cli { command, .. } => command,
            Collision::Ui { namespace, .. } => namespace,
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Collision::Api { .. } => "api",
            Collision::Cli { .. } => "cli",
            Collision::Ui { .. } => "ui",
        }
    }
}

fn owner_or_unknown(owner: &Option<String>) -> &str {
    owner.as_deref().unwrap_or("unknown")
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Api { prefix, owner } => {
                write!(f, "API prefix \"{}\" used by {}", prefix, owner_or_unknown(owner))
            }
            Collision::Cli { command, owner } => {
                write!(f, "CLI command \"{}\" used by {}", command, owner_or_unknown(owner))
            }
            Collision::Ui {
                namespace,
                components,
            } => {
                let components: Vec<String> = components
                    .iter()
                    .map(|(key, owner)| format!("{} ({})", key, owner_or_unknown(owner)))
                    .collect();
                write!(
                    f,
                    "UI namespace \"{}.*\" already has registered components ({})",
                    namespace,
                    components.join(", ")
                )
            }
        }
    }
}

/// 충돌 보고서. 비어 있으면 등록해도 안전
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    collisions: Vec<Collision>,
}

impl CollisionReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, collision: Collision) {
        self.collisions.push(collision);
    }

    /// 사람이 읽을 수 있는 충돌 메시지 (검출 순서)
    pub fn messages(&self) -> Vec<String> {
        self.collisions.iter().map(ToString::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collision> {
        self.collisions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.collisions.len()
    }
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

// ============================================================================
// Validator
// ============================================================================

/// 충돌 검사기
pub struct Validator {
    api: Arc<ApiRegistry>,
    cli: Arc<CliRegistry>,
    ui: Arc<UiRegistry>,
}

impl Validator {
    /// 세 레지스트리에 묶인 검사기
    pub fn new(api: Arc<ApiRegistry>, cli: Arc<CliRegistry>, ui: Arc<UiRegistry>) -> Self {
        Self { api, cli, ui }
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// 애플리케이션의 descriptor를 만들고 충돌 검사
    ///
    /// 충돌은 에러가 아니라 보고서에 담깁니다. `register` 실패나 형식이 잘못된
    /// descriptor만 에러입니다.
    pub fn validate(&self, app: &dyn Application, config: &AppConfig) -> Result<CollisionReport> {
        let descriptor = app.register(config)?;
        descriptor.ensure_well_formed().map_err(Error::Validation)?;
        Ok(self.check(&descriptor))
    }

    /// 이미 만들어진 descriptor 검사
    pub fn check(&self, descriptor: &RegistrationDescriptor) -> CollisionReport {
        let mut report = CollisionReport::new();

        if let Some(api) = &descriptor.api {
            if self.api.has(&api.prefix) {
                report.push(Collision::Api {
                    prefix: api.prefix.clone(),
                    owner: self.api.get_owner(&api.prefix),
                });
            }
        }

        if let Some(cli) = &descriptor.cli {
            if self.cli.has(&cli.command) {
                report.push(Collision::Cli {
                    command: cli.command.clone(),
                    owner: self.cli.get_owner(&cli.command),
                });
            }
        }

        // UI는 정확한 키가 아니라 prefix 검색
        if let Some(ui) = &descriptor.ui {
            let components: Vec<(String, Option<String>)> = self
                .ui
                .find_components(&ui.namespace)
                .into_iter()
                .map(|key| {
                    let owner = self.ui.get_owner(&key);
                    (key, owner)
                })
                .collect();
            if !components.is_empty() {
                report.push(Collision::Ui {
                    namespace: ui.namespace.clone(),
                    components,
                });
            }
        }

        debug!("Validated {:?}: {} collisions", descriptor, report.len());
        report
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
}

/// Validator 빌더
///
/// API/CLI 레지스트리는 필수이고, UI 레지스트리는 없으면 빈 레지스트리를 씁니다.
#[derive(Default)]
pub struct ValidatorBuilder {
    api: Option<Arc<ApiRegistry>>,
    cli: Option<Arc<CliRegistry>>,
    ui: Option<Arc<UiRegistry>>,
}

impl ValidatorBuilder {
    pub fn api(mut self, registry: Arc<ApiRegistry>) -> Self {
        self.api = Some(registry);
        self
    }

    pub fn cli(mut self, registry: Arc<CliRegistry>) -> Self {
        self.cli = Some(registry);
        self
    }

    pub fn ui(mut self, registry: Arc<UiRegistry>) -> Self {
        self.ui = Some(registry);
        self
    }

    pub fn build(self) -> Result<Validator> {
        let api = self
            .api
            .ok_or_else(|| Error::Config("Validator requires an API registry".to_string()))?;
        let cli = self
            .cli
            .ok_or_else(|| Error::Config("Validator requires a CLI registry".to_string()))?;
        let ui = self.ui.unwrap_or_else(|| Arc::new(UiRegistry::ui()));
        Ok(Validator::new(api, cli, ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppResult;
    use crate::registry::{api_setup, cli_setup, ui_loader, RegistryEntry};
    use serde_json::json;

    fn validator() -> Validator {
        Validator::builder()
            .api(Arc::new(ApiRegistry::api()))
            .cli(Arc::new(CliRegistry::cli()))
            .build()
            .unwrap()
    }

    fn auth_app(_config: &AppConfig) -> Result<RegistrationDescriptor> {
        Ok(RegistrationDescriptor::new()
            .with_api("auth", |_router| Ok(()))
            .with_cli("auth", |_args| Ok(AppResult::from("auth"))))
    }

    #[test]
    fn test_builder_requires_api_and_cli() {
        let missing_api = Validator::builder().cli(Arc::new(CliRegistry::cli())).build();
        assert!(matches!(missing_api, Err(Error::Config(_))));

        let missing_cli = Validator::builder().api(Arc::new(ApiRegistry::api())).build();
        assert!(matches!(missing_cli, Err(Error::Config(_))));

        let validator = validator();
        assert!(validator.ui_registry().is_empty());
    }

    #[test]
    fn test_clean_report_on_empty_registries() {
        let report = validator().validate(&auth_app, &AppConfig::enabled()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_api_and_cli_collisions_name_owner() {
        let validator = validator();
        validator
            .api_registry()
            .register("auth", RegistryEntry::new("pkg-a", api_setup(|_r| Ok(()))));
        validator.cli_registry().register(
            "auth",
            RegistryEntry::new("pkg-a", cli_setup(|_args| Ok(AppResult::default()))),
        );

        let report = validator.validate(&auth_app, &AppConfig::enabled()).unwrap();
        assert_eq!(
            report.messages(),
            vec![
                "API prefix \"auth\" used by pkg-a".to_string(),
                "CLI command \"auth\" used by pkg-a".to_string(),
            ]
        );
        assert_eq!(report.iter().map(Collision::domain).collect::<Vec<_>>(), vec!["api", "cli"]);
    }

    #[test]
    fn test_validate_does_not_mutate_registries() {
        let validator = validator();
        validator.validate(&auth_app, &AppConfig::enabled()).unwrap();

        assert!(validator.api_registry().is_empty());
        assert!(validator.cli_registry().is_empty());
    }

    #[test]
    fn test_absent_domain_is_not_checked() {
        let validator = validator();
        validator
            .api_registry()
            .register("auth", RegistryEntry::new("pkg-a", api_setup(|_r| Ok(()))));

        let cli_only = |_config: &AppConfig| -> Result<RegistrationDescriptor> {
            Ok(RegistrationDescriptor::new().with_cli("login", |_args| Ok(AppResult::default())))
        };
        let report = validator.validate(&cli_only, &AppConfig::enabled()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_ui_collision_is_prefix_based() {
        let ui = Arc::new(UiRegistry::ui());
        ui.register(
            "Auth.LoginForm",
            RegistryEntry::new("pkg-a", ui_loader(|| async { Ok(json!({})) })),
        )
        .register(
            "Auth.Profile",
            RegistryEntry::new("pkg-b", ui_loader(|| async { Ok(json!({})) })),
        );
        let validator = Validator::builder()
            .api(Arc::new(ApiRegistry::api()))
            .cli(Arc::new(CliRegistry::cli()))
            .ui(ui)
            .build()
            .unwrap();

        let ui_app = |_config: &AppConfig| -> Result<RegistrationDescriptor> {
            Ok(RegistrationDescriptor::new().with_ui("Auth", || async { Ok(json!({})) }))
        };
        let report = validator.validate(&ui_app, &AppConfig::enabled()).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.messages()[0],
            "UI namespace \"Auth.*\" already has registered components \
             (Auth.LoginForm (pkg-a), Auth.Profile (pkg-b))"
        );
        match report.iter().next() {
            Some(Collision::Ui { components, .. }) => {
                assert_eq!(components[0], ("Auth.LoginForm".to_string(), Some("pkg-a".to_string())));
            }
            other => panic!("unexpected collision {:?}", other),
        }

        let other = |_config: &AppConfig| -> Result<RegistrationDescriptor> {
            Ok(RegistrationDescriptor::new().with_ui("Blog", || async { Ok(json!({})) }))
        };
        assert!(validator.validate(&other, &AppConfig::enabled()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_descriptor_is_error() {
        let bad = |_config: &AppConfig| -> Result<RegistrationDescriptor> {
            Ok(RegistrationDescriptor::new().with_api("", |_router| Ok(())))
        };
        let result = validator().validate(&bad, &AppConfig::enabled());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_unknown_owner_display() {
        let collision = Collision::Cli {
            command: "auth".into(),
            owner: None,
        };
        assert_eq!(collision.to_string(), "CLI command \"auth\" used by unknown");
        assert_eq!(collision.key(), "auth");
    }
}
