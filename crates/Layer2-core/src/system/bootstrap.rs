//! Bootstrap - 통합이 끝난 레지스트리로 API 라우터와 CLI 프로세서 구성

use crate::app::AppResult;
use crate::registry::{ApiRegistry, CliRegistry, CliSetup, RegistryEntry};
use appdock_foundation::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, info};

// ============================================================================
// Router - API 라우트 마운트 테이블
// ============================================================================

/// 마운트된 라우트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// 전체 경로 (`/<prefix>/<path>`)
    pub path: String,
    /// 라우트를 마운트한 애플리케이션
    pub owner: String,
    pub description: String,
}

/// API 라우터
///
/// `ApiSetup` 콜백은 현재 마운트 prefix 아래에 라우트를 추가합니다.
#[derive(Debug, Default)]
pub struct Router {
    prefix: String,
    owner: String,
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 prefix 아래에 라우트 추가
    pub fn route(&mut self, path: &str, description: impl Into<String>) -> &mut Self {
        let path = path.trim_matches('/');
        let full = if path.is_empty() {
            self.prefix.clone()
        } else {
            format!("{}/{}", self.prefix, path)
        };
        self.routes.push(Route {
            path: full,
            owner: self.owner.clone(),
            description: description.into(),
        });
        self
    }

    /// `/<prefix>` 아래에서 setup 실행
    pub fn mount<F>(&mut self, prefix: &str, owner: &str, setup: F) -> Result<()>
    where
        F: FnOnce(&mut Router) -> Result<()>,
    {
        self.prefix = format!("/{}", prefix.trim_matches('/'));
        self.owner = owner.to_string();
        let result = setup(self);
        debug!("Route mounted: {} ({})", self.prefix, owner);
        self.prefix.clear();
        self.owner.clear();
        result
    }

    /// 현재 마운트 prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// 경로로 라우트 찾기
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }
}

/// API 레지스트리의 모든 prefix를 등록 순서대로 마운트
pub fn start_api(registry: &ApiRegistry) -> Result<Router> {
    let mut router = Router::new();
    for (prefix, entry) in registry.get_routes() {
        router.mount(&prefix, &entry.owner, |r| (entry.setup)(r))?;
    }
    info!("API router ready with {} routes", router.routes().len());
    Ok(router)
}

// ============================================================================
// CommandProcessor - CLI 명령어 디스패치
// ============================================================================

/// CLI 명령어 프로세서
pub struct CommandProcessor {
    commands: IndexMap<String, RegistryEntry<CliSetup>>,
}

impl CommandProcessor {
    /// CLI 레지스트리 스냅샷으로 생성
    pub fn from_registry(registry: &CliRegistry) -> Self {
        let commands = registry.get_commands();
        info!("CLI processor started with {} commands", commands.len());
        Self { commands }
    }

    /// 명령어 이름 목록
    pub fn commands(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// 명령어 소유자
    pub fn owner(&self, command: &str) -> Option<&str> {
        self.commands.get(command).map(|entry| entry.owner())
    }

    /// `<command> args...` 실행
    pub fn dispatch(&self, args: &[String]) -> Result<AppResult> {
        let (command, rest) = args
            .split_first()
            .ok_or_else(|| Error::InvalidInput("No command given".to_string()))?;
        let entry = self
            .commands
            .get(command)
            .ok_or_else(|| Error::NotFound(format!("Command {}", command)))?;
        debug!("Dispatching {} to {}", command, entry.owner);
        (entry.setup)(rest)
    }
}

// ============================================================================
// Bootstrap
// ============================================================================

/// 통합 결과로 만든 서비스 구성
pub struct Bootstrap {
    pub router: Router,
    pub processor: CommandProcessor,
}

impl Bootstrap {
    pub fn from_registries(api: &ApiRegistry, cli: &CliRegistry) -> Result<Self> {
        Ok(Self {
            router: start_api(api)?,
            processor: CommandProcessor::from_registry(cli),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{api_setup, cli_setup};

    #[test]
    fn test_router_mount() {
        let mut router = Router::new();
        router
            .mount("auth", "pkg-a", |r| {
                r.route("/login", "Sign in").route("", "Index");
                Ok(())
            })
            .unwrap();

        assert_eq!(router.routes().len(), 2);
        let login = router.find("/auth/login").unwrap();
        assert_eq!(login.owner, "pkg-a");
        assert!(router.find("/auth").is_some());
        assert_eq!(router.prefix(), "");
    }

    #[test]
    fn test_start_api_in_registration_order() {
        let registry = ApiRegistry::api();
        registry
            .register(
                "blog",
                RegistryEntry::new(
                    "pkg-b",
                    api_setup(|r| {
                        r.route("posts", "Posts");
                        Ok(())
                    }),
                ),
            )
            .register(
                "auth",
                RegistryEntry::new(
                    "pkg-a",
                    api_setup(|r| {
                        r.route("login", "Login");
                        Ok(())
                    }),
                ),
            );

        let router = start_api(&registry).unwrap();
        let paths: Vec<_> = router.routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/blog/posts", "/auth/login"]);
    }

    #[test]
    fn test_start_api_propagates_setup_error() {
        let registry = ApiRegistry::api();
        registry.register(
            "bad",
            RegistryEntry::new("pkg-x", api_setup(|_r| Err(Error::Validation("nope".into())))),
        );
        assert!(start_api(&registry).is_err());
    }

    #[test]
    fn test_command_dispatch() {
        let registry = CliRegistry::cli();
        registry.register(
            "auth",
            RegistryEntry::new(
                "pkg-a",
                cli_setup(|args| Ok(AppResult::from(format!("auth {}", args.join(" "))))),
            ),
        );

        let processor = CommandProcessor::from_registry(&registry);
        let result = processor
            .dispatch(&["auth".to_string(), "login".to_string()])
            .unwrap();
        assert_eq!(result.content, vec!["auth login"]);
        assert_eq!(processor.owner("auth"), Some("pkg-a"));

        assert!(matches!(
            processor.dispatch(&["nope".to_string()]),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(processor.dispatch(&[]), Err(Error::InvalidInput(_))));
    }
}
