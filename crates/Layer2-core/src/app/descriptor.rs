//! Registration Descriptor - 애플리케이션이 원하는 네임스페이스와 콜백
//!
//! 애플리케이션은 등록을 "설명"만 합니다. 공유 레지스트리에 직접 쓰지 않습니다.

use crate::app::AppResult;
use crate::registry::{api_setup, cli_setup, ui_loader, ApiSetup, CliSetup, UiLoader};
use crate::system::Router;
use appdock_foundation::Result;
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// API 도메인 요청
#[derive(Clone)]
pub struct ApiDescriptor {
    /// URL prefix (예: "auth")
    pub prefix: String,
    pub setup: ApiSetup,
}

/// CLI 도메인 요청
#[derive(Clone)]
pub struct CliDescriptor {
    /// 명령어 이름 (예: "auth")
    pub command: String,
    pub setup: CliSetup,
}

/// UI 도메인 요청
#[derive(Clone)]
pub struct UiDescriptor {
    /// 컴포넌트 네임스페이스 (예: "Auth")
    pub namespace: String,
    pub loader: UiLoader,
}

/// 등록 descriptor (최대 세 개의 선택적 도메인)
#[derive(Clone, Default)]
pub struct RegistrationDescriptor {
    pub api: Option<ApiDescriptor>,
    pub cli: Option<CliDescriptor>,
    pub ui: Option<UiDescriptor>,
}

impl RegistrationDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// API prefix 요청
    pub fn with_api<F>(mut self, prefix: impl Into<String>, setup: F) -> Self
    where
        F: Fn(&mut Router) -> Result<()> + Send + Sync + 'static,
    {
        self.api = Some(ApiDescriptor {
            prefix: prefix.into(),
            setup: api_setup(setup),
        });
        self
    }

    /// CLI 명령어 요청
    pub fn with_cli<F>(mut self, command: impl Into<String>, setup: F) -> Self
    where
        F: Fn(&[String]) -> Result<AppResult> + Send + Sync + 'static,
    {
        self.cli = Some(CliDescriptor {
            command: command.into(),
            setup: cli_setup(setup),
        });
        self
    }

    /// UI 네임스페이스 요청
    pub fn with_ui<F, Fut>(mut self, namespace: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.ui = Some(UiDescriptor {
            namespace: namespace.into(),
            loader: ui_loader(loader),
        });
        self
    }

    /// 요청한 도메인이 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.api.is_none() && self.cli.is_none() && self.ui.is_none()
    }

    /// 형식 검사 - 요청한 도메인의 키는 비어 있으면 안 됨
    pub fn ensure_well_formed(&self) -> std::result::Result<(), String> {
        if let Some(api) = &self.api {
            if api.prefix.trim().is_empty() {
                return Err("api.prefix is empty".to_string());
            }
        }
        if let Some(cli) = &self.cli {
            if cli.command.trim().is_empty() {
                return Err("cli.command is empty".to_string());
            }
        }
        if let Some(ui) = &self.ui {
            if ui.namespace.trim().is_empty() {
                return Err("ui.namespace is empty".to_string());
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RegistrationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDescriptor")
            .field("api", &self.api.as_ref().map(|a| &a.prefix))
            .field("cli", &self.cli.as_ref().map(|c| &c.command))
            .field("ui", &self.ui.as_ref().map(|u| &u.namespace))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_domains() {
        let descriptor = RegistrationDescriptor::new()
            .with_api("auth", |_router| Ok(()))
            .with_cli("auth", |_args| Ok(AppResult::from("ok")))
            .with_ui("Auth", || async { Ok(json!({})) });

        assert_eq!(descriptor.api.as_ref().map(|a| a.prefix.as_str()), Some("auth"));
        assert_eq!(descriptor.cli.as_ref().map(|c| c.command.as_str()), Some("auth"));
        assert_eq!(descriptor.ui.as_ref().map(|u| u.namespace.as_str()), Some("Auth"));
        assert!(!descriptor.is_empty());
        assert!(descriptor.ensure_well_formed().is_ok());
    }

    #[test]
    fn test_empty_key_is_malformed() {
        let descriptor = RegistrationDescriptor::new().with_cli("  ", |_args| Ok(AppResult::from("")));
        assert_eq!(
            descriptor.ensure_well_formed(),
            Err("cli.command is empty".to_string())
        );
    }

    #[test]
    fn test_debug_lists_keys() {
        let descriptor = RegistrationDescriptor::new().with_api("blog", |_router| Ok(()));
        let debug = format!("{:?}", descriptor);
        assert!(debug.contains("blog"));
        assert!(RegistrationDescriptor::new().is_empty());
    }
}
