//! Built-in applications
//!
//! 바이너리에 링크된 애플리케이션 테이블. `apps.json`의 식별자는 이 테이블로
//! 해석됩니다.

use appdock_core::{AppResult, RegistrationDescriptor, StaticResolver};
use appdock_foundation::{AppConfig, Error, Result};
use serde_json::json;

/// 인증 애플리케이션 식별자
pub const AUTH_APP: &str = "@appdock/auth.app";

/// 상태 애플리케이션 식별자
pub const STATUS_APP: &str = "@appdock/status.app";

/// 내장 애플리케이션 resolver
pub fn builtin_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_app(AUTH_APP, register_auth)
        .with_app(STATUS_APP, register_status)
}

/// 오버라이드: `api.prefix`, `cli.command`, `ui.namespace`
fn register_auth(config: &AppConfig) -> Result<RegistrationDescriptor> {
    let prefix = config.get_str("api.prefix").unwrap_or("auth").to_string();
    let command = config.get_str("cli.command").unwrap_or("auth").to_string();
    let namespace = config.get_str("ui.namespace").unwrap_or("Auth").to_string();

    Ok(RegistrationDescriptor::new()
        .with_api(prefix, |router| {
            router
                .route("/login", "Sign in")
                .route("/logout", "Sign out")
                .route("/me", "Current user");
            Ok(())
        })
        .with_cli(command, |args| match args.first().map(String::as_str) {
            Some("whoami") | None => Ok(AppResult::from("anonymous")),
            Some("login") => {
                let user = args
                    .get(1)
                    .ok_or_else(|| Error::InvalidInput("Usage: auth login <user>".to_string()))?;
                Ok(AppResult::from(format!("Signed in as {}", user)))
            }
            Some(other) => Err(Error::command("auth", format!("unknown subcommand {}", other))),
        })
        .with_ui(namespace, || async {
            Ok(json!({ "components": ["LoginForm", "LogoutButton"] }))
        }))
}

/// 오버라이드: `api.prefix`, `cli.command`
fn register_status(config: &AppConfig) -> Result<RegistrationDescriptor> {
    let prefix = config.get_str("api.prefix").unwrap_or("status").to_string();
    let command = config.get_str("cli.command").unwrap_or("status").to_string();

    Ok(RegistrationDescriptor::new()
        .with_api(prefix, |router| {
            router.route("/", "Health check");
            Ok(())
        })
        .with_cli(command, |_args| {
            Ok(AppResult::from("ok").with_meta(json!({ "version": env!("CARGO_PKG_VERSION") })))
        }))
}
