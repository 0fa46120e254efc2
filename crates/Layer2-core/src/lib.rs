//! appdock-core: 네임스페이스 충돌 없는 애플리케이션 등록
//!
//! Layer2 - 레지스트리, 검증, 통합 레이어
//!
//! # 주요 모듈
//!
//! - `registry`: API/CLI/UI 네임스페이스 레지스트리 (덮어쓰기만 하는 저장소)
//! - `system`: Validator, Integrator, 부트스트랩
//! - `app`: 애플리케이션 인터페이스 (`Application`, `App`, `AppCore`, `AppShell`)
//!
//! # 사용 예시
//!
//! ```ignore
//! use appdock_core::{Integrator, StaticResolver};
//! use appdock_foundation::JsonStore;
//!
//! let resolver = StaticResolver::new().with_app("@acme/auth.app", auth_register);
//! let integrator = Integrator::new(Arc::new(resolver))
//!     .with_store(JsonStore::current_project()?);
//!
//! let report = integrator.register_all().await?;
//! let bootstrap = integrator.bootstrap()?;
//! bootstrap.processor.dispatch(&args)?;
//! ```

pub mod app;
pub mod registry;
pub mod system;

// Re-exports: Application
pub use app::{
    App, AppCore, AppResult, AppShell, AppSource, AppState, Application, CommandProtocol,
    ExecutableCommand, InteractiveLoop, RegistrationDescriptor, SimpleCommand, StdioLoop,
};

// Re-exports: Registry
pub use registry::{
    api_setup, cli_setup, ui_loader, ApiRegistry, ApiSetup, CliRegistry, CliSetup,
    NamespaceRegistry, RegistryEntry, UiLoader, UiRegistry,
};

// Re-exports: System
pub use system::{
    start_api, AppResolver, Bootstrap, Collision, CollisionReport, CommandProcessor,
    IntegrationReport, Integrator, Router, StaticResolver, Validator,
};
