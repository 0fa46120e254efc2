//! # Application
//!
//! 애플리케이션 측 인터페이스
//!
//! - `Application`: 등록 entry point (`register(config) -> RegistrationDescriptor`)
//! - `App` + `AppCore`: 실행 가능한 애플리케이션 (데이터 접근, 번역, action)
//! - `AppShell`: action을 대화형 루프에 연결
//! - `AppSource`: `add` 명령의 식별자 분류
//!
//! ## 예시
//!
//! ```ignore
//! struct BlogApp;
//!
//! impl Application for BlogApp {
//!     fn register(&self, config: &AppConfig) -> Result<RegistrationDescriptor> {
//!         let prefix = config.get_str("api.prefix").unwrap_or("blog").to_string();
//!         Ok(RegistrationDescriptor::new()
//!             .with_api(prefix, |router| {
//!                 router.route("/posts", "List posts");
//!                 Ok(())
//!             })
//!             .with_cli("blog", |args| Ok(AppResult::from(args.join(" ")))))
//!     }
//! }
//! ```

mod command;
mod core;
mod descriptor;
mod result;
mod shell;
mod source;
mod traits;

pub use self::core::{AppCore, AppState, Language, DEFAULT_I18N_PATH, DEFAULT_LOCALE};
pub use command::{CommandProtocol, ExecutableCommand, SimpleCommand};
pub use descriptor::{ApiDescriptor, CliDescriptor, RegistrationDescriptor, UiDescriptor};
pub use result::AppResult;
pub use shell::{AppShell, InteractiveLoop, StdioLoop};
pub use source::AppSource;
pub use traits::{App, Application};
