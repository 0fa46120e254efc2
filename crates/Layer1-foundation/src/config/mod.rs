//! Config - 통합 설정 관리
//!
//! - `apps.rs` - 선언적 애플리케이션 목록 (apps.json)

mod apps;

pub use apps::{AppConfig, AppsConfig, APPS_FILE};
