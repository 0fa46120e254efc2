//! # System
//!
//! 등록 프로토콜과 부트스트랩
//!
//! - `Validator`: 레지스트리를 읽기만 하는 사전 충돌 검사
//! - `Integrator`: 목록 로드 → 해석 → 검증 → 커밋
//! - `AppResolver`: 식별자 → 등록 entry point
//! - `Bootstrap`: 통합된 레지스트리로 API 라우터와 CLI 프로세서 구성

mod bootstrap;
mod integrator;
mod resolver;
mod validator;

pub use bootstrap::{start_api, Bootstrap, CommandProcessor, Route, Router};
pub use integrator::{IntegrationReport, Integrator};
pub use resolver::{entry_point, AppResolver, StaticResolver, REGISTER_ENTRY};
pub use validator::{Collision, CollisionReport, Validator, ValidatorBuilder};
