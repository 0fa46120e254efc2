//! # Namespace Registry System
//!
//! API 라우트, CLI 명령어, UI 컴포넌트 네임스페이스의 소유권 저장소
//!
//! ## 설계 원칙
//!
//! 1. **Dumb store**: 레지스트리는 충돌을 검사하지 않고 무조건 삽입/덮어쓰기
//! 2. **Policy 분리**: 충돌 검사는 `Validator`가 전담
//! 3. **Snapshot**: 조회 결과는 복사본 (별칭을 통한 상태 변경 불가)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                NamespaceRegistry<C>                          │
//! │  RwLock<IndexMap<String, RegistryEntry<C>>>                  │
//! │  ┌──────────────┬──────────────┬──────────────┐             │
//! │  │ "auth"       │ "blog"       │ ...          │             │
//! │  │ owner+setup  │ owner+setup  │              │             │
//! │  └──────────────┴──────────────┴──────────────┘             │
//! │                                                              │
//! │  ApiRegistry = NamespaceRegistry<ApiSetup>   (get_routes)    │
//! │  CliRegistry = NamespaceRegistry<CliSetup>   (get_commands)  │
//! │  UiRegistry  = NamespaceRegistry<UiLoader>   (find_components)│
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod entry;
mod namespace;

pub use entry::{api_setup, cli_setup, ui_loader, ApiSetup, CliSetup, RegistryEntry, UiLoader};
pub use namespace::{ApiRegistry, CliRegistry, NamespaceRegistry, UiRegistry};
