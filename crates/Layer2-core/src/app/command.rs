//! Executable commands and command protocol units

use super::result::AppResult;
use appdock_foundation::{DataSource, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument, Span};

// ============================================================================
// ExecutableCommand
// ============================================================================

/// 애플리케이션 action으로 노출되는 명령어
#[async_trait]
pub trait ExecutableCommand: Send + Sync {
    /// 명령어 이름
    fn name(&self) -> &str;

    /// 설명 (help 출력용)
    fn description(&self) -> &str {
        ""
    }

    /// 실행
    async fn execute(&self, args: &[String], db: &dyn DataSource) -> Result<AppResult>;
}

type CommandFn = dyn Fn(&[String]) -> Result<AppResult> + Send + Sync;

/// 클로저 기반 명령어
pub struct SimpleCommand {
    name: String,
    description: String,
    handler: Arc<CommandFn>,
}

impl SimpleCommand {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<AppResult> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[async_trait]
impl ExecutableCommand for SimpleCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, args: &[String], _db: &dyn DataSource) -> Result<AppResult> {
        (self.handler)(args)
    }
}

// ============================================================================
// CommandProtocol - 루프에 등록되는 단위
// ============================================================================

/// 명령어 + 공유 데이터 접근 + 로깅 span 묶음
#[derive(Clone)]
pub struct CommandProtocol {
    /// 루프에서 호출할 이름 (action 키)
    name: String,
    command: Arc<dyn ExecutableCommand>,
    db: Arc<dyn DataSource>,
    span: Span,
}

impl CommandProtocol {
    pub fn new(
        name: impl Into<String>,
        command: Arc<dyn ExecutableCommand>,
        db: Arc<dyn DataSource>,
    ) -> Self {
        let name = name.into();
        let span = info_span!("command", name = %name);
        Self {
            name,
            command,
            db,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        self.command.description()
    }

    /// 로깅 span
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// 명령어 실행
    pub async fn run(&self, args: &[String]) -> Result<AppResult> {
        async {
            debug!("Executing with {} args", args.len());
            self.command.execute(args, self.db.as_ref()).await
        }
        .instrument(self.span.clone())
        .await
    }
}
