//! AppShell - 애플리케이션 action을 대화형 루프에 연결
//!
//! ```text
//! App.core().actions ──▶ CommandProtocol ──▶ InteractiveLoop.register()
//!                                                    │
//!                                              run_loop()
//! ```

use super::command::CommandProtocol;
use super::traits::App;
use appdock_foundation::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

// ============================================================================
// InteractiveLoop - 대화형 루프 capability
// ============================================================================

/// 대화형 명령 루프
#[async_trait]
pub trait InteractiveLoop: Send {
    /// 명령 단위 등록
    fn register(&mut self, unit: CommandProtocol);

    /// 세션이 끝날 때까지 실행
    async fn run_loop(&mut self) -> Result<()>;
}

// ============================================================================
// AppShell
// ============================================================================

/// 애플리케이션 셸
pub struct AppShell<A: App, L: InteractiveLoop> {
    app: A,
    interface: L,
}

impl<A: App, L: InteractiveLoop> AppShell<A, L> {
    pub fn new(app: A, interface: L) -> Self {
        Self { app, interface }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn interface(&self) -> &L {
        &self.interface
    }

    /// 모든 action을 루프에 등록하고 루프 실행
    pub async fn run(&mut self) -> Result<()> {
        let core = self.app.core();
        for (name, command) in &core.actions {
            debug!("Registering action {}", name);
            self.interface
                .register(CommandProtocol::new(name.clone(), command.clone(), core.db().clone()));
        }
        info!("Shell started with {} actions", core.actions.len());

        self.interface.run_loop().await
    }
}

// ============================================================================
// StdioLoop - 줄 단위 대화형 루프
// ============================================================================

/// 줄 단위 대화형 루프 (`<command> args...`)
///
/// `exit`, `quit` 또는 EOF에서 종료합니다. `help`는 등록된 명령어를 나열합니다.
pub struct StdioLoop<R, W> {
    reader: R,
    writer: W,
    prompt: String,
    units: IndexMap<String, CommandProtocol>,
}

impl StdioLoop<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// 표준 입출력 루프
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> StdioLoop<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: "> ".to_string(),
            units: IndexMap::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// 등록된 명령어 이름
    pub fn commands(&self) -> Vec<String> {
        self.units.keys().cloned().collect()
    }

    /// writer 반환 (테스트에서 출력 확인용)
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    async fn help(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .units
            .values()
            .map(|unit| format!("  {:<12} {}", unit.name(), unit.description()))
            .collect();
        for line in lines {
            self.write_line(&line).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<R, W> InteractiveLoop for StdioLoop<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn register(&mut self, unit: CommandProtocol) {
        self.units.insert(unit.name().to_string(), unit);
    }

    async fn run_loop(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            self.writer.write_all(self.prompt.as_bytes()).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                break;
            }

            let mut parts = line.split_whitespace().map(str::to_string);
            let Some(name) = parts.next() else {
                continue;
            };
            let args: Vec<String> = parts.collect();

            match name.as_str() {
                "exit" | "quit" => break,
                "help" => self.help().await?,
                _ => match self.units.get(&name).cloned() {
                    Some(unit) => match unit.run(&args).await {
                        Ok(result) => {
                            for content in &result.content {
                                self.write_line(content).await?;
                            }
                        }
                        Err(e) => {
                            warn!("Command {} failed: {}", name, e);
                            self.write_line(&format!("Error: {}", e)).await?;
                        }
                    },
                    None => {
                        self.write_line(&format!("Unknown command: {}", name)).await?;
                    }
                },
            }
        }
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppCore, AppResult, SimpleCommand};
    use appdock_foundation::{Error, MemoryDb};
    use std::sync::Arc;

    struct TestApp {
        core: AppCore,
    }

    #[async_trait]
    impl App for TestApp {
        fn core(&self) -> &AppCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut AppCore {
            &mut self.core
        }

        async fn run(&mut self) -> Result<AppResult> {
            self.core.init().await?;
            Ok(AppResult::from("ran"))
        }
    }

    fn test_app() -> TestApp {
        let core = AppCore::new(Arc::new(MemoryDb::new()))
            .with_action(
                "cmd1",
                Arc::new(SimpleCommand::new("cmd1", |_| Ok(AppResult::from("one")))),
            )
            .with_action(
                "cmd2",
                Arc::new(SimpleCommand::new("cmd2", |args| {
                    Ok(AppResult::from(format!("two {}", args.join(","))))
                })),
            )
            .with_action(
                "fail",
                Arc::new(SimpleCommand::new("fail", |_| Err(Error::command("fail", "boom")))),
            );
        TestApp { core }
    }

    #[derive(Default)]
    struct MockLoop {
        registered: Vec<String>,
        loop_called: bool,
    }

    #[async_trait]
    impl InteractiveLoop for MockLoop {
        fn register(&mut self, unit: CommandProtocol) {
            self.registered.push(unit.name().to_string());
        }

        async fn run_loop(&mut self) -> Result<()> {
            self.loop_called = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_registers_actions_and_starts_loop() {
        let mut shell = AppShell::new(test_app(), MockLoop::default());
        shell.run().await.unwrap();

        assert!(shell.interface().loop_called);
        assert_eq!(shell.interface().registered, vec!["cmd1", "cmd2", "fail"]);
    }

    #[tokio::test]
    async fn test_app_run_is_required() {
        let mut app = test_app();
        let result = app.run().await.unwrap();
        assert_eq!(result.content, vec!["ran"]);
        assert!(app.core().is_initialized());
    }

    #[tokio::test]
    async fn test_stdio_loop_dispatch() {
        let input: &[u8] = b"cmd1\n\ncmd2 a b\nnope\nfail\nquit\ncmd1\n";
        let stdio = StdioLoop::new(input, Vec::new()).with_prompt("");
        let mut shell = AppShell::new(test_app(), stdio);

        shell.run().await.unwrap();

        let AppShell { interface, .. } = shell;
        assert_eq!(interface.commands(), vec!["cmd1", "cmd2", "fail"]);
        let output = String::from_utf8(interface.into_writer()).unwrap();
        assert_eq!(
            output,
            "one\ntwo a,b\nUnknown command: nope\nError: Command failed: fail - boom\n"
        );
    }

    #[tokio::test]
    async fn test_stdio_loop_stops_on_eof() {
        let input: &[u8] = b"help\n";
        let mut stdio = StdioLoop::new(input, Vec::new()).with_prompt("");
        stdio.register(CommandProtocol::new(
            "cmd1",
            Arc::new(SimpleCommand::new("cmd1", |_| Ok(AppResult::from("one"))).with_description("first")),
            Arc::new(MemoryDb::new()),
        ));

        stdio.run_loop().await.unwrap();

        let output = String::from_utf8(stdio.into_writer()).unwrap();
        assert!(output.contains("cmd1"));
        assert!(output.contains("first"));
    }
}
