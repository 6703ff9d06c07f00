//! Demo extension shipped with the `shellkit` binary

use async_trait::async_trait;
use colored::*;
use parking_lot::Mutex;
use shellkit_core::error::{ShellError, ShellResult};
use shellkit_core::prompt::Question;
use shellkit_core::{ArgumentOptions, Completion, Extension, Registrar, WizardStep, handler_fn};
use std::sync::Arc;

#[derive(Debug)]
struct DemoState {
    greeting: String,
    running: bool,
}

/// Greeting, wizard and a small `ops` scope
pub struct DemoExtension {
    state: Arc<Mutex<DemoState>>,
}

impl DemoExtension {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DemoState {
                greeting: "Hello".to_string(),
                running: false,
            })),
        }
    }
}

impl Default for DemoExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for DemoExtension {
    fn name(&self) -> &str {
        "demo"
    }

    async fn register(&self, surface: &mut Registrar<'_>) -> ShellResult<()> {
        let state = Arc::clone(&self.state);
        surface.command(
            "hello",
            "print a greeting",
            ArgumentOptions::default().required("who"),
            handler_fn(move |args| {
                let greeting = state.lock().greeting.clone();
                async move {
                    println!("{}, {}", greeting, args.join(" "));
                    Ok(Completion::Done)
                }
            }),
        )?;

        let state = Arc::clone(&self.state);
        surface.option(
            "greeting",
            "change the greeting used by hello",
            ArgumentOptions::default().required("text"),
            handler_fn(move |args| {
                if let Some(text) = args.into_iter().next() {
                    state.lock().greeting = text;
                }
                async { Ok(Completion::Done) }
            }),
        )?;

        surface.command(
            "wizard",
            "begins a wizard",
            ArgumentOptions::default().wizard(),
            handler_fn(|_| async {
                Ok(Completion::wizard(
                    vec![Question::input("zog", "tell zog")],
                    |answers| {
                        if answers.get("zog") == Some("zog") {
                            println!("{}", "zog zog".green());
                            WizardStep::Done
                        } else {
                            println!("{}", "lokthar?".yellow());
                            WizardStep::Repeat
                        }
                    },
                ))
            }),
        )?;

        self.register_ops(surface)
    }

    async fn unregister(&self) -> ShellResult<()> {
        let mut state = self.state.lock();
        if state.running {
            tracing::debug!("stopping demo service on shutdown");
            state.running = false;
        }
        Ok(())
    }
}

impl DemoExtension {
    fn register_ops(&self, surface: &mut Registrar<'_>) -> ShellResult<()> {
        let ops = || ArgumentOptions::default().scope("ops");

        let state = Arc::clone(&self.state);
        surface.command(
            "start",
            "start the service",
            ops(),
            handler_fn(move |_| {
                let result = {
                    let mut state = state.lock();
                    if state.running {
                        Err(ShellError::other("service already running"))
                    } else {
                        state.running = true;
                        Ok(Completion::Done)
                    }
                };
                async move { result }
            }),
        )?;

        let state = Arc::clone(&self.state);
        surface.command(
            "stop",
            "stop the service",
            ops(),
            handler_fn(move |_| {
                state.lock().running = false;
                async { Ok(Completion::Done) }
            }),
        )?;

        let state = Arc::clone(&self.state);
        surface.command(
            "status",
            "show the service status",
            ops(),
            handler_fn(move |_| {
                let running = state.lock().running;
                async move {
                    let status = if running { "running".green() } else { "stopped".red() };
                    println!("service {status}");
                    Ok(Completion::Done)
                }
            }),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellkit_core::{Answers, ScriptStep, ScriptedPrompter, Shell};

    async fn demo_shell() -> Shell {
        let mut shell = Shell::default();
        shell
            .register_extension(Box::new(DemoExtension::new()))
            .await
            .unwrap();
        shell
    }

    #[tokio::test]
    async fn test_ops_scope() {
        let mut shell = demo_shell().await;
        let mut prompter = ScriptedPrompter::lines(["start", "scope ops", "start", "start", "exit"]);

        shell.run(&mut prompter).await.unwrap();

        assert!(prompter.printed("start is not a command"));
        assert!(prompter.printed("start failed: service already running"));
        assert_eq!(prompter.prompts.last().map(String::as_str), Some("ops >"));
    }

    #[tokio::test]
    async fn test_wizard_until_zog() {
        let mut shell = demo_shell().await;
        let mut prompter = ScriptedPrompter::new([
            ScriptStep::Line("wizard".into()),
            ScriptStep::Answers(Answers::from_iter([("zog", "lok")])),
            ScriptStep::Answers(Answers::from_iter([("zog", "zog")])),
            ScriptStep::Eof,
        ]);

        shell.run(&mut prompter).await.unwrap();

        assert_eq!(prompter.asked.len(), 2);
    }

    #[tokio::test]
    async fn test_greeting_option_one_shot() {
        let mut shell = demo_shell().await;
        let mut prompter = ScriptedPrompter::default();
        let argv: Vec<String> = ["shellkit", "--greeting", "Hi", "hello", "John"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(shell.launch(&argv, &mut prompter).await, 0);
        assert!(shell.extensions().is_empty());
        assert!(!shell.registry().contains("hello"));
    }
}
