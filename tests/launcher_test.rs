//! End-to-end tests driving a shell through the launcher

use async_trait::async_trait;
use parking_lot::Mutex;
use shellkit::{
    Answers, ArgumentOptions, Completion, Extension, Question, Registrar, ScriptStep,
    ScriptedPrompter, Shell, ShellConfig, ShellError, ShellResult, WizardStep, handler_fn,
};
use std::sync::Arc;

type Log = Arc<Mutex<Vec<String>>>;

/// Mirrors a small real-world extension: two greeting commands, a wizard
/// and an option
struct Greeter {
    log: Log,
}

#[async_trait]
impl Extension for Greeter {
    fn name(&self) -> &str {
        "greeter"
    }

    async fn register(&self, surface: &mut Registrar<'_>) -> ShellResult<()> {
        let log = Arc::clone(&self.log);
        surface.command(
            "test0",
            "",
            ArgumentOptions::default().required("arg"),
            handler_fn(move |args| {
                log.lock().push(format!("test0 {}", args.join(",")));
                async { Ok(Completion::Done) }
            }),
        )?;

        let log = Arc::clone(&self.log);
        surface.command(
            "test1",
            "",
            ArgumentOptions::default().required("arg"),
            handler_fn(move |args| {
                log.lock().push(format!("test1 {}", args.join(",")));
                async { Ok(Completion::Done) }
            }),
        )?;

        let log = Arc::clone(&self.log);
        surface.command(
            "wizard",
            "begins a wizard",
            ArgumentOptions::default().wizard(),
            handler_fn(move |_| {
                let log = Arc::clone(&log);
                async move {
                    Ok(Completion::wizard(
                        vec![Question::input("zog", "tell zog")],
                        move |answers| {
                            let answer = answers.get("zog").unwrap_or_default().to_string();
                            let done = answer == "zog";
                            log.lock().push(format!("zog {answer}"));
                            WizardStep::from(done)
                        },
                    ))
                }
            }),
        )?;

        let log = Arc::clone(&self.log);
        surface.option(
            "verbose",
            "log more",
            ArgumentOptions::default(),
            handler_fn(move |_| {
                log.lock().push("verbose".to_string());
                async { Ok(Completion::Done) }
            }),
        )?;
        Ok(())
    }

    async fn unregister(&self) -> ShellResult<()> {
        self.log.lock().push("unregistered".to_string());
        Ok(())
    }
}

struct Broken;

#[async_trait]
impl Extension for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    async fn register(&self, _surface: &mut Registrar<'_>) -> ShellResult<()> {
        Err(ShellError::other("no backend"))
    }
}

async fn greeter_shell() -> (Shell, Log) {
    let log: Log = Arc::default();
    let mut shell = Shell::new(ShellConfig::default().with_prompt("orc>"));
    shell
        .register_extension(Box::new(Greeter {
            log: Arc::clone(&log),
        }))
        .await
        .unwrap();
    (shell, log)
}

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("orc")
        .chain(args.iter().copied())
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_one_shot_command_runs_and_exits() {
    let (mut shell, log) = greeter_shell().await;
    let mut prompter = ScriptedPrompter::default();

    let code = shell.launch(&argv(&["test0", "the argument"]), &mut prompter).await;

    assert_eq!(code, 0);
    assert!(prompter.prompts.is_empty());
    assert_eq!(*log.lock(), ["test0 the argument", "unregistered"]);
}

#[tokio::test]
async fn test_one_shot_missing_argument_exits_one() {
    let (mut shell, log) = greeter_shell().await;
    let mut prompter = ScriptedPrompter::default();

    let code = shell.launch(&argv(&["test1"]), &mut prompter).await;

    assert_eq!(code, 1);
    assert!(prompter.printed("missing required argument <arg>"));
    assert_eq!(*log.lock(), ["unregistered"]);
}

#[tokio::test]
async fn test_one_shot_unknown_command() {
    let (mut shell, _log) = greeter_shell().await;
    let mut prompter = ScriptedPrompter::default();

    let code = shell.launch(&argv(&["bogus"]), &mut prompter).await;

    assert_ne!(code, 0);
    assert!(prompter.printed("unknown"));
}

#[tokio::test]
async fn test_option_then_command() {
    let (mut shell, log) = greeter_shell().await;
    let mut prompter = ScriptedPrompter::default();

    let code = shell
        .launch(&argv(&["--verbose", "test0", "x", "dropped"]), &mut prompter)
        .await;

    assert_eq!(code, 0);
    assert_eq!(*log.lock(), ["verbose", "test0 x", "unregistered"]);
}

#[tokio::test]
async fn test_interactive_session() {
    let (mut shell, log) = greeter_shell().await;
    let mut prompter = ScriptedPrompter::new([
        ScriptStep::Line("test0".into()),
        ScriptStep::Line("test0 a b".into()),
        ScriptStep::Line("verbose".into()),
        ScriptStep::Line("wizard".into()),
        ScriptStep::Answers(Answers::from_iter([("zog", "lok")])),
        ScriptStep::Answers(Answers::from_iter([("zog", "zog")])),
        ScriptStep::Line("help".into()),
        ScriptStep::Line("exit".into()),
    ]);

    let code = shell.launch(&argv(&[]), &mut prompter).await;

    assert_eq!(code, 0);
    assert!(prompter.prompts.iter().all(|p| p == "orc>"));
    assert!(prompter.printed("missing required argument <arg>"));
    assert!(prompter.printed("verbose is not a command"));
    assert!(prompter.printed(" wizard"));
    assert_eq!(prompter.asked.len(), 2);
    assert_eq!(
        *log.lock(),
        ["test0 a", "zog lok", "zog zog", "unregistered"]
    );
    assert_eq!(shell.history().len(), 6);
}

#[tokio::test]
async fn test_failed_registration_leaves_registry_untouched() {
    let (mut shell, _log) = greeter_shell().await;
    let before = shell.registry().len();

    let err = shell.register_extension(Box::new(Broken)).await.unwrap_err();

    assert_eq!(err, ShellError::registration("broken", "Error: no backend"));
    assert_eq!(shell.registry().len(), before);
    assert_eq!(shell.extensions().names(), ["greeter"]);
}
