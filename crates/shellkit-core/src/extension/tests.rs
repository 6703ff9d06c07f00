use super::*;
use crate::argument::{Argument, ArgumentOptions, handler_fn};
use crate::error::ShellError;
use crate::registry::Registry;
use crate::wizard::Completion;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Registers its commands, then optionally fails
struct TestExtension {
    name: &'static str,
    commands: Vec<&'static str>,
    fail_register: bool,
    fail_unregister: bool,
    log: Arc<Mutex<Vec<String>>>,
}

impl TestExtension {
    fn new(name: &'static str, commands: &[&'static str], log: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            commands: commands.to_vec(),
            fail_register: false,
            fail_unregister: false,
            log: Arc::clone(log),
        }
    }
}

#[async_trait]
impl Extension for TestExtension {
    fn name(&self) -> &str {
        self.name
    }

    async fn register(&self, surface: &mut Registrar<'_>) -> ShellResult<()> {
        for command in &self.commands {
            surface.command(
                command,
                format!("{} from {}", command, self.name),
                ArgumentOptions::default(),
                handler_fn(|_| async { Ok(Completion::Done) }),
            )?;
        }
        if self.fail_register {
            return Err(ShellError::other("backend unavailable"));
        }
        Ok(())
    }

    async fn unregister(&self) -> ShellResult<()> {
        self.log.lock().push(self.name.to_string());
        if self.fail_unregister {
            return Err(ShellError::other("busy"));
        }
        Ok(())
    }
}

struct BadOption;

#[async_trait]
impl Extension for BadOption {
    fn name(&self) -> &str {
        "bad-option"
    }

    async fn register(&self, surface: &mut Registrar<'_>) -> ShellResult<()> {
        surface
            .command(
                "ok",
                "fine",
                ArgumentOptions::default(),
                handler_fn(|_| async { Ok(Completion::Done) }),
            )?
            .option(
                "level",
                "not allowed",
                ArgumentOptions::default().optional("n"),
                handler_fn(|_| async { Ok(Completion::Done) }),
            )?;
        Ok(())
    }
}

#[tokio::test]
async fn test_register_adds_arguments() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    host.register(
        Box::new(TestExtension::new("ops", &["start", "stop"], &log)),
        &mut registry,
    )
    .await
    .unwrap();

    assert!(registry.contains("start"));
    assert!(registry.contains("stop"));
    assert_eq!(host.names(), vec!["ops"]);
}

#[tokio::test]
async fn test_failed_registration_rolls_back() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    host.register(
        Box::new(TestExtension::new("base", &["status"], &log)),
        &mut registry,
    )
    .await
    .unwrap();

    let mut failing = TestExtension::new("broken", &["status", "deploy"], &log);
    failing.fail_register = true;
    let err = host.register(Box::new(failing), &mut registry).await.unwrap_err();

    assert_eq!(err.error_code(), "SHELL_EXTENSION_REGISTER");
    assert!(!registry.contains("deploy"));
    assert_eq!(
        registry.get("status").unwrap().description(),
        "status from base"
    );
    assert_eq!(host.names(), vec!["base"]);
}

#[tokio::test]
async fn test_invalid_option_fails_before_insertion() {
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    let err = host
        .register(Box::new(BadOption), &mut registry)
        .await
        .unwrap_err();

    assert_eq!(err, ShellError::invalid_option("level"));
    assert!(!registry.contains("level"));
    assert!(!registry.contains("ok"));
    assert!(host.is_empty());
}

#[tokio::test]
async fn test_unregister_runs_in_order_and_removes_arguments() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    for (name, commands) in [("first", &["a"][..]), ("second", &["b"][..])] {
        host.register(Box::new(TestExtension::new(name, commands, &log)), &mut registry)
            .await
            .unwrap();
    }

    host.unregister_all(&mut registry).await.unwrap();

    assert_eq!(*log.lock(), vec!["first", "second"]);
    assert!(registry.is_empty());
    assert!(host.is_empty());
}

#[tokio::test]
async fn test_unregister_stops_at_first_failure() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    let mut stuck = TestExtension::new("stuck", &["a"], &log);
    stuck.fail_unregister = true;
    host.register(Box::new(stuck), &mut registry).await.unwrap();
    host.register(Box::new(TestExtension::new("later", &["b"], &log)), &mut registry)
        .await
        .unwrap();

    let err = host.unregister_all(&mut registry).await.unwrap_err();

    assert_eq!(err, ShellError::shutdown("stuck", "Error: busy"));
    assert_eq!(*log.lock(), vec!["stuck"]);
    assert_eq!(host.len(), 2);
    assert!(registry.contains("b"));
}

fn description_of(registry: &Registry, name: &str) -> Option<String> {
    registry.get(name).map(|a| a.description())
}

#[tokio::test]
async fn test_unregister_keeps_entry_shadowed_by_active_extension() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    let mut host = ExtensionHost::new();

    host.register(Box::new(TestExtension::new("a", &["foo"], &log)), &mut registry)
        .await
        .unwrap();
    let mut b = TestExtension::new("b", &["foo"], &log);
    b.fail_unregister = true;
    host.register(Box::new(b), &mut registry).await.unwrap();

    let err = host.unregister_all(&mut registry).await.unwrap_err();

    assert_eq!(err, ShellError::shutdown("b", "Error: busy"));
    assert_eq!(host.names(), vec!["b"]);
    assert_eq!(description_of(&registry, "foo").as_deref(), Some("foo from b"));
}

#[tokio::test]
async fn test_unregister_restores_host_entry() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    registry.add(
        "help",
        Argument::command(
            "list of commands",
            ArgumentOptions::default(),
            handler_fn(|_| async { Ok(Completion::Done) }),
        ),
    );
    let mut host = ExtensionHost::new();

    host.register(Box::new(TestExtension::new("custom", &["help"], &log)), &mut registry)
        .await
        .unwrap();
    assert_eq!(description_of(&registry, "help").as_deref(), Some("help from custom"));

    host.unregister_all(&mut registry).await.unwrap();

    assert_eq!(description_of(&registry, "help").as_deref(), Some("list of commands"));
}

#[tokio::test]
async fn test_stacked_overrides_unwind_to_host_entry() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    registry.add(
        "foo",
        Argument::command(
            "base foo",
            ArgumentOptions::default(),
            handler_fn(|_| async { Ok(Completion::Done) }),
        ),
    );
    let mut host = ExtensionHost::new();

    for name in ["a", "b"] {
        host.register(Box::new(TestExtension::new(name, &["foo"], &log)), &mut registry)
            .await
            .unwrap();
    }

    host.unregister_all(&mut registry).await.unwrap();

    assert_eq!(*log.lock(), vec!["a", "b"]);
    assert_eq!(description_of(&registry, "foo").as_deref(), Some("base foo"));
    assert_eq!(registry.len(), 1);
}
